#![no_main]

use libfuzzer_sys::fuzz_target;

// The first two bytes pick the shape, the rest are the samples
fuzz_target!(|data: &[u8]| {
    use bqoi_codec::{decode, encode, ImageDescriptor};

    if data.len() < 2 {
        return;
    }
    let channels = if data[0] & 1 == 0 { 3 } else { 4 };
    let width = usize::from(data[1]).max(1);
    let samples = &data[2..];

    let height = samples.len() / (width * channels);
    if height == 0 {
        return;
    }
    let samples = &samples[..width * height * channels];

    let descriptor =
        ImageDescriptor::from_host(width as u32, height as u32, channels, "sRGB").unwrap();
    let stream = encode(&descriptor, samples).unwrap();
    let (header, pixels) = decode(&stream).unwrap();

    assert_eq!(header, descriptor);
    assert_eq!(pixels, samples);
});
