#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use bqoi_codec::bqoi_core::bytestream::ByteCursor;
    use bqoi_codec::bqoi_core::options::DecoderOptions;

    let opts = DecoderOptions::default()
        .set_max_width(1 << 12)
        .set_max_height(1 << 12);

    let mut decoder = bqoi_codec::QoiDecoder::new_with_options(ByteCursor::new(data), opts);
    let _ = decoder.decode();
});
