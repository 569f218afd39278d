/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use bqoi_codec::bqoi_core::bytestream::ByteCursor;
use bqoi_codec::bqoi_core::options::DecoderOptions;
use bqoi_codec::{
    decode, decode_with_options, encode, DescriptorError, ImageDescriptor, QoiDecoder, QoiErrors
};

fn valid_stream() -> Vec<u8> {
    let descriptor = ImageDescriptor::from_host(3, 2, 4, "sRGB").unwrap();
    let pixels: Vec<u8> = (0..24).map(|v| v * 10).collect();
    encode(&descriptor, &pixels[..]).unwrap()
}

#[test]
fn eof() {
    let mut decoder = QoiDecoder::new(ByteCursor::new([b'q', b'o', b'i']));

    let err = decoder.decode().unwrap_err();
    assert!(matches!(
        err,
        QoiErrors::TruncatedStream {
            remaining_pixels: None,
            ..
        }
    ));
}

#[test]
fn truncated_chunk_stream() {
    let stream = valid_stream();
    // keep the header and the first chunk only
    let err = decode(&stream[..19]).unwrap_err();

    assert!(matches!(
        err,
        QoiErrors::TruncatedStream {
            remaining_pixels: Some(5),
            ..
        }
    ));
}

#[test]
fn bad_magic() {
    let mut stream = valid_stream();
    stream[3] = b'g';

    assert!(matches!(
        decode(&stream).unwrap_err(),
        QoiErrors::WrongMagicBytes
    ));
}

#[test]
fn bad_channels() {
    let mut stream = valid_stream();
    stream[12] = 2;

    assert!(matches!(
        decode(&stream).unwrap_err(),
        QoiErrors::InvalidDescriptor(DescriptorError::UnknownChannels(2))
    ));
}

#[test]
fn bad_colorspace() {
    let mut stream = valid_stream();
    stream[13] = 7;

    assert!(matches!(
        decode(&stream).unwrap_err(),
        QoiErrors::InvalidDescriptor(DescriptorError::UnknownColorspace(7))
    ));
}

#[test]
fn zero_height() {
    let mut stream = valid_stream();
    stream[8..12].copy_from_slice(&[0, 0, 0, 0]);

    assert!(matches!(
        decode(&stream).unwrap_err(),
        QoiErrors::InvalidDescriptor(DescriptorError::ZeroDimension)
    ));
}

#[test]
fn over_long_run() {
    let mut stream = b"qoif".to_vec();
    stream.extend_from_slice(&[0, 0, 0, 4, 0, 0, 0, 1, 3, 0]);
    // run of 62 for a four pixel image
    stream.push(0xfd);

    assert!(matches!(
        decode(&stream).unwrap_err(),
        QoiErrors::CorruptChunk { offset: 14, .. }
    ));
}

#[test]
fn missing_end_marker() {
    let stream = valid_stream();
    let without_marker = &stream[..stream.len() - 8];

    let (_, lenient) = decode(without_marker).unwrap();
    let (_, full) = decode(&stream).unwrap();
    assert_eq!(lenient, full);

    let err = decode_with_options(without_marker, DecoderOptions::new_strict()).unwrap_err();
    assert!(matches!(err, QoiErrors::CorruptChunk { .. }));
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut stream = valid_stream();
    let (_, expected) = decode(&stream).unwrap();
    stream.extend_from_slice(b"garbage");

    let (_, pixels) = decode_with_options(&stream, DecoderOptions::new_strict()).unwrap();
    assert_eq!(pixels, expected);
}

#[test]
fn size_limits() {
    let stream = valid_stream();
    let options = DecoderOptions::default().set_max_height(1);

    assert!(matches!(
        decode_with_options(&stream, options).unwrap_err(),
        QoiErrors::LimitExceeded {
            dimension: "height",
            ..
        }
    ));
}

/// Every byte value is a valid chunk, arbitrary bodies either decode or
/// fail with one of the stream errors
#[test]
fn arbitrary_bodies() {
    for start in [0_u8, 1, 0x3f, 0x7f, 0xbe, 0xfe] {
        let mut stream = b"qoif".to_vec();
        stream.extend_from_slice(&[0, 0, 0, 16, 0, 0, 0, 16, 4, 0]);
        stream.extend((0..=255_u8).cycle().skip(usize::from(start)).take(2048));

        match decode(&stream) {
            Ok((descriptor, pixels)) => {
                assert_eq!((descriptor.width(), descriptor.height()), (16, 16));
                assert_eq!(pixels.len(), 16 * 16 * 4);
            }
            Err(err) => assert!(
                matches!(
                    err,
                    QoiErrors::TruncatedStream { .. } | QoiErrors::CorruptChunk { .. }
                ),
                "start {start}: {err:?}"
            )
        }
    }
}
