/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading and writing QOI files
#![cfg(feature = "std")]

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use bqoi_core::bytestream::ByteIoError;
use bqoi_core::log::debug;
use bqoi_core::options::DecoderOptions;

use crate::{ImageDescriptor, PixelSource, QoiDecoder, QoiEncodeErrors, QoiEncoder, QoiErrors};

/// Size of the write buffer placed in front of the output file
pub const FILE_BUFFER_SIZE: usize = 1 << 20;

/// Encode `pixels` into the file at `path`, creating or truncating it
///
/// Returns the number of bytes written. The file handle is released on
/// both success and error, a partially written file is left in place.
pub fn encode_to_file<P: AsRef<Path>, S: PixelSource + ?Sized>(
    path: P, descriptor: &ImageDescriptor, pixels: &S
) -> Result<usize, QoiEncodeErrors> {
    let path = path.as_ref();
    let file = File::create(path).map_err(ByteIoError::from)?;
    let mut writer = BufWriter::with_capacity(FILE_BUFFER_SIZE, file);

    let written = QoiEncoder::from_descriptor(pixels, descriptor).encode(&mut writer)?;

    debug!("Wrote {written} bytes to {}", path.display());

    Ok(written)
}

/// Decode the QOI file at `path`
pub fn decode_file<P: AsRef<Path>>(
    path: P, options: DecoderOptions
) -> Result<(ImageDescriptor, Vec<u8>), QoiErrors> {
    let path = path.as_ref();
    let file = File::open(path).map_err(ByteIoError::from)?;

    debug!("Decoding {}", path.display());

    let mut decoder = QoiDecoder::new_with_options(BufReader::new(file), options);
    let descriptor = decoder.decode_headers()?;
    let pixels = decoder.decode()?;

    Ok((descriptor, pixels))
}
