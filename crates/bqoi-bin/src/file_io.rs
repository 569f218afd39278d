/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use bqoi_codec::fs::FILE_BUFFER_SIZE;
use log::debug;

use crate::errors::CliErrors;

/// Read a file of little endian `f32` samples
pub fn read_f32_samples(path: &Path) -> Result<Vec<f32>, CliErrors> {
    let bytes = std::fs::read(path)?;

    if bytes.len() % 4 != 0 {
        return Err(CliErrors::GenericString(format!(
            "{:?} holds {} bytes, which is not a whole number of f32 samples",
            path,
            bytes.len()
        )));
    }
    debug!("Read {} float samples from {:?}", bytes.len() / 4, path);

    Ok(bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Read a file of 8 bit samples
pub fn read_u8_samples(path: &Path) -> Result<Vec<u8>, CliErrors> {
    let bytes = std::fs::read(path)?;
    debug!("Read {} samples from {:?}", bytes.len(), path);

    Ok(bytes)
}

/// Write decoded samples, replacing whatever was at `path`
pub fn write_samples(path: &Path, samples: &[u8]) -> Result<(), CliErrors> {
    let file: File = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    let mut writer = BufWriter::with_capacity(FILE_BUFFER_SIZE, file);
    writer.write_all(samples)?;
    writer.flush()?;

    debug!("Wrote {} samples to {:?}", samples.len(), path);
    Ok(())
}
