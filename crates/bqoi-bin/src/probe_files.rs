/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use bqoi_codec::QoiDecoder;
use bqoi_core::options::DecoderOptions;
use clap::ArgMatches;
use log::warn;

use crate::errors::CliErrors;
use crate::serde::Metadata;

/// Read the header of one file
pub fn probe_file(path: &Path) -> Result<Metadata, CliErrors> {
    let file = File::open(path)?;
    let size = file.metadata()?.len();

    // set to high to remove restrictions.
    // We'll just be reading headers so it doesn't matter
    let options = DecoderOptions::new_cmd()
        .set_max_height(usize::MAX)
        .set_max_width(usize::MAX);

    let mut decoder = QoiDecoder::new_with_options(BufReader::new(file), options);
    let descriptor = decoder.decode_headers()?;

    Ok(Metadata::new(path.as_os_str().to_os_string(), size, descriptor))
}

/// Probe input files, extract metadata, and print to standard output.
///
/// Files that cannot be read as qoi are reported and skipped
pub fn probe_input_files(args: &ArgMatches) -> Result<(), CliErrors> {
    let files = args
        .get_many::<PathBuf>("in")
        .ok_or("No input files to probe")?;

    for in_file in files {
        match probe_file(in_file) {
            Ok(metadata) => {
                println!("{}", serde_json::to_string_pretty(&metadata)?);
            }
            Err(reason) => {
                warn!("Skipping {:?}, reason {:?}", in_file, reason);
            }
        }
    }
    Ok(())
}
