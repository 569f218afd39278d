/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{stdin, BufRead};
use std::path::{Path, PathBuf};

use bqoi_codec::{decode_file, encode_to_file, ImageDescriptor};
use clap::ArgMatches;
use log::{debug, info};

use crate::cmd_args::arg_parsers::ICharacteristics;
use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::{read_f32_samples, read_u8_samples, write_samples};
use crate::probe_files::probe_input_files;

pub(crate) fn exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), CliErrors> {
    match args.subcommand() {
        Some(("encode", sub)) => encode_raw(sub, cmd_opts),
        Some(("decode", sub)) => decode_raw(sub, cmd_opts),
        Some(("probe", sub)) => probe_input_files(sub),
        _ => Err(CliErrors::Generic("No subcommand given"))
    }
}

fn input_output(args: &ArgMatches) -> Result<(&PathBuf, &PathBuf), CliErrors> {
    let in_file = args.get_one::<PathBuf>("in").ok_or("Missing input file")?;
    let out_file = args.get_one::<PathBuf>("out").ok_or("Missing output file")?;

    Ok((in_file, out_file))
}

fn encode_raw(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), CliErrors> {
    let (in_file, out_file) = input_output(args)?;
    verify_file_paths(in_file, out_file, cmd_opts)?;

    let width = *args.get_one::<u32>("width").ok_or("Missing width")?;
    let height = *args.get_one::<u32>("height").ok_or("Missing height")?;
    let channels = *args.get_one::<u8>("channels").ok_or("Missing channels")?;
    let characteristics = args
        .get_one::<ICharacteristics>("colorspace")
        .ok_or("Missing colorspace")?
        .to_characteristics();

    let descriptor = ImageDescriptor::from_host(
        width,
        height,
        usize::from(channels),
        characteristics.label()
    )?;

    info!(
        "Encoding {:?} as a {}x{} image with {} channels",
        in_file, width, height, channels
    );

    let written = if args.get_flag("float") {
        debug!("Treating {:?} as f32 samples", in_file);
        let samples = read_f32_samples(in_file)?;
        encode_to_file(out_file, &descriptor, &samples[..])?
    } else {
        let samples = read_u8_samples(in_file)?;
        encode_to_file(out_file, &descriptor, &samples[..])?
    };

    info!("Wrote {} bytes to {:?}", written, out_file);
    Ok(())
}

fn decode_raw(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), CliErrors> {
    let (in_file, out_file) = input_output(args)?;
    verify_file_paths(in_file, out_file, cmd_opts)?;

    let options = get_decoder_options(args);
    let (descriptor, pixels) = decode_file(in_file, options)?;

    info!(
        "Decoded {:?}: {}x{} with {} channels",
        in_file,
        descriptor.width(),
        descriptor.height(),
        descriptor.channels()
    );
    write_samples(out_file, &pixels)
}

fn verify_file_paths(p0: &Path, p1: &Path, cmd_opts: &CmdOptions) -> Result<(), CliErrors> {
    if p0 == p1 {
        return Err(CliErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            p0
        )));
    }

    if !p0.exists() {
        return Err(CliErrors::GenericString(format!(
            "Path {:?}, does not exist",
            p0
        )));
    }

    if !p0.is_file() {
        return Err(CliErrors::GenericString(format!(
            "Path {:?} is not a file",
            p0
        )));
    }

    if p1.exists() {
        if cmd_opts.override_files {
            info!("Overwriting path {:?} ", p1);
        } else {
            println!("File {:?} exists, overwrite [y/N]", p1);
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(CliErrors::GenericString(format!(
                    "Not overwriting file {:?}",
                    p1
                )));
            }
        }
    }
    Ok(())
}
