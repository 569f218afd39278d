/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::ICharacteristics;

pub mod arg_parsers;
mod help_strings;

fn input_arg() -> Arg {
    Arg::new("in")
        .short('i')
        .long("input")
        .help("Input file to read data from")
        .value_parser(value_parser!(PathBuf))
        .required(true)
}

fn output_arg() -> Arg {
    Arg::new("out")
        .short('o')
        .long("output")
        .help("Output to write the data to")
        .value_parser(value_parser!(PathBuf))
        .required(true)
}

#[rustfmt::skip]
fn encode_command() -> Command {
    Command::new("encode")
        .about("Encode raw interleaved samples into a qoi file")
        .after_help(help_strings::ENCODE_HELP)
        .arg(input_arg())
        .arg(output_arg())
        .arg(Arg::new("width")
            .long("width")
            .help("Image width in pixels")
            .value_parser(value_parser!(u32))
            .required(true))
        .arg(Arg::new("height")
            .long("height")
            .help("Image height in pixels")
            .value_parser(value_parser!(u32))
            .required(true))
        .arg(Arg::new("channels")
            .long("channels")
            .help("Samples per pixel, 3 for RGB and 4 for RGBA")
            .value_parser(value_parser!(u8).range(3..=4))
            .default_value("4"))
        .arg(Arg::new("colorspace")
            .long("colorspace")
            .help("How the samples should be interpreted")
            .value_parser(value_parser!(ICharacteristics))
            .default_value("srgb"))
        .arg(Arg::new("float")
            .long("float")
            .action(ArgAction::SetTrue)
            .help("Input samples are little endian f32 in [0,1] instead of bytes"))
}

#[rustfmt::skip]
fn decode_command() -> Command {
    Command::new("decode")
        .about("Decode a qoi file into raw interleaved samples")
        .after_help(help_strings::DECODE_HELP)
        .arg(input_arg())
        .arg(output_arg())
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help("Treat a missing or damaged end marker as an error"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images allowed")
            .value_parser(value_parser!(usize))
            .default_value(help_strings::MAX_DIMENSION))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images allowed")
            .value_parser(value_parser!(usize))
            .default_value(help_strings::MAX_DIMENSION))
}

#[rustfmt::skip]
fn probe_command() -> Command {
    Command::new("probe")
        .about("Print header information of qoi files as json")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Files to probe")
            .value_parser(value_parser!(PathBuf))
            .action(ArgAction::Append)
            .num_args(1..)
            .required(true))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("bqoi")
        .about("Encode, decode and inspect Quite OK Images")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(encode_command())
        .subcommand(decode_command())
        .subcommand(probe_command())
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Overwrite existing output files without asking"))
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the encoding and decoding options"))
}
