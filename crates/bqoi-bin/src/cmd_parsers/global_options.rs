/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};

#[derive(Debug, Copy, Clone, Default)]
pub struct CmdOptions {
    pub override_files: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            override_files: false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if options.value_source("all-yes") == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options
}

/// Pick the log level from the logging flags, warnings when none is given
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
