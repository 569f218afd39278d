/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the bqoi crates
//!
//! This crate provides the pieces the codec and the command line
//! tool agree on
//!
//! - A bytestream reader and writer with big endian aware reads and writes
//! - Colorspace and color characteristics of an image
//! - Encoder and decoder options
//! - A logging shim that compiles to nothing when the `log` feature is off
//!
//! This library is `#[no_std]` with `alloc`, `std` adds implementations
//! for `std::io` readers and writers.
//!
//! # Features
//!  - `std`: Implement the byte traits for `std::io` types.
//!  - `log`: Route the logging macros to the [log](https://docs.rs/log) crate.
//!  - `serde`: Enables serializing of the colorspace types
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod colorspace;
pub mod log;
pub mod options;
mod serde;
