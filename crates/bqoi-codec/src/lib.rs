/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding and encoding Quite Ok Image format
//!
//! [Format Specification](https://qoiformat.org/qoi-specification.pdf)
//!
//! # Features
//! - Decoding and encoding, from 8 bit or normalized float samples
//! - `no_std`
//! - File helpers with the `std` feature
//!
//! ## `no_std`
//! You can use `no_std` with alloc feature to compile for `no_std` endpoints
//!
//! ## Compatibility
//! Every slot of the color index starts out as opaque black `(0,0,0,255)`
//! for both the encoder and decoder, while the previous pixel starts as
//! `(0,0,0,0)`. An opaque black first pixel is therefore written as
//! `INDEX(53)`. Streams from this crate always round trip through this
//! crate, other QOI decoders start the index zeroed and can misread an
//! `INDEX` chunk that refers to a slot never written.
//!
//! # Example
//! ```
//! use bqoi_codec::{decode, encode, ImageDescriptor};
//!
//! let descriptor = ImageDescriptor::from_host(2, 1, 4, "sRGB").unwrap();
//! let pixels = [10_u8, 20, 30, 255, 10, 20, 30, 128];
//!
//! let stream = encode(&descriptor, &pixels).unwrap();
//! let (header, decoded) = decode(&stream).unwrap();
//!
//! assert_eq!(header.channels(), 4);
//! assert_eq!(decoded, pixels);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use bqoi_core;
pub use cache::ColorIndexCache;
pub use chunk::Chunk;
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
#[cfg(feature = "std")]
pub use fs::{decode_file, encode_to_file};
pub use header::ImageDescriptor;
pub use pixel::Pixel;
pub use source::PixelSource;

mod cache;
mod chunk;
pub mod constants;
mod decoder;
mod encoder;
mod errors;
pub mod fs;
mod header;
mod pixel;
mod source;
