/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoder and decoder options
//!
//! Options are passed by value and configured with builder style
//! setters, e.g
//!
//! ```
//! use bqoi_core::options::DecoderOptions;
//! let options = DecoderOptions::default()
//!     .set_max_width(1024)
//!     .set_strict_mode(true);
//! assert_eq!(options.max_width(), 1024);
//! ```
pub use decoder::DecoderOptions;
pub use encoder::EncoderOptions;

mod decoder;
mod encoder;
