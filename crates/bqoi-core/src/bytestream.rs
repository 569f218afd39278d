/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A big endian aware byte reader and writer
//!
//! The codec never talks to a file or a vector directly, it
//! reads through [`ByteReader`] and writes through [`ByteWriter`],
//! which wrap anything implementing [`ByteReaderTrait`] or [`ByteWriterTrait`]
//!
//! Implementations provided
//!
//! | Type                     | Trait              | Feature      |
//! |--------------------------|--------------------|--------------|
//! | [`ByteCursor<T>`]        | `ByteReaderTrait`  | always       |
//! | `T: std::io::BufRead`    | `ByteReaderTrait`  | `std`        |
//! | `T: std::io::Write`      | `ByteWriterTrait`  | `std`        |
//! | `&mut Vec<u8>`, `&mut [u8]` | `ByteWriterTrait` | not `std` |
pub use reader::cursor::ByteCursor;
pub use reader::{ByteIoError, ByteReader};
pub use traits::*;
pub use writer::ByteWriter;

mod reader;
mod traits;
mod writer;
