/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ByteIoError, ByteWriterTrait};

mod no_std_writer;
mod std_writer;

/// Encapsulates a simple Byte writer with
/// support for Endian aware writes
///
/// Every write is checked, the writer counts the bytes
/// that made it into the sink
pub struct ByteWriter<T: ByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ByteWriterTrait> ByteWriter<T> {
    /// Create a new writer for the sink
    pub fn new(data: T) -> ByteWriter<T> {
        ByteWriter {
            buffer:        data,
            bytes_written: 0
        }
    }

    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use bqoi_core::bytestream::ByteWriter;
    /// let mut sink: Vec<u8> = Vec::new();
    /// let mut stream = ByteWriter::new(&mut sink);
    /// stream.write_u32_be_err(1).unwrap();
    /// assert_eq!(stream.bytes_written(), 4);
    /// ```
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    #[inline(always)]
    pub fn write_const_bytes<const N: usize>(&mut self, byte: &[u8; N]) -> Result<(), ByteIoError> {
        self.buffer.write_const_bytes(byte)?;
        self.bytes_written += N;
        Ok(())
    }

    /// Write a single byte into the bytestream or error out
    /// if the sink cannot take it
    #[inline(always)]
    pub fn write_u8_err(&mut self, byte: u8) -> Result<(), ByteIoError> {
        self.write_const_bytes(&[byte])
    }

    /// Write `u32` as a big endian integer
    #[inline]
    pub fn write_u32_be_err(&mut self, value: u32) -> Result<(), ByteIoError> {
        self.write_const_bytes(&value.to_be_bytes())
    }

    /// Hint the sink about the number of bytes that will follow
    pub fn reserve(&mut self, additional: usize) -> Result<(), ByteIoError> {
        self.buffer.reserve_capacity(additional)
    }

    /// Push any buffered bytes into the sink
    pub fn flush(&mut self) -> Result<(), ByteIoError> {
        self.buffer.flush_bytes()
    }
}
