/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Display, Formatter};

pub(crate) mod cursor;
mod std_readers;
use crate::bytestream::ByteReaderTrait;

/// Errors raised by readers and writers
pub enum ByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    /// The input ended early
    ///
    /// (requested, read)
    NotEnoughBytes(usize, usize),
    /// The output cannot hold the write
    ///
    /// (requested, space left)
    NotEnoughBuffer(usize, usize)
}

impl core::fmt::Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer size is {found}"
                )
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ByteIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ByteIoError::StdIoError(err) => Some(err),
            _ => None
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

/// A counting reader over a [`ByteReaderTrait`] source
///
/// All reads are checked, the wrapper keeps track of how many
/// bytes were consumed so errors can report stream offsets
pub struct ByteReader<T: ByteReaderTrait> {
    inner:    T,
    position: u64
}

impl<T: ByteReaderTrait> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader {
            inner:    source,
            position: 0
        }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }

    /// Number of bytes successfully read so far
    #[inline(always)]
    pub const fn position(&self) -> u64 {
        self.position
    }

    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        let [byte] = self.read_fixed_bytes_or_error::<1>()?;
        Ok(byte)
    }

    /// Read a big endian `u32` or error out if the input is too short
    #[inline]
    pub fn get_u32_be_err(&mut self) -> Result<u32, ByteIoError> {
        Ok(u32::from_be_bytes(self.read_fixed_bytes_or_error()?))
    }

    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.inner.read_const_bytes(&mut byte_store)?;
        self.position += N as u64;
        Ok(byte_store)
    }

    #[inline(always)]
    pub fn eof(&mut self) -> Result<bool, ByteIoError> {
        self.inner.is_eof()
    }
}
