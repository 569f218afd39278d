/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ByteIoError, ByteReaderTrait};

/// An in memory reader over anything that can be viewed as bytes
///
/// # Example
/// ```
/// use bqoi_core::bytestream::{ByteCursor, ByteReader};
/// let mut reader = ByteReader::new(ByteCursor::new([1, 2]));
/// assert_eq!(reader.get_u8_err().unwrap(), 1);
/// ```
pub struct ByteCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    pub fn new(buffer: T) -> ByteCursor<T> {
        ByteCursor {
            stream:   buffer,
            position: 0
        }
    }

    /// Bytes remaining between the current position and the end
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.stream.as_ref().len().saturating_sub(self.position)
    }

    #[inline(always)]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<T: AsRef<[u8]>> ByteReaderTrait for ByteCursor<T> {
    #[inline(always)]
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        match self.stream.as_ref().get(self.position..self.position + N) {
            Some(bytes) => {
                buf.copy_from_slice(bytes);
                self.position += N;
                Ok(())
            }
            // not all bytes can be read, leave the position untouched
            None => Err(ByteIoError::NotEnoughBytes(N, self.remaining()))
        }
    }

    #[inline(always)]
    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        Ok(self.remaining() == 0)
    }
}
