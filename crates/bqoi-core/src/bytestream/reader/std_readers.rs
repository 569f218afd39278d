/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "std")]

use std::io::{BufRead, ErrorKind};

use crate::bytestream::reader::ByteIoError;
use crate::bytestream::ByteReaderTrait;

/// Fill `buf` from `reader`, reporting how far we got when the
/// stream ends early
fn fill_or_count<R: BufRead + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<(), ByteIoError> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => return Err(ByteIoError::NotEnoughBytes(buf.len(), filled)),
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ByteIoError::from(e))
        }
    }
    Ok(())
}

impl<T: BufRead> ByteReaderTrait for T {
    #[inline(always)]
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        fill_or_count(self, buf)
    }

    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        self.fill_buf()
            .map(|b| b.is_empty())
            .map_err(ByteIoError::from)
    }
}
