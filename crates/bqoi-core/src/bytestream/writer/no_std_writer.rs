/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
// We cannot use the below impls and std ones because we'll re-implement the
// same trait fot &[u8] which is blanketed by write. Ending up with two separate implementations
#![cfg(not(feature = "std"))]
use crate::bytestream::{ByteIoError, ByteWriterTrait};

impl ByteWriterTrait for &mut [u8] {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        if buf.len() > self.len() {
            return Err(ByteIoError::NotEnoughBuffer(buf.len(), self.len()));
        }
        let (a, b) = core::mem::take(self).split_at_mut(buf.len());
        a.copy_from_slice(buf);
        *self = b;

        Ok(())
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.write_all_bytes(buf)
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        Ok(())
    }
    fn reserve_capacity(&mut self, _: usize) -> Result<(), ByteIoError> {
        // can't really pre-allocate anything here
        Ok(())
    }
}

impl ByteWriterTrait for &mut alloc::vec::Vec<u8> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }
    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        Ok(())
    }
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError> {
        self.reserve(size);
        Ok(())
    }
}
