/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading and writing bytes
//!
//! This exposes the traits and implementations for readers
//! and writers used by the codec.

use crate::bytestream::reader::ByteIoError;

/// The Input trait implemented for readers.
///
/// Decoding reads strictly front to back, so there is no seeking here.
///
/// # Considerations
///
/// If you have an in memory buffer, prefer [`ByteCursor`](crate::bytestream::ByteCursor)
/// for `no_std` builds, with `std` any `BufRead`, including `&[u8]` works.
pub trait ByteReaderTrait {
    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// ## Arguments
    ///  - `buf`: Buffer to fill with bytes from the underlying reader
    ///  ## Errors
    /// [`ByteIoError::NotEnoughBytes`] when the input ends before `buf` is full.
    /// In memory implementations do not advance on error, stream backed ones may have
    /// consumed the partial read.
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError>;

    /// Report whether we are at the end of a stream.
    ///
    /// ## Warning
    /// For file backed readers this may cause an additional read to refill the buffer
    fn is_eof(&mut self) -> Result<bool, ByteIoError>;
}

/// The writer trait implemented for sinks of encoded images
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images
pub trait ByteWriterTrait {
    /// Write all bytes to the buffer or return an error if something occurred
    ///
    /// This will always write all bytes, if it can't fully write all bytes, it will
    /// error out
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError>;
    /// Write a fixed number of bytes and error out if we can't write the bytes
    ///
    /// This is provided to allow for optimized writes where possible. (when the compiler can const fold them)
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError>;
    /// Ensure bytes are written to the sink.
    ///
    /// For buffered writers this pushes the buffer into the underlying writer
    fn flush_bytes(&mut self) -> Result<(), ByteIoError>;

    /// A hint to tell the implementation how big of a size we expect the image to be
    /// An implementation like in memory `Vec` can use this to reserve additional memory to
    /// prevent reallocation when encoding
    ///
    /// This is just a hint, akin to calling `Vec::reserve` and should be treated as such.
    /// If your implementation doesn't support such, e.g file or mutable slices, it's okay to return
    /// `Ok(())`
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError>;
}
