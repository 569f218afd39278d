/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding.
use alloc::string::String;
use core::fmt::{Debug, Display, Formatter};

use bqoi_core::bytestream::ByteIoError;

/// An image description that cannot be represented in a QOI header
pub enum DescriptorError {
    /// Channel count other than `3` or `4`
    UnknownChannels(usize),
    /// Colorspace byte other than `0` (sRGB) or `1` (Linear)
    UnknownColorspace(u8),
    /// A host colorspace label other than `sRGB` or `Linear`
    UnknownColorspaceLabel(String),
    /// Width or height is zero
    ZeroDimension
}

impl Debug for DescriptorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            DescriptorError::UnknownChannels(channels) => {
                writeln!(
                    f,
                    "Unknown channel number {channels}, expected either 3 or 4"
                )
            }
            DescriptorError::UnknownColorspace(colorspace) => {
                writeln!(
                    f,
                    "Unknown colorspace number {colorspace}, expected either 0 or 1"
                )
            }
            DescriptorError::UnknownColorspaceLabel(label) => {
                writeln!(
                    f,
                    "Unknown colorspace `{label}`, expected either `sRGB` or `Linear`"
                )
            }
            DescriptorError::ZeroDimension => {
                writeln!(f, "Image width and height must be greater than zero")
            }
        }
    }
}

impl Display for DescriptorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

/// The kind of damage a [`QoiErrors::CorruptChunk`] reports
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ChunkCorruption {
    /// A run would produce more pixels than the image has left
    RunPastEnd { length: u8, remaining: usize },
    /// The eight bytes after the last pixel are not `0,0,0,0,0,0,0,1`
    BadEndMarker
}

/// Possible Errors that may occur during decoding
pub enum QoiErrors {
    /// The image does not start with QOI magic bytes `qoif`
    ///
    /// Indicates that image is not a qoi file
    WrongMagicBytes,
    /// The header describes an image QOI cannot hold
    InvalidDescriptor(DescriptorError),
    /// A header dimension is above the configured decoder limit
    LimitExceeded {
        dimension: &'static str,
        found:     usize,
        limit:     usize
    },
    /// The stream ended before the image was complete
    ///
    /// - `needed`: bytes the failing read asked for
    /// - `remaining_pixels`: pixels not yet produced, `None` if the
    ///   header itself was cut short
    TruncatedStream {
        needed:           usize,
        remaining_pixels: Option<usize>
    },
    /// A structurally invalid chunk at byte `offset` of the stream
    CorruptChunk {
        offset: u64,
        reason: ChunkCorruption
    },
    /// Generic message does not need heap allocation
    GenericStatic(&'static str),
    /// To small output size
    TooSmallOutput(usize, usize),
    IoErrors(ByteIoError)
}

impl Debug for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QoiErrors::WrongMagicBytes => {
                writeln!(f, "Wrong magic bytes, expected `qoif` as image start")
            }
            QoiErrors::InvalidDescriptor(err) => {
                write!(f, "Invalid image header: {:?}", err)
            }
            QoiErrors::LimitExceeded {
                dimension,
                found,
                limit
            } => {
                writeln!(
                    f,
                    "Image {dimension} {found} greater than max configured {dimension} {limit}"
                )
            }
            QoiErrors::TruncatedStream {
                needed,
                remaining_pixels
            } => match remaining_pixels {
                Some(pixels) => writeln!(
                    f,
                    "Stream ended early, needed {needed} more bytes with {pixels} pixels left"
                ),
                None => writeln!(f, "Stream ended inside the header, needed {needed} bytes")
            },
            QoiErrors::CorruptChunk { offset, reason } => match reason {
                ChunkCorruption::RunPastEnd { length, remaining } => writeln!(
                    f,
                    "Corrupt chunk at offset {offset}, run of {length} pixels but only {remaining} left"
                ),
                ChunkCorruption::BadEndMarker => writeln!(
                    f,
                    "Corrupt stream at offset {offset}, last bytes do not match QOI end marker"
                )
            },
            QoiErrors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
            QoiErrors::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected}, but found {found}"
                )
            }
            QoiErrors::IoErrors(value) => {
                writeln!(f, "I/O error {:?}", value)
            }
        }
    }
}

impl From<ByteIoError> for QoiErrors {
    fn from(value: ByteIoError) -> Self {
        QoiErrors::IoErrors(value)
    }
}

impl From<DescriptorError> for QoiErrors {
    fn from(value: DescriptorError) -> Self {
        QoiErrors::InvalidDescriptor(value)
    }
}

/// Errors encountered during encoding
pub enum QoiEncodeErrors {
    /// The image description cannot be written as a QOI header
    InvalidDescriptor(DescriptorError),
    /// Too large dimensions
    /// The dimensions cannot be correctly encoded to a width
    TooLargeDimensions(usize),
    /// The pixel source length does not match `width*height*channels`
    ///
    /// (expected, found)
    TooShortInput(usize, usize),

    IoError(ByteIoError)
}

impl Debug for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QoiEncodeErrors::InvalidDescriptor(err) => {
                write!(f, "Cannot encode image: {:?}", err)
            }
            QoiEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, QOI can only encode images less than {}",
                    u32::MAX
                )
            }
            QoiEncodeErrors::TooShortInput(expected, found) => {
                writeln!(
                    f,
                    "Expected {expected} samples from the pixel source but it has {found}"
                )
            }
            QoiEncodeErrors::IoError(v) => {
                writeln!(f, "I/O error {:?}", v)
            }
        }
    }
}

impl Display for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}
impl Display for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DescriptorError {}

#[cfg(feature = "std")]
impl std::error::Error for QoiEncodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QoiEncodeErrors::InvalidDescriptor(err) => Some(err),
            QoiEncodeErrors::IoError(err) => Some(err),
            _ => None
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QoiErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QoiErrors::InvalidDescriptor(err) => Some(err),
            QoiErrors::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<ByteIoError> for QoiEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        Self::IoError(value)
    }
}

impl From<DescriptorError> for QoiEncodeErrors {
    fn from(value: DescriptorError) -> Self {
        Self::InvalidDescriptor(value)
    }
}
