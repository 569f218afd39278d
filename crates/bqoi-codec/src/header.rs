/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::ToString;

use bqoi_core::bytestream::{ByteIoError, ByteReader, ByteReaderTrait, ByteWriter, ByteWriterTrait};
use bqoi_core::colorspace::{ColorCharacteristics, ColorSpace};
use bqoi_core::options::EncoderOptions;

use crate::constants::{QOI_HEADER_SIZE, QOI_MAGIC};
use crate::errors::{DescriptorError, QoiErrors};

/// Everything the 14 byte QOI header says about an image
///
/// A descriptor is validated on construction, so holding one means
/// the dimensions are non zero and the channel count and colorspace
/// tag can be written to a header.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ImageDescriptor {
    width:           u32,
    height:          u32,
    colorspace:      ColorSpace,
    characteristics: ColorCharacteristics
}

impl ImageDescriptor {
    /// Build a descriptor from already typed parts
    pub fn new(
        width: u32, height: u32, colorspace: ColorSpace, characteristics: ColorCharacteristics
    ) -> Result<ImageDescriptor, DescriptorError> {
        if width == 0 || height == 0 {
            return Err(DescriptorError::ZeroDimension);
        }
        Ok(ImageDescriptor {
            width,
            height,
            colorspace,
            characteristics
        })
    }

    /// Build a descriptor from the raw header fields
    ///
    /// `channels` must be 3 or 4 and `colorspace_tag` 0 or 1
    pub fn from_raw(
        width: u32, height: u32, channels: u8, colorspace_tag: u8
    ) -> Result<ImageDescriptor, DescriptorError> {
        let colorspace = ColorSpace::from_num_components(usize::from(channels))
            .ok_or(DescriptorError::UnknownChannels(usize::from(channels)))?;

        let characteristics = match colorspace_tag {
            0 => ColorCharacteristics::sRGB,
            1 => ColorCharacteristics::Linear,
            _ => return Err(DescriptorError::UnknownColorspace(colorspace_tag))
        };
        ImageDescriptor::new(width, height, colorspace, characteristics)
    }

    /// Build a descriptor from values handed over by a host application
    ///
    /// The colorspace label is either `sRGB` or `Linear`, case sensitive.
    ///
    /// # Example
    /// ```
    /// use bqoi_codec::ImageDescriptor;
    /// let descriptor = ImageDescriptor::from_host(2, 2, 4, "Linear").unwrap();
    /// assert_eq!(descriptor.colorspace_tag(), 1);
    ///
    /// assert!(ImageDescriptor::from_host(2, 2, 4, "Filmic").is_err());
    /// assert!(ImageDescriptor::from_host(2, 2, 2, "sRGB").is_err());
    /// ```
    pub fn from_host(
        width: u32, height: u32, channels: usize, label: &str
    ) -> Result<ImageDescriptor, DescriptorError> {
        let colorspace = ColorSpace::from_num_components(channels)
            .ok_or(DescriptorError::UnknownChannels(channels))?;

        let characteristics = ColorCharacteristics::from_label(label)
            .ok_or_else(|| DescriptorError::UnknownColorspaceLabel(label.to_string()))?;

        ImageDescriptor::new(width, height, colorspace, characteristics)
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    pub const fn characteristics(&self) -> ColorCharacteristics {
        self.characteristics
    }

    /// Channel count, 3 or 4
    pub const fn channels(&self) -> u8 {
        self.colorspace.num_components() as u8
    }

    /// The header byte for the color characteristics, 0 for sRGB and 1 for linear
    pub const fn colorspace_tag(&self) -> u8 {
        match self.characteristics {
            ColorCharacteristics::sRGB => 0,
            ColorCharacteristics::Linear => 1
        }
    }

    /// Number of pixels, `None` if it does not fit a `usize`
    pub fn num_pixels(&self) -> Option<usize> {
        usize::try_from(self.width)
            .ok()?
            .checked_mul(usize::try_from(self.height).ok()?)
    }

    /// Number of interleaved samples, `None` if it does not fit a `usize`
    pub fn num_samples(&self) -> Option<usize> {
        self.num_pixels()?
            .checked_mul(self.colorspace.num_components())
    }

    /// Encoder options describing a pixel buffer for this image
    pub fn encoder_options(&self) -> EncoderOptions {
        EncoderOptions::new(
            self.width as usize,
            self.height as usize,
            self.colorspace
        )
    }

    /// Write the 14 byte header
    pub(crate) fn write<T: ByteWriterTrait>(
        &self, writer: &mut ByteWriter<T>
    ) -> Result<(), ByteIoError> {
        writer.write_const_bytes(&QOI_MAGIC)?;
        writer.write_u32_be_err(self.width)?;
        writer.write_u32_be_err(self.height)?;
        writer.write_u8_err(self.channels())?;
        writer.write_u8_err(self.colorspace_tag())
    }

    /// Parse a header from the start of a stream
    ///
    /// A stream shorter than the header is [`QoiErrors::TruncatedStream`]
    pub(crate) fn read<T: ByteReaderTrait>(
        reader: &mut ByteReader<T>
    ) -> Result<ImageDescriptor, QoiErrors> {
        let truncated = |err: ByteIoError| match err {
            ByteIoError::NotEnoughBytes(..) => QoiErrors::TruncatedStream {
                needed:           QOI_HEADER_SIZE,
                remaining_pixels: None
            },
            err => QoiErrors::IoErrors(err)
        };

        let magic = reader.read_fixed_bytes_or_error::<4>().map_err(truncated)?;

        if magic != QOI_MAGIC {
            return Err(QoiErrors::WrongMagicBytes);
        }
        let width = reader.get_u32_be_err().map_err(truncated)?;
        let height = reader.get_u32_be_err().map_err(truncated)?;
        let channels = reader.get_u8_err().map_err(truncated)?;
        let colorspace = reader.get_u8_err().map_err(truncated)?;

        Ok(ImageDescriptor::from_raw(
            width, height, channels, colorspace
        )?)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use bqoi_core::bytestream::{ByteCursor, ByteReader, ByteWriter};
    use bqoi_core::colorspace::{ColorCharacteristics, ColorSpace};

    use crate::errors::{DescriptorError, QoiErrors};
    use crate::ImageDescriptor;

    fn header_bytes(descriptor: ImageDescriptor) -> Vec<u8> {
        let mut sink: Vec<u8> = Vec::new();
        descriptor.write(&mut ByteWriter::new(&mut sink)).unwrap();
        sink
    }

    #[test]
    fn rejects_bad_descriptors() {
        assert!(matches!(
            ImageDescriptor::from_raw(0, 1, 3, 0),
            Err(DescriptorError::ZeroDimension)
        ));
        assert!(matches!(
            ImageDescriptor::from_raw(1, 1, 5, 0),
            Err(DescriptorError::UnknownChannels(5))
        ));
        assert!(matches!(
            ImageDescriptor::from_raw(1, 1, 3, 2),
            Err(DescriptorError::UnknownColorspace(2))
        ));
        assert!(matches!(
            ImageDescriptor::from_host(1, 1, 3, "srgb"),
            Err(DescriptorError::UnknownColorspaceLabel(_))
        ));
    }

    #[test]
    fn header_survives_a_trip_through_bytes() {
        let descriptor = ImageDescriptor::new(
            640,
            480,
            ColorSpace::RGB,
            ColorCharacteristics::Linear
        )
        .unwrap();
        let bytes = header_bytes(descriptor);
        assert_eq!(
            bytes,
            [b'q', b'o', b'i', b'f', 0, 0, 2, 128, 0, 0, 1, 224, 3, 1]
        );
        let mut reader = ByteReader::new(ByteCursor::new(&bytes));

        let parsed = ImageDescriptor::read(&mut reader).unwrap();
        assert_eq!(parsed, descriptor);
        assert_eq!(reader.position(), 14);
    }

    #[test]
    fn short_header_is_truncation() {
        let bytes = header_bytes(ImageDescriptor::from_raw(1, 1, 4, 0).unwrap());
        let mut reader = ByteReader::new(ByteCursor::new(&bytes[..13]));

        assert!(matches!(
            ImageDescriptor::read(&mut reader),
            Err(QoiErrors::TruncatedStream {
                remaining_pixels: None,
                ..
            })
        ));
    }

    #[test]
    fn wrong_magic() {
        let mut bytes = header_bytes(ImageDescriptor::from_raw(1, 1, 4, 0).unwrap());
        bytes[0] = b'Q';
        let mut reader = ByteReader::new(ByteCursor::new(&bytes));

        assert!(matches!(
            ImageDescriptor::read(&mut reader),
            Err(QoiErrors::WrongMagicBytes)
        ));
    }
}
