/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use bqoi_core::bytestream::{ByteIoError, ByteWriter, ByteWriterTrait};
use bqoi_core::colorspace::ColorCharacteristics;
use bqoi_core::log::trace;
use bqoi_core::options::EncoderOptions;

use crate::constants::{QOI_HEADER_SIZE, QOI_MAX_RUN, QOI_PADDING};
use crate::{Chunk, ColorIndexCache, ImageDescriptor, Pixel, PixelSource, QoiEncodeErrors};

/// Quite Ok Image Encoder
///
/// The encoder reads from any [`PixelSource`], 8 bit samples or
/// floats in `[0,1]`
///
/// # Example
/// - Encode a 100 by 100 RGB image
///
/// ```
/// use bqoi_core::colorspace::ColorSpace;
/// use bqoi_core::options::EncoderOptions;
/// use bqoi_codec::QoiEncoder;
/// use bqoi_codec::QoiEncodeErrors;
///
/// const W:usize=100;
/// const H:usize=100;
///
/// fn main()->Result<(), QoiEncodeErrors>{
///     let pixels = std::array::from_fn::<u8,{W * H * 3},_>(|i| (i%256) as u8);
///     let mut encoder = QoiEncoder::new(&pixels,EncoderOptions::new(W,H,ColorSpace::RGB));
///     let mut sink: Vec<u8> = vec![];
///     let written = encoder.encode(&mut sink)?;
///     assert_eq!(written, sink.len());
///     Ok(())
///}
/// ```
pub struct QoiEncoder<'a, S: PixelSource + ?Sized = [u8]> {
    // raw samples, in RGB or RBGA
    pixel_data:            &'a S,
    options:               EncoderOptions,
    color_characteristics: ColorCharacteristics
}

impl<'a, S: PixelSource + ?Sized> QoiEncoder<'a, S> {
    /// Create a new encoder which will encode the pixels
    ///
    /// # Arguments
    /// - data: Pixel data, size must be equal to `width*height*colorspace channels`
    /// - options: Encoder details for data, this contains width, height and number of color components
    ///
    /// Color characteristics default to sRGB
    #[allow(clippy::redundant_field_names)]
    pub fn new(data: &'a S, options: EncoderOptions) -> QoiEncoder<'a, S> {
        QoiEncoder {
            pixel_data:            data,
            options:               options,
            color_characteristics: ColorCharacteristics::sRGB
        }
    }

    /// Create an encoder for an image described by `descriptor`
    pub fn from_descriptor(data: &'a S, descriptor: &ImageDescriptor) -> QoiEncoder<'a, S> {
        let mut encoder = QoiEncoder::new(data, descriptor.encoder_options());
        encoder.set_color_characteristics(descriptor.characteristics());
        encoder
    }

    pub fn set_color_characteristics(&mut self, characteristics: ColorCharacteristics) {
        self.color_characteristics = characteristics;
    }

    /// Return the maximum size for which the encoder can safely
    /// encode the image without fearing for an out of space error
    ///
    /// Saturates instead of overflowing for absurd dimensions
    pub fn max_size(&self) -> usize {
        self.options
            .width()
            .saturating_mul(self.options.height())
            .saturating_mul(self.options.colorspace().num_components() + 1)
            .saturating_add(QOI_HEADER_SIZE + QOI_PADDING.len())
    }

    /// The header this encoder will write, or why it cannot write one
    pub fn descriptor(&self) -> Result<ImageDescriptor, QoiEncodeErrors> {
        let options = &self.options;

        let width = u32::try_from(options.width())
            .map_err(|_| QoiEncodeErrors::TooLargeDimensions(options.width()))?;
        let height = u32::try_from(options.height())
            .map_err(|_| QoiEncodeErrors::TooLargeDimensions(options.height()))?;

        Ok(ImageDescriptor::new(
            width,
            height,
            options.colorspace(),
            self.color_characteristics
        )?)
    }

    fn encode_headers<T: ByteWriterTrait>(
        &self, writer: &mut ByteWriter<T>
    ) -> Result<ImageDescriptor, QoiEncodeErrors> {
        let descriptor = self.descriptor()?;

        let expected_len = self
            .options
            .expected_samples()
            .ok_or(QoiEncodeErrors::TooLargeDimensions(self.options.width()))?;

        if self.pixel_data.len() != expected_len {
            return Err(QoiEncodeErrors::TooShortInput(
                expected_len,
                self.pixel_data.len()
            ));
        }
        descriptor.write(writer)?;

        Ok(descriptor)
    }

    /// Encode into a sink and error out if
    /// the sink cannot hold the output
    ///
    /// The end marker is always written and the sink flushed
    ///
    /// # Arguments.
    /// - sink: Where to write encoded content to
    ///
    /// # Returns
    /// - Ok(size): Actual bytes used for encoding
    /// - Err: The error encountered during encoding, whatever was written
    ///   up to that point is left in the sink
    pub fn encode<T: ByteWriterTrait>(&mut self, sink: T) -> Result<usize, QoiEncodeErrors> {
        let mut stream = ByteWriter::new(sink);

        let descriptor = self.encode_headers(&mut stream)?;

        trace!(
            "Encoding {}x{} image with {:?} colorspace",
            descriptor.width(),
            descriptor.height(),
            descriptor.colorspace()
        );

        stream.reserve(self.max_size())?;

        let colorspace = self.options.colorspace();
        let num_pixels = self.options.width() * self.options.height();

        let mut state = EncoderState::new();

        for position in 0..num_pixels {
            let px = self.pixel_data.pixel(position, colorspace);
            state.push(px, &mut stream)?;
        }
        state.finish(&mut stream)?;

        // write trailing bytes
        stream.write_const_bytes(&QOI_PADDING)?;
        stream.flush()?;
        // done
        let len = stream.bytes_written();

        trace!("Finished encoding, wrote {len} bytes");

        Ok(len)
    }
}

/// Everything carried from one pixel to the next during an encode
struct EncoderState {
    cache:    ColorIndexCache,
    previous: Pixel,
    run:      u8
}

impl EncoderState {
    fn new() -> EncoderState {
        EncoderState {
            cache:    ColorIndexCache::new(),
            previous: Pixel::TRANSPARENT_BLACK,
            run:      0
        }
    }

    #[inline]
    fn push<T: ByteWriterTrait>(
        &mut self, px: Pixel, writer: &mut ByteWriter<T>
    ) -> Result<(), ByteIoError> {
        if px == self.previous {
            self.run += 1;

            if self.run == QOI_MAX_RUN {
                self.flush_run(writer)?;
            }
        } else {
            self.flush_run(writer)?;

            let chunk = match self.cache.position_of(px) {
                Some(slot) => Chunk::Index(slot),
                None => {
                    self.cache.insert(px);
                    Chunk::select(self.previous, px)
                }
            };
            chunk.write(writer)?;
        }
        self.previous = px;

        Ok(())
    }

    fn flush_run<T: ByteWriterTrait>(&mut self, writer: &mut ByteWriter<T>) -> Result<(), ByteIoError> {
        if self.run > 0 {
            Chunk::Run(self.run).write(writer)?;
            self.run = 0;
        }
        Ok(())
    }

    /// Flush the run left pending by the last pixel
    fn finish<T: ByteWriterTrait>(&mut self, writer: &mut ByteWriter<T>) -> Result<(), ByteIoError> {
        self.flush_run(writer)
    }
}

/// Encode a whole image into a freshly allocated buffer
///
/// # Example
/// ```
/// use bqoi_codec::{encode, ImageDescriptor};
/// let descriptor = ImageDescriptor::from_host(2, 2, 4, "sRGB").unwrap();
/// let pixels = [0_u8, 0, 0, 255].repeat(4);
///
/// let bytes = encode(&descriptor, &pixels[..]).unwrap();
/// // header, the first pixel from the cache, a run of three and the end marker
/// assert_eq!(bytes.len(), 14 + 2 + 8);
/// assert_eq!(&bytes[14..16], &[0x35, 0xc2]);
/// ```
pub fn encode<S: PixelSource + ?Sized>(
    descriptor: &ImageDescriptor, pixels: &S
) -> Result<Vec<u8>, QoiEncodeErrors> {
    let mut encoder = QoiEncoder::from_descriptor(pixels, descriptor);

    let mut output = Vec::with_capacity(encoder.max_size());
    encoder.encode(&mut output)?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use bqoi_core::bytestream::ByteCursor;
    use bqoi_core::colorspace::{ColorCharacteristics, ColorSpace};
    use bqoi_core::options::EncoderOptions;

    use crate::{QoiDecoder, QoiEncodeErrors, QoiEncoder};

    #[test]
    fn test_qoi_encode_rgb() {
        const W: usize = 100;
        const H: usize = 100;

        let pixels = core::array::from_fn::<u8, { W * H * 3 }, _>(|i| (i % 256) as u8);
        let mut encoder = QoiEncoder::new(&pixels, EncoderOptions::new(W, H, ColorSpace::RGB));
        let mut output: Vec<u8> = vec![];
        let written = encoder.encode(&mut output).unwrap();

        assert_eq!(written, output.len());
        assert!(written <= encoder.max_size());
    }

    #[test]
    fn test_qoi_encode_rgba() {
        const W: usize = 100;
        const H: usize = 100;

        let pixels = core::array::from_fn::<u8, { W * H * 4 }, _>(|i| (i % 256) as u8);
        let mut encoder = QoiEncoder::new(&pixels, EncoderOptions::new(W, H, ColorSpace::RGBA));
        encoder.set_color_characteristics(ColorCharacteristics::Linear);

        let mut output: Vec<u8> = vec![];
        encoder.encode(&mut output).unwrap();
        assert_eq!(output[13], 1);

        let mut decoder = QoiDecoder::new(ByteCursor::new(&output));
        let decoded_pixels = decoder.decode().unwrap();
        assert_eq!(&pixels[..], &decoded_pixels[..]);
    }

    #[test]
    fn wrong_input_length() {
        let pixels = [0_u8; 11];
        let mut encoder = QoiEncoder::new(&pixels[..], EncoderOptions::new(2, 2, ColorSpace::RGB));
        let mut output: Vec<u8> = Vec::new();

        assert!(matches!(
            encoder.encode(&mut output),
            Err(QoiEncodeErrors::TooShortInput(12, 11))
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn zero_dimension_is_invalid() {
        let pixels: [u8; 0] = [];
        let mut encoder = QoiEncoder::new(&pixels, EncoderOptions::new(0, 4, ColorSpace::RGB));

        assert!(matches!(
            encoder.encode(Vec::<u8>::new()),
            Err(QoiEncodeErrors::InvalidDescriptor(_))
        ));
    }

    #[test]
    fn float_and_byte_sources_agree() {
        let bytes: Vec<u8> = (0..4 * 4 * 3).map(|v| (v * 17 % 256) as u8).collect();
        let floats: Vec<f32> = bytes.iter().map(|&v| f32::from(v) / 255.0).collect();
        let options = EncoderOptions::new(4, 4, ColorSpace::RGB);

        let mut from_bytes: Vec<u8> = vec![];
        let mut from_floats: Vec<u8> = vec![];
        QoiEncoder::new(&bytes[..], options)
            .encode(&mut from_bytes)
            .unwrap();
        QoiEncoder::new(&floats[..], options)
            .encode(&mut from_floats)
            .unwrap();

        assert_eq!(from_bytes, from_floats);
    }
}
