/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use bqoi_core::bytestream::{ByteCursor, ByteIoError, ByteReader, ByteReaderTrait};
use bqoi_core::colorspace::{ColorCharacteristics, ColorSpace};
use bqoi_core::log::{trace, warn};
use bqoi_core::options::DecoderOptions;

use crate::constants::QOI_PADDING;
use crate::errors::{ChunkCorruption, QoiErrors};
use crate::{Chunk, ColorIndexCache, ImageDescriptor, Pixel};

/// A Quite OK Image decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to decode headers
/// or [`decode`] to return uncompressed pixels
///
/// Additional methods are provided that give more
/// details of the compressed image like width and height
/// are accessible after decoding headers
///
/// [`decode_headers`]:QoiDecoder::decode_headers
/// [`decode`]:QoiDecoder::decode
pub struct QoiDecoder<T>
where
    T: ByteReaderTrait
{
    descriptor: Option<ImageDescriptor>,
    stream:     ByteReader<T>,
    options:    DecoderOptions
}

impl<T> QoiDecoder<T>
where
    T: ByteReaderTrait
{
    /// Create a new QOI format decoder with the default options
    ///
    /// # Arguments
    /// - `data`: The compressed qoi data
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bqoi_core::bytestream::ByteCursor;
    /// let mut decoder = bqoi_codec::QoiDecoder::new(ByteCursor::new(&[0_u8; 0]));
    /// // additional code
    /// ```
    pub fn new(data: T) -> QoiDecoder<T> {
        QoiDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new QOI format decoder that obeys specified restrictions
    ///
    /// E.g can be used to set width and height limits to prevent OOM attacks
    ///
    /// # Example
    /// ```
    /// use bqoi_core::bytestream::ByteCursor;
    /// use bqoi_core::options::DecoderOptions;
    /// use bqoi_codec::QoiDecoder;
    /// // only decode images less than 10 in both width and height
    ///
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = QoiDecoder::new_with_options(ByteCursor::new([0_u8; 0]), options);
    /// ```
    pub fn new_with_options(data: T, options: DecoderOptions) -> QoiDecoder<T> {
        QoiDecoder {
            descriptor: None,
            stream: ByteReader::new(data),
            options
        }
    }

    /// Decode a QOI header storing needed information into
    /// the decoder instance
    ///
    /// Calling this again after a success does nothing
    ///
    /// # Returns
    ///
    /// - On success: The image descriptor
    /// - On error: The error encountered when decoding headers
    ///     error type will be an instance of [QoiErrors]
    pub fn decode_headers(&mut self) -> Result<ImageDescriptor, QoiErrors> {
        if let Some(descriptor) = self.descriptor {
            return Ok(descriptor);
        }
        let descriptor = ImageDescriptor::read(&mut self.stream)?;

        let width = descriptor.width() as usize;
        let height = descriptor.height() as usize;

        if width > self.options.max_width() {
            return Err(QoiErrors::LimitExceeded {
                dimension: "width",
                found:     width,
                limit:     self.options.max_width()
            });
        }
        if height > self.options.max_height() {
            return Err(QoiErrors::LimitExceeded {
                dimension: "height",
                found:     height,
                limit:     self.options.max_height()
            });
        }

        trace!("Image width: {:?}", width);
        trace!("Image height: {:?}", height);
        trace!("Image colorspace: {:?}", descriptor.colorspace());
        trace!("Image characteristics: {:?}", descriptor.characteristics());

        self.descriptor = Some(descriptor);

        Ok(descriptor)
    }

    /// The image descriptor, `None` if headers weren't decoded
    pub const fn descriptor(&self) -> Option<ImageDescriptor> {
        self.descriptor
    }

    /// Return the number of bytes required to hold a decoded image frame
    ///
    /// # Returns
    ///  - `Some(usize)`: Minimum size for a buffer needed to decode the image
    ///  - `None`: Indicates the headers were not decoded, or the size does not fit a `usize`
    pub fn output_buffer_size(&self) -> Option<usize> {
        self.descriptor?.num_samples()
    }

    /// Decode the bytes of a QOI image data, returning the
    /// uncompressed bytes or the error encountered during decoding
    ///
    /// Additional details about the encoded image can be found after calling this/[`decode_headers`]
    ///
    /// i.e the width and height. can be accessed by [`dimensions`] method.
    ///
    /// [`decode_headers`]:Self::decode_headers
    /// [`dimensions`]:Self::dimensions
    pub fn decode(&mut self) -> Result<Vec<u8>, QoiErrors> {
        self.decode_headers()?;

        let size = self
            .output_buffer_size()
            .ok_or(QoiErrors::GenericStatic("Image dimensions overflow usize"))?;

        let mut output = vec![0; size];

        self.decode_into(&mut output)?;

        Ok(output)
    }

    /// Decode a compressed Qoi image and store the contents
    /// into the output buffer
    ///
    /// Returns an error if the buffer cannot hold the contents
    /// of the image, extra space in the buffer is left untouched
    ///
    /// # Arguments
    ///
    /// * `pixels`: Output buffer for which we will write decoded
    /// pixels
    pub fn decode_into(&mut self, pixels: &mut [u8]) -> Result<(), QoiErrors> {
        let descriptor = self.decode_headers()?;

        let size = self
            .output_buffer_size()
            .ok_or(QoiErrors::GenericStatic("Image dimensions overflow usize"))?;

        if pixels.len() < size {
            return Err(QoiErrors::TooSmallOutput(size, pixels.len()));
        }
        let pixels = &mut pixels[..size];

        match descriptor.colorspace() {
            ColorSpace::RGB => self.decode_inner_generic::<3>(pixels)?,
            ColorSpace::RGBA => self.decode_inner_generic::<4>(pixels)?
        }
        self.check_end_marker()?;

        trace!("Finished decoding image");

        Ok(())
    }

    fn decode_inner_generic<const SIZE: usize>(
        &mut self, pixels: &mut [u8]
    ) -> Result<(), QoiErrors> {
        let total = pixels.len() / SIZE;

        let mut cache = ColorIndexCache::new();
        // starting pixel
        let mut px = Pixel::TRANSPARENT_BLACK;
        let mut run = 0_usize;

        for (position, pix_chunk) in pixels.chunks_exact_mut(SIZE).enumerate() {
            if run > 0 {
                run -= 1;
            } else {
                let offset = self.stream.position();
                let remaining = total - position;

                let chunk = Chunk::read(&mut self.stream).map_err(|err| match err {
                    ByteIoError::NotEnoughBytes(needed, _) => QoiErrors::TruncatedStream {
                        needed,
                        remaining_pixels: Some(remaining)
                    },
                    err => QoiErrors::IoErrors(err)
                })?;

                if let Chunk::Run(length) = chunk {
                    if usize::from(length) > remaining {
                        return Err(QoiErrors::CorruptChunk {
                            offset,
                            reason: ChunkCorruption::RunPastEnd { length, remaining }
                        });
                    }
                    run = usize::from(length) - 1;
                }
                px = chunk.apply(px, &cache);

                if !matches!(chunk, Chunk::Index(_)) {
                    cache.insert(px);
                }
            }
            px.write_channels(pix_chunk);
        }
        Ok(())
    }

    /// Read the eight byte marker following the last pixel
    ///
    /// Strict mode turns a missing or different marker into an error,
    /// otherwise it is only reported
    fn check_end_marker(&mut self) -> Result<(), QoiErrors> {
        let offset = self.stream.position();

        let matches = match self.stream.read_fixed_bytes_or_error::<8>() {
            Ok(marker) => marker == QOI_PADDING,
            Err(ByteIoError::NotEnoughBytes(..)) => false,
            Err(err) => return Err(QoiErrors::IoErrors(err))
        };

        if !matches {
            if self.options.strict_mode() {
                return Err(QoiErrors::CorruptChunk {
                    offset,
                    reason: ChunkCorruption::BadEndMarker
                });
            }
            warn!("Last bytes do not match QOI end marker");
        } else if !self.stream.eof()? {
            warn!("Trailing data after QOI end marker, ignoring it");
        }
        Ok(())
    }

    /// Returns QOI colorspace or none if the headers haven't been decoded
    ///
    /// Colorspace returned can either be [RGB] or [RGBA]
    ///
    /// [RGB]: bqoi_core::colorspace::ColorSpace::RGB
    /// [RGBA]: bqoi_core::colorspace::ColorSpace::RGBA
    pub fn colorspace(&self) -> Option<ColorSpace> {
        self.descriptor.map(|d| d.colorspace())
    }

    /// Whether the stored values are sRGB or linear, `None` before headers
    /// are decoded
    pub fn color_characteristics(&self) -> Option<ColorCharacteristics> {
        self.descriptor.map(|d| d.characteristics())
    }

    /// Return the width and height of the image
    ///
    /// Or none if the headers haven't been decoded
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bqoi_core::bytestream::ByteCursor;
    /// use bqoi_codec::QoiDecoder;
    /// let mut decoder = QoiDecoder::new(ByteCursor::new(&[0_u8; 0]));
    ///
    /// decoder.decode_headers().unwrap();
    /// // get dimensions now.
    /// let (w,h)=decoder.dimensions().unwrap();
    /// ```
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.descriptor
            .map(|d| (d.width() as usize, d.height() as usize))
    }

    /// Destroy the decoder, returning the underlying source
    ///
    /// After a successful [`decode`](Self::decode) the source is positioned
    /// just past the end marker
    pub fn consume(self) -> T {
        self.stream.consume()
    }
}

/// Decode an in memory QOI image with the default [`DecoderOptions`]
///
/// # Example
/// ```
/// use bqoi_codec::{decode, encode, ImageDescriptor};
/// let descriptor = ImageDescriptor::from_host(3, 1, 3, "sRGB").unwrap();
/// let pixels = [255_u8, 0, 0, 0, 255, 0, 0, 0, 255];
///
/// let (header, decoded) = decode(&encode(&descriptor, &pixels).unwrap()).unwrap();
/// assert_eq!(header, descriptor);
/// assert_eq!(decoded, pixels);
/// ```
pub fn decode(bytes: &[u8]) -> Result<(ImageDescriptor, Vec<u8>), QoiErrors> {
    decode_with_options(bytes, DecoderOptions::default())
}

/// Decode an in memory QOI image obeying `options`
pub fn decode_with_options(
    bytes: &[u8], options: DecoderOptions
) -> Result<(ImageDescriptor, Vec<u8>), QoiErrors> {
    let mut decoder = QoiDecoder::new_with_options(ByteCursor::new(bytes), options);
    let descriptor = decoder.decode_headers()?;
    let pixels = decoder.decode()?;

    Ok((descriptor, pixels))
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use bqoi_core::bytestream::ByteCursor;
    use bqoi_core::colorspace::{ColorCharacteristics, ColorSpace};
    use bqoi_core::options::DecoderOptions;

    use crate::errors::{ChunkCorruption, QoiErrors};
    use crate::QoiDecoder;

    fn header(width: u32, height: u32, channels: u8) -> Vec<u8> {
        let mut stream = b"qoif".to_vec();
        stream.extend_from_slice(&width.to_be_bytes());
        stream.extend_from_slice(&height.to_be_bytes());
        stream.push(channels);
        stream.push(1);
        stream
    }

    #[test]
    fn accessors_before_and_after_headers() {
        let stream = header(3, 2, 3);
        let mut decoder = QoiDecoder::new(ByteCursor::new(&stream));

        assert_eq!(decoder.dimensions(), None);
        assert_eq!(decoder.output_buffer_size(), None);

        decoder.decode_headers().unwrap();
        assert_eq!(decoder.dimensions(), Some((3, 2)));
        assert_eq!(decoder.colorspace(), Some(ColorSpace::RGB));
        assert_eq!(
            decoder.color_characteristics(),
            Some(ColorCharacteristics::Linear)
        );
        assert_eq!(decoder.output_buffer_size(), Some(18));
    }

    #[test]
    fn limits_are_respected() {
        let stream = header(100, 1, 4);
        let options = DecoderOptions::default().set_max_width(99);
        let mut decoder = QoiDecoder::new_with_options(ByteCursor::new(&stream), options);

        assert!(matches!(
            decoder.decode_headers(),
            Err(QoiErrors::LimitExceeded {
                dimension: "width",
                found: 100,
                limit: 99
            })
        ));
    }

    #[test]
    fn run_past_the_end_is_corrupt() {
        let mut stream = header(2, 1, 4);
        // run of three in a two pixel image
        stream.push(0xc2);

        let mut decoder = QoiDecoder::new(ByteCursor::new(&stream));
        assert!(matches!(
            decoder.decode(),
            Err(QoiErrors::CorruptChunk {
                offset: 14,
                reason: ChunkCorruption::RunPastEnd {
                    length:    3,
                    remaining: 2
                }
            })
        ));
    }

    #[test]
    fn end_marker_strictness() {
        let mut stream = header(1, 1, 4);
        stream.extend_from_slice(&[0xff, 1, 2, 3, 4]);

        // no marker at all
        let mut lenient = QoiDecoder::new(ByteCursor::new(&stream));
        assert_eq!(lenient.decode().unwrap(), [1, 2, 3, 4]);

        let mut strict = QoiDecoder::new_with_options(
            ByteCursor::new(&stream),
            DecoderOptions::new_strict()
        );
        assert!(matches!(
            strict.decode(),
            Err(QoiErrors::CorruptChunk {
                offset: 19,
                reason: ChunkCorruption::BadEndMarker
            })
        ));

        stream.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 1]);
        let mut strict = QoiDecoder::new_with_options(
            ByteCursor::new(&stream),
            DecoderOptions::new_strict()
        );
        assert_eq!(strict.decode().unwrap(), [1, 2, 3, 4]);
    }

    #[test]
    fn decode_into_checks_output_size() {
        let mut stream = header(1, 1, 3);
        stream.extend_from_slice(&[0xfe, 9, 8, 7, 0, 0, 0, 0, 0, 0, 0, 1]);

        let mut small = [0_u8; 2];
        let mut decoder = QoiDecoder::new(ByteCursor::new(&stream));
        assert!(matches!(
            decoder.decode_into(&mut small),
            Err(QoiErrors::TooSmallOutput(3, 2))
        ));

        let mut large = [0xaa_u8; 5];
        decoder.decode_into(&mut large).unwrap();
        assert_eq!(large, [9, 8, 7, 0xaa, 0xaa]);
    }
}
