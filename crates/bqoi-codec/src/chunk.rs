/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The six chunk kinds of a QOI stream
//!
//! Every byte value is a valid leading byte. `0xfe` and `0xff` are full
//! byte tags and are checked first, everything else is classified by its
//! top two bits, which is why a run never covers 63 or 64 pixels.
#![allow(clippy::identity_op)]

use bqoi_core::bytestream::{ByteIoError, ByteReader, ByteReaderTrait, ByteWriter, ByteWriterTrait};

use crate::constants::{
    QOI_MASK_2, QOI_MAX_RUN, QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_LUMA, QOI_OP_RGB, QOI_OP_RGBA,
    QOI_OP_RUN
};
use crate::{ColorIndexCache, Pixel};

/// One decoded chunk
///
/// Deltas are stored unbiased, i.e. `Diff { dr: -2, .. }` is written
/// with a field value of `0`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Chunk {
    /// Copy the pixel at this cache slot, `0..=63`
    Index(u8),
    /// Small deltas, each in `-2..=1`, alpha unchanged
    Diff { dr: i8, dg: i8, db: i8 },
    /// Green delta in `-32..=31`, red and blue relative to it in `-8..=7`
    Luma { dg: i8, dr_dg: i8, db_dg: i8 },
    /// Repeat the previous pixel this many times, `1..=62`
    Run(u8),
    /// New color channels, alpha unchanged
    Rgb { r: u8, g: u8, b: u8 },
    /// A full pixel
    Rgba(Pixel)
}

impl Chunk {
    /// Pick the cheapest delta encoding of `current` relative to `previous`
    ///
    /// This is the fallback after runs and cache hits were ruled out,
    /// priority is DIFF, LUMA, RGB and lastly RGBA which is the only
    /// option when alpha changed.
    ///
    /// Deltas are plain differences of the channel values, going from
    /// 255 to 0 is `-255` and falls through to RGB.
    ///
    /// # Example
    /// ```
    /// use bqoi_codec::{Chunk, Pixel};
    /// let prev = Pixel::new(10, 10, 10, 255);
    ///
    /// let chunk = Chunk::select(prev, Pixel::new(11, 10, 9, 255));
    /// assert_eq!(chunk, Chunk::Diff { dr: 1, dg: 0, db: -1 });
    ///
    /// let chunk = Chunk::select(prev, Pixel::new(10, 10, 10, 0));
    /// assert_eq!(chunk, Chunk::Rgba(Pixel::new(10, 10, 10, 0)));
    /// ```
    pub fn select(previous: Pixel, current: Pixel) -> Chunk {
        if current.a != previous.a {
            return Chunk::Rgba(current);
        }
        let dr = i16::from(current.r) - i16::from(previous.r);
        let dg = i16::from(current.g) - i16::from(previous.g);
        let db = i16::from(current.b) - i16::from(previous.b);

        if (-2..=1).contains(&dr) && (-2..=1).contains(&dg) && (-2..=1).contains(&db) {
            return Chunk::Diff {
                dr: dr as i8,
                dg: dg as i8,
                db: db as i8
            };
        }
        let dr_dg = dr - dg;
        let db_dg = db - dg;

        if (-32..=31).contains(&dg) && (-8..=7).contains(&dr_dg) && (-8..=7).contains(&db_dg) {
            return Chunk::Luma {
                dg:    dg as i8,
                dr_dg: dr_dg as i8,
                db_dg: db_dg as i8
            };
        }
        Chunk::Rgb {
            r: current.r,
            g: current.g,
            b: current.b
        }
    }

    /// Size of this chunk in the stream, in bytes
    pub const fn encoded_len(&self) -> usize {
        match self {
            Chunk::Index(_) | Chunk::Diff { .. } | Chunk::Run(_) => 1,
            Chunk::Luma { .. } => 2,
            Chunk::Rgb { .. } => 4,
            Chunk::Rgba(_) => 5
        }
    }

    /// Pack this chunk into the stream
    ///
    /// Fields are masked to their bit width, the caller is responsible
    /// for keeping them in range
    pub fn write<T: ByteWriterTrait>(&self, writer: &mut ByteWriter<T>) -> Result<(), ByteIoError> {
        match *self {
            Chunk::Index(slot) => writer.write_u8_err(QOI_OP_INDEX | (slot & 63)),
            Chunk::Diff { dr, dg, db } => {
                let dr = (dr.wrapping_add(2) as u8) & 0x03;
                let dg = (dg.wrapping_add(2) as u8) & 0x03;
                let db = (db.wrapping_add(2) as u8) & 0x03;

                writer.write_u8_err(QOI_OP_DIFF | dr << 4 | dg << 2 | db)
            }
            Chunk::Luma { dg, dr_dg, db_dg } => {
                let dg = (dg.wrapping_add(32) as u8) & 0x3f;
                let dr_dg = (dr_dg.wrapping_add(8) as u8) & 0x0f;
                let db_dg = (db_dg.wrapping_add(8) as u8) & 0x0f;

                writer.write_const_bytes(&[QOI_OP_LUMA | dg, dr_dg << 4 | db_dg])
            }
            Chunk::Run(length) => {
                debug_assert!((1..=QOI_MAX_RUN).contains(&length));
                writer.write_u8_err(QOI_OP_RUN | (length.wrapping_sub(1) & 0x3f))
            }
            Chunk::Rgb { r, g, b } => writer.write_const_bytes(&[QOI_OP_RGB, r, g, b]),
            Chunk::Rgba(px) => writer.write_const_bytes(&[QOI_OP_RGBA, px.r, px.g, px.b, px.a])
        }
    }

    /// Unpack one chunk from the stream
    ///
    /// Never fails on content, every leading byte is valid. Errors only
    /// come from the reader, e.g. [`ByteIoError::NotEnoughBytes`] when the
    /// payload is cut short.
    pub fn read<T: ByteReaderTrait>(reader: &mut ByteReader<T>) -> Result<Chunk, ByteIoError> {
        let chunk = reader.get_u8_err()?;

        if chunk == QOI_OP_RGB {
            let [r, g, b] = reader.read_fixed_bytes_or_error::<3>()?;
            return Ok(Chunk::Rgb { r, g, b });
        }
        if chunk == QOI_OP_RGBA {
            let packed = reader.read_fixed_bytes_or_error::<4>()?;
            return Ok(Chunk::Rgba(Pixel::from_array(packed)));
        }
        let decoded = match chunk & QOI_MASK_2 {
            QOI_OP_INDEX => Chunk::Index(chunk & 0x3f),
            QOI_OP_DIFF => Chunk::Diff {
                dr: ((chunk >> 4) & 0x03) as i8 - 2,
                dg: ((chunk >> 2) & 0x03) as i8 - 2,
                db: ((chunk >> 0) & 0x03) as i8 - 2
            },
            QOI_OP_LUMA => {
                let b2 = reader.get_u8_err()?;

                Chunk::Luma {
                    dg:    (chunk & 0x3f) as i8 - 32,
                    dr_dg: ((b2 >> 4) & 0x0f) as i8 - 8,
                    db_dg: ((b2 >> 0) & 0x0f) as i8 - 8
                }
            }
            // QOI_OP_RUN, the only two bit tag left
            _ => Chunk::Run((chunk & 0x3f) + 1)
        };
        Ok(decoded)
    }

    /// The pixel this chunk produces when it follows `previous`
    ///
    /// For runs this is `previous` itself, the repetition is the
    /// caller's business.
    pub fn apply(&self, previous: Pixel, cache: &ColorIndexCache) -> Pixel {
        match *self {
            Chunk::Index(slot) => cache.get(slot),
            Chunk::Diff { dr, dg, db } => Pixel::new(
                previous.r.wrapping_add(dr as u8),
                previous.g.wrapping_add(dg as u8),
                previous.b.wrapping_add(db as u8),
                previous.a
            ),
            Chunk::Luma { dg, dr_dg, db_dg } => {
                let dg = dg as u8;
                Pixel::new(
                    previous.r.wrapping_add(dg).wrapping_add(dr_dg as u8),
                    previous.g.wrapping_add(dg),
                    previous.b.wrapping_add(dg).wrapping_add(db_dg as u8),
                    previous.a
                )
            }
            Chunk::Run(_) => previous,
            Chunk::Rgb { r, g, b } => Pixel::new(r, g, b, previous.a),
            Chunk::Rgba(px) => px
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use bqoi_core::bytestream::{ByteCursor, ByteReader, ByteWriter};

    use crate::{Chunk, ColorIndexCache, Pixel};

    fn bytes_of(chunk: Chunk) -> Vec<u8> {
        let mut sink: Vec<u8> = Vec::new();
        let mut writer = ByteWriter::new(&mut sink);
        chunk.write(&mut writer).unwrap();
        assert_eq!(writer.bytes_written(), chunk.encoded_len());
        sink
    }

    fn parse(bytes: &[u8]) -> Chunk {
        let mut reader = ByteReader::new(ByteCursor::new(bytes));
        let chunk = Chunk::read(&mut reader).unwrap();
        assert_eq!(reader.position() as usize, bytes.len());
        chunk
    }

    #[test]
    fn known_byte_layouts() {
        assert_eq!(bytes_of(Chunk::Index(53)), [53]);
        assert_eq!(bytes_of(Chunk::Diff { dr: 1, dg: 0, db: -1 }), [0x40 | 3 << 4 | 2 << 2 | 1]);
        assert_eq!(
            bytes_of(Chunk::Luma { dg: -32, dr_dg: 7, db_dg: -8 }),
            [0x80, 0xf0]
        );
        assert_eq!(bytes_of(Chunk::Run(1)), [0xc0]);
        assert_eq!(bytes_of(Chunk::Run(62)), [0xfd]);
        assert_eq!(bytes_of(Chunk::Rgb { r: 1, g: 2, b: 3 }), [0xfe, 1, 2, 3]);
        assert_eq!(
            bytes_of(Chunk::Rgba(Pixel::new(1, 2, 3, 4))),
            [0xff, 1, 2, 3, 4]
        );
    }

    #[test]
    fn full_byte_tags_win_over_run() {
        assert_eq!(parse(&[0xfd]), Chunk::Run(62));
        assert_eq!(parse(&[0xfe, 9, 8, 7]), Chunk::Rgb { r: 9, g: 8, b: 7 });
        assert_eq!(parse(&[0xff, 9, 8, 7, 6]), Chunk::Rgba(Pixel::new(9, 8, 7, 6)));
    }

    #[test]
    fn every_leading_byte_parses() {
        let cache = ColorIndexCache::new();
        let previous = Pixel::new(100, 100, 100, 200);

        for lead in 0..=255_u8 {
            let stream = [lead, 0x88, 0x88, 0x88, 0x88];
            let mut reader = ByteReader::new(ByteCursor::new(&stream));
            let chunk = Chunk::read(&mut reader).unwrap();

            assert_eq!(reader.position() as usize, chunk.encoded_len());
            // writing it back gives the same bytes
            assert_eq!(&bytes_of(chunk)[..], &stream[..chunk.encoded_len()]);

            let px = chunk.apply(previous, &cache);
            match chunk {
                Chunk::Index(slot) => assert_eq!(px, cache.get(slot)),
                Chunk::Rgba(full) => assert_eq!(px, full),
                Chunk::Run(_) => assert_eq!(px, previous),
                _ => assert_eq!(px.a, previous.a, "lead {lead:#04x} touched alpha")
            }
        }
    }

    #[test]
    fn deltas_do_not_wrap() {
        let previous = Pixel::new(255, 10, 10, 255);
        let current = Pixel::new(0, 10, 10, 255);

        let chunk = Chunk::select(previous, current);
        assert_eq!(chunk, Chunk::Rgb { r: 0, g: 10, b: 10 });
        assert_eq!(chunk.apply(previous, &ColorIndexCache::new()), current);

        let previous = Pixel::new(255, 0, 128, 255);
        let current = Pixel::new(0, 255, 128, 255);
        assert_eq!(
            Chunk::select(previous, current),
            Chunk::Rgb {
                r: 0,
                g: 255,
                b: 128
            }
        );
    }

    #[test]
    fn diff_bounds() {
        let previous = Pixel::new(100, 100, 100, 255);
        let cache = ColorIndexCache::new();

        for (dr, dg, db) in [(-2, -2, -2), (1, 1, 1), (-2, 1, 0)] {
            let current = Pixel::new(
                (100 + dr) as u8,
                (100 + dg) as u8,
                (100 + db) as u8,
                255
            );
            let chunk = Chunk::select(previous, current);

            assert_eq!(chunk, Chunk::Diff { dr, dg, db });
            assert_eq!(chunk.apply(previous, &cache), current);
        }
        // one step past either end is no longer a DIFF, LUMA picks it up
        assert_eq!(
            Chunk::select(previous, Pixel::new(102, 100, 100, 255)),
            Chunk::Luma {
                dg:    0,
                dr_dg: 2,
                db_dg: 0
            }
        );
        assert_eq!(
            Chunk::select(previous, Pixel::new(100, 97, 100, 255)),
            Chunk::Luma {
                dg:    -3,
                dr_dg: 3,
                db_dg: 3
            }
        );
    }

    #[test]
    fn luma_bounds() {
        let previous = Pixel::new(100, 100, 100, 255);
        let cache = ColorIndexCache::new();

        // (dg, dr - dg, db - dg) at every edge of the LUMA ranges
        for (dg, dr_dg, db_dg) in [(-32, -8, 7), (31, 7, -8), (-32, 7, 7), (31, -8, -8)] {
            let (dg16, dr_dg16, db_dg16) = (i16::from(dg), i16::from(dr_dg), i16::from(db_dg));
            let current = Pixel::new(
                (100 + dg16 + dr_dg16) as u8,
                (100 + dg16) as u8,
                (100 + dg16 + db_dg16) as u8,
                255
            );
            let chunk = Chunk::select(previous, current);

            assert_eq!(chunk, Chunk::Luma { dg, dr_dg, db_dg });
            assert_eq!(chunk.apply(previous, &cache), current);
        }
        // just outside, green or the red/blue offsets
        for current in [
            Pixel::new(132, 132, 132, 255),
            Pixel::new(67, 67, 67, 255),
            Pixel::new(100 + 8, 100, 100, 255),
            Pixel::new(100, 100, 100 - 9, 255)
        ] {
            assert_eq!(
                Chunk::select(previous, current),
                Chunk::Rgb {
                    r: current.r,
                    g: current.g,
                    b: current.b
                }
            );
        }
    }

    #[test]
    fn luma_and_rgb_selection() {
        let previous = Pixel::new(50, 50, 50, 255);

        let luma = Pixel::new(50 + 20 + 7, 50 + 20, 50 + 20 - 8, 255);
        let chunk = Chunk::select(previous, luma);
        assert_eq!(
            chunk,
            Chunk::Luma {
                dg:    20,
                dr_dg: 7,
                db_dg: -8
            }
        );
        assert_eq!(chunk.apply(previous, &ColorIndexCache::new()), luma);

        let far = Pixel::new(200, 50, 50, 255);
        assert_eq!(
            Chunk::select(previous, far),
            Chunk::Rgb {
                r: 200,
                g: 50,
                b: 50
            }
        );
    }

    #[test]
    fn truncated_payload_is_an_io_error() {
        let mut reader = ByteReader::new(ByteCursor::new(&[0xff_u8, 1, 2]));
        assert!(Chunk::read(&mut reader).is_err());
    }
}
