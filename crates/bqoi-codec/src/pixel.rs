/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// A single pixel, always four channels
///
/// Images without alpha carry `a = 255` in every pixel
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8
}

impl Pixel {
    /// The value every cache slot starts with
    pub const OPAQUE_BLACK: Pixel = Pixel::new(0, 0, 0, 255);

    /// The previous pixel at the start of a pass
    ///
    /// Its alpha differs from any opaque pixel, so the first pixel of an
    /// image never starts a run.
    pub const TRANSPARENT_BLACK: Pixel = Pixel::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Pixel {
        Pixel { r, g, b, a }
    }

    /// Cache slot for this pixel, `(r*3 + g*5 + b*7 + a*11) % 64`
    ///
    /// # Example
    /// ```
    /// use bqoi_codec::Pixel;
    /// assert_eq!(Pixel::OPAQUE_BLACK.hash_index(), 53);
    /// ```
    #[inline(always)]
    pub const fn hash_index(self) -> usize {
        (self.r as usize * 3 + self.g as usize * 5 + self.b as usize * 7 + self.a as usize * 11)
            % 64
    }

    #[inline(always)]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline(always)]
    pub const fn from_array(array: [u8; 4]) -> Pixel {
        Pixel::new(array[0], array[1], array[2], array[3])
    }

    /// Copy the first `out.len()` channels (3 or 4) into `out`
    #[inline(always)]
    pub fn write_channels(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_array()[..out.len()]);
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Pixel::OPAQUE_BLACK
    }
}

#[cfg(test)]
mod tests {
    use crate::Pixel;

    #[test]
    fn hash_covers_all_four_channels() {
        assert_eq!(Pixel::new(1, 0, 0, 0).hash_index(), 3);
        assert_eq!(Pixel::new(0, 1, 0, 0).hash_index(), 5);
        assert_eq!(Pixel::new(0, 0, 1, 0).hash_index(), 7);
        assert_eq!(Pixel::new(0, 0, 0, 1).hash_index(), 11);
        assert_eq!(Pixel::new(255, 255, 255, 255).hash_index(), (255 * 26) % 64);
    }

    #[test]
    fn writes_three_or_four_channels() {
        let px = Pixel::new(1, 2, 3, 4);
        let mut rgb = [0; 3];
        let mut rgba = [0; 4];
        px.write_channels(&mut rgb);
        px.write_channels(&mut rgba);
        assert_eq!(rgb, [1, 2, 3]);
        assert_eq!(rgba, [1, 2, 3, 4]);
    }
}
