/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use bqoi_core::colorspace::ColorSpace;

use crate::Pixel;

/// Interleaved channel samples the encoder can read from
///
/// Samples are addressed by position, `sample(i)` is channel `i % channels`
/// of pixel `i / channels`.
pub trait PixelSource {
    /// Total number of samples
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sample at `index` as an 8 bit value
    ///
    /// # Panics
    /// If `index` is out of bounds, the encoder checks [`len`](Self::len) first
    fn sample(&self, index: usize) -> u8;

    /// Assemble pixel number `position`
    ///
    /// Images without alpha get an alpha of 255
    #[inline]
    fn pixel(&self, position: usize, colorspace: ColorSpace) -> Pixel {
        let base = position * colorspace.num_components();
        let alpha = if colorspace.has_alpha() {
            self.sample(base + 3)
        } else {
            255
        };
        Pixel::new(
            self.sample(base),
            self.sample(base + 1),
            self.sample(base + 2),
            alpha
        )
    }
}

impl PixelSource for [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline(always)]
    fn sample(&self, index: usize) -> u8 {
        self[index]
    }
}

/// Samples normalized to `[0,1]`
///
/// Values are clamped, scaled by 255 and rounded to the nearest integer,
/// `NaN` becomes 0.
///
/// Host exporters that truncate (`int(x * 255)`) can land one step lower
/// for the same float. Rounding keeps `v as f32 / 255.0` mapping back to
/// `v` for every 8 bit value.
impl PixelSource for [f32] {
    fn len(&self) -> usize {
        <[f32]>::len(self)
    }

    #[inline(always)]
    fn sample(&self, index: usize) -> u8 {
        normalize(self[index])
    }
}

impl<const N: usize> PixelSource for [u8; N] {
    fn len(&self) -> usize {
        N
    }

    fn sample(&self, index: usize) -> u8 {
        self[index]
    }
}

impl PixelSource for Vec<u8> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn sample(&self, index: usize) -> u8 {
        self[index]
    }
}

impl PixelSource for Vec<f32> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn sample(&self, index: usize) -> u8 {
        normalize(self[index])
    }
}

#[inline(always)]
fn normalize(value: f32) -> u8 {
    // float to int casts saturate, and NaN casts to zero
    (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}
