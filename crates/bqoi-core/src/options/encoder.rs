/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::colorspace::ColorSpace;

/// Options describing the pixels handed to an encoder
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EncoderOptions {
    width:      usize,
    height:     usize,
    colorspace: ColorSpace
}

impl EncoderOptions {
    /// Create new encode options
    ///
    /// # Arguments
    ///
    /// * `width`: Image width
    /// * `height`: Image height
    /// * `colorspace`: Image colorspaces
    ///
    /// returns: EncoderOptions
    pub const fn new(width: usize, height: usize, colorspace: ColorSpace) -> EncoderOptions {
        EncoderOptions {
            width,
            height,
            colorspace
        }
    }

    /// Get the width for which the image will be encoded in
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get height for which the image will be encoded in
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the colorspace for which the image will be encoded in
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Number of samples the pixel buffer must hold,
    /// `None` if the multiplication overflows
    pub fn expected_samples(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(self.colorspace.num_components())
    }
}
