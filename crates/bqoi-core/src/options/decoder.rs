/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global Decoder options

/// Decoder options
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:   usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:  usize,
    /// Treat recoverable stream defects as errors
    ///
    /// When set to false, the defect is logged via the log crate
    /// and decoding continues.
    ///
    /// When set to true, this will return an `Result<Err>` on the defect.
    ///
    /// - Default value: false
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: false
        }
    }
}

impl DecoderOptions {
    /// Options that error out on every defect a decoder can detect
    pub fn new_strict() -> DecoderOptions {
        DecoderOptions::default().set_strict_mode(true)
    }

    /// Options suited for a command line tool, lenient on
    /// stream defects and without size limits
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX)
    }

    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// And reject most errors
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in standards conforming/
    /// strict mode
    ///
    /// # Arguments
    /// - `yes`: Whether to turn strict mode on or off
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}
