/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image Colorspace information

/// Channel layouts a bqoi image can be stored in
///
/// Pixels are always interleaved, i.e an RGBA image stores
/// `[r,g,b,a,r,g,b,a...]`
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColorSpace {
    /// Red, Green , Blue
    RGB,
    /// Red, Green, Blue, Alpha
    RGBA
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::RGBA => 4
        }
    }

    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::RGBA)
    }

    /// Map a channel count onto a colorspace
    ///
    /// Returns `None` for anything other than `3` or `4`
    ///
    /// # Example
    /// ```
    /// use bqoi_core::colorspace::ColorSpace;
    /// assert_eq!(ColorSpace::from_num_components(4), Some(ColorSpace::RGBA));
    /// assert_eq!(ColorSpace::from_num_components(2), None);
    /// ```
    pub const fn from_num_components(components: usize) -> Option<ColorSpace> {
        match components {
            3 => Some(Self::RGB),
            4 => Some(Self::RGBA),
            _ => None
        }
    }
}

/// Color characteristics
///
/// Describes how the stored values should be interpreted,
/// the codec itself never transforms values based on this,
/// it is carried along as metadata.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColorCharacteristics {
    /// Gamma corrected sRGB color channels with a linear alpha channel
    sRGB,
    /// All channels are linear
    Linear
}

impl ColorCharacteristics {
    /// Parse the label a host application uses for a colorspace
    ///
    /// Only `sRGB` and `Linear` are understood, matching is case sensitive
    ///
    /// # Example
    /// ```
    /// use bqoi_core::colorspace::ColorCharacteristics;
    /// assert_eq!(ColorCharacteristics::from_label("Linear"), Some(ColorCharacteristics::Linear));
    /// assert_eq!(ColorCharacteristics::from_label("Filmic"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<ColorCharacteristics> {
        match label {
            "sRGB" => Some(Self::sRGB),
            "Linear" => Some(Self::Linear),
            _ => None
        }
    }

    /// The host label for these characteristics, the inverse
    /// of [`from_label`](Self::from_label)
    pub const fn label(&self) -> &'static str {
        match self {
            Self::sRGB => "sRGB",
            Self::Linear => "Linear"
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::colorspace::{ColorCharacteristics, ColorSpace};

    #[test]
    fn components_round_trip() {
        for colorspace in [ColorSpace::RGB, ColorSpace::RGBA] {
            assert_eq!(
                ColorSpace::from_num_components(colorspace.num_components()),
                Some(colorspace)
            );
        }
        assert_eq!(ColorSpace::from_num_components(0), None);
        assert_eq!(ColorSpace::from_num_components(5), None);
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(
            ColorCharacteristics::from_label("sRGB"),
            Some(ColorCharacteristics::sRGB)
        );
        assert_eq!(ColorCharacteristics::from_label("srgb"), None);
        assert_eq!(ColorCharacteristics::Linear.label(), "Linear");
    }
}
