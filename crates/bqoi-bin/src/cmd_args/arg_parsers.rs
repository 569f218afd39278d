/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use bqoi_core::colorspace::ColorCharacteristics;
use clap::builder::PossibleValue;
use clap::ValueEnum;

/// Command line spelling of [`ColorCharacteristics`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ICharacteristics {
    Srgb,
    Linear
}

impl ICharacteristics {
    pub const fn to_characteristics(self) -> ColorCharacteristics {
        match self {
            ICharacteristics::Srgb => ColorCharacteristics::sRGB,
            ICharacteristics::Linear => ColorCharacteristics::Linear
        }
    }
}

impl ValueEnum for ICharacteristics {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Srgb, Self::Linear]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Srgb => PossibleValue::new("srgb").help("sRGB color with linear alpha"),
            Self::Linear => PossibleValue::new("linear").help("All channels linear")
        })
    }
}
