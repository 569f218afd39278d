/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::constants::QOI_INDEX_SIZE;
use crate::Pixel;

/// The running color index
///
/// Slot `h` holds the most recently stored pixel whose
/// [`hash_index`](Pixel::hash_index) is `h`, or [`Pixel::OPAQUE_BLACK`]
/// if none was stored yet.
///
/// One cache lives for exactly one encode or decode pass.
#[derive(Clone, Debug)]
pub struct ColorIndexCache {
    slots: [Pixel; QOI_INDEX_SIZE]
}

impl Default for ColorIndexCache {
    fn default() -> Self {
        ColorIndexCache::new()
    }
}

impl ColorIndexCache {
    pub const fn new() -> ColorIndexCache {
        ColorIndexCache {
            slots: [Pixel::OPAQUE_BLACK; QOI_INDEX_SIZE]
        }
    }

    /// Pixel stored in `slot`, only the low six bits of `slot` are used
    #[inline(always)]
    pub const fn get(&self, slot: u8) -> Pixel {
        self.slots[(slot & 63) as usize]
    }

    /// The slot holding `px` if it is cached
    #[inline(always)]
    pub fn position_of(&self, px: Pixel) -> Option<u8> {
        let slot = px.hash_index();

        if self.slots[slot] == px {
            Some(slot as u8)
        } else {
            None
        }
    }

    /// Store `px` in its hash slot, returning the slot
    #[inline(always)]
    pub fn insert(&mut self, px: Pixel) -> u8 {
        let slot = px.hash_index();
        self.slots[slot] = px;
        slot as u8
    }
}

#[cfg(test)]
mod tests {
    use crate::{ColorIndexCache, Pixel};

    #[test]
    fn starts_with_opaque_black_everywhere() {
        let cache = ColorIndexCache::new();

        for slot in 0..64 {
            assert_eq!(cache.get(slot), Pixel::OPAQUE_BLACK);
        }
        assert_eq!(cache.position_of(Pixel::OPAQUE_BLACK), Some(53));
        assert_eq!(cache.position_of(Pixel::new(0, 0, 0, 0)), None);
    }

    #[test]
    fn colliding_pixels_overwrite_each_other() {
        let mut cache = ColorIndexCache::new();
        // both land in slot 0
        let first = Pixel::new(64, 0, 0, 0);
        let second = Pixel::new(0, 0, 0, 64);
        assert_eq!(first.hash_index(), second.hash_index());

        let slot = cache.insert(first);
        assert_eq!(cache.position_of(first), Some(slot));

        cache.insert(second);
        assert_eq!(cache.position_of(first), None);
        assert_eq!(cache.get(slot), second);
    }
}
