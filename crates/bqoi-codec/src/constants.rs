/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub const QOI_OP_INDEX: u8 = 0x00;
// 00xxxxxx
pub const QOI_OP_DIFF: u8 = 0x40;
// 01xxxxxx
pub const QOI_OP_LUMA: u8 = 0x80;
// 10xxxxxx
pub const QOI_OP_RUN: u8 = 0xc0;
// 11xxxxxx
pub const QOI_OP_RGB: u8 = 0xfe;
// 11111110
pub const QOI_OP_RGBA: u8 = 0xff; // 11111111

pub const QOI_MASK_2: u8 = 0xc0; // (11)000000

pub const QOI_MAGIC: [u8; 4] = *b"qoif";
pub const QOI_HEADER_SIZE: usize = 14;
/// Written after the last chunk
pub const QOI_PADDING: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];

/// Longest run a single RUN chunk holds, 63 and 64 would collide with the RGB/RGBA tags
pub const QOI_MAX_RUN: u8 = 62;
pub const QOI_INDEX_SIZE: usize = 64;
