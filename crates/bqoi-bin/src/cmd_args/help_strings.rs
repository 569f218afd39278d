/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Default for `--max-width` and `--max-height`
pub static MAX_DIMENSION: &str = "16384";

pub static ENCODE_HELP: &str = "\
The input holds width*height*channels interleaved samples, row by row.
With --float every sample is a little endian f32, values outside [0,1] are clamped.

Example:
    bqoi encode -i frame.raw -o frame.qoi --width 1920 --height 1080 --channels 3";

pub static DECODE_HELP: &str = "\
The output holds width*height*channels interleaved bytes, row by row.
Use `bqoi probe` to find out the dimensions and channel count.";
