/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use bqoi_codec::ImageDescriptor;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// What `probe` reports for one file
pub struct Metadata {
    file:       OsString,
    size:       u64,
    descriptor: ImageDescriptor
}

impl Metadata {
    pub fn new(file: OsString, size: u64, descriptor: ImageDescriptor) -> Metadata {
        Metadata {
            file,
            size,
            descriptor
        }
    }
}

impl Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageMetadata", 7)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("width", &self.descriptor.width())?;
        state.serialize_field("height", &self.descriptor.height())?;
        state.serialize_field("channels", &self.descriptor.channels())?;
        state.serialize_field("colorspace", &self.descriptor.colorspace())?;
        state.serialize_field(
            "color_characteristics",
            &self.descriptor.characteristics()
        )?;

        state.end()
    }
}
