/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use bqoi_codec::{DescriptorError, QoiEncodeErrors, QoiErrors};

/// Everything that can stop a command line workflow
pub enum CliErrors {
    Io(std::io::Error),
    Decode(QoiErrors),
    Encode(QoiEncodeErrors),
    Descriptor(DescriptorError),
    Json(serde_json::Error),
    GenericString(String),
    Generic(&'static str)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliErrors::Io(err) => writeln!(f, "I/O error: {err}"),
            CliErrors::Decode(err) => writeln!(f, "Decoding failed: {err:?}"),
            CliErrors::Encode(err) => writeln!(f, "Encoding failed: {err:?}"),
            CliErrors::Descriptor(err) => writeln!(f, "Invalid image description: {err:?}"),
            CliErrors::Json(err) => writeln!(f, "Could not serialize metadata: {err}"),
            CliErrors::GenericString(err) => writeln!(f, "{err}"),
            CliErrors::Generic(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for CliErrors {}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::Io(value)
    }
}

impl From<QoiErrors> for CliErrors {
    fn from(value: QoiErrors) -> Self {
        CliErrors::Decode(value)
    }
}

impl From<QoiEncodeErrors> for CliErrors {
    fn from(value: QoiEncodeErrors) -> Self {
        CliErrors::Encode(value)
    }
}

impl From<DescriptorError> for CliErrors {
    fn from(value: DescriptorError) -> Self {
        CliErrors::Descriptor(value)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(value: serde_json::Error) -> Self {
        CliErrors::Json(value)
    }
}

impl From<String> for CliErrors {
    fn from(value: String) -> Self {
        CliErrors::GenericString(value)
    }
}

impl From<&'static str> for CliErrors {
    fn from(value: &'static str) -> Self {
        CliErrors::Generic(value)
    }
}
