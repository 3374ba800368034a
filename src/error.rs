// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid spend window {start}..{end}: {reason}")]
    InvalidWindow { start: u32, end: u32, reason: String },

    #[error("Could not determine platform-specific config dir")]
    NoConfigDir,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} failed ({status}): {body}")]
    Api { url: String, status: u16, body: String },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
