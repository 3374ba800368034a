// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;

use crate::config::{Settings, config_path};

pub fn handle(settings: &Settings, override_path: Option<&Path>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => println!("{}", serde_json::to_string_pretty(settings)?),
        Some(("path", _)) => {
            let path = match override_path {
                Some(p) => p.to_path_buf(),
                None => config_path()?,
            };
            println!("{}", path.display());
        }
        _ => {}
    }
    Ok(())
}
