// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod config;
pub mod doctor;
pub mod exporter;
pub mod missions;
pub mod points;

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Settings;
use crate::loaders::{missions_from_text, summary_from_text};
use crate::models::{MissionItem, TransactionSummary};
use crate::utils::read_source;

/// `--<flag>` if given, else the configured default.
pub(crate) fn source_path(sub: &clap::ArgMatches, flag: &str, default: PathBuf) -> PathBuf {
    sub.get_one::<String>(flag)
        .map(|s| PathBuf::from(s.trim()))
        .unwrap_or(default)
}

pub fn load_missions(settings: &Settings, sub: &clap::ArgMatches) -> Result<Vec<MissionItem>> {
    let raw = read_source(&source_path(sub, "raw", settings.mission_raw_path()))?;
    let labeled = read_source(&source_path(sub, "labeled", settings.mission_labeled_path()))?;
    Ok(missions_from_text(&raw, &labeled, &settings.icons()))
}

pub fn load_summary(settings: &Settings, sub: &clap::ArgMatches) -> Result<TransactionSummary> {
    let tx = read_source(&source_path(sub, "tx", settings.transactions_path()))?;
    let domains = read_source(&source_path(sub, "domains", settings.domains_path()))?;
    Ok(summary_from_text(&tx, &domains, &settings.spend_window))
}
