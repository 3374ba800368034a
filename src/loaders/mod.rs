// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod backend;
pub mod missions;
pub mod transactions;

use serde::Serialize;

use crate::models::{MissionItem, SpendWindow, TransactionSummary};
use crate::parser::{rfc4180, simple};
use missions::IconResolver;

/// Raw text of the four bundled sources.
#[derive(Debug, Clone, Default)]
pub struct SourceText {
    pub mission_raw: String,
    pub mission_labeled: String,
    pub transactions: String,
    pub domains: String,
}

/// Everything the screens read, derived in one pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub missions: Vec<MissionItem>,
    pub summary: TransactionSummary,
}

impl Dataset {
    pub fn derive(src: &SourceText, icons: &IconResolver, window: &SpendWindow) -> Self {
        Self {
            missions: missions_from_text(&src.mission_raw, &src.mission_labeled, icons),
            summary: summary_from_text(&src.transactions, &src.domains, window),
        }
    }
}

/// Mission descriptions span lines, so the raw file goes through the quoted
/// dialect; the label file does not need it.
pub fn missions_from_text(raw: &str, labeled: &str, icons: &IconResolver) -> Vec<MissionItem> {
    missions::load(&rfc4180::parse(raw), &simple::parse(labeled), icons)
}

pub fn summary_from_text(tx: &str, domains: &str, window: &SpendWindow) -> TransactionSummary {
    transactions::load(&simple::parse(tx), &simple::parse(domains), window)
}
