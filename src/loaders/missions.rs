// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use crate::models::{CsvRecord, CsvTable, MissionItem};
use crate::utils::parse_int_lenient;

pub const DEFAULT_ACTION_TYPE: &str = "Click";
pub const ACTION_TYPE_COLUMN: &str = "mission_action_type";
pub const KEY_COLUMN: &str = "mission_id";
pub const ICON_PATH: &str = "/storage/v1/object/public/mission-icon/";

// Some icons were uploaded without an extension.
const ICON_FILES: &[(&str, &str)] = &[
    ("Click", "Click.svg"),
    ("PurchaseReward", "PurchaseReward.svg"),
    ("SNS", "SNS"),
    ("Participate", "Participate"),
];

const TITLE: &[&str] = &["미션제목"];
const POINT: &[&str] = &["적립포인트", "적립 포인트"];
const CONTENT: &[&str] = &["미션내용", "미션 내용"];
const LINK: &[&str] = &["링크"];
const MISSION_TYPE: &[&str] = &["미션유형"];

/// Field name and the header fragments that identify its column.
pub const COLUMNS: &[(&str, &[&str])] = &[
    ("title", TITLE),
    ("point", POINT),
    ("content", CONTENT),
    ("link", LINK),
    ("mission_type", MISSION_TYPE),
];

/// Maps an action type to its icon in the mission-icon storage bucket.
#[derive(Debug, Clone)]
pub struct IconResolver {
    base: String,
}

impl IconResolver {
    pub fn new(storage_url: &str) -> Self {
        Self {
            base: format!("{}{}", storage_url.trim_end_matches('/'), ICON_PATH),
        }
    }

    pub fn file_name(action_type: &str) -> String {
        ICON_FILES
            .iter()
            .find(|(k, _)| *k == action_type)
            .map(|(_, f)| f.to_string())
            .unwrap_or_else(|| format!("{}.svg", action_type))
    }

    pub fn resolve(&self, action_type: &str) -> String {
        format!("{}{}", self.base, Self::file_name(action_type))
    }
}

/// How raw mission rows find their labeled counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelJoin {
    /// Pair rows by position. Breaks silently if either file is reordered.
    Positional,
    /// Pair rows by the value of a shared id column.
    Keyed(String),
}

impl LabelJoin {
    /// Keyed when the raw header has `mission_id` and every label carries one.
    pub fn detect(raw: &CsvTable, labeled: &[CsvRecord]) -> Self {
        let raw_has_key = raw.header().iter().any(|h| h == KEY_COLUMN);
        let labels_keyed =
            !labeled.is_empty() && labeled.iter().all(|r| !r.get(KEY_COLUMN).is_empty());
        if raw_has_key && labels_keyed {
            LabelJoin::Keyed(KEY_COLUMN.to_string())
        } else {
            LabelJoin::Positional
        }
    }
}

struct Columns {
    title: Option<usize>,
    point: Option<usize>,
    content: Option<usize>,
    link: Option<usize>,
    mission_type: Option<usize>,
}

impl Columns {
    fn locate(raw: &CsvTable) -> Self {
        let cols = Self {
            title: raw.column_containing(TITLE),
            point: raw.column_containing(POINT),
            content: raw.column_containing(CONTENT),
            link: raw.column_containing(LINK),
            mission_type: raw.column_containing(MISSION_TYPE),
        };
        for (name, needles) in COLUMNS {
            if raw.column_containing(needles).is_none() {
                tracing::debug!(column = *name, "mission column not found; using default");
            }
        }
        cols
    }
}

fn cell(row: &[String], idx: Option<usize>) -> &str {
    idx.and_then(|i| row.get(i)).map(String::as_str).unwrap_or("")
}

/// Builds one mission per raw data row, ids numbered from 1.
pub fn load(raw: &CsvTable, labeled: &[CsvRecord], icons: &IconResolver) -> Vec<MissionItem> {
    load_with(raw, labeled, icons, &LabelJoin::detect(raw, labeled))
}

pub fn load_with(
    raw: &CsvTable,
    labeled: &[CsvRecord],
    icons: &IconResolver,
    join: &LabelJoin,
) -> Vec<MissionItem> {
    let cols = Columns::locate(raw);

    let keyed: Option<(usize, HashMap<&str, &CsvRecord>)> = match join {
        LabelJoin::Positional => None,
        LabelJoin::Keyed(key) => raw.header().iter().position(|h| h == key).map(|idx| {
            let by_key = labeled.iter().map(|r| (r.get(key), r)).collect();
            (idx, by_key)
        }),
    };
    tracing::debug!(?join, rows = raw.data_rows().len(), "loading missions");

    raw.data_rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let label = match &keyed {
                Some((idx, by_key)) => by_key.get(cell(row, Some(*idx))).copied(),
                None => labeled.get(i),
            };
            let action_type = label
                .map(|l| l.get(ACTION_TYPE_COLUMN))
                .filter(|a| !a.is_empty())
                .unwrap_or(DEFAULT_ACTION_TYPE)
                .to_string();
            MissionItem {
                id: i as i64 + 1,
                title: cell(row, cols.title).to_string(),
                point: parse_int_lenient(cell(row, cols.point)).max(0),
                content: cell(row, cols.content).to_string(),
                link: cell(row, cols.link).to_string(),
                icon_url: icons.resolve(&action_type),
                action_type,
                mission_type: cell(row, cols.mission_type).to_string(),
            }
        })
        .collect()
}
