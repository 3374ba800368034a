// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::parse_int_lenient;

/// Parsed CSV grid. The first row is the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    rows: Vec<Vec<String>>,
    open_quote_at_eof: bool,
}

impl CsvTable {
    pub fn new(rows: Vec<Vec<String>>, open_quote_at_eof: bool) -> Self {
        Self {
            rows,
            open_quote_at_eof,
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn header(&self) -> &[String] {
        self.rows.first().map(|r| r.as_slice()).unwrap_or(&[])
    }

    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when the input ended inside a quoted field and the remainder was
    /// absorbed into the last cell.
    pub fn open_quote_at_eof(&self) -> bool {
        self.open_quote_at_eof
    }

    /// Index of the first header cell containing any of `needles`.
    pub fn column_containing(&self, needles: &[&str]) -> Option<usize> {
        self.header()
            .iter()
            .position(|h| needles.iter().any(|n| h.contains(n)))
    }

    /// Header-keyed view of the data rows, zipped the same way the simple
    /// dialect zips its lines.
    pub fn to_records(&self) -> Vec<CsvRecord> {
        let header = self.header();
        self.data_rows()
            .iter()
            .map(|row| CsvRecord::zip(header, row.as_slice()))
            .collect()
    }
}

/// One header→value mapping. Absent headers read as "".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRecord {
    fields: HashMap<String, String>,
}

impl CsvRecord {
    pub fn zip<H: AsRef<str>, V: AsRef<str>>(headers: &[H], values: &[V]) -> Self {
        let mut fields = HashMap::with_capacity(headers.len());
        for (i, h) in headers.iter().enumerate() {
            let v = values.get(i).map(|v| v.as_ref()).unwrap_or("");
            fields.insert(h.as_ref().to_string(), v.to_string());
        }
        Self { fields }
    }

    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn int(&self, key: &str) -> i64 {
        parse_int_lenient(self.get(key))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CsvRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionItem {
    pub id: i64,
    pub title: String,
    pub point: i64,
    pub content: String,
    pub link: String,
    pub action_type: String,
    pub mission_type: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSpend {
    pub name: String,
    pub value: i64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Earn,
    Use,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Earn => "earn",
            TxKind::Use => "use",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxHistoryEntry {
    pub date: String, // YYYY.MM.DD
    pub title: String,
    pub amount: String, // "+1500P" / "-300P"
    #[serde(rename = "type")]
    pub kind: TxKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub total_earned_points: i64,
    pub total_spend: i64,
    pub unique_brand_count: usize,
    pub domain_spend: Vec<DomainSpend>,
    pub transaction_history: Vec<TxHistoryEntry>,
    pub total_earn_sum: i64,
    pub total_use_sum: i64,
}

/// Inclusive date range, both ends as numeric YYYYMMDD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendWindow {
    pub start: u32,
    pub end: u32,
}

impl Default for SpendWindow {
    fn default() -> Self {
        Self {
            start: 20260101,
            end: 20260131,
        }
    }
}

impl SpendWindow {
    pub fn contains(&self, compact_date: &str) -> bool {
        let d = parse_int_lenient(compact_date);
        d >= i64::from(self.start) && d <= i64::from(self.end)
    }
}
