// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;

use super::source_path;
use crate::config::Settings;
use crate::loaders::missions::{ACTION_TYPE_COLUMN, COLUMNS, LabelJoin};
use crate::loaders::transactions::{self, BRAND, DOMAIN_COLUMNS, TX_COLUMNS};
use crate::models::CsvRecord;
use crate::parser::{rfc4180, simple};

pub fn handle(settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    let rows = collect_issues(settings, m);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", crate::utils::pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

fn read(path: &Path, rows: &mut Vec<Vec<String>>) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(s) => Some(s),
        Err(e) => {
            rows.push(vec!["unreadable_source".into(), format!("{}: {}", path.display(), e)]);
            None
        }
    }
}

fn missing_headers(raw: &str, required: &[&str]) -> Vec<String> {
    let header: HashSet<String> = simple::split_rows(raw)
        .into_iter()
        .next()
        .unwrap_or_default()
        .into_iter()
        .collect();
    required
        .iter()
        .filter(|c| !header.contains(**c))
        .map(|c| c.to_string())
        .collect()
}

/// Problems that would make a screen render defaults instead of data.
pub fn collect_issues(settings: &Settings, m: &clap::ArgMatches) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    // 1) Mission sources
    let raw_path = source_path(m, "raw", settings.mission_raw_path());
    let labeled_path = source_path(m, "labeled", settings.mission_labeled_path());
    let raw = read(&raw_path, &mut rows).map(|s| rfc4180::parse(&s));
    let labeled_text = read(&labeled_path, &mut rows);
    let labeled: Vec<CsvRecord> = labeled_text.as_deref().map(simple::parse).unwrap_or_default();

    if let Some(table) = &raw {
        if table.open_quote_at_eof() {
            rows.push(vec!["unterminated_quote".into(), raw_path.display().to_string()]);
        }
        for (name, needles) in COLUMNS {
            if table.column_containing(needles).is_none() {
                rows.push(vec!["missing_mission_column".into(), name.to_string()]);
            }
        }
        if let Some(text) = &labeled_text {
            if !missing_headers(text, &[ACTION_TYPE_COLUMN]).is_empty() {
                rows.push(vec!["missing_label_column".into(), ACTION_TYPE_COLUMN.into()]);
            }
            let data_rows = table.data_rows().len();
            if LabelJoin::detect(table, &labeled) == LabelJoin::Positional
                && labeled.len() != data_rows
            {
                rows.push(vec![
                    "label_row_count".into(),
                    format!("{} missions, {} labels", data_rows, labeled.len()),
                ]);
            }
        }
    }

    // 2) Transaction sources
    let tx_path = source_path(m, "tx", settings.transactions_path());
    let domains_path = source_path(m, "domains", settings.domains_path());
    let tx_text = read(&tx_path, &mut rows);
    let domains_text = read(&domains_path, &mut rows);

    if let Some(text) = &tx_text {
        for c in missing_headers(text, TX_COLUMNS) {
            rows.push(vec!["missing_tx_column".into(), c]);
        }
    }
    if let Some(text) = &domains_text {
        for c in missing_headers(text, DOMAIN_COLUMNS) {
            rows.push(vec!["missing_domain_column".into(), c]);
        }
    }
    if let (Some(tx), Some(domains)) = (&tx_text, &domains_text) {
        let brand_map = transactions::brand_domains(&simple::parse(domains));
        let mut seen = HashSet::new();
        for r in simple::parse(tx) {
            let brand = r.get(BRAND).to_string();
            if !brand.is_empty() && !brand_map.contains_key(&brand) && seen.insert(brand.clone()) {
                rows.push(vec!["unmapped_brand".into(), brand]);
            }
        }
    }
    rows
}
