// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::{HashMap, HashSet};

use crate::models::{
    CsvRecord, DomainSpend, SpendWindow, TransactionSummary, TxHistoryEntry, TxKind,
};
use crate::utils::format_compact_date;

pub const DATE: &str = "거래일자";
pub const EARNED: &str = "적립포인트";
pub const USED: &str = "사용포인트";
pub const PURCHASE: &str = "구매금액";
pub const BRAND: &str = "브랜드";
pub const BRAND_NAME: &str = "브랜드명";
pub const BRAND_CODE: &str = "brand_code";
pub const DOMAIN: &str = "domain";

/// Headers the transaction file must carry, matched exactly.
pub const TX_COLUMNS: &[&str] = &[DATE, EARNED, USED, PURCHASE, BRAND, BRAND_NAME];
pub const DOMAIN_COLUMNS: &[&str] = &[BRAND_CODE, DOMAIN];

pub const UNKNOWN_DOMAIN: &str = "Unknown";
pub const DEFAULT_TITLE: &str = "CJ ONE";

const DOMAIN_COLORS: &[(&str, &str)] = &[
    ("Beauty", "#F16BC8"),
    ("Food", "#FF7A5C"),
    ("Entertainment", "#30C08D"),
    ("Commerce", "#5E6EFF"),
    ("General", "hsl(220, 10%, 65%)"),
    (UNKNOWN_DOMAIN, "hsl(0, 0%, 75%)"),
];

pub fn domain_color(name: &str) -> &'static str {
    DOMAIN_COLORS
        .iter()
        .find(|(d, _)| *d == name)
        .or_else(|| DOMAIN_COLORS.iter().find(|(d, _)| *d == UNKNOWN_DOMAIN))
        .map(|(_, c)| *c)
        .unwrap_or("hsl(0, 0%, 75%)")
}

/// brand_code -> domain. Rows without a code are skipped; a blank domain
/// maps to `Unknown`.
pub fn brand_domains(domains: &[CsvRecord]) -> HashMap<String, String> {
    domains
        .iter()
        .filter_map(|r| {
            let code = r.get(BRAND_CODE).trim();
            if code.is_empty() {
                return None;
            }
            let domain = match r.get(DOMAIN).trim() {
                "" => UNKNOWN_DOMAIN,
                d => d,
            };
            Some((code.to_string(), domain.to_string()))
        })
        .collect()
}

fn column_sum<'a>(rows: impl IntoIterator<Item = &'a CsvRecord>, column: &str) -> i64 {
    rows.into_iter()
        .fold(0i64, |sum, r| sum.saturating_add(r.int(column)))
}

/// Positive in-window purchases per domain, largest first.
pub fn domain_spend(
    tx: &[CsvRecord],
    brand_map: &HashMap<String, String>,
    window: &SpendWindow,
) -> Vec<DomainSpend> {
    // Vec keeps first-seen order so equal sums stay in a stable order.
    let mut agg: Vec<(String, i64)> = Vec::new();
    for r in tx.iter().filter(|r| window.contains(r.get(DATE))) {
        let amt = r.int(PURCHASE);
        if amt <= 0 {
            continue;
        }
        let domain = brand_map
            .get(r.get(BRAND))
            .map(String::as_str)
            .filter(|d| !d.is_empty())
            .unwrap_or(UNKNOWN_DOMAIN);
        match agg.iter().position(|(d, _)| d == domain) {
            Some(i) => agg[i].1 = agg[i].1.saturating_add(amt),
            None => agg.push((domain.to_string(), amt)),
        }
    }
    agg.retain(|(_, v)| *v > 0);
    agg.sort_by(|a, b| b.1.cmp(&a.1));
    agg.into_iter()
        .map(|(name, value)| DomainSpend {
            color: domain_color(&name).to_string(),
            name,
            value,
        })
        .collect()
}

/// One entry per row that earned or used points, newest first.
pub fn history(tx: &[CsvRecord]) -> Vec<TxHistoryEntry> {
    let mut entries: Vec<TxHistoryEntry> = tx
        .iter()
        .filter_map(|r| {
            let earned = r.int(EARNED);
            let used = r.int(USED);
            let (kind, amount) = if earned > 0 {
                (TxKind::Earn, format!("+{}P", earned))
            } else if used > 0 {
                (TxKind::Use, format!("-{}P", used))
            } else {
                return None;
            };
            let title = match r.get(BRAND_NAME) {
                "" => DEFAULT_TITLE,
                t => t,
            };
            Some(TxHistoryEntry {
                date: format_compact_date(r.get(DATE)),
                title: title.to_string(),
                amount,
                kind,
            })
        })
        .collect();
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

pub fn load(tx: &[CsvRecord], domains: &[CsvRecord], window: &SpendWindow) -> TransactionSummary {
    let brand_map = brand_domains(domains);
    let in_window: Vec<&CsvRecord> = tx.iter().filter(|r| window.contains(r.get(DATE))).collect();
    tracing::debug!(
        rows = tx.len(),
        in_window = in_window.len(),
        brands = brand_map.len(),
        "deriving transaction summary"
    );

    // Points card and history page read the same total.
    let earned = column_sum(tx, EARNED);
    let unique_brand_count = tx.iter().map(|r| r.get(BRAND)).collect::<HashSet<_>>().len();

    TransactionSummary {
        total_earned_points: earned,
        total_spend: column_sum(in_window.iter().copied(), PURCHASE),
        unique_brand_count,
        domain_spend: domain_spend(tx, &brand_map, window),
        transaction_history: history(tx),
        total_earn_sum: earned,
        total_use_sum: column_sum(tx, USED),
    }
}
