// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::CsvRecord;
use crate::utils::strip_bom;

/// Splits unquoted CSV into trimmed cells, skipping blank lines.
/// Commas and newlines inside cells are not supported.
pub fn split_rows(raw: &str) -> Vec<Vec<String>> {
    strip_bom(raw)
        .split('\n')
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.split(',').map(|c| c.trim().to_string()).collect())
        .collect()
}

/// Parses unquoted CSV into header-keyed records. Short lines read the
/// missing cells as ""; cells past the last header are ignored.
pub fn parse(raw: &str) -> Vec<CsvRecord> {
    let mut rows = split_rows(raw).into_iter();
    let Some(headers) = rows.next() else {
        return Vec::new();
    };
    rows.map(|vals| CsvRecord::zip(&headers[..], &vals[..])).collect()
}
