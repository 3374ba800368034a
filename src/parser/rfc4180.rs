// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::CsvTable;
use crate::utils::strip_bom;

/// Tokenizes quoted CSV into a table.
///
/// Quoted cells may contain commas, newlines and doubled quotes. Every cell
/// is trimmed. A row made of a single empty cell is a blank line and dropped.
/// An unterminated quote swallows the rest of the input into the open cell;
/// the returned table reports it through [`CsvTable::open_quote_at_eof`].
pub fn parse(raw: &str) -> CsvTable {
    let text = strip_bom(raw);
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
            continue;
        }
        match ch {
            '"' => in_quotes = true,
            ',' => row.push(take_field(&mut field)),
            '\n' => flush_row(&mut rows, &mut row, &mut field),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                flush_row(&mut rows, &mut row, &mut field);
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        tracing::warn!(
            row = rows.len() + 1,
            "unterminated quoted field; absorbed remaining input"
        );
    }
    flush_row(&mut rows, &mut row, &mut field);

    CsvTable::new(rows, in_quotes)
}

fn take_field(field: &mut String) -> String {
    let v = field.trim().to_string();
    field.clear();
    v
}

fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>, field: &mut String) {
    row.push(take_field(field));
    let done = std::mem::take(row);
    if done.len() > 1 || !done[0].is_empty() {
        rows.push(done);
    }
}
