// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pointfeed::parser::{rfc4180, simple};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[test]
fn quoted_multiline_cell_stays_on_one_row() {
    let table = rfc4180::parse("a,\"b\nc\",d");
    assert_eq!(table.rows(), &[row(&["a", "b\nc", "d"])]);
    assert!(!table.open_quote_at_eof());
}

#[test]
fn doubled_quotes_unescape() {
    let table = rfc4180::parse(r#""He said ""hi""""#);
    assert_eq!(table.rows(), &[row(&["He said \"hi\""])]);
}

#[test]
fn quoted_commas_do_not_split() {
    let table = rfc4180::parse("name,memo\nkim,\"one, two\"\n");
    assert_eq!(table.data_rows(), &[row(&["kim", "one, two"])]);
}

#[test]
fn bom_is_stripped_from_first_header() {
    let table = rfc4180::parse("\u{feff}name,age\nkim,3");
    assert_eq!(table.header()[0], "name");

    let records = simple::parse("\u{feff}name,age\nkim,3");
    assert_eq!(records[0].get("name"), "kim");
    assert!(!records[0].contains("\u{feff}name"));
}

#[test]
fn blank_lines_dropped_single_value_rows_kept() {
    let table = rfc4180::parse("h\n\nx\n\n");
    assert_eq!(table.rows(), &[row(&["h"]), row(&["x"])]);

    let table = rfc4180::parse("a,b\n,\n");
    assert_eq!(table.rows(), &[row(&["a", "b"]), row(&["", ""])]);
}

#[test]
fn crlf_line_endings_and_cell_trimming() {
    let table = rfc4180::parse("a , b\r\n 1,2 \r\n");
    assert_eq!(table.rows(), &[row(&["a", "b"]), row(&["1", "2"])]);
}

#[test]
fn unterminated_quote_absorbs_rest_of_input() {
    let table = rfc4180::parse("a,\"open\nrest,of,file");
    assert!(table.open_quote_at_eof());
    assert_eq!(table.rows(), &[row(&["a", "open\nrest,of,file"])]);
}

#[test]
fn empty_input_gives_empty_table() {
    let table = rfc4180::parse("");
    assert!(table.is_empty());
    assert!(table.header().is_empty());
    assert!(table.data_rows().is_empty());
    assert!(simple::parse("").is_empty());
    assert!(simple::parse("only,header\n").is_empty());
}

#[test]
fn simple_pads_short_rows_and_ignores_extra_cells() {
    let records = simple::parse("a,b,c\n1\n1,2,3,4\n");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("a"), "1");
    assert_eq!(records[0].get("b"), "");
    assert_eq!(records[0].get("c"), "");
    assert_eq!(records[1].get("c"), "3");
    assert_eq!(records[1].get("missing"), "");
}

#[test]
fn simple_does_not_understand_quotes() {
    let records = simple::parse("a,b\n\"x,y\",z\n");
    assert_eq!(records[0].get("a"), "\"x");
    assert_eq!(records[0].get("b"), "y\"");
}

#[test]
fn dialects_agree_without_quoted_newlines() {
    let text = "\u{feff}brand_code,domain\nA,Beauty\n\n  \nB, Food \r\nC\n,\n";
    let strict = rfc4180::parse(text);
    assert_eq!(strict.rows(), simple::split_rows(text).as_slice());
    assert_eq!(strict.to_records(), simple::parse(text));
}

#[test]
fn column_lookup_matches_substrings() {
    let table = rfc4180::parse("기업명, 적립 포인트 ,미션제목(필수)\n");
    assert_eq!(table.column_containing(&["미션제목"]), Some(2));
    assert_eq!(table.column_containing(&["적립포인트", "적립 포인트"]), Some(1));
    assert_eq!(table.column_containing(&["링크"]), None);
}
