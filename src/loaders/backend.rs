// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Maps mission-service recommendations onto [`MissionItem`].
//!
//! The service has shipped both Korean and English field names. Each output
//! field lists the keys it accepts in priority order; the first key present
//! with a non-null value wins, even when that value is an empty string.

use serde_json::Value;

use crate::models::MissionItem;
use crate::utils::parse_int_lenient;

pub const MAX_MISSIONS: usize = 3;
pub const DEFAULT_ACTION_TYPE: &str = "mission";

const RESULT_POINTERS: &[&str] = &["/data/results", "/results"];

/// Keys accepted for one field, highest priority first.
pub struct FieldKeys(pub &'static [&'static str]);

impl FieldKeys {
    pub fn lookup<'a>(&self, m: &'a Value) -> Option<&'a Value> {
        self.0
            .iter()
            .filter_map(|k| m.get(*k))
            .find(|v| !v.is_null())
    }

    pub fn text(&self, m: &Value) -> Option<String> {
        self.lookup(m).map(value_text)
    }

    /// Like [`FieldKeys::text`], but `false`, `0` and `""` read as absent.
    pub fn truthy_text(&self, m: &Value) -> Option<String> {
        self.lookup(m).filter(|v| is_truthy(v)).map(value_text)
    }
}

pub const ID: FieldKeys = FieldKeys(&["mission_id", "id"]);
pub const TITLE: FieldKeys = FieldKeys(&["미션제목", "mission_title", "title"]);
pub const POINT: FieldKeys = FieldKeys(&["적립포인트", "reward_point", "point"]);
pub const LINK: FieldKeys = FieldKeys(&["링크", "link", "url"]);
pub const COMPANY: FieldKeys = FieldKeys(&["기업명", "company"]);
pub const DOMAIN: FieldKeys = FieldKeys(&["mission_domain"]);
pub const ACTION: FieldKeys = FieldKeys(&["mission_action_type"]);
pub const PARTNER: FieldKeys = FieldKeys(&["partner_flag"]);

fn value_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => true,
    }
}

fn value_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    }
}

fn results(payload: &Value) -> Option<&Vec<Value>> {
    RESULT_POINTERS
        .iter()
        .filter_map(|p| payload.pointer(p))
        .find_map(Value::as_array)
        .filter(|a| !a.is_empty())
}

fn resolve_id(m: &Value, position: i64) -> i64 {
    match ID.lookup(m) {
        Some(Value::String(s)) => match parse_int_lenient(s) {
            0 => position,
            n => n,
        },
        Some(v) => value_int(v).unwrap_or(position),
        None => position,
    }
}

fn resolve_point(m: &Value) -> i64 {
    let point = match POINT.lookup(m) {
        Some(v) => value_int(v).unwrap_or_else(|| parse_int_lenient(&value_text(v))),
        None => 0,
    };
    point.max(0)
}

fn describe(brand: &str, domain: &str, action: &str, partner: &str) -> String {
    let mut lines = Vec::with_capacity(4);
    if !brand.is_empty() {
        lines.push(format!("브랜드: {}", brand));
    }
    if !domain.is_empty() {
        lines.push(format!("도메인: {}", domain));
    }
    if !action.is_empty() {
        lines.push(format!("미션 타입: {}", action));
    }
    if !partner.is_empty() {
        let label = if partner == "Y" { "제휴" } else { "비제휴" };
        lines.push(format!("제휴 여부: {}", label));
    }
    lines.join("\n")
}

fn normalize_one(m: &Value, idx: usize, fallback: Option<&MissionItem>) -> MissionItem {
    let company = COMPANY.truthy_text(m);
    let brand = company.clone().unwrap_or_default();
    let domain = DOMAIN.truthy_text(m).unwrap_or_default();
    let action = ACTION.truthy_text(m).unwrap_or_default();
    let partner = PARTNER.truthy_text(m).unwrap_or_default();

    let title = TITLE
        .text(m)
        .unwrap_or_else(|| format!("{} 미션", company.as_deref().unwrap_or("미션")));

    let mission_type = match fallback {
        Some(f) => f.mission_type.clone(),
        None if !domain.is_empty() => format!("{} 미션", domain),
        None => "추천 미션".to_string(),
    };
    let action_type = match fallback {
        Some(f) => f.action_type.clone(),
        None if !action.is_empty() => action.clone(),
        None => DEFAULT_ACTION_TYPE.to_string(),
    };

    MissionItem {
        id: resolve_id(m, idx as i64 + 1),
        title,
        point: resolve_point(m),
        content: describe(&brand, &domain, &action, &partner),
        link: LINK.text(m).unwrap_or_default(),
        action_type,
        mission_type,
        icon_url: fallback.map(|f| f.icon_url.clone()).unwrap_or_default(),
    }
}

/// Up to [`MAX_MISSIONS`] missions from a recommendation payload. A payload
/// without results yields the first static missions instead.
pub fn normalize(payload: &Value, fallback: &[MissionItem]) -> Vec<MissionItem> {
    let Some(results) = results(payload) else {
        tracing::info!("recommendation payload has no results; using static missions");
        return fallback.iter().take(MAX_MISSIONS).cloned().collect();
    };
    results
        .iter()
        .take(MAX_MISSIONS)
        .enumerate()
        .map(|(idx, m)| normalize_one(m, idx, fallback.get(idx)))
        .collect()
}
