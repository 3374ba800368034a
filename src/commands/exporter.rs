// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde::Serialize;

use super::{load_missions, load_summary};
use crate::config::Settings;

pub fn handle(settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("history", sub)) => {
            let rows = load_summary(settings, sub)?.transaction_history;
            let records = rows
                .iter()
                .map(|e| {
                    vec![
                        e.date.clone(),
                        e.title.clone(),
                        e.amount.clone(),
                        e.kind.as_str().to_string(),
                    ]
                })
                .collect();
            write_out(sub, &["date", "title", "amount", "type"], records, &rows)
        }
        Some(("domains", sub)) => {
            let rows = load_summary(settings, sub)?.domain_spend;
            let records = rows
                .iter()
                .map(|d| vec![d.name.clone(), d.value.to_string(), d.color.clone()])
                .collect();
            write_out(sub, &["name", "value", "color"], records, &rows)
        }
        Some(("missions", sub)) => {
            let rows = load_missions(settings, sub)?;
            let records = rows
                .iter()
                .map(|m| {
                    vec![
                        m.id.to_string(),
                        m.title.clone(),
                        m.point.to_string(),
                        m.content.clone(),
                        m.link.clone(),
                        m.action_type.clone(),
                        m.mission_type.clone(),
                        m.icon_url.clone(),
                    ]
                })
                .collect();
            let headers = [
                "id",
                "title",
                "point",
                "content",
                "link",
                "actionType",
                "missionType",
                "iconUrl",
            ];
            write_out(sub, &headers, records, &rows)
        }
        _ => Ok(()),
    }
}

fn write_out<T: Serialize>(
    sub: &clap::ArgMatches,
    headers: &[&str],
    records: Vec<Vec<String>>,
    items: &[T],
) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap().trim();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
            wtr.write_record(headers)?;
            for r in records {
                wtr.write_record(&r)?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(items)?)
                .with_context(|| format!("Write {}", out))?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    tracing::info!(rows = items.len(), %out, "export written");
    println!("Exported {} rows to {}", items.len(), out);
    Ok(())
}
