// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use super::load_summary;
use crate::config::Settings;
use crate::models::{SpendWindow, TxHistoryEntry};
use crate::utils::{fmt_thousands, maybe_print_json, pretty_table};

pub fn handle(settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(settings, sub)?,
        Some(("history", sub)) => history(settings, sub)?,
        Some(("domains", sub)) => domains(settings, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsCard {
    pub total_earned_points: i64,
    pub total_earn_sum: i64,
    pub total_use_sum: i64,
    pub total_spend: i64,
    pub unique_brand_count: usize,
    pub spend_window: SpendWindow,
}

pub fn card(settings: &Settings, sub: &clap::ArgMatches) -> Result<PointsCard> {
    let s = load_summary(settings, sub)?;
    Ok(PointsCard {
        total_earned_points: s.total_earned_points,
        total_earn_sum: s.total_earn_sum,
        total_use_sum: s.total_use_sum,
        total_spend: s.total_spend,
        unique_brand_count: s.unique_brand_count,
        spend_window: settings.spend_window,
    })
}

fn summary(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let c = card(settings, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &c)? {
        let rows = vec![
            vec!["Points".into(), format!("{}P", fmt_thousands(c.total_earned_points))],
            vec!["Earned".into(), format!("{}P", fmt_thousands(c.total_earn_sum))],
            vec!["Used".into(), format!("{}P", fmt_thousands(c.total_use_sum))],
            vec![
                format!("Spend {}..{}", c.spend_window.start, c.spend_window.end),
                format!("{} KRW", fmt_thousands(c.total_spend)),
            ],
            vec!["Brands".into(), c.unique_brand_count.to_string()],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}

pub fn history_rows(settings: &Settings, sub: &clap::ArgMatches) -> Result<Vec<TxHistoryEntry>> {
    let mut rows = load_summary(settings, sub)?.transaction_history;
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

fn history(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let data = history_rows(settings, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
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
        println!("{}", pretty_table(&["Date", "Title", "Amount", "Type"], rows));
    }
    Ok(())
}

fn domains(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let s = load_summary(settings, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s.domain_spend)? {
        let rows: Vec<Vec<String>> = s
            .domain_spend
            .iter()
            .map(|d| vec![d.name.clone(), format!("{}원", fmt_thousands(d.value)), d.color.clone()])
            .collect();
        println!("{}", pretty_table(&["Domain", "Spent", "Color"], rows));
        println!("Total: {} KRW", fmt_thousands(s.total_spend));
    }
    Ok(())
}
