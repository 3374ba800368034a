// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

use super::load_missions;
use crate::api::MissionApi;
use crate::config::Settings;
use crate::loaders::backend::{self, MAX_MISSIONS};
use crate::models::MissionItem;
use crate::utils::{maybe_print_json, parse_date, pretty_table, read_source};

pub fn handle(settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let data = load_missions(settings, sub)?;
            print_missions(sub, &data)
        }
        Some(("normalize", sub)) => {
            let data = normalized_rows(settings, sub)?;
            print_missions(sub, &data)
        }
        Some(("recommend", sub)) => recommend(settings, sub),
        Some(("complete", sub)) => complete(settings, sub),
        _ => Ok(()),
    }
}

fn print_missions(sub: &clap::ArgMatches, data: &[MissionItem]) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|m| {
            vec![
                m.id.to_string(),
                m.title.clone(),
                format!("{}P", m.point),
                m.mission_type.clone(),
                m.action_type.clone(),
                m.link.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Title", "Point", "Type", "Action", "Link"], rows)
    );
    Ok(())
}

/// Missions from a saved recommendation payload, backed by the static list.
pub fn normalized_rows(settings: &Settings, sub: &clap::ArgMatches) -> Result<Vec<MissionItem>> {
    let path = sub.get_one::<String>("payload").unwrap().trim();
    let text = read_source(Path::new(path))?;
    let payload: Value =
        serde_json::from_str(&text).with_context(|| format!("Parse payload {}", path))?;
    let fallback = load_missions(settings, sub)?;
    Ok(backend::normalize(&payload, &fallback))
}

fn recommend(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let fallback = load_missions(settings, sub)?;
    let user = sub
        .get_one::<String>("user")
        .cloned()
        .unwrap_or_else(|| settings.api.user_id.clone());
    let k = sub.get_one::<u32>("k").copied().unwrap_or(settings.api.k);
    let exclude_days = sub
        .get_one::<u32>("exclude_days")
        .copied()
        .unwrap_or(settings.api.exclude_days);

    let fetched = MissionApi::from_settings(&settings.api)
        .and_then(|api| api.recommend(&user, k, exclude_days));
    let data = match fetched {
        Ok(payload) => backend::normalize(&payload, &fallback),
        Err(e) => {
            tracing::warn!(error = %e, "mission recommendation failed; using static missions");
            fallback.into_iter().take(MAX_MISSIONS).collect()
        }
    };
    print_missions(sub, &data)
}

fn complete(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let user = sub
        .get_one::<String>("user")
        .map(|s| s.as_str())
        .unwrap_or(settings.api.user_id.as_str());
    let date = match sub.get_one::<String>("date") {
        Some(d) => Some(parse_date(d.trim())?.to_string()),
        None => None,
    };
    let api = MissionApi::from_settings(&settings.api)?;
    let res = api
        .complete(user, id, date.as_deref(), None)
        .with_context(|| format!("Complete mission {} for {}", id, user))?;
    println!("{}", serde_json::to_string_pretty(&res)?);
    Ok(())
}
