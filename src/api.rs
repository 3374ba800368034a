// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use reqwest::blocking::Client;
use serde_json::{Value, json};

use crate::config::ApiSettings;
use crate::error::{Error, Result};
use crate::utils::http_client;

/// Blocking client for the mission recommendation service.
pub struct MissionApi {
    client: Client,
    base: String,
    api_key: Option<String>,
}

impl MissionApi {
    pub fn from_settings(s: &ApiSettings) -> Result<Self> {
        Ok(Self {
            client: http_client(s.timeout_secs)?,
            base: s.mission_base.trim_end_matches('/').to_string(),
            api_key: s.api_key.clone(),
        })
    }

    pub fn recommend(&self, user_id: &str, k: u32, exclude_days: u32) -> Result<Value> {
        self.post(
            "/missions/recommend",
            &json!({ "user_id": user_id, "k": k, "exclude_days": exclude_days }),
        )
    }

    /// Marks a mission done. `date_str` defaults to today, `completed_at` to now, both in UTC.
    pub fn complete(
        &self,
        user_id: &str,
        mission_id: i64,
        date_str: Option<&str>,
        completed_at: Option<&str>,
    ) -> Result<Value> {
        self.post("/missions/complete", &complete_body(user_id, mission_id, date_str, completed_at))
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = format!("{}{}", self.base, path);
        tracing::debug!(%url, "POST");
        let mut req = self.client.post(&url).json(body);
        if let Some(key) = &self.api_key {
            req = req.header("x-api-key", key);
        }
        let res = req.send()?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            return Err(Error::Api {
                url,
                status: status.as_u16(),
                body,
            });
        }
        Ok(res.json()?)
    }
}

pub fn complete_body(
    user_id: &str,
    mission_id: i64,
    date_str: Option<&str>,
    completed_at: Option<&str>,
) -> Value {
    let now = Utc::now();
    let date_str = date_str
        .map(str::to_string)
        .unwrap_or_else(|| now.format("%Y-%m-%d").to_string());
    let completed_at = completed_at
        .map(str::to_string)
        .unwrap_or_else(|| now.format("%Y-%m-%d %H:%M:%S").to_string());
    json!({
        "user_id": user_id,
        "date_str": date_str,
        "completed_mission_ids": [mission_id],
        "completed_at": completed_at,
    })
}
