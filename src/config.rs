// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::loaders::missions::IconResolver;
use crate::models::SpendWindow;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.pointfeed", "Pointfeed", "pointfeed"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFiles {
    pub mission_raw: String,
    pub mission_labeled: String,
    pub transactions: String,
    pub domains: String,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            mission_raw: "mission_raw.csv".into(),
            mission_labeled: "mission_labeled_stage1.csv".into(),
            transactions: "sample.csv".into(),
            domains: "domain_master_forcoupon.csv".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub mission_base: String,
    pub api_key: Option<String>,
    pub user_id: String,
    pub k: u32,
    pub exclude_days: u32,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            mission_base: "http://localhost:8001".into(),
            api_key: None,
            user_id: "U000001".into(),
            k: 3,
            exclude_days: 7,
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub files: DataFiles,
    pub storage_url: String,
    pub api: ApiSettings,
    pub spend_window: SpendWindow,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            files: DataFiles::default(),
            storage_url: String::new(),
            api: ApiSettings::default(),
            spend_window: SpendWindow::default(),
        }
    }
}

impl Settings {
    pub fn mission_raw_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.mission_raw)
    }

    pub fn mission_labeled_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.mission_labeled)
    }

    pub fn transactions_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.transactions)
    }

    pub fn domains_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.domains)
    }

    pub fn icons(&self) -> IconResolver {
        IconResolver::new(&self.storage_url)
    }

    /// Applies `POINTFEED_*` overrides. `lookup` is `std::env::var` outside tests.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("POINTFEED_DATA_DIR") {
            self.data_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("POINTFEED_STORAGE_URL") {
            self.storage_url = v;
        }
        if let Some(v) = lookup("POINTFEED_MISSION_API") {
            self.api.mission_base = v;
        }
        if let Some(v) = lookup("POINTFEED_API_KEY") {
            self.api.api_key = Some(v).filter(|k| !k.is_empty());
        }
        if let Some(v) = lookup("POINTFEED_USER_ID") {
            self.api.user_id = v;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let SpendWindow { start, end } = self.spend_window;
        let invalid = |reason: String| Error::InvalidWindow { start, end, reason };
        for bound in [start, end] {
            NaiveDate::parse_from_str(&bound.to_string(), "%Y%m%d")
                .map_err(|e| invalid(format!("{} is not a YYYYMMDD date ({})", bound, e)))?;
        }
        if start > end {
            return Err(invalid("start is after end".into()));
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(Error::NoConfigDir)?;
    Ok(proj.config_dir().join("config.json"))
}

/// Reads settings from `path`, or from the platform config dir when `None`.
/// A missing file yields defaults; environment overrides always apply.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    let mut settings = if path.exists() {
        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.clone(),
            source,
        })?
    } else {
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        Settings::default()
    };
    settings.apply_env(|k| std::env::var(k).ok());
    settings.validate()?;
    Ok(settings)
}

pub fn save(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, format!("{}\n", serde_json::to_string_pretty(settings)?))?;
    Ok(())
}
