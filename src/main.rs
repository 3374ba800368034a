// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use pointfeed::{cli, commands, config};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let filter = match matches.get_count("verbose") {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let settings = config::load(config_path.as_deref()).context("Load settings")?;
    tracing::debug!(data_dir = %settings.data_dir.display(), "settings loaded");

    match matches.subcommand() {
        Some(("missions", sub)) => commands::missions::handle(&settings, sub)?,
        Some(("points", sub)) => commands::points::handle(&settings, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&settings, sub)?,
        Some(("doctor", sub)) => commands::doctor::handle(&settings, sub)?,
        Some(("config", sub)) => commands::config::handle(&settings, config_path.as_deref(), sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
