// DipLog - GPL-3.0-or-later
// This file is part of DipLog.
//
// Copyright (C) 2026 The DipLog Authors
//
// DipLog is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// DipLog is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with DipLog.  If not, see <https://www.gnu.org/licenses/>.

//! Classify a batch of raw access-log lines and write them as JSON.

use anyhow::Context;
use chrono_tz::Tz;
use clap::Parser;
use diplog::config::GlobalConfig;
use diplog::logging::init_logging;
use diplog::LogPresenter;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "diplog-export")]
#[command(version)]
#[command(about = "Export classified access-log entries as JSON", long_about = None)]
struct Args {
    /// Access-log file to read, or `-` for stdin
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Write JSON here instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Only export entries matching this search
    #[arg(short, long, default_value = "")]
    search: String,

    /// IANA timezone for formatted timestamps
    #[arg(long, value_name = "ZONE")]
    timezone: Option<Tz>,
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    if input.as_os_str() == "-" {
        std::io::stdin()
            .read_to_end(&mut buffer)
            .context("failed to read stdin")?;
    } else {
        buffer = std::fs::read(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
    }
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn main() -> anyhow::Result<()> {
    init_logging("info");
    let args = Args::parse();

    let mut config = GlobalConfig::load();
    if let Some(timezone) = args.timezone {
        config.display_timezone = timezone;
    }

    let content = read_input(&args.input)?;
    let lines: Vec<&str> = content.lines().collect();
    let entries = LogPresenter::new(config.timestamp_style()).present(&lines, &args.search);
    tracing::info!("Exporting {} of {} lines", entries.len(), lines.len());

    let json = serde_json::to_string_pretty(&entries)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}
