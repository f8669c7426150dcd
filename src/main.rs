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

use anyhow::Context;
use chrono_tz::Tz;
use clap::Parser;
use diplog::config::GlobalConfig;
use diplog::logging::init_logging;
use diplog::ui::{render_details, LogTable};
use diplog::{ApiClient, FileSource, LineLimit, LogPresenter, LogSource, LogView, LogViewState};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diplog")]
#[command(version)]
#[command(about = "View and search the admin API's HTTP access log", long_about = None)]
struct Args {
    /// Base URL of the admin API (overrides the config file)
    #[arg(long, env = "DIPLOG_API_URL", value_name = "URL")]
    api_url: Option<String>,

    /// Bearer credential sent to the admin API
    #[arg(long, env = "DIPLOG_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Read log lines from a local file instead of the admin API
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Number of trailing lines to fetch: 50, 100, 500 or 1000
    #[arg(short = 'n', long)]
    lines: Option<LineLimit>,

    /// Case-insensitive search over method, URL, status, level and address
    #[arg(short, long, default_value = "")]
    search: String,

    /// IANA timezone for displayed timestamps (e.g. Asia/Kolkata)
    #[arg(long, value_name = "ZONE")]
    timezone: Option<Tz>,

    /// Show every field of the entry at this row index
    #[arg(long, value_name = "INDEX", conflicts_with = "json")]
    detail: Option<usize>,

    /// Print the entries as JSON
    #[arg(long)]
    json: bool,

    /// Store the effective API URL, timezone and line limit as defaults
    #[arg(long)]
    save_config: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging("warn");
    let args = Args::parse();

    tracing::info!("DipLog starting up (version {})", env!("CARGO_PKG_VERSION"));

    let mut config = GlobalConfig::load();
    if let Some(api_url) = &args.api_url {
        config.api_url = Some(api_url.clone());
    }
    if let Some(timezone) = args.timezone {
        config.display_timezone = timezone;
    }
    if let Some(limit) = args.lines {
        config.default_line_limit = limit;
    }

    let source: Box<dyn LogSource> = if let Some(path) = &args.file {
        let file = FileSource::new(path);
        tracing::info!("Reading logs from {}", file.path().display());
        Box::new(file)
    } else {
        let api_url = config
            .api_url
            .as_deref()
            .context("no API URL configured, pass --api-url or --file")?;
        Box::new(ApiClient::new(api_url, args.token.as_deref())?)
    };

    let presenter = LogPresenter::new(config.timestamp_style());
    let state = LogViewState::new(config.default_line_limit);
    let mut view = LogView::new(source, presenter, state);

    view.refresh().context("failed to fetch logs")?;
    view.set_query(&args.search);

    let mut stdout = std::io::stdout().lock();
    if let Some(index) = args.detail {
        let shown = view.entries().len();
        let entry = view
            .select(index)
            .with_context(|| format!("no entry at index {index} ({shown} shown)"))?;
        write!(stdout, "{}", render_details(entry))?;
    } else if args.json {
        serde_json::to_writer_pretty(&mut stdout, view.entries())?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", LogTable::render(view.entries()))?;
        writeln!(
            stdout,
            "\n{} of {} lines shown ({})",
            view.entries().len(),
            view.snapshot_len(),
            view.state().line_limit.label()
        )?;
    }

    if args.save_config {
        config.save()?;
    }

    Ok(())
}
