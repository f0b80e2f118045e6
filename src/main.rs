// Main entry point - Wiring and command line handling
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::chart_service::ChartService;
use crate::application::history_repository::HistoryRepository;
use crate::application::sample_store::SampleStore;
use crate::domain::view::{ViewMode, ViewState};
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::history_files::FsHistoryRepository;
use crate::infrastructure::system_clock::SystemClock;
use crate::presentation::file_prompt::{check_index, choose_file, list_files};
use crate::presentation::report::{OutputFormat, write_snapshot};
use crate::presentation::console;

/// Battery charge history statistics
#[derive(Parser, Debug)]
#[command(name = "battery-stat")]
#[command(about = "Charge rate and battery life from upower history")]
#[command(version)]
struct Args {
    /// Settings file (TOML); defaults to config/battery_stat.toml when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// History file to read, skipping discovery
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// 1-based index into the discovered files, skipping the prompt
    #[arg(short, long)]
    index: Option<i64>,

    /// compressed, relative or absolute
    #[arg(short, long)]
    mode: Option<ViewMode>,

    /// Near edge of the window, in hours before now
    #[arg(long)]
    from: Option<f64>,

    /// Far edge of the window, in hours before now
    #[arg(long)]
    to: Option<f64>,

    /// Print snapshots as JSON lines
    #[arg(long)]
    json: bool,

    /// Read view commands from stdin after the first snapshot
    #[arg(long)]
    interactive: bool,
}

fn resolve_history_file(
    repository: &dyn HistoryRepository,
    index: Option<i64>,
    choice_attempts: u32,
) -> anyhow::Result<PathBuf> {
    let mut files = repository.list_history_files()?;
    let root = repository.search_root();

    if files.is_empty() {
        anyhow::bail!("Battery data NOT found, search path: {}", root.display());
    }

    let stderr = io::stderr();
    list_files(&files, root, stderr.lock())?;

    let idx = match (index, files.len()) {
        (Some(index), count) => check_index(index, count)?,
        (None, 1) => 0,
        (None, count) => choose_file(count, io::stdin().lock(), stderr.lock(), choice_attempts)
            .context("No data file chosen")?,
    };

    Ok(files.swap_remove(idx))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let app_config = load_app_config(args.config.as_deref()).context("Failed to load settings")?;

    let repository = FsHistoryRepository::new(&app_config.history.dir, &app_config.history.file_glob);
    let data_file = match args.file {
        Some(file) => file,
        None => resolve_history_file(&repository, args.index, app_config.history.choice_attempts)?,
    };

    let raw = repository.read_history(&data_file)?;
    let store = SampleStore::load(&raw, app_config.chart.max_gap_secs())
        .with_context(|| format!("Failed to parse {}", data_file.display()))?;
    tracing::info!(
        "Loaded {} samples from {}, last status {}",
        store.len(),
        data_file.display(),
        store.last_status()
    );

    let service = ChartService::new(store, app_config.chart, Box::new(SystemClock));
    let format = if args.json { OutputFormat::Json } else { OutputFormat::Text };

    let defaults = service.default_view();
    let view = ViewState::new(
        args.mode.unwrap_or(defaults.mode),
        args.from.unwrap_or(defaults.from_hours),
        args.to.unwrap_or(defaults.to_hours),
    );

    let stdout = io::stdout();
    if args.interactive {
        if io::stdin().is_terminal() {
            eprintln!("### Plotting {}, type `help` for commands", data_file.display());
        }
        return console::run(&service, view, io::stdin().lock(), stdout.lock(), format);
    }

    let snapshot = service.snapshot(view);
    write_snapshot(stdout.lock(), &snapshot, format)?;

    Ok(())
}
