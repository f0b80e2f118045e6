// Layered settings - defaults, optional TOML file, environment
use crate::application::gap_compressor::DEFAULT_MAX_GAP_SECS;
use crate::application::window_selector::DEFAULT_MIN_WINDOW_HOURS;
use crate::domain::view::SECONDS_PER_HOUR;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const DEFAULT_CONFIG_FILE: &str = "config/battery_stat";
const ENV_PREFIX: &str = "BATTERY_STAT";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub history: HistorySettings,
    pub chart: ChartSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HistorySettings {
    /// Directory scanned recursively for history files
    pub dir: String,
    pub file_glob: String,
    /// Prompt retries before giving up on the file choice
    pub choice_attempts: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartSettings {
    /// Charge limit the battery is held at, in percent
    pub max_charge: f64,
    pub plot_range_hours: f64,
    pub default_from_hours: f64,
    pub default_to_hours: f64,
    pub max_gap_hours: f64,
    pub min_window_hours: f64,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            dir: "/var/lib/upower/".to_string(),
            file_glob: "history-charge-*".to_string(),
            choice_attempts: 3,
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            max_charge: 85.0,
            plot_range_hours: 36.0,
            default_from_hours: 0.0,
            default_to_hours: 12.0,
            max_gap_hours: DEFAULT_MAX_GAP_SECS / SECONDS_PER_HOUR,
            min_window_hours: DEFAULT_MIN_WINDOW_HOURS,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("chart.min_window_hours must be positive, got {0}")]
    MinWindow(f64),

    #[error("chart.max_gap_hours must not be negative, got {0}")]
    MaxGap(f64),

    #[error("chart.max_charge must be in (0, 100], got {0}")]
    MaxCharge(f64),

    #[error("chart.default_from_hours ({from}) must be below chart.default_to_hours ({to})")]
    DefaultBounds { from: f64, to: f64 },
}

impl ChartSettings {
    /// Rejects values that would produce an empty window, a shrinking
    /// compressed timeline or meaningless life estimates.
    pub fn validate(&self) -> Result<(), SettingsError> {
        // negated comparisons so NaN is rejected too
        if !(self.min_window_hours > 0.0) {
            return Err(SettingsError::MinWindow(self.min_window_hours));
        }
        if !(self.max_gap_hours >= 0.0) {
            return Err(SettingsError::MaxGap(self.max_gap_hours));
        }
        if !(self.max_charge > 0.0 && self.max_charge <= 100.0) {
            return Err(SettingsError::MaxCharge(self.max_charge));
        }
        if !(self.default_from_hours < self.default_to_hours) {
            return Err(SettingsError::DefaultBounds {
                from: self.default_from_hours,
                to: self.default_to_hours,
            });
        }
        Ok(())
    }

    pub fn max_gap_secs(&self) -> f64 {
        self.max_gap_hours * SECONDS_PER_HOUR
    }
}

fn builder_with_defaults() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    let history = HistorySettings::default();
    let chart = ChartSettings::default();

    Ok(config::Config::builder()
        .set_default("history.dir", history.dir)?
        .set_default("history.file_glob", history.file_glob)?
        .set_default("history.choice_attempts", i64::from(history.choice_attempts))?
        .set_default("chart.max_charge", chart.max_charge)?
        .set_default("chart.plot_range_hours", chart.plot_range_hours)?
        .set_default("chart.default_from_hours", chart.default_from_hours)?
        .set_default("chart.default_to_hours", chart.default_to_hours)?
        .set_default("chart.max_gap_hours", chart.max_gap_hours)?
        .set_default("chart.min_window_hours", chart.min_window_hours)?)
}

/// Defaults, then `config/battery_stat.*` (or `path`, which must exist),
/// then `BATTERY_STAT_<SECTION>__<KEY>` environment variables.
pub fn load_app_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let settings = builder_with_defaults()?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    app_config.chart.validate()?;
    Ok(app_config)
}
