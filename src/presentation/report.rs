// Text and JSON output of a chart snapshot
use crate::domain::chart::ChartSnapshot;
use crate::domain::trend::TrendResult;
use crate::domain::view::{SECONDS_PER_HOUR, Window};
use crate::presentation::snapshot_mapper::snapshot_to_dto;
use chrono::{DateTime, Local};
use std::io::{self, Write};

pub const NO_TREND_HINT: &str = "[select monotonic domain for statistics]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Chart title: statistics when a trend exists, a hint otherwise.
pub fn title(snapshot: &ChartSnapshot) -> String {
    match &snapshot.trend {
        TrendResult::Trend(trend) => {
            let remaining = trend
                .remaining
                .map(|left| format!(" | remaining: {:.1}", left))
                .unwrap_or_default();
            format!(
                "rate: {:.2}% | max: {}%\nlife: {:.1} | full: {:.1}{}",
                trend.rate, snapshot.cap_charge, trend.cap_life, trend.full_life, remaining
            )
        }
        TrendResult::NoTrend(_) => format!("Charge Data\n{}", NO_TREND_HINT),
    }
}

fn calendar_time(timestamp: f64) -> String {
    DateTime::from_timestamp(timestamp.floor() as i64, 0)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| format!("{:.0}", timestamp))
}

pub fn window_label(window: &Window) -> String {
    if window.mode.relative() {
        let offset = |t: f64| (t - window.anchor) / SECONDS_PER_HOUR;
        format!("{:.1}h .. {:.1}h", offset(window.start), offset(window.end))
    } else {
        format!("{} .. {}", calendar_time(window.start), calendar_time(window.end))
    }
}

pub fn write_text<W: Write>(mut out: W, snapshot: &ChartSnapshot) -> io::Result<()> {
    writeln!(
        out,
        "[{}] {} | {} points",
        snapshot.view.mode,
        window_label(&snapshot.window),
        snapshot.points.len()
    )?;
    writeln!(out, "{}", title(snapshot))
}

pub fn write_snapshot<W: Write>(
    mut out: W,
    snapshot: &ChartSnapshot,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, snapshot),
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, &snapshot_to_dto(snapshot))?;
            writeln!(out)
        }
    }
}
