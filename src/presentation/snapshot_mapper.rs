// Mapper to convert chart snapshots to serializable DTOs
use crate::domain::chart::ChartSnapshot;
use crate::domain::trend::{NoTrendReason, TrendResult};
use crate::domain::view::{ChartPoint, Window};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SnapshotDto {
    pub mode: &'static str,
    pub from_hours: f64,
    pub to_hours: f64,
    pub window: WindowDto,
    /// `[timestamp, charge]` pairs
    pub points: Vec<[f64; 2]>,
    pub trend: TrendDto,
}

#[derive(Debug, Serialize)]
pub struct WindowDto {
    pub start: f64,
    pub end: f64,
    pub anchor: f64,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrendDto {
    NoTrend {
        reason: &'static str,
    },
    Trend {
        rate: f64,
        full_life: f64,
        cap_life: f64,
        cap_charge: f64,
        remaining: Option<f64>,
        line: [[f64; 2]; 2],
    },
}

fn point_pair(point: &ChartPoint) -> [f64; 2] {
    [point.timestamp, point.charge]
}

fn window_to_dto(window: &Window) -> WindowDto {
    WindowDto {
        start: window.start,
        end: window.end,
        anchor: window.anchor,
    }
}

fn reason_name(reason: NoTrendReason) -> &'static str {
    match reason {
        NoTrendReason::InsufficientPoints => "insufficient_points",
        NoTrendReason::NotMonotonic => "not_monotonic",
        NoTrendReason::ZeroDuration => "zero_duration",
        NoTrendReason::Flat => "flat",
    }
}

fn trend_to_dto(trend: &TrendResult, cap_charge: f64) -> TrendDto {
    match trend {
        TrendResult::NoTrend(reason) => TrendDto::NoTrend {
            reason: reason_name(*reason),
        },
        TrendResult::Trend(trend) => TrendDto::Trend {
            rate: trend.rate,
            full_life: trend.full_life,
            cap_life: trend.cap_life,
            cap_charge,
            remaining: trend.remaining,
            line: [point_pair(&trend.first), point_pair(&trend.last)],
        },
    }
}

pub fn snapshot_to_dto(snapshot: &ChartSnapshot) -> SnapshotDto {
    SnapshotDto {
        mode: snapshot.view.mode.as_str(),
        from_hours: snapshot.view.from_hours,
        to_hours: snapshot.view.to_hours,
        window: window_to_dto(&snapshot.window),
        points: snapshot.points.iter().map(point_pair).collect(),
        trend: trend_to_dto(&snapshot.trend, snapshot.cap_charge),
    }
}
