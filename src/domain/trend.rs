// Trend domain model - charge rate statistics over a window
use super::view::ChartPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoTrendReason {
    /// Fewer than three points in the window
    InsufficientPoints,
    NotMonotonic,
    /// First and last point share a timestamp
    ZeroDuration,
    /// Charge did not move, so every life estimate would be infinite
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    /// Percent per hour, negative while discharging
    pub rate: f64,
    /// Hours to go from 0 to 100%
    pub full_life: f64,
    /// Hours to go from 0 to the configured charge cap
    pub cap_life: f64,
    /// Hours until empty (discharging) or until the cap (charging)
    pub remaining: Option<f64>,
    pub first: ChartPoint,
    pub last: ChartPoint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrendResult {
    NoTrend(NoTrendReason),
    Trend(Trend),
}

impl TrendResult {
    pub fn trend(&self) -> Option<&Trend> {
        match self {
            TrendResult::Trend(trend) => Some(trend),
            TrendResult::NoTrend(_) => None,
        }
    }
}
