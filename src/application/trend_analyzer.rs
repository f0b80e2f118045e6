// Trend analyzer - charge rate and battery life over the selected window
use crate::domain::sample::ChargeStatus;
use crate::domain::trend::{NoTrendReason, Trend, TrendResult};
use crate::domain::view::{ChartPoint, SECONDS_PER_HOUR};

const FULL_CHARGE: f64 = 100.0;
const MIN_TREND_POINTS: usize = 3;

fn is_monotonic(points: &[ChartPoint]) -> bool {
    let non_decreasing = points.windows(2).all(|w| w[0].charge <= w[1].charge);
    let non_increasing = points.windows(2).all(|w| w[0].charge >= w[1].charge);
    non_decreasing || non_increasing
}

/// Straight-line trend between the first and last point of a monotonic window.
///
/// `current_charge` and `last_status` describe the newest sample of the whole
/// history, not of the window, so `remaining` always projects from the present.
pub fn analyze(
    points: &[ChartPoint],
    cap_charge: f64,
    last_status: ChargeStatus,
    current_charge: f64,
) -> TrendResult {
    if points.len() < MIN_TREND_POINTS {
        return TrendResult::NoTrend(NoTrendReason::InsufficientPoints);
    }
    if !is_monotonic(points) {
        return TrendResult::NoTrend(NoTrendReason::NotMonotonic);
    }

    let first = points[0];
    let last = points[points.len() - 1];

    // unsorted input can give a negative range; the rate sign follows it
    let t_range = (last.timestamp - first.timestamp) / SECONDS_PER_HOUR;
    if t_range == 0.0 {
        return TrendResult::NoTrend(NoTrendReason::ZeroDuration);
    }

    let rate = (last.charge - first.charge) / t_range;
    if rate == 0.0 {
        return TrendResult::NoTrend(NoTrendReason::Flat);
    }

    let speed = rate.abs();
    let remaining = match last_status {
        ChargeStatus::Discharging => Some(current_charge / speed),
        ChargeStatus::Charging => Some((cap_charge - current_charge) / speed),
        ChargeStatus::Unknown | ChargeStatus::Other => None,
    };

    TrendResult::Trend(Trend {
        rate,
        full_life: FULL_CHARGE / speed,
        cap_life: cap_charge / speed,
        remaining,
        first,
        last,
    })
}
