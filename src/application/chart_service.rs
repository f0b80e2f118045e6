// Chart service - Use case for recomputing the chart on every view change
use crate::application::clock::Clock;
use crate::application::sample_store::SampleStore;
use crate::application::trend_analyzer::analyze;
use crate::application::window_selector::WindowSelector;
use crate::domain::chart::ChartSnapshot;
use crate::domain::view::{ViewMode, ViewState};
use crate::infrastructure::config::ChartSettings;

pub struct ChartService {
    store: SampleStore,
    settings: ChartSettings,
    selector: WindowSelector,
    clock: Box<dyn Clock>,
}

impl ChartService {
    pub fn new(store: SampleStore, settings: ChartSettings, clock: Box<dyn Clock>) -> Self {
        let selector = WindowSelector::new(settings.min_window_hours);
        Self {
            store,
            settings,
            selector,
            clock,
        }
    }

    pub fn default_view(&self) -> ViewState {
        ViewState::new(
            ViewMode::default(),
            self.settings.default_from_hours,
            self.settings.default_to_hours,
        )
    }

    /// One full recompute: window selection followed by trend analysis.
    pub fn snapshot(&self, view: ViewState) -> ChartSnapshot {
        let view = ViewState {
            from_hours: view.from_hours.min(self.settings.plot_range_hours),
            to_hours: view.to_hours.min(self.settings.plot_range_hours),
            ..view
        };
        let selection = self.selector.select(&self.store, view, self.clock.as_ref());

        let trend = analyze(
            &selection.points,
            self.settings.max_charge,
            self.store.last_status(),
            self.store.current_charge(),
        );

        tracing::debug!(
            "Recomputed {} view over {:.1}h, rate {:?}",
            selection.view.mode,
            selection.window.span_hours(),
            trend.trend().map(|t| t.rate)
        );

        ChartSnapshot {
            view: selection.view,
            window: selection.window,
            points: selection.points,
            trend,
            cap_charge: self.settings.max_charge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::clock::FixedClock;
    use crate::domain::trend::{NoTrendReason, TrendResult};

    const T0: i64 = 1_700_000_000;

    fn service(raw: &str, now: f64) -> ChartService {
        let settings = ChartSettings::default();
        let store = SampleStore::load(raw, settings.max_gap_hours * 3600.0).unwrap();
        ChartService::new(store, settings, Box::new(FixedClock(now)))
    }

    fn discharge_log(points: i64) -> String {
        (0..points)
            .map(|i| format!("{}\t{}\tdischarging\n", T0 + i * 600, 90 - i))
            .collect()
    }

    #[test]
    fn test_default_snapshot_has_trend() {
        let service = service(&discharge_log(7), 0.0);
        let snapshot = service.snapshot(service.default_view());

        assert_eq!(snapshot.view.mode, ViewMode::Compressed);
        assert_eq!(snapshot.points.len(), 7);
        let trend = snapshot.trend.trend().expect("monotonic discharge");
        assert!((trend.rate + 6.0).abs() < 1e-9);
        // 84% left at 6%/h
        assert!((trend.remaining.unwrap() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_window_yields_no_trend() {
        let now = (T0 + 100 * 3600) as f64;
        let service = service(&discharge_log(7), now);
        let snapshot = service.snapshot(ViewState::new(ViewMode::Relative, 0.0, 12.0));

        assert!(snapshot.points.is_empty());
        assert_eq!(snapshot.trend, TrendResult::NoTrend(NoTrendReason::InsufficientPoints));
    }

    #[test]
    fn test_snapshot_reports_corrected_view() {
        let service = service(&discharge_log(7), 0.0);
        let snapshot = service.snapshot(ViewState::new(ViewMode::Compressed, 2.0, 1.0));

        assert!((snapshot.view.to_hours - 2.1).abs() < 1e-9);
        assert!(snapshot.window.start < snapshot.window.end);
    }

    #[test]
    fn test_bounds_limited_to_plot_range() {
        let service = service(&discharge_log(7), 0.0);
        let snapshot = service.snapshot(ViewState::new(ViewMode::Compressed, 0.0, 100.0));
        assert_eq!(snapshot.view.to_hours, ChartSettings::default().plot_range_hours);
    }
}
