// Window selector - turns a view into a time range and the points inside it
use crate::application::clock::Clock;
use crate::application::sample_store::SampleStore;
use crate::domain::view::{ChartPoint, SECONDS_PER_HOUR, ViewState, Window};

/// Smallest window the selector will produce (0.1 h)
pub const DEFAULT_MIN_WINDOW_HOURS: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct Selection {
    /// Bounds after correction; differs from the request when it was inverted
    pub view: ViewState,
    pub window: Window,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Copy)]
pub struct WindowSelector {
    min_window_hours: f64,
}

impl Default for WindowSelector {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WINDOW_HOURS)
    }
}

impl WindowSelector {
    pub fn new(min_window_hours: f64) -> Self {
        Self { min_window_hours }
    }

    pub fn select(&self, store: &SampleStore, view: ViewState, clock: &dyn Clock) -> Selection {
        let timeline = if view.mode.compress() {
            store.compressed_timeline()
        } else {
            store.timeline()
        };

        // compressed time only makes sense relative to the newest sample
        let anchor = match (view.mode.compress(), timeline.last()) {
            (true, Some(last)) => *last,
            _ => clock.now(),
        };

        let view = view.corrected(self.min_window_hours);
        let window = Window {
            start: anchor - view.to_hours * SECONDS_PER_HOUR,
            end: anchor - view.from_hours * SECONDS_PER_HOUR,
            anchor,
            mode: view.mode,
        };

        let points: Vec<ChartPoint> = timeline
            .iter()
            .zip(store.series())
            .filter(|(t, _)| window.contains(**t))
            .map(|(t, sample)| ChartPoint::new(*t, sample.charge))
            .collect();

        tracing::debug!(
            "Selected {} of {} points in {} mode ({:.1}h..{:.1}h)",
            points.len(),
            store.len(),
            view.mode,
            view.from_hours,
            view.to_hours
        );

        Selection {
            view,
            window,
            points,
        }
    }
}
