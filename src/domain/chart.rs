// Chart domain model - everything the renderer needs after one recompute
use super::trend::TrendResult;
use super::view::{ChartPoint, ViewState, Window};

#[derive(Debug, Clone)]
pub struct ChartSnapshot {
    /// View after bound correction, to be fed back to the input controls
    pub view: ViewState,
    pub window: Window,
    pub points: Vec<ChartPoint>,
    pub trend: TrendResult,
    pub cap_charge: f64,
}
