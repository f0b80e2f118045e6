// View state domain model - what the user is looking at
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Idle gaps collapsed, hours counted back from the last sample
    #[default]
    Compressed,
    /// Real timeline, hours counted back from the wall clock
    Relative,
    /// Real timeline, labelled with calendar time
    Absolute,
}

impl ViewMode {
    pub fn compress(self) -> bool {
        matches!(self, ViewMode::Compressed)
    }

    pub fn relative(self) -> bool {
        !matches!(self, ViewMode::Absolute)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Compressed => "compressed",
            ViewMode::Relative => "relative",
            ViewMode::Absolute => "absolute",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown view mode `{0}`, expected compressed, relative or absolute")]
pub struct UnknownViewMode(pub String);

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compressed" => Ok(ViewMode::Compressed),
            "relative" => Ok(ViewMode::Relative),
            "absolute" => Ok(ViewMode::Absolute),
            other => Err(UnknownViewMode(other.to_string())),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-selected view. Never mutated: every event produces a new value.
///
/// `from_hours` is the near edge (hours before the anchor), `to_hours` the far edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub from_hours: f64,
    pub to_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    SetMode(ViewMode),
    SetFrom(f64),
    SetTo(f64),
    /// Restore default bounds, keeping the mode
    Reset,
}

impl ViewState {
    pub fn new(mode: ViewMode, from_hours: f64, to_hours: f64) -> Self {
        Self {
            mode,
            from_hours,
            to_hours,
        }
    }

    pub fn apply(self, event: ViewEvent, defaults: &ViewState) -> ViewState {
        match event {
            ViewEvent::SetMode(mode) => ViewState { mode, ..self },
            ViewEvent::SetFrom(from_hours) => ViewState { from_hours, ..self },
            ViewEvent::SetTo(to_hours) => ViewState { to_hours, ..self },
            ViewEvent::Reset => ViewState {
                mode: self.mode,
                ..*defaults
            },
        }
    }

    /// Clamps negative bounds to zero and widens an empty or inverted range
    /// so that `to_hours = from_hours + min_window_hours`.
    pub fn corrected(self, min_window_hours: f64) -> ViewState {
        let from_hours = self.from_hours.max(0.0);
        let mut to_hours = self.to_hours.max(0.0);
        if from_hours >= to_hours {
            to_hours = from_hours + min_window_hours;
        }
        ViewState {
            mode: self.mode,
            from_hours,
            to_hours,
        }
    }
}

/// Active range in seconds of the selected timeline. `start < end` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub start: f64,
    pub end: f64,
    /// Point the hour offsets are measured back from
    pub anchor: f64,
    pub mode: ViewMode,
}

impl Window {
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t <= self.end
    }

    pub fn span_hours(&self) -> f64 {
        (self.end - self.start) / SECONDS_PER_HOUR
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub timestamp: f64,
    pub charge: f64,
}

impl ChartPoint {
    pub fn new(timestamp: f64, charge: f64) -> Self {
        Self { timestamp, charge }
    }
}
