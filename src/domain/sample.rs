// Charge sample domain model
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Power supply state reported by the daemon alongside each charge reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeStatus {
    Charging,
    Discharging,
    Unknown,
    /// Any other daemon state (`fully-charged`, `pending-charge`, `empty`, ...)
    Other,
}

impl FromStr for ChargeStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "charging" => ChargeStatus::Charging,
            "discharging" => ChargeStatus::Discharging,
            "unknown" => ChargeStatus::Unknown,
            _ => ChargeStatus::Other,
        })
    }
}

impl fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChargeStatus::Charging => "charging",
            ChargeStatus::Discharging => "discharging",
            ChargeStatus::Unknown => "unknown",
            ChargeStatus::Other => "other",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Unix time in seconds
    pub timestamp: i64,
    /// Charge percentage
    pub charge: f64,
    pub status: ChargeStatus,
}

impl Sample {
    pub fn new(timestamp: i64, charge: f64, status: ChargeStatus) -> Self {
        Self {
            timestamp,
            charge,
            status,
        }
    }
}
