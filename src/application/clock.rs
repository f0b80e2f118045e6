// Clock trait - source of "now" for windows anchored to the wall clock

pub trait Clock {
    /// Current Unix time in seconds
    fn now(&self) -> f64;
}

/// Clock pinned to a single instant
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub f64);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> f64 {
        self.0
    }
}
