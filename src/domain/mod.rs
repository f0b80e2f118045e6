// Domain layer - Charge history models
pub mod chart;
pub mod sample;
pub mod trend;
pub mod view;
