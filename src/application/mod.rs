// Application layer - Timeline and trend use cases
pub mod chart_service;
pub mod clock;
pub mod gap_compressor;
pub mod history_repository;
pub mod sample_store;
pub mod trend_analyzer;
pub mod window_selector;
