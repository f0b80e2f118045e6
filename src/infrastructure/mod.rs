// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod history_files;
pub mod system_clock;
