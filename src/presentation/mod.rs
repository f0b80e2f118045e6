// Presentation layer - Terminal front end
pub mod console;
pub mod file_prompt;
pub mod report;
pub mod snapshot_mapper;
