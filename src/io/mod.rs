/// Command-line parsing and session orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Word list loading
pub mod dictionary;
/// Error types
pub mod error;
/// Status and progress display
pub mod progress;
