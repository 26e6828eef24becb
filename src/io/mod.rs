//! Input/output operations, configuration and error handling

/// Command-line parsing and orchestration
pub mod cli;
/// Rendering constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export and preview
pub mod image;
