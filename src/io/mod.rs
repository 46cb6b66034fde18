//! Command-line front end, world images, configuration and errors

/// Command-line parsing and the edit pipeline
pub mod cli;
/// Defaults and constants
pub mod configuration;
/// Error types shared by the crate
pub mod error;
/// PNG import and export of worlds
pub mod image;
/// Logger initialization
pub mod logging;
/// Progress display
pub mod progress;
