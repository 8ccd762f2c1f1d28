//! Input/output operations, CLI surface, and error handling
//!
//! This module contains the ambient functionality around the layout core:
//! - Command-line parsing and run orchestration
//! - Constants for defaults and export settings
//! - Error types shared across the crate
//! - Image export and decode progress display

/// Command-line interface and run orchestration
pub mod cli;
/// Defaults and export constants
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Rendered canvas export to image files
pub mod export;
/// Decode progress display
pub mod progress;
