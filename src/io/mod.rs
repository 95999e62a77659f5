//! Input/output, configuration and error handling
//!
//! This module contains:
//! - The crate error type
//! - Compile-time defaults
//! - PNG loading and plan image export
//! - Text plan and parts list rendering
//! - Progress display and the command-line front end

/// Command-line interface and batch file processing
pub mod cli;
/// Defaults and limits
pub mod configuration;
/// Error types
pub mod error;
/// PNG loading and export
pub mod image;
/// Terminal progress bars
pub mod progress;
/// Text renderings of plans and inventories
pub mod render;
