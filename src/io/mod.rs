//! Input/output around the tiling engine
//!
//! Everything here consumes the generator through its tile lists: command
//! line handling, progress display, text and image rendering, GIF capture,
//! plus the shared error type and configuration constants.

/// Command-line parsing and run orchestration
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering
pub mod image;
/// Terminal progress bar
pub mod progress;
/// ASCII rendering
pub mod text;
/// GIF capture of intermediate steps
pub mod visualization;
