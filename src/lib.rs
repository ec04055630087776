//! Randomized backtracking generator for domino tilings of rectangular grids
//!
//! The search branches on the most constrained free cell, applies forced
//! placements eagerly, prunes partial tilings whose free region has split,
//! and is exposed as a steppable generator so callers can observe every
//! intermediate tiling.

#![forbid(unsafe_code)]

/// Tiling search: branching, pruning, search tree and step-by-step generator
pub mod algorithm;
/// Input/output: CLI, rendering, progress display and error handling
pub mod io;
/// Grid coordinates, domino tiles and occupancy tracking
pub mod spatial;

pub use algorithm::{StepResult, Tiling, TilingGenerator, build_complete_tiling};
pub use io::error::{Result, TilingError};
pub use spatial::{Position, Tile};
