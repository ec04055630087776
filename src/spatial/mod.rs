//! Spatial data structures for the domino grid
//!
//! This module contains spatial-related functionality including:
//! - Grid coordinates and bounds checks
//! - Domino tiles and overlap testing
//! - Bit-packed cell occupancy

/// Grid coordinates and adjacency helpers
pub mod geometry;
/// Bit-packed occupancy index over grid cells
pub mod occupancy;
/// Domino tile representation
pub mod tiles;

pub use geometry::{Position, in_bounds};
pub use occupancy::{OccupancyGrid, ownership_grid};
pub use tiles::Tile;
