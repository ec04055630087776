//! Partial domino tilings with occupancy, free-cell and connectivity queries

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, TilingError, invariant_violation};
use crate::spatial::{OccupancyGrid, Position, Tile, in_bounds};
use bitvec::prelude::*;

/// Snapshot of a grid and the tiles placed on it so far
///
/// A tiling is treated as immutable once it is attached to a search node;
/// extending it produces a new value. Every placement is checked against the
/// bounds and no-overlap invariants through the occupancy index.
#[derive(Debug, Clone)]
pub struct Tiling {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    occupancy: OccupancyGrid,
}

impl Tiling {
    /// Create a tiling with no tiles placed
    ///
    /// A zero dimension yields an empty grid that is already complete.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is negative or exceeds
    /// the maximum grid dimension.
    pub fn empty(width: i32, height: i32) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            tiles: Vec::new(),
            occupancy: OccupancyGrid::new(width, height),
        })
    }

    /// Build a tiling from an existing list of tiles
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or any tile is
    /// malformed, out of bounds, or overlaps an earlier tile.
    pub fn from_tiles(
        width: i32,
        height: i32,
        tiles: impl IntoIterator<Item = Tile>,
    ) -> Result<Self> {
        let mut tiling = Self::empty(width, height)?;
        for tile in tiles {
            tiling.place(tile)?;
        }
        Ok(tiling)
    }

    /// Grid width in cells
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells in the grid
    pub fn area(&self) -> usize {
        self.occupancy.area()
    }

    /// Tiles in placement order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Consume the tiling, returning its tiles in placement order
    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }

    /// Number of placed tiles
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Check whether a position lies on the grid
    pub const fn in_bounds(&self, pos: Position) -> bool {
        in_bounds(pos, self.width, self.height)
    }

    /// Every endpoint of every placed tile
    pub fn occupied_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.tiles.iter().flat_map(Tile::endpoints)
    }

    /// In bounds and not claimed by any tile
    pub fn is_free_position(&self, pos: Position) -> bool {
        self.occupancy.is_free(pos)
    }

    /// Number of unclaimed cells
    pub fn free_count(&self) -> usize {
        self.occupancy.free_count()
    }

    /// All free cells, enumerated column by column (x outer, y inner)
    pub fn free_positions(&self) -> Vec<Position> {
        let mut positions = Vec::with_capacity(self.free_count());
        for x in 0..self.width {
            for y in 0..self.height {
                let pos = Position::new(x, y);
                if self.is_free_position(pos) {
                    positions.push(pos);
                }
            }
        }
        positions
    }

    /// Free cells sharing an edge with `pos`, in `[up, down, left, right]` order
    pub fn free_neighbors(&self, pos: Position) -> Vec<Position> {
        pos.neighbors()
            .into_iter()
            .filter(|&neighbor| self.is_free_position(neighbor))
            .collect()
    }

    /// Number of free cells sharing an edge with `pos`
    pub fn free_neighbor_count(&self, pos: Position) -> usize {
        pos.neighbors()
            .into_iter()
            .filter(|&neighbor| self.is_free_position(neighbor))
            .count()
    }

    /// Every cell is covered
    pub fn is_complete(&self) -> bool {
        self.occupancy.is_full()
    }

    /// The free cells form a single 4-connected region
    ///
    /// The empty free set counts as connected.
    pub fn has_connected_vacancy(&self) -> bool {
        let Some(start) = self.first_free_position() else {
            return true;
        };
        let mut visited = bitvec![0; self.area()];
        self.flood_region(start, &mut visited) == self.free_count()
    }

    /// Sizes of the 4-connected free regions, in order of their first cell
    pub fn free_region_sizes(&self) -> Vec<usize> {
        let mut visited = bitvec![0; self.area()];
        let mut sizes = Vec::new();

        for pos in self.free_positions() {
            let seen = self
                .occupancy
                .index(pos)
                .is_some_and(|i| visited.get(i).as_deref() == Some(&true));
            if !seen {
                sizes.push(self.flood_region(pos, &mut visited));
            }
        }

        sizes
    }

    /// Number of 4-connected free regions
    pub fn free_region_count(&self) -> usize {
        self.free_region_sizes().len()
    }

    /// Some free region has an odd number of cells and can never be covered
    pub fn has_odd_region(&self) -> bool {
        self.free_region_sizes().iter().any(|size| size % 2 != 0)
    }

    /// Copy this tiling and append one tile
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the tile is malformed, out of bounds,
    /// or overlaps an already placed tile.
    pub fn extended(&self, tile: Tile) -> Result<Self> {
        let mut next = self.clone();
        next.place(tile)?;
        Ok(next)
    }

    /// Append a tile in place
    ///
    /// Only used on tilings that have not been shared with a search node yet.
    pub(crate) fn place(&mut self, tile: Tile) -> Result<()> {
        if !tile.is_domino() {
            return Err(invariant_violation(
                "place tile",
                &format!("tile {tile} does not cover two adjacent cells"),
            ));
        }
        for pos in tile.endpoints() {
            if !self.in_bounds(pos) {
                return Err(invariant_violation(
                    "place tile",
                    &format!(
                        "tile {tile} leaves the {}x{} grid",
                        self.width, self.height
                    ),
                ));
            }
            if !self.is_free_position(pos) {
                return Err(invariant_violation(
                    "place tile",
                    &format!("tile {tile} overlaps an existing tile at {pos}"),
                ));
            }
        }
        for pos in tile.endpoints() {
            self.occupancy.occupy(pos);
        }
        self.tiles.push(tile);
        Ok(())
    }

    // Marks every free cell reachable from `start` and returns how many there were
    fn flood_region(&self, start: Position, visited: &mut BitVec) -> usize {
        let mut to_visit = vec![start];
        let mut reached = 0;

        while let Some(current) = to_visit.pop() {
            let Some(index) = self.occupancy.index(current) else {
                continue;
            };
            if visited.get(index).as_deref() == Some(&true) {
                continue;
            }
            visited.set(index, true);
            reached += 1;

            for neighbor in current.neighbors() {
                if self.is_free_position(neighbor)
                    && self
                        .occupancy
                        .index(neighbor)
                        .is_some_and(|i| visited.get(i).as_deref() == Some(&false))
                {
                    to_visit.push(neighbor);
                }
            }
        }

        reached
    }

    fn first_free_position(&self) -> Option<Position> {
        (0..self.width)
            .flat_map(|x| (0..self.height).map(move |y| Position::new(x, y)))
            .find(|&pos| self.is_free_position(pos))
    }
}

/// Reject dimensions that cannot describe a grid
///
/// # Errors
///
/// Returns `InvalidDimensions` for negative or oversized dimensions.
pub fn validate_dimensions(width: i32, height: i32) -> Result<()> {
    if width < 0 || height < 0 {
        return Err(TilingError::InvalidDimensions {
            width,
            height,
            reason: "dimensions must not be negative".to_string(),
        });
    }
    if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
        return Err(TilingError::InvalidDimensions {
            width,
            height,
            reason: format!("dimensions must not exceed {MAX_GRID_DIMENSION}"),
        });
    }
    Ok(())
}
