use crate::spatial::geometry::{Position, in_bounds};
use crate::spatial::tiles::Tile;
use bitvec::prelude::*;
use ndarray::Array2;

/// Row-major bit grid recording which cells are claimed by a tile
///
/// Answers free-cell queries in O(1) instead of scanning the tile list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    bits: BitVec,
    width: i32,
    height: i32,
    occupied: usize,
}

impl OccupancyGrid {
    /// Create a grid with every cell free
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            bits: bitvec![0; width as usize * height as usize],
            width,
            height,
            occupied: 0,
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.bits.len()
    }

    /// Linear index of an in-bounds position
    pub const fn index(&self, pos: Position) -> Option<usize> {
        if in_bounds(pos, self.width, self.height) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    /// Check whether the cell is claimed; out-of-bounds cells are never occupied
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.index(pos)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Check whether the cell is in bounds and unclaimed
    pub fn is_free(&self, pos: Position) -> bool {
        self.index(pos)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .is_some_and(|occupied| !occupied)
    }

    /// Claim a cell
    ///
    /// Returns `false` without changing anything when the cell is out of
    /// bounds or already claimed.
    pub fn occupy(&mut self, pos: Position) -> bool {
        if !self.is_free(pos) {
            return false;
        }
        match self.index(pos) {
            Some(index) => {
                self.bits.set(index, true);
                self.occupied += 1;
                true
            }
            None => false,
        }
    }

    /// Number of claimed cells
    pub const fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Number of unclaimed cells
    pub fn free_count(&self) -> usize {
        self.area() - self.occupied
    }

    /// Every cell is claimed
    pub fn is_full(&self) -> bool {
        self.free_count() == 0
    }
}

/// Map every cell to the index of the tile covering it
///
/// The array is indexed `[row, col]`, i.e. `[y, x]`. Endpoints outside the
/// grid are ignored; when tiles overlap the later tile wins.
pub fn ownership_grid(width: i32, height: i32, tiles: &[Tile]) -> Array2<Option<usize>> {
    let rows = height.max(0) as usize;
    let cols = width.max(0) as usize;
    let mut owners = Array2::from_elem((rows, cols), None);

    for (index, tile) in tiles.iter().enumerate() {
        for pos in tile.endpoints() {
            if !in_bounds(pos, width, height) {
                continue;
            }
            if let Some(cell) = owners.get_mut([pos.y as usize, pos.x as usize]) {
                *cell = Some(index);
            }
        }
    }

    owners
}
