//! Integer grid coordinates with bounds and adjacency helpers

use std::fmt;

/// A cell on the grid, addressed by column `x` and row `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl Position {
    /// Create a position from its column and row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four axis-aligned neighbours in `[up, down, left, right]` order
    ///
    /// Neighbours are not bounds-checked; callers filter them against the grid.
    pub const fn neighbors(self) -> [Self; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x + 1, self.y),
        ]
    }

    /// Taxicab distance between two cells
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Two cells are adjacent when they share an edge
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Euclidean distance from the centre point `(width / 2, height / 2)`
    pub fn distance_from_center(self, width: i32, height: i32) -> f64 {
        let dx = f64::from(self.x) - f64::from(width) / 2.0;
        let dy = f64::from(self.y) - f64::from(height) / 2.0;
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Check whether a position lies inside a `width` x `height` grid
pub const fn in_bounds(pos: Position, width: i32, height: i32) -> bool {
    pos.x >= 0 && pos.x < width && pos.y >= 0 && pos.y < height
}
