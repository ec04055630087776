//! Domino tiles: unordered pairs of grid cells

use crate::spatial::geometry::Position;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One placed domino covering two cells
///
/// Equality and hashing treat the endpoints as an unordered pair and ignore
/// the rendering tag, so `{a, b}` and `{b, a}` are the same tile.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    endpoints: [Position; 2],
    tag: u32,
}

impl Tile {
    /// Create a tile covering `a` and `b` with a zero tag
    pub const fn new(a: Position, b: Position) -> Self {
        Self {
            endpoints: [a, b],
            tag: 0,
        }
    }

    /// Attach a rendering tag (used only for colour selection)
    #[must_use]
    pub const fn with_tag(mut self, tag: u32) -> Self {
        self.tag = tag;
        self
    }

    /// Both covered cells in construction order
    pub const fn endpoints(&self) -> [Position; 2] {
        self.endpoints
    }

    /// Rendering tag
    pub const fn tag(&self) -> u32 {
        self.tag
    }

    /// Check whether the tile covers `pos`
    pub fn contains(&self, pos: Position) -> bool {
        self.endpoints.contains(&pos)
    }

    /// Two tiles overlap when they claim at least one common cell
    ///
    /// Tiles that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        other.endpoints.iter().any(|&pos| self.contains(pos))
    }

    /// A well-formed domino has two distinct, edge-adjacent endpoints
    pub const fn is_domino(&self) -> bool {
        self.endpoints[0].is_adjacent(self.endpoints[1])
    }

    /// The tile lies along a row
    pub const fn is_horizontal(&self) -> bool {
        self.endpoints[0].y == self.endpoints[1].y
    }

    /// Endpoint with the smaller coordinates (top-left cell)
    pub fn min_corner(&self) -> Position {
        let [a, b] = self.endpoints;
        Position::new(a.x.min(b.x), a.y.min(b.y))
    }

    /// Endpoint with the larger coordinates (bottom-right cell)
    pub fn max_corner(&self) -> Position {
        let [a, b] = self.endpoints;
        Position::new(a.x.max(b.x), a.y.max(b.y))
    }

    fn sorted_endpoints(&self) -> [Position; 2] {
        let [a, b] = self.endpoints;
        if a <= b { [a, b] } else { [b, a] }
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_endpoints() == other.sorted_endpoints()
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_endpoints().hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.endpoints;
        write!(f, "{a}-{b}")
    }
}
