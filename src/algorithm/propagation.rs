use crate::algorithm::tiling::Tiling;
use crate::io::error::Result;
use crate::spatial::{Position, Tile};
use std::collections::VecDeque;

/// A free cell whose only free neighbour must be its partner in any completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForcedPlacement {
    /// Cell with exactly one free neighbour
    pub position: Position,
    /// The only cell it can pair with
    pub partner: Position,
}

impl ForcedPlacement {
    /// The tile that realises this placement
    pub const fn tile(self) -> Tile {
        Tile::new(self.position, self.partner)
    }
}

/// Check whether `pos` is free with exactly one free neighbour
pub fn forced_placement_at(tiling: &Tiling, pos: Position) -> Option<ForcedPlacement> {
    if !tiling.is_free_position(pos) {
        return None;
    }
    match tiling.free_neighbors(pos).as_slice() {
        [partner] => Some(ForcedPlacement {
            position: pos,
            partner: *partner,
        }),
        _ => None,
    }
}

/// Scan the whole grid for the first forced placement
pub fn find_forced_placement(tiling: &Tiling) -> Option<ForcedPlacement> {
    tiling
        .free_positions()
        .into_iter()
        .find_map(|pos| forced_placement_at(tiling, pos))
}

/// Apply forced placements until none remain
///
/// Works through a queue seeded with every free cell; after each forced tile
/// only the free neighbours of its two cells can change status, so those are
/// re-queued. The tiling must not be shared with a search node yet since it
/// is extended in place. Tiles are only ever added.
///
/// # Errors
///
/// Returns `InvariantViolation` if a forced tile cannot be placed.
pub fn advance_forced_moves(mut tiling: Tiling) -> Result<Tiling> {
    let mut pipeline: VecDeque<Position> = tiling.free_positions().into();

    while let Some(pos) = pipeline.pop_front() {
        let Some(forced) = forced_placement_at(&tiling, pos) else {
            continue;
        };

        let tag = tiling.tile_count() as u32;
        tiling.place(forced.tile().with_tag(tag))?;

        for cell in [forced.position, forced.partner] {
            pipeline.extend(tiling.free_neighbors(cell));
        }
    }

    Ok(tiling)
}
