//! Most-constrained-cell branching for the tiling search

use crate::algorithm::generator::SearchConfig;
use crate::algorithm::propagation::advance_forced_moves;
use crate::algorithm::tiling::Tiling;
use crate::io::error::Result;
use crate::spatial::{Position, Tile};
use rand::Rng;

/// Free position chosen for branching, with the neighbours it can pair with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchPoint {
    /// The most constrained free cell
    pub position: Position,
    /// Its free neighbours; one child tiling is produced per entry
    pub free_neighbors: Vec<Position>,
}

/// Order free positions for exploration
///
/// Each position is ranked by `random() - distance_from_center` and sorted
/// ascending, so cells far from the centre tend to be visited first and ties
/// are shuffled. The ranking only affects exploration order.
pub fn rank_free_positions<R: Rng + ?Sized>(
    tiling: &Tiling,
    rng: &mut R,
    center_bias: bool,
) -> Vec<Position> {
    let mut ranked: Vec<(Position, f64)> = tiling
        .free_positions()
        .into_iter()
        .map(|pos| {
            let jitter = rng.random::<f64>();
            let bias = if center_bias {
                pos.distance_from_center(tiling.width(), tiling.height())
            } else {
                0.0
            };
            (pos, jitter - bias)
        })
        .collect();

    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.into_iter().map(|(pos, _)| pos).collect()
}

/// Find the free position with the fewest free neighbours
///
/// Scans `ranked` in order and keeps the first position with a strictly
/// smaller count, so the ranking decides between equally constrained cells.
/// Returns `None` when there are no candidates.
pub fn most_constrained_position(tiling: &Tiling, ranked: &[Position]) -> Option<BranchPoint> {
    let mut best: Option<BranchPoint> = None;

    for &position in ranked {
        let count = tiling.free_neighbor_count(position);
        let improves = best
            .as_ref()
            .is_none_or(|current| count < current.free_neighbors.len());
        if improves {
            best = Some(BranchPoint {
                position,
                free_neighbors: tiling.free_neighbors(position),
            });
            // Nothing can beat a stuck cell
            if count == 0 {
                break;
            }
        }
    }

    best
}

/// Produce the candidate next tilings of `tiling`
///
/// Branches on the most constrained free cell: one child per free neighbour,
/// each extending the tile list with `{cell, neighbour}`. Returns an empty
/// list when the tiling is complete or the chosen cell has no free
/// neighbours. With `forced_moves` enabled every child is advanced through
/// its forced placements before being returned.
///
/// # Errors
///
/// Returns `InvariantViolation` if a generated tile would break the
/// no-overlap or bounds invariants.
pub fn generate_children<R: Rng + ?Sized>(
    tiling: &Tiling,
    rng: &mut R,
    config: &SearchConfig,
) -> Result<Vec<Tiling>> {
    let ranked = rank_free_positions(tiling, rng, config.center_bias);
    let Some(branch) = most_constrained_position(tiling, &ranked) else {
        return Ok(Vec::new());
    };

    let tag = tiling.tile_count() as u32;
    branch
        .free_neighbors
        .iter()
        .map(|&neighbor| {
            let tile = Tile::new(branch.position, neighbor).with_tag(tag);
            let child = tiling.extended(tile)?;
            if config.forced_moves {
                advance_forced_moves(child)
            } else {
                Ok(child)
            }
        })
        .collect()
}
