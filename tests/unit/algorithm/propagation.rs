//! Tests for forced placement detection and the forced-move worklist

#[cfg(test)]
mod tests {
    use dominotile::algorithm::propagation::{
        ForcedPlacement, advance_forced_moves, find_forced_placement, forced_placement_at,
    };
    use dominotile::{Position, Tile, Tiling};

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    // Tests a cell with a single free neighbour is forced
    // Verified by requiring two free neighbours for a forced cell
    #[test]
    fn test_forced_placement_at_strip_end() {
        let tiling = Tiling::empty(2, 1).expect("valid dimensions");
        assert_eq!(
            forced_placement_at(&tiling, p(0, 0)),
            Some(ForcedPlacement {
                position: p(0, 0),
                partner: p(1, 0),
            })
        );
    }

    // Tests cells with several or no options, and covered cells, are not forced
    // Verified by skipping the free check on the forced cell itself
    #[test]
    fn test_not_forced() {
        let square = Tiling::empty(2, 2).expect("valid dimensions");
        assert!(forced_placement_at(&square, p(0, 0)).is_none());

        let covered = Tiling::from_tiles(2, 2, [Tile::new(p(0, 0), p(1, 0))]).expect("valid tiling");
        assert!(forced_placement_at(&covered, p(0, 0)).is_none());

        let stuck = Tiling::from_tiles(3, 1, [Tile::new(p(1, 0), p(2, 0))]).expect("valid tiling");
        assert!(forced_placement_at(&stuck, p(0, 0)).is_none());
    }

    // Tests the forced tile joins the cell and its partner
    #[test]
    fn test_forced_placement_tile() {
        let forced = ForcedPlacement {
            position: p(3, 2),
            partner: p(3, 1),
        };
        assert_eq!(forced.tile(), Tile::new(p(3, 1), p(3, 2)));
    }

    // Tests the grid scan finds the first forced cell in column order
    // Verified by scanning free positions in reverse
    #[test]
    fn test_find_forced_placement() {
        let tiling = Tiling::from_tiles(3, 2, [Tile::new(p(0, 0), p(1, 0))]).expect("valid tiling");
        assert_eq!(
            find_forced_placement(&tiling),
            Some(ForcedPlacement {
                position: p(0, 1),
                partner: p(1, 1),
            })
        );

        let open = Tiling::from_tiles(3, 2, [Tile::new(p(0, 0), p(0, 1))]).expect("valid tiling");
        assert!(find_forced_placement(&open).is_none());
    }

    // Tests forced moves cascade until the grid is complete
    // Verified by not re-queuing the neighbours of a placed tile
    #[test]
    fn test_advance_cascades() {
        let tiling = Tiling::from_tiles(3, 2, [Tile::new(p(0, 0), p(1, 0))]).expect("valid tiling");
        let advanced = advance_forced_moves(tiling).expect("forced tiles fit");

        assert!(advanced.is_complete());
        assert_eq!(advanced.tile_count(), 3);
        assert_eq!(advanced.tiles().get(1), Some(&Tile::new(p(0, 1), p(1, 1))));
        assert_eq!(advanced.tiles().get(2), Some(&Tile::new(p(2, 0), p(2, 1))));
    }

    // Tests forced tiles are tagged with their placement order
    // Verified by tagging every forced tile with zero
    #[test]
    fn test_advance_tags_in_order() {
        let tiling = Tiling::empty(6, 1).expect("valid dimensions");
        let advanced = advance_forced_moves(tiling).expect("forced tiles fit");

        assert!(advanced.is_complete());
        let tags: Vec<u32> = advanced.tiles().iter().map(Tile::tag).collect();
        assert_eq!(tags, vec![0, 1, 2]);
    }

    // Tests a tiling without forced cells is returned unchanged
    #[test]
    fn test_advance_without_forced_cells() {
        let tiling = Tiling::empty(2, 2).expect("valid dimensions");
        let advanced = advance_forced_moves(tiling).expect("nothing to place");
        assert_eq!(advanced.tile_count(), 0);
        assert_eq!(advanced.free_count(), 4);
    }

    // Tests forced moves only ever add tiles
    // Verified by rebuilding the tiling from the forced tiles only
    #[test]
    fn test_advance_keeps_existing_tiles() {
        let start = [Tile::new(p(1, 1), p(2, 1))];
        let tiling = Tiling::from_tiles(4, 3, start).expect("valid tiling");
        let advanced = advance_forced_moves(tiling).expect("forced tiles fit");

        assert!(advanced.tiles().starts_with(&start));
        for (index, tile) in advanced.tiles().iter().enumerate() {
            for other in advanced.tiles().iter().skip(index + 1) {
                assert!(!tile.overlaps(other));
            }
        }
    }
}
