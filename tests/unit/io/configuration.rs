//! Tests for generator constants and their relationships

#[cfg(test)]
mod tests {
    use dominotile::Tiling;
    use dominotile::io::configuration::{
        BORDER_COLOR, DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_WIDTH, EMPTY_COLOR,
        GIF_FRAME_DELAY_MS, MAX_CELL_SIZE, MAX_GRID_DIMENSION, TILE_PALETTE,
        VIEWER_MIN_FRAME_DELAY_MS,
    };

    // Tests the default grid can be tiled
    #[test]
    fn test_default_grid_even_area() {
        assert_eq!((DEFAULT_WIDTH * DEFAULT_HEIGHT) % 2, 0);
        assert!(Tiling::empty(DEFAULT_WIDTH, DEFAULT_HEIGHT).is_ok());
    }

    // Tests the dimension limit is inclusive and admits the default grid
    // Verified by raising MAX_GRID_DIMENSION
    #[test]
    fn test_max_grid_dimension() {
        assert_eq!(MAX_GRID_DIMENSION, 256);
        assert!(DEFAULT_WIDTH <= MAX_GRID_DIMENSION && DEFAULT_HEIGHT <= MAX_GRID_DIMENSION);
        assert!(Tiling::empty(MAX_GRID_DIMENSION, 1).is_ok());
        assert!(Tiling::empty(MAX_GRID_DIMENSION + 1, 1).is_err());
    }

    // Tests the default cell size lies in the accepted range
    #[test]
    fn test_cell_size_range() {
        assert!(DEFAULT_CELL_SIZE >= 1);
        assert!(DEFAULT_CELL_SIZE <= MAX_CELL_SIZE);
    }

    // Tests palette colours are opaque and distinct from borders and background
    // Verified by making the second palette entry equal to BORDER_COLOR
    #[test]
    fn test_palette_colors() {
        for color in TILE_PALETTE {
            assert_eq!(color[3], 255);
            assert_ne!(color, BORDER_COLOR);
            assert_ne!(color, EMPTY_COLOR);
        }
        assert_ne!(TILE_PALETTE[0], TILE_PALETTE[1]);
    }

    // Tests the default GIF delay triggers frame skipping
    // Verified by setting GIF_FRAME_DELAY_MS to the viewer minimum
    #[test]
    fn test_gif_delay_below_viewer_minimum() {
        assert!(GIF_FRAME_DELAY_MS < VIEWER_MIN_FRAME_DELAY_MS);
        assert!(GIF_FRAME_DELAY_MS > 0);
    }
}
