//! PNG rendering of tilings with palette fills and tile outlines

use crate::io::configuration::{BORDER_COLOR, EMPTY_COLOR, MAX_CELL_SIZE, TILE_PALETTE};
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::{Tile, ownership_grid};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Fill colour for a tile, cycling through the palette by tag
pub fn tile_color(tile: &Tile) -> [u8; 4] {
    let index = tile.tag() as usize % TILE_PALETTE.len();
    TILE_PALETTE.get(index).copied().unwrap_or(EMPTY_COLOR)
}

/// Rasterise a tiling at `cell_size` pixels per cell
///
/// Each tile is filled with its palette colour and outlined where it meets
/// another tile, a free cell or the grid edge. Free cells are left blank.
///
/// # Errors
///
/// Returns `InvalidParameter` if the cell size is zero or too large, or the
/// grid has no cells to draw.
pub fn render_tiling(
    width: i32,
    height: i32,
    tiles: &[Tile],
    cell_size: u32,
) -> Result<RgbaImage> {
    if cell_size == 0 || cell_size > MAX_CELL_SIZE {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &format!("must be between 1 and {MAX_CELL_SIZE}"),
        ));
    }
    if width <= 0 || height <= 0 {
        return Err(invalid_parameter(
            "dimensions",
            &format!("{width}x{height}"),
            &"cannot render a grid without cells",
        ));
    }

    let owners = ownership_grid(width, height, tiles);
    let owner_at = |col: i64, row: i64| -> Option<usize> {
        if col < 0 || row < 0 {
            return None;
        }
        owners
            .get([row as usize, col as usize])
            .copied()
            .flatten()
    };

    let img_width = width as u32 * cell_size;
    let img_height = height as u32 * cell_size;
    let last = cell_size - 1;

    let img: RgbaImage = ImageBuffer::from_fn(img_width, img_height, |px, py| {
        let col = i64::from(px / cell_size);
        let row = i64::from(py / cell_size);
        let Some(owner) = owner_at(col, row) else {
            return Rgba(EMPTY_COLOR);
        };

        let (dx, dy) = (px % cell_size, py % cell_size);
        let on_edge = (dx == 0 && owner_at(col - 1, row) != Some(owner))
            || (dx == last && owner_at(col + 1, row) != Some(owner))
            || (dy == 0 && owner_at(col, row - 1) != Some(owner))
            || (dy == last && owner_at(col, row + 1) != Some(owner));

        if on_edge {
            Rgba(BORDER_COLOR)
        } else {
            Rgba(tiles.get(owner).map_or(EMPTY_COLOR, tile_color))
        }
    });

    Ok(img)
}

/// Render a tiling and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The tiling cannot be rendered (see [`render_tiling`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_tiling_as_png(
    width: i32,
    height: i32,
    tiles: &[Tile],
    cell_size: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_tiling(width, height, tiles, cell_size)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
