//! Plain-text rendering of tilings for terminals and logs

use crate::spatial::{Position, Tile, ownership_grid};

/// Glyph for a free cell
pub const FREE_GLYPH: char = '.';

/// Render a tiling as one line per row
///
/// Horizontal dominoes are drawn as `<>`, vertical ones as `^` above `v`,
/// and free cells as `.`.
pub fn render_ascii(width: i32, height: i32, tiles: &[Tile]) -> String {
    let owners = ownership_grid(width, height, tiles);
    let mut out = String::with_capacity(owners.len() + owners.nrows());

    for (y, row) in owners.rows().into_iter().enumerate() {
        if y > 0 {
            out.push('\n');
        }
        for (x, &owner) in row.iter().enumerate() {
            let glyph = owner
                .and_then(|index| tiles.get(index))
                .map_or(FREE_GLYPH, |tile| {
                    tile_glyph(tile, Position::new(x as i32, y as i32))
                });
            out.push(glyph);
        }
    }

    out
}

fn tile_glyph(tile: &Tile, pos: Position) -> char {
    let leading = pos == tile.min_corner();
    match (tile.is_horizontal(), leading) {
        (true, true) => '<',
        (true, false) => '>',
        (false, true) => '^',
        (false, false) => 'v',
    }
}
