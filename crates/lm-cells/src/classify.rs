use lm_core::{Cell, Error, Grid, Palette, Position};
use tracing::debug;

const ALPHA_MASK: u32 = 0xFF00_0000;

/// Most frequent raw color among the in-bounds 4-neighbors of `p`.
///
/// Fails when the maximum count is shared by two or more colors, or when
/// `p` has no neighbor at all.
pub fn neighbor_majority(grid: &Grid<u32>, p: Position) -> Result<u32, Error> {
    // At most four distinct colors; a linear scan keeps first-seen order.
    let mut counts: Vec<(u32, usize)> = Vec::with_capacity(4);
    for (_, &c) in grid.neighbors4(p.x, p.y) {
        match counts.iter_mut().find(|(color, _)| *color == c) {
            Some((_, n)) => *n += 1,
            None => counts.push((c, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let winner = match counts.as_slice() {
        [(color, _)] => Some(*color),
        [(color, best), (_, second), ..] if best > second => Some(*color),
        _ => None,
    };

    winner.ok_or(Error::AmbiguousNeighbor {
        position: p,
        candidates: counts,
    })
}

/// Phase 1: the color a cell is classified by.
pub fn effective_color(grid: &Grid<u32>, palette: &Palette, p: Position) -> Result<u32, Error> {
    let raw = *grid.at(p).ok_or(Error::OutOfBounds { position: p })?;
    if palette.is_marker(raw) {
        neighbor_majority(grid, p)
    } else {
        Ok(raw)
    }
}

/// Phase 2: closed-world palette lookup.
pub fn cell_for_color(palette: &Palette, color: u32, p: Position) -> Result<Cell, Error> {
    if color & ALPHA_MASK == 0 {
        return Ok(Cell::Blank);
    }
    if color == palette.terrain {
        return Ok(Cell::Terrain);
    }
    if color == palette.finish {
        return Ok(Cell::Finish);
    }
    if palette.interference == Some(color) {
        return Ok(Cell::Interference);
    }
    Err(Error::BadPixelValue { position: p, color })
}

/// Classifies every position, returned row-major (`y` outer, `x` inner).
pub fn classify_cells(grid: &Grid<u32>, palette: &Palette) -> Result<Vec<Cell>, Error> {
    let mut cells = Vec::with_capacity(grid.width() * grid.height());
    let mut resolved = 0usize;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Position::new(x, y);
            let color = effective_color(grid, palette, p)?;
            if grid.at(p) != Some(&color) {
                resolved += 1;
            }
            cells.push(cell_for_color(palette, color, p)?);
        }
    }

    debug!(
        width = grid.width(),
        height = grid.height(),
        resolved,
        "classified cells"
    );
    Ok(cells)
}
