use lm_core::{Error, Grid, Marker, Palette, Position};
use tracing::debug;

/// Positions of every marker a level needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: Position,
    pub start_look_at: Position,
    pub breadcrumbs: Vec<Position>,
}

pub fn find_exact(grid: &Grid<u32>, color: u32) -> Vec<Position> {
    grid.iter()
        .filter(|&(_, &c)| c == color)
        .map(|(p, _)| p)
        .collect()
}

/// Positions whose color has every bit of `mask` set.
pub fn find_masked(grid: &Grid<u32>, mask: u32) -> Vec<Position> {
    grid.iter()
        .filter(|&(_, &c)| c & mask == mask)
        .map(|(p, _)| p)
        .collect()
}

pub fn find_unique(grid: &Grid<u32>, marker: Marker, color: u32) -> Result<Position, Error> {
    let found = find_exact(grid, color);
    match found.as_slice() {
        [p] => Ok(*p),
        _ => Err(Error::MissingMarker {
            marker,
            color,
            found,
        }),
    }
}

pub fn find_breadcrumbs(grid: &Grid<u32>, mask: u32) -> Result<Vec<Position>, Error> {
    let found = find_masked(grid, mask);
    if found.is_empty() {
        return Err(Error::NoBreadcrumbs { mask });
    }
    Ok(found)
}

pub fn locate_markers(grid: &Grid<u32>, palette: &Palette) -> Result<Markers, Error> {
    let start = find_unique(grid, Marker::Start, palette.start)?;
    let start_look_at = find_unique(grid, Marker::StartLookAt, palette.start_look_at)?;
    let breadcrumbs = find_breadcrumbs(grid, palette.breadcrumb_mask)?;

    debug!(
        %start,
        %start_look_at,
        breadcrumbs = breadcrumbs.len(),
        "located markers"
    );

    Ok(Markers {
        start,
        start_look_at,
        breadcrumbs,
    })
}
