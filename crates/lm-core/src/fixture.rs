//! ASCII-art map builder for tests, benches and demos.
//!
//! Glyphs of [`legend`]:
//!
//! | glyph | color |
//! |---|---|
//! | ` ` | blank (`0x00000000`) |
//! | `.` | terrain |
//! | `f` | finish |
//! | `i` | interference |
//! | `s` | start |
//! | `l` | start look-at |
//! | `b` | primary breadcrumb |
//! | `a` | alternative breadcrumb |
//! | `c` | shared breadcrumb |

use crate::{Error, Grid, Palette};

pub fn legend(palette: &Palette) -> Vec<(char, u32)> {
    let crumb = |tag: u8| palette.breadcrumb_mask | (u32::from(tag) << 8);
    let tags = palette.route_tags;

    let mut out = vec![
        (' ', 0x0000_0000),
        ('.', palette.terrain),
        ('f', palette.finish),
        ('s', palette.start),
        ('l', palette.start_look_at),
        ('b', crumb(tags.primary)),
        ('a', crumb(tags.alternative)),
        ('c', crumb(tags.shared)),
    ];
    if let Some(c) = palette.interference {
        out.push(('i', c));
    }
    out
}

/// Builds a grid from rows of glyphs. Leading and trailing blank lines are
/// dropped; every remaining row must have the same length.
pub fn grid_from_ascii(art: &str, legend: &[(char, u32)]) -> Result<Grid<u32>, Error> {
    let rows: Vec<&str> = art.trim_matches('\n').split('\n').collect();
    let width = rows.first().map_or(0, |r| r.chars().count());
    let height = rows.len();

    let mut data = Vec::with_capacity(width * height);
    for (y, row) in rows.iter().enumerate() {
        let n = row.chars().count();
        if n != width {
            return Err(Error::Decode {
                reason: format!("fixture row {y} has {n} glyphs, expected {width}"),
            });
        }
        for ch in row.chars() {
            let Some(&(_, color)) = legend.iter().find(|(g, _)| *g == ch) else {
                return Err(Error::Decode {
                    reason: format!("unknown fixture glyph {ch:?} in row {y}"),
                });
            };
            data.push(color);
        }
    }

    Grid::from_rows(width, height, data)
}

/// [`grid_from_ascii`] with the default [`legend`].
pub fn map(art: &str) -> Result<Grid<u32>, Error> {
    grid_from_ascii(art, &legend(&Palette::default()))
}
