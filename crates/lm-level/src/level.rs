use lm_cells::classify_cells;
use lm_core::{Cell, Error, Grid, Palette, Position};
use lm_marker::locate_markers;
use lm_route::extract_routes;
use serde::Serialize;
use tracing::debug;

/// Level description consumed by the renderer.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelData {
    pub width: usize,
    pub height: usize,
    pub start: Position,
    /// Radians clockwise from `+y`, in `(-pi, pi]`.
    pub start_bearing: f64,
    /// Primary route first when present; start excluded from each.
    pub routes: Vec<Vec<Position>>,
    /// Row-major: `y` outer, `x` inner.
    pub cells: Vec<Cell>,
}

/// Clockwise angle from `+y` to the vector `start -> look_at`.
pub fn start_bearing(start: Position, look_at: Position) -> f64 {
    let (dx, dy) = start.delta_to(look_at);
    // Negate before the float cast so a zero x offset yields +0.0.
    ((-dx) as f64).atan2(dy as f64)
}

pub fn build_level(grid: &Grid<u32>, palette: &Palette) -> Result<LevelData, Error> {
    let markers = locate_markers(grid, palette)?;
    let routes = extract_routes(grid, palette, markers.start, &markers.breadcrumbs)?;
    let cells = classify_cells(grid, palette)?;
    let bearing = start_bearing(markers.start, markers.start_look_at);

    debug!(
        routes = routes.len(),
        bearing,
        "assembled level"
    );

    Ok(LevelData {
        width: grid.width(),
        height: grid.height(),
        start: markers.start,
        start_bearing: bearing,
        routes: routes.into_iter().map(|r| r.points).collect(),
        cells,
    })
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use lm_core::{Cell, Error, Marker, Palette, Position, fixture};

    use crate::{build_level, start_bearing};

    #[test]
    fn bearing_is_clockwise_from_positive_y() {
        let s = Position::new(5, 5);
        let cases = [
            (Position::new(6, 5), -FRAC_PI_2),
            (Position::new(4, 5), FRAC_PI_2),
            (Position::new(5, 6), 0.0),
            (Position::new(5, 4), PI),
            (Position::new(6, 6), -FRAC_PI_2 / 2.0),
        ];

        for (look, expected) in cases {
            let b = start_bearing(s, look);
            assert!((b - expected).abs() < 1e-12, "{look}: {b} vs {expected}");
            assert!(b > -PI && b <= PI);
        }
        assert!(start_bearing(s, Position::new(5, 9)).is_sign_positive());
    }

    #[test]
    fn single_route_level() {
        let g = fixture::map(
            "
.......
.     .
. s l .
.     .
. b b .
.   f .
.......
",
        )
        .expect("valid fixture");

        let level = build_level(&g, &Palette::default()).expect("level");

        assert_eq!(level.width, 7);
        assert_eq!(level.height, 7);
        assert_eq!(level.start, Position::new(2, 2));
        assert!((level.start_bearing + FRAC_PI_2).abs() < 1e-12);
        assert_eq!(
            level.routes,
            vec![vec![Position::new(2, 4), Position::new(4, 4)]]
        );

        use Cell::{Blank as B, Finish as F, Terrain as T};
        assert_eq!(
            level.cells,
            vec![
                T, T, T, T, T, T, T, //
                T, B, B, B, B, B, T, //
                T, B, B, B, B, B, T, //
                T, B, B, B, B, B, T, //
                T, B, B, B, B, B, T, //
                T, B, B, B, F, B, T, //
                T, T, T, T, T, T, T,
            ]
        );
    }

    #[test]
    fn two_routes_and_interference() {
        let g = fixture::map(
            "
..........
.  iii   .
. s iii  .
.  lii   .
. b  c a .
.  b c  a.
.   fff  .
..........
",
        )
        .expect("valid fixture");

        let level = build_level(&g, &Palette::default()).expect("level");

        assert_eq!(level.routes.len(), 2);
        assert_ne!(level.routes[0], level.routes[1]);
        assert!(level.routes.iter().all(|r| !r.is_empty()));

        let cell = |x: usize, y: usize| level.cells[y * level.width + x];
        assert_eq!(cell(3, 1), Cell::Interference);
        assert_eq!(cell(5, 2), Cell::Interference);
        assert_eq!(cell(4, 3), Cell::Interference);
        assert_eq!(cell(5, 6), Cell::Finish);
        // Look-at touches interference on one side only.
        assert_eq!(cell(3, 3), Cell::Blank);
        assert_eq!(
            level
                .cells
                .iter()
                .filter(|&&c| c == Cell::Interference)
                .count(),
            8
        );
    }

    #[test]
    fn look_at_with_four_distinct_neighbors_is_rejected() {
        let g = fixture::map(
            "
.....
.sl .
.bbf.
.....
",
        )
        .expect("valid fixture");
        let p = Palette::default();

        assert_eq!(
            build_level(&g, &p),
            Err(Error::AmbiguousNeighbor {
                position: Position::new(2, 1),
                candidates: vec![
                    (p.start, 1),
                    (0x0000_0000, 1),
                    (p.terrain, 1),
                    (p.breadcrumb_mask, 1),
                ],
            })
        );
    }

    #[test]
    fn validation_order_reports_markers_first() {
        let g = fixture::map(
            "
....
.bf.
....
",
        )
        .expect("valid fixture");

        assert!(matches!(
            build_level(&g, &Palette::default()),
            Err(Error::MissingMarker {
                marker: Marker::Start,
                ..
            })
        ));
    }
}
