use lm_core::{Error, Grid, Palette, Position, RouteKind};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub kind: RouteKind,
    /// Breadcrumbs in travel order, start excluded.
    pub points: Vec<Position>,
}

/// Breadcrumbs that belong to `kind`, in the order given.
///
/// Every breadcrumb is checked, including those not selected, so an unknown
/// tag is reported regardless of which route is being built.
pub fn filter_breadcrumbs(
    grid: &Grid<u32>,
    palette: &Palette,
    breadcrumbs: &[Position],
    kind: RouteKind,
) -> Result<Vec<Position>, Error> {
    let mut out = Vec::with_capacity(breadcrumbs.len());
    for &p in breadcrumbs {
        let color = *grid.at(p).ok_or(Error::OutOfBounds { position: p })?;
        let tag = Palette::breadcrumb_tag(color);
        match palette.route_tags.admits(kind, tag) {
            Some(true) => out.push(p),
            Some(false) => {}
            None => return Err(Error::UnexpectedBreadcrumbTag { position: p, color }),
        }
    }
    Ok(out)
}

/// Greedy nearest-neighbor chain through `candidates`, starting at `start`.
///
/// O(n^2) over a fixed candidate array with a visited mask; the first
/// candidate (in slice order) wins exact distance ties.
pub fn order_nearest(start: Position, candidates: &[Position]) -> Vec<Position> {
    let n = candidates.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut last = start;

    for _ in 0..n {
        let mut best = None;
        let mut best_d2 = u64::MAX;
        for (i, &c) in candidates.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d2 = last.dist2(c);
            if d2 < best_d2 {
                best_d2 = d2;
                best = Some(i);
            }
        }

        let Some(i) = best else {
            break;
        };
        visited[i] = true;
        last = candidates[i];
        order.push(last);
    }

    order
}

/// Builds one route, or `None` when no breadcrumb belongs to `kind`.
pub fn extract_route(
    grid: &Grid<u32>,
    palette: &Palette,
    start: Position,
    breadcrumbs: &[Position],
    kind: RouteKind,
) -> Result<Option<Route>, Error> {
    let selected = filter_breadcrumbs(grid, palette, breadcrumbs, kind)?;
    if selected.is_empty() {
        debug!(?kind, "route absent");
        return Ok(None);
    }

    let points = order_nearest(start, &selected);
    debug!(?kind, points = points.len(), "ordered route");
    Ok(Some(Route { kind, points }))
}

/// Primary route first, then alternative; absent routes are omitted.
pub fn extract_routes(
    grid: &Grid<u32>,
    palette: &Palette,
    start: Position,
    breadcrumbs: &[Position],
) -> Result<Vec<Route>, Error> {
    let mut routes = Vec::with_capacity(RouteKind::ALL.len());
    for kind in RouteKind::ALL {
        if let Some(route) = extract_route(grid, palette, start, breadcrumbs, kind)? {
            routes.push(route);
        }
    }
    Ok(routes)
}
