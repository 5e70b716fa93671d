//! Route reconstruction from scattered breadcrumb pixels.
//!
//! Each breadcrumb carries a route tag in its green channel. For every
//! [`lm_core::RouteKind`] the matching breadcrumbs are chained by greedy
//! nearest neighbor starting from the start marker:
//! - distance is squared Euclidean on integer grid coordinates;
//! - ties go to the candidate that comes first in scan order;
//! - the start position is not part of the emitted route.
//!
//! This is a heuristic, not a shortest-path solver. Authored maps place
//! breadcrumbs close enough together that nearest neighbor recovers the
//! intended path.

mod route;

pub use route::{Route, extract_route, extract_routes, filter_breadcrumbs, order_nearest};
