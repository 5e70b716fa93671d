//! Marker pixel search.
//!
//! Results are returned in grid scan order (`x` outer, `y` inner). Route
//! ordering relies on this order for its tie-break, so callers must not
//! re-sort.

mod locate;

pub use locate::{
    Markers, find_breadcrumbs, find_exact, find_masked, find_unique, locate_markers,
};
