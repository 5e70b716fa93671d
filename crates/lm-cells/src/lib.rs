//! Cell classification in two phases.
//!
//! Phase 1 resolves marker pixels (start, look-at, breadcrumbs) to the color
//! they sit on: the unique most frequent raw color among the in-bounds
//! 4-neighbors. Phase 2 maps the effective color to a [`lm_core::Cell`]
//! through the palette table. The table is closed: a color outside it is an
//! error, never a default.

mod classify;

pub use classify::{cell_for_color, classify_cells, effective_color, neighbor_majority};
