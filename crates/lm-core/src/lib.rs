//! Foundational primitives for map-PNG level conversion.
//!
//! ## Packed Colors
//! A color is a `u32` laid out as `0xAARRGGBB`. Raster decoders hand out
//! channels in `(R, G, B, A)` order; [`encode`] and [`decode`] convert between
//! the two through a fixed channel permutation.
//!
//! ## Grid Orientation
//! [`Grid`] is addressed as `(x, y)` with `x` the column and `y` the row.
//! Storage is transposed from the row-major raster (x outer, y inner), so
//! every scan over a grid visits positions column by column.
//!
//! ## Palette
//! The reserved colors of the encoding live in a single [`Palette`] rule
//! table. [`Palette::default`] is the latest encoding version.

mod cell;
mod color;
mod error;
pub mod fixture;
mod geom;
mod grid;
mod palette;

pub use cell::Cell;
pub use color::{Rgba, decode, encode};
pub use error::{Error, Marker};
pub use geom::Position;
pub use grid::Grid;
pub use palette::{Palette, RouteKind, RouteTags};
