//! Map PNG to level data conversion.
//!
//! [`load_grid`] decodes a PNG into an `(x, y)`-addressed grid of packed
//! colors. [`build_level`] runs marker search, route ordering and cell
//! classification and assembles a [`LevelData`]. [`write_level`] renders the
//! compact JSON form and replaces the destination atomically.
//!
//! Every validation step runs before anything is written: a failed
//! conversion leaves the destination untouched.

mod level;
mod load;
mod write;

pub use level::{LevelData, build_level, start_bearing};
pub use load::{decode_grid, load_grid};
pub use write::{convert_file, to_json, write_level};
