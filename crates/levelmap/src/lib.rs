//! Umbrella crate for the `levelmap` workspace.
//!
//! Re-exports the pipeline stages so a caller can go from a map PNG to
//! [`LevelData`] through one dependency:
//!
//! ```no_run
//! use std::path::Path;
//!
//! let level = levelmap::convert_file(
//!     Path::new("maps/level1.png"),
//!     Path::new("build/level1.json"),
//!     &levelmap::Palette::default(),
//! )?;
//! println!("{} routes", level.routes.len());
//! # Ok::<(), levelmap::Error>(())
//! ```

pub use lm_cells::*;
pub use lm_core::*;
pub use lm_level::*;
pub use lm_marker::*;
pub use lm_route::*;
