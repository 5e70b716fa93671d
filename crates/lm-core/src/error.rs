use core::fmt;

use crate::Position;

/// Markers that must appear exactly once in a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start,
    StartLookAt,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "START"),
            Self::StartLookAt => write!(f, "START_LOOK_AT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The raster could not be read or parsed as an image.
    Decode { reason: String },
    /// A unique marker was found zero or several times.
    MissingMarker {
        marker: Marker,
        color: u32,
        found: Vec<Position>,
    },
    NoBreadcrumbs { mask: u32 },
    /// The four neighbors of a marker pixel do not agree on one color.
    AmbiguousNeighbor {
        position: Position,
        candidates: Vec<(u32, usize)>,
    },
    BadPixelValue { position: Position, color: u32 },
    UnexpectedBreadcrumbTag { position: Position, color: u32 },
    InvalidPalette { reason: String },
    OutOfBounds { position: Position },
    Io { reason: String },
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { reason } => write!(f, "cannot decode map image: {reason}"),
            Self::MissingMarker {
                marker,
                color,
                found,
            } => {
                write!(
                    f,
                    "missing marker: expected exactly 1 {marker} pixel #{color:08x}, found {}",
                    found.len()
                )?;
                if !found.is_empty() {
                    write!(f, " at")?;
                    for p in found {
                        write!(f, " {p}")?;
                    }
                }
                Ok(())
            }
            Self::NoBreadcrumbs { mask } => {
                write!(f, "no breadcrumbs: expected at least one pixel matching #{mask:08x}")
            }
            Self::AmbiguousNeighbor {
                position,
                candidates,
            } => {
                write!(f, "ambiguous neighbor colour at {position}:")?;
                if candidates.is_empty() {
                    write!(f, " no neighbors")?;
                }
                for (color, count) in candidates {
                    write!(f, " #{color:08x}x{count}")?;
                }
                Ok(())
            }
            Self::BadPixelValue { position, color } => {
                write!(f, "bad pixel value #{color:08x} at {position}")
            }
            Self::UnexpectedBreadcrumbTag { position, color } => {
                write!(f, "unexpected breadcrumb tag #{color:08x} at {position}")
            }
            Self::InvalidPalette { reason } => write!(f, "invalid palette: {reason}"),
            Self::OutOfBounds { position } => write!(f, "position {position} out of bounds"),
            Self::Io { reason } => write!(f, "i/o error: {reason}"),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for Error {}
