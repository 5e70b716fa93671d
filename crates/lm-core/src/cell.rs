use serde::{Serialize, Serializer};

/// Semantic kind of one map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Blank,
    Terrain,
    Finish,
    Interference,
}

impl Cell {
    /// Integer code consumed by the renderer.
    pub const fn code(self) -> u8 {
        match self {
            Self::Blank => 0,
            Self::Terrain => 1,
            Self::Finish => 2,
            Self::Interference => 3,
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}
