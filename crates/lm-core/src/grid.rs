use crate::{Error, Position};

/// Axis offsets of the 4-neighborhood: left, right, up, down.
const N4: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Immutable `width x height` array addressed as `(x, y)`.
///
/// Elements are stored column-major (`x` outer), the transpose of raster
/// row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(x * self.height + y)
    }

    pub fn at(&self, p: Position) -> Option<&T> {
        self.get(p.x, p.y)
    }

    /// All cells in storage order: `x` outer, `y` inner.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        let h = self.height.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (Position::new(i / h, i % h), v))
    }

    /// In-bounds axis neighbors of `(x, y)`; out-of-bounds neighbors are
    /// skipped rather than padded.
    pub fn neighbors4(&self, x: usize, y: usize) -> impl Iterator<Item = (Position, &T)> + '_ {
        N4.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            self.get(nx, ny).map(|v| (Position::new(nx, ny), v))
        })
    }
}

impl<T: Clone> Grid<T> {
    /// Builds a grid from raster row-major storage: `data[y * width + x]`.
    pub fn from_rows(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = checked_len(width, height, data.len())?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        let mut columns = Vec::with_capacity(expected);
        for x in 0..width {
            for y in 0..height {
                columns.push(data[y * width + x].clone());
            }
        }

        Ok(Self {
            width,
            height,
            data: columns,
        })
    }
}

fn checked_len(width: usize, height: usize, actual: usize) -> Result<usize, Error> {
    width.checked_mul(height).ok_or(Error::SizeMismatch {
        expected: usize::MAX,
        actual,
    })
}
