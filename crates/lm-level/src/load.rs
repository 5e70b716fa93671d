use std::io::Cursor;
use std::path::Path;

use image::{ImageReader, RgbaImage};
use lm_core::{Error, Grid, Rgba, encode};
use tracing::debug;

/// Reads a map PNG from disk into a grid of packed colors.
pub fn load_grid(path: &Path) -> Result<Grid<u32>, Error> {
    let img = ImageReader::open(path)
        .map_err(|e| decode_error(format!("opening {}: {e}", path.display())))?
        .with_guessed_format()
        .map_err(|e| decode_error(format!("reading {}: {e}", path.display())))?
        .decode()
        .map_err(|e| decode_error(format!("decoding {}: {e}", path.display())))?;

    let grid = rgba_to_grid(img.into_rgba8())?;
    debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "loaded map image"
    );
    Ok(grid)
}

/// Decodes an in-memory PNG into a grid of packed colors.
pub fn decode_grid(bytes: &[u8]) -> Result<Grid<u32>, Error> {
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))?;

    rgba_to_grid(img.into_rgba8())
}

fn rgba_to_grid(img: RgbaImage) -> Result<Grid<u32>, Error> {
    let (w, h) = img.dimensions();
    let data = img
        .pixels()
        .map(|px| encode(Rgba::from_array(px.0)))
        .collect();

    Grid::from_rows(w as usize, h as usize, data)
}

fn decode_error(reason: String) -> Error {
    Error::Decode { reason }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba as Px, RgbaImage};
    use lm_core::Error;

    use crate::{decode_grid, load_grid};

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).expect("encode png");
        out.into_inner()
    }

    #[test]
    fn raster_channels_are_packed_argb() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(0, 0, Px([0, 255, 0, 255]));
        img.put_pixel(2, 0, Px([255, 0, 0, 255]));
        img.put_pixel(1, 1, Px([0, 136, 255, 255]));
        img.put_pixel(2, 1, Px([10, 20, 30, 0]));

        let g = decode_grid(&png_bytes(&img)).expect("decode png");

        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.get(0, 0), Some(&0xFF00_FF00));
        assert_eq!(g.get(2, 0), Some(&0xFFFF_0000));
        assert_eq!(g.get(1, 1), Some(&0xFF00_88FF));
        assert_eq!(g.get(2, 1), Some(&0x000A_141E));
        assert_eq!(g.get(1, 0), Some(&0x0000_0000));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("map.png");
        let mut img = RgbaImage::new(4, 5);
        img.put_pixel(3, 4, Px([0, 0, 0, 255]));
        img.save(&path).expect("save png");

        let g = load_grid(&path).expect("load png");
        assert_eq!((g.width(), g.height()), (4, 5));
        assert_eq!(g.get(3, 4), Some(&0xFF00_0000));
    }

    #[test]
    fn unreadable_input_is_a_decode_error() {
        assert!(matches!(
            decode_grid(b"definitely not a png"),
            Err(Error::Decode { .. })
        ));

        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            load_grid(&dir.path().join("missing.png")),
            Err(Error::Decode { .. })
        ));
    }
}
