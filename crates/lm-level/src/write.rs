use std::fs;
use std::io::Write;
use std::path::Path;

use lm_core::{Error, Palette};
use tempfile::NamedTempFile;
use tracing::info;

use crate::{LevelData, build_level, load_grid};

/// Compact JSON: fixed key order, no whitespace.
pub fn to_json(level: &LevelData) -> Result<String, Error> {
    serde_json::to_string(level).map_err(|e| Error::Io {
        reason: format!("serializing level: {e}"),
    })
}

/// Writes `level` to `dest`, replacing any existing file in one rename.
///
/// Missing parent directories are created.
pub fn write_level(dest: &Path, level: &LevelData) -> Result<(), Error> {
    let json = to_json(level)?;

    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| io_error(dir, "creating directory", e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| io_error(dir, "creating temp file in", e))?;
    tmp.write_all(json.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| io_error(tmp.path(), "writing", e))?;
    tmp.persist(dest)
        .map_err(|e| io_error(dest, "replacing", e.error))?;

    Ok(())
}

/// Converts one map PNG into its level JSON.
///
/// The destination is only touched after the whole conversion succeeded.
pub fn convert_file(src: &Path, dest: &Path, palette: &Palette) -> Result<LevelData, Error> {
    palette.validate()?;
    let grid = load_grid(src)?;
    let level = build_level(&grid, palette)?;
    write_level(dest, &level)?;

    info!(
        src = %src.display(),
        dest = %dest.display(),
        width = level.width,
        height = level.height,
        routes = level.routes.len(),
        "converted map"
    );
    Ok(level)
}

fn io_error(path: &Path, action: &str, e: std::io::Error) -> Error {
    Error::Io {
        reason: format!("{action} {}: {e}", path.display()),
    }
}
