//! Example: draw a map as ASCII art, save it as a PNG and convert it.
//!
//! Glyphs: `.` terrain, `f` finish, `i` interference, `s` start, `l` start
//! look-at, `b`/`a`/`c` primary/alternative/shared breadcrumbs, space blank.
//!
//! Run from the workspace root:
//!   cargo run -p levelmap --example ascii_map -- --help
//!   cargo run -p levelmap --example ascii_map -- --out target/ascii_map

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use image::{Rgba as Px, RgbaImage};
use levelmap::{Palette, convert_file, decode, fixture};

#[derive(Parser, Debug)]
#[command(about = "Convert an ASCII-art map through the full PNG pipeline")]
struct Args {
    /// Text file holding the map; the built-in sample is used when omitted
    #[arg(long)]
    map: Option<PathBuf>,

    /// Output directory for `map.png` and `map.json`
    #[arg(long, default_value = "target/ascii_map")]
    out: PathBuf,
}

const SAMPLE: &str = "
............
.   iii    .
. s  iii   .
.  l  ii   .
. b   c  a .
.  b  c   a.
.    ffff  .
............
";

fn main() -> Result<()> {
    let args = Args::parse();

    let art = match &args.map {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => SAMPLE.to_string(),
    };

    let grid = fixture::map(&art).context("parsing ascii map")?;
    let mut img = RgbaImage::new(grid.width() as u32, grid.height() as u32);
    for (p, &color) in grid.iter() {
        img.put_pixel(p.x as u32, p.y as u32, Px(decode(color).to_array()));
    }

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;
    let png = args.out.join("map.png");
    let json = args.out.join("map.json");
    img.save(&png)
        .with_context(|| format!("saving {}", png.display()))?;

    let level = convert_file(&png, &json, &Palette::default())
        .with_context(|| format!("converting {}", png.display()))?;

    println!(
        "{}x{} map, start {} bearing {:.4} rad",
        level.width, level.height, level.start, level.start_bearing
    );
    for (i, route) in level.routes.iter().enumerate() {
        let path: Vec<String> = route.iter().map(ToString::to_string).collect();
        println!("  route {i}: {}", path.join(" -> "));
    }
    println!("wrote {}", json.display());

    Ok(())
}
