use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use lm_core::Palette;
use lm_level::{build_level, convert_file, load_grid};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "levelmap")]
#[command(about = "Convert map PNGs into level JSON")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug, Clone)]
struct GlobalArgs {
    /// Palette JSON overriding the default color encoding
    #[arg(long, global = true)]
    palette: Option<PathBuf>,
    /// Log per-stage details; combined with `RUST_LOG` when both are set
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert one map image
    #[command(name = "convert")]
    Convert(ConvertArgs),
    /// Run the full pipeline without writing anything
    #[command(name = "check")]
    Check(CheckArgs),
    /// Convert every `.map.png` under a source tree into a mirrored output tree
    #[command(name = "sync")]
    Sync(SyncArgs),
}

#[derive(Args, Debug, Clone)]
struct ConvertArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, required = true)]
    out: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct CheckArgs {
    #[arg(long, required = true)]
    input: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct SyncArgs {
    #[arg(long, required = true)]
    src: PathBuf,
    #[arg(long, required = true)]
    out: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let palette = load_palette(cli.global.palette.as_deref())?;

    match cli.cmd {
        Command::Convert(args) => run_convert(args, &palette),
        Command::Check(args) => run_check(args, &palette),
        Command::Sync(args) => run_sync(args, &palette),
    }
}

const PIPELINE_CRATES: [&str; 5] = ["lm_core", "lm_marker", "lm_cells", "lm_route", "lm_level"];

/// `RUST_LOG` (or `info`) as the base; `--verbose` adds `debug` for the
/// pipeline crates on top of it.
fn log_directives(env: Option<&str>, verbose: bool) -> String {
    let mut directives = env
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("info")
        .to_string();
    if verbose {
        for krate in PIPELINE_CRATES {
            directives.push_str(&format!(",{krate}=debug"));
        }
    }
    directives
}

fn init_tracing(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = log_directives(env.as_deref(), verbose);
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_palette(path: Option<&Path>) -> Result<Palette> {
    let palette = match path {
        Some(path) => {
            ensure_file_exists(path, "palette")?;
            read_json::<Palette>(path)?
        }
        None => Palette::default(),
    };
    palette.validate().context("validating palette")?;
    Ok(palette)
}

fn run_convert(args: ConvertArgs, palette: &Palette) -> Result<()> {
    ensure_file_exists(&args.input, "input")?;
    convert_file(&args.input, &args.out, palette).with_context(|| {
        format!(
            "converting {} -> {}",
            args.input.display(),
            args.out.display()
        )
    })?;
    Ok(())
}

fn run_check(args: CheckArgs, palette: &Palette) -> Result<()> {
    ensure_file_exists(&args.input, "input")?;
    let grid = load_grid(&args.input).with_context(|| format!("loading {}", args.input.display()))?;
    let level =
        build_level(&grid, palette).with_context(|| format!("checking {}", args.input.display()))?;

    let lengths: Vec<usize> = level.routes.iter().map(Vec::len).collect();
    println!(
        "{}: {}x{} start {} bearing {:.4} routes {:?}",
        args.input.display(),
        level.width,
        level.height,
        level.start,
        level.start_bearing,
        lengths
    );
    Ok(())
}

fn run_sync(args: SyncArgs, palette: &Palette) -> Result<()> {
    if !args.src.is_dir() {
        bail!("source path is not a directory: {}", args.src.display());
    }

    let report = sync_tree(&args.src, &args.out, palette)?;
    info!(
        converted = report.converted,
        failed = report.failed.len(),
        "sync finished"
    );
    if !report.failed.is_empty() {
        bail!(
            "{} of {} maps failed to convert",
            report.failed.len(),
            report.converted + report.failed.len()
        );
    }
    Ok(())
}

#[derive(Debug, Default)]
struct SyncReport {
    converted: usize,
    failed: Vec<PathBuf>,
}

/// Converts every map under `src`; per-file failures are logged and counted.
fn sync_tree(src: &Path, out: &Path, palette: &Palette) -> Result<SyncReport> {
    let mut maps = Vec::new();
    collect_maps(src, &mut maps)?;
    maps.sort();

    let mut report = SyncReport::default();
    for input in maps {
        let dest = output_path(src, out, &input)?;
        match convert_file(&input, &dest, palette) {
            Ok(_) => report.converted += 1,
            Err(e) => {
                error!(input = %input.display(), "{e}");
                report.failed.push(input);
            }
        }
    }
    Ok(report)
}

fn collect_maps(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("listing {}", dir.display()))?
            .path();
        if path.is_dir() {
            collect_maps(&path, out)?;
        } else if is_map(&path) {
            out.push(path);
        }
    }
    Ok(())
}

const MAP_SUFFIX: &str = ".map.png";

/// Maps are named `*.map.png`; other images in the tree are sprites.
fn is_map(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.len() > MAP_SUFFIX.len() && name.ends_with(MAP_SUFFIX))
}

/// `<out>/<relative path of input under src>`, `x.map.png` becoming `x.map.json`.
fn output_path(src: &Path, out: &Path, input: &Path) -> Result<PathBuf> {
    let rel = input
        .strip_prefix(src)
        .with_context(|| format!("{} is outside {}", input.display(), src.display()))?;
    Ok(out.join(rel).with_extension("json"))
}

fn read_json<T: for<'de> serde::Deserialize<'de>>(path: &Path) -> Result<T> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
