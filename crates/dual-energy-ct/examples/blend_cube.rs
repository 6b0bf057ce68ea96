//! Example: blend a synthetic low/high kV pair and convert it to rED.
//!
//! Builds two `i16` HU ramps of the requested extent (the high-kV cube runs
//! in the opposite direction), picks the blend coefficient from a preset or
//! `--alpha`, optionally layers an external alpha table on top of the bundled
//! one, and reports per-cube statistics as JSON.
//!
//! Run from the workspace root:
//!   cargo run -p dual-energy-ct --example blend_cube -- --help
//!   cargo run -p dual-energy-ct --example blend_cube -- --extent 64,64,32 --preset "Mixed 0.6"

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use dual_energy_ct::{
    AlphaChoice, DerivedKind, DualEnergyTool, DynImage, LoadMode, load_status_code,
};
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Alpha-blend a synthetic dual-energy pair and convert it to rED")]
struct Args {
    /// Comma-separated extent, 1 to 4 axes (e.g. 64,64,32)
    #[arg(long, default_value = "32,32,16", value_delimiter = ',')]
    extent: Vec<usize>,

    /// Preset label from the alpha table
    #[arg(long, default_value = "Mixed 0.6")]
    preset: String,

    /// Custom blend coefficient; overrides --preset
    #[arg(long)]
    alpha: Option<f64>,

    /// External alpha table XML to load before resolving the preset
    #[arg(long)]
    external: Option<PathBuf>,

    /// Replace the bundled table with the external one instead of appending
    #[arg(long)]
    overwrite: bool,

    /// Volume name used to derive the output names
    #[arg(long, default_value = "phantom")]
    name: String,

    /// Output JSON path (default: print to stdout)
    #[arg(long)]
    out: Option<PathBuf>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct CubeStats {
    name: String,
    pixel_type: String,
    extent: Vec<usize>,
    min: f64,
    max: f64,
    mean: f64,
}

#[derive(Serialize)]
struct Summary {
    alpha: f64,
    alpha_source: String,
    presets: Vec<PresetDto>,
    low: CubeStats,
    high: CubeStats,
    hu: CubeStats,
    red: CubeStats,
    /// Wall-clock time for blend plus conversion, in milliseconds.
    elapsed_ms: f64,
}

#[derive(Serialize)]
struct PresetDto {
    label: String,
    alpha: f64,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// HU ramp from -1000 upwards, one step per voxel, wrapping at 3000.
fn ramp(extent: &[usize], reversed: bool) -> Result<DynImage> {
    let Some(len) = extent.iter().try_fold(1usize, |acc, &e| acc.checked_mul(e)) else {
        bail!("extent {extent:?} overflows the addressable sample count");
    };
    let data: Vec<i16> = (0..len)
        .map(|i| {
            let k = if reversed { len - 1 - i } else { i };
            (k % 4000) as i16 - 1000
        })
        .collect();
    DynImage::from_shape(extent, data).context("building synthetic cube")
}

fn stats(name: String, image: &DynImage) -> CubeStats {
    let values = image.to_f64_vec();
    let (min, max, sum) = values.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0),
        |(lo, hi, sum), &v| (lo.min(v), hi.max(v), sum + v),
    );
    let mean = if values.is_empty() {
        0.0
    } else {
        sum / values.len() as f64
    };
    CubeStats {
        name,
        pixel_type: image.pixel_type().to_string(),
        extent: image.extent().to_vec(),
        min,
        max,
        mean,
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut tool = DualEnergyTool::new();

    if let Some(path) = &args.external {
        let mode = if args.overwrite {
            LoadMode::Overwrite
        } else {
            LoadMode::Append
        };
        let result = tool.load_external(path, mode);
        println!(
            "external table {} ({mode:?}): status {}",
            path.display(),
            load_status_code(&result)
        );
        result.with_context(|| format!("loading {}", path.display()))?;
    }

    let (choice, alpha_source) = match args.alpha {
        Some(alpha) => (AlphaChoice::Custom(alpha), "custom".to_string()),
        None => (AlphaChoice::Preset(args.preset.clone()), args.preset.clone()),
    };
    let Some(alpha) = tool.resolve(&choice) else {
        bail!(
            "unknown preset {:?}; available: {}",
            args.preset,
            tool.mode_labels().join(", ")
        );
    };

    let low = ramp(&args.extent, false)?;
    let high = ramp(&args.extent, true)?;
    println!(
        "blending {} cubes of extent {:?} with alpha={alpha}",
        low.pixel_type(),
        low.extent()
    );

    let t0 = Instant::now();
    let hu = tool
        .alpha_blend(&high, &low, alpha)
        .context("blending cubes")?;
    let red = tool.convert_to_relative_density(&hu);
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    let hu_name = DerivedKind::HuCube.name_for(&args.name);
    let red_name = DerivedKind::RedCube.name_for(&hu_name);

    let summary = Summary {
        alpha,
        alpha_source,
        presets: tool
            .entries()
            .map(|(label, alpha)| PresetDto {
                label: label.to_string(),
                alpha,
            })
            .collect(),
        low: stats(format!("{} low", args.name), &low),
        high: stats(format!("{} high", args.name), &high),
        hu: stats(hu_name, &hu),
        red: stats(red_name, &red),
        elapsed_ms,
    };

    let json = serde_json::to_string_pretty(&summary).context("serializing summary")?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            println!("wrote {}  ({elapsed_ms:.2} ms)", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
