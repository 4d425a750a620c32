use std::io::Write;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::{
    DEFAULT_ICON_PATH, DEFAULT_SPLASH_PATH, DEFAULT_SPLASH_SCALED_PATH, crop_circle_in_place,
    scale_splash_to_paths,
};
use crate::core::params::{CircleCropParams, SplashParams};
use crate::error::Result;

use super::args::{CropCircleArgs, ScaleSplashArgs};

fn init_logging(enabled: bool) {
    if enabled {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Crop `icon` in place with the default parameters and report it on `out`.
pub fn crop_icon<W: Write>(icon: &Path, out: &mut W) -> Result<()> {
    crop_circle_in_place(icon, &CircleCropParams::default())?;
    writeln!(out, "Circular crop saved to {}", icon.display())?;
    Ok(())
}

/// Rescale `source` with the default parameters, writing `derived` and then
/// overwriting `source`, and report both writes on `out`.
pub fn rescale_splash<W: Write>(source: &Path, derived: &Path, out: &mut W) -> Result<()> {
    let params = SplashParams::default();
    let layout = scale_splash_to_paths(source, derived, &params)?;
    writeln!(
        out,
        "Created {}: {}x{} with design at {:.0}% scale",
        display_name(derived),
        layout.canvas_size,
        layout.canvas_size,
        params.scale * 100.0
    )?;
    writeln!(out, "Updated {}", display_name(source))?;
    Ok(())
}

pub fn run_crop_circle(args: CropCircleArgs) -> Result<()> {
    init_logging(args.log);
    info!("Starting circle crop: {}", DEFAULT_ICON_PATH);
    crop_icon(Path::new(DEFAULT_ICON_PATH), &mut std::io::stdout().lock())
}

pub fn run_scale_splash(args: ScaleSplashArgs) -> Result<()> {
    init_logging(args.log);
    info!(
        "Starting splash rescale: {} -> {}",
        DEFAULT_SPLASH_PATH, DEFAULT_SPLASH_SCALED_PATH
    );
    rescale_splash(
        Path::new(DEFAULT_SPLASH_PATH),
        Path::new(DEFAULT_SPLASH_SCALED_PATH),
        &mut std::io::stdout().lock(),
    )
}
