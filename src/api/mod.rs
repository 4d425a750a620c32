//! High-level, path-based entry points for the two asset utilities. Prefer
//! these over the low-level processing modules when scripting asset builds;
//! use `crop_to_circle` / `scale_splash` directly for in-memory buffers.
use std::path::Path;

use tracing::info;

use crate::core::params::{CircleCropParams, SplashParams};
use crate::core::processing::circle::crop_to_circle;
use crate::core::processing::splash::{SplashLayout, scale_splash};
use crate::error::Result;
use crate::io::{load_image, write_rgba_png};

/// Default icon path, read and overwritten by the circle crop.
pub const DEFAULT_ICON_PATH: &str = "public/logo-icon.png";
/// Default splash source, overwritten by the splash rescale.
pub const DEFAULT_SPLASH_PATH: &str = "assets/splash.png";
/// Default derived splash output.
pub const DEFAULT_SPLASH_SCALED_PATH: &str = "assets/splash-scaled.png";

/// Crop the image at `input` to a circle and write it to `output` as PNG.
pub fn crop_circle_to_path(input: &Path, output: &Path, params: &CircleCropParams) -> Result<()> {
    let source = load_image(input)?;
    let cropped = crop_to_circle(&source, params)?;
    write_rgba_png(output, &cropped)?;
    info!("Circular crop: {:?} -> {:?}", input, output);
    Ok(())
}

/// Crop the image at `path` to a circle, overwriting it. No backup is kept.
pub fn crop_circle_in_place(path: &Path, params: &CircleCropParams) -> Result<()> {
    crop_circle_to_path(path, path, params)
}

/// Rescale the splash at `input` onto a square canvas, write the result to
/// `derived_output`, then overwrite `input` with the same canvas.
pub fn scale_splash_to_paths(
    input: &Path,
    derived_output: &Path,
    params: &SplashParams,
) -> Result<SplashLayout> {
    let source = load_image(input)?;
    let splash = scale_splash(&source, params)?;

    write_rgba_png(derived_output, &splash.canvas)?;
    write_rgba_png(input, &splash.canvas)?;
    info!(
        "Splash rescale: {:?} -> {:?} (source overwritten)",
        input, derived_output
    );

    Ok(splash.layout)
}
