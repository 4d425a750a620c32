use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{FillColor, ResampleFilter};

/// Standard iOS splash canvas side in pixels.
pub const SPLASH_CANVAS_SIZE: u32 = 2732;
/// Linear scale applied to the splash artwork before centring.
pub const SPLASH_SCALE: f64 = 0.6;
/// Largest RGBA8 buffer any transformation will allocate (a 16384 x 16384 canvas).
pub const MAX_IMAGE_BYTES: u64 = 16384 * 16384 * 4;

/// Reject a `width` x `height` RGBA8 buffer that would exceed `MAX_IMAGE_BYTES`.
pub fn ensure_buffer_fits(arg: &'static str, width: u32, height: u32) -> Result<()> {
    let bytes = (width as u64)
        .checked_mul(height as u64)
        .and_then(|px| px.checked_mul(4));
    match bytes {
        Some(b) if b <= MAX_IMAGE_BYTES => Ok(()),
        _ => Err(Error::invalid(arg, format!("{}x{}", width, height))),
    }
}

/// Parameters for the circular icon crop
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleCropParams {
    /// If true, edge pixels get fractional alpha from supersampled coverage
    pub antialias: bool,
}

/// Parameters for the splash rescale; defaults are the app's fixed constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashParams {
    /// Side of the square output canvas in pixels
    pub canvas_size: u32,
    /// Factor applied to both source dimensions (each truncated independently)
    pub scale: f64,
    pub background: FillColor,
    pub filter: ResampleFilter,
}

impl Default for SplashParams {
    fn default() -> Self {
        Self {
            canvas_size: SPLASH_CANVAS_SIZE,
            scale: SPLASH_SCALE,
            background: FillColor::IVORY,
            filter: ResampleFilter::Lanczos3,
        }
    }
}

impl SplashParams {
    pub fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 {
            return Err(Error::invalid("canvas_size", self.canvas_size));
        }
        ensure_buffer_fits("canvas_size", self.canvas_size, self.canvas_size)?;
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::invalid("scale", self.scale));
        }
        Ok(())
    }
}
