use image::{DynamicImage, RgbaImage};
use serde::Serialize;
use tracing::{info, warn};

use crate::core::params::{SplashParams, ensure_buffer_fits};
use crate::core::processing::composite::{centered_offset, new_canvas, paste};
use crate::core::processing::resize::{resize_rgba_image, scaled_dimensions};
use crate::error::Result;

/// Geometry of a splash rescale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplashLayout {
    pub canvas_size: u32,
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub offset_x: i64,
    pub offset_y: i64,
}

impl SplashLayout {
    pub fn compute(width: u32, height: u32, params: &SplashParams) -> Self {
        let (scaled_width, scaled_height) = scaled_dimensions(width, height, params.scale);
        let (offset_x, offset_y) = centered_offset(params.canvas_size, scaled_width, scaled_height);
        Self {
            canvas_size: params.canvas_size,
            scaled_width,
            scaled_height,
            offset_x,
            offset_y,
        }
    }

    /// True when the scaled artwork fits inside the canvas.
    pub fn fits(&self) -> bool {
        self.offset_x >= 0 && self.offset_y >= 0
    }
}

/// Composited splash canvas and the layout used to build it.
#[derive(Debug, Clone)]
pub struct ScaledSplash {
    pub canvas: RgbaImage,
    pub layout: SplashLayout,
}

/// Scale `source` by `params.scale` and centre it on a square background
/// canvas. Sources with an alpha channel are blended through it; opaque
/// sources overwrite their region.
pub fn scale_splash(source: &DynamicImage, params: &SplashParams) -> Result<ScaledSplash> {
    params.validate()?;

    let (width, height) = (source.width(), source.height());
    let layout = SplashLayout::compute(width, height, params);
    ensure_buffer_fits("scale", layout.scaled_width, layout.scaled_height)?;
    info!(
        "Splash {}x{} -> {}x{} at ({}, {}) on {}x{} canvas",
        width,
        height,
        layout.scaled_width,
        layout.scaled_height,
        layout.offset_x,
        layout.offset_y,
        layout.canvas_size,
        layout.canvas_size
    );
    if !layout.fits() {
        warn!("Scaled splash is larger than the canvas; edges will be cropped");
    }

    let use_alpha = source.color().has_alpha();
    let mut scaled = resize_rgba_image(
        &source.to_rgba8(),
        layout.scaled_width,
        layout.scaled_height,
        params.filter,
    )?;
    if !use_alpha {
        // filter ringing must not leak into an opaque source's alpha
        for px in scaled.pixels_mut() {
            px.0[3] = 255;
        }
    }

    let mut canvas = new_canvas(params.canvas_size, params.canvas_size, params.background);
    paste(&mut canvas, &scaled, layout.offset_x, layout.offset_y, use_alpha);

    Ok(ScaledSplash { canvas, layout })
}
