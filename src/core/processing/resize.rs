use fast_image_resize::{PixelType, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

/// Multiply both dimensions by `scale`, truncating each independently.
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> (u32, u32) {
    let new_width = (width as f64 * scale).floor() as u32;
    let new_height = (height as f64 * scale).floor() as u32;
    if new_width == 0 || new_height == 0 {
        warn!(
            "Scaling {}x{} by {} leaves an empty image ({}x{})",
            width, height, scale, new_width, new_height
        );
    }
    (new_width, new_height)
}

/// Resize an RGBA8 image to `target_width` x `target_height`.
///
/// Convolution filters run on alpha-premultiplied pixels so transparent
/// pixels do not bleed their colour into neighbours.
pub fn resize_rgba_image(
    src: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: ResampleFilter,
) -> Result<RgbaImage> {
    let (width, height) = src.dimensions();
    if (width, height) == (target_width, target_height) {
        return Ok(src.clone());
    }
    if width == 0 || height == 0 || target_width == 0 || target_height == 0 {
        return Ok(RgbaImage::new(target_width, target_height));
    }

    info!(
        "Original size: {}x{}, New size: {}x{} ({})",
        width, height, target_width, target_height, filter
    );

    let resize_options = ResizeOptions::new()
        .resize_alg(filter.to_resize_alg())
        .use_alpha(true);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(width, height, src.as_raw().clone(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec()).ok_or_else(|| {
        Error::invalid(
            "resize_output",
            format!("{}x{}", target_width, target_height),
        )
    })
}
