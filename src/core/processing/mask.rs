use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_ellipse_mut;
use tracing::debug;

use crate::core::params::ensure_buffer_fits;
use crate::error::{Error, Result};

/// Supersampling factor per axis when antialiasing the ellipse edge.
const AA_FACTOR: u32 = 4;

fn draw_inscribed_ellipse(mask: &mut GrayImage) -> Result<()> {
    let (width, height) = mask.dimensions();
    let cx = i32::try_from(width / 2).map_err(|_| Error::invalid("width", width))?;
    let cy = i32::try_from(height / 2).map_err(|_| Error::invalid("height", height))?;
    draw_filled_ellipse_mut(mask, (cx, cy), cx, cy, Luma([255u8]));
    Ok(())
}

/// Draw a filled ellipse inscribed in the full `width` x `height` rectangle
/// onto a zeroed single-channel mask.
///
/// The ellipse comes from imageproc's filled-ellipse primitive centred at
/// `(width/2, height/2)` with radii `(width/2, height/2)`, so pixels are
/// either 0 or 255. With `antialias`, the primitive is drawn at 4x and
/// box-filtered down, giving edge pixels their covered fraction.
pub fn ellipse_mask(width: u32, height: u32, antialias: bool) -> Result<GrayImage> {
    if width == 0 || height == 0 {
        return Ok(GrayImage::new(width, height));
    }
    debug!(
        "Drawing ellipse mask {}x{} (antialias={})",
        width, height, antialias
    );

    if !antialias {
        let mut mask = GrayImage::new(width, height);
        draw_inscribed_ellipse(&mut mask)?;
        return Ok(mask);
    }

    let big_width = width
        .checked_mul(AA_FACTOR)
        .ok_or_else(|| Error::invalid("width", width))?;
    let big_height = height
        .checked_mul(AA_FACTOR)
        .ok_or_else(|| Error::invalid("height", height))?;
    ensure_buffer_fits("size", big_width, big_height)?;

    let mut big = GrayImage::new(big_width, big_height);
    draw_inscribed_ellipse(&mut big)?;

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Box));
    let mut resizer = Resizer::new();
    let src_image = Image::from_vec_u8(big_width, big_height, big.into_raw(), PixelType::U8)?;
    let mut dst_image = Image::new(width, height, PixelType::U8);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    GrayImage::from_raw(width, height, dst_image.into_vec())
        .ok_or_else(|| Error::invalid("mask_output", format!("{}x{}", width, height)))
}
