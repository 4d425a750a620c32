use image::{DynamicImage, RgbaImage};
use tracing::info;

use crate::core::params::CircleCropParams;
use crate::core::processing::composite::{new_canvas, paste};
use crate::core::processing::mask::ellipse_mask;
use crate::error::Result;
use crate::types::FillColor;

/// Crop `source` to the ellipse inscribed in its bounds.
///
/// The output has the source dimensions and colour channels; its alpha
/// channel is replaced wholesale by the ellipse mask, so any alpha the
/// source carried is discarded.
pub fn crop_to_circle(source: &DynamicImage, params: &CircleCropParams) -> Result<RgbaImage> {
    let rgba = source.to_rgba8();
    let (width, height) = rgba.dimensions();
    info!("Cropping {}x{} image to inscribed ellipse", width, height);

    let mask = ellipse_mask(width, height, params.antialias)?;

    let mut output = new_canvas(width, height, FillColor::TRANSPARENT);
    paste(&mut output, &rgba, 0, 0, false);
    for (px, m) in output.pixels_mut().zip(mask.pixels()) {
        px.0[3] = m.0[0];
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 200])
        })
    }

    #[test]
    fn keeps_dimensions() {
        for (w, h) in [(1, 1), (512, 512), (300, 120), (7, 90)] {
            let out = crop_to_circle(
                &DynamicImage::ImageRgba8(gradient(w, h)),
                &CircleCropParams::default(),
            )
            .unwrap();
            assert_eq!(out.dimensions(), (w, h));
        }
    }

    #[test]
    fn opaque_square_becomes_disc() {
        let src = RgbImage::from_pixel(512, 512, Rgb([10, 20, 30]));
        let out =
            crop_to_circle(&DynamicImage::ImageRgb8(src), &CircleCropParams::default()).unwrap();

        for (x, y, px) in out.enumerate_pixels() {
            let dx = x as f64 - 256.0;
            let dy = y as f64 - 256.0;
            let d = (dx * dx + dy * dy).sqrt();
            if d <= 254.5 {
                assert_eq!(px.0[3], 255, "inside pixel ({x},{y})");
            } else if d >= 257.5 {
                assert_eq!(px.0[3], 0, "outside pixel ({x},{y})");
            }
        }
        assert_eq!(out.get_pixel(0, 0).0[3], 0);
        assert_eq!(out.get_pixel(256, 256).0, [10, 20, 30, 255]);
    }

    #[test]
    fn preserves_colour_and_replaces_source_alpha() {
        let src = gradient(120, 80);
        let out = crop_to_circle(
            &DynamicImage::ImageRgba8(src.clone()),
            &CircleCropParams::default(),
        )
        .unwrap();
        for (x, y, px) in out.enumerate_pixels() {
            let s = src.get_pixel(x, y);
            assert_eq!(&px.0[..3], &s.0[..3]);
            assert!(px.0[3] == 0 || px.0[3] == 255);
        }
        assert_eq!(out.get_pixel(60, 40).0[3], 255);
    }

    #[test]
    fn cropping_twice_is_identical() {
        let params = CircleCropParams::default();
        let once = crop_to_circle(&DynamicImage::ImageRgba8(gradient(97, 64)), &params).unwrap();
        let twice = crop_to_circle(&DynamicImage::ImageRgba8(once.clone()), &params).unwrap();
        assert_eq!(once, twice);
    }
}
