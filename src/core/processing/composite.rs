use image::RgbaImage;
use image::imageops::replace;
use tracing::{debug, warn};

use crate::types::FillColor;

/// Allocate a `width` x `height` RGBA canvas filled with `color`.
pub fn new_canvas(width: u32, height: u32, color: FillColor) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color.to_rgba())
}

/// Top-left offset that centres a `width` x `height` image on a square
/// canvas, using floor division. Negative when the image is larger.
pub fn centered_offset(canvas_size: u32, width: u32, height: u32) -> (i64, i64) {
    let canvas = canvas_size as i64;
    let x = (canvas - width as i64).div_euclid(2);
    let y = (canvas - height as i64).div_euclid(2);
    (x, y)
}

/// Blend one channel: `dst + (src - dst) * mask / 255`, rounded.
#[inline]
fn blend_channel(dst: u8, src: u8, mask: u8) -> u8 {
    let m = mask as u32;
    ((dst as u32 * (255 - m) + src as u32 * m + 127) / 255) as u8
}

/// Paste `src` onto `dst` with its top-left corner at (`x`, `y`).
///
/// With `use_alpha`, every channel (alpha included) is blended using the
/// source alpha as the mask; otherwise the region is overwritten with
/// `imageops::replace`. Parts of `src` falling outside `dst` are clipped.
pub fn paste(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64, use_alpha: bool) {
    let (dst_w, dst_h) = (dst.width() as i64, dst.height() as i64);
    let (src_w, src_h) = (src.width() as i64, src.height() as i64);

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + src_w).min(dst_w);
    let y1 = (y + src_h).min(dst_h);
    if x0 >= x1 || y0 >= y1 {
        debug!("Paste at ({}, {}) does not overlap the canvas", x, y);
        return;
    }
    if x0 != x || y0 != y || x1 != x + src_w || y1 != y + src_h {
        warn!(
            "Pasted image {}x{} at ({}, {}) is clipped by canvas {}x{}",
            src_w, src_h, x, y, dst_w, dst_h
        );
    }

    if !use_alpha {
        replace(dst, src, x, y);
        return;
    }

    let cols = (x1 - x0) as usize;
    let dst_stride = dst_w as usize * 4;
    let src_stride = src_w as usize * 4;
    let dst_buf: &mut [u8] = dst;
    let src_buf: &[u8] = src;

    // Blend per row over the clipped overlap
    for row in y0..y1 {
        let src_offset = (row - y) as usize * src_stride + (x0 - x) as usize * 4;
        let dst_offset = row as usize * dst_stride + x0 as usize * 4;
        let src_slice = &src_buf[src_offset..src_offset + cols * 4];
        let dst_slice = &mut dst_buf[dst_offset..dst_offset + cols * 4];

        for (d, s) in dst_slice.chunks_exact_mut(4).zip(src_slice.chunks_exact(4)) {
            let mask = s[3];
            for c in 0..4 {
                d[c] = blend_channel(d[c], s[c], mask);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn offsets_use_floor_division() {
        assert_eq!(centered_offset(2732, 600, 360), (1066, 1186));
        assert_eq!(centered_offset(10, 3, 4), (3, 3));
        assert_eq!(centered_offset(10, 13, 10), (-2, 0));
        assert_eq!(centered_offset(10, 15, 10), (-3, 0));
    }

    #[test]
    fn canvas_is_filled() {
        let c = new_canvas(5, 3, FillColor::IVORY);
        assert_eq!(c.dimensions(), (5, 3));
        assert!(c.pixels().all(|p| p.0 == [255, 245, 240, 255]));
    }

    #[test]
    fn opaque_paste_overwrites_region() {
        let mut dst = new_canvas(6, 6, FillColor::IVORY);
        let src = RgbaImage::from_pixel(2, 3, Rgba([1, 2, 3, 0]));
        paste(&mut dst, &src, 2, 1, false);

        for (x, y, px) in dst.enumerate_pixels() {
            let inside = (2..4).contains(&x) && (1..4).contains(&y);
            let expected = if inside { [1, 2, 3, 0] } else { [255, 245, 240, 255] };
            assert_eq!(px.0, expected, "pixel ({x},{y})");
        }
    }

    #[test]
    fn alpha_paste_blends_every_channel() {
        let mut dst = new_canvas(3, 1, FillColor::rgb(200, 100, 0));
        let mut src = RgbaImage::new(3, 1);
        src.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        src.put_pixel(1, 0, Rgba([10, 20, 30, 255]));
        src.put_pixel(2, 0, Rgba([0, 200, 255, 128]));
        paste(&mut dst, &src, 0, 0, true);

        assert_eq!(dst.get_pixel(0, 0).0, [200, 100, 0, 255]);
        assert_eq!(dst.get_pixel(1, 0).0, [10, 20, 30, 255]);
        // (dst * 127 + src * 128) / 255, rounded
        assert_eq!(dst.get_pixel(2, 0).0, [100, 150, 128, 191]);
    }

    #[test]
    fn paste_clips_negative_and_overflowing_offsets() {
        let mut dst = new_canvas(4, 4, FillColor::TRANSPARENT);
        let src = RgbaImage::from_fn(6, 6, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        paste(&mut dst, &src, -1, -2, false);

        assert_eq!(dst.get_pixel(0, 0).0, [1, 2, 0, 255]);
        assert_eq!(dst.get_pixel(3, 3).0, [4, 5, 0, 255]);

        let mut blended = new_canvas(4, 4, FillColor::TRANSPARENT);
        paste(&mut blended, &src, -1, -2, true);
        assert_eq!(blended, dst);

        let mut untouched = new_canvas(4, 4, FillColor::TRANSPARENT);
        paste(&mut untouched, &src, 10, 0, false);
        assert!(untouched.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }
}
