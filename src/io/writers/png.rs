use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use tracing::info;

use crate::error::Result;

/// Write `image` as an RGBA8 PNG, truncating any existing file at `output`.
pub fn write_rgba_png(output: &Path, image: &RgbaImage) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = PngEncoder::new(&mut writer);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    writer.flush()?;
    info!("Wrote {}x{} PNG to {:?}", image.width(), image.height(), output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, Rgba};

    #[test]
    fn writes_rgba_png_regardless_of_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        let img = RgbaImage::from_pixel(4, 3, Rgba([9, 8, 7, 6]));
        write_rgba_png(&path, &img).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let back = image::load_from_memory(&bytes).unwrap();
        assert_eq!(back.color(), ColorType::Rgba8);
        assert_eq!(back.to_rgba8(), img);
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.png");
        let img = RgbaImage::new(1, 1);
        assert!(write_rgba_png(&path, &img).is_err());
    }
}
