//! I/O layer: decoding source images from disk and writing PNG outputs.
pub mod reader;
pub use reader::load_image;

pub mod writers;
pub use writers::png::write_rgba_png;
