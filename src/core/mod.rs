//! Core building blocks: parameter structs, ellipse masks, resize and
//! compositing primitives, and the two buffer-level transformations.
//! These are consumed by the high-level `api` module.
pub mod params;
pub mod processing;
