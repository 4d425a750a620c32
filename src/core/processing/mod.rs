//! Image transformations and the primitives they are built from.
pub mod circle;
pub mod composite;
pub mod mask;
pub mod resize;
pub mod splash;
