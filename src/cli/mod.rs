//! Command Line Interface (CLI) layer shared by the `crop-circle` and
//! `scale-splash` binaries.
//!
//! Each binary works on the app's fixed asset paths with the default
//! parameters; the only option is `--log`. Argument parsing lives in `args`
//! and the orchestration and stdout confirmations in `runner`.
//!
//! If you are embedding ivory-assets into another application, prefer the
//! `ivory_assets::api` functions, which take paths and parameters.
pub mod args;
pub mod runner;

pub use args::{CropCircleArgs, ScaleSplashArgs};
pub use runner::{run_crop_circle, run_scale_splash};
