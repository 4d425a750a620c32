//! `crop-circle`: crop `public/logo-icon.png` to its inscribed circle,
//! overwriting it in place.

use clap::Parser;

use ivory_assets::cli::{CropCircleArgs, run_crop_circle};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CropCircleArgs::parse();
    run_crop_circle(args)?;
    Ok(())
}
