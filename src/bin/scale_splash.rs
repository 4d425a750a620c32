//! `scale-splash`: rescale `assets/splash.png` onto the 2732x2732 ivory
//! canvas, writing `assets/splash-scaled.png` and overwriting the source.

use clap::Parser;

use ivory_assets::cli::{ScaleSplashArgs, run_scale_splash};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ScaleSplashArgs::parse();
    run_scale_splash(args)?;
    Ok(())
}
