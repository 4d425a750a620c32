use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "crop-circle",
    version,
    about = "Crop public/logo-icon.png to its inscribed circle, in place"
)]
pub struct CropCircleArgs {
    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "scale-splash",
    version,
    about = "Rescale assets/splash.png onto a 2732x2732 ivory canvas"
)]
pub struct ScaleSplashArgs {
    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
