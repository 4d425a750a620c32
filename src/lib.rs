#![doc = r#"
ivory-assets — asset preparation utilities for the Ivory app.

Two one-shot image transformations, each usable from its own binary
(`crop-circle`, `scale-splash`) or from this library:

- **Circle crop**: mask an icon to the ellipse inscribed in its bounds. Pixels
  outside get alpha 0, pixels inside alpha 255; colour channels are kept.
- **Splash rescale**: scale a splash image by a fixed factor (0.6) with a
  Lanczos filter and centre it on a 2732x2732 `#FFF5F0` canvas.

Both write RGBA PNG and, by default, overwrite their source file in place.

Crop an icon in place
---------------------
```rust,no_run
use std::path::Path;
use ivory_assets::{CircleCropParams, crop_circle_in_place};

fn main() -> ivory_assets::Result<()> {
    crop_circle_in_place(Path::new("public/logo-icon.png"), &CircleCropParams::default())
}
```

Rescale a splash
----------------
```rust,no_run
use std::path::Path;
use ivory_assets::{SplashParams, scale_splash_to_paths};

fn main() -> ivory_assets::Result<()> {
    let layout = scale_splash_to_paths(
        Path::new("assets/splash.png"),
        Path::new("assets/splash-scaled.png"),
        &SplashParams::default(),
    )?;
    println!("artwork {}x{} at ({}, {})",
        layout.scaled_width, layout.scaled_height, layout.offset_x, layout.offset_y);
    Ok(())
}
```

In-memory buffers
-----------------
```rust
use image::{DynamicImage, RgbImage, Rgb};
use ivory_assets::{FillColor, SplashParams, scale_splash};

let src = DynamicImage::ImageRgb8(RgbImage::from_pixel(1000, 600, Rgb([0, 0, 0])));
let splash = scale_splash(&src, &SplashParams::default()).unwrap();
assert_eq!(splash.canvas.dimensions(), (2732, 2732));
assert_eq!((splash.layout.offset_x, splash.layout.offset_y), (1066, 1186));
assert_eq!(splash.canvas.get_pixel(0, 0).0, FillColor::IVORY.0);
```

Useful modules
--------------
- [`api`] — path-based entry points.
- [`cli`] — argument parsing and runners behind the two binaries.
- [`core`] — parameters, masks, resize and compositing primitives.
- [`io`] — image loading and PNG writing.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::{CircleCropParams, SplashParams};
pub use crate::core::processing::circle::crop_to_circle;
pub use crate::core::processing::splash::{ScaledSplash, SplashLayout, scale_splash};
pub use error::{Error, Result};
pub use types::{FillColor, ResampleFilter};

pub use api::{
    DEFAULT_ICON_PATH, DEFAULT_SPLASH_PATH, DEFAULT_SPLASH_SCALED_PATH, crop_circle_in_place,
    crop_circle_to_path, scale_splash_to_paths,
};
