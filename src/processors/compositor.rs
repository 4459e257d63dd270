// splashmark/src/processors/compositor.rs
use super::{Loader, Resizer};
use crate::core::{check_bg_blur, Config, Result};
use image::{imageops, DynamicImage, RgbaImage};
use imageproc::filter::gaussian_blur_f32;

/// Turns a downloaded photo into the final canvas: aspect-fit crop, exact
/// resize, optional background blur, then the centered logo.
pub struct Compositor {
    width: u32,
    height: u32,
    resizer: Resizer,
    logo: RgbaImage,
}

impl Compositor {
    pub fn new(width: u32, height: u32, logo: RgbaImage) -> Self {
        Self {
            width,
            height,
            resizer: Resizer::new(),
            logo,
        }
    }

    /// Builds a compositor for the configured target size. The logo is read
    /// once here and reused for every image of the run.
    pub fn from_config(config: &Config) -> Result<Self> {
        let logo = Loader::new().load_logo(&config.logo_path)?;
        Ok(Self::new(config.width, config.height, logo))
    }

    /// Top-left corner of the logo on the canvas. Each half is floored on its
    /// own, so odd sizes shift the logo up and left by at most one pixel.
    pub fn logo_position(&self) -> (i64, i64) {
        let x = (self.width / 2) as i64 - (self.logo.width() / 2) as i64;
        let y = (self.height / 2) as i64 - (self.logo.height() / 2) as i64;
        (x, y)
    }

    pub fn composite(&self, image: &DynamicImage, bg_blur: f32) -> Result<RgbaImage> {
        check_bg_blur(bg_blur)?;

        let mut canvas = self.resizer.fit(image, self.width, self.height).to_rgba8();

        if bg_blur > 0.0 {
            log::debug!("Applying gaussian blur, sigma {}", bg_blur);
            canvas = gaussian_blur_f32(&canvas, bg_blur);
        }

        let (x, y) = self.logo_position();
        log::debug!(
            "Overlaying {}x{} logo at ({}, {})",
            self.logo.width(),
            self.logo.height(),
            x,
            y
        );
        imageops::overlay(&mut canvas, &self.logo, x, y);

        Ok(canvas)
    }
}
