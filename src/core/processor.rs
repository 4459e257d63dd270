// splashmark/src/core/processor.rs
use super::{Config, Result};
use crate::processors::{Compositor, Loader, Writer};
use image::RgbaImage;

/// Runs one downloaded photo through decode, composite and save.
pub struct ImageProcessor {
    loader: Loader,
    compositor: Compositor,
    writer: Writer,
}

impl ImageProcessor {
    pub fn new(loader: Loader, compositor: Compositor, writer: Writer) -> Self {
        Self {
            loader,
            compositor,
            writer,
        }
    }

    /// Builds every stage from `config`. Fails when the logo cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let (max_w, max_h) = config.max_dimensions;
        let loader = Loader::new().with_max_dimensions(max_w, max_h);
        let compositor = Compositor::from_config(config)?;
        let writer = Writer::from_config(config);

        Ok(Self::new(loader, compositor, writer))
    }

    pub fn writer(&self) -> &Writer {
        &self.writer
    }

    pub fn render(&self, bytes: &[u8], bg_blur: f32) -> Result<RgbaImage> {
        let image = self.loader.load_from_bytes(bytes)?;
        self.compositor.composite(&image, bg_blur)
    }

    /// Renders `bytes` and stores the result, returning the saved file name.
    pub fn process(
        &self,
        bytes: &[u8],
        base_name: &str,
        index: u64,
        bg_blur: f32,
    ) -> Result<String> {
        let canvas = self.render(bytes, bg_blur)?;
        self.writer.save(&canvas, base_name, index)
    }
}
