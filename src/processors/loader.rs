// splashmark/src/processors/loader.rs
use crate::core::{Result, SplashmarkError};
use image::{DynamicImage, GenericImageView, ImageReader, RgbaImage};
use std::io::Cursor;
use std::path::Path;

#[derive(Clone)]
pub struct Loader {
    max_dimensions: Option<(u32, u32)>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            max_dimensions: Some((100_000, 100_000)),
        }
    }

    pub fn with_max_dimensions(mut self, width: u32, height: u32) -> Self {
        self.max_dimensions = Some((width, height));
        self
    }

    /// Decodes a downloaded photo, sniffing the format from its bytes.
    pub fn load_from_bytes(&self, data: &[u8]) -> Result<DynamicImage> {
        if data.is_empty() {
            return Err(SplashmarkError::InvalidParameter(
                "Downloaded image is empty".to_string(),
            ));
        }

        let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
        log::debug!("Decoding {} bytes as {:?}", data.len(), reader.format());

        let image = reader.decode().map_err(|e| {
            SplashmarkError::ProcessingError(format!("Failed to decode image from bytes: {}", e))
        })?;

        self.check_dimensions(&image)?;

        let (width, height) = image.dimensions();
        log::info!(
            "Loaded image: {}x{} pixels, format: {:?}",
            width,
            height,
            image.color()
        );

        Ok(image)
    }

    /// Loads the logo asset and converts it to RGBA so its alpha channel can
    /// drive blending.
    pub fn load_logo(&self, path: &Path) -> Result<RgbaImage> {
        log::debug!("Loading logo from: {}", path.display());

        self.validate_path(path)?;

        let logo = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| {
                SplashmarkError::ProcessingError(format!(
                    "Failed to decode logo {}: {}",
                    path.display(),
                    e
                ))
            })?;

        let logo = logo.to_rgba8();
        log::info!("Loaded logo: {}x{} pixels", logo.width(), logo.height());

        Ok(logo)
    }

    fn check_dimensions(&self, image: &DynamicImage) -> Result<()> {
        if let Some((max_w, max_h)) = self.max_dimensions {
            let (width, height) = image.dimensions();
            if width > max_w || height > max_h {
                return Err(SplashmarkError::MemoryLimitExceeded(format!(
                    "Image dimensions {}x{} exceed maximum {}x{}",
                    width, height, max_w, max_h
                )));
            }
        }

        Ok(())
    }

    fn validate_path(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(SplashmarkError::InvalidParameter(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let metadata = path.metadata()?;
        if metadata.len() == 0 {
            return Err(SplashmarkError::InvalidParameter(format!(
                "File is empty: {}",
                path.display()
            )));
        }

        Ok(())
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
