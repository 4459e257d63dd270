// splashmark/src/processors/writer.rs
use crate::core::{Config, Result, SplashmarkError};
use crate::utils::format_file_size;
use image::{ImageFormat, RgbaImage};
use oxipng::{optimize_from_memory, Options};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Writes composited images as PNG files without ever replacing an existing
/// file in the output directory.
pub struct Writer {
    output_dir: PathBuf,
    optimize_png: bool,
    max_name_probes: Option<u64>,
}

impl Writer {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            optimize_png: true,
            max_name_probes: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.output_dir)
            .with_png_optimization(config.optimize_png)
            .with_max_name_probes(config.max_name_probes)
    }

    pub fn with_png_optimization(mut self, optimize: bool) -> Self {
        self.optimize_png = optimize;
        self
    }

    pub fn with_max_name_probes(mut self, max: Option<u64>) -> Self {
        self.max_name_probes = max;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Saves `image` as `{base_name}_{n}.png` and returns the file name.
    ///
    /// `n` is the smallest integer `>= start_index` whose file does not exist
    /// yet. The existence check and the write are not atomic, so two
    /// processes sharing an output directory can race.
    pub fn save(&self, image: &RgbaImage, base_name: &str, start_index: u64) -> Result<String> {
        std::fs::create_dir_all(&self.output_dir)?;

        let filename = self.next_free_name(base_name, start_index)?;
        let path = self.output_dir.join(&filename);

        let bytes = self.encode_png(image)?;
        std::fs::write(&path, &bytes)?;

        log::info!(
            "Saved image: {} ({})",
            path.display(),
            format_file_size(bytes.len() as u64)
        );

        Ok(filename)
    }

    fn next_free_name(&self, base_name: &str, start_index: u64) -> Result<String> {
        let exhausted = |attempts| SplashmarkError::NameSpaceExhausted {
            base: base_name.to_string(),
            attempts,
        };

        let mut counter = start_index;
        let mut attempts = 0u64;

        loop {
            if self.max_name_probes.is_some_and(|max| attempts >= max) {
                return Err(exhausted(attempts));
            }
            attempts += 1;

            let candidate = format!("{}_{}.png", base_name, counter);
            if !self.output_dir.join(&candidate).exists() {
                return Ok(candidate);
            }

            log::debug!("{} already exists, trying the next index", candidate);
            counter = counter.checked_add(1).ok_or_else(|| exhausted(attempts))?;
        }
    }

    fn encode_png(&self, image: &RgbaImage) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png)?;

        if !self.optimize_png {
            return Ok(buffer.into_inner());
        }

        optimize_from_memory(&buffer.into_inner(), &Options::default())
            .map_err(|e| SplashmarkError::ProcessingError(format!("PNG optimization failed: {}", e)))
    }
}
