// splashmark/src/processors/batch.rs
use crate::core::{check_bg_blur, BatchReport, Config, ImageProcessor, Result, SplashmarkError};
use crate::source::{Transport, UnsplashSource};
use crate::utils::base_name_for;
use indicatif::{ProgressBar, ProgressStyle};

/// Fetches a batch of photo URLs and processes them one after another. A
/// failing image is reported and skipped; it never stops the batch.
pub struct BatchProcessor<'a, T: Transport> {
    transport: &'a T,
    source: UnsplashSource<'a, T>,
    processor: ImageProcessor,
    show_progress: bool,
}

impl<'a, T: Transport> BatchProcessor<'a, T> {
    pub fn new(transport: &'a T, config: &Config) -> Result<Self> {
        let processor = ImageProcessor::from_config(config)?;
        let source = UnsplashSource::from_config(transport, config);

        log::debug!(
            "Target {}x{} ({}), writing to {}",
            config.width,
            config.height,
            config.orientation().as_str(),
            processor.writer().output_dir().display()
        );

        Ok(Self::with_parts(transport, source, processor))
    }

    pub fn with_parts(
        transport: &'a T,
        source: UnsplashSource<'a, T>,
        processor: ImageProcessor,
    ) -> Self {
        Self {
            transport,
            source,
            processor,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn run(&self, query: Option<&str>, total: u32, bg_blur: f32) -> Result<BatchReport> {
        if total == 0 {
            return Err(SplashmarkError::InvalidParameter(
                "At least one image must be requested".to_string(),
            ));
        }

        check_bg_blur(bg_blur)?;

        let urls = self.source.fetch(query, total)?;
        let mut report = BatchReport {
            requested: urls.len(),
            ..Default::default()
        };

        if urls.is_empty() {
            log::warn!("No images to process");
            return Ok(report);
        }

        let base_name = base_name_for(query);
        log::info!("Processing {} image(s) as '{}'", urls.len(), base_name);

        let pb = self.create_progress_bar(urls.len());

        for (i, url) in urls.iter().enumerate() {
            let index = i + 1;

            match self.process_single_image_in_batch(url, &base_name, index, bg_blur) {
                Ok(filename) => {
                    pb.suspend(|| println!("{} saved successfully.", filename));
                    report.saved.push(filename);
                }
                Err(e) => {
                    log::debug!("Image {} from {} failed: {:?}", index, url, e);
                    pb.suspend(|| println!("Failed to process image {}: {}", index, e));
                    report.failures.push((index, e.to_string()));
                }
            }

            pb.inc(1);
        }

        pb.finish_with_message(format!(
            "Saved {} of {} images",
            report.processed_count(),
            report.requested
        ));

        Ok(report)
    }

    fn process_single_image_in_batch(
        &self,
        url: &str,
        base_name: &str,
        index: usize,
        bg_blur: f32,
    ) -> Result<String> {
        let bytes = self.transport.get_bytes(url)?;
        self.processor.process(&bytes, base_name, index as u64, bg_blur)
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        match ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("#>-")),
            Err(e) => log::debug!("Falling back to the default progress style: {}", e),
        }
        pb
    }
}
