// splashmark/src/core/mod.rs
pub mod processor;

use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub use processor::ImageProcessor;

/// Largest accepted background blur radius. The Gaussian kernel grows with
/// the radius, so this keeps a typo from allocating a huge kernel.
pub const MAX_BG_BLUR: f32 = 250.0;

/// Rejects blur radii that are negative, not finite or above `MAX_BG_BLUR`.
pub fn check_bg_blur(bg_blur: f32) -> Result<()> {
    if !bg_blur.is_finite() || !(0.0..=MAX_BG_BLUR).contains(&bg_blur) {
        return Err(SplashmarkError::InvalidParameter(format!(
            "Background blur must be between 0 and {}, got {}",
            MAX_BG_BLUR, bg_blur
        )));
    }
    Ok(())
}

/// Orientation of the target canvas, using the vocabulary of the Unsplash API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width > height {
            Orientation::Landscape
        } else if width < height {
            Orientation::Portrait
        } else {
            Orientation::Squarish
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Squarish => "squarish",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Target canvas width in pixels.
    pub width: u32,
    /// Target canvas height in pixels.
    pub height: u32,
    pub logo_path: PathBuf,
    pub output_dir: PathBuf,
    pub access_key: String,
    pub api_base_url: String,
    pub optimize_png: bool,
    /// Ask Unsplash for photos matching the target orientation.
    pub match_orientation: bool,
    /// Upper bound on filename candidates tried by the writer. `None` scans
    /// until a free name is found.
    pub max_name_probes: Option<u64>,
    /// Largest decoded image accepted from a download.
    pub max_dimensions: (u32, u32),
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub requested: usize,
    pub saved: Vec<String>,
    /// 1-based image index and the error that stopped it.
    pub failures: Vec<(usize, String)>,
}

impl BatchReport {
    pub fn processed_count(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requested == 0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 2560,
            height: 1600,
            logo_path: PathBuf::from("./logos/white.png"),
            output_dir: PathBuf::from("./output/"),
            access_key: String::new(),
            api_base_url: "https://api.unsplash.com".to_string(),
            optimize_png: true,
            match_orientation: false,
            max_name_probes: None,
            max_dimensions: (100_000, 100_000),
            log_file: Some(PathBuf::from("logfile.log")),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default = Self::default();

        Ok(Self {
            width: parse_env("SPLASHMARK_WIDTH")?.unwrap_or(default.width),
            height: parse_env("SPLASHMARK_HEIGHT")?.unwrap_or(default.height),
            logo_path: std::env::var("SPLASHMARK_LOGO")
                .map(PathBuf::from)
                .unwrap_or(default.logo_path),
            output_dir: std::env::var("SPLASHMARK_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.output_dir),
            access_key: std::env::var("UNSPLASH_ACCESS_KEY").unwrap_or(default.access_key),
            api_base_url: std::env::var("UNSPLASH_API_URL").unwrap_or(default.api_base_url),
            optimize_png: parse_env("SPLASHMARK_OPTIMIZE_PNG")?.unwrap_or(default.optimize_png),
            match_orientation: parse_env("SPLASHMARK_MATCH_ORIENTATION")?
                .unwrap_or(default.match_orientation),
            max_name_probes: parse_env("SPLASHMARK_MAX_NAME_PROBES")?.or(default.max_name_probes),
            max_dimensions: default.max_dimensions,
            log_file: match std::env::var("SPLASHMARK_LOG_FILE") {
                Ok(path) if path.is_empty() => None,
                Ok(path) => Some(PathBuf::from(path)),
                Err(_) => default.log_file,
            },
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SplashmarkError::InvalidParameter(
                "Target width and height must both be non-zero".to_string(),
            ));
        }

        if self.width > 100_000 || self.height > 100_000 {
            return Err(SplashmarkError::InvalidParameter(
                "Dimensions too large (max 100,000 pixels)".to_string(),
            ));
        }

        if self.max_name_probes == Some(0) {
            return Err(SplashmarkError::InvalidParameter(
                "max_name_probes must allow at least one candidate".to_string(),
            ));
        }

        Ok(())
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_dimensions(self.width, self.height)
    }
}

fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse::<T>().map(Some).map_err(|_| {
            SplashmarkError::Config(format!("{} has an invalid value: '{}'", name, value))
        }),
        Err(_) => Ok(None),
    }
}

#[derive(Error, Debug)]
pub enum SplashmarkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),

    #[error("Memory limit exceeded: {0}")]
    MemoryLimitExceeded(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No free file name for '{base}' after {attempts} candidates")]
    NameSpaceExhausted { base: String, attempts: u64 },
}

pub type Result<T> = std::result::Result<T, SplashmarkError>;
