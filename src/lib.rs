mod cli;
mod core;
mod processors;
mod source;
mod utils;

pub use cli::Cli;
pub use crate::core::{
    check_bg_blur, BatchReport, Config, ImageProcessor, Orientation, Result, SplashmarkError,
    MAX_BG_BLUR,
};
pub use processors::{BatchProcessor, Compositor, CropBox, Loader, Resizer, Writer};
pub use source::{HttpTransport, Transport, UnsplashSource};
pub use utils::{base_name_for, format_file_size, init_logging, sanitize_filename};

pub mod prelude {
    pub use crate::{
        BatchProcessor, Compositor, Config, HttpTransport, ImageProcessor, Loader, Resizer,
        Transport, UnsplashSource, Writer,
    };
}

// Re-export commonly used types
pub use image::{DynamicImage, RgbaImage};
