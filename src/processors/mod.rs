// splashmark/src/processors/mod.rs
mod batch;
mod compositor;
mod loader;
mod resizer;
mod writer;

pub use batch::BatchProcessor;
pub use compositor::Compositor;
pub use loader::Loader;
pub use resizer::{CropBox, Resizer};
pub use writer::Writer;
