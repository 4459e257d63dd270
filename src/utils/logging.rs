// splashmark/src/utils/logging.rs
use crate::core::{Result, SplashmarkError};
use env_logger::{Target, WriteStyle};
use log::LevelFilter;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Sends every log line to stderr and appends it to a file.
struct TeeWriter<W: Write> {
    file: W,
}

impl<W: Write> Write for TeeWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

/// Installs the global logger. Our own records start at info, dependencies
/// at warn; `RUST_LOG` overrides both.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), LevelFilter::Info)
        .parse_default_env();

    if let Some(path) = log_file {
        let file: File = OpenOptions::new().create(true).append(true).open(path)?;
        builder
            .write_style(WriteStyle::Never)
            .target(Target::Pipe(Box::new(TeeWriter { file })));
    }

    builder
        .try_init()
        .map_err(|e| SplashmarkError::Config(format!("Logger already initialized: {}", e)))
}
