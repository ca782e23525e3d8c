use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use super::LogEntry;
use crate::error::LoggingError;

pub const DEFAULT_LOG_PATH: &str = "Logs/RequestResponseLog.txt";

/// Appends timestamped blocks to a single file.
///
/// The parent directory is created on first use. The file is never truncated
/// or rotated. Each block goes out through one `write_all` on an append-mode
/// handle; concurrent appends are not serialized, so very large blocks that
/// the operating system splits across several writes may interleave.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn append(&self, entry: &LogEntry) -> Result<(), LoggingError> {
        let block = entry.to_file_block();
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_block(&path, block.as_bytes()))
            .await
            .unwrap_or_else(|join_err| Err(io::Error::other(join_err)))
            .map_err(|source| LoggingError::Sink {
                path: self.path.clone(),
                source,
            })
    }
}

fn write_block(path: &Path, block: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(block)
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}
