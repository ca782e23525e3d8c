pub mod entry;
pub mod file;
pub mod logger;

pub use entry::{Direction, LogEntry, NOT_PROVIDED};
pub use file::FileSink;
pub use logger::TracingSink;

use crate::error::LoggingError;

/// Destination for formatted log entries.
#[derive(Debug, Clone)]
pub enum LogSink {
    Logger(TracingSink),
    File(FileSink),
}

impl LogSink {
    pub async fn emit(&self, entry: &LogEntry) -> Result<(), LoggingError> {
        match self {
            LogSink::Logger(sink) => {
                sink.emit(entry);
                Ok(())
            }
            LogSink::File(sink) => sink.append(entry).await,
        }
    }
}

impl From<TracingSink> for LogSink {
    fn from(sink: TracingSink) -> Self {
        LogSink::Logger(sink)
    }
}

impl From<FileSink> for LogSink {
    fn from(sink: FileSink) -> Self {
        LogSink::File(sink)
    }
}
