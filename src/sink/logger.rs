use tracing::info;

use super::LogEntry;

/// Emits entries through `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }

    pub fn emit(&self, entry: &LogEntry) {
        let direction = entry.direction();
        info!(
            direction = direction.as_str(),
            "{}\n{}",
            direction.headline(),
            entry.fields_text().trim_end()
        );
    }
}
