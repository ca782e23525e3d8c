use chrono::{DateTime, Local};
use std::fmt::Write as _;

pub const NOT_PROVIDED: &str = "Not Provided";

const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Request,
    Response,
}

impl Direction {
    pub fn tag(&self) -> &'static str {
        match self {
            Direction::Request => "[Request]",
            Direction::Response => "[Response]",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Direction::Request => "Incoming Request:",
            Direction::Response => "Outgoing Response:",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Request => "request",
            Direction::Response => "response",
        }
    }
}

/// One formatted record describing either side of an exchange.
///
/// Entries are built, handed to a [`LogSink`](super::LogSink) and dropped.
#[derive(Debug, Clone)]
pub struct LogEntry {
    timestamp: DateTime<Local>,
    direction: Direction,
    fields: Vec<(&'static str, String)>,
}

impl LogEntry {
    pub fn request(
        method: &str,
        path: &str,
        host: Option<&str>,
        content_type: Option<&str>,
        body: Option<String>,
    ) -> Self {
        let mut fields = vec![
            ("Method", method.to_string()),
            ("URL", path.to_string()),
            ("Host", or_not_provided(host)),
            ("Content-Type", or_not_provided(content_type)),
        ];
        if let Some(body) = body {
            fields.push(("Body", body));
        }

        Self {
            timestamp: Local::now(),
            direction: Direction::Request,
            fields,
        }
    }

    pub fn response(status: u16, content_type: Option<&str>, body: Option<String>) -> Self {
        let mut fields = vec![
            ("Status Code", status.to_string()),
            ("Content-Type", or_not_provided(content_type)),
        ];
        if let Some(body) = body {
            fields.push(("Body", body));
        }

        Self {
            timestamp: Local::now(),
            direction: Direction::Response,
            fields,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, value)| value.as_str())
    }

    /// `Label: value` lines, one per field.
    pub fn fields_text(&self) -> String {
        let mut text = String::new();
        for (label, value) in &self.fields {
            let _ = writeln!(text, "{}: {}", label, value);
        }
        text
    }

    /// Renders the block appended by the file sink, separator included.
    pub fn to_file_block(&self) -> String {
        format!(
            "[{}] {}\n{}{}\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.direction.tag(),
            self.fields_text(),
            "-".repeat(SEPARATOR_WIDTH),
        )
    }
}

fn or_not_provided(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_PROVIDED.to_string(),
    }
}
