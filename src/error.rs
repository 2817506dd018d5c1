//! Error types for configcast.

use crate::format::Format;

/// Position of a parse failure within the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// One-based line number.
    pub line: usize,
    /// One-based column number.
    pub column: usize,
}

/// Malformed input in one of the supported formats.
///
/// Wraps the underlying parser's message for the delegated formats (JSON,
/// YAML) and is raised directly by the properties parser, so callers never
/// need to match on library-specific error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed {format} document{}: {message}", location_suffix(.location))]
pub struct ParseError {
    /// Format whose parser rejected the input.
    pub format: Format,
    /// Human-readable description of the failure.
    pub message: String,
    /// Position in the input, when the parser reports one.
    pub location: Option<Location>,
}

impl ParseError {
    /// Create a parse error without position information.
    pub fn new(format: Format, message: impl Into<String>) -> Self {
        Self {
            format,
            message: message.into(),
            location: None,
        }
    }

    /// Attach a line/column position to this error.
    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.location = Some(Location { line, column });
        self
    }
}

/// Writer-level failure while rendering a configuration.
///
/// The in-memory model itself cannot produce an unserializable state; this
/// only surfaces failures from the underlying writer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to serialize {format} document: {message}")]
pub struct SerializeError {
    /// Format whose serializer failed.
    pub format: Format,
    /// Human-readable description of the failure.
    pub message: String,
}

impl SerializeError {
    /// Create a serialize error.
    pub fn new(format: Format, message: impl Into<String>) -> Self {
        Self {
            format,
            message: message.into(),
        }
    }
}

fn location_suffix(location: &Option<Location>) -> String {
    match location {
        Some(location) => format!(" at line {}, column {}", location.line, location.column),
        None => String::new(),
    }
}
