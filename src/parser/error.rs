//! Parser error types

use std::fmt;

/// Errors that can occur while loading a modifier context or chart properties
#[derive(Debug)]
pub enum ParseError {
    /// The file could not be read
    Io {
        path: String,
        source: std::io::Error,
    },
    /// Malformed YAML, or a YAML document that does not describe a context
    Yaml {
        source: serde_yaml::Error,
    },
    /// Malformed JSON, or a JSON document that does not describe a context
    Json {
        source: serde_json::Error,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read context file '{}': {}", path, source)
            }
            Self::Yaml { source } => {
                write!(f, "Invalid YAML context: {}", source)
            }
            Self::Json { source } => {
                write!(f, "Invalid JSON context: {}", source)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Yaml { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        ParseError::Yaml { source: err }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Json { source: err }
    }
}
