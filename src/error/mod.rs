//! Error handling for the node configuration layer
//!
//! Every failure in this crate is either a configuration problem or an
//! input-shape problem. Nothing here is retried; errors travel up to the
//! process entry point, which decides how to exit.

use std::fmt;
use std::path::PathBuf;

/// Result type alias for configuration and identity operations
pub type Result<T> = std::result::Result<T, NodeError>;

/// Error types for settings resolution and content hashing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// The settings file could not be read
    Io { path: PathBuf, message: String },
    /// The settings file is not a JSON object
    MalformedSettings { path: PathBuf, message: String },
    /// A required setting is absent
    MissingSetting(String),
    /// A setting is present but has the wrong kind or an unusable value
    InvalidSetting {
        key: String,
        expected: &'static str,
        found: String,
    },
    /// `node.id` is not assigned; callers may tolerate this
    NodeIdMissing,
    /// No hash implementation is registered under this name
    UnsupportedAlgorithm(String),
    /// The algorithm produced fewer bytes than the protocol hash length
    ShortDigest { algorithm: String, length: usize },
    /// A byte slice does not have the length its type requires
    InvalidLength { expected: usize, actual: usize },
    /// Hashing was asked to digest zero bytes
    EmptyInput,
    /// Canonical encoding failed
    Serialization(String),
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeError::Io { path, message } => {
                write!(f, "I/O error reading {}: {message}", path.display())
            }
            NodeError::MalformedSettings { path, message } => {
                write!(f, "Malformed settings file {}: {message}", path.display())
            }
            NodeError::MissingSetting(key) => write!(f, "Missing setting: {key}"),
            NodeError::InvalidSetting {
                key,
                expected,
                found,
            } => write!(f, "Invalid setting {key}: expected {expected}, found {found}"),
            NodeError::NodeIdMissing => write!(f, "Node id not assigned in config"),
            NodeError::UnsupportedAlgorithm(name) => {
                write!(f, "Unsupported hash algorithm: {name}")
            }
            NodeError::ShortDigest { algorithm, length } => write!(
                f,
                "Hash algorithm {algorithm} produced {length} bytes, shorter than the protocol hash length"
            ),
            NodeError::InvalidLength { expected, actual } => {
                write!(f, "Invalid length: expected {expected} bytes, got {actual}")
            }
            NodeError::EmptyInput => write!(f, "Refusing to hash empty input"),
            NodeError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for NodeError {}

impl From<serde_json::Error> for NodeError {
    fn from(err: serde_json::Error) -> Self {
        NodeError::Serialization(err.to_string())
    }
}

impl NodeError {
    /// True for errors that assembly may carry on past
    pub fn is_recoverable(&self) -> bool {
        matches!(self, NodeError::NodeIdMissing)
    }
}
