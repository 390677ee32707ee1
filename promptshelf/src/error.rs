//! Error types for Promptshelf
//!
//! Load-time failures are conservative: a single invalid required field,
//! unknown category directory, or duplicate id aborts the entire load, since
//! a prompt library with bad content must not ship. Malformed optional fields
//! are reported as [`LoadWarning`]s instead and never abort a load.

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Result type alias for Promptshelf operations
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Error types for Promptshelf operations
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum ShelfError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Front matter could not be parsed as YAML
    #[error("Failed to parse front matter in {path}: {message}")]
    Metadata {
        /// The prompt file with unparseable front matter
        path: PathBuf,
        /// The underlying YAML error message
        message: String,
    },

    /// A required front matter field is missing
    #[error("{path}: missing required field: {field}")]
    MissingField {
        /// The offending prompt file
        path: PathBuf,
        /// The missing field name
        field: &'static str,
    },

    /// A required front matter field is present but invalid
    #[error("{path}: invalid field {field}: {reason}")]
    InvalidField {
        /// The offending prompt file
        path: PathBuf,
        /// The invalid field name
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A prompt lives in a directory that is not one of the fixed categories
    #[error("{path}: unknown category directory '{directory}' (expected simple, complex, or rules)")]
    UnknownCategory {
        /// The offending prompt file
        path: PathBuf,
        /// The directory name that failed to parse as a category
        directory: String,
    },

    /// Two prompt files derive the same id
    #[error("Duplicate prompt id '{id}': {first} and {second}")]
    DuplicateId {
        /// The colliding id
        id: String,
        /// The file loaded first
        first: PathBuf,
        /// The file that collided with it
        second: PathBuf,
    },

    /// No prompt with the requested id exists in the loaded library
    #[error("Prompt not found: {0}")]
    PromptNotFound(String),

    /// A title slugified down to nothing, so no file name can be derived
    #[error("Cannot derive a file name from title: {0:?}")]
    InvalidTitle(String),

    /// Refusing to overwrite an existing file
    #[error("File already exists: {path}")]
    AlreadyExists {
        /// The path that would have been overwritten
        path: PathBuf,
    },

    /// A required directory does not exist
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The missing directory
        path: PathBuf,
    },
}

/// A non-fatal issue recorded during a load
///
/// Warnings accompany a successful load; the affected optional field is
/// dropped from the resulting prompt rather than failing the document set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// The prompt file the warning applies to
    pub path: PathBuf,
    /// The front matter field the warning applies to
    pub field: &'static str,
    /// Description of the issue
    pub message: String,
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.path.display(), self.field, self.message)
    }
}
