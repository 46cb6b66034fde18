//! Error types for contract violations and front-end failures
//!
//! Expected negative outcomes of editing (a mask rejecting a write, an
//! exhausted limit, nothing to undo) are not errors; they surface as `false`
//! or zero counts. This type covers what callers cannot recover from inside
//! an edit: missing collaborators, unparsable input and file I/O.

use std::fmt;
use std::path::PathBuf;

/// Main error type for editing and the command-line front end
#[derive(Debug)]
pub enum EditError {
    /// A required collaborator was never supplied
    MissingArgument {
        /// Name of the missing collaborator
        argument: &'static str,
    },

    /// A textual argument could not be interpreted
    InvalidArgument {
        /// Name of the argument
        argument: &'static str,
        /// Value as supplied
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Failed to load a world image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save a world image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { argument } => {
                write!(f, "Missing required argument '{argument}'")
            }
            Self::InvalidArgument {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{argument}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load world '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export world to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for EditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for editing results
pub type Result<T> = std::result::Result<T, EditError>;

impl From<std::io::Error> for EditError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a missing argument error
pub const fn missing_argument(argument: &'static str) -> EditError {
    EditError::MissingArgument { argument }
}

/// Create an invalid argument error
pub fn invalid_argument(
    argument: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EditError {
    EditError::InvalidArgument {
        argument,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
