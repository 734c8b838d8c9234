//! Unified error types for tensure-scaffold.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while scaffolding a backend module.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // --- Input ---

    /// The module name cannot be used as a path segment and C++/CMake identifier.
    #[error("invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: String },

    // --- Configuration ---

    /// The build configuration file (`CMakeLists.txt` by default) does not exist.
    #[error("{} not found", .0.display())]
    BuildFileNotFound(PathBuf),

    /// An explicitly requested config file could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Templates ---

    /// Handlebars rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Filesystem ---

    /// A module directory could not be created.
    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A generated file could not be written.
    #[error("failed to write {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The build file exists but could not be opened or appended to.
    #[error("failed to append to {path}")]
    AppendFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, ScaffoldError>`.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages() {
        let err = ScaffoldError::BuildFileNotFound(PathBuf::from("CMakeLists.txt"));
        assert_eq!(err.to_string(), "CMakeLists.txt not found");

        let err = ScaffoldError::AppendFailed {
            path: PathBuf::from("CMakeLists.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to append to CMakeLists.txt");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("denied"));
    }

    #[test]
    fn test_io_is_transparent() {
        let err: ScaffoldError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, ScaffoldError::Io(_)));
        assert_eq!(err.to_string(), "gone");
    }
}
