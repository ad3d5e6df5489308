//! Error types for the apiscope library.
//!
//! One `thiserror` enum covers every failure the library can surface.
//! Traversal has no partial-success mode: any error aborts the whole
//! run rather than returning a partial mapping.

use thiserror::Error;

/// Result type alias for operations that may fail with an apiscope error.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the apiscope library.
#[derive(Debug, Error)]
pub enum Error {
    /// The named top-level package could not be found or loaded.
    ///
    /// Fatal and never retried; the inspected package is assumed to be
    /// present.
    #[error("cannot load package '{package}': {reason}")]
    PackageLoad {
        /// The package that failed to load.
        package: String,
        /// The reason loading failed.
        reason: String,
    },

    /// A dotted path segment does not exist on the current object.
    ///
    /// Fatal for direct resolution calls. During traversal every path
    /// is derived from the host's own member listing, so an occurrence
    /// there indicates a walker defect rather than user error.
    #[error("no attribute '{segment}' while resolving '{path}'")]
    AttributeMissing {
        /// The full path being resolved.
        path: String,
        /// The segment that was missing.
        segment: String,
    },

    /// A malformed import path was supplied.
    #[error("invalid import path '{path}': {reason}")]
    InvalidImportPath {
        /// The offending path string.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A canonical name was requested relative to an object that is
    /// not a module.
    #[error("'{name}' is not a module")]
    NotAModule {
        /// The name of the non-module object.
        name: String,
    },

    /// A directory-aware view was selected without an API directory
    /// list. Raised before any traversal work.
    #[error("view '{mode}' requires an API directory list")]
    MissingApiDirectories {
        /// The view mode that was selected.
        mode: String,
    },

    /// No declared API directory is a prefix of the given path.
    ///
    /// Callers must guarantee at least the root package matches, e.g.
    /// by declaring the top-level package itself as a directory.
    #[error("no declared API directory matches '{path}'")]
    NoApiDirectoryMatch {
        /// The path with no matching directory.
        path: String,
    },

    /// A package manifest failed validation.
    #[error("invalid manifest for package '{package}': {reason}")]
    Manifest {
        /// The package whose manifest is invalid.
        package: String,
        /// The reason the manifest is invalid.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A manifest could not be parsed as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<crate::name::InvalidPathError> for Error {
    fn from(err: crate::name::InvalidPathError) -> Self {
        Self::InvalidImportPath {
            path: err.path,
            reason: err.reason,
        }
    }
}

impl Error {
    /// Check if this error is a failure to load a top-level package.
    #[must_use]
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::PackageLoad { .. })
    }

    /// Check if this error is a configuration problem (as opposed to a
    /// discovery or resolution failure).
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingApiDirectories { .. })
    }
}
