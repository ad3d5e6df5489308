//! Core name types for surface discovery.
//!
//! This module defines the two string identities the rest of the library
//! is built on: [`ImportPath`], one concrete way of reaching an object
//! from a top-level package, and [`CanonicalName`], the object's
//! best-known true identity. Many import paths may share one canonical
//! name; that relation is what the alias views report on.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

/// The central artifact of a traversal: every reachable import path,
/// mapped to the canonical name of the object found there.
///
/// Insertion order is discovery order, and every downstream filter
/// produces a fresh mapping rather than mutating one in place.
pub type NameMapping = IndexMap<ImportPath, CanonicalName>;

/// A dotted path by which an object is reachable from a top-level
/// package, e.g. `pkg.sub.Name`.
///
/// Import paths are not unique per object: the same object may be
/// reachable through many paths (aliases). A valid path is non-empty
/// and has no empty segments.
///
/// # Examples
///
/// ```
/// use apiscope::ImportPath;
///
/// let path: ImportPath = "pkg.sub.Name".parse().unwrap();
/// assert_eq!(path.depth(), 3);
/// assert_eq!(path.root(), "pkg");
/// assert_eq!(path.join("attr").as_str(), "pkg.sub.Name.attr");
///
/// assert!("pkg..Name".parse::<ImportPath>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImportPath(String);

impl ImportPath {
    /// Returns the dotted path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the dot-separated segments of the path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Returns the number of dot-separated segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.split('.').count()
    }

    /// Returns the first segment: the top-level package the path is
    /// rooted in.
    #[must_use]
    pub fn root(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }

    /// Extends the path by one attribute name.
    ///
    /// The name is expected to be a bare segment (no dots); the walker
    /// only ever joins names obtained from a host's member listing.
    #[must_use]
    pub fn join(&self, name: &str) -> Self {
        Self(format!("{}.{name}", self.0))
    }
}

impl fmt::Display for ImportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ImportPath {
    type Err = InvalidPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidPathError {
                path: s.to_string(),
                reason: "path is empty".into(),
            });
        }
        if s.split('.').any(str::is_empty) {
            return Err(InvalidPathError {
                path: s.to_string(),
                reason: "path has an empty segment".into(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<&str> for ImportPath {
    type Error = InvalidPathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Error type for malformed import paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPathError {
    /// The offending path string.
    pub path: String,
    /// The reason the path is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid import path '{}': {}", self.path, self.reason)
    }
}

impl std::error::Error for InvalidPathError {}

/// An object's best-known true identity.
///
/// For objects that carry defining-unit metadata (modules, classes,
/// functions, methods) this is `<defining module>.<own name>`; for
/// plain instances it falls back to the path the object was first
/// found at. The fallback is why two aliases to the same instance are
/// not recognized as aliases of each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalName(String);

impl CanonicalName {
    /// Returns the canonical name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the canonical name starts with the given literal
    /// prefix. Used to tell home-grown objects from re-exports whose
    /// true home is another package.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CanonicalName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CanonicalName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
