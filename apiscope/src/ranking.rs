//! Ranking aliases by a declared list of API directories.
//!
//! An API directory is a dotted prefix declaring a package subtree as
//! public surface. Given such a list, every import path gets a
//! [`SortKey`] describing how canonical it looks: paths sitting
//! directly inside a declared directory rank best, and among
//! comparable paths the one matched by the most specific directory
//! wins.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::aliases::all_appearances;
use crate::error::{Error, Result};
use crate::name::{ImportPath, NameMapping};

/// An ordered list of dotted prefixes declaring the API surface.
///
/// Read from a plain text file, one prefix per line; blank lines are
/// ignored. Matching is literal string-prefix matching, as in the
/// views it feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDirectories(Vec<String>);

impl ApiDirectories {
    /// Builds a directory list from an iterator of prefixes.
    pub fn new<I, S>(dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(dirs.into_iter().map(Into::into).collect())
    }

    /// Parses a directory list from line-oriented text.
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        Self(
            text.lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| line.trim().to_string())
                .collect(),
        )
    }

    /// Reads a directory list from a file, entirely, before use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::from_lines(&fs::read_to_string(path)?))
    }

    /// Number of declared directories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no directories are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the declared prefixes in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Ranking key of an import path against a directory list.
///
/// `depth_penalty` is the path's segment count minus the segment count
/// of its deepest matching directory; `match_depth` is that deepest
/// matching directory's segment count. Ordering is ascending penalty,
/// then descending match depth, so a penalty of zero (the path *is* a
/// declared directory) ranks first and a direct member of a declared
/// directory (penalty one) next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    /// Path segments beyond the deepest matching directory.
    pub depth_penalty: usize,
    /// Segment count of the deepest matching directory.
    pub match_depth: usize,
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.depth_penalty
            .cmp(&other.depth_penalty)
            .then(other.match_depth.cmp(&self.match_depth))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the ranking key of one import path.
///
/// # Errors
///
/// Returns [`Error::NoApiDirectoryMatch`] when no declared directory
/// is a prefix of the path; callers must guarantee at least the root
/// package matches, e.g. by declaring the top-level package itself.
pub fn sort_key(path: &ImportPath, dirs: &ApiDirectories) -> Result<SortKey> {
    let match_depth = dirs
        .iter()
        .filter(|dir| path.as_str().starts_with(dir))
        .map(|dir| dir.split('.').count())
        .max()
        .ok_or_else(|| Error::NoApiDirectoryMatch {
            path: path.to_string(),
        })?;
    Ok(SortKey {
        depth_penalty: path.depth() - match_depth,
        match_depth,
    })
}

/// For each alias group, picks the import path ranking best under the
/// declared directories.
///
/// # Errors
///
/// Propagates [`Error::NoApiDirectoryMatch`] from [`sort_key`].
pub fn api_names(names: &NameMapping, dirs: &ApiDirectories) -> Result<NameMapping> {
    let mut out = NameMapping::new();
    for (canonical, appearances) in all_appearances(names) {
        let mut keyed = appearances
            .into_iter()
            .map(|path| Ok((sort_key(&path, dirs)?, path)))
            .collect::<Result<Vec<_>>>()?;
        keyed.sort_by_key(|(key, _)| *key);
        if let Some((_, winner)) = keyed.into_iter().next() {
            out.insert(winner, canonical);
        }
    }
    Ok(out)
}

/// Whether a path is a direct member of a declared directory: its
/// depth penalty is exactly one. This is the canonical "this is API
/// surface" test.
///
/// # Errors
///
/// Propagates [`Error::NoApiDirectoryMatch`] from [`sort_key`].
pub fn in_api_directory(path: &ImportPath, dirs: &ApiDirectories) -> Result<bool> {
    Ok(sort_key(path, dirs)?.depth_penalty == 1)
}

/// Applies [`api_names`], then keeps only entries whose winning path
/// is (or is not, per `want_in_api`) a direct member of a declared
/// directory.
///
/// # Errors
///
/// Propagates [`Error::NoApiDirectoryMatch`] from [`sort_key`].
pub fn filter_by_in_api(
    names: &NameMapping,
    dirs: &ApiDirectories,
    want_in_api: bool,
) -> Result<NameMapping> {
    let mut out = NameMapping::new();
    for (path, canonical) in api_names(names, dirs)? {
        if in_api_directory(&path, dirs)? == want_in_api {
            out.insert(path, canonical);
        }
    }
    Ok(out)
}

/// For every in-API representative, lists every other known alias of
/// its object, shallowest first (stable on ties).
///
/// # Errors
///
/// Propagates [`Error::NoApiDirectoryMatch`] from [`sort_key`].
pub fn all_api_aliases(
    names: &NameMapping,
    dirs: &ApiDirectories,
) -> Result<IndexMap<ImportPath, Vec<ImportPath>>> {
    let representatives = filter_by_in_api(names, dirs, true)?;
    let groups = all_appearances(names);
    let mut out = IndexMap::new();
    for (path, canonical) in representatives {
        let mut others: Vec<ImportPath> = groups
            .get(&canonical)
            .map(|group| group.iter().filter(|p| **p != path).cloned().collect())
            .unwrap_or_default();
        others.sort_by_key(ImportPath::depth);
        out.insert(path, others);
    }
    Ok(out)
}
