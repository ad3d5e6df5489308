//! Recursive traversal of a package's module graph.
//!
//! [`find_all_names`] enumerates every named member of a package and
//! its eligible sub-modules, producing the [`NameMapping`] the rest of
//! the library consumes. [`is_cyclical`] keeps self-referential module
//! graphs from sending the walker into infinite descent.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::host::Host;
use crate::name::{ImportPath, NameMapping};
use crate::resolver::{canonical_name, resolve};

/// Whether walking this dotted path revisits an already-visited object.
///
/// Walks the path from its top-level package collecting the set of
/// distinct objects seen (root included). If the set is smaller than
/// the number of segments, some step revisited an object: a
/// self-reference or re-export loop. Cyclical paths are pruned from
/// traversal, never reported as errors.
///
/// # Errors
///
/// Propagates load and attribute-resolution failures; with paths
/// derived from a host's own member listing these indicate host
/// inconsistency rather than user error.
pub fn is_cyclical(host: &dyn Host, path: &ImportPath) -> Result<bool> {
    let root = host.load(path.root())?;
    let mut visited = HashSet::new();
    visited.insert(root);
    let mut current = root;
    for segment in path.segments().skip(1) {
        current = host
            .attr(current, segment)
            .ok_or_else(|| Error::AttributeMissing {
                path: path.to_string(),
                segment: segment.to_string(),
            })?;
        visited.insert(current);
    }
    Ok(visited.len() < path.depth())
}

/// Discovers every reachable import path of a package.
///
/// Starting at the top-level package, records an entry for every
/// member of every visited module (the full listing, not only public
/// names), then descends into members that are modules of the same
/// package tree (reported module name starts with the root package's
/// name) and are not cyclical. Third-party modules merely re-exported
/// are recorded but not descended into.
///
/// # Errors
///
/// Returns [`Error::PackageLoad`] when the package cannot be loaded.
/// There is no partial result: any failure aborts the traversal.
pub fn find_all_names(host: &dyn Host, package: &str) -> Result<NameMapping> {
    let root_path: ImportPath = package.parse()?;
    let root_name = root_path.root().to_string();
    walk(host, &root_path, &root_name)
}

/// One traversal level, as an explicit fold: returns the delta mapping
/// for the subtree rooted at `module_path`, children merged after this
/// level's own entries.
fn walk(host: &dyn Host, module_path: &ImportPath, root_name: &str) -> Result<NameMapping> {
    let package = resolve(host, module_path)?;
    let mut found = NameMapping::new();
    let mut descend = Vec::new();

    for name in host.member_names(package) {
        let path = module_path.join(&name);
        let canonical = canonical_name(host, package, &name)?;
        if let Some(obj) = host.attr(package, &name) {
            if let Some(reported) = host.module_name(obj) {
                if reported.starts_with(root_name) && !is_cyclical(host, &path)? {
                    descend.push(path.clone());
                }
            }
        }
        found.insert(path, canonical);
    }

    log::debug!(
        "{}: {} members, descending into {}",
        module_path,
        found.len(),
        descend.len()
    );

    for sub in descend {
        let delta = walk(host, &sub, root_name)?;
        found.extend(delta);
    }
    Ok(found)
}
