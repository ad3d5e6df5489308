//! Predicate-based selectors over a discovered [`NameMapping`].
//!
//! Each filter is a pure function from one mapping (plus a host or
//! package name) to a new, smaller mapping; they compose in any order
//! with the same effect.

use crate::error::{Error, Result};
use crate::host::{Host, ObjectId, ObjectKind};
use crate::name::NameMapping;
use crate::resolver::resolve;

/// Keeps entries that belong to the declared package surface: no
/// hidden segment (a segment after the root starting with `_`) in the
/// import path, and a canonical name rooted in the package itself
/// (excludes re-exports whose true home is another package).
#[must_use]
pub fn api_valid_names(names: &NameMapping, package: &str) -> NameMapping {
    names
        .iter()
        .filter(|(path, canonical)| {
            !path.as_str().contains("._") && canonical.starts_with(package)
        })
        .map(|(path, canonical)| (path.clone(), canonical.clone()))
        .collect()
}

/// Whether an object category counts as "not a plain instance":
/// classes, modules, methods, and functions do.
#[must_use]
pub fn is_non_instance(kind: ObjectKind) -> bool {
    matches!(
        kind,
        ObjectKind::Class | ObjectKind::Module | ObjectKind::Method | ObjectKind::Function
    )
}

/// Keeps entries whose object is a class, module, method, or function.
///
/// Re-resolves every import path through the host.
///
/// # Errors
///
/// Propagates resolution failures; with a mapping produced by the
/// walker these indicate host inconsistency.
pub fn non_instance(host: &dyn Host, names: &NameMapping) -> Result<NameMapping> {
    let mut out = NameMapping::new();
    for (path, canonical) in names {
        let obj = resolve(host, path)?;
        if is_non_instance(host.kind(obj)) {
            out.insert(path.clone(), canonical.clone());
        }
    }
    Ok(out)
}

/// Keeps entries whose object is not itself a module.
///
/// # Errors
///
/// Propagates resolution failures, as for [`non_instance`].
pub fn non_module(host: &dyn Host, names: &NameMapping) -> Result<NameMapping> {
    let mut out = NameMapping::new();
    for (path, canonical) in names {
        let obj = resolve(host, path)?;
        if host.kind(obj) != ObjectKind::Module {
            out.insert(path.clone(), canonical.clone());
        }
    }
    Ok(out)
}

/// Whether a member of `package` counts as API: not underscore-prefixed
/// and not a module.
///
/// # Errors
///
/// Returns [`Error::AttributeMissing`] when the member is absent.
pub fn is_api_member(host: &dyn Host, package: ObjectId, name: &str) -> Result<bool> {
    let obj = host
        .attr(package, name)
        .ok_or_else(|| Error::AttributeMissing {
            path: host.module_name(package).unwrap_or_default(),
            segment: name.to_string(),
        })?;
    Ok(!name.starts_with('_') && host.kind(obj) != ObjectKind::Module)
}
