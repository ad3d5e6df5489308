//! Name resolution: turning dotted paths into objects and objects into
//! canonical names.

use crate::error::{Error, Result};
use crate::host::{Host, ObjectId};
use crate::name::{CanonicalName, ImportPath};

/// Resolves a dotted path to the object it reaches.
///
/// The first segment is loaded as a top-level package; every remaining
/// segment is an attribute lookup on the current object. No caching:
/// every call re-resolves the full path.
///
/// # Errors
///
/// Returns [`Error::PackageLoad`] when the top-level package cannot be
/// loaded, and [`Error::AttributeMissing`] when a later segment is
/// absent.
pub fn resolve(host: &dyn Host, path: &ImportPath) -> Result<ObjectId> {
    let mut current = host.load(path.root())?;
    for segment in path.segments().skip(1) {
        current = host
            .attr(current, segment)
            .ok_or_else(|| Error::AttributeMissing {
                path: path.to_string(),
                segment: segment.to_string(),
            })?;
    }
    Ok(current)
}

/// Computes the canonical name of the member `name` of the module
/// `package`.
///
/// Modules canonicalize to their own reported full name and objects
/// with identity metadata to `<defining module>.<own name>`. Plain
/// instances carry no metadata, so their canonical name falls back to
/// the path they were found at: the package's own reported name plus
/// the member name. Two aliases to the same instance reached through
/// different parents therefore get different canonical names and are
/// not recognized as aliases of each other; this imprecision is part
/// of the design, not a defect.
///
/// # Errors
///
/// Returns [`Error::AttributeMissing`] when the member is absent and
/// [`Error::NotAModule`] when `package` is not a module.
pub fn canonical_name(
    host: &dyn Host,
    package: ObjectId,
    name: &str,
) -> Result<CanonicalName> {
    let owner = host
        .module_name(package)
        .ok_or_else(|| Error::NotAModule {
            name: name.to_string(),
        })?;
    let obj = host
        .attr(package, name)
        .ok_or_else(|| Error::AttributeMissing {
            path: owner.clone(),
            segment: name.to_string(),
        })?;

    if let Some(full) = host.module_name(obj) {
        return Ok(CanonicalName::from(full));
    }
    if let Some(identity) = host.identity(obj) {
        return Ok(CanonicalName::from(identity.qualified()));
    }
    // an instance of something: the found-at location is the best name
    Ok(CanonicalName::from(format!("{owner}.{name}")))
}
