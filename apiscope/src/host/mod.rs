//! The introspection seam between the walker and an inspectable
//! module system.
//!
//! The traversal logic never touches a concrete module system; it goes
//! through the [`Host`] trait, which captures the four capabilities the
//! walker needs: load a named unit, enumerate its members, query
//! defining-unit/own-name metadata, and distinguish member categories.
//!
//! Two implementations ship with the library:
//!
//! - [`MemoryHost`]: an object graph built programmatically, for tests
//!   and embedders.
//! - [`ManifestHost`]: loads package graphs lazily from JSON manifest
//!   files in a package-root directory.

mod manifest;
mod memory;

pub use manifest::{Manifest, ManifestHost, ObjectSpec};
pub use memory::MemoryHost;

use crate::error::Result;

/// Opaque handle to an object held by a host.
///
/// Handle equality is object identity: two paths that resolve to the
/// same `ObjectId` reach the same object. Handles are only meaningful
/// with the host that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub(crate) usize);

/// The category of an object, as reported by its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A namespace unit (package or submodule).
    Module,
    /// A composite type.
    Class,
    /// A free callable.
    Function,
    /// A callable bound to a class.
    Method,
    /// A plain data instance, carrying no identity metadata.
    Instance,
}

/// Defining-unit metadata carried by classes, functions, and methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The full dotted name of the defining module.
    pub module: String,
    /// The object's own name within that module.
    pub name: String,
}

impl Identity {
    /// The fully-qualified `<module>.<name>` form.
    #[must_use]
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.module, self.name)
    }
}

/// An introspectable module system.
///
/// Loading a package is the only operation with side effects (it may
/// trigger arbitrary one-shot initialization, such as reading a
/// manifest from disk) and the only one that can fail outright; all
/// other methods are pure queries over already-loaded objects.
pub trait Host {
    /// Loads a top-level package by name and returns its module object.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PackageLoad`] when the package cannot be
    /// found or its initialization fails.
    fn load(&self, package: &str) -> Result<ObjectId>;

    /// Looks up a named attribute of an object, or `None` if absent.
    fn attr(&self, obj: ObjectId, name: &str) -> Option<ObjectId>;

    /// The full directory listing of a module's member names, sorted.
    ///
    /// Non-modules have no enumerable members and yield an empty list.
    fn member_names(&self, obj: ObjectId) -> Vec<String>;

    /// The category of an object.
    fn kind(&self, obj: ObjectId) -> ObjectKind;

    /// The full dotted name a module reports for itself; `None` for
    /// non-modules.
    fn module_name(&self, obj: ObjectId) -> Option<String>;

    /// Defining-unit metadata for classes, functions, and methods;
    /// `None` for modules and instances.
    fn identity(&self, obj: ObjectId) -> Option<Identity>;
}
