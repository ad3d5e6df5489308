//! A [`Host`] that loads package graphs from JSON manifest files.
//!
//! A package root directory holds one `<package>.json` per loadable
//! top-level package. Reading and installing a manifest is the
//! one-shot, possibly-failing initialization step that loading a real
//! package would trigger; once installed, a package stays cached for
//! the lifetime of the host (the resolver itself never caches).
//!
//! Manifest format: a JSON object with an `objects` table of tagged
//! specs and a `root` id naming the package's own module.
//!
//! ```json
//! {
//!   "root": "pkg",
//!   "objects": {
//!     "pkg": {"kind": "module", "name": "pkg",
//!             "members": {"api": "api", "Foo": "foo"}},
//!     "api": {"kind": "module", "name": "pkg.api",
//!             "members": {"Foo": "foo"}},
//!     "foo": {"kind": "class", "module": "pkg.api", "name": "Foo"},
//!     "cfg": {"kind": "instance"}
//!   }
//! }
//! ```
//!
//! Object ids are local to one manifest; exposing the same id from two
//! modules is how shared objects (aliases) are declared.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::host::{Host, Identity, MemoryHost, ObjectId, ObjectKind};

/// A parsed package manifest.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Id of the package's own module within `objects`.
    pub root: String,
    /// All objects of the package graph, keyed by manifest-local id.
    pub objects: BTreeMap<String, ObjectSpec>,
}

/// One object declaration within a manifest.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ObjectSpec {
    /// A module with its reported full dotted name and member table
    /// (member name to object id).
    Module {
        /// The full dotted name the module reports for itself.
        name: String,
        /// Member name to manifest-local object id.
        #[serde(default)]
        members: BTreeMap<String, String>,
    },
    /// A class with defining-module metadata.
    Class {
        /// The defining module's full dotted name.
        module: String,
        /// The class's own name.
        name: String,
    },
    /// A function with defining-module metadata.
    Function {
        /// The defining module's full dotted name.
        module: String,
        /// The function's own name.
        name: String,
    },
    /// A bound method with defining-module metadata.
    Method {
        /// The defining module's full dotted name.
        module: String,
        /// The method's own name.
        name: String,
    },
    /// A plain instance with no identity metadata.
    Instance,
}

impl Manifest {
    /// Parses a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when the text is not a valid manifest.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Installs this manifest's objects into a graph and registers the
    /// root module as the top-level package `package`.
    ///
    /// On error the graph may already hold some of the manifest's
    /// objects, but the package is never registered, so nothing
    /// becomes reachable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Manifest`] when a member references an unknown
    /// object id, or the root is missing, not a module, or not named
    /// after the package.
    pub fn install(&self, package: &str, graph: &mut MemoryHost) -> Result<ObjectId> {
        let mut ids: BTreeMap<&str, ObjectId> = BTreeMap::new();
        for (key, spec) in &self.objects {
            let id = match spec {
                ObjectSpec::Module { name, .. } => graph.add_module(name),
                ObjectSpec::Class { module, name } => graph.add_class(module, name),
                ObjectSpec::Function { module, name } => graph.add_function(module, name),
                ObjectSpec::Method { module, name } => graph.add_method(module, name),
                ObjectSpec::Instance => graph.add_instance(),
            };
            ids.insert(key.as_str(), id);
        }

        for (key, spec) in &self.objects {
            if let ObjectSpec::Module { members, .. } = spec {
                let owner = ids[key.as_str()];
                for (member, target) in members {
                    let value =
                        ids.get(target.as_str())
                            .copied()
                            .ok_or_else(|| Error::Manifest {
                                package: package.to_string(),
                                reason: format!(
                                    "member '{member}' of '{key}' references \
                                     unknown object '{target}'"
                                ),
                            })?;
                    graph.add_member(owner, member, value);
                }
            }
        }

        let root = ids
            .get(self.root.as_str())
            .copied()
            .ok_or_else(|| Error::Manifest {
                package: package.to_string(),
                reason: format!("root references unknown object '{}'", self.root),
            })?;
        match graph.module_name(root) {
            Some(name) if name == package => {}
            Some(name) => {
                return Err(Error::Manifest {
                    package: package.to_string(),
                    reason: format!("root module is named '{name}', expected '{package}'"),
                })
            }
            None => {
                return Err(Error::Manifest {
                    package: package.to_string(),
                    reason: "root object must be a module".to_string(),
                })
            }
        }
        graph.register_package(package, root);
        Ok(root)
    }
}

/// A host backed by a directory of package manifests.
///
/// Packages are loaded lazily: the first `load` of a package reads and
/// installs `<package_root>/<package>.json`; later loads reuse the
/// installed graph.
pub struct ManifestHost {
    package_root: PathBuf,
    graph: RefCell<MemoryHost>,
}

impl ManifestHost {
    /// Creates a host over the given package-root directory.
    pub fn new(package_root: impl Into<PathBuf>) -> Self {
        Self {
            package_root: package_root.into(),
            graph: RefCell::new(MemoryHost::new()),
        }
    }

    /// The directory this host loads manifests from.
    #[must_use]
    pub fn package_root(&self) -> &Path {
        &self.package_root
    }

    fn install(&self, package: &str) -> Result<()> {
        let path = self.package_root.join(format!("{package}.json"));
        let text = fs::read_to_string(&path).map_err(|err| Error::PackageLoad {
            package: package.to_string(),
            reason: format!("{}: {err}", path.display()),
        })?;
        let manifest: Manifest =
            serde_json::from_str(&text).map_err(|err| Error::Manifest {
                package: package.to_string(),
                reason: format!("not valid JSON: {err}"),
            })?;
        manifest.install(package, &mut self.graph.borrow_mut())?;
        Ok(())
    }
}

impl Host for ManifestHost {
    fn load(&self, package: &str) -> Result<ObjectId> {
        let installed = self.graph.borrow().contains_package(package);
        if !installed {
            log::debug!(
                "loading package '{package}' from {}",
                self.package_root.display()
            );
            self.install(package)?;
        }
        self.graph.borrow().load(package)
    }

    fn attr(&self, obj: ObjectId, name: &str) -> Option<ObjectId> {
        self.graph.borrow().attr(obj, name)
    }

    fn member_names(&self, obj: ObjectId) -> Vec<String> {
        self.graph.borrow().member_names(obj)
    }

    fn kind(&self, obj: ObjectId) -> ObjectKind {
        self.graph.borrow().kind(obj)
    }

    fn module_name(&self, obj: ObjectId) -> Option<String> {
        self.graph.borrow().module_name(obj)
    }

    fn identity(&self, obj: ObjectId) -> Option<Identity> {
        self.graph.borrow().identity(obj)
    }
}
