//! An in-memory object graph implementing [`Host`].
//!
//! Objects live in an arena indexed by [`ObjectId`]; modules carry a
//! sorted member table, so enumeration order matches a directory
//! listing. The builder methods make it easy to wire up alias and
//! cycle structures that real packages exhibit.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::host::{Host, Identity, ObjectId, ObjectKind};

enum ObjectData {
    Module {
        name: String,
        members: BTreeMap<String, ObjectId>,
    },
    Value {
        kind: ObjectKind,
        module: String,
        name: String,
    },
    Instance,
}

/// An in-process object graph, built programmatically.
///
/// # Examples
///
/// ```
/// use apiscope::{Host, MemoryHost, ObjectKind};
///
/// let mut host = MemoryHost::new();
/// let root = host.add_module("pkg");
/// let foo = host.add_class("pkg", "Foo");
/// host.add_member(root, "Foo", foo);
/// host.register_package("pkg", root);
///
/// let loaded = host.load("pkg").unwrap();
/// assert_eq!(loaded, root);
/// assert_eq!(host.attr(loaded, "Foo"), Some(foo));
/// assert_eq!(host.kind(foo), ObjectKind::Class);
/// ```
#[derive(Default)]
pub struct MemoryHost {
    objects: Vec<ObjectData>,
    packages: BTreeMap<String, ObjectId>,
}

impl MemoryHost {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, data: ObjectData) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(data);
        id
    }

    /// Adds a module whose reported full dotted name is `name`.
    pub fn add_module(&mut self, name: &str) -> ObjectId {
        self.push(ObjectData::Module {
            name: name.to_string(),
            members: BTreeMap::new(),
        })
    }

    /// Adds a class defined in `module` under its own `name`.
    pub fn add_class(&mut self, module: &str, name: &str) -> ObjectId {
        self.push(ObjectData::Value {
            kind: ObjectKind::Class,
            module: module.to_string(),
            name: name.to_string(),
        })
    }

    /// Adds a function defined in `module` under its own `name`.
    pub fn add_function(&mut self, module: &str, name: &str) -> ObjectId {
        self.push(ObjectData::Value {
            kind: ObjectKind::Function,
            module: module.to_string(),
            name: name.to_string(),
        })
    }

    /// Adds a bound method defined in `module` under its own `name`.
    pub fn add_method(&mut self, module: &str, name: &str) -> ObjectId {
        self.push(ObjectData::Value {
            kind: ObjectKind::Method,
            module: module.to_string(),
            name: name.to_string(),
        })
    }

    /// Adds a plain instance, which carries no identity metadata.
    pub fn add_instance(&mut self) -> ObjectId {
        self.push(ObjectData::Instance)
    }

    /// Exposes `value` as a member of the module `owner`.
    ///
    /// The same value may be exposed under several owners or names;
    /// that is exactly how aliases arise.
    ///
    /// # Panics
    ///
    /// Panics if `owner` is not a module.
    pub fn add_member(&mut self, owner: ObjectId, name: &str, value: ObjectId) {
        match &mut self.objects[owner.0] {
            ObjectData::Module { members, .. } => {
                members.insert(name.to_string(), value);
            }
            _ => panic!("add_member: owner {owner:?} is not a module"),
        }
    }

    /// Makes `root` loadable as the top-level package `name`.
    pub fn register_package(&mut self, name: &str, root: ObjectId) {
        self.packages.insert(name.to_string(), root);
    }

    /// Whether a top-level package with this name is registered.
    #[must_use]
    pub fn contains_package(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    fn data(&self, obj: ObjectId) -> &ObjectData {
        &self.objects[obj.0]
    }
}

impl Host for MemoryHost {
    fn load(&self, package: &str) -> Result<ObjectId> {
        self.packages
            .get(package)
            .copied()
            .ok_or_else(|| Error::PackageLoad {
                package: package.to_string(),
                reason: "unknown package".to_string(),
            })
    }

    fn attr(&self, obj: ObjectId, name: &str) -> Option<ObjectId> {
        match self.data(obj) {
            ObjectData::Module { members, .. } => members.get(name).copied(),
            _ => None,
        }
    }

    fn member_names(&self, obj: ObjectId) -> Vec<String> {
        match self.data(obj) {
            // BTreeMap keys are already sorted
            ObjectData::Module { members, .. } => members.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    fn kind(&self, obj: ObjectId) -> ObjectKind {
        match self.data(obj) {
            ObjectData::Module { .. } => ObjectKind::Module,
            ObjectData::Value { kind, .. } => *kind,
            ObjectData::Instance => ObjectKind::Instance,
        }
    }

    fn module_name(&self, obj: ObjectId) -> Option<String> {
        match self.data(obj) {
            ObjectData::Module { name, .. } => Some(name.clone()),
            _ => None,
        }
    }

    fn identity(&self, obj: ObjectId) -> Option<Identity> {
        match self.data(obj) {
            ObjectData::Value { module, name, .. } => Some(Identity {
                module: module.clone(),
                name: name.clone(),
            }),
            _ => None,
        }
    }
}
