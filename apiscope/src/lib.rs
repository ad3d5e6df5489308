#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # apiscope
//!
//! A library for discovering and auditing the exported surface of a
//! package.
//!
//! apiscope walks a package's module/object graph at load time,
//! recording every import path an object is reachable through and the
//! canonical name of the object found there. Views over that mapping
//! answer the questions maintainers actually ask: what does this
//! package export, under which name did each object first appear, and
//! does the surface match a curated allow-list of "API directories"?
//!
//! Traversal never touches a concrete module system directly; it goes
//! through the [`Host`] trait. [`MemoryHost`] backs tests and
//! embedders; [`ManifestHost`] loads package graphs from JSON manifest
//! files.
//!
//! ## Core Types
//!
//! - [`ImportPath`] and [`CanonicalName`]: the two name identities
//! - [`NameMapping`]: the discovered path-to-canonical mapping
//! - [`Host`], [`MemoryHost`], [`ManifestHost`]: the introspection seam
//! - [`ApiDirectories`] and [`ViewMode`]: ranking and view selection
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use apiscope::{find_all_names, first_appearance, ImportPath, MemoryHost};
//!
//! // a package exporting one class under two names
//! let mut host = MemoryHost::new();
//! let root = host.add_module("pkg");
//! let sub = host.add_module("pkg.sub");
//! let foo = host.add_class("pkg.sub", "Foo");
//! host.add_member(root, "sub", sub);
//! host.add_member(root, "Foo", foo);
//! host.add_member(sub, "Foo", foo);
//! host.register_package("pkg", root);
//!
//! let names = find_all_names(&host, "pkg").unwrap();
//! assert_eq!(names.len(), 3); // pkg.Foo, pkg.sub, pkg.sub.Foo
//!
//! // the shallowest alias wins the first-appearance view
//! let first = first_appearance(&names);
//! assert!(first.contains_key(&"pkg.Foo".parse::<ImportPath>().unwrap()));
//! ```

pub mod aliases;
pub mod error;
pub mod filters;
pub mod host;
pub mod logging;
pub mod name;
pub mod ranking;
pub mod resolver;
pub mod view;
pub mod walker;

// Re-export key types at crate root for convenience
pub use aliases::{all_appearances, first_appearance, AliasGroups};
pub use error::{Error, Result};
pub use filters::{api_valid_names, is_api_member, is_non_instance, non_instance, non_module};
pub use host::{Host, Identity, Manifest, ManifestHost, MemoryHost, ObjectId, ObjectKind};
pub use logging::{init_logger, LogLevel, Logger};
pub use name::{CanonicalName, ImportPath, InvalidPathError, NameMapping};
pub use ranking::{
    all_api_aliases, api_names, filter_by_in_api, in_api_directory, sort_key, ApiDirectories,
    SortKey,
};
pub use resolver::{canonical_name, resolve};
pub use view::{run_view, verify_paths, Row, ViewMode, ViewOptions};
pub use walker::{find_all_names, is_cyclical};
