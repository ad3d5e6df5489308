//! Shared fixture graph for integration tests.
//!
//! Models the shapes real packages exhibit: an implementation module
//! whose class is re-exported at the root and from a curated `api`
//! module, a hidden module, a re-exported third-party module, a plain
//! instance exposed twice, and a cycle back to the root.

use apiscope::{ApiDirectories, MemoryHost};

/// Builds the `pkg` fixture package.
///
/// Object graph:
///
/// - `pkg` (module), members: `CONFIG`, `Foo`, `_private`, `api`,
///   `ext`, `internal`
/// - `pkg.api` (module), members: `Foo`, `helper`
/// - `pkg.internal` (module), members: `CONFIG`, `Foo`, `root` (cycle)
/// - `pkg._private` (module), members: `Secret`
/// - `ext` (third-party module), members: none
/// - class `Foo` defined in `pkg.internal`, exposed three times
/// - instance `CONFIG` exposed from `pkg` and `pkg.internal`
#[allow(dead_code)]
pub fn fixture() -> MemoryHost {
    let mut host = MemoryHost::new();
    let root = host.add_module("pkg");
    let api = host.add_module("pkg.api");
    let internal = host.add_module("pkg.internal");
    let private = host.add_module("pkg._private");
    let ext = host.add_module("ext");
    let foo = host.add_class("pkg.internal", "Foo");
    let helper = host.add_function("pkg.api", "helper");
    let secret = host.add_class("pkg._private", "Secret");
    let config = host.add_instance();

    host.add_member(root, "CONFIG", config);
    host.add_member(root, "Foo", foo);
    host.add_member(root, "_private", private);
    host.add_member(root, "api", api);
    host.add_member(root, "ext", ext);
    host.add_member(root, "internal", internal);

    host.add_member(api, "Foo", foo);
    host.add_member(api, "helper", helper);

    host.add_member(internal, "CONFIG", config);
    host.add_member(internal, "Foo", foo);
    host.add_member(internal, "root", root);

    host.add_member(private, "Secret", secret);

    host.register_package("pkg", root);
    host
}

/// The directory list most tests rank against: the package root plus
/// its curated `api` module.
#[allow(dead_code)]
pub fn api_directories() -> ApiDirectories {
    ApiDirectories::new(["pkg", "pkg.api"])
}
