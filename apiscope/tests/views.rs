//! End-to-end view behavior over the shared fixture package.

mod common;

use apiscope::{
    api_valid_names, find_all_names, non_instance, non_module, run_view, Row, ViewMode,
    ViewOptions,
};
use common::{api_directories, fixture};

fn primaries(rows: &[Row]) -> Vec<&str> {
    rows.iter().map(|row| row.primary.as_str()).collect()
}

fn options(mode: ViewMode) -> ViewOptions {
    ViewOptions {
        mode,
        ..ViewOptions::default()
    }
}

#[test]
fn identity_view_applies_default_filters() {
    let host = fixture();
    let rows = run_view(&host, "pkg", &ViewOptions::default(), None).unwrap();
    // hidden names, foreign re-exports, and modules are all gone
    assert_eq!(
        primaries(&rows),
        [
            "pkg.CONFIG",
            "pkg.Foo",
            "pkg.api.Foo",
            "pkg.api.helper",
            "pkg.internal.CONFIG",
            "pkg.internal.Foo",
        ]
    );
}

#[test]
fn hide_instances_drops_both_config_aliases() {
    let host = fixture();
    let opts = ViewOptions {
        hide_instances: true,
        ..ViewOptions::default()
    };
    let rows = run_view(&host, "pkg", &opts, None).unwrap();
    assert_eq!(
        primaries(&rows),
        ["pkg.Foo", "pkg.api.Foo", "pkg.api.helper", "pkg.internal.Foo"]
    );
}

#[test]
fn allow_non_api_keeps_hidden_and_foreign_names() {
    let host = fixture();
    let opts = ViewOptions {
        allow_non_api: true,
        show_modules: true,
        ..ViewOptions::default()
    };
    let rows = run_view(&host, "pkg", &opts, None).unwrap();
    let names = primaries(&rows);
    assert!(names.contains(&"pkg._private"));
    assert!(names.contains(&"pkg._private.Secret"));
    assert!(names.contains(&"pkg.ext"));
}

#[test]
fn first_view_picks_the_shallowest_alias() {
    let host = fixture();
    let rows = run_view(&host, "pkg", &options(ViewMode::First), None).unwrap();
    // Foo's three aliases collapse to the root one
    assert_eq!(
        primaries(&rows),
        ["pkg.CONFIG", "pkg.Foo", "pkg.api.helper", "pkg.internal.CONFIG"]
    );
}

#[test]
fn all_view_groups_every_alias() {
    let host = fixture();
    let rows = run_view(&host, "pkg", &options(ViewMode::All), None).unwrap();
    let foo = rows
        .iter()
        .find(|row| row.primary == "pkg.internal.Foo")
        .unwrap();
    assert_eq!(
        foo.related.as_deref().unwrap(),
        ["pkg.Foo", "pkg.api.Foo", "pkg.internal.Foo"]
    );
}

#[test]
fn all_view_related_paths_cover_the_filtered_mapping() {
    let host = fixture();
    let identity = run_view(&host, "pkg", &ViewOptions::default(), None).unwrap();
    let all = run_view(&host, "pkg", &options(ViewMode::All), None).unwrap();

    let mut flattened: Vec<String> = all
        .iter()
        .flat_map(|row| row.related.as_deref().unwrap().iter().cloned())
        .collect();
    flattened.sort();
    let mut expected: Vec<String> = identity.iter().map(|row| row.primary.clone()).collect();
    expected.sort();
    assert_eq!(flattened, expected);
}

#[test]
fn api_names_view_prefers_the_curated_module() {
    let host = fixture();
    let dirs = api_directories();
    let rows = run_view(&host, "pkg", &options(ViewMode::ApiNames), Some(&dirs)).unwrap();
    // pkg.api.Foo beats pkg.Foo: deeper directory match at equal penalty
    assert_eq!(
        primaries(&rows),
        ["pkg.CONFIG", "pkg.api.Foo", "pkg.api.helper", "pkg.internal.CONFIG"]
    );
}

#[test]
fn in_and_not_in_api_partition_the_api_names() {
    let host = fixture();
    let dirs = api_directories();
    let inside = run_view(&host, "pkg", &options(ViewMode::InApi), Some(&dirs)).unwrap();
    let outside = run_view(&host, "pkg", &options(ViewMode::NotInApi), Some(&dirs)).unwrap();

    assert_eq!(
        primaries(&inside),
        ["pkg.CONFIG", "pkg.api.Foo", "pkg.api.helper"]
    );
    assert_eq!(primaries(&outside), ["pkg.internal.CONFIG"]);

    let picked = run_view(&host, "pkg", &options(ViewMode::ApiNames), Some(&dirs)).unwrap();
    assert_eq!(inside.len() + outside.len(), picked.len());
}

#[test]
fn all_api_aliases_excludes_the_representative() {
    let host = fixture();
    let dirs = api_directories();
    let rows = run_view(&host, "pkg", &options(ViewMode::AllApiAliases), Some(&dirs)).unwrap();

    let foo = rows.iter().find(|row| row.primary == "pkg.api.Foo").unwrap();
    assert_eq!(
        foo.related.as_deref().unwrap(),
        ["pkg.Foo", "pkg.internal.Foo"]
    );

    let helper = rows
        .iter()
        .find(|row| row.primary == "pkg.api.helper")
        .unwrap();
    assert!(helper.related.as_deref().unwrap().is_empty());
}

#[test]
fn standalone_filters_commute() {
    let host = fixture();
    let names = find_all_names(&host, "pkg").unwrap();

    let a = non_module(&host, &api_valid_names(&names, "pkg")).unwrap();
    let b = api_valid_names(&non_module(&host, &names).unwrap(), "pkg");
    assert_eq!(a, b);

    let c = non_instance(&host, &a).unwrap();
    let d = non_module(&host, &non_instance(&host, &api_valid_names(&names, "pkg")).unwrap())
        .unwrap();
    assert_eq!(c, d);
}
