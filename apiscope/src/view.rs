//! Selecting and rendering a view over discovered names.
//!
//! This is the library-level orchestration: validate configuration,
//! walk the package, apply the toggled filters, run the selected
//! pipeline, and hand back printable rows. Everything downstream of
//! here (argument parsing, file reading, printing) is thin glue in the
//! CLI crate.

use std::fmt;

use crate::aliases::{all_appearances, first_appearance};
use crate::error::{Error, Result};
use crate::filters::{api_valid_names, non_instance, non_module};
use crate::host::Host;
use crate::name::ImportPath;
use crate::ranking::{all_api_aliases, api_names, filter_by_in_api, ApiDirectories};
use crate::resolver::resolve;
use crate::walker::find_all_names;

/// Which pipeline runs last over the discovered mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The raw discovered mapping, untouched.
    Identity,
    /// One path per object: the shallowest appearance.
    First,
    /// Every appearance, grouped by canonical name.
    All,
    /// One path per object, preferring declared API directories.
    ApiNames,
    /// Only objects sitting directly inside a declared directory.
    InApi,
    /// Only objects whose best path is outside every declared directory.
    NotInApi,
    /// For each in-API representative, all its other aliases.
    AllApiAliases,
}

impl ViewMode {
    /// Whether this mode needs an API directory list to run.
    #[must_use]
    pub fn needs_api_directories(self) -> bool {
        matches!(
            self,
            Self::ApiNames | Self::InApi | Self::NotInApi | Self::AllApiAliases
        )
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identity => "identity",
            Self::First => "first",
            Self::All => "all",
            Self::ApiNames => "api-names",
            Self::InApi => "in-api",
            Self::NotInApi => "not-in-api",
            Self::AllApiAliases => "all-api-aliases",
        };
        write!(f, "{name}")
    }
}

/// Selection parameters for one run.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    /// The pipeline to run last.
    pub mode: ViewMode,
    /// Keep names outside the declared package surface (skips the
    /// api-valid filter).
    pub allow_non_api: bool,
    /// Drop names resolving to plain instances.
    pub hide_instances: bool,
    /// Keep names resolving to modules (skips the non-module filter).
    pub show_modules: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            mode: ViewMode::Identity,
            allow_non_api: false,
            hide_instances: false,
            show_modules: false,
        }
    }
}

/// One printable row of a view: a primary value, and for list-valued
/// views the related paths (in order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The primary column.
    pub primary: String,
    /// The secondary, list-valued column; `None` for single-column
    /// views (an empty list is a real, empty second column).
    pub related: Option<Vec<String>>,
}

impl Row {
    fn single(primary: String) -> Self {
        Self {
            primary,
            related: None,
        }
    }

    fn listed(primary: String, related: Vec<String>) -> Self {
        Self {
            primary,
            related: Some(related),
        }
    }
}

fn require_dirs(dirs: Option<&ApiDirectories>, mode: ViewMode) -> Result<&ApiDirectories> {
    match dirs {
        Some(d) if !d.is_empty() => Ok(d),
        _ => Err(Error::MissingApiDirectories {
            mode: mode.to_string(),
        }),
    }
}

/// Runs one full audit: traversal, filters, selected view.
///
/// Configuration is validated first: a directory-aware mode with no
/// (or an empty) directory list fails before any traversal work.
///
/// # Errors
///
/// Returns [`Error::MissingApiDirectories`] for the configuration
/// error above, and otherwise propagates traversal, resolution, and
/// ranking failures. A failure aborts the whole run; there is no
/// partial output.
pub fn run_view(
    host: &dyn Host,
    package: &str,
    options: &ViewOptions,
    api_dirs: Option<&ApiDirectories>,
) -> Result<Vec<Row>> {
    if options.mode.needs_api_directories() {
        require_dirs(api_dirs, options.mode)?;
    }

    let mut names = find_all_names(host, package)?;
    if !options.allow_non_api {
        names = api_valid_names(&names, package);
    }
    if options.hide_instances {
        names = non_instance(host, &names)?;
    }
    if !options.show_modules {
        names = non_module(host, &names)?;
    }
    log::debug!("{package}: {} names after filters", names.len());

    let rows = match options.mode {
        ViewMode::Identity => names
            .into_iter()
            .map(|(path, _)| Row::single(path.to_string()))
            .collect(),
        ViewMode::First => first_appearance(&names)
            .into_iter()
            .map(|(path, _)| Row::single(path.to_string()))
            .collect(),
        ViewMode::All => all_appearances(&names)
            .into_iter()
            .map(|(canonical, group)| {
                Row::listed(
                    canonical.to_string(),
                    group.iter().map(ImportPath::to_string).collect(),
                )
            })
            .collect(),
        ViewMode::ApiNames => {
            let dirs = require_dirs(api_dirs, options.mode)?;
            api_names(&names, dirs)?
                .into_iter()
                .map(|(path, _)| Row::single(path.to_string()))
                .collect()
        }
        ViewMode::InApi => {
            let dirs = require_dirs(api_dirs, options.mode)?;
            filter_by_in_api(&names, dirs, true)?
                .into_iter()
                .map(|(path, _)| Row::single(path.to_string()))
                .collect()
        }
        ViewMode::NotInApi => {
            let dirs = require_dirs(api_dirs, options.mode)?;
            filter_by_in_api(&names, dirs, false)?
                .into_iter()
                .map(|(path, _)| Row::single(path.to_string()))
                .collect()
        }
        ViewMode::AllApiAliases => {
            let dirs = require_dirs(api_dirs, options.mode)?;
            all_api_aliases(&names, dirs)?
                .into_iter()
                .map(|(path, others)| {
                    Row::listed(
                        path.to_string(),
                        others.iter().map(ImportPath::to_string).collect(),
                    )
                })
                .collect()
        }
    };
    Ok(rows)
}

/// Resolves every declared path, collecting failures instead of
/// stopping at the first. An empty result means the whole declared
/// surface resolves.
#[must_use]
pub fn verify_paths(host: &dyn Host, paths: &[ImportPath]) -> Vec<(ImportPath, Error)> {
    paths
        .iter()
        .filter_map(|path| match resolve(host, path) {
            Ok(_) => None,
            Err(err) => Some((path.clone(), err)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    fn sample_host() -> MemoryHost {
        let mut host = MemoryHost::new();
        let root = host.add_module("pkg");
        let api = host.add_module("pkg.api");
        let internal = host.add_module("pkg.internal");
        let foo = host.add_class("pkg.internal", "Foo");
        host.add_member(root, "api", api);
        host.add_member(root, "internal", internal);
        host.add_member(api, "Foo", foo);
        host.add_member(internal, "Foo", foo);
        host.register_package("pkg", root);
        host
    }

    fn primaries(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|row| row.primary.as_str()).collect()
    }

    #[test]
    fn test_identity_view_lists_filtered_paths() {
        let host = sample_host();
        let rows = run_view(&host, "pkg", &ViewOptions::default(), None).unwrap();
        // default filters drop modules, keep both class aliases
        assert_eq!(primaries(&rows), ["pkg.api.Foo", "pkg.internal.Foo"]);
    }

    #[test]
    fn test_show_modules_keeps_modules() {
        let host = sample_host();
        let options = ViewOptions {
            show_modules: true,
            ..ViewOptions::default()
        };
        let rows = run_view(&host, "pkg", &options, None).unwrap();
        assert_eq!(
            primaries(&rows),
            ["pkg.api", "pkg.internal", "pkg.api.Foo", "pkg.internal.Foo"]
        );
    }

    #[test]
    fn test_first_view_collapses_aliases() {
        let host = sample_host();
        let options = ViewOptions {
            mode: ViewMode::First,
            ..ViewOptions::default()
        };
        let rows = run_view(&host, "pkg", &options, None).unwrap();
        // both aliases have equal depth; discovery order decides
        assert_eq!(primaries(&rows), ["pkg.api.Foo"]);
    }

    #[test]
    fn test_all_view_is_two_columned() {
        let host = sample_host();
        let options = ViewOptions {
            mode: ViewMode::All,
            ..ViewOptions::default()
        };
        let rows = run_view(&host, "pkg", &options, None).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].primary, "pkg.internal.Foo");
        assert_eq!(
            rows[0].related.as_deref().unwrap(),
            ["pkg.api.Foo", "pkg.internal.Foo"]
        );
    }

    #[test]
    fn test_api_names_view_prefers_directories() {
        let host = sample_host();
        let options = ViewOptions {
            mode: ViewMode::ApiNames,
            ..ViewOptions::default()
        };
        let dirs = ApiDirectories::new(["pkg", "pkg.api"]);
        let rows = run_view(&host, "pkg", &options, Some(&dirs)).unwrap();
        assert_eq!(primaries(&rows), ["pkg.api.Foo"]);
    }

    #[test]
    fn test_directory_modes_fail_fast_without_directories() {
        // nonexistent package: the configuration check must fire first
        let host = MemoryHost::new();
        for mode in [
            ViewMode::ApiNames,
            ViewMode::InApi,
            ViewMode::NotInApi,
            ViewMode::AllApiAliases,
        ] {
            let options = ViewOptions {
                mode,
                ..ViewOptions::default()
            };
            let err = run_view(&host, "ghost", &options, None).unwrap_err();
            assert!(err.is_configuration(), "{mode} should fail fast");
        }
    }

    #[test]
    fn test_empty_directory_list_is_a_configuration_error() {
        let host = MemoryHost::new();
        let options = ViewOptions {
            mode: ViewMode::InApi,
            ..ViewOptions::default()
        };
        let dirs = ApiDirectories::from_lines("");
        let err = run_view(&host, "ghost", &options, Some(&dirs)).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_view_runs_are_idempotent() {
        let host = sample_host();
        let options = ViewOptions {
            mode: ViewMode::All,
            ..ViewOptions::default()
        };
        let first = run_view(&host, "pkg", &options, None).unwrap();
        let second = run_view(&host, "pkg", &options, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_verify_paths_collects_failures_in_order() {
        let host = sample_host();
        let paths: Vec<ImportPath> = ["pkg.api.Foo", "pkg.api.Bar", "other.Foo"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let failures = verify_paths(&host, &paths);
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].0.as_str(), "pkg.api.Bar");
        assert!(matches!(failures[0].1, Error::AttributeMissing { .. }));
        assert_eq!(failures[1].0.as_str(), "other.Foo");
        assert!(failures[1].1.is_load_failure());
    }

    #[test]
    fn test_verify_paths_empty_on_success() {
        let host = sample_host();
        let paths = vec!["pkg.api.Foo".parse().unwrap(), "pkg.api".parse().unwrap()];
        assert!(verify_paths(&host, &paths).is_empty());
    }
}
