//! CLI structure and argument definitions.
//!
//! This module defines the command-line surface using clap's derive
//! macros. There is one operation (audit a package) parameterized by a
//! view and a handful of filter toggles, so no subcommands.

use std::path::PathBuf;

use apiscope::ViewMode;
use clap::{Parser, ValueEnum};

/// Command-line tool for auditing a package's exported API surface.
#[derive(Parser)]
#[command(name = "apiscope")]
#[command(version, about = "Audit the exported API surface of a package", long_about = None)]
pub struct Cli {
    /// Dotted name of the package to audit
    pub package: String,

    /// View to run over the discovered names
    #[arg(long, value_enum, default_value = "identity")]
    pub view: ViewArg,

    /// File listing API directories, one dotted prefix per line
    #[arg(long, value_name = "PATH")]
    pub api_file: Option<PathBuf>,

    /// Directory containing package manifests
    #[arg(long, value_name = "DIR", default_value = ".", env = "APISCOPE_PACKAGE_ROOT")]
    pub package_root: PathBuf,

    /// Keep names outside the declared package surface
    #[arg(long)]
    pub allow_non_api: bool,

    /// Drop names resolving to plain instances
    #[arg(long)]
    pub hide_instances: bool,

    /// Keep names resolving to modules
    #[arg(long)]
    pub show_modules: bool,

    /// Verify that every path in the api file resolves, instead of
    /// running a view
    #[arg(long)]
    pub verify: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,
}

/// The selectable views, in CLI spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    /// Every discovered path
    Identity,
    /// One path per object, shallowest first seen
    First,
    /// Every path, grouped by canonical name
    All,
    /// One path per object, preferring API directories
    ApiNames,
    /// Only direct members of API directories
    InApi,
    /// Only objects whose best path is outside the API directories
    NotInApi,
    /// Every other alias of each in-API name
    AllApiAliases,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Identity => ViewMode::Identity,
            ViewArg::First => ViewMode::First,
            ViewArg::All => ViewMode::All,
            ViewArg::ApiNames => ViewMode::ApiNames,
            ViewArg::InApi => ViewMode::InApi,
            ViewArg::NotInApi => ViewMode::NotInApi,
            ViewArg::AllApiAliases => ViewMode::AllApiAliases,
        }
    }
}
