//! Main entry point for the apiscope CLI.
//!
//! Audits the exported API surface of a package: walks the package's
//! manifest graph, applies the selected filters, and prints one row
//! per surviving name. With `--verify`, checks instead that every path
//! declared in the api file actually resolves.

mod cli;
mod error;

use std::fs;

use apiscope::{run_view, verify_paths, ApiDirectories, ImportPath, ManifestHost, ViewOptions};
use clap::Parser;
use cli::Cli;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    let _logger = apiscope::init_logger(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    // Read the api file up front so a bad path fails before any
    // traversal work.
    let api_text = match &cli.api_file {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };

    let host = ManifestHost::new(&cli.package_root);

    if cli.verify {
        let text = api_text
            .ok_or_else(|| CliError::Config("--verify requires --api-file".to_string()))?;
        return verify(&host, &text);
    }

    let api_dirs = api_text.as_deref().map(ApiDirectories::from_lines);
    let options = ViewOptions {
        mode: cli.view.into(),
        allow_non_api: cli.allow_non_api,
        hide_instances: cli.hide_instances,
        show_modules: cli.show_modules,
    };

    let rows = run_view(&host, &cli.package, &options, api_dirs.as_ref())?;
    for row in rows {
        match row.related {
            Some(related) if !related.is_empty() => {
                println!("{} {}", row.primary, related.join(" "));
            }
            _ => println!("{}", row.primary),
        }
    }
    Ok(())
}

fn verify(host: &ManifestHost, api_text: &str) -> Result<(), CliError> {
    let paths = api_text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.trim()
                .parse::<ImportPath>()
                .map_err(|e| CliError::InvalidArguments(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let failures = verify_paths(host, &paths);
    if failures.is_empty() {
        return Ok(());
    }
    for (path, err) in &failures {
        eprintln!("{path}: {err}");
    }
    Err(CliError::VerificationFailed(failures.len()))
}
