//! Command dispatch logic for rubric
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rubric_core::config::{RubricConfig, CONFIG_FILE};
use rubric_core::error::Result;
use rubric_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    trace_time!(start, "resolve_root");

    match &cli.command {
        Commands::Extract { file, dialect } => commands::extract::execute(cli, file, *dialect),

        Commands::Update { assignment, repo } => {
            let config = load_config(cli, &root)?;
            commands::update::execute(cli, &root, &config, assignment, repo.as_deref())
        }

        Commands::Show { assignment } => {
            let config = load_config(cli, &root)?;
            commands::show::execute(cli, &root, &config, assignment)
        }

        Commands::List => {
            let config = load_config(cli, &root)?;
            commands::list::execute(cli, &root, &config)
        }
    }
}

/// An explicit `--config` must exist; the default location may be absent
fn load_config(cli: &Cli, root: &Path) -> Result<RubricConfig> {
    match &cli.config {
        Some(path) => RubricConfig::load(path),
        None => RubricConfig::load_or_default(&root.join(CONFIG_FILE)),
    }
}
