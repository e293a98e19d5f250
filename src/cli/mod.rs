//! Command-line interface layer.

use std::env;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::{
    commands::{init, run_check},
    config::{Config, load_config},
    reporter,
};

mod args;
mod exit_status;

pub use args::{Arguments, CheckCommand, Command, CommonArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => {
            init()?;
            println!(
                "{} Created {}",
                reporter::SUCCESS_MARK.green(),
                crate::config::CONFIG_FILE_NAME
            );
            Ok(ExitStatus::Success)
        }
        None => unreachable!("with_command_or_help returned Some without a command"),
    }
}

fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;

    let verbose = cmd.common.verbose;
    if verbose && !loaded.from_file {
        eprintln!(
            "{} no {} found, using defaults",
            "info:".bold(),
            crate::config::CONFIG_FILE_NAME
        );
    }

    let config = apply_overrides(loaded.config, &cmd.common);
    let outcome = run_check(&config, &cmd.rules, verbose)?;

    if outcome.is_clean() {
        reporter::print_success(outcome.source_files_checked, outcome.locale_files_checked);
        Ok(ExitStatus::Success)
    } else {
        reporter::print_report(&outcome.issues);
        Ok(ExitStatus::Failure)
    }
}

/// CLI flags take precedence over config file values.
fn apply_overrides(mut config: Config, common: &CommonArgs) -> Config {
    if let Some(locale) = &common.primary_locale {
        config.primary_locale = locale.clone();
    }
    if let Some(root) = &common.source_root {
        config.source_root = root.to_string_lossy().to_string();
    }
    if let Some(root) = &common.locales_root {
        config.locales_root = root.to_string_lossy().to_string();
    }
    config
}
