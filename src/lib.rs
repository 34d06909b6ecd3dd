// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

pub mod cli;
pub mod command;
pub mod config;
pub mod instrument;
pub mod session;

use cli::constants::{LOG_ENV, LOG_STYLE_ENV};
use cli::error::CliError;
use cli::CliResult;
use cli::{Cli, Command};
pub use config::{AwsOptions, Config};
use log::log_enabled;
pub use session::{Session, SessionBuilder, SessionConfig};

use crate::command::{config as show_config, identity, sessions};

pub fn base_directory_profile() -> Result<xdg::BaseDirectories, CliError> {
    match xdg::BaseDirectories::with_prefix(clap::crate_name!()) {
        Ok(base_dirs) => Ok(base_dirs),
        Err(err) => Err(CliError::BaseDirError(err, CliResult::ConfigError)),
    }
}

pub fn setup(debug: u8, quiet: bool) -> Result<(), CliError> {
    // setup logger using environment
    let env = env_logger::Env::new()
        .filter(LOG_ENV)
        .write_style(LOG_STYLE_ENV);

    env_logger::try_init_from_env(env)?;

    match debug {
        1 if !log_enabled!(log::Level::Debug) => {
            log::set_max_level(log::LevelFilter::Debug);
        }
        (2..) if !log_enabled!(log::Level::Trace) => {
            log::set_max_level(log::LevelFilter::Trace);
        }
        _ => { /* 1 and debug-enabled or 0, 2.. and trace-enabled: noop */ }
    }

    // prioritize quiet
    if quiet && log_enabled!(log::Level::Warn) {
        log::set_max_level(log::LevelFilter::Error);
    }

    Ok(())
}

pub fn log_versions() {
    log::debug!(
        "awsession version {version:?}",
        version = clap::crate_version!()
    );
    log::debug!(
        "aws_sdk_sts version {version:?}",
        version = aws_sdk_sts::meta::PKG_VERSION
    );
    log::debug!(
        "aws_types version {version:?}",
        version = aws_types::build_metadata::BUILD_METADATA.core_pkg_version
    );
}

/// Print clap's message and exit, `--help` and `--version` are no errors.
pub fn on_clap_error(err: clap::Error) -> Cli {
    let result = if err.use_stderr() {
        CliResult::Usage
    } else {
        CliResult::Ok
    };
    if let Err(print_err) = err.print() {
        eprintln!("{print_err}");
    }
    std::process::exit(result as i32)
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    log_versions();

    let base = base_directory_profile()?;
    let config = Config::load(base, cli)?;
    let options = config.aws_options();
    log::trace!("Using AWS options {options:?}");

    // session construction and API calls stay on this thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        match &config.cli.command {
            Command::Sessions(cmd) => sessions::perform_sessions(&options, cmd).await,
            Command::Config(cmd) => show_config::perform_config(&options, cmd).await,
            Command::Identity(cmd) => identity::perform_identity(&options, cmd).await,
        }
    })
}
