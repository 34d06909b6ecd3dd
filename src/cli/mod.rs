// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

pub mod constants;
pub mod error;
pub mod parse;
pub mod result;
mod subcommand;

use clap::{value_parser, Parser};
use std::path::PathBuf;

use self::parse::parse_role_arn;

pub use self::constants::DEFAULT_API_RETRIES;
pub use self::error::CliError;
pub use self::result::CliResult;
pub use self::subcommand::{Command, Identity, Sessions, ShowConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = clap::crate_description!())]
#[command(propagate_version = true)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file
    #[arg(
        short, long, value_parser = value_parser!(PathBuf),
        value_name = "FILE",
        help = "Configuration file (default: $XDG_CONFIG_HOME/awsession/awsession.toml)",
    )]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "ARN", value_parser = parse_role_arn, help = "IAM role to assume")]
    pub aws_assume_role: Option<String>,

    #[arg(
        long,
        value_name = "ID",
        help = "External id for the role assumption, ignored without --aws-assume-role"
    )]
    pub aws_assume_role_external_id: Option<String>,

    #[arg(long, value_name = "N", help = "Maximum number of retries for AWS API calls")]
    pub aws_api_retries: Option<u32>,

    #[arg(
        long,
        value_name = "PROFILE",
        action = clap::ArgAction::Append,
        help = "Shared configuration profile, may be given multiple times"
    )]
    pub aws_profile: Vec<String>,

    /// Print debug information verbosely
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Print debug information verbosely"
    )]
    pub debug: u8,

    /// Quiet mode
    #[arg(short, long, help = "Quiet mode")]
    pub quiet: bool,
}
