// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

use clap::{Parser, Subcommand};
use std::fmt;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build one session per profile and list them
    #[command(arg_required_else_help = false)]
    Sessions(Sessions),
    /// Build the default config and show it
    #[command(arg_required_else_help = false)]
    Config(ShowConfig),
    /// Ask STS who each session is
    #[command(arg_required_else_help = false)]
    Identity(Identity),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let command_name = match self {
            Command::Sessions(_) => "sessions",
            Command::Config(_) => "config",
            Command::Identity(_) => "identity",
        };
        write!(f, "{command_name}")
    }
}

#[derive(Parser, Debug)]
#[command(about = "Not shown")]
pub struct Sessions {}

#[derive(Parser, Debug)]
#[command(about = "Not shown")]
pub struct ShowConfig {}

#[derive(Parser, Debug)]
#[command(about = "Not shown")]
pub struct Identity {}
