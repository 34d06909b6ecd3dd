// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

mod configfile;

use std::path::PathBuf;

use crate::cli::constants::{DEFAULT_API_RETRIES, DEFAULT_CONFIG_FILE};
use crate::cli::Cli;

pub use self::configfile::ConfigFile;
pub use self::configfile::{AwsSection, ParseConfigError};

/// Process-wide AWS options, the input of every session build.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AwsOptions {
    pub assume_role: Option<String>,
    pub assume_role_external_id: Option<String>,
    pub api_retries: u32,
    pub profiles: Vec<String>,
    pub shared_config_files: Vec<PathBuf>,
    pub shared_credentials_files: Vec<PathBuf>,
}

impl AwsOptions {
    /// Command line values win over the config file, field by field.
    pub fn merge(cli: &Cli, file: &ConfigFile) -> Self {
        let aws = &file.aws;
        Self {
            assume_role: cli.aws_assume_role.clone().or_else(|| aws.assume_role.clone()),
            assume_role_external_id: cli
                .aws_assume_role_external_id
                .clone()
                .or_else(|| aws.assume_role_external_id.clone()),
            api_retries: cli
                .aws_api_retries
                .or(aws.api_retries)
                .unwrap_or(DEFAULT_API_RETRIES),
            profiles: if cli.aws_profile.is_empty() {
                aws.profiles.clone().unwrap_or_default()
            } else {
                cli.aws_profile.clone()
            },
            shared_config_files: aws.shared_config_files.clone(),
            shared_credentials_files: aws.shared_credentials_files.clone(),
        }
    }
}

pub struct Config {
    pub base: xdg::BaseDirectories,
    pub cli: Cli,
    pub file: ConfigFile,
}

impl Config {
    pub fn new(base: xdg::BaseDirectories, cli: Cli, file: ConfigFile) -> Self {
        Self { base, cli, file }
    }

    /// Read the config file given on the command line or, if it exists, the
    /// one in the XDG config directory.
    pub fn load(base: xdg::BaseDirectories, cli: Cli) -> Result<Self, ParseConfigError> {
        let file = match &cli.config {
            Some(path) => ConfigFile::new(path)?,
            None => match base.find_config_file(DEFAULT_CONFIG_FILE) {
                Some(path) => ConfigFile::new(&path)?,
                None => {
                    log::debug!("No configuration file {DEFAULT_CONFIG_FILE} found, using defaults");
                    ConfigFile::default()
                }
            },
        };
        Ok(Self::new(base, cli, file))
    }

    pub fn aws_options(&self) -> AwsOptions {
        AwsOptions::merge(&self.cli, &self.file)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use clap::Parser;

    use super::*;

    fn file() -> ConfigFile {
        ConfigFile::from_str(
            r#"[aws]
assume_role = "arn:aws:iam::123456789012:role/file"
api_retries = 5
profiles = ["prod", "staging"]
"#,
        )
        .expect("valid config")
    }

    #[test]
    fn defaults_without_file_or_flags() {
        let cli = Cli::parse_from(["awsession", "config"]);
        let options = AwsOptions::merge(&cli, &ConfigFile::default());
        assert_eq!(
            options,
            AwsOptions {
                api_retries: DEFAULT_API_RETRIES,
                ..Default::default()
            }
        );
    }

    #[test]
    fn file_values_are_used() {
        let cli = Cli::parse_from(["awsession", "sessions"]);
        let options = AwsOptions::merge(&cli, &file());
        assert_eq!(
            options.assume_role.as_deref(),
            Some("arn:aws:iam::123456789012:role/file")
        );
        assert_eq!(options.api_retries, 5);
        assert_eq!(options.profiles, vec!["prod", "staging"]);
    }

    #[test]
    fn flags_override_file() {
        let cli = Cli::parse_from([
            "awsession",
            "--aws-assume-role",
            "arn:aws:iam::123456789012:role/flag",
            "--aws-api-retries",
            "0",
            "--aws-profile",
            "dev",
            "sessions",
        ]);
        let options = AwsOptions::merge(&cli, &file());
        assert_eq!(
            options.assume_role.as_deref(),
            Some("arn:aws:iam::123456789012:role/flag")
        );
        assert_eq!(options.api_retries, 0);
        assert_eq!(options.profiles, vec!["dev"]);
    }
}
