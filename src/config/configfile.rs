// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

use serde_derive::Deserialize;
use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub aws: AwsSection,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AwsSection {
    pub assume_role: Option<String>,
    pub assume_role_external_id: Option<String>,
    pub api_retries: Option<u32>,
    pub profiles: Option<Vec<String>>,
    #[serde(default)]
    pub shared_config_files: Vec<PathBuf>,
    #[serde(default)]
    pub shared_credentials_files: Vec<PathBuf>,
}

#[derive(Error, Debug)]
pub enum ParseConfigError {
    #[error("TOML deserialization error: {0}")]
    TomlDeError(#[from] toml::de::Error),
    #[error("IoError: {0}")]
    IoError(#[from] io::Error),
}

impl FromStr for ConfigFile {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config = toml::from_str::<ConfigFile>(s)?;
        Ok(config)
    }
}

impl ConfigFile {
    pub fn new(path: &Path) -> Result<Self, ParseConfigError> {
        let mut file = File::open(path).map_err(ParseConfigError::from)?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)
            .map_err(ParseConfigError::from)?;
        log::info!("Reading configuration file {path:?}");
        ConfigFile::from_str(&buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_config_file() {
        let config_str = r#"[aws]
assume_role = "arn:aws:iam::123456789012:role/dns"
assume_role_external_id = "ext-1234"
api_retries = 5
profiles = ["prod", "staging"]
shared_config_files = ["/etc/aws/config"]
"#;

        let config = ConfigFile::from_str(config_str).expect("should work as is");
        let aws = AwsSection {
            assume_role: Some("arn:aws:iam::123456789012:role/dns".to_owned()),
            assume_role_external_id: Some("ext-1234".to_owned()),
            api_retries: Some(5),
            profiles: Some(vec!["prod".to_owned(), "staging".to_owned()]),
            shared_config_files: vec![PathBuf::from("/etc/aws/config")],
            shared_credentials_files: vec![],
        };
        assert_eq!(config.aws, aws);
    }

    #[test]
    fn empty_config_file() {
        let config = ConfigFile::from_str("").expect("empty file is fine");
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn negative_retries_are_rejected() {
        let err = ConfigFile::from_str("[aws]\napi_retries = -1\n").expect_err("negative");
        assert!(matches!(err, ParseConfigError::TomlDeError(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ConfigFile::from_str("[aws]\nregion = \"eu-west-1\"\n").expect_err("unknown");
        assert!(matches!(err, ParseConfigError::TomlDeError(_)));
    }
}
