// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

use std::fmt;

use aws_config::profile::ProfileFileLoadError;
use aws_types::app_name::InvalidAppName;
use thiserror::Error;

/// The SDK could not assemble a base configuration.
#[derive(Error, fmt::Debug)]
pub enum ConfigLoadError {
    #[error("cannot load shared configuration: {0}")]
    SharedConfig(#[from] ProfileFileLoadError),
    #[error("profile {0:?} does not exist in shared configuration")]
    ProfileNotFound(String),
    #[error("invalid user agent tag: {0}")]
    UserAgent(#[from] InvalidAppName),
}

#[derive(Error, fmt::Debug)]
#[error("instantiating AWS {kind}: {source}")]
pub struct SessionError {
    kind: &'static str,
    #[source]
    source: ConfigLoadError,
}

impl SessionError {
    pub fn new(kind: &'static str, source: ConfigLoadError) -> Self {
        Self { kind, source }
    }

    /// Handle generation that failed, `session` or `config`
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn load_error(&self) -> &ConfigLoadError {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_keeps_original_message() {
        let err = SessionError::new(
            "session",
            ConfigLoadError::ProfileNotFound("prod".to_owned()),
        );
        assert_eq!(
            err.to_string(),
            "instantiating AWS session: profile \"prod\" does not exist in shared configuration"
        );
        assert!(matches!(
            err.load_error(),
            ConfigLoadError::ProfileNotFound(name) if name == "prod"
        ));
    }
}
