// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

use aws_config::{AppName, ConfigLoader, Region};
use aws_types::SdkConfig;

use super::error::ConfigLoadError;
use super::role::RoleAssumption;
use super::{max_retries, SessionConfig};

/// Application tag attached to the user agent of [`Session`] requests.
pub static USER_AGENT_TAG: &str = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION"));

/// A kind of handle produced from a [`SessionConfig`].
///
/// Retries, instrumentation and role assumption are applied identically for
/// every generation, implementations only decide the returned type.
pub trait SdkGeneration: Sized {
    /// Name used in error messages
    const KIND: &'static str;

    fn prepare(loader: ConfigLoader) -> Result<ConfigLoader, ConfigLoadError> {
        Ok(loader)
    }

    fn assemble(sdk_config: SdkConfig, config: &SessionConfig) -> Self;
}

impl SdkGeneration for SdkConfig {
    const KIND: &'static str = "config";

    fn assemble(sdk_config: SdkConfig, _config: &SessionConfig) -> Self {
        sdk_config
    }
}

/// Session handle carrying the configuration it was built from.
#[derive(Clone, Debug)]
pub struct Session {
    sdk_config: SdkConfig,
    profile: Option<String>,
    role_assumption: Option<RoleAssumption>,
}

impl Session {
    pub fn sdk_config(&self) -> &SdkConfig {
        &self.sdk_config
    }

    /// Shared config profile, `None` for the SDK default
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn region(&self) -> Option<&Region> {
        self.sdk_config.region()
    }

    pub fn max_retries(&self) -> Option<u32> {
        max_retries(&self.sdk_config)
    }

    pub fn role_assumption(&self) -> Option<&RoleAssumption> {
        self.role_assumption.as_ref()
    }
}

impl SdkGeneration for Session {
    const KIND: &'static str = "session";

    fn prepare(loader: ConfigLoader) -> Result<ConfigLoader, ConfigLoadError> {
        Ok(loader.app_name(AppName::new(USER_AGENT_TAG)?))
    }

    fn assemble(sdk_config: SdkConfig, config: &SessionConfig) -> Self {
        Self {
            sdk_config,
            profile: config.profile().map(str::to_owned),
            role_assumption: config.role_assumption(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_tag_is_a_valid_app_name() {
        let app_name = AppName::new(USER_AGENT_TAG).expect("valid app name");
        assert!(app_name.as_ref().starts_with("awsession-"));
    }
}
