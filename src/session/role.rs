// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

use std::fmt;

use aws_config::sts::AssumeRoleProvider;
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_types::SdkConfig;

/// Role to assume on top of the base credential chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleAssumption {
    pub role_arn: String,
    pub external_id: Option<String>,
}

impl RoleAssumption {
    pub fn new(role_arn: impl Into<String>, external_id: Option<String>) -> Self {
        Self {
            role_arn: role_arn.into(),
            external_id,
        }
    }

    /// STS backed credentials using the credentials of `sdk_config` as source.
    ///
    /// Nothing is sent to STS here, credentials are fetched on first use and
    /// refreshed by the SDK identity cache.
    pub async fn credentials_provider(&self, sdk_config: &SdkConfig) -> SharedCredentialsProvider {
        log::info!("Assuming role: {self}");
        let mut builder = AssumeRoleProvider::builder(self.role_arn.clone()).configure(sdk_config);
        if let Some(external_id) = &self.external_id {
            builder = builder.external_id(external_id.clone());
        }
        SharedCredentialsProvider::new(builder.build().await)
    }

    pub async fn install(&self, sdk_config: SdkConfig) -> SdkConfig {
        let credentials_provider = self.credentials_provider(&sdk_config).await;
        sdk_config
            .to_builder()
            .credentials_provider(credentials_provider)
            .build()
    }
}

impl fmt::Display for RoleAssumption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.external_id {
            Some(external_id) => write!(f, "{} with external id {external_id}", self.role_arn),
            None => write!(f, "{}", self.role_arn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_external_id_only_when_set() {
        let role = RoleAssumption::new("arn:aws:iam::123456789012:role/dns", None);
        assert_eq!(role.to_string(), "arn:aws:iam::123456789012:role/dns");

        let role = RoleAssumption::new(
            "arn:aws:iam::123456789012:role/dns",
            Some("ext-1234".to_owned()),
        );
        assert_eq!(
            role.to_string(),
            "arn:aws:iam::123456789012:role/dns with external id ext-1234"
        );
    }
}
