// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

//! Build AWS SDK handles from a [`SessionConfig`].
//!
//! Every handle gets the instrumented HTTP client, the configured number of
//! retries and, when a role is configured, STS role assumption credentials.
//! Two handle generations exist, [`Session`] and [`SdkConfig`], built through
//! the same [`SessionBuilder::build`].

mod error;
mod generation;
mod role;
mod shared_config;

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_smithy_http_client::tls;
use aws_smithy_runtime_api::client::http::{HttpClient, SharedHttpClient};
use aws_smithy_runtime_api::shared::IntoShared;
use aws_types::SdkConfig;

use crate::config::AwsOptions;
use crate::instrument::{
    last_path_segment, InstrumentedHttpClient, RequestObserver, SharedRequestObserver,
};

pub use self::error::{ConfigLoadError, SessionError};
pub use self::generation::{SdkGeneration, Session, USER_AGENT_TAG};
pub use self::role::RoleAssumption;

/// Key of the single entry built when no profiles are requested.
pub static DEFAULT_AWS_PROFILE: &str = "default";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionConfig {
    pub assume_role: Option<String>,
    pub assume_role_external_id: Option<String>,
    pub api_retries: u32,
    pub profile: Option<String>,
    pub shared_config_files: Vec<PathBuf>,
    pub shared_credentials_files: Vec<PathBuf>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl SessionConfig {
    pub fn new(api_retries: u32) -> Self {
        Self {
            api_retries,
            ..Default::default()
        }
    }

    pub fn with_assume_role(self, role: impl Into<String>) -> Self {
        Self {
            assume_role: Some(role.into()),
            ..self
        }
    }

    pub fn with_external_id(self, external_id: impl Into<String>) -> Self {
        Self {
            assume_role_external_id: Some(external_id.into()),
            ..self
        }
    }

    pub fn with_profile(self, profile: impl Into<String>) -> Self {
        Self {
            profile: Some(profile.into()),
            ..self
        }
    }

    pub fn with_shared_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.shared_config_files.push(path.into());
        self
    }

    pub fn with_shared_credentials_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.shared_credentials_files.push(path.into());
        self
    }

    pub fn assume_role(&self) -> Option<&str> {
        non_empty(&self.assume_role)
    }

    pub fn external_id(&self) -> Option<&str> {
        non_empty(&self.assume_role_external_id)
    }

    pub fn profile(&self) -> Option<&str> {
        non_empty(&self.profile)
    }

    /// First attempt plus `api_retries` retries
    pub fn max_attempts(&self) -> u32 {
        self.api_retries.saturating_add(1)
    }

    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig::standard().with_max_attempts(self.max_attempts())
    }

    /// `None` unless a role is set, the external id is ignored without one.
    pub fn role_assumption(&self) -> Option<RoleAssumption> {
        self.assume_role()
            .map(|role| RoleAssumption::new(role, self.external_id().map(str::to_owned)))
    }
}

impl From<&AwsOptions> for SessionConfig {
    fn from(options: &AwsOptions) -> Self {
        Self {
            assume_role: options.assume_role.clone(),
            assume_role_external_id: options.assume_role_external_id.clone(),
            api_retries: options.api_retries,
            profile: None,
            shared_config_files: options.shared_config_files.clone(),
            shared_credentials_files: options.shared_credentials_files.clone(),
        }
    }
}

/// Maximum number of retries configured on `sdk_config`.
pub fn max_retries(sdk_config: &SdkConfig) -> Option<u32> {
    sdk_config
        .retry_config()
        .map(|retry_config| retry_config.max_attempts().saturating_sub(1))
}

/// An empty list and a list holding one empty name both mean "no profiles".
pub fn no_profiles(profiles: &[String]) -> bool {
    match profiles {
        [] => true,
        [profile] => profile.is_empty(),
        _ => false,
    }
}

fn default_https_client() -> SharedHttpClient {
    aws_smithy_http_client::Builder::new()
        .tls_provider(tls::Provider::Rustls(
            tls::rustls_provider::CryptoMode::AwsLc,
        ))
        .build_https()
}

#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    http_client: Option<SharedHttpClient>,
    observer: SharedRequestObserver,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport wrapped by the instrumented client, the SDK's rustls client
    /// if unset.
    pub fn http_client(self, http_client: impl HttpClient + 'static) -> Self {
        Self {
            http_client: Some(http_client.into_shared()),
            observer: self.observer,
        }
    }

    pub fn observer(self, observer: impl RequestObserver + 'static) -> Self {
        Self {
            http_client: self.http_client,
            observer: SharedRequestObserver::new(observer),
        }
    }

    fn instrumented_http_client(&self) -> InstrumentedHttpClient {
        let inner = match &self.http_client {
            Some(http_client) => http_client.clone(),
            None => default_https_client(),
        };
        InstrumentedHttpClient::new(inner)
            .with_path_processor(last_path_segment)
            .with_observer(self.observer.clone())
    }

    /// Build one handle honouring `config.profile`.
    pub async fn build<G: SdkGeneration>(&self, config: &SessionConfig) -> Result<G, SessionError> {
        self.load::<G>(config)
            .await
            .map_err(|err| SessionError::new(G::KIND, err))
    }

    async fn load<G: SdkGeneration>(&self, config: &SessionConfig) -> Result<G, ConfigLoadError> {
        let profile_files = shared_config::profile_files(
            &config.shared_config_files,
            &config.shared_credentials_files,
        );
        shared_config::validate(profile_files.as_ref(), config.profile()).await?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(config.retry_config())
            .http_client(self.instrumented_http_client());
        if let Some(profile) = config.profile() {
            loader = loader.profile_name(profile);
        }
        if let Some(profile_files) = profile_files {
            loader = loader.profile_files(profile_files);
        }
        let loader = G::prepare(loader)?;

        let sdk_config = loader.load().await;
        log::debug!(
            "Loaded AWS {kind} for profile {profile:?} in region {region:?}",
            kind = G::KIND,
            profile = config.profile().unwrap_or(DEFAULT_AWS_PROFILE),
            region = sdk_config.region(),
        );

        if config.assume_role().is_none() && config.external_id().is_some() {
            log::warn!("Ignoring assume role external id without a role to assume");
        }
        let sdk_config = match config.role_assumption() {
            Some(role_assumption) => role_assumption.install(sdk_config).await,
            None => sdk_config,
        };

        Ok(G::assemble(sdk_config, config))
    }

    /// Build one handle for the default profile, `config.profile` is ignored.
    pub async fn build_default<G: SdkGeneration>(
        &self,
        config: &SessionConfig,
    ) -> Result<G, SessionError> {
        let config = SessionConfig {
            profile: None,
            ..config.clone()
        };
        self.build(&config).await
    }

    /// Build one independent handle per distinct profile name.
    ///
    /// Without profiles the result holds the default handle under
    /// [`DEFAULT_AWS_PROFILE`]. A single failure fails the whole map.
    pub async fn build_for_profiles<G: SdkGeneration>(
        &self,
        config: &SessionConfig,
        profiles: &[String],
    ) -> Result<BTreeMap<String, G>, SessionError> {
        if no_profiles(profiles) {
            let handle = self.build_default(config).await?;
            return Ok(BTreeMap::from([(DEFAULT_AWS_PROFILE.to_owned(), handle)]));
        }

        let distinct: BTreeSet<&str> = profiles.iter().map(String::as_str).collect();
        let builds = distinct.into_iter().map(|profile| async move {
            let config = config.clone().with_profile(profile);
            let handle = self.build::<G>(&config).await?;
            Ok::<_, SessionError>((profile.to_owned(), handle))
        });
        let handles = futures::future::try_join_all(builds).await?;
        Ok(handles.into_iter().collect())
    }
}

/// Default config handle for process startup.
pub async fn create_default_config(options: &AwsOptions) -> Result<SdkConfig, SessionError> {
    SessionBuilder::new()
        .build_default(&SessionConfig::from(options))
        .await
}

/// Default session handle for process startup.
pub async fn create_default_session(options: &AwsOptions) -> Result<Session, SessionError> {
    SessionBuilder::new()
        .build_default(&SessionConfig::from(options))
        .await
}

/// One session per configured profile for process startup.
pub async fn create_sessions(
    options: &AwsOptions,
) -> Result<BTreeMap<String, Session>, SessionError> {
    SessionBuilder::new()
        .build_for_profiles(&SessionConfig::from(options), &options.profiles)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(profiles: &[&str]) -> Vec<String> {
        profiles.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn empty_profile_lists() {
        assert!(no_profiles(&[]));
        assert!(no_profiles(&names(&[""])));
        assert!(!no_profiles(&names(&["prod"])));
        assert!(!no_profiles(&names(&["", ""])));
        assert!(!no_profiles(&names(&["", "prod"])));
    }

    #[test]
    fn retries_map_to_attempts() {
        for retries in [0, 1, 3, 10] {
            let config = SessionConfig::new(retries);
            assert_eq!(config.max_attempts(), retries + 1);
            assert_eq!(config.retry_config().max_attempts(), retries + 1);
        }
        assert_eq!(SessionConfig::new(u32::MAX).max_attempts(), u32::MAX);
    }

    #[test]
    fn no_role_without_assume_role() {
        assert_eq!(SessionConfig::new(3).role_assumption(), None);
        assert_eq!(
            SessionConfig::new(3).with_assume_role("").role_assumption(),
            None
        );
        assert_eq!(
            SessionConfig::new(3)
                .with_external_id("ext")
                .role_assumption(),
            None
        );
    }

    #[test]
    fn role_without_external_id() {
        let config = SessionConfig::new(3)
            .with_assume_role("arn:aws:iam::123456789012:role/dns")
            .with_external_id("");
        assert_eq!(
            config.role_assumption(),
            Some(RoleAssumption::new("arn:aws:iam::123456789012:role/dns", None))
        );
    }

    #[test]
    fn role_with_external_id() {
        let config = SessionConfig::new(3)
            .with_assume_role("arn:aws:iam::123456789012:role/dns")
            .with_external_id("ext-1234");
        assert_eq!(
            config.role_assumption(),
            Some(RoleAssumption::new(
                "arn:aws:iam::123456789012:role/dns",
                Some("ext-1234".to_owned())
            ))
        );
    }

    #[test]
    fn empty_profile_means_default() {
        assert_eq!(SessionConfig::new(0).with_profile("").profile(), None);
        assert_eq!(
            SessionConfig::new(0).with_profile("prod").profile(),
            Some("prod")
        );
    }

    #[test]
    fn session_config_from_options() {
        let options = AwsOptions {
            assume_role: Some("arn:aws:iam::123456789012:role/dns".to_owned()),
            assume_role_external_id: Some("ext".to_owned()),
            api_retries: 7,
            profiles: names(&["a", "b"]),
            shared_config_files: vec![PathBuf::from("/etc/aws/config")],
            shared_credentials_files: vec![],
        };
        let config = SessionConfig::from(&options);
        assert_eq!(config.api_retries, 7);
        assert_eq!(config.profile(), None);
        assert_eq!(config.external_id(), Some("ext"));
        assert_eq!(config.shared_config_files, options.shared_config_files);
    }
}
