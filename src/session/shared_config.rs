// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

use std::borrow::Cow;
use std::path::PathBuf;

use aws_config::profile::ProfileFileLoadError;
use aws_runtime::env_config::file::{EnvConfigFileKind, EnvConfigFiles};
use aws_runtime::env_config::section::EnvConfigSections;

use super::error::ConfigLoadError;

/// Shared config files replacing the SDK defaults, `None` keeps the defaults.
pub(crate) fn profile_files(
    config: &[PathBuf],
    credentials: &[PathBuf],
) -> Option<EnvConfigFiles> {
    if config.is_empty() && credentials.is_empty() {
        return None;
    }
    let mut builder = EnvConfigFiles::builder()
        .include_default_config_file(config.is_empty())
        .include_default_credentials_file(credentials.is_empty());
    for path in config {
        builder = builder.with_file(EnvConfigFileKind::Config, path.clone());
    }
    for path in credentials {
        builder = builder.with_file(EnvConfigFileKind::Credentials, path.clone());
    }
    Some(builder.build())
}

/// Read and parse `files` from the real environment.
///
/// The filesystem and environment shims are internal to the SDK and only
/// used here.
async fn load_profiles(
    files: &EnvConfigFiles,
    profile: Option<&str>,
) -> Result<EnvConfigSections, ProfileFileLoadError> {
    use aws_types::os_shim_internal::{Env, Fs};

    let selected = profile.map(|name| Cow::Owned(name.to_owned()));
    aws_config::profile::load(&Fs::real(), &Env::real(), files, selected).await
}

/// Parse the shared config files eagerly.
///
/// The SDK only reports broken shared config once credentials are first
/// resolved, a session must not be handed out in that state. A named profile
/// has to exist in one of the files.
pub(crate) async fn validate(
    profile_files: Option<&EnvConfigFiles>,
    profile: Option<&str>,
) -> Result<(), ConfigLoadError> {
    let default_files = EnvConfigFiles::default();
    let sections = load_profiles(profile_files.unwrap_or(&default_files), profile).await?;

    if let Some(name) = profile {
        if sections.get_profile(name).is_none() {
            return Err(ConfigLoadError::ProfileNotFound(name.to_owned()));
        }
        log::trace!("Found profile {name:?} in shared configuration");
    }
    Ok(())
}
