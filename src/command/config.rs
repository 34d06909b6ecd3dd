// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

use crate::cli::{CliError, ShowConfig};
use crate::config::AwsOptions;
use crate::session::{self, SessionConfig, DEFAULT_AWS_PROFILE};

use super::Summary;

pub async fn perform_config(options: &AwsOptions, _config: &ShowConfig) -> Result<(), CliError> {
    log::info!("CONFIG…");

    let sdk_config = session::create_default_config(options).await?;
    log::trace!("Using AWS config {sdk_config:?}");

    let role_assumption = SessionConfig::from(options).role_assumption();
    let summary = Summary {
        name: DEFAULT_AWS_PROFILE,
        region: sdk_config.region(),
        max_retries: session::max_retries(&sdk_config),
        role_assumption: role_assumption.as_ref(),
    };
    println!("{summary}");
    Ok(())
}
