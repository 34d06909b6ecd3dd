// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

use aws_sdk_sts::error::SdkError;
use aws_sdk_sts::operation::get_caller_identity::{
    GetCallerIdentityError, GetCallerIdentityOutput,
};
use aws_sdk_sts::Client;

use crate::cli::{CliError, Identity};
use crate::config::AwsOptions;
use crate::session::{self, Session};

/// Ask STS who the credentials of `session` belong to.
pub async fn caller_identity(
    session: &Session,
) -> Result<GetCallerIdentityOutput, SdkError<GetCallerIdentityError>> {
    let client = Client::new(session.sdk_config());
    client.get_caller_identity().send().await
}

pub async fn perform_identity(options: &AwsOptions, _identity: &Identity) -> Result<(), CliError> {
    log::info!("IDENTITY…");

    let sessions = session::create_sessions(options).await?;

    for (name, session) in &sessions {
        let identity = caller_identity(session).await?;
        log::trace!("Caller identity for {name:?}: {identity:?}");
        println!(
            "{name}\taccount={account}\tarn={arn}",
            account = identity.account().unwrap_or("-"),
            arn = identity.arn().unwrap_or("-"),
        );
    }
    Ok(())
}
