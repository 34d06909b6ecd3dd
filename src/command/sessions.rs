// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

use crate::cli::{CliError, Sessions};
use crate::config::AwsOptions;
use crate::session;

use super::Summary;

pub async fn perform_sessions(options: &AwsOptions, _sessions: &Sessions) -> Result<(), CliError> {
    log::info!("SESSIONS…");

    let sessions = session::create_sessions(options).await?;
    log::debug!("Built {count} session(s)", count = sessions.len());

    for (name, session) in &sessions {
        println!("{}", Summary::from_session(name, session));
    }
    Ok(())
}
