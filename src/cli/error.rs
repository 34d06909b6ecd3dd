// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

use std::{fmt, io};

use aws_sdk_sts::error::{DisplayErrorContext, SdkError};
use aws_sdk_sts::operation::get_caller_identity::GetCallerIdentityError;

use crate::config::ParseConfigError;
use crate::session::SessionError;

use super::CliResult;

#[derive(thiserror::Error, fmt::Debug)]
pub enum CliError {
    #[error("ApiError: {} {1}", DisplayErrorContext(.0))]
    ApiError(SdkError<GetCallerIdentityError>, CliResult),
    #[error("BaseDirError: {0} {1}")]
    BaseDirError(xdg::BaseDirectoriesError, CliResult),
    #[error("ConfigurationError: {0} {1}")]
    ConfigurationError(ParseConfigError, CliResult),
    #[error("IoError: {0} {1}")]
    IoError(io::Error, CliResult),
    #[error("LogError: Cannot call set_logger more than once {1}")]
    LogError(log::SetLoggerError, CliResult),
    #[error("SessionError: {0} {1}")]
    SessionError(SessionError, CliResult),
}

impl CliError {
    pub fn result(&self) -> CliResult {
        match self {
            CliError::ApiError(_, result)
            | CliError::BaseDirError(_, result)
            | CliError::ConfigurationError(_, result)
            | CliError::IoError(_, result)
            | CliError::LogError(_, result)
            | CliError::SessionError(_, result) => *result,
        }
    }
}

impl From<CliError> for CliResult {
    fn from(error: CliError) -> Self {
        log::error!("{error}");
        error.result()
    }
}

impl From<ParseConfigError> for CliError {
    fn from(error: ParseConfigError) -> Self {
        match error {
            ParseConfigError::TomlDeError(_) => {
                CliError::ConfigurationError(error, CliResult::ConfigError)
            }
            ParseConfigError::IoError(err) => CliError::IoError(err, CliResult::IoError),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(error: io::Error) -> Self {
        CliError::IoError(error, CliResult::IoError)
    }
}

impl From<log::SetLoggerError> for CliError {
    fn from(error: log::SetLoggerError) -> Self {
        CliError::LogError(error, CliResult::LogError)
    }
}

impl From<SessionError> for CliError {
    fn from(error: SessionError) -> Self {
        CliError::SessionError(error, CliResult::SessionError)
    }
}

impl From<SdkError<GetCallerIdentityError>> for CliError {
    fn from(error: SdkError<GetCallerIdentityError>) -> Self {
        CliError::ApiError(error, CliResult::ApiError)
    }
}
