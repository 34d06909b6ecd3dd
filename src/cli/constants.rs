// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

pub const DEFAULT_API_RETRIES: u32 = 3;

pub static DEFAULT_CONFIG_FILE: &str = "awsession.toml";

pub static LOG_ENV: &str = "AWSESSION_LOG";

pub static LOG_STYLE_ENV: &str = "AWSESSION_LOG_STYLE";
