// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

pub mod config;
pub mod identity;
pub mod sessions;

use std::fmt;

use aws_config::Region;

use crate::session::{RoleAssumption, Session};

/// One line of command output describing a handle.
#[derive(Debug)]
pub struct Summary<'a> {
    pub name: &'a str,
    pub region: Option<&'a Region>,
    pub max_retries: Option<u32>,
    pub role_assumption: Option<&'a RoleAssumption>,
}

impl<'a> Summary<'a> {
    pub fn from_session(name: &'a str, session: &'a Session) -> Self {
        Self {
            name,
            region: session.region(),
            max_retries: session.max_retries(),
            role_assumption: session.role_assumption(),
        }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\tregion=", self.name)?;
        match self.region {
            Some(region) => write!(f, "{region}")?,
            None => write!(f, "-")?,
        }
        write!(f, "\tmax_retries=")?;
        match self.max_retries {
            Some(max_retries) => write!(f, "{max_retries}")?,
            None => write!(f, "-")?,
        }
        match self.role_assumption {
            Some(role) => write!(f, "\trole={}", role.role_arn),
            None => write!(f, "\trole=-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line() {
        let region = Region::from_static("eu-central-1");
        let role = RoleAssumption::new(
            "arn:aws:iam::123456789012:role/dns",
            Some("secret".to_owned()),
        );
        let summary = Summary {
            name: "prod",
            region: Some(&region),
            max_retries: Some(3),
            role_assumption: Some(&role),
        };
        assert_eq!(
            summary.to_string(),
            "prod\tregion=eu-central-1\tmax_retries=3\trole=arn:aws:iam::123456789012:role/dns"
        );

        let summary = Summary {
            name: "default",
            region: None,
            max_retries: None,
            role_assumption: None,
        };
        assert_eq!(
            summary.to_string(),
            "default\tregion=-\tmax_retries=-\trole=-"
        );
    }
}
