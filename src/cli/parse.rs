// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

/// Accepts an IAM role ARN, or the empty string for "no role".
pub(crate) fn parse_role_arn(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Ok(String::new());
    }
    let parts: Vec<&str> = s.splitn(6, ':').collect();
    match parts.as_slice() {
        ["arn", partition, "iam", "", account, resource]
            if !partition.is_empty() && !account.is_empty() && resource.starts_with("role/") =>
        {
            Ok(s.to_owned())
        }
        _ => Err(format!(
            "Cannot parse role {s:?}: expected arn:<partition>:iam::<account>:role/<name>"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_arns() {
        assert_eq!(parse_role_arn(""), Ok(String::new()));
        assert!(parse_role_arn("arn:aws:iam::123456789012:role/dns").is_ok());
        assert!(parse_role_arn("arn:aws-cn:iam::123456789012:role/path/to/dns").is_ok());
        assert!(parse_role_arn("arn:aws:iam::123456789012:user/dns").is_err());
        assert!(parse_role_arn("arn:aws:sts::123456789012:role/dns").is_err());
        assert!(parse_role_arn("dns").is_err());
    }
}
