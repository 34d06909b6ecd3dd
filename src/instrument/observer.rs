// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

use std::{fmt, sync::Arc, time::Duration};

use super::PathProcessor;

/// Labels of a single request, all of them low cardinality.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestLabels {
    pub scheme: String,
    pub host: String,
    pub method: String,
    pub path: String,
}

impl RequestLabels {
    pub fn new(method: &str, uri: &str, path_processor: PathProcessor) -> Self {
        match uri.parse::<http::Uri>() {
            Ok(uri) => Self {
                scheme: uri.scheme_str().unwrap_or_default().to_owned(),
                host: uri.host().unwrap_or_default().to_owned(),
                method: method.to_owned(),
                path: path_processor(uri.path()),
            },
            Err(err) => {
                log::trace!("Cannot parse request uri {uri:?}: {err}");
                Self {
                    method: method.to_owned(),
                    path: path_processor(uri),
                    ..Default::default()
                }
            }
        }
    }
}

impl fmt::Display for RequestLabels {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}://{}/…/{}",
            self.method, self.scheme, self.host, self.path
        )
    }
}

#[derive(Clone, Debug)]
pub struct RequestRecord {
    pub labels: RequestLabels,
    /// `None` when no response was received
    pub status: Option<u16>,
    pub duration: Duration,
}

pub trait RequestObserver: fmt::Debug + Send + Sync {
    fn observe(&self, record: &RequestRecord);
}

#[derive(Clone, Debug)]
pub struct SharedRequestObserver(Arc<dyn RequestObserver>);

impl SharedRequestObserver {
    pub fn new(observer: impl RequestObserver + 'static) -> Self {
        Self(Arc::new(observer))
    }

    pub fn observe(&self, record: &RequestRecord) {
        self.0.observe(record)
    }
}

impl Default for SharedRequestObserver {
    fn default() -> Self {
        Self::new(LogObserver)
    }
}

/// Emits one debug event per request.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl RequestObserver for LogObserver {
    fn observe(&self, record: &RequestRecord) {
        tracing::event!(
            tracing::Level::DEBUG,
            scheme = record.labels.scheme.as_str(),
            host = record.labels.host.as_str(),
            method = record.labels.method.as_str(),
            path = record.labels.path.as_str(),
            status = record.status,
            duration_ms = record.duration.as_millis() as u64,
            "aws api request"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::last_path_segment;

    #[test]
    fn labels_from_uri() {
        let labels = RequestLabels::new(
            "POST",
            "https://sts.us-east-1.amazonaws.com/?Action=AssumeRole",
            last_path_segment,
        );
        assert_eq!(
            labels,
            RequestLabels {
                scheme: "https".to_owned(),
                host: "sts.us-east-1.amazonaws.com".to_owned(),
                method: "POST".to_owned(),
                path: "".to_owned(),
            }
        );
    }

    #[test]
    fn labels_drop_query_and_identifiers() {
        let labels = RequestLabels::new(
            "GET",
            "https://route53.amazonaws.com/2013-04-01/hostedzone/Z1PA6795UKMFR9/rrset?maxitems=300",
            last_path_segment,
        );
        assert_eq!(labels.path, "rrset");
        assert_eq!(labels.to_string(), "GET https://route53.amazonaws.com/…/rrset");
    }

    #[test]
    fn unparsable_uri_keeps_reduced_raw_path() {
        let labels = RequestLabels::new("GET", "not a uri/at all", last_path_segment);
        assert_eq!(labels.path, "at all");
        assert_eq!(labels.host, "");
    }
}
