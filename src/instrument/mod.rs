// Copyright The Awsession Authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE> or
// <http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT> or <http://opensource.org/licenses/MIT>, at your option.
//
// This file may not be copied, modified, or distributed except according
// to those terms.

//! HTTP client instrumentation.
//!
//! [`InstrumentedHttpClient`] wraps any SDK [`HttpClient`] and reports every
//! outgoing request to a [`RequestObserver`] using low-cardinality labels.

mod observer;

use std::{fmt, time::Instant};

use aws_smithy_runtime_api::client::http::{
    HttpClient, HttpConnector, HttpConnectorFuture, HttpConnectorSettings, SharedHttpClient,
    SharedHttpConnector,
};
use aws_smithy_runtime_api::client::orchestrator::HttpRequest;
use aws_smithy_runtime_api::client::runtime_components::RuntimeComponents;
use aws_smithy_runtime_api::shared::IntoShared;

pub use self::observer::{
    LogObserver, RequestLabels, RequestObserver, RequestRecord, SharedRequestObserver,
};

/// Reduces a request path to a metric/log label.
pub type PathProcessor = fn(&str) -> String;

/// Keep only the final segment of `path`.
///
/// Resource identifiers such as hosted zone ids live in the middle of API
/// paths, the final segment names the operation.
pub fn last_path_segment(path: &str) -> String {
    path.rsplit('/').next().unwrap_or_default().to_owned()
}

pub fn identity_path(path: &str) -> String {
    path.to_owned()
}

#[derive(Clone)]
pub struct InstrumentedHttpClient {
    inner: SharedHttpClient,
    path_processor: PathProcessor,
    observer: SharedRequestObserver,
}

impl InstrumentedHttpClient {
    pub fn new(inner: impl HttpClient + 'static) -> Self {
        Self {
            inner: inner.into_shared(),
            path_processor: identity_path,
            observer: SharedRequestObserver::new(LogObserver),
        }
    }

    pub fn with_path_processor(self, path_processor: PathProcessor) -> Self {
        Self {
            inner: self.inner,
            path_processor,
            observer: self.observer,
        }
    }

    pub fn with_observer(self, observer: SharedRequestObserver) -> Self {
        Self {
            inner: self.inner,
            path_processor: self.path_processor,
            observer,
        }
    }
}

impl fmt::Debug for InstrumentedHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstrumentedHttpClient")
            .field("inner", &self.inner)
            .field("observer", &self.observer)
            .finish_non_exhaustive()
    }
}

impl HttpClient for InstrumentedHttpClient {
    fn http_connector(
        &self,
        settings: &HttpConnectorSettings,
        components: &RuntimeComponents,
    ) -> SharedHttpConnector {
        InstrumentedConnector {
            inner: self.inner.http_connector(settings, components),
            path_processor: self.path_processor,
            observer: self.observer.clone(),
        }
        .into_shared()
    }
}

struct InstrumentedConnector {
    inner: SharedHttpConnector,
    path_processor: PathProcessor,
    observer: SharedRequestObserver,
}

impl fmt::Debug for InstrumentedConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstrumentedConnector")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl HttpConnector for InstrumentedConnector {
    fn call(&self, request: HttpRequest) -> HttpConnectorFuture {
        let labels = RequestLabels::new(request.method(), request.uri(), self.path_processor);
        let observer = self.observer.clone();
        let started = Instant::now();
        let response = self.inner.call(request);

        HttpConnectorFuture::new(async move {
            let result = response.await;
            let status = match &result {
                Ok(response) => Some(response.status().as_u16()),
                Err(err) => {
                    log::trace!("Request to {labels} failed: {err}");
                    None
                }
            };
            observer.observe(&RequestRecord {
                labels,
                status,
                duration: started.elapsed(),
            });
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use aws_smithy_http_client::test_util::capture_request;
    use aws_smithy_types::body::SdkBody;

    use super::*;

    #[derive(Debug, Default)]
    struct Recorder(Mutex<Vec<RequestRecord>>);

    impl RequestObserver for Arc<Recorder> {
        fn observe(&self, record: &RequestRecord) {
            self.0.lock().unwrap().push(record.clone());
        }
    }

    #[test]
    fn hosted_zone_path_reduces_to_operation() {
        assert_eq!(
            last_path_segment("/2013-04-01/hostedzone/ZABCDEF123/rrset"),
            "rrset"
        );
        assert_eq!(last_path_segment("/2013-04-01/hostedzone"), "hostedzone");
        assert_eq!(last_path_segment("/"), "");
        assert_eq!(last_path_segment(""), "");
        assert_eq!(last_path_segment("rrset"), "rrset");
    }

    #[tokio::test]
    async fn connector_reports_reduced_path() {
        let (capture, receiver) = capture_request(None);
        let recorder = Arc::new(Recorder::default());
        let connector = InstrumentedConnector {
            inner: SharedHttpConnector::new(capture),
            path_processor: last_path_segment,
            observer: SharedRequestObserver::new(recorder.clone()),
        };

        let mut request = HttpRequest::new(SdkBody::empty());
        request
            .set_uri("https://route53.amazonaws.com/2013-04-01/hostedzone/ZABCDEF123/rrset")
            .expect("valid uri");

        let response = connector.call(request).await.expect("captured response");
        assert_eq!(response.status().as_u16(), 200);

        let sent = receiver.expect_request();
        assert_eq!(
            sent.uri(),
            "https://route53.amazonaws.com/2013-04-01/hostedzone/ZABCDEF123/rrset"
        );

        let records = recorder.0.lock().unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.labels.path, "rrset");
        assert_eq!(record.labels.host, "route53.amazonaws.com");
        assert_eq!(record.labels.scheme, "https");
        assert_eq!(record.labels.method, "GET");
        assert_eq!(record.status, Some(200));
    }
}
