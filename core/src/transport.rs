//! The I/O boundary.
//!
//! `Transport` is the one place a request leaves the process. Everything
//! above it works on `HttpRequest`/`HttpResponse` values. `UreqTransport`
//! runs requests on a blocking ureq agent; tests plug in their own
//! implementation.

use std::time::Duration;

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP exchange.
///
/// Implementations must return 4xx/5xx responses as `Ok` data and reserve
/// `Err` for failures where no response was received.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a `ureq::Agent`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    body_limit: u64,
}

impl UreqTransport {
    /// Transport with no cap on response body size.
    pub fn new(timeout: Option<Duration>) -> Self {
        // Status interpretation belongs to the caller, not the agent.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self {
            agent,
            body_limit: u64::MAX,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let mut transport = Self::new(config.timeout);
        if let Some(limit) = config.body_limit {
            transport.body_limit = limit;
        }
        transport
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.full_url()?;

        let mut builder = ureq::http::Request::builder()
            .method(request.method.as_str())
            .uri(url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let result = match &request.body {
            Some(body) => {
                let http_request = builder.body(body.clone()).map_err(ApiError::transport)?;
                self.agent.run(http_request)
            }
            None => {
                let http_request = builder.body(()).map_err(ApiError::transport)?;
                self.agent.run(http_request)
            }
        };
        let mut response = result.map_err(ApiError::transport)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.body_limit)
            .read_to_string()
            .map_err(ApiError::transport)?;

        debug!(status, bytes = body.len(), "response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
