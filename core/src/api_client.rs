//! Generic HTTP verb helper shared by every resource client.
//!
//! # Design
//! `ApiClient` knows the base URL, the default headers every request carries
//! (user agent, accept, and the bearer token once authenticated) and the
//! transport. It knows nothing about resources: resource clients hold one and
//! use the verbs they need. Verb methods return the raw `HttpResponse` and
//! never look at the status code.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};

pub const AUTHORIZATION: &str = "authorization";
pub const CONTENT_TYPE: &str = "content-type";
pub const APPLICATION_JSON: &str = "application/json";

/// Percent-encode `segment` for use as one path segment. Everything outside
/// `A-Z a-z 0-9 * - . _` is escaped, including `/`, `?` and `#`.
pub fn encode_path_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    headers: Vec<(String, String)>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(k, v)| {
                if k.eq_ignore_ascii_case(AUTHORIZATION) {
                    (k.as_str(), "<redacted>")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("headers", &headers)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client over a fresh blocking ureq transport.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(UreqTransport::from_config(config)))
    }

    pub fn with_transport(config: &ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers: vec![
                ("user-agent".to_string(), config.user_agent.clone()),
                ("accept".to_string(), APPLICATION_JSON.to_string()),
            ],
            transport,
        }
    }

    /// Set a default header, replacing any existing header of the same name.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_ascii_lowercase(), value.to_string()));
        self
    }

    pub fn with_bearer_token(self, token: &str) -> Self {
        self.with_header(AUTHORIZATION, &format!("Bearer {token}"))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Build a body-less request for `path` (which must start with `/`).
    pub fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            query: Vec::new(),
            headers: self.headers.clone(),
            body: None,
        }
    }

    /// Build a request carrying `body` serialized as JSON.
    pub fn json_request<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(body).map_err(ApiError::Serialization)?;
        let mut request = self.request(method, path);
        request
            .headers
            .push((CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()));
        request.body = Some(body);
        Ok(request)
    }

    /// Run a prepared request through the transport.
    pub fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let response = self.transport.execute(request)?;
        debug!(
            method = request.method.as_str(),
            url = %request.url,
            status = response.status,
            "request completed"
        );
        Ok(response)
    }

    pub fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<HttpResponse, ApiError> {
        let mut request = self.request(HttpMethod::Get, path);
        request.query = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.send(&request)
    }

    pub fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        let request = self.json_request(HttpMethod::Post, path, body)?;
        self.send(&request)
    }

    pub fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        let request = self.json_request(HttpMethod::Patch, path, body)?;
        self.send(&request)
    }

    pub fn delete(&self, path: &str) -> Result<HttpResponse, ApiError> {
        let request = self.request(HttpMethod::Delete, path);
        self.send(&request)
    }
}
