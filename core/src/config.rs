use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!("course-client/", env!("CARGO_PKG_VERSION"));

/// Immutable base configuration shared by every client built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Whole-request timeout handed to the transport. `None` leaves the
    /// transport's default in place.
    pub timeout: Option<Duration>,
    pub user_agent: String,
    /// Largest response body the transport will read, in bytes. `None` means
    /// unbounded.
    pub body_limit: Option<u64>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            body_limit: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_body_limit(mut self, bytes: u64) -> Self {
        self.body_limit = Some(bytes);
        self
    }
}
