//! Login and the authenticated-client factory.
//!
//! A token is obtained once per factory call and attached verbatim as
//! `Authorization: Bearer <accessToken>`. Expiry and refresh belong to the
//! upstream authentication service.

use tracing::{debug, info};

use crate::api_client::ApiClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AuthenticatedUser, LoginRequest, LoginResponse};

pub const LOGIN_PATH: &str = "/api/v1/authentication/login";

/// Client for the public authentication endpoints.
#[derive(Debug, Clone)]
pub struct AuthenticationClient {
    api: ApiClient,
}

impl AuthenticationClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn build_login(&self, input: &LoginRequest) -> Result<HttpRequest, ApiError> {
        self.api.json_request(HttpMethod::Post, LOGIN_PATH, input)
    }

    pub fn login_api(&self, input: &LoginRequest) -> Result<HttpResponse, ApiError> {
        self.api.send(&self.build_login(input)?)
    }

    pub fn parse_login(&self, response: HttpResponse) -> Result<LoginResponse, ApiError> {
        response.error_for_status()?.json()
    }

    pub fn login(&self, input: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self.parse_login(self.login_api(input)?)?;
        debug!(email = %input.email, token_type = %response.token.token_type, "logged in");
        Ok(response)
    }
}

/// Log in with `user` through `api` and return a copy of `api` carrying the
/// bearer token.
pub fn authenticate(api: &ApiClient, user: &AuthenticatedUser) -> Result<ApiClient, ApiError> {
    let login = AuthenticationClient::new(api.clone()).login(&LoginRequest::from(user))?;
    info!(email = %user.email, "authenticated api client ready");
    Ok(api.clone().with_bearer_token(&login.token.access_token))
}

/// Build an `ApiClient` over the default transport whose every request
/// carries a bearer token for `user`.
pub fn authenticated_api_client(
    config: &ClientConfig,
    user: &AuthenticatedUser,
) -> Result<ApiClient, ApiError> {
    authenticate(&ApiClient::new(config), user)
}
