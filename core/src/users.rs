//! Client for `/api/v1/users`.

use crate::api_client::ApiClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AuthenticatedUser, CreateUserRequest, UserResponse};

pub const USERS_PATH: &str = "/api/v1/users";
pub const USERS_ME_PATH: &str = "/api/v1/users/me";

#[derive(Debug, Clone)]
pub struct UsersClient {
    api: ApiClient,
}

impl UsersClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn authenticated(config: &ClientConfig, user: &AuthenticatedUser) -> Result<Self, ApiError> {
        let api = crate::authentication::authenticated_api_client(config, user)?;
        Ok(Self::new(api))
    }

    pub fn build_get_user_me(&self) -> HttpRequest {
        self.api.request(HttpMethod::Get, USERS_ME_PATH)
    }

    /// Registration is public; no token is needed.
    pub fn build_create_user(&self, input: &CreateUserRequest) -> Result<HttpRequest, ApiError> {
        self.api.json_request(HttpMethod::Post, USERS_PATH, input)
    }

    pub fn get_user_me_api(&self) -> Result<HttpResponse, ApiError> {
        self.api.send(&self.build_get_user_me())
    }

    pub fn create_user_api(&self, input: &CreateUserRequest) -> Result<HttpResponse, ApiError> {
        self.api.send(&self.build_create_user(input)?)
    }

    pub fn parse_user(&self, response: HttpResponse) -> Result<UserResponse, ApiError> {
        response.error_for_status()?.json()
    }

    pub fn get_user_me(&self) -> Result<UserResponse, ApiError> {
        self.parse_user(self.get_user_me_api()?)
    }

    pub fn create_user(&self, input: &CreateUserRequest) -> Result<UserResponse, ApiError> {
        self.parse_user(self.create_user_api(input)?)
    }
}
