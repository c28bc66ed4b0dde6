//! Blocking, typed client for the course-management REST API.
//!
//! # Overview
//! Resource clients build `HttpRequest` values, hand them to a `Transport`,
//! and interpret the `HttpResponse` that comes back. Every operation is one
//! request and one response; nothing is retried or cached.
//!
//! # Design
//! - `ApiClient` is the shared verb helper (base URL, default headers,
//!   transport). Resource clients hold one by composition.
//! - Each operation is exposed raw (`*_api`, returns the response with any
//!   status) and parsed (status-checked, JSON-decoded).
//! - `authentication::authenticated_api_client` logs in once and returns a
//!   client whose every request carries the bearer token.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api_client;
pub mod authentication;
pub mod config;
pub mod error;
pub mod exercises;
pub mod http;
pub mod transport;
pub mod types;
pub mod users;

#[cfg(test)]
mod testing;

pub use api_client::ApiClient;
pub use authentication::{authenticate, authenticated_api_client, AuthenticationClient};
pub use config::ClientConfig;
pub use error::ApiError;
pub use exercises::ExercisesClient;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{
    AuthenticatedUser, CreateExerciseRequest, CreateUserRequest, Exercise, ExerciseResponse,
    GetExercisesQuery, GetExercisesResponse, LoginRequest, LoginResponse, Token,
    UpdateExerciseRequest, User, UserResponse,
};
pub use users::UsersClient;
