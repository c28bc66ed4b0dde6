//! Typed client for the `/api/v1/exercises` resource.
//!
//! # Design
//! Each CRUD operation comes in four pieces:
//! - `build_*` produces the `HttpRequest` without touching the network;
//! - `*_api` sends it and hands back the raw `HttpResponse`, so tests can
//!   assert on status codes and headers;
//! - `parse_*` checks for a 2xx status and decodes the body;
//! - the plain-named method chains `*_api` and `parse_*`.
//!
//! The client holds an `ApiClient` and carries no other state.

use tracing::debug;

use crate::api_client::{encode_path_segment, ApiClient};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    AuthenticatedUser, CreateExerciseRequest, ExerciseResponse, GetExercisesQuery,
    GetExercisesResponse, UpdateExerciseRequest,
};

pub const EXERCISES_PATH: &str = "/api/v1/exercises";

fn exercise_path(exercise_id: &str) -> String {
    format!("{EXERCISES_PATH}/{}", encode_path_segment(exercise_id))
}

#[derive(Debug, Clone)]
pub struct ExercisesClient {
    api: ApiClient,
}

impl ExercisesClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Log in as `user` and return a client whose requests carry the bearer
    /// token.
    pub fn authenticated(config: &ClientConfig, user: &AuthenticatedUser) -> Result<Self, ApiError> {
        let api = crate::authentication::authenticated_api_client(config, user)?;
        Ok(Self::new(api))
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // -- build --------------------------------------------------------------

    pub fn build_list_exercises(&self, query: &GetExercisesQuery) -> HttpRequest {
        let mut request = self.api.request(HttpMethod::Get, EXERCISES_PATH);
        request
            .query
            .push(("courseId".to_string(), query.course_id.clone()));
        request
    }

    pub fn build_create_exercise(&self, input: &CreateExerciseRequest) -> Result<HttpRequest, ApiError> {
        self.api.json_request(HttpMethod::Post, EXERCISES_PATH, input)
    }

    pub fn build_get_exercise(&self, exercise_id: &str) -> HttpRequest {
        self.api.request(HttpMethod::Get, &exercise_path(exercise_id))
    }

    pub fn build_update_exercise(
        &self,
        exercise_id: &str,
        input: &UpdateExerciseRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.api
            .json_request(HttpMethod::Patch, &exercise_path(exercise_id), input)
    }

    pub fn build_delete_exercise(&self, exercise_id: &str) -> HttpRequest {
        self.api.request(HttpMethod::Delete, &exercise_path(exercise_id))
    }

    // -- raw ----------------------------------------------------------------

    pub fn list_exercises_api(&self, query: &GetExercisesQuery) -> Result<HttpResponse, ApiError> {
        self.api.send(&self.build_list_exercises(query))
    }

    pub fn create_exercise_api(&self, input: &CreateExerciseRequest) -> Result<HttpResponse, ApiError> {
        self.api.send(&self.build_create_exercise(input)?)
    }

    pub fn get_exercise_api(&self, exercise_id: &str) -> Result<HttpResponse, ApiError> {
        self.api.send(&self.build_get_exercise(exercise_id))
    }

    pub fn update_exercise_api(
        &self,
        exercise_id: &str,
        input: &UpdateExerciseRequest,
    ) -> Result<HttpResponse, ApiError> {
        self.api
            .send(&self.build_update_exercise(exercise_id, input)?)
    }

    pub fn delete_exercise_api(&self, exercise_id: &str) -> Result<HttpResponse, ApiError> {
        self.api.send(&self.build_delete_exercise(exercise_id))
    }

    // -- parse --------------------------------------------------------------

    pub fn parse_list_exercises(&self, response: HttpResponse) -> Result<GetExercisesResponse, ApiError> {
        response.error_for_status()?.json()
    }

    pub fn parse_create_exercise(&self, response: HttpResponse) -> Result<ExerciseResponse, ApiError> {
        response.error_for_status()?.json()
    }

    pub fn parse_get_exercise(&self, response: HttpResponse) -> Result<ExerciseResponse, ApiError> {
        response.error_for_status()?.json()
    }

    pub fn parse_update_exercise(&self, response: HttpResponse) -> Result<ExerciseResponse, ApiError> {
        response.error_for_status()?.json()
    }

    /// Any 2xx counts as deleted; the body is ignored.
    pub fn parse_delete_exercise(&self, response: HttpResponse) -> Result<(), ApiError> {
        response.error_for_status()?;
        Ok(())
    }

    // -- convenience --------------------------------------------------------

    /// All exercises of one course. No pagination: the server's single page
    /// is returned as-is.
    pub fn list_exercises(&self, course_id: &str) -> Result<GetExercisesResponse, ApiError> {
        let query = GetExercisesQuery {
            course_id: course_id.to_string(),
        };
        let response = self.parse_list_exercises(self.list_exercises_api(&query)?)?;
        debug!(course_id, count = response.exercises.len(), "listed exercises");
        Ok(response)
    }

    pub fn create_exercise(&self, input: &CreateExerciseRequest) -> Result<ExerciseResponse, ApiError> {
        let response = self.parse_create_exercise(self.create_exercise_api(input)?)?;
        debug!(exercise_id = %response.exercise.id, "created exercise");
        Ok(response)
    }

    pub fn get_exercise(&self, exercise_id: &str) -> Result<ExerciseResponse, ApiError> {
        self.parse_get_exercise(self.get_exercise_api(exercise_id)?)
    }

    pub fn update_exercise(
        &self,
        exercise_id: &str,
        input: &UpdateExerciseRequest,
    ) -> Result<ExerciseResponse, ApiError> {
        self.parse_update_exercise(self.update_exercise_api(exercise_id, input)?)
    }

    pub fn delete_exercise(&self, exercise_id: &str) -> Result<(), ApiError> {
        self.parse_delete_exercise(self.delete_exercise_api(exercise_id)?)?;
        debug!(exercise_id, "deleted exercise");
        Ok(())
    }
}
