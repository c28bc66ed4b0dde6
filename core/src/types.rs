//! Domain DTOs for the course API.
//!
//! # Design
//! Wire names are camelCase; Rust fields are snake_case. These types mirror
//! the mock-server's schema but are defined independently, so integration
//! tests catch schema drift between the two crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single exercise belonging to a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub title: String,
    pub course_id: String,
    pub max_score: i64,
    pub min_score: i64,
    pub order_index: i64,
    pub description: String,
    pub estimated_time: String,
}

/// Payload for creating an exercise. Every field is required; the server
/// assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateExerciseRequest {
    pub title: String,
    pub course_id: String,
    pub max_score: i64,
    pub min_score: i64,
    pub order_index: i64,
    pub description: String,
    pub estimated_time: String,
}

/// Merge-patch payload for an exercise. `None` fields are left out of the
/// JSON body and stay unchanged on the server. The owning course cannot be
/// changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExerciseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
}

/// Query for listing the exercises of one course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetExercisesQuery {
    pub course_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetExercisesResponse {
    pub exercises: Vec<Exercise>,
}

/// Envelope returned by create, read and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseResponse {
    pub exercise: Exercise,
}

const REDACTED: &str = "<redacted>";

/// Credentials used once to obtain a bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for AuthenticatedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedUser")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

impl AuthenticatedUser {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

impl From<&AuthenticatedUser> for LoginRequest {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub token_type: String,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: Token,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("last_name", &self.last_name)
            .field("first_name", &self.first_name)
            .field("middle_name", &self.middle_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exercise_uses_camel_case_on_the_wire() {
        let exercise = Exercise {
            id: "e-1".to_string(),
            title: "Algebra Basics".to_string(),
            course_id: "c-1".to_string(),
            max_score: 100,
            min_score: 0,
            order_index: 1,
            description: "intro".to_string(),
            estimated_time: "2h".to_string(),
        };
        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(json["courseId"], "c-1");
        assert_eq!(json["maxScore"], 100);
        assert_eq!(json["minScore"], 0);
        assert_eq!(json["orderIndex"], 1);
        assert_eq!(json["estimatedTime"], "2h");
        assert!(json.get("course_id").is_none());
    }

    #[test]
    fn create_request_rejects_missing_field() {
        let result: Result<CreateExerciseRequest, _> =
            serde_json::from_str(r#"{"title":"No course","maxScore":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_update_serializes_to_empty_object() {
        let body = serde_json::to_string(&UpdateExerciseRequest::default()).unwrap();
        assert_eq!(body, "{}");
    }

    #[test]
    fn update_omits_unset_fields() {
        let input = UpdateExerciseRequest {
            max_score: Some(120),
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"maxScore": 120}));
    }

    #[test]
    fn update_has_no_course_id() {
        let input: UpdateExerciseRequest =
            serde_json::from_str(r#"{"courseId":"c-2","title":"T"}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("T"));
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("courseId").is_none());
    }

    #[test]
    fn login_response_reads_access_token() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"token":{"tokenType":"bearer","accessToken":"abc","refreshToken":"def"}}"#,
        )
        .unwrap();
        assert_eq!(resp.token.access_token, "abc");
        assert_eq!(resp.token.token_type, "bearer");
    }

    #[test]
    fn login_request_from_credentials() {
        let user = AuthenticatedUser::new("example_1@example.com", "098765");
        let req = LoginRequest::from(&user);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "example_1@example.com", "password": "098765"})
        );
    }

    #[test]
    fn debug_hides_passwords() {
        let user = AuthenticatedUser::new("example_1@example.com", "098765");
        let login = LoginRequest::from(&user);
        let create = CreateUserRequest {
            email: "example_1@example.com".to_string(),
            password: "098765".to_string(),
            last_name: "Doe".to_string(),
            first_name: "Jane".to_string(),
            middle_name: "Q".to_string(),
        };

        for rendered in [format!("{user:?}"), format!("{login:?}"), format!("{create:#?}")] {
            assert!(!rendered.contains("098765"), "{rendered}");
            assert!(rendered.contains("example_1@example.com"));
            assert!(rendered.contains("<redacted>"));
        }
    }

    #[test]
    fn login_request_still_serializes_password() {
        let login = LoginRequest::from(&AuthenticatedUser::new("a@b.c", "pw"));
        assert_eq!(
            serde_json::to_value(&login).unwrap(),
            serde_json::json!({"email": "a@b.c", "password": "pw"})
        );
    }
}
