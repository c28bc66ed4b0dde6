use std::{collections::HashMap, fmt, sync::Arc};

use axum::{
    extract::{FromRequestParts, Path, Query, State},
    http::{header, request::Parts, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
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

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExercise {
    pub title: String,
    pub course_id: String,
    pub max_score: i64,
    pub min_score: i64,
    pub order_index: i64,
    pub description: String,
    pub estimated_time: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExercise {
    pub title: Option<String>,
    pub max_score: Option<i64>,
    pub min_score: Option<i64>,
    pub order_index: Option<i64>,
    pub description: Option<String>,
    pub estimated_time: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisesQuery {
    pub course_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExercisesResponse {
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub exercise: Exercise,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
}

impl fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUser")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("last_name", &self.last_name)
            .field("first_name", &self.first_name)
            .field("middle_name", &self.middle_name)
            .finish()
    }
}

#[derive(Deserialize)]
pub struct Login {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Login")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub token_type: String,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: Token,
}

struct Account {
    user: User,
    password: String,
}

/// Shared in-memory state. Accounts are keyed by email, sessions map an
/// access token to the email it was issued for.
#[derive(Clone, Default)]
pub struct AppState {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    sessions: Arc<RwLock<HashMap<String, String>>>,
    exercises: Arc<RwLock<HashMap<String, Exercise>>>,
}

impl AppState {
    /// Register an account. Fails with 409 if the email is taken.
    pub async fn register_user(&self, input: CreateUser) -> Result<User, StatusCode> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&input.email) {
            return Err(StatusCode::CONFLICT);
        }
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: input.email,
            last_name: input.last_name,
            first_name: input.first_name,
            middle_name: input.middle_name,
        };
        accounts.insert(
            user.email.clone(),
            Account {
                user: user.clone(),
                password: input.password,
            },
        );
        info!(email = %user.email, "registered user");
        Ok(user)
    }
}

/// The account behind a valid `Authorization: Bearer` header.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string);
        let Some(token) = token else {
            warn!(path = %parts.uri.path(), "missing bearer token");
            return Err(StatusCode::UNAUTHORIZED);
        };

        let email = state
            .sessions
            .read()
            .await
            .get(&token)
            .cloned()
            .ok_or(StatusCode::UNAUTHORIZED)?;
        let accounts = state.accounts.read().await;
        accounts
            .get(&email)
            .map(|account| CurrentUser(account.user.clone()))
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

pub fn app() -> Router {
    app_with_state(AppState::default())
}

pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/users", post(create_user))
        .route("/api/v1/users/me", get(get_user_me))
        .route("/api/v1/authentication/login", post(login))
        .route("/api/v1/exercises", get(list_exercises).post(create_exercise))
        .route(
            "/api/v1/exercises/{id}",
            get(get_exercise).patch(update_exercise).delete(delete_exercise),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> Result<Json<UserResponse>, StatusCode> {
    let user = state.register_user(input).await?;
    Ok(Json(UserResponse { user }))
}

async fn login(
    State(state): State<AppState>,
    Json(input): Json<Login>,
) -> Result<Json<LoginResponse>, StatusCode> {
    let valid = state
        .accounts
        .read()
        .await
        .get(&input.email)
        .is_some_and(|account| account.password == input.password);
    if !valid {
        warn!(email = %input.email, "rejected login");
        return Err(StatusCode::UNAUTHORIZED);
    }

    let token = Token {
        token_type: "bearer".to_string(),
        access_token: Uuid::new_v4().simple().to_string(),
        refresh_token: Uuid::new_v4().simple().to_string(),
    };
    // Sessions live until the process exits; nothing expires or evicts them.
    state
        .sessions
        .write()
        .await
        .insert(token.access_token.clone(), input.email);
    Ok(Json(LoginResponse { token }))
}

async fn get_user_me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse { user })
}

async fn list_exercises(
    _: CurrentUser,
    State(state): State<AppState>,
    Query(query): Query<ExercisesQuery>,
) -> Json<ExercisesResponse> {
    let exercises = state.exercises.read().await;
    let mut matching: Vec<Exercise> = exercises
        .values()
        .filter(|exercise| exercise.course_id == query.course_id)
        .cloned()
        .collect();
    matching.sort_by(|a, b| a.order_index.cmp(&b.order_index).then_with(|| a.id.cmp(&b.id)));
    Json(ExercisesResponse { exercises: matching })
}

async fn create_exercise(
    _: CurrentUser,
    State(state): State<AppState>,
    Json(input): Json<CreateExercise>,
) -> Json<ExerciseResponse> {
    let exercise = Exercise {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        course_id: input.course_id,
        max_score: input.max_score,
        min_score: input.min_score,
        order_index: input.order_index,
        description: input.description,
        estimated_time: input.estimated_time,
    };
    state
        .exercises
        .write()
        .await
        .insert(exercise.id.clone(), exercise.clone());
    Json(ExerciseResponse { exercise })
}

async fn get_exercise(
    _: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExerciseResponse>, StatusCode> {
    let exercises = state.exercises.read().await;
    exercises
        .get(&id)
        .cloned()
        .map(|exercise| Json(ExerciseResponse { exercise }))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_exercise(
    _: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateExercise>,
) -> Result<Json<ExerciseResponse>, StatusCode> {
    let mut exercises = state.exercises.write().await;
    let exercise = exercises.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        exercise.title = title;
    }
    if let Some(max_score) = input.max_score {
        exercise.max_score = max_score;
    }
    if let Some(min_score) = input.min_score {
        exercise.min_score = min_score;
    }
    if let Some(order_index) = input.order_index {
        exercise.order_index = order_index;
    }
    if let Some(description) = input.description {
        exercise.description = description;
    }
    if let Some(estimated_time) = input.estimated_time {
        exercise.estimated_time = estimated_time;
    }
    Ok(Json(ExerciseResponse {
        exercise: exercise.clone(),
    }))
}

async fn delete_exercise(
    _: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut exercises = state.exercises.write().await;
    exercises
        .remove(&id)
        .map(|_| StatusCode::OK)
        .ok_or(StatusCode::NOT_FOUND)
}
