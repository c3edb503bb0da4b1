use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use uuid::Uuid;

use domain::users::inputs::{CreateUserInput, UpdateUserInput};
use domain::users::use_cases::{CreateUser, DeleteUser, GetUser, GetUsers, UpdateUser};
use domain::validation::schemas;

use crate::error::ApiError;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

async fn get_user(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let user = GetUser::new(state.users).execute(id).await?;
    Ok(Json(user))
}

async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let input: CreateUserInput = schemas::create_user().validate(&payload)?;
    let user = CreateUser::new(state.users).execute(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = GetUsers::new(state.users).execute().await?;
    Ok(Json(users))
}

async fn update_user(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let input: UpdateUserInput = schemas::update_user().validate(&payload)?;
    let user = UpdateUser::new(state.users).execute(id, input).await?;
    Ok(Json(user))
}

async fn delete_user(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    DeleteUser::new(state.users).execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
