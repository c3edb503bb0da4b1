use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use uuid::Uuid;

use domain::machines::inputs::{CreateMachineInput, UpdateMachineInput};
use domain::machines::use_cases::{
    CreateMachine, DeleteMachine, GetMachine, GetMachines, UpdateMachine,
};
use domain::validation::schemas;

use crate::error::ApiError;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/machines", get(get_machines).post(create_machine))
        .route(
            "/machines/:id",
            get(get_machine).patch(update_machine).delete(delete_machine),
        )
}

async fn create_machine(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let input: CreateMachineInput = schemas::create_machine().validate(&payload)?;
    let machine = CreateMachine::new(state.machines).execute(input).await?;
    Ok((StatusCode::CREATED, Json(machine)))
}

async fn get_machines(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let machines = GetMachines::new(state.machines).execute().await?;
    Ok(Json(machines))
}

async fn get_machine(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let machine = GetMachine::new(state.machines).execute(id).await?;
    Ok(Json(machine))
}

async fn update_machine(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let input: UpdateMachineInput = schemas::update_machine().validate(&payload)?;
    let machine = UpdateMachine::new(state.machines).execute(id, input).await?;
    Ok(Json(machine))
}

async fn delete_machine(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    DeleteMachine::new(state.machines).execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
