use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use uuid::Uuid;

use domain::appointments::inputs::{CreateAppointmentInput, UpdateAppointmentInput};
use domain::appointments::use_cases::{
    CancelAppointment, CreateAppointment, GetAppointment, GetPatientAppointments,
    UpdateAppointment,
};
use domain::validation::schemas;

use crate::error::ApiError;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/appointments", post(create_appointment))
        .route(
            "/appointments/:id",
            get(get_appointment).patch(update_appointment),
        )
        .route("/appointments/:id/cancel", post(cancel_appointment))
        .route("/patients/:id/appointments", get(get_patient_appointments))
}

async fn create_appointment(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let input: CreateAppointmentInput = schemas::create_appointment().validate(&payload)?;
    let appointment = CreateAppointment::new(state.appointments)
        .execute(input)
        .await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

async fn get_appointment(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let appointment = GetAppointment::new(state.appointments).execute(id).await?;
    Ok(Json(appointment))
}

async fn get_patient_appointments(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let appointments = GetPatientAppointments::new(state.appointments)
        .execute(patient_id)
        .await?;
    Ok(Json(appointments))
}

async fn update_appointment(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let input: UpdateAppointmentInput = schemas::update_appointment().validate(&payload)?;
    let appointment = UpdateAppointment::new(state.appointments)
        .execute(id, input)
        .await?;
    Ok(Json(appointment))
}

async fn cancel_appointment(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let appointment = CancelAppointment::new(state.appointments).execute(id).await?;
    Ok(Json(appointment))
}
