use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use uuid::Uuid;

use domain::dialysis::inputs::{UpdateDialysisProtocolInput, UpdateDialysisSessionInput};
use domain::dialysis::use_cases::{
    DeleteDialysisSession, GetDialysisPatients, GetDialysisSession, GetPatientDialysisSessions,
    UpdateDialysisProtocol, UpdateDialysisSession,
};
use domain::validation::schemas;

use crate::error::ApiError;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dialysis/patients", get(get_patients))
        .route(
            "/dialysis/sessions/:id",
            get(get_session).patch(update_session).delete(delete_session),
        )
        .route(
            "/dialysis/sessions/:id/protocol",
            axum::routing::patch(update_protocol),
        )
        .route("/patients/:id/dialysis-sessions", get(get_patient_sessions))
}

async fn get_patients(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let patients = GetDialysisPatients::new(state.dialysis).execute().await?;
    Ok(Json(patients))
}

async fn get_session(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let session = GetDialysisSession::new(state.dialysis).execute(id).await?;
    Ok(Json(session))
}

async fn get_patient_sessions(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let sessions = GetPatientDialysisSessions::new(state.dialysis)
        .execute(patient_id)
        .await?;
    Ok(Json(sessions))
}

async fn update_session(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let input: UpdateDialysisSessionInput =
        schemas::update_dialysis_session().validate(&payload)?;
    let session = UpdateDialysisSession::new(state.dialysis)
        .execute(id, input)
        .await?;
    Ok(Json(session))
}

async fn update_protocol(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let input: UpdateDialysisProtocolInput =
        schemas::update_dialysis_protocol().validate(&payload)?;
    let session = UpdateDialysisProtocol::new(state.dialysis)
        .execute(id, input)
        .await?;
    Ok(Json(session))
}

async fn delete_session(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    DeleteDialysisSession::new(state.dialysis).execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
