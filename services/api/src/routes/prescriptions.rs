use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use uuid::Uuid;

use domain::medical_files::use_cases::GetMedicalFile;
use domain::prescriptions::inputs::{CreatePrescriptionInput, UpdatePrescriptionInput};
use domain::prescriptions::use_cases::{
    CreatePrescription, DeletePrescription, GetPatientPrescriptions, GetPrescription,
    UpdatePrescription,
};
use domain::validation::schemas;

use crate::error::ApiError;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prescriptions", post(create_prescription))
        .route(
            "/prescriptions/:id",
            get(get_prescription)
                .patch(update_prescription)
                .delete(delete_prescription),
        )
        .route("/patients/:id/prescriptions", get(get_patient_prescriptions))
        .route("/patients/:id/medical-file", get(get_medical_file))
}

async fn create_prescription(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let input: CreatePrescriptionInput = schemas::create_prescription().validate(&payload)?;
    let prescription = CreatePrescription::new(state.prescriptions, state.medical_files)
        .execute(input)
        .await?;
    Ok((StatusCode::CREATED, Json(prescription)))
}

async fn get_prescription(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let prescription = GetPrescription::new(state.prescriptions).execute(id).await?;
    Ok(Json(prescription))
}

async fn get_patient_prescriptions(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let prescriptions = GetPatientPrescriptions::new(state.prescriptions)
        .execute(patient_id)
        .await?;
    Ok(Json(prescriptions))
}

async fn update_prescription(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let input: UpdatePrescriptionInput = schemas::update_prescription().validate(&payload)?;
    let prescription = UpdatePrescription::new(state.prescriptions)
        .execute(id, input)
        .await?;
    Ok(Json(prescription))
}

async fn delete_prescription(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    DeletePrescription::new(state.prescriptions).execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_medical_file(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let file = GetMedicalFile::new(state.medical_files)
        .execute(patient_id)
        .await?;
    Ok(Json(file))
}
