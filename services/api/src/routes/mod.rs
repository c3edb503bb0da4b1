use std::sync::Arc;

use axum::Router;

use domain::appointments::AppointmentRepository;
use domain::dialysis::DialysisRepository;
use domain::machines::MachineRepository;
use domain::medical_files::MedicalFileRepository;
use domain::prescriptions::PrescriptionRepository;
use domain::users::UserRepository;

use crate::store::MemoryStore;

/// Appointment routes
pub mod appointments;

/// Dialysis routes
pub mod dialysis;

/// Machine routes
pub mod machines;

/// Prescription and medical-file routes
pub mod prescriptions;

/// User routes
pub mod users;

/// Shared repository handles. Use-cases are constructed per request from
/// these; they hold no other state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub prescriptions: Arc<dyn PrescriptionRepository>,
    pub medical_files: Arc<dyn MedicalFileRepository>,
    pub dialysis: Arc<dyn DialysisRepository>,
    pub machines: Arc<dyn MachineRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
}

impl AppState {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            prescriptions: store.clone(),
            medical_files: store.clone(),
            dialysis: store.clone(),
            machines: store.clone(),
            appointments: store,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(users::router())
        .merge(prescriptions::router())
        .merge(dialysis::router())
        .merge(machines::router())
        .merge(appointments::router())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        router(AppState::new(Arc::new(MemoryStore::default())))
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn patch(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("PATCH")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn short_first_name_is_rejected_with_violations() {
        let (status, body) = send(
            app(),
            post(
                "/users",
                json!({
                    "firstName": "Jo",
                    "lastName": "Doe",
                    "email": "j@x.com",
                    "password": "longenough",
                    "role": "DOCTOR",
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_failed");
        assert_eq!(body["violations"][0]["field"], "firstName");
    }

    #[tokio::test]
    async fn created_doctor_shows_up_in_the_listing() {
        let app = app();

        let (status, created) = send(
            app.clone(),
            post(
                "/users",
                json!({
                    "firstName": "John",
                    "lastName": "Doe",
                    "email": "j@x.com",
                    "password": "longenough",
                    "role": "DOCTOR",
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, listed) = send(app, get("/users")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed[0]["id"], created["id"]);
        assert_eq!(listed[0]["role"], "DOCTOR");
    }

    #[tokio::test]
    async fn user_is_retrievable_by_id_until_soft_deleted() {
        let app = app();

        let (_, created) = send(
            app.clone(),
            post(
                "/users",
                json!({
                    "firstName": "John",
                    "lastName": "Doe",
                    "email": "j@x.com",
                    "password": "longenough",
                    "role": "DOCTOR",
                }),
            ),
        )
        .await;
        let id = created["id"].as_str().unwrap().to_string();

        let (status, fetched) = send(app.clone(), get(&format!("/users/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["email"], "j@x.com");

        let delete = Request::builder()
            .method("DELETE")
            .uri(format!("/users/{id}"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app.clone(), delete).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(app, get(&format!("/users/{id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn prescription_creation_mirrors_into_the_medical_file() {
        let app = app();

        let (_, patient) = send(
            app.clone(),
            post(
                "/users",
                json!({
                    "firstName": "Jane",
                    "lastName": "Roe",
                    "email": "jane@x.com",
                    "password": "longenough",
                    "role": "PATIENT",
                }),
            ),
        )
        .await;
        let patient_id = patient["id"].as_str().unwrap().to_string();

        let (status, prescription) = send(
            app.clone(),
            post(
                "/prescriptions",
                json!({
                    "patientId": patient_id,
                    "doctorId": "f5b3b2a0-1c2d-4e3f-9a8b-7c6d5e4f3a21",
                    "date": "2026-08-30",
                    "medications": [{
                        "name": "Heparin",
                        "dosage": "5000 IU",
                        "frequency": "per session",
                        "duration": "ongoing",
                    }],
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, file) = send(
            app,
            get(&format!("/patients/{patient_id}/medical-file")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(file["prescriptions"].as_array().unwrap().len(), 1);
        assert_eq!(file["prescriptions"][0]["prescriptionId"], prescription["id"]);
    }

    #[tokio::test]
    async fn protocol_update_lands_on_the_session() {
        use chrono::{NaiveDate, Utc};
        use domain::dialysis::{DialysisProtocol, DialysisSession};
        use uuid::Uuid;

        let store = Arc::new(MemoryStore::default());
        let app = router(AppState::new(store.clone()));

        let now = Utc::now();
        let session = DialysisSession {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            machine_id: None,
            date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            duration_minutes: 240,
            pre_weight_kg: None,
            post_weight_kg: None,
            notes: None,
            protocol: DialysisProtocol::default(),
            created_at: now,
            updated_at: now,
        };
        store.insert_session(session.clone()).await;

        let (status, body) = send(
            app,
            patch(
                &format!("/dialysis/sessions/{}/protocol", session.id),
                json!({ "bloodFlowMlMin": 300, "sessionsPerWeek": 3 }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["protocol"]["bloodFlowMlMin"], 300);
        assert_eq!(body["protocol"]["sessionsPerWeek"], 3);
    }

    #[tokio::test]
    async fn out_of_range_session_duration_is_rejected() {
        let (status, body) = send(
            app(),
            patch(
                "/dialysis/sessions/7f2c1a90-9a3e-4c0f-8a43-2a8a1f6a8f11",
                json!({ "durationMinutes": 0 }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["violations"][0]["field"], "durationMinutes");
    }

    #[tokio::test]
    async fn unknown_machine_is_a_404() {
        let (status, body) = send(
            app(),
            get("/machines/7f2c1a90-9a3e-4c0f-8a43-2a8a1f6a8f11"),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn duplicate_machine_serial_is_a_conflict() {
        let app = app();
        let machine = json!({
            "name": "Fresenius 5008",
            "serialNumber": "FS-5008-001",
            "status": "ACTIVE",
        });

        let (status, _) = send(app.clone(), post("/machines", machine.clone())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(app, post("/machines", machine)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["field"], "serialNumber");
    }
}
