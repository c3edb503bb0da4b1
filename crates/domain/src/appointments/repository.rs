use async_trait::async_trait;
use uuid::Uuid;

use super::inputs::{CreateAppointmentInput, UpdateAppointmentInput};
use super::model::Appointment;
use crate::errors::Error;

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn create(&self, input: CreateAppointmentInput) -> Result<Appointment, Error>;

    async fn get(&self, id: Uuid) -> Result<Appointment, Error>;

    async fn get_by_patient(&self, patient_id: Uuid) -> Result<Vec<Appointment>, Error>;

    async fn update(&self, id: Uuid, input: UpdateAppointmentInput)
        -> Result<Appointment, Error>;

    async fn cancel(&self, id: Uuid) -> Result<Appointment, Error>;
}
