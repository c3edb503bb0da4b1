use async_trait::async_trait;
use uuid::Uuid;

use super::inputs::{CreatePrescriptionInput, UpdatePrescriptionInput};
use super::model::Prescription;
use crate::errors::Error;

#[async_trait]
pub trait PrescriptionRepository: Send + Sync {
    async fn create(&self, input: CreatePrescriptionInput) -> Result<Prescription, Error>;

    async fn get(&self, id: Uuid) -> Result<Prescription, Error>;

    async fn get_by_patient(&self, patient_id: Uuid) -> Result<Vec<Prescription>, Error>;

    async fn update(&self, id: Uuid, input: UpdatePrescriptionInput)
        -> Result<Prescription, Error>;

    async fn delete(&self, id: Uuid) -> Result<(), Error>;
}
