use async_trait::async_trait;
use uuid::Uuid;

use super::model::MedicalFile;
use crate::errors::Error;

#[async_trait]
pub trait MedicalFileRepository: Send + Sync {
    /// A patient without a file yields `None`; absence is not an error.
    async fn get_by_patient_id(&self, patient_id: Uuid) -> Result<Option<MedicalFile>, Error>;

    async fn update(&self, file: MedicalFile) -> Result<MedicalFile, Error>;
}
