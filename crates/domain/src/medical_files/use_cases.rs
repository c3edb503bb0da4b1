use std::sync::Arc;

use derive_new::new;
use uuid::Uuid;

use super::model::MedicalFile;
use super::repository::MedicalFileRepository;
use crate::errors::Error;

#[derive(new)]
pub struct GetMedicalFile {
    medical_files: Arc<dyn MedicalFileRepository>,
}

impl GetMedicalFile {
    pub async fn execute(&self, patient_id: Uuid) -> Result<MedicalFile, Error> {
        self.medical_files
            .get_by_patient_id(patient_id)
            .await?
            .ok_or_else(|| Error::not_found("MedicalFile"))
    }
}
