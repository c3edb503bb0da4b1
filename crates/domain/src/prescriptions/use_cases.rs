//! Prescription use-cases.
//!
//! Creation has a primary step (persist the prescription) and a secondary,
//! best-effort step (mirror a summary into the patient's medical file).
//! The mirror step runs strictly after the primary call succeeds and its
//! failure never fails the operation.

use std::sync::Arc;

use derive_new::new;
use uuid::Uuid;

use super::inputs::{CreatePrescriptionInput, UpdatePrescriptionInput};
use super::model::Prescription;
use super::repository::PrescriptionRepository;
use crate::errors::Error;
use crate::medical_files::{MedicalFileRepository, PrescriptionEntry};
use crate::steps;

#[derive(new)]
pub struct CreatePrescription {
    prescriptions: Arc<dyn PrescriptionRepository>,
    medical_files: Arc<dyn MedicalFileRepository>,
}

impl CreatePrescription {
    pub async fn execute(&self, input: CreatePrescriptionInput) -> Result<Prescription, Error> {
        let prescription = self.prescriptions.create(input).await?;

        steps::non_critical(
            "mirror prescription into medical file",
            self.mirror(&prescription),
        )
        .await;

        Ok(prescription)
    }

    async fn mirror(&self, prescription: &Prescription) -> Result<(), Error> {
        // No medical file means nothing to mirror.
        let Some(mut file) = self
            .medical_files
            .get_by_patient_id(prescription.patient_id)
            .await?
        else {
            return Ok(());
        };

        file.append_prescription(PrescriptionEntry::from(prescription));
        self.medical_files.update(file).await?;
        Ok(())
    }
}

#[derive(new)]
pub struct GetPrescription {
    prescriptions: Arc<dyn PrescriptionRepository>,
}

impl GetPrescription {
    pub async fn execute(&self, id: Uuid) -> Result<Prescription, Error> {
        self.prescriptions.get(id).await
    }
}

#[derive(new)]
pub struct GetPatientPrescriptions {
    prescriptions: Arc<dyn PrescriptionRepository>,
}

impl GetPatientPrescriptions {
    pub async fn execute(&self, patient_id: Uuid) -> Result<Vec<Prescription>, Error> {
        self.prescriptions.get_by_patient(patient_id).await
    }
}

#[derive(new)]
pub struct UpdatePrescription {
    prescriptions: Arc<dyn PrescriptionRepository>,
}

impl UpdatePrescription {
    pub async fn execute(
        &self,
        id: Uuid,
        input: UpdatePrescriptionInput,
    ) -> Result<Prescription, Error> {
        self.prescriptions.update(id, input).await
    }
}

#[derive(new)]
pub struct DeletePrescription {
    prescriptions: Arc<dyn PrescriptionRepository>,
}

impl DeletePrescription {
    pub async fn execute(&self, id: Uuid) -> Result<(), Error> {
        self.prescriptions.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::medical_files::MedicalFile;
    use crate::prescriptions::Medication;

    #[derive(Default)]
    struct FakePrescriptions {
        fail_create: bool,
        created: Mutex<Vec<Prescription>>,
    }

    #[async_trait]
    impl PrescriptionRepository for FakePrescriptions {
        async fn create(&self, input: CreatePrescriptionInput) -> Result<Prescription, Error> {
            if self.fail_create {
                return Err(Error::repository("store unavailable"));
            }
            let now = Utc::now();
            let prescription = Prescription {
                id: Uuid::new_v4(),
                patient_id: input.patient_id,
                doctor_id: input.doctor_id,
                date: input.date,
                medications: input.medications,
                created_at: now,
                updated_at: now,
            };
            self.created.lock().unwrap().push(prescription.clone());
            Ok(prescription)
        }

        async fn get(&self, _id: Uuid) -> Result<Prescription, Error> {
            unimplemented!()
        }

        async fn get_by_patient(&self, _patient_id: Uuid) -> Result<Vec<Prescription>, Error> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: Uuid,
            _input: UpdatePrescriptionInput,
        ) -> Result<Prescription, Error> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), Error> {
            unimplemented!()
        }
    }

    #[derive(Default)]
    struct FakeMedicalFiles {
        file: Mutex<Option<MedicalFile>>,
        fail_update: bool,
        lookups: Mutex<u32>,
    }

    #[async_trait]
    impl MedicalFileRepository for FakeMedicalFiles {
        async fn get_by_patient_id(
            &self,
            patient_id: Uuid,
        ) -> Result<Option<MedicalFile>, Error> {
            *self.lookups.lock().unwrap() += 1;
            let file = self.file.lock().unwrap().clone();
            Ok(file.filter(|f| f.patient_id == patient_id))
        }

        async fn update(&self, file: MedicalFile) -> Result<MedicalFile, Error> {
            if self.fail_update {
                return Err(Error::repository("write rejected"));
            }
            *self.file.lock().unwrap() = Some(file.clone());
            Ok(file)
        }
    }

    fn input(patient_id: Uuid) -> CreatePrescriptionInput {
        CreatePrescriptionInput {
            patient_id,
            doctor_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            medications: vec![Medication {
                name: "Heparin".to_string(),
                dosage: "5000 IU".to_string(),
                frequency: "per session".to_string(),
                duration: "ongoing".to_string(),
                notes: None,
            }],
        }
    }

    #[tokio::test]
    async fn creation_without_medical_file_succeeds_silently() {
        let prescriptions = Arc::new(FakePrescriptions::default());
        let medical_files = Arc::new(FakeMedicalFiles::default());
        let use_case = CreatePrescription::new(prescriptions, medical_files.clone());

        let result = use_case.execute(input(Uuid::new_v4())).await;

        assert!(result.is_ok());
        assert_eq!(*medical_files.lookups.lock().unwrap(), 1);
        assert!(medical_files.file.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn creation_appends_exactly_one_entry_preserving_order() {
        let patient_id = Uuid::new_v4();
        let mut existing = MedicalFile::new(patient_id);
        existing.append_prescription(PrescriptionEntry {
            prescription_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            doctor_id: Uuid::new_v4(),
            medications: Vec::new(),
        });
        let prior = existing.prescriptions.clone();

        let prescriptions = Arc::new(FakePrescriptions::default());
        let medical_files = Arc::new(FakeMedicalFiles {
            file: Mutex::new(Some(existing)),
            ..Default::default()
        });
        let use_case = CreatePrescription::new(prescriptions, medical_files.clone());

        let created = use_case.execute(input(patient_id)).await.unwrap();

        let file = medical_files.file.lock().unwrap().clone().unwrap();
        assert_eq!(file.prescriptions.len(), prior.len() + 1);
        assert_eq!(file.prescriptions[..prior.len()], prior[..]);
        assert_eq!(file.prescriptions.last().unwrap().prescription_id, created.id);
    }

    #[tokio::test]
    async fn mirror_failure_still_returns_the_prescription() {
        let patient_id = Uuid::new_v4();
        let prescriptions = Arc::new(FakePrescriptions::default());
        let medical_files = Arc::new(FakeMedicalFiles {
            file: Mutex::new(Some(MedicalFile::new(patient_id))),
            fail_update: true,
            ..Default::default()
        });
        let use_case = CreatePrescription::new(prescriptions.clone(), medical_files);

        let result = use_case.execute(input(patient_id)).await;

        assert!(result.is_ok());
        assert_eq!(prescriptions.created.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn primary_failure_propagates_and_skips_the_mirror() {
        let prescriptions = Arc::new(FakePrescriptions {
            fail_create: true,
            ..Default::default()
        });
        let medical_files = Arc::new(FakeMedicalFiles::default());
        let use_case = CreatePrescription::new(prescriptions, medical_files.clone());

        let result = use_case.execute(input(Uuid::new_v4())).await;

        assert!(matches!(result, Err(Error::Repository { .. })));
        assert_eq!(*medical_files.lookups.lock().unwrap(), 0);
    }
}
