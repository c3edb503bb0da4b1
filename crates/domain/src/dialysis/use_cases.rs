//! Dialysis use-cases, one per repository capability.

use std::sync::Arc;

use derive_new::new;
use uuid::Uuid;

use super::inputs::{UpdateDialysisProtocolInput, UpdateDialysisSessionInput};
use super::model::DialysisSession;
use super::repository::DialysisRepository;
use crate::errors::Error;
use crate::users::User;

#[derive(new)]
pub struct GetDialysisPatients {
    dialysis: Arc<dyn DialysisRepository>,
}

impl GetDialysisPatients {
    pub async fn execute(&self) -> Result<Vec<User>, Error> {
        self.dialysis.get_all_patients().await
    }
}

#[derive(new)]
pub struct GetDialysisSession {
    dialysis: Arc<dyn DialysisRepository>,
}

impl GetDialysisSession {
    pub async fn execute(&self, id: Uuid) -> Result<DialysisSession, Error> {
        self.dialysis.get_session_by_id(id).await
    }
}

#[derive(new)]
pub struct GetPatientDialysisSessions {
    dialysis: Arc<dyn DialysisRepository>,
}

impl GetPatientDialysisSessions {
    pub async fn execute(&self, patient_id: Uuid) -> Result<Vec<DialysisSession>, Error> {
        self.dialysis.get_sessions_by_patient_id(patient_id).await
    }
}

#[derive(new)]
pub struct UpdateDialysisSession {
    dialysis: Arc<dyn DialysisRepository>,
}

impl UpdateDialysisSession {
    pub async fn execute(
        &self,
        id: Uuid,
        input: UpdateDialysisSessionInput,
    ) -> Result<DialysisSession, Error> {
        self.dialysis.update_session(id, input).await
    }
}

#[derive(new)]
pub struct UpdateDialysisProtocol {
    dialysis: Arc<dyn DialysisRepository>,
}

impl UpdateDialysisProtocol {
    pub async fn execute(
        &self,
        session_id: Uuid,
        input: UpdateDialysisProtocolInput,
    ) -> Result<DialysisSession, Error> {
        self.dialysis.update_protocol(session_id, input).await
    }
}

#[derive(new)]
pub struct DeleteDialysisSession {
    dialysis: Arc<dyn DialysisRepository>,
}

impl DeleteDialysisSession {
    pub async fn execute(&self, id: Uuid) -> Result<(), Error> {
        self.dialysis.delete_session(id).await
    }
}
