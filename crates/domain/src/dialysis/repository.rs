use async_trait::async_trait;
use uuid::Uuid;

use super::inputs::{UpdateDialysisProtocolInput, UpdateDialysisSessionInput};
use super::model::DialysisSession;
use crate::errors::Error;
use crate::users::User;

#[async_trait]
pub trait DialysisRepository: Send + Sync {
    /// Patients enrolled in the dialysis program.
    async fn get_all_patients(&self) -> Result<Vec<User>, Error>;

    async fn get_session_by_id(&self, id: Uuid) -> Result<DialysisSession, Error>;

    async fn get_sessions_by_patient_id(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<DialysisSession>, Error>;

    async fn update_session(
        &self,
        id: Uuid,
        input: UpdateDialysisSessionInput,
    ) -> Result<DialysisSession, Error>;

    async fn update_protocol(
        &self,
        session_id: Uuid,
        input: UpdateDialysisProtocolInput,
    ) -> Result<DialysisSession, Error>;

    async fn delete_session(&self, id: Uuid) -> Result<(), Error>;
}
