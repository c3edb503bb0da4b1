use async_trait::async_trait;
use uuid::Uuid;

use super::inputs::{CreateUserInput, UpdateUserInput};
use super::model::User;
use crate::errors::Error;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, input: CreateUserInput) -> Result<User, Error>;

    async fn get(&self, id: Uuid) -> Result<User, Error>;

    /// Soft-deleted users are excluded.
    async fn get_all(&self) -> Result<Vec<User>, Error>;

    async fn update(&self, id: Uuid, input: UpdateUserInput) -> Result<User, Error>;

    async fn soft_delete(&self, id: Uuid) -> Result<(), Error>;
}
