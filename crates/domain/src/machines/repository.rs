use async_trait::async_trait;
use uuid::Uuid;

use super::inputs::{CreateMachineInput, UpdateMachineInput};
use super::model::Machine;
use crate::errors::Error;

#[async_trait]
pub trait MachineRepository: Send + Sync {
    async fn create(&self, input: CreateMachineInput) -> Result<Machine, Error>;

    async fn get(&self, id: Uuid) -> Result<Machine, Error>;

    async fn get_all(&self) -> Result<Vec<Machine>, Error>;

    async fn update(&self, id: Uuid, input: UpdateMachineInput) -> Result<Machine, Error>;

    async fn delete(&self, id: Uuid) -> Result<(), Error>;
}
