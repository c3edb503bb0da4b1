use std::sync::Arc;

use derive_new::new;
use uuid::Uuid;

use super::inputs::{CreateMachineInput, UpdateMachineInput};
use super::model::Machine;
use super::repository::MachineRepository;
use crate::errors::Error;

#[derive(new)]
pub struct CreateMachine {
    machines: Arc<dyn MachineRepository>,
}

impl CreateMachine {
    pub async fn execute(&self, input: CreateMachineInput) -> Result<Machine, Error> {
        self.machines.create(input).await
    }
}

#[derive(new)]
pub struct GetMachine {
    machines: Arc<dyn MachineRepository>,
}

impl GetMachine {
    pub async fn execute(&self, id: Uuid) -> Result<Machine, Error> {
        self.machines.get(id).await
    }
}

#[derive(new)]
pub struct GetMachines {
    machines: Arc<dyn MachineRepository>,
}

impl GetMachines {
    pub async fn execute(&self) -> Result<Vec<Machine>, Error> {
        self.machines.get_all().await
    }
}

#[derive(new)]
pub struct UpdateMachine {
    machines: Arc<dyn MachineRepository>,
}

impl UpdateMachine {
    pub async fn execute(&self, id: Uuid, input: UpdateMachineInput) -> Result<Machine, Error> {
        self.machines.update(id, input).await
    }
}

#[derive(new)]
pub struct DeleteMachine {
    machines: Arc<dyn MachineRepository>,
}

impl DeleteMachine {
    pub async fn execute(&self, id: Uuid) -> Result<(), Error> {
        self.machines.delete(id).await
    }
}
