//! User use-cases. Each one is a single repository call; failures
//! propagate unchanged.

use std::sync::Arc;

use derive_new::new;
use uuid::Uuid;

use super::inputs::{CreateUserInput, UpdateUserInput};
use super::model::User;
use super::repository::UserRepository;
use crate::errors::Error;

#[derive(new)]
pub struct CreateUser {
    users: Arc<dyn UserRepository>,
}

impl CreateUser {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, Error> {
        self.users.create(input).await
    }
}

#[derive(new)]
pub struct GetUser {
    users: Arc<dyn UserRepository>,
}

impl GetUser {
    pub async fn execute(&self, id: Uuid) -> Result<User, Error> {
        self.users.get(id).await
    }
}

#[derive(new)]
pub struct GetUsers {
    users: Arc<dyn UserRepository>,
}

impl GetUsers {
    pub async fn execute(&self) -> Result<Vec<User>, Error> {
        self.users.get_all().await
    }
}

#[derive(new)]
pub struct UpdateUser {
    users: Arc<dyn UserRepository>,
}

impl UpdateUser {
    pub async fn execute(&self, id: Uuid, input: UpdateUserInput) -> Result<User, Error> {
        self.users.update(id, input).await
    }
}

#[derive(new)]
pub struct DeleteUser {
    users: Arc<dyn UserRepository>,
}

impl DeleteUser {
    pub async fn execute(&self, id: Uuid) -> Result<(), Error> {
        self.users.soft_delete(id).await
    }
}
