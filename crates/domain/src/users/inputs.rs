use serde::{Deserialize, Serialize};

use super::model::Role;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Forwarded to the hosted auth service; never persisted here.
    pub password: String,
    pub role: Role,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub phone: Option<String>,
}
