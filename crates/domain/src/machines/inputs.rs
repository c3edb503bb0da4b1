use serde::{Deserialize, Serialize};

use super::model::MachineStatus;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMachineInput {
    pub name: String,
    pub serial_number: String,
    pub status: MachineStatus,
    pub location: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMachineInput {
    pub name: Option<String>,
    pub status: Option<MachineStatus>,
    pub location: Option<String>,
}
