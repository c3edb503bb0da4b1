use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DialysisProtocol {
    pub dialyzer: Option<String>,
    pub blood_flow_ml_min: Option<u32>,
    pub duration_minutes: Option<u32>,
    pub sessions_per_week: Option<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DialysisSession {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub machine_id: Option<Uuid>,
    pub date: NaiveDate,
    pub duration_minutes: u32,
    pub pre_weight_kg: Option<f64>,
    pub post_weight_kg: Option<f64>,
    pub notes: Option<String>,
    pub protocol: DialysisProtocol,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
