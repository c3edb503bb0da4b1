use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDialysisSessionInput {
    pub date: Option<NaiveDate>,
    pub duration_minutes: Option<u32>,
    pub pre_weight_kg: Option<f64>,
    pub post_weight_kg: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDialysisProtocolInput {
    pub dialyzer: Option<String>,
    pub blood_flow_ml_min: Option<u32>,
    pub duration_minutes: Option<u32>,
    pub sessions_per_week: Option<u32>,
}
