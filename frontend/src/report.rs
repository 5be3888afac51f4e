//! Activity event reporting, reduced to structured log records.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub event_id: &'static str,
    pub event_sub_id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_sub_param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext_json: Option<Value>,
}

pub const EVENT_TASK_DRAW: &str = "task_draw_actv";

pub fn report(data: ReportData) {
    match serde_json::to_string(&data) {
        Ok(json) => log::info!(target: "activity-report", "{json}"),
        Err(e) => log::warn!("failed to serialize report event: {e}"),
    }
}
