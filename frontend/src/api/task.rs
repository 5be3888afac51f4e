use crate::api::http::{get, post};
use crate::models::{CompleteTaskParams, TaskItem};
use serde_json::Value;
use shared::envelope::ApiError;
use shared::mode::{fetch_plan, ActivityMode};

/// Task list from the endpoint the mode is allowed to call: guest and
/// preview lists need no identity, the daily list does.
pub async fn get_task_list(
    mode: ActivityMode,
    activity_id: u64,
) -> Result<Vec<TaskItem>, ApiError> {
    get(&fetch_plan(mode, activity_id).task_path).await
}

/// Claims the reward of a completed task.
pub async fn complete_task(params: &CompleteTaskParams) -> Result<Value, ApiError> {
    post("/api/task/complete", params).await
}
