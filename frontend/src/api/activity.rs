use crate::api::http::get;
use crate::models::ActivityDetail;
use shared::envelope::ApiError;
use shared::mode::{fetch_plan, ActivityMode};

/// Activity detail from the endpoint the mode is allowed to call
/// (preview mode has its own unpublished-detail endpoint).
pub async fn get_activity_detail(
    mode: ActivityMode,
    activity_id: u64,
) -> Result<ActivityDetail, ApiError> {
    get(&fetch_plan(mode, activity_id).detail_path).await
}
