use crate::api::http::{get, post};
use crate::models::{LotteryGift, LotteryParams, LotteryRecordResponse};
use crate::ua;
use shared::envelope::ApiError;

/// Performs one draw. The server adjudicates the prize; the animation the
/// caller runs afterwards is presentation only.
pub async fn get_lottery_result(activity_id: u64) -> Result<LotteryGift, ApiError> {
    let params = LotteryParams {
        activity_id: activity_id as i64,
        platform: ua::device_type().platform_code(),
    };
    post("/api/draw/get", &params).await
}

pub async fn get_lottery_record(
    activity_id: u64,
    page: u32,
    page_size: u32,
) -> Result<LotteryRecordResponse, ApiError> {
    get(&format!(
        "/api/draw/record?activity_id={activity_id}&page={page}&page_size={page_size}"
    ))
    .await
}
