use crate::api::http::get;
use crate::models::InviteRecordResponse;
use shared::envelope::ApiError;

/// Cursor-paginated invite history; pass `last_id = 0` for the first page.
pub async fn get_invite_record(
    activity_id: u64,
    last_id: i64,
) -> Result<InviteRecordResponse, ApiError> {
    get(&format!("/api/activity/invite/{activity_id}?last_id={last_id}")).await
}
