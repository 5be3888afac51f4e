use crate::api::http::get;
use crate::models::UserActivityParticipation;
use shared::envelope::ApiError;

/// Remaining and total draw attempts for the signed-in user.
pub async fn get_user_activity_participation(
    activity_id: u64,
) -> Result<UserActivityParticipation, ApiError> {
    get(&format!("/api/activity/user/{activity_id}")).await
}
