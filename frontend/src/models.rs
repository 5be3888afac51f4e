use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Gift {
    pub gift_id: i64,
    pub name: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub r#type: i32,
}

/// One prize slot of the draw, in server position order.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DrawGift {
    pub draw_gift_id: i64,
    #[serde(default)]
    pub draw_id: i64,
    pub gift_id: i64,
    pub activity_id: i64,
    pub position: i32,
    #[serde(default)]
    pub r#type: i32,
    pub gift: Gift,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MoreActivityItem {
    #[serde(default)]
    pub activity_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Grid lottery template tag.
pub const TEMPLATE_SQUARED_PAPER: &str = "squared_paper";
/// Wheel template tag.
pub const TEMPLATE_BIG_WHEEL: &str = "the_big_wheel_arrow";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ActivityDetail {
    pub activity_id: i64,
    pub name: String,
    #[serde(default)]
    pub bg_img_color: String,
    #[serde(default)]
    pub header_img: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    pub template_type: String,
    #[serde(default)]
    pub draw_img: String,
    #[serde(default)]
    pub draw_button_img: String,
    #[serde(default)]
    pub task_img: String,
    #[serde(default)]
    pub guild_id: String,
    #[serde(default)]
    pub more_title: Option<String>,
    #[serde(default)]
    pub more_activity: Vec<MoreActivityItem>,
    #[serde(default)]
    pub gift: Vec<DrawGift>,
    #[serde(default)]
    pub rule: String,
    /// Which section leads: 0 = default order, 1 = draw first, 2 = tasks first.
    #[serde(default)]
    pub priority: i32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TaskItem {
    pub activity_task_id: i64,
    pub activity_id: i64,
    pub name: String,
    #[serde(default)]
    pub task_event: String,
    /// Deep-link payload as a JSON string; parsed only on click.
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub r#type: i32,
    #[serde(default)]
    pub condition_number: i64,
    #[serde(default)]
    pub task_refresh_time: i64,
    pub status: i32,
    #[serde(default)]
    pub progress: i64,
    #[serde(default)]
    pub reward_number: i64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CompleteTaskParams {
    pub activity_id: i64,
    pub activity_task_id: i64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UserActivityParticipation {
    pub activity_id: i64,
    #[serde(default)]
    pub user_id: String,
    pub remain_total: i64,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub status: i32,
}

/// A real prize; 0 is the consolation "thanks for playing" slot.
pub const GIFT_TYPE_PRIZE: i32 = 1;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LotteryGift {
    pub draw_gift_id: i64,
    pub gift_id: i64,
    pub gift_name: String,
    #[serde(default)]
    pub gift_img: String,
    pub gift_type: i32,
    #[serde(default)]
    pub cd_key: Option<String>,
    #[serde(default)]
    pub prize_id: i64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LotteryParams {
    pub activity_id: i64,
    pub platform: u8,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LotteryRecordItem {
    pub reward_record_id: i64,
    pub activity_id: i64,
    #[serde(default)]
    pub user_id: String,
    pub gift_id: i64,
    pub gift_name: String,
    #[serde(default)]
    pub gift_img: String,
    #[serde(default)]
    pub gift_num: i64,
    pub gift_type: i32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub cd_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Pagination {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub per_page: i64,
    #[serde(default)]
    pub current_page: i64,
    #[serde(default)]
    pub last_page: i64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LotteryRecordResponse {
    #[serde(default)]
    pub list: Vec<LotteryRecordItem>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InviteUser {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub nickname: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InviteRecordItem {
    pub id: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub join_user_id: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub user_id: String,
    pub user: InviteUser,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InviteRecordResponse {
    #[serde(default)]
    pub list: Vec<InviteRecordItem>,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub last_id: i64,
}

/// Parsed form of `TaskItem::action`: `{"params": {...}}` with the bridge
/// jump arguments inside.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TaskAction {
    #[serde(default)]
    pub params: Option<Value>,
}
