//! Task presentation mapping.
//!
//! Server status codes: 0 = incomplete, 1 = completed but unclaimed,
//! 2 = claimed. The presentation labels below are kept exactly as the
//! backend contract has them even though the English reads inverted:
//! `Completed` renders the claim button, `Disabled` means already claimed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPresentStatus {
    /// Incomplete — show progress and the go-do-it action.
    Default,
    /// Reward claimable.
    Completed,
    /// Reward already claimed.
    Disabled,
}

pub const TASK_STATUS_INCOMPLETE: i32 = 0;
pub const TASK_STATUS_CLAIMABLE: i32 = 1;
pub const TASK_STATUS_CLAIMED: i32 = 2;

pub fn present_status(status: i32) -> TaskPresentStatus {
    match status {
        TASK_STATUS_INCOMPLETE => TaskPresentStatus::Default,
        TASK_STATUS_CLAIMED => TaskPresentStatus::Disabled,
        _ => TaskPresentStatus::Completed,
    }
}

/// Task names carry a `%s` placeholder for the daily refresh hour.
pub fn display_name(name: &str, refresh_time: i64) -> String {
    name.replacen("%s", &refresh_time.to_string(), 1)
}

/// Progress line shown under an incomplete task; other statuses show none.
pub fn progress_text(status: i32, progress: i64, condition_number: i64) -> String {
    if status == TASK_STATUS_INCOMPLETE {
        format!("已完成{progress}/{condition_number}")
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_the_contract_not_plain_english() {
        assert_eq!(present_status(0), TaskPresentStatus::Default);
        assert_eq!(present_status(1), TaskPresentStatus::Completed);
        assert_eq!(present_status(2), TaskPresentStatus::Disabled);
    }

    #[test]
    fn name_placeholder_substitution() {
        assert_eq!(display_name("每日%s点刷新任务", 5), "每日5点刷新任务");
        assert_eq!(display_name("无占位任务", 5), "无占位任务");
    }

    #[test]
    fn progress_only_for_incomplete_tasks() {
        assert_eq!(progress_text(0, 1, 3), "已完成1/3");
        assert_eq!(progress_text(1, 3, 3), "");
        assert_eq!(progress_text(2, 3, 3), "");
    }
}
