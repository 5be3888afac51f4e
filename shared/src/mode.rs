//! Operating-mode resolution and the per-mode fetch plan.
//!
//! The page runs in one of three modes. `preview` is selected by a
//! base64-encoded query parameter carried by the operator's preview link;
//! otherwise the presence of a stored auth token decides between `normal`
//! and `guest`. Mode gates which endpoints are legal to call, so it must be
//! resolved synchronously before the first request goes out.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityMode {
    Guest,
    Preview,
    Normal,
}

impl fmt::Display for ActivityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActivityMode::Guest => "guest",
            ActivityMode::Preview => "preview",
            ActivityMode::Normal => "normal",
        })
    }
}

/// Decoded form of the `activityPreview` / `fbpvm` query parameter.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PreviewParam {
    pub mode: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewParamError {
    Base64(String),
    Json(String),
}

impl fmt::Display for PreviewParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewParamError::Base64(e) => write!(f, "invalid base64: {e}"),
            PreviewParamError::Json(e) => write!(f, "invalid payload: {e}"),
        }
    }
}

impl std::error::Error for PreviewParamError {}

pub fn decode_preview_param(raw: &str) -> Result<PreviewParam, PreviewParamError> {
    let bytes = STANDARD
        .decode(raw.trim())
        .map_err(|e| PreviewParamError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| PreviewParamError::Json(e.to_string()))
}

/// Outcome of mode resolution. When a preview link carries a token that
/// differs from the stored one (and the page is not inside the host app,
/// which owns its own identity), the carried token becomes the session
/// credential and must be persisted before the first signed request.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeResolution {
    pub mode: ActivityMode,
    pub adopt_token: Option<String>,
}

pub fn resolve_mode(
    preview_param: Option<&str>,
    stored_token: Option<&str>,
    in_fanbook: bool,
) -> ModeResolution {
    if let Some(raw) = preview_param {
        match decode_preview_param(raw) {
            Ok(param) if param.mode == "preview" => {
                let adopt = (!in_fanbook && stored_token != Some(param.token.as_str()))
                    .then(|| param.token.clone());
                return ModeResolution {
                    mode: ActivityMode::Preview,
                    adopt_token: adopt,
                };
            }
            Ok(param) => {
                log::warn!("preview parameter with unexpected mode {:?}", param.mode);
            }
            Err(e) => {
                log::error!("failed to parse preview parameter: {e}");
            }
        }
    }

    let has_token = stored_token.map_or(false, |t| !t.is_empty());
    ModeResolution {
        mode: if has_token { ActivityMode::Normal } else { ActivityMode::Guest },
        adopt_token: None,
    }
}

/// The endpoints a mode is allowed to hit, and whether the remaining-draws
/// counter is fetched at all. Guest and preview task lists never require
/// identity; only `normal` touches the participation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    pub detail_path: String,
    pub task_path: String,
    pub fetch_lottery_times: bool,
}

pub fn fetch_plan(mode: ActivityMode, activity_id: u64) -> FetchPlan {
    match mode {
        ActivityMode::Guest => FetchPlan {
            detail_path: format!("/api/activity/{activity_id}"),
            task_path: format!("/api/task/guest/{activity_id}"),
            fetch_lottery_times: false,
        },
        ActivityMode::Preview => FetchPlan {
            detail_path: format!("/api/activity/preview/{activity_id}"),
            task_path: format!("/api/task/preview/day/{activity_id}"),
            fetch_lottery_times: false,
        },
        ActivityMode::Normal => FetchPlan {
            detail_path: format!("/api/activity/{activity_id}"),
            task_path: format!("/api/task/day/{activity_id}"),
            fetch_lottery_times: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview_param(mode: &str, token: &str) -> String {
        STANDARD.encode(format!(r#"{{"mode":"{mode}","token":"{token}"}}"#))
    }

    #[test]
    fn no_token_no_param_is_guest() {
        let res = resolve_mode(None, None, false);
        assert_eq!(res.mode, ActivityMode::Guest);
        assert_eq!(res.adopt_token, None);
    }

    #[test]
    fn stored_token_is_normal() {
        let res = resolve_mode(None, Some("abc"), false);
        assert_eq!(res.mode, ActivityMode::Normal);
        let res = resolve_mode(None, Some(""), false);
        assert_eq!(res.mode, ActivityMode::Guest);
    }

    #[test]
    fn preview_param_selects_preview() {
        let raw = preview_param("preview", "abc");
        let res = resolve_mode(Some(&raw), Some("abc"), false);
        assert_eq!(res.mode, ActivityMode::Preview);
        assert_eq!(res.adopt_token, None);
    }

    #[test]
    fn preview_token_mismatch_adopts_carried_token_outside_the_app() {
        let raw = preview_param("preview", "xyz");
        let res = resolve_mode(Some(&raw), Some("abc"), false);
        assert_eq!(res.mode, ActivityMode::Preview);
        assert_eq!(res.adopt_token.as_deref(), Some("xyz"));

        // Inside the host app the carried token is ignored.
        let res = resolve_mode(Some(&raw), Some("abc"), true);
        assert_eq!(res.mode, ActivityMode::Preview);
        assert_eq!(res.adopt_token, None);
    }

    #[test]
    fn malformed_preview_param_falls_back() {
        let res = resolve_mode(Some("!!not-base64!!"), Some("abc"), false);
        assert_eq!(res.mode, ActivityMode::Normal);
        let res = resolve_mode(Some(&STANDARD.encode("{broken")), None, false);
        assert_eq!(res.mode, ActivityMode::Guest);
    }

    #[test]
    fn resolution_is_idempotent() {
        let raw = preview_param("preview", "xyz");
        let first = resolve_mode(Some(&raw), Some("abc"), false);
        // After adoption the stored token equals the carried one.
        let second = resolve_mode(Some(&raw), Some("xyz"), false);
        assert_eq!(first.mode, second.mode);
        assert_eq!(second.adopt_token, None);
    }

    #[test]
    fn guest_plan_never_touches_identity_endpoints() {
        let plan = fetch_plan(ActivityMode::Guest, 42);
        assert_eq!(plan.detail_path, "/api/activity/42");
        assert_eq!(plan.task_path, "/api/task/guest/42");
        assert!(!plan.fetch_lottery_times);
    }

    #[test]
    fn preview_and_normal_plans() {
        let plan = fetch_plan(ActivityMode::Preview, 7);
        assert_eq!(plan.detail_path, "/api/activity/preview/7");
        assert_eq!(plan.task_path, "/api/task/preview/day/7");
        assert!(!plan.fetch_lottery_times);

        let plan = fetch_plan(ActivityMode::Normal, 7);
        assert_eq!(plan.detail_path, "/api/activity/7");
        assert_eq!(plan.task_path, "/api/task/day/7");
        assert!(plan.fetch_lottery_times);
    }
}
