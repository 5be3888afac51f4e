//! Lifecycle state machine for the install-SDK singleton.
//!
//! At most one script-load-and-construct sequence may run per page; callers
//! that arrive while one is in flight join its outcome instead of starting
//! another. The machine holds the state; the frontend owns the DOM work
//! (script tag, SDK construction) and reports transitions back in.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallPhase {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// What a caller asking for initialization should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitAction {
    /// This caller starts the load; everyone else joins it.
    StartLoad,
    /// A load is in flight; wait for its outcome.
    Join,
    /// Already initialized.
    AlreadyReady,
    /// A previous attempt failed; surface the error (reset to retry).
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstallError(pub String);

impl fmt::Display for InstallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "install SDK unavailable: {}", self.0)
    }
}

impl std::error::Error for InstallError {}

#[derive(Debug, Clone)]
pub struct InstallStateMachine {
    phase: InstallPhase,
}

impl Default for InstallStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl InstallStateMachine {
    pub fn new() -> Self {
        Self { phase: InstallPhase::Idle }
    }

    pub fn phase(&self) -> &InstallPhase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == InstallPhase::Ready
    }

    pub fn request_initialize(&mut self) -> InitAction {
        match &self.phase {
            InstallPhase::Idle => {
                self.phase = InstallPhase::Loading;
                InitAction::StartLoad
            }
            InstallPhase::Loading => InitAction::Join,
            InstallPhase::Ready => InitAction::AlreadyReady,
            InstallPhase::Failed(msg) => InitAction::Failed(msg.clone()),
        }
    }

    /// SDK reported ready. Only meaningful while loading; a stale ready
    /// callback after a reset is ignored.
    pub fn ready(&mut self) -> bool {
        if self.phase == InstallPhase::Loading {
            self.phase = InstallPhase::Ready;
            true
        } else {
            false
        }
    }

    /// Load or construction failed. Ignored unless loading.
    pub fn fail(&mut self, msg: impl Into<String>) -> bool {
        if self.phase == InstallPhase::Loading {
            self.phase = InstallPhase::Failed(msg.into());
            true
        } else {
            false
        }
    }

    /// Back to square one; the next `request_initialize` starts a fresh
    /// load (used to bake new parameters into the SDK instance).
    pub fn reset(&mut self) {
        self.phase = InstallPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concurrent_initializers_share_one_load() {
        let mut m = InstallStateMachine::new();
        assert_eq!(m.request_initialize(), InitAction::StartLoad);
        // Second and third callers before completion join, never re-start.
        assert_eq!(m.request_initialize(), InitAction::Join);
        assert_eq!(m.request_initialize(), InitAction::Join);
    }

    #[test]
    fn ready_then_everyone_sees_ready() {
        let mut m = InstallStateMachine::new();
        assert_eq!(m.request_initialize(), InitAction::StartLoad);
        assert!(m.ready());
        assert!(m.is_ready());
        assert_eq!(m.request_initialize(), InitAction::AlreadyReady);
    }

    #[test]
    fn failure_sticks_until_reset() {
        let mut m = InstallStateMachine::new();
        assert_eq!(m.request_initialize(), InitAction::StartLoad);
        assert!(m.fail("script timeout"));
        assert_eq!(m.request_initialize(), InitAction::Failed("script timeout".into()));

        m.reset();
        assert_eq!(m.request_initialize(), InitAction::StartLoad);
    }

    #[test]
    fn stale_callbacks_after_reset_are_ignored() {
        let mut m = InstallStateMachine::new();
        assert_eq!(m.request_initialize(), InitAction::StartLoad);
        m.reset();
        assert!(!m.ready());
        assert!(!m.fail("late error"));
        assert_eq!(*m.phase(), InstallPhase::Idle);
    }
}
