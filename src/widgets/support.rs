//! Support Counter Controller
//!
//! Owns the viewer's supported flag and the running total for one idea.
//! State only changes after the backend confirms the action.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::{ModelError, ServiceError};
use crate::models::{CurrentUser, Idea, IdeaNumber, IdeaStatus};
use crate::services::{IdeaService, Notifier, Services, SignInPrompt};

/// Widget-local copy of the idea's support slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportState {
    pub supported: bool,
    pub total: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportAction {
    Add,
    Remove,
}

impl SupportState {
    pub fn next_action(self) -> SupportAction {
        if self.supported {
            SupportAction::Remove
        } else {
            SupportAction::Add
        }
    }

    /// Apply a confirmed action. Re-applying an action is a no-op.
    pub fn apply(self, action: SupportAction) -> Self {
        match action {
            SupportAction::Add if !self.supported => Self {
                supported: true,
                total: self.total + 1,
            },
            SupportAction::Remove if self.supported => Self {
                supported: false,
                total: self.total - 1,
            },
            _ => self,
        }
    }
}

/// Result of one click on the counter
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    SignInRequested,
    /// Closed idea, or a previous request still in flight
    Ignored,
    Applied(SupportState),
    Failed(ServiceError),
}

pub struct SupportCounter {
    idea: IdeaNumber,
    status: IdeaStatus,
    signed_in: bool,
    state: Cell<SupportState>,
    pending: Cell<bool>,
    ideas: Rc<dyn IdeaService>,
    notifier: Rc<dyn Notifier>,
    sign_in: Rc<dyn SignInPrompt>,
}

impl SupportCounter {
    /// Fails when the idea carries an unknown status code.
    pub fn new(idea: &Idea, user: Option<&CurrentUser>, services: &Services) -> Result<Self, ModelError> {
        Ok(Self {
            idea: idea.number,
            status: idea.status()?,
            signed_in: user.is_some(),
            state: Cell::new(SupportState {
                supported: idea.viewer_supported,
                total: idea.total_supporters,
            }),
            pending: Cell::new(false),
            ideas: services.ideas.clone(),
            notifier: services.notifier.clone(),
            sign_in: services.sign_in.clone(),
        })
    }

    pub fn state(&self) -> SupportState {
        self.state.get()
    }

    /// Closed ideas render a non-interactive counter
    pub fn is_disabled(&self) -> bool {
        self.status.closed()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    pub async fn support_or_undo(&self) -> ClickOutcome {
        if !self.signed_in {
            self.sign_in.show_sign_in();
            return ClickOutcome::SignInRequested;
        }
        if self.is_disabled() || self.pending.get() {
            return ClickOutcome::Ignored;
        }

        let action = self.state.get().next_action();
        self.pending.set(true);
        let result = match action {
            SupportAction::Add => self.ideas.add_support(self.idea).await,
            SupportAction::Remove => self.ideas.remove_support(self.idea).await,
        };
        self.pending.set(false);

        match result {
            Ok(()) => {
                let next = self.state.get().apply(action);
                self.state.set(next);
                log::debug!("[SUPPORT] idea {} {:?} -> {:?}", self.idea, action, next);
                ClickOutcome::Applied(next)
            }
            Err(err) => {
                log::warn!("[SUPPORT] idea {} {:?} failed: {}", self.idea, action, err);
                self.notifier.error(&err.user_message());
                ClickOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::testing::{current_user, idea, Harness};

    fn counter(h: &Harness, status: i32, supported: bool, total: i32, user: Option<&CurrentUser>) -> SupportCounter {
        SupportCounter::new(&idea(1, status, supported, total), user, &h.services()).unwrap()
    }

    #[test]
    fn test_apply_is_idempotent() {
        let state = SupportState { supported: false, total: 3 };
        let added = state.apply(SupportAction::Add);
        assert_eq!(added, SupportState { supported: true, total: 4 });
        assert_eq!(added.apply(SupportAction::Add), added);
        assert_eq!(state.apply(SupportAction::Remove), state);
    }

    #[test]
    fn test_unknown_status_fails_construction() {
        let h = Harness::new();
        let result = SupportCounter::new(&idea(1, 7, false, 0), None, &h.services());
        assert!(matches!(result, Err(ModelError::UnknownStatus(7))));
    }

    #[tokio::test]
    async fn test_add_support_success() {
        let h = Harness::new();
        let user = current_user(Role::Visitor);
        let c = counter(&h, 0, false, 3, Some(&user));

        let outcome = c.support_or_undo().await;

        assert_eq!(outcome, ClickOutcome::Applied(SupportState { supported: true, total: 4 }));
        assert_eq!(c.state(), SupportState { supported: true, total: 4 });
        assert_eq!(h.ideas.calls(), vec![("add", 1)]);
    }

    #[tokio::test]
    async fn test_remove_support_success() {
        let h = Harness::new();
        let user = current_user(Role::Visitor);
        let c = counter(&h, 1, true, 5, Some(&user));

        c.support_or_undo().await;

        assert_eq!(c.state(), SupportState { supported: false, total: 4 });
        assert_eq!(h.ideas.calls(), vec![("remove", 1)]);
    }

    #[tokio::test]
    async fn test_anonymous_click_prompts_sign_in_each_time() {
        let h = Harness::new();
        let c = counter(&h, 0, false, 3, None);

        for clicks in 1..=3 {
            assert_eq!(c.support_or_undo().await, ClickOutcome::SignInRequested);
            assert_eq!(h.sign_in.count(), clicks);
        }
        assert_eq!(c.state(), SupportState { supported: false, total: 3 });
        assert!(h.ideas.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_response_leaves_state_and_notifies() {
        let h = Harness::new();
        h.ideas.fail_with(ServiceError::Rejected { status: 400, message: Some("Idea is closed".to_string()) });
        let user = current_user(Role::Visitor);
        let c = counter(&h, 0, true, 8, Some(&user));

        let outcome = c.support_or_undo().await;

        assert!(matches!(outcome, ClickOutcome::Failed(_)));
        assert_eq!(c.state(), SupportState { supported: true, total: 8 });
        assert_eq!(h.notifier.messages(), vec!["Idea is closed".to_string()]);
        assert!(!c.is_pending());
    }

    #[tokio::test]
    async fn test_completed_idea_is_disabled() {
        let h = Harness::new();
        let user = current_user(Role::Visitor);
        let c = counter(&h, 2, true, 5, Some(&user));

        assert!(c.is_disabled());
        assert_eq!(c.support_or_undo().await, ClickOutcome::Ignored);
        assert_eq!(c.state(), SupportState { supported: true, total: 5 });
        assert!(h.ideas.calls().is_empty());
    }

    #[test]
    fn test_declined_idea_is_disabled() {
        let h = Harness::new();
        assert!(counter(&h, 3, false, 0, None).is_disabled());
        assert!(!counter(&h, 4, false, 0, None).is_disabled());
    }

    #[tokio::test]
    async fn test_open_idea_anonymous_viewer_scenario() {
        let h = Harness::new();
        let c = counter(&h, 0, false, 3, None);

        assert!(!c.is_disabled());
        c.support_or_undo().await;

        assert_eq!(h.sign_in.count(), 1);
        assert_eq!(c.state(), SupportState { supported: false, total: 3 });
    }

    #[tokio::test]
    async fn test_click_while_pending_is_ignored() {
        let h = Harness::new();
        let user = current_user(Role::Visitor);
        let c = counter(&h, 0, false, 3, Some(&user));

        let (first, second) = tokio::join!(c.support_or_undo(), c.support_or_undo());

        assert_eq!(first, ClickOutcome::Applied(SupportState { supported: true, total: 4 }));
        assert_eq!(second, ClickOutcome::Ignored);
        assert_eq!(h.ideas.calls().len(), 1);
    }
}
