//! Notification lifecycle state machine

use std::fmt;
use thiserror::Error;

/// Lifecycle phases of a single notification instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationPhase {
    /// Sent to the host surface, not yet confirmed shown
    #[default]
    Pending,
    /// Visible in the host notification surface
    Displayed,
    /// The user clicked it (dismissal follows as a sub-step)
    Clicked,
    /// Gone from the notification surface
    Dismissed,
}

impl NotificationPhase {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Displayed => "displayed",
            Self::Clicked => "clicked",
            Self::Dismissed => "dismissed",
        }
    }
}

impl fmt::Display for NotificationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid phase transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid phase transition: cannot {action} while in {current_phase} phase")]
pub struct InvalidPhaseTransition {
    pub current_phase: NotificationPhase,
    pub action: String,
}

/// Notification lifecycle entity.
/// Tracks one notification instance from send to dismissal.
///
/// State machine:
///   PENDING -> DISPLAYED (mark_displayed)
///   DISPLAYED -> CLICKED (mark_clicked)
///   DISPLAYED -> DISMISSED (mark_dismissed, user dismissal without click)
///   CLICKED -> DISMISSED (mark_dismissed)
///
/// There is no retry or resend phase: each push is handled exactly once and
/// redelivery belongs to the transport. Dismissing an already dismissed
/// notification is accepted as a no-op.
#[derive(Debug, Default)]
pub struct NotificationLifecycle {
    phase: NotificationPhase,
}

impl NotificationLifecycle {
    /// Create a new lifecycle in the pending phase
    pub fn new() -> Self {
        Self {
            phase: NotificationPhase::Pending,
        }
    }

    /// Get the current phase
    pub fn phase(&self) -> NotificationPhase {
        self.phase
    }

    /// Check if the notification is currently visible
    pub fn is_displayed(&self) -> bool {
        self.phase == NotificationPhase::Displayed
    }

    /// Check if the notification is gone
    pub fn is_dismissed(&self) -> bool {
        self.phase == NotificationPhase::Dismissed
    }

    /// Transition from PENDING to DISPLAYED
    pub fn mark_displayed(&mut self) -> Result<(), InvalidPhaseTransition> {
        if self.phase != NotificationPhase::Pending {
            return Err(InvalidPhaseTransition {
                current_phase: self.phase,
                action: "mark displayed".to_string(),
            });
        }
        self.phase = NotificationPhase::Displayed;
        Ok(())
    }

    /// Transition from DISPLAYED to CLICKED
    pub fn mark_clicked(&mut self) -> Result<(), InvalidPhaseTransition> {
        if self.phase != NotificationPhase::Displayed {
            return Err(InvalidPhaseTransition {
                current_phase: self.phase,
                action: "mark clicked".to_string(),
            });
        }
        self.phase = NotificationPhase::Clicked;
        Ok(())
    }

    /// Transition to DISMISSED from DISPLAYED or CLICKED.
    /// Dismissing an already dismissed notification is a no-op.
    pub fn mark_dismissed(&mut self) -> Result<(), InvalidPhaseTransition> {
        match self.phase {
            NotificationPhase::Displayed | NotificationPhase::Clicked => {
                self.phase = NotificationPhase::Dismissed;
                Ok(())
            }
            NotificationPhase::Dismissed => Ok(()),
            NotificationPhase::Pending => Err(InvalidPhaseTransition {
                current_phase: self.phase,
                action: "mark dismissed".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lifecycle_is_pending() {
        let lifecycle = NotificationLifecycle::new();
        assert_eq!(lifecycle.phase(), NotificationPhase::Pending);
        assert!(!lifecycle.is_displayed());
        assert!(!lifecycle.is_dismissed());
    }

    #[test]
    fn mark_displayed_from_pending() {
        let mut lifecycle = NotificationLifecycle::new();
        assert!(lifecycle.mark_displayed().is_ok());
        assert!(lifecycle.is_displayed());
    }

    #[test]
    fn mark_displayed_twice_fails() {
        let mut lifecycle = NotificationLifecycle::new();
        lifecycle.mark_displayed().unwrap();

        let err = lifecycle.mark_displayed().unwrap_err();
        assert_eq!(err.current_phase, NotificationPhase::Displayed);
        assert!(err.action.contains("mark displayed"));
    }

    #[test]
    fn mark_clicked_from_displayed() {
        let mut lifecycle = NotificationLifecycle::new();
        lifecycle.mark_displayed().unwrap();

        assert!(lifecycle.mark_clicked().is_ok());
        assert_eq!(lifecycle.phase(), NotificationPhase::Clicked);
    }

    #[test]
    fn mark_clicked_from_pending_fails() {
        let mut lifecycle = NotificationLifecycle::new();

        let err = lifecycle.mark_clicked().unwrap_err();
        assert_eq!(err.current_phase, NotificationPhase::Pending);
    }

    #[test]
    fn click_then_dismiss() {
        let mut lifecycle = NotificationLifecycle::new();
        lifecycle.mark_displayed().unwrap();
        lifecycle.mark_clicked().unwrap();

        assert!(lifecycle.mark_dismissed().is_ok());
        assert!(lifecycle.is_dismissed());
    }

    #[test]
    fn dismiss_without_click() {
        let mut lifecycle = NotificationLifecycle::new();
        lifecycle.mark_displayed().unwrap();

        assert!(lifecycle.mark_dismissed().is_ok());
        assert!(lifecycle.is_dismissed());
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut lifecycle = NotificationLifecycle::new();
        lifecycle.mark_displayed().unwrap();
        lifecycle.mark_dismissed().unwrap();

        assert!(lifecycle.mark_dismissed().is_ok());
        assert!(lifecycle.is_dismissed());
    }

    #[test]
    fn dismiss_from_pending_fails() {
        let mut lifecycle = NotificationLifecycle::new();

        let err = lifecycle.mark_dismissed().unwrap_err();
        assert_eq!(err.current_phase, NotificationPhase::Pending);
    }

    #[test]
    fn click_after_dismiss_fails() {
        let mut lifecycle = NotificationLifecycle::new();
        lifecycle.mark_displayed().unwrap();
        lifecycle.mark_dismissed().unwrap();

        let err = lifecycle.mark_clicked().unwrap_err();
        assert_eq!(err.current_phase, NotificationPhase::Dismissed);
    }

    #[test]
    fn phase_display() {
        assert_eq!(NotificationPhase::Pending.to_string(), "pending");
        assert_eq!(NotificationPhase::Displayed.to_string(), "displayed");
        assert_eq!(NotificationPhase::Clicked.to_string(), "clicked");
        assert_eq!(NotificationPhase::Dismissed.to_string(), "dismissed");
    }
}
