//! The capability contract every input backend implements.
//!
//! A backend owns one OS input-injection handle (an X display connection, a
//! portal D-Bus session, a pair of uinput devices, ...).  Exactly one backend
//! is live per process; it is shared by all client sessions through an
//! `Arc<dyn InputBackend>`, so every method takes `&self` and the backend
//! serializes access internally.
//!
//! # Lifecycle
//!
//! [`InputBackend::close`] releases the OS handle.  Afterwards every method
//! returns [`BackendError::Closed`].  Calls that already passed their
//! closed-check when `close` starts may still complete.

use async_trait::async_trait;
use thiserror::Error;
use touchpad_core::keymap::{KeymapError, KeysymError};
use touchpad_core::{Key, PointerButton};

/// Errors returned by backend construction and operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend cannot run on this system.  Only returned by constructors;
    /// selection moves on to the next candidate.
    #[error("{0}")]
    Unsupported(String),

    /// The backend was closed.
    #[error("backend connection closed")]
    Closed,

    /// The permission broker refused keyboard or pointer access.
    #[error("access denied: {0}")]
    Denied(String),

    /// A request to an external service got no answer in time.
    #[error("timed out waiting for {0}")]
    Timeout(String),

    /// An OS call or broker call failed while synthesizing input.
    #[error("input synthesis failed: {0}")]
    Synthesis(String),

    /// The text contains a character the backend cannot type.
    #[error(transparent)]
    Keysym(#[from] KeysymError),

    /// The active keyboard layout has no key for a character.
    #[error("character {0:?} is not in the keyboard layout")]
    UnmappedCharacter(char),

    /// The console keymap could not be loaded.
    #[error(transparent)]
    Keymap(#[from] KeymapError),
}

impl BackendError {
    /// Wraps any displayable error as [`BackendError::Unsupported`].
    pub fn unsupported(err: impl std::fmt::Display) -> Self {
        Self::Unsupported(err.to_string())
    }

    /// Wraps any displayable error as [`BackendError::Synthesis`].
    pub fn synthesis(err: impl std::fmt::Display) -> Self {
        Self::Synthesis(err.to_string())
    }

    /// `true` if selection may continue with the next backend.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

/// Pointer and keyboard synthesis for one platform technology.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InputBackend: Send + Sync {
    /// Types `text`.  Line breaks arrive normalized to `\n`.
    async fn keyboard_text(&self, text: &str) -> Result<(), BackendError>;

    /// Presses and releases a special key.
    async fn keyboard_key(&self, key: Key) -> Result<(), BackendError>;

    /// Presses (`press = true`) or releases a pointer button.
    async fn pointer_button(&self, button: PointerButton, press: bool) -> Result<(), BackendError>;

    /// Moves the pointer relative to its current position.
    async fn pointer_move(&self, dx: i32, dy: i32) -> Result<(), BackendError>;

    /// Scrolls by a fine-grained delta; `finish` marks the end of the gesture.
    async fn pointer_scroll(&self, dx: i32, dy: i32, finish: bool) -> Result<(), BackendError>;

    /// Releases the OS handle.  Later calls fail with [`BackendError::Closed`].
    async fn close(&self) -> Result<(), BackendError>;
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_unsupported_is_recoverable() {
        assert!(BackendError::unsupported("no X server").is_unsupported());
        assert!(!BackendError::Denied("keyboard".into()).is_unsupported());
        assert!(!BackendError::Timeout("Start".into()).is_unsupported());
        assert!(!BackendError::Closed.is_unsupported());
    }

    #[test]
    fn test_unsupported_displays_reason_verbatim() {
        let err = BackendError::unsupported("failed to connect to X server");
        assert_eq!(err.to_string(), "failed to connect to X server");
    }

    #[test]
    fn test_timeout_and_denied_are_distinct() {
        let timeout = BackendError::Timeout("portal response".into());
        let denied = BackendError::Denied("keyboard or pointer access denied".into());
        assert_ne!(timeout.to_string(), denied.to_string());
        assert!(timeout.to_string().contains("timed out"));
    }
}
