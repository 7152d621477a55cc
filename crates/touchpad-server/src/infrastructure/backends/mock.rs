//! Recording backend for tests.
//!
//! # Why a recording backend?
//!
//! The real backends move the actual cursor or need a desktop session.
//! `MockBackend` only appends each call to an in-memory list so tests (unit
//! and integration) can assert exactly which calls a session made and in
//! what order.  Set `should_fail` to make every call return
//! [`BackendError::Synthesis`].
//!
//! `mockall`'s generated `MockInputBackend` covers expectation-style unit
//! tests; this type is for end-to-end tests where recording is simpler.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use touchpad_core::{Key, PointerButton};

use super::Lifecycle;
use crate::application::{BackendError, InputBackend};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    KeyboardText(String),
    KeyboardKey(Key),
    PointerButton(PointerButton, bool),
    PointerMove(i32, i32),
    PointerScroll(i32, i32, bool),
}

/// In-memory [`InputBackend`] that records calls.
#[derive(Debug)]
pub struct MockBackend {
    calls: Mutex<Lifecycle<Vec<RecordedCall>>>,
    /// When `true`, every operation fails with a synthesis error.
    pub should_fail: bool,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Lifecycle::Open(Vec::new())),
            should_fail: false,
        }
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose every operation fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Calls recorded so far; empty after `close`.
    pub fn calls(&self) -> Vec<RecordedCall> {
        let guard = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
        guard.handle().map(Clone::clone).unwrap_or_default()
    }

    pub fn is_closed(&self) -> bool {
        let guard = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
        !guard.is_open()
    }

    fn record(&self, call: RecordedCall) -> Result<(), BackendError> {
        let mut guard = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
        let calls = guard.handle_mut()?;
        if self.should_fail {
            return Err(BackendError::synthesis("mock failure"));
        }
        calls.push(call);
        Ok(())
    }
}

#[async_trait]
impl InputBackend for MockBackend {
    async fn keyboard_text(&self, text: &str) -> Result<(), BackendError> {
        self.record(RecordedCall::KeyboardText(text.to_string()))
    }

    async fn keyboard_key(&self, key: Key) -> Result<(), BackendError> {
        self.record(RecordedCall::KeyboardKey(key))
    }

    async fn pointer_button(&self, button: PointerButton, press: bool) -> Result<(), BackendError> {
        self.record(RecordedCall::PointerButton(button, press))
    }

    async fn pointer_move(&self, dx: i32, dy: i32) -> Result<(), BackendError> {
        self.record(RecordedCall::PointerMove(dx, dy))
    }

    async fn pointer_scroll(&self, dx: i32, dy: i32, finish: bool) -> Result<(), BackendError> {
        self.record(RecordedCall::PointerScroll(dx, dy, finish))
    }

    async fn close(&self) -> Result<(), BackendError> {
        let mut guard = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
        guard.close()?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
