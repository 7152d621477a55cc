//! Logging-only backend.
//!
//! Compiled with the `null-backend` feature and registered with the lowest
//! priority, so it is only chosen when no real backend works.  Useful for
//! trying the client on a machine without a supported desktop.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use touchpad_core::{Key, PointerButton};

use super::Lifecycle;
use crate::application::{BackendError, InputBackend};

pub struct NullBackend {
    state: Mutex<Lifecycle<()>>,
}

impl NullBackend {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(Lifecycle::Open(())),
        }
    }

    fn check_open(&self) -> Result<(), BackendError> {
        self.state
            .lock()
            .map_err(|_| BackendError::synthesis("null backend lock poisoned"))?
            .handle()
            .map(|_| ())
    }
}

impl Default for NullBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InputBackend for NullBackend {
    async fn keyboard_text(&self, text: &str) -> Result<(), BackendError> {
        self.check_open()?;
        info!("keyboard text: {text:?}");
        Ok(())
    }

    async fn keyboard_key(&self, key: Key) -> Result<(), BackendError> {
        self.check_open()?;
        info!("keyboard key: {key:?}");
        Ok(())
    }

    async fn pointer_button(&self, button: PointerButton, press: bool) -> Result<(), BackendError> {
        self.check_open()?;
        info!("pointer button: {button:?} press={press}");
        Ok(())
    }

    async fn pointer_move(&self, dx: i32, dy: i32) -> Result<(), BackendError> {
        self.check_open()?;
        info!("pointer move: {dx} {dy}");
        Ok(())
    }

    async fn pointer_scroll(&self, dx: i32, dy: i32, finish: bool) -> Result<(), BackendError> {
        self.check_open()?;
        info!("pointer scroll: {dx} {dy} finish={finish}");
        Ok(())
    }

    async fn close(&self) -> Result<(), BackendError> {
        self.state
            .lock()
            .map_err(|_| BackendError::synthesis("null backend lock poisoned"))?
            .close()?;
        Ok(())
    }
}
