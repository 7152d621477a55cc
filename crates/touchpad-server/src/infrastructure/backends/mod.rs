//! Concrete [`InputBackend`](crate::application::InputBackend) implementations
//! and the platform registry.
//!
//! Which backends exist is decided at compile time via `#[cfg(...)]`;
//! [`default_registry`] lists them with their priorities:
//!
//! | Backend   | Platform | Priority | Notes                                   |
//! |-----------|----------|----------|-----------------------------------------|
//! | `X11`     | Linux    | 0        | XTest; rejects Xwayland                 |
//! | `Windows` | Windows  | 0        | `SendInput`                             |
//! | `portal`  | Linux    | 1        | xdg-desktop-portal RemoteDesktop        |
//! | `uinput`  | Linux    | 2        | virtual devices, console keymap         |
//! | `null`    | any      | 1000     | logs only; `null-backend` feature       |
//!
//! Every backend keeps its OS handle in a [`Lifecycle`] behind its own lock,
//! so a call after `close` fails with [`BackendError::Closed`].

pub mod mock;

#[cfg(feature = "null-backend")]
pub mod null;

#[cfg(target_os = "linux")]
pub mod portal;

#[cfg(target_os = "linux")]
pub mod uinput;

#[cfg(target_os = "linux")]
pub mod x11;

#[cfg(target_os = "windows")]
pub mod windows;

use crate::application::{BackendError, BackendRegistry};
use crate::domain::ServerConfig;

/// Two-state lifecycle of a backend's OS handle.
#[derive(Debug)]
pub enum Lifecycle<H> {
    Open(H),
    Closed,
}

impl<H> Lifecycle<H> {
    /// The handle, or [`BackendError::Closed`].
    pub fn handle(&self) -> Result<&H, BackendError> {
        match self {
            Self::Open(handle) => Ok(handle),
            Self::Closed => Err(BackendError::Closed),
        }
    }

    pub fn handle_mut(&mut self) -> Result<&mut H, BackendError> {
        match self {
            Self::Open(handle) => Ok(handle),
            Self::Closed => Err(BackendError::Closed),
        }
    }

    /// Moves to `Closed` and returns the handle if it was still open.
    pub fn take(&mut self) -> Option<H> {
        match std::mem::replace(self, Self::Closed) {
            Self::Open(handle) => Some(handle),
            Self::Closed => None,
        }
    }

    /// Moves to `Closed` and returns the handle; closing twice is
    /// [`BackendError::Closed`] like every other late call.
    pub fn close(&mut self) -> Result<H, BackendError> {
        self.take().ok_or(BackendError::Closed)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

/// Builds the registry of backends compiled for this platform.
#[allow(unused_variables, unused_mut)]
pub fn default_registry(config: &ServerConfig) -> BackendRegistry {
    let mut registry = BackendRegistry::new();

    #[cfg(target_os = "linux")]
    {
        use std::sync::Arc;

        use crate::application::{BackendDescriptor, InputBackend};

        registry.register(BackendDescriptor::new("X11", 0, || async {
            x11::X11Backend::open().map(|b| Arc::new(b) as Arc<dyn InputBackend>)
        }));

        let portal_options = portal::PortalOptions::from_config(config);
        registry.register(BackendDescriptor::new("portal", 1, move || {
            let options = portal_options.clone();
            async move {
                portal::PortalBackend::connect(options)
                    .await
                    .map(|b| Arc::new(b) as Arc<dyn InputBackend>)
            }
        }));

        let keymap = config.keymap.clone();
        registry.register(BackendDescriptor::new("uinput", 2, move || {
            let keymap = keymap.clone();
            async move {
                uinput::UinputBackend::create(&keymap)
                    .await
                    .map(|b| Arc::new(b) as Arc<dyn InputBackend>)
            }
        }));
    }

    #[cfg(target_os = "windows")]
    {
        use std::sync::Arc;

        use crate::application::{BackendDescriptor, InputBackend};

        registry.register(BackendDescriptor::new("Windows", 0, || async {
            Ok(Arc::new(windows::WindowsBackend::new()) as Arc<dyn InputBackend>)
        }));
    }

    #[cfg(feature = "null-backend")]
    {
        use std::sync::Arc;

        use crate::application::{BackendDescriptor, InputBackend};

        registry.register(BackendDescriptor::new("null", 1000, || async {
            Ok(Arc::new(null::NullBackend::new()) as Arc<dyn InputBackend>)
        }));
    }

    registry
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_handle_while_open() {
        let lifecycle = Lifecycle::Open(7);
        assert_eq!(*lifecycle.handle().unwrap(), 7);
        assert!(lifecycle.is_open());
    }

    #[test]
    fn test_lifecycle_take_closes_once() {
        // Arrange
        let mut lifecycle = Lifecycle::Open("display");

        // Act
        let first = lifecycle.take();
        let second = lifecycle.take();

        // Assert
        assert_eq!(first, Some("display"));
        assert_eq!(second, None);
        assert!(!lifecycle.is_open());
    }

    #[test]
    fn test_lifecycle_second_close_is_closed_error() {
        let mut lifecycle = Lifecycle::Open(3);

        assert_eq!(lifecycle.close().unwrap(), 3);
        assert!(matches!(lifecycle.close(), Err(BackendError::Closed)));
    }

    #[test]
    fn test_lifecycle_closed_reports_closed_error() {
        let mut lifecycle: Lifecycle<u8> = Lifecycle::Closed;
        assert!(matches!(lifecycle.handle(), Err(BackendError::Closed)));
        assert!(matches!(lifecycle.handle_mut(), Err(BackendError::Closed)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_registry_order() {
        let registry = default_registry(&ServerConfig::default());
        let names = registry.names();
        assert_eq!(&names[..3], &["X11", "portal", "uinput"]);
    }

    #[cfg(feature = "null-backend")]
    #[test]
    fn test_null_backend_is_tried_last() {
        let registry = default_registry(&ServerConfig::default());
        assert_eq!(registry.names().last(), Some(&"null"));
    }
}
