//! xdg-desktop-portal RemoteDesktop backend.
//!
//! Wayland compositors do not let ordinary clients inject input.  Instead a
//! sandboxing broker, the desktop portal, asks the user for consent and then
//! forwards input on behalf of the application.
//!
//! # Session negotiation (for beginners)
//!
//! ```text
//!  version ──▶ (>= 2) RetrieveSecret ──▶ SecretStore (restore token)
//!  AvailableDeviceTypes  must contain keyboard | pointer
//!  CreateSession         ──▶ session handle
//!  SelectDevices         types = keyboard | pointer, restore token, persist_mode
//!  Start                 status != 0  ──▶ access denied (fatal)
//!                        devices must contain keyboard | pointer
//!                        restore_token ──▶ SecretStore
//! ```
//!
//! Each of these calls except the property reads answers through a
//! `Response` signal; see [`request`].  Anything failing before `Start` means
//! the portal is not usable here and selection moves on.  A refusal at
//! `Start` is final because the user actively said no, and a timeout is
//! reported as such.
//!
//! # Runtime
//!
//! Input is forwarded with the `Notify*` methods.  Each method call waits for
//! its reply before the next is sent, so a key is always released after it
//! was pressed.  Operations share a read lock on the session; [`close`]
//! takes the write lock.
//!
//! [`close`]: crate::application::InputBackend::close

pub mod proxies;
pub mod request;
pub mod secret_store;

use std::fs::File;
use std::io::{self, Read};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use zbus::proxy::CacheProperties;
use zbus::zvariant::{Fd, OwnedObjectPath, Value};
use zbus::Connection;

use touchpad_core::keymap::{key_to_keysym, text_to_keysyms};
use touchpad_core::{Key, Keysym, PointerButton};

use self::proxies::{Options, RemoteDesktopProxy, SecretProxy, SessionProxy};
pub use self::request::{PortalError, ResponseRouter, Results};
pub use self::secret_store::{SecretStore, SecretStoreError};
use super::Lifecycle;
use crate::application::{BackendError, InputBackend};
use crate::domain::ServerConfig;

// ── Portal constants ──────────────────────────────────────────────────────────

pub const DEVICE_KEYBOARD: u32 = 1;
pub const DEVICE_POINTER: u32 = 2;

/// `persist_mode`: keep the permission until the user revokes it.
const PERSIST_UNTIL_REVOKED: u32 = 2;

/// First RemoteDesktop version that understands restore tokens.
const RESTORE_TOKEN_MIN_VERSION: u32 = 2;

const STATE_RELEASED: u32 = 0;
const STATE_PRESSED: u32 = 1;

// linux/input-event-codes.h
const BTN_LEFT: i32 = 0x110;
const BTN_RIGHT: i32 = 0x111;
const BTN_MIDDLE: i32 = 0x112;

const ACCESS_DENIED: &str = "keyboard or pointer access denied";

// ── Options ───────────────────────────────────────────────────────────────────

/// Settings the portal backend takes from [`ServerConfig`].
#[derive(Debug, Clone)]
pub struct PortalOptions {
    /// Upper bound on each `Response` wait.
    pub timeout: Duration,
    /// Whether to load and persist a restore token.
    pub restore_token: bool,
}

impl PortalOptions {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            timeout: config.portal_timeout,
            restore_token: config.restore_token,
        }
    }
}

// ── Backend ───────────────────────────────────────────────────────────────────

/// A started RemoteDesktop session.
struct PortalSession {
    connection: Connection,
    remote_desktop: RemoteDesktopProxy<'static>,
    handle: OwnedObjectPath,
    _router: ResponseRouter,
}

/// [`InputBackend`] that forwards input through the RemoteDesktop portal.
pub struct PortalBackend {
    session: RwLock<Lifecycle<PortalSession>>,
}

impl PortalBackend {
    /// Opens a private session bus connection and negotiates a session.
    ///
    /// # Errors
    ///
    /// - [`BackendError::Unsupported`] if the bus or the portal is missing,
    ///   lacks keyboard or pointer support, or a request fails before `Start`.
    /// - [`BackendError::Denied`] if the user refuses or grants too little.
    /// - [`BackendError::Timeout`] if the portal does not answer a request
    ///   within [`PortalOptions::timeout`].
    pub async fn connect(options: PortalOptions) -> Result<Self, BackendError> {
        let connection = Connection::session()
            .await
            .map_err(|e| {
                BackendError::unsupported(format!("failed to connect to session bus: {e}"))
            })?;
        let router = ResponseRouter::subscribe(&connection, options.timeout)
            .await
            .map_err(BackendError::unsupported)?;
        let remote_desktop = RemoteDesktopProxy::builder(&connection)
            .cache_properties(CacheProperties::No)
            .build()
            .await
            .map_err(BackendError::unsupported)?;

        let version = remote_desktop
            .version()
            .await
            .map_err(|e| BackendError::unsupported(format!("getting 'version' failed: {e}")))?;
        debug!("RemoteDesktop portal version {version}");
        let store = if options.restore_token && version >= RESTORE_TOKEN_MIN_VERSION {
            match open_secret_store(&connection, &router).await {
                Ok(store) => Some(store),
                Err(e) => {
                    warn!("Skipping restore token: {e}");
                    None
                }
            }
        } else {
            None
        };

        let available = remote_desktop
            .available_device_types()
            .await
            .map_err(|e| {
                BackendError::unsupported(format!("getting 'AvailableDeviceTypes' failed: {e}"))
            })?;
        if !has_keyboard_and_pointer(available) {
            return Err(BackendError::unsupported(
                "keyboard or pointer source type not supported",
            ));
        }

        let handle = create_session(&remote_desktop, &router)
            .await
            .map_err(negotiation_error)?;

        let restore_token = store.as_ref().and_then(load_restore_token);
        let select_options = select_devices_options(restore_token.as_deref(), store.is_some());
        router
            .request("SelectDevices", remote_desktop.select_devices(&handle, select_options))
            .await
            .and_then(|response| response.granted("SelectDevices"))
            .map_err(negotiation_error)?;

        let start = router
            .request("Start", remote_desktop.start(&handle, "", Options::new()))
            .await
            .map_err(negotiation_error)?;
        if start.status != 0 {
            return Err(BackendError::Denied(ACCESS_DENIED.to_string()));
        }
        if let Some(store) = &store {
            let token = result_str(&start.results, "restore_token").unwrap_or_default();
            if let Err(e) = store.store(token.as_bytes()) {
                warn!("failed to store restore token: {e}");
            }
        }
        let devices = result_u32(&start.results, "devices")
            .ok_or_else(|| negotiation_error(PortalError::UnexpectedType("devices")))?;
        if !has_keyboard_and_pointer(devices) {
            return Err(BackendError::Denied(ACCESS_DENIED.to_string()));
        }

        info!("RemoteDesktop portal session {} started", handle.as_str());
        Ok(Self {
            session: RwLock::new(Lifecycle::Open(PortalSession {
                connection,
                remote_desktop,
                handle,
                _router: router,
            })),
        })
    }
}

async fn create_session(
    remote_desktop: &RemoteDesktopProxy<'static>,
    router: &ResponseRouter,
) -> Result<OwnedObjectPath, PortalError> {
    let options = Options::from([("session_handle_token", Value::from("t"))]);
    let results = router
        .request("CreateSession", remote_desktop.create_session(options))
        .await?
        .granted("CreateSession")?;
    let handle = result_str(&results, "session_handle")
        .ok_or(PortalError::UnexpectedType("session_handle"))?;
    OwnedObjectPath::try_from(handle).map_err(|_| PortalError::UnexpectedType("session_handle"))
}

/// Asks the portal for the application secret and derives the token store.
async fn open_secret_store(
    connection: &Connection,
    router: &ResponseRouter,
) -> Result<SecretStore, PortalError> {
    let secret_portal = SecretProxy::new(connection).await?;
    let (reader, writer) = rustix::pipe::pipe().map_err(io::Error::from)?;
    router
        .request(
            "RetrieveSecret",
            secret_portal.retrieve_secret(Fd::from(&writer), Options::new()),
        )
        .await?
        .granted("RetrieveSecret")?;
    // Our copy of the write end must be closed or the read never sees EOF.
    drop(writer);

    let secret = tokio::task::spawn_blocking(move || {
        let mut secret = Vec::new();
        File::from(reader).read_to_end(&mut secret).map(|_| secret)
    })
    .await
    .map_err(io::Error::other)??;

    Ok(SecretStore::in_cache_dir(&secret)?)
}

/// The stored restore token, if there is a usable one.
fn load_restore_token(store: &SecretStore) -> Option<String> {
    match store.load() {
        Ok(token) if token.is_empty() => None,
        Ok(token) => match String::from_utf8(token) {
            Ok(token) => Some(token),
            Err(_) => {
                warn!("ignoring restore token that is not UTF-8");
                None
            }
        },
        Err(e) if e.is_not_found() => None,
        Err(e) => {
            warn!("failed to load restore token: {e}");
            None
        }
    }
}

fn select_devices_options(restore_token: Option<&str>, persist: bool) -> Options<'_> {
    let mut options = Options::from([("types", Value::from(DEVICE_KEYBOARD | DEVICE_POINTER))]);
    if persist {
        if let Some(token) = restore_token {
            options.insert("restore_token", Value::from(token));
        }
        options.insert("persist_mode", Value::from(PERSIST_UNTIL_REVOKED));
    }
    options
}

fn has_keyboard_and_pointer(devices: u32) -> bool {
    devices & DEVICE_KEYBOARD != 0 && devices & DEVICE_POINTER != 0
}

fn result_u32(results: &Results, key: &str) -> Option<u32> {
    results.get(key).and_then(|value| value.downcast_ref::<u32>().ok())
}

fn result_str(results: &Results, key: &str) -> Option<String> {
    results
        .get(key)
        .and_then(|value| value.downcast_ref::<&str>().ok())
        .map(str::to_owned)
}

/// Maps a failure before or during `Start` to the selection outcome.
fn negotiation_error(err: PortalError) -> BackendError {
    match err {
        PortalError::Timeout(method) => BackendError::Timeout(format!("'{method}' response")),
        other => BackendError::unsupported(other),
    }
}

/// `(keysym, state)` pairs for typing `keysyms`: press then release each.
fn keysym_events(keysyms: &[Keysym]) -> Vec<(i32, u32)> {
    keysyms
        .iter()
        // The portal takes the keysym's bit pattern as a signed int.
        .flat_map(|keysym| {
            [STATE_PRESSED, STATE_RELEASED].map(|state| (keysym.raw() as i32, state))
        })
        .collect()
}

fn portal_button(button: PointerButton) -> i32 {
    match button {
        PointerButton::Left => BTN_LEFT,
        PointerButton::Right => BTN_RIGHT,
        PointerButton::Middle => BTN_MIDDLE,
    }
}

impl PortalBackend {
    async fn send_keysyms(&self, keysyms: &[Keysym]) -> Result<(), BackendError> {
        let guard = self.session.read().await;
        let session = guard.handle()?;
        for (keysym, state) in keysym_events(keysyms) {
            session
                .remote_desktop
                .notify_keyboard_keysym(&session.handle, Options::new(), keysym, state)
                .await
                .map_err(BackendError::synthesis)?;
        }
        Ok(())
    }
}

#[async_trait]
impl InputBackend for PortalBackend {
    async fn keyboard_text(&self, text: &str) -> Result<(), BackendError> {
        let keysyms = text_to_keysyms(text)?;
        self.send_keysyms(&keysyms).await
    }

    async fn keyboard_key(&self, key: Key) -> Result<(), BackendError> {
        self.send_keysyms(&[key_to_keysym(key)]).await
    }

    async fn pointer_button(&self, button: PointerButton, press: bool) -> Result<(), BackendError> {
        let state = if press { STATE_PRESSED } else { STATE_RELEASED };
        let guard = self.session.read().await;
        let session = guard.handle()?;
        session
            .remote_desktop
            .notify_pointer_button(&session.handle, Options::new(), portal_button(button), state)
            .await
            .map_err(BackendError::synthesis)
    }

    async fn pointer_move(&self, dx: i32, dy: i32) -> Result<(), BackendError> {
        let guard = self.session.read().await;
        let session = guard.handle()?;
        session
            .remote_desktop
            .notify_pointer_motion(&session.handle, Options::new(), f64::from(dx), f64::from(dy))
            .await
            .map_err(BackendError::synthesis)
    }

    async fn pointer_scroll(&self, dx: i32, dy: i32, finish: bool) -> Result<(), BackendError> {
        let guard = self.session.read().await;
        let session = guard.handle()?;
        let options = Options::from([("finish", Value::from(finish))]);
        session
            .remote_desktop
            .notify_pointer_axis(&session.handle, options, f64::from(dx), f64::from(dy))
            .await
            .map_err(BackendError::synthesis)
    }

    async fn close(&self) -> Result<(), BackendError> {
        let session = self.session.write().await.close()?;
        let closed = async {
            SessionProxy::builder(&session.connection)
                .path(session.handle.clone())?
                .build()
                .await?
                .close()
                .await
        };
        if let Err(e) = closed.await {
            warn!("closing portal session failed: {e}");
        }
        info!("RemoteDesktop portal session {} closed", session.handle.as_str());
        // Dropping the session drops the last handle on the bus connection.
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_follow_config() {
        // Arrange
        let config = ServerConfig {
            portal_timeout: Duration::from_secs(5),
            restore_token: false,
            ..ServerConfig::default()
        };

        // Act
        let options = PortalOptions::from_config(&config);

        // Assert
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert!(!options.restore_token);
    }

    #[test]
    fn test_both_device_bits_are_required() {
        assert!(has_keyboard_and_pointer(DEVICE_KEYBOARD | DEVICE_POINTER));
        assert!(has_keyboard_and_pointer(7));
        assert!(!has_keyboard_and_pointer(DEVICE_KEYBOARD));
        assert!(!has_keyboard_and_pointer(DEVICE_POINTER));
        assert!(!has_keyboard_and_pointer(0));
    }

    #[test]
    fn test_select_devices_without_store_only_sets_types() {
        let options = select_devices_options(None, false);

        assert_eq!(options.len(), 1);
        assert_eq!(options["types"], Value::from(3u32));
    }

    #[test]
    fn test_select_devices_with_store_requests_persistence() {
        let options = select_devices_options(None, true);

        assert_eq!(options["persist_mode"], Value::from(PERSIST_UNTIL_REVOKED));
        assert!(!options.contains_key("restore_token"));
    }

    #[test]
    fn test_select_devices_presents_loaded_token() {
        let options = select_devices_options(Some("token-123"), true);

        assert_eq!(options["restore_token"], Value::from("token-123"));
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_each_keysym_is_pressed_then_released() {
        // Arrange
        let keysyms = [Keysym(0x61), Keysym::RETURN];

        // Act
        let events = keysym_events(&keysyms);

        // Assert
        assert_eq!(
            events,
            vec![
                (0x61, STATE_PRESSED),
                (0x61, STATE_RELEASED),
                (0xff0d, STATE_PRESSED),
                (0xff0d, STATE_RELEASED),
            ]
        );
    }

    #[test]
    fn test_media_keysyms_keep_their_bit_pattern() {
        let events = keysym_events(&[Keysym::AUDIO_MUTE]);
        assert_eq!(events[0].0, 0x1008_ff12);
    }

    #[test]
    fn test_buttons_use_evdev_codes() {
        assert_eq!(portal_button(PointerButton::Left), 0x110);
        assert_eq!(portal_button(PointerButton::Right), 0x111);
        assert_eq!(portal_button(PointerButton::Middle), 0x112);
    }

    #[test]
    fn test_negotiation_timeout_stays_a_timeout() {
        let err = negotiation_error(PortalError::Timeout("Start"));

        assert!(matches!(err, BackendError::Timeout(_)));
        assert_eq!(err.to_string(), "timed out waiting for 'Start' response");
    }

    #[test]
    fn test_other_negotiation_failures_are_unsupported() {
        let err = negotiation_error(PortalError::Status {
            method: "SelectDevices",
            status: 2,
        });

        assert!(err.is_unsupported());
        assert!(err.to_string().contains("SelectDevices"));
    }

    #[test]
    fn test_result_helpers_read_typed_values() {
        let mut results = Results::new();
        results.insert("devices".into(), Value::from(3u32).try_to_owned().unwrap());
        results.insert("restore_token".into(), Value::from("abc").try_to_owned().unwrap());

        assert_eq!(result_u32(&results, "devices"), Some(3));
        assert_eq!(result_str(&results, "restore_token").as_deref(), Some("abc"));
        assert_eq!(result_u32(&results, "restore_token"), None);
        assert_eq!(result_str(&results, "missing"), None);
    }

    #[test]
    fn test_missing_token_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = SecretStore::new(&[1u8; 32], dir.path().join("token.bin")).unwrap();

        assert_eq!(load_restore_token(&store), None);

        store.store(b"").unwrap();
        assert_eq!(load_restore_token(&store), None);

        store.store(b"tok").unwrap();
        assert_eq!(load_restore_token(&store).as_deref(), Some("tok"));
    }
}
