//! Server configuration.
//!
//! [`ServerConfig`] holds every runtime setting.  `main.rs` fills it from CLI
//! arguments and environment variables; tests use [`ServerConfig::default`]
//! and override single fields.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// All runtime configuration for the touchpad host.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the WebSocket server binds to.  Port 0 picks a free port.
    pub bind_addr: SocketAddr,

    /// Shared secret clients must prove knowledge of during the handshake.
    pub secret: String,

    /// Console keymap the uinput backend asks `loadkeys` for.
    pub keymap: String,

    /// Upper bound on waiting for a RemoteDesktop portal `Response` signal.
    ///
    /// Covers the consent dialog, so it is generous.
    pub portal_timeout: Duration,

    /// Whether the portal backend may persist a restore token so later runs
    /// skip the consent dialog.
    pub restore_token: bool,

    /// Certificate and key for serving `wss://`.  Plain `ws://` when `None`.
    pub tls: Option<TlsFiles>,
}

/// PEM files of the TLS certificate chain and its private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsFiles {
    pub cert: PathBuf,
    pub key: PathBuf,
}

impl Default for ServerConfig {
    /// | Field          | Default        |
    /// |----------------|----------------|
    /// | bind_addr      | `0.0.0.0:0`    |
    /// | secret         | empty          |
    /// | keymap         | `us`           |
    /// | portal_timeout | 120 seconds    |
    /// | restore_token  | `true`         |
    /// | tls            | `None`         |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 0)),
            secret: String::new(),
            keymap: "us".to_string(),
            portal_timeout: Duration::from_secs(120),
            restore_token: true,
            tls: None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binds_any_port_on_all_interfaces() {
        // Arrange / Act
        let cfg = ServerConfig::default();
        // Assert
        assert_eq!(cfg.bind_addr.port(), 0);
        assert!(cfg.bind_addr.ip().is_unspecified());
    }

    #[test]
    fn test_default_keymap_is_us() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.keymap, "us");
    }

    #[test]
    fn test_default_portal_timeout() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.portal_timeout, Duration::from_secs(120));
        assert!(cfg.restore_token);
    }

    #[test]
    fn test_default_serves_plain_websocket() {
        assert_eq!(ServerConfig::default().tls, None);
    }
}
