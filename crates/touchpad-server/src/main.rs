//! Remote touchpad host: entry point.
//!
//! This binary lets a phone or tablet browser drive the pointer and keyboard
//! of this machine.  It picks the first input backend that works here, then
//! serves authenticated WebSocket sessions until Ctrl+C.
//!
//! # Usage
//!
//! ```text
//! touchpad-server [OPTIONS]
//!
//! Options:
//!   --bind            <HOST>  Address to listen on [default: 0.0.0.0]
//!   --port            <PORT>  Port to listen on, 0 picks a free one [default: 0]
//!   --secret          <TEXT>  Shared secret; random when empty
//!   --keymap          <NAME>  Console keymap for the uinput backend [default: us]
//!   --portal-timeout  <SECS>  Wait limit for portal responses [default: 120]
//!   --no-restore-token        Never persist the portal restore token
//!   --cert            <FILE>  PEM certificate chain; serves wss:// with --key
//!   --key             <FILE>  PEM private key for --cert
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable                            | Default   |
//! |-------------------------------------|-----------|
//! | `REMOTE_TOUCHPAD_BIND`              | `0.0.0.0` |
//! | `REMOTE_TOUCHPAD_PORT`              | `0`       |
//! | `REMOTE_TOUCHPAD_SECRET`            | random    |
//! | `REMOTE_TOUCHPAD_KEYMAP`            | `us`      |
//! | `REMOTE_TOUCHPAD_PORTAL_TIMEOUT`    | `120`     |
//! | `REMOTE_TOUCHPAD_NO_RESTORE_TOKEN`  | unset     |
//! | `REMOTE_TOUCHPAD_CERT`              | unset     |
//! | `REMOTE_TOUCHPAD_KEY`               | unset     |
//!
//! # Startup sequence
//!
//! ```text
//! parse CLI ──▶ ServerConfig ──▶ default_registry(..).select()
//!                                   │ no backend: exit with the report
//!                                   ▼
//!                 run_server (until Ctrl+C) ──▶ backend.close()
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use touchpad_core::protocol::random_secret;
use touchpad_server::domain::{ServerConfig, TlsFiles};
use touchpad_server::infrastructure::{default_registry, run_server};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Remote touchpad host.
///
/// Accepts WebSocket connections from a browser and turns its commands into
/// pointer and keyboard input on this machine.
#[derive(Debug, Parser)]
#[command(
    name = "touchpad-server",
    about = "Control the mouse and keyboard of this machine from a browser",
    version
)]
struct Cli {
    /// IP address to listen on.
    ///
    /// Use `127.0.0.1` to accept only local connections.
    #[arg(long, default_value = "0.0.0.0", env = "REMOTE_TOUCHPAD_BIND")]
    bind: String,

    /// TCP port to listen on.  `0` lets the OS pick a free port.
    #[arg(long, default_value_t = 0, env = "REMOTE_TOUCHPAD_PORT")]
    port: u16,

    /// Shared secret clients must know.  A random one is generated when empty.
    #[arg(long, default_value = "", env = "REMOTE_TOUCHPAD_SECRET", hide_env_values = true)]
    secret: String,

    /// Console keymap the uinput backend loads with `loadkeys`.
    #[arg(long, default_value = "us", env = "REMOTE_TOUCHPAD_KEYMAP")]
    keymap: String,

    /// Seconds to wait for each RemoteDesktop portal response.
    ///
    /// Includes the time the user takes to answer the consent dialog.
    #[arg(long, default_value_t = 120, env = "REMOTE_TOUCHPAD_PORTAL_TIMEOUT")]
    portal_timeout: u64,

    /// Do not load or store the portal restore token.
    #[arg(long, env = "REMOTE_TOUCHPAD_NO_RESTORE_TOKEN")]
    no_restore_token: bool,

    /// File containing the TLS certificate chain (PEM).
    #[arg(long, env = "REMOTE_TOUCHPAD_CERT")]
    cert: Option<PathBuf>,

    /// File containing the TLS private key (PEM).
    #[arg(long, env = "REMOTE_TOUCHPAD_KEY")]
    key: Option<PathBuf>,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not a valid IP address, or if only one
    /// of `--cert` and `--key` is given.
    fn into_server_config(self) -> anyhow::Result<ServerConfig> {
        let bind_addr: SocketAddr = format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid bind address: '{}:{}'", self.bind, self.port))?;

        let tls = match (self.cert, self.key) {
            (Some(cert), Some(key)) => Some(TlsFiles { cert, key }),
            (Some(_), None) => bail!("TLS private key missing"),
            (None, Some(_)) => bail!("TLS certificate missing"),
            (None, None) => None,
        };

        Ok(ServerConfig {
            bind_addr,
            secret: self.secret,
            keymap: self.keymap,
            portal_timeout: Duration::from_secs(self.portal_timeout),
            restore_token: !self.no_restore_token,
            tls,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `RUST_LOG` controls the level; `info` when absent or invalid.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = Cli::parse().into_server_config()?;
    if config.secret.is_empty() {
        config.secret = random_secret();
    }

    // ── Backend selection ─────────────────────────────────────────────────────
    let backend = default_registry(&config)
        .select()
        .await
        .context("no usable input backend")?;

    // ── Graceful shutdown flag ─────────────────────────────────────────────────
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("received Ctrl+C; initiating graceful shutdown");
                running_clone.store(false, Ordering::Relaxed);
            }
            Err(e) => {
                tracing::error!("failed to listen for Ctrl+C signal: {e}");
            }
        }
    });

    // ── Main server loop ───────────────────────────────────────────────────────
    let served = run_server(config, backend.clone(), running).await;

    // The backend is closed exactly once, whatever the server loop returned.
    if let Err(e) = backend.backend.close().await {
        warn!("closing {} backend failed: {e}", backend.name);
    }
    info!("remote touchpad host stopped");
    served
}

// ── Tests ─────────────────────────────────────────────────────────────────────
