//! touchpad-server library crate.
//!
//! This crate turns a browser on a phone or tablet into a touchpad and
//! keyboard for the machine it runs on.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Browser (text commands over WebSocket)
//!         ↕
//! [touchpad-server]
//!   ├── domain/           ServerConfig
//!   ├── application/      InputBackend contract, backend registry, dispatch
//!   └── infrastructure/
//!         ├── ws_server/  WebSocket accept loop, handshake, command loop
//!         ├── challenges/ Rate-limited authentication challenges
//!         └── backends/   X11, portal, uinput, Windows, mock, null
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no async.
//! - `application` depends on `domain` and `touchpad-core` only.
//! - `infrastructure` depends on all other layers plus `tokio`,
//!   `tokio-tungstenite`, and the platform input APIs.
//!
//! # For beginners: how one command flows
//!
//! 1. The browser sends `m5;-3` on its WebSocket.
//! 2. `ws_server` hands the bytes to `touchpad_core::decode_command`, which
//!    returns `Command::PointerMove { dx: 5, dy: -3 }`.
//! 3. `application::apply_command` calls `pointer_move(5, -3)` on the one
//!    backend chosen at startup by `BackendRegistry::select`.
//! 4. The backend (for example X11) synthesizes a relative pointer motion.

/// Domain layer: configuration types (no I/O).
pub mod domain;

/// Application layer: backend contract, selection and dispatch.
pub mod application;

/// Infrastructure layer: WebSocket server and OS input backends.
pub mod infrastructure;
