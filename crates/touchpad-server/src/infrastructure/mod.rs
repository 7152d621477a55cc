//! Infrastructure layer for touchpad-server.
//!
//! The infrastructure layer handles all I/O: accepting WebSocket connections
//! from browsers and injecting input through the operating system.
//!
//! # Responsibilities
//!
//! - Binding a TCP listener and upgrading `/ws` requests to WebSocket sessions
//! - Wrapping connections in TLS when a certificate is configured
//! - Feeding each session a fresh authentication challenge
//! - Talking to X11, the desktop portal, uinput, or `SendInput`
//!
//! # What does NOT belong here?
//!
//! - Command decoding and authentication math (that is `touchpad-core`)
//! - Backend selection and command dispatch (that is the application layer)
//! - Configuration parsing (that is done in `main.rs`)

pub mod backends;
pub mod challenges;
pub mod tls;
pub mod ws_server;

// Re-export the primary entry points so `main.rs` can call them concisely.
pub use backends::default_registry;
pub use ws_server::{run_server, serve};
