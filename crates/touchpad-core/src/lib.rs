//! # touchpad-core
//!
//! Shared library for the remote touchpad host: the text command protocol,
//! challenge-response authentication, and the key translation tables the
//! input backends need.
//!
//! It has no dependencies on OS input APIs, display servers, or sockets, so
//! everything here can be tested on any machine.
//!
//! # Architecture overview (for beginners)
//!
//! A phone or tablet browser acts as a touchpad and keyboard for the host.
//! The browser connects over a WebSocket, proves it knows the shared secret,
//! and then sends short text commands such as `m5;-3` (move the pointer).
//! The host turns each command into synthetic input through whichever OS
//! backend is available (X11, the RemoteDesktop portal, uinput, Windows).
//!
//! This crate defines:
//!
//! - **`protocol`** – The command grammar and the authentication challenge.
//!
//! - **`domain`** – The closed sets of pointer buttons and special keys, and
//!   scroll quantization shared by the wheel-click backends.
//!
//! - **`keymap`** – Translation from characters and keys to X11 KeySyms,
//!   console keymap combinations, and Windows Virtual-Key codes.

pub mod domain;
pub mod keymap;
pub mod protocol;

pub use domain::{InputError, Key, PointerButton, ScrollAccumulator};
pub use keymap::{KeyCombo, Keymap, Keysym};
pub use protocol::{decode_command, Challenge, Command, CommandError};
