//! Application layer: the backend contract, startup selection, and command
//! dispatch.
//!
//! Nothing here talks to the OS or the network directly; concrete backends
//! and the WebSocket server live in `infrastructure`.

pub mod backend;
pub mod dispatch;
pub mod registry;

pub use backend::{BackendError, InputBackend};
pub use dispatch::apply_command;
pub use registry::{ActiveBackend, BackendDescriptor, BackendRegistry, SelectionError};
