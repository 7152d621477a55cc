//! Domain values shared by the protocol decoder and every input backend.
//!
//! Nothing in here touches the OS or the network, so it can be tested on any
//! platform without a display server.

/// Pointer buttons and special keys addressed by wire index.
pub mod input;

/// Scroll delta quantization for wheel-click backends.
pub mod scroll;

pub use input::{InputError, Key, PointerButton};
pub use scroll::{ScrollAccumulator, SCROLL_STEP_DIVISOR};
