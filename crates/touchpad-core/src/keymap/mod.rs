//! Translation tables from characters and abstract keys to backend codes.
//!
//! - [`keysym`]: characters and [`Key`](crate::domain::Key) values to X11
//!   KeySyms (X11 and RemoteDesktop portal backends).
//! - [`bkeymap`]: console keymap dumps to physical key combinations (uinput
//!   backend).
//! - [`windows_vk`]: keys to Windows Virtual-Key codes.

pub mod bkeymap;
pub mod keysym;
mod keysym_table;
pub mod windows_vk;

pub use bkeymap::{parse_bkeymap, validate_keymap_name, KeyCombo, Keymap, KeymapError};
pub use keysym::{
    char_to_keysym, key_to_keysym, rune_to_keysym, text_to_keysyms, Keysym, KeysymError,
};
