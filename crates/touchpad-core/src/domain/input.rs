//! Abstract input values carried by the wire protocol.
//!
//! The browser client refers to pointer buttons and special keys by their
//! zero-based index.  Both sets are closed: an index outside the range is a
//! protocol error, never a silently ignored key.

use thiserror::Error;

/// Error returned when a wire index does not name a known [`Key`] or
/// [`PointerButton`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown key index: {0}")]
    UnknownKey(i64),
    #[error("unknown pointer button index: {0}")]
    UnknownPointerButton(i64),
}

/// A pointer button as indexed by the client (bit position in `MouseEvent.buttons`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PointerButton {
    Left = 0,
    Right = 1,
    Middle = 2,
}

impl PointerButton {
    /// All buttons in wire-index order.
    pub const ALL: [PointerButton; 3] = [Self::Left, Self::Right, Self::Middle];
}

impl TryFrom<i64> for PointerButton {
    type Error = InputError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(InputError::UnknownPointerButton(index))
    }
}

/// A non-printable key the client can send with the `k` command.
///
/// The discriminant is the wire index; the order must match the client's
/// key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Key {
    VolumeMute = 0,
    VolumeDown,
    VolumeUp,
    MediaPlayPause,
    MediaPrevTrack,
    MediaNextTrack,
    BrowserBack,
    BrowserForward,
    Super,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    BackSpace,
    Delete,
    Return,
}

impl Key {
    /// All keys in wire-index order.
    pub const ALL: [Key; 18] = [
        Self::VolumeMute,
        Self::VolumeDown,
        Self::VolumeUp,
        Self::MediaPlayPause,
        Self::MediaPrevTrack,
        Self::MediaNextTrack,
        Self::BrowserBack,
        Self::BrowserForward,
        Self::Super,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
        Self::Home,
        Self::End,
        Self::BackSpace,
        Self::Delete,
        Self::Return,
    ];
}

impl TryFrom<i64> for Key {
    type Error = InputError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(InputError::UnknownKey(index))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
