//! Windows backend via the `SendInput` API.
//!
//! Text is sent as `KEYEVENTF_UNICODE` events, one down/up pair per UTF-16
//! code unit, so no keyboard layout knowledge is needed.  Keys use the
//! Virtual-Key table from `touchpad_core::keymap::windows_vk`.  Scroll deltas
//! are passed through scaled by [`SCROLL_MULTIPLIER`] (Windows accepts
//! fractions of a wheel notch, so there is no accumulator).

use std::sync::Mutex;

use async_trait::async_trait;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, KEYEVENTF_UNICODE, MOUSEEVENTF_HWHEEL,
    MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MIDDLEDOWN, MOUSEEVENTF_MIDDLEUP,
    MOUSEEVENTF_MOVE, MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP, MOUSEEVENTF_WHEEL,
    MOUSEINPUT, MOUSE_EVENT_FLAGS, VIRTUAL_KEY,
};

use touchpad_core::keymap::windows_vk::{is_extended_vk, key_to_vk};
use touchpad_core::{Key, PointerButton};

use super::Lifecycle;
use crate::application::{BackendError, InputBackend};

/// Wheel units per client scroll unit.
pub const SCROLL_MULTIPLIER: i32 = 6;

/// `SendInput`-based [`InputBackend`].
pub struct WindowsBackend {
    state: Mutex<Lifecycle<()>>,
}

impl WindowsBackend {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(Lifecycle::Open(())),
        }
    }

    /// Sends `inputs` unless the backend is closed.
    fn send(&self, inputs: &[INPUT]) -> Result<(), BackendError> {
        let state = self
            .state
            .lock()
            .map_err(|_| BackendError::synthesis("Windows backend lock poisoned"))?;
        state.handle()?;
        if inputs.is_empty() {
            return Ok(());
        }
        // SAFETY: `inputs` is a valid slice of initialized INPUT structures.
        let sent = unsafe { SendInput(inputs, std::mem::size_of::<INPUT>() as i32) };
        if sent as usize != inputs.len() {
            return Err(BackendError::synthesis(windows::core::Error::from_win32()));
        }
        Ok(())
    }
}

impl Default for WindowsBackend {
    fn default() -> Self {
        Self::new()
    }
}

// ── INPUT builders ────────────────────────────────────────────────────────────

fn keyboard_input(vk: u16, scan: u16, flags: KEYBD_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(vk),
                wScan: scan,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn mouse_input(dx: i32, dy: i32, data: i32, flags: MOUSE_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx,
                dy,
                mouseData: data as _,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn text_inputs(text: &str) -> Vec<INPUT> {
    text.encode_utf16()
        .flat_map(|unit| {
            [
                keyboard_input(0, unit, KEYEVENTF_UNICODE),
                keyboard_input(0, unit, KEYEVENTF_UNICODE | KEYEVENTF_KEYUP),
            ]
        })
        .collect()
}

fn key_inputs(key: Key) -> [INPUT; 2] {
    let vk = key_to_vk(key);
    let flags = if is_extended_vk(vk) {
        KEYEVENTF_EXTENDEDKEY
    } else {
        KEYBD_EVENT_FLAGS(0)
    };
    [
        keyboard_input(vk, 0, flags),
        keyboard_input(vk, 0, flags | KEYEVENTF_KEYUP),
    ]
}

fn button_flags(button: PointerButton, press: bool) -> MOUSE_EVENT_FLAGS {
    match (button, press) {
        (PointerButton::Left, true) => MOUSEEVENTF_LEFTDOWN,
        (PointerButton::Left, false) => MOUSEEVENTF_LEFTUP,
        (PointerButton::Right, true) => MOUSEEVENTF_RIGHTDOWN,
        (PointerButton::Right, false) => MOUSEEVENTF_RIGHTUP,
        (PointerButton::Middle, true) => MOUSEEVENTF_MIDDLEDOWN,
        (PointerButton::Middle, false) => MOUSEEVENTF_MIDDLEUP,
    }
}

/// Horizontal then vertical wheel input; the vertical axis is inverted
/// because a positive `WHEEL` value scrolls up.
fn scroll_inputs(dx: i32, dy: i32) -> Vec<INPUT> {
    let mut inputs = Vec::with_capacity(2);
    if dx != 0 {
        inputs.push(mouse_input(0, 0, dx.saturating_mul(SCROLL_MULTIPLIER), MOUSEEVENTF_HWHEEL));
    }
    if dy != 0 {
        inputs.push(mouse_input(0, 0, dy.saturating_mul(-SCROLL_MULTIPLIER), MOUSEEVENTF_WHEEL));
    }
    inputs
}

#[async_trait]
impl InputBackend for WindowsBackend {
    async fn keyboard_text(&self, text: &str) -> Result<(), BackendError> {
        self.send(&text_inputs(text))
    }

    async fn keyboard_key(&self, key: Key) -> Result<(), BackendError> {
        self.send(&key_inputs(key))
    }

    async fn pointer_button(&self, button: PointerButton, press: bool) -> Result<(), BackendError> {
        self.send(&[mouse_input(0, 0, 0, button_flags(button, press))])
    }

    async fn pointer_move(&self, dx: i32, dy: i32) -> Result<(), BackendError> {
        self.send(&[mouse_input(dx, dy, 0, MOUSEEVENTF_MOVE)])
    }

    async fn pointer_scroll(&self, dx: i32, dy: i32, _finish: bool) -> Result<(), BackendError> {
        self.send(&scroll_inputs(dx, dy))
    }

    async fn close(&self) -> Result<(), BackendError> {
        self.state
            .lock()
            .map_err(|_| BackendError::synthesis("Windows backend lock poisoned"))?
            .close()?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_sends_down_and_up_per_utf16_unit() {
        // '😀' is a surrogate pair: two units, four inputs.
        let inputs = text_inputs("a😀");

        assert_eq!(inputs.len(), 6);
        // SAFETY: built as keyboard inputs above.
        let first = unsafe { inputs[0].Anonymous.ki };
        let second = unsafe { inputs[1].Anonymous.ki };
        assert_eq!(first.wScan, u16::from(b'a'));
        assert_eq!(first.dwFlags, KEYEVENTF_UNICODE);
        assert_eq!(second.dwFlags, KEYEVENTF_UNICODE | KEYEVENTF_KEYUP);
    }

    #[test]
    fn test_navigation_keys_are_extended() {
        let [down, up] = key_inputs(Key::Left);
        // SAFETY: built as keyboard inputs above.
        let (down, up) = unsafe { (down.Anonymous.ki, up.Anonymous.ki) };

        assert_eq!(down.wVk, VIRTUAL_KEY(0x25));
        assert_eq!(down.dwFlags, KEYEVENTF_EXTENDEDKEY);
        assert_eq!(up.dwFlags, KEYEVENTF_EXTENDEDKEY | KEYEVENTF_KEYUP);
    }

    #[test]
    fn test_scroll_is_scaled_and_vertical_inverted() {
        let inputs = scroll_inputs(2, 3);

        assert_eq!(inputs.len(), 2);
        // SAFETY: built as mouse inputs above.
        let (h, v) = unsafe { (inputs[0].Anonymous.mi, inputs[1].Anonymous.mi) };
        assert_eq!(h.dwFlags, MOUSEEVENTF_HWHEEL);
        assert_eq!(h.mouseData as i32, 12);
        assert_eq!(v.dwFlags, MOUSEEVENTF_WHEEL);
        assert_eq!(v.mouseData as i32, -18);
    }

    #[test]
    fn test_zero_scroll_sends_nothing() {
        assert!(scroll_inputs(0, 0).is_empty());
    }

    #[tokio::test]
    async fn test_closed_backend_rejects_calls() {
        let backend = WindowsBackend::new();
        backend.close().await.unwrap();
        assert!(matches!(backend.pointer_move(1, 1).await, Err(BackendError::Closed)));
        assert!(matches!(backend.close().await, Err(BackendError::Closed)));
    }
}
