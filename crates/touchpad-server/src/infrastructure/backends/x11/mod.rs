//! X11 backend: input synthesis through the XTest extension.
//!
//! # How text reaches the X server (for beginners)
//!
//! XTest fakes *keycodes*, not characters.  To type a character the backend
//! first turns it into a keysym, then looks for a physical key and modifier
//! combination that produces that keysym under the current keyboard layout:
//!
//! 1. Read the live modifier state.
//! 2. Ask XKB which keycode carries the keysym, then try Shift and Mod1 to
//!    Mod5 combinations (keeping modifiers that have no key to release,
//!    like Caps Lock) until one translates to the keysym.
//! 3. If no key produces it, borrow an unused keycode, remap it to the keysym
//!    and wait [`KEYBOARD_MAPPING_DELAY`] so the new mapping is visible.
//!    The delay is a known race: X offers no acknowledgement that clients
//!    picked up a mapping change.
//! 4. Release unwanted modifiers, press missing ones, press and release the
//!    key, then restore the modifiers.
//!
//! A borrowed keycode is cleared again when the batch ends (or fails).
//!
//! # Threading
//!
//! Xlib calls block, so every operation runs on tokio's blocking pool while
//! holding the connection mutex.  The settle delay is a plain thread sleep
//! inside that closure.

mod ffi;
pub mod mapping;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use touchpad_core::keymap::{key_to_keysym, text_to_keysyms};
use touchpad_core::{Key, Keysym, PointerButton, ScrollAccumulator};

use self::ffi::{XConnection, XkbKeyboard};
use self::mapping::{find_mods, KeyboardMappingView, ModifierAdjustment, ModifierKeycodes};
use super::Lifecycle;
use crate::application::{BackendError, InputBackend};

/// Settle time after changing the keyboard mapping.
pub const KEYBOARD_MAPPING_DELAY: Duration = Duration::from_millis(500);

/// X11 core pointer button numbers.
const SCROLL_UP: u32 = 4;
const SCROLL_DOWN: u32 = 5;
const SCROLL_LEFT: u32 = 6;
const SCROLL_RIGHT: u32 = 7;
const MAX_BUTTON: u32 = 9;

struct X11State {
    conn: Lifecycle<XConnection>,
    scroll: ScrollAccumulator,
}

/// XTest-based [`InputBackend`].
pub struct X11Backend {
    state: Arc<Mutex<X11State>>,
}

impl X11Backend {
    /// Connects to `$DISPLAY`.
    ///
    /// # Errors
    ///
    /// [`BackendError::Unsupported`] if no X server is reachable or the
    /// server is Xwayland (XTest there cannot reach native Wayland clients).
    pub fn open() -> Result<Self, BackendError> {
        let conn = XConnection::open()?;
        if conn.is_xwayland() {
            drop(conn);
            return Err(BackendError::unsupported("X server is Xwayland"));
        }
        info!("connected to X server");
        Ok(Self {
            state: Arc::new(Mutex::new(X11State {
                conn: Lifecycle::Open(conn),
                scroll: ScrollAccumulator::new(),
            })),
        })
    }

    /// Runs `f` on the blocking pool with the state locked.
    async fn with_state<R, F>(&self, f: F) -> Result<R, BackendError>
    where
        R: Send + 'static,
        F: FnOnce(&mut X11State) -> Result<R, BackendError> + Send + 'static,
    {
        let state = Arc::clone(&self.state);
        tokio::task::spawn_blocking(move || {
            let mut guard = state
                .lock()
                .map_err(|_| BackendError::synthesis("X11 state lock poisoned"))?;
            f(&mut guard)
        })
        .await
        .map_err(BackendError::synthesis)?
    }

    async fn type_keysyms(&self, keysyms: Vec<Keysym>) -> Result<(), BackendError> {
        self.with_state(move |state| type_keysyms(state.conn.handle()?, &keysyms))
            .await
    }
}

#[async_trait]
impl InputBackend for X11Backend {
    async fn keyboard_text(&self, text: &str) -> Result<(), BackendError> {
        let keysyms = text_to_keysyms(text)?;
        self.type_keysyms(keysyms).await
    }

    async fn keyboard_key(&self, key: Key) -> Result<(), BackendError> {
        self.type_keysyms(vec![key_to_keysym(key)]).await
    }

    async fn pointer_button(&self, button: PointerButton, press: bool) -> Result<(), BackendError> {
        let button = x11_button(button);
        self.with_state(move |state| {
            let conn = state.conn.handle()?;
            send_button(conn, button, press)
        })
        .await
    }

    async fn pointer_move(&self, dx: i32, dy: i32) -> Result<(), BackendError> {
        self.with_state(move |state| {
            let conn = state.conn.handle()?;
            conn.fake_relative_motion(dx, dy);
            conn.flush();
            Ok(())
        })
        .await
    }

    async fn pointer_scroll(&self, dx: i32, dy: i32, finish: bool) -> Result<(), BackendError> {
        self.with_state(move |state| {
            let X11State { conn, scroll } = state;
            let conn = conn.handle()?;
            let (horizontal, vertical) = scroll.accumulate(dx, dy, finish);
            let (button, steps) = scroll_button(horizontal, SCROLL_RIGHT, SCROLL_LEFT);
            click(conn, button, steps)?;
            let (button, steps) = scroll_button(vertical, SCROLL_DOWN, SCROLL_UP);
            click(conn, button, steps)
        })
        .await
    }

    async fn close(&self) -> Result<(), BackendError> {
        self.with_state(|state| {
            // Dropping the connection calls XCloseDisplay.
            state.conn.close()?;
            info!("X server connection closed");
            Ok(())
        })
        .await
    }
}

// ── Keysym injection ──────────────────────────────────────────────────────────

/// A keycode temporarily remapped to a foreign keysym.  Cleared on drop.
struct BorrowedKeycode<'a> {
    conn: &'a XConnection,
    keycode: u8,
    per_keycode: usize,
}

impl<'a> BorrowedKeycode<'a> {
    fn find(conn: &'a XConnection) -> Result<Self, BackendError> {
        let (keysyms, min_keycode, per_keycode) = conn.keyboard_mapping()?;
        let view = KeyboardMappingView::new(&keysyms, min_keycode, per_keycode);
        let keycode = view
            .find_empty_keycode()
            .ok_or_else(|| BackendError::synthesis("no empty keycode found"))?;
        debug!("borrowing empty keycode {keycode}");
        Ok(Self {
            conn,
            keycode,
            per_keycode: view.per_keycode(),
        })
    }

    fn remap(&self, keysym: u64) {
        self.conn.set_keycode_mapping(self.keycode, self.per_keycode, keysym);
    }
}

impl Drop for BorrowedKeycode<'_> {
    fn drop(&mut self) {
        self.remap(0);
    }
}

fn type_keysyms(conn: &XConnection, keysyms: &[Keysym]) -> Result<(), BackendError> {
    if keysyms.is_empty() {
        return Ok(());
    }
    let modifiers = conn.modifier_keycodes()?;
    let keyboard = conn.xkb_keyboard()?;
    let mut borrowed: Option<BorrowedKeycode<'_>> = None;

    for keysym in keysyms {
        let target = u64::from(keysym.raw());
        let active = conn.modifier_state();
        let resolved = resolve_keycode(conn, &keyboard, &modifiers, active, target);
        let (keycode, adjustment) = match resolved {
            Some((keycode, mods)) => (keycode, ModifierAdjustment::between(mods, active)),
            None => {
                let slot = match borrowed.take() {
                    Some(slot) => slot,
                    None => BorrowedKeycode::find(conn)?,
                };
                slot.remap(target);
                // race condition: no way to know when clients saw the change
                std::thread::sleep(KEYBOARD_MAPPING_DELAY);
                let keycode = slot.keycode;
                borrowed = Some(slot);
                (keycode, ModifierAdjustment::default())
            }
        };

        send_mods(conn, &modifiers, adjustment.release, false);
        send_mods(conn, &modifiers, adjustment.press, true);
        conn.fake_key(keycode, true);
        conn.fake_key(keycode, false);
        send_mods(conn, &modifiers, adjustment.press, false);
        send_mods(conn, &modifiers, adjustment.release, true);
        conn.flush();

        if borrowed.as_ref().is_some_and(|slot| slot.keycode == keycode) {
            std::thread::sleep(KEYBOARD_MAPPING_DELAY);
        }
    }
    Ok(())
}

/// Finds a keycode and modifier state producing `keysym`.
fn resolve_keycode(
    conn: &XConnection,
    keyboard: &XkbKeyboard,
    modifiers: &ModifierKeycodes,
    active_mods: u32,
    keysym: u64,
) -> Option<(u8, u32)> {
    let keycode = conn.keysym_to_keycode(keysym);
    if keycode == 0 {
        return None;
    }
    let candidates = modifiers.candidate_mods(active_mods);
    find_mods(&candidates, keysym, |mods| keyboard.translate(keycode, mods))
        .map(|mods| (keycode, mods))
}

fn send_mods(conn: &XConnection, modifiers: &ModifierKeycodes, mods: u32, press: bool) {
    for keycode in modifiers.keycodes_for(mods) {
        conn.fake_key(keycode, press);
    }
}

// ── Pointer helpers ───────────────────────────────────────────────────────────

fn x11_button(button: PointerButton) -> u32 {
    match button {
        PointerButton::Left => 1,
        PointerButton::Right => 3,
        PointerButton::Middle => 2,
    }
}

fn send_button(conn: &XConnection, button: u32, press: bool) -> Result<(), BackendError> {
    if button == 0 || button > MAX_BUTTON {
        return Err(BackendError::synthesis(format!("unsupported pointer button {button}")));
    }
    conn.fake_button(button, press);
    conn.flush();
    Ok(())
}

fn click(conn: &XConnection, button: u32, times: u32) -> Result<(), BackendError> {
    for _ in 0..times {
        send_button(conn, button, true)?;
        send_button(conn, button, false)?;
    }
    Ok(())
}

/// Wheel button and click count for a signed step count.
fn scroll_button(steps: i32, positive: u32, negative: u32) -> (u32, u32) {
    if steps < 0 {
        (negative, steps.unsigned_abs())
    } else {
        (positive, steps.unsigned_abs())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
