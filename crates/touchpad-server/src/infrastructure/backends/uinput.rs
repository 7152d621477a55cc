//! uinput backend: virtual keyboard and mouse devices.
//!
//! Works without any display server (Wayland compositors, the console), but
//! the kernel only sees physical key codes.  To type text the backend needs
//! the layout the user has configured, which it gets from
//! `loadkeys --bkeymap <name>` and [`parse_bkeymap`].  A character the layout
//! cannot produce is an error; this backend does not remap keys.
//!
//! # Shift handling
//!
//! Consecutive characters that need the same shift keys are typed without
//! touching the shift keys in between.  Whenever the held set changes the
//! backend waits [`SHIFT_SETTLE_DELAY`] so the change is not coalesced with
//! the next key press.  All shift keys are released at the end of the text.

use std::time::Duration;

use async_trait::async_trait;
use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, EventType, InputEvent, Key as EvKey, RelativeAxisType};
use tokio::process::Command;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use touchpad_core::keymap::{parse_bkeymap, validate_keymap_name};
use touchpad_core::{Key, KeyCombo, Keymap, PointerButton, ScrollAccumulator};

use super::Lifecycle;
use crate::application::{BackendError, InputBackend};

/// Pause after changing the set of held shift keys.
pub const SHIFT_SETTLE_DELAY: Duration = Duration::from_millis(20);

const KEYBOARD_NAME: &str = "remote-touchpad-keyboard";
const MOUSE_NAME: &str = "remote-touchpad-mouse";

/// Highest key code the virtual keyboard advertises.
const MAX_KEYBOARD_CODE: u16 = 248;

/// One step of a typed key sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Press(u16),
    Release(u16),
    Settle,
}

struct UinputDevices {
    keyboard: VirtualDevice,
    mouse: VirtualDevice,
    scroll: ScrollAccumulator,
}

impl UinputDevices {
    fn create() -> Result<Self, BackendError> {
        let mut keys = AttributeSet::<EvKey>::new();
        for code in 1..=MAX_KEYBOARD_CODE {
            keys.insert(EvKey::new(code));
        }
        let keyboard = VirtualDeviceBuilder::new()
            .and_then(|b| b.name(KEYBOARD_NAME).with_keys(&keys))
            .and_then(|b| b.build())
            .map_err(|e| {
                BackendError::unsupported(format!("failed to create uinput keyboard: {e}"))
            })?;

        let mut buttons = AttributeSet::<EvKey>::new();
        buttons.insert(EvKey::BTN_LEFT);
        buttons.insert(EvKey::BTN_RIGHT);
        buttons.insert(EvKey::BTN_MIDDLE);
        let mut axes = AttributeSet::<RelativeAxisType>::new();
        axes.insert(RelativeAxisType::REL_X);
        axes.insert(RelativeAxisType::REL_Y);
        axes.insert(RelativeAxisType::REL_WHEEL);
        axes.insert(RelativeAxisType::REL_HWHEEL);
        let mouse = VirtualDeviceBuilder::new()
            .and_then(|b| b.name(MOUSE_NAME).with_keys(&buttons))
            .and_then(|b| b.with_relative_axes(&axes))
            .and_then(|b| b.build())
            .map_err(|e| BackendError::unsupported(format!("failed to create uinput mouse: {e}")))?;

        Ok(Self {
            keyboard,
            mouse,
            scroll: ScrollAccumulator::new(),
        })
    }

    /// Sends one key event; `emit` terminates the batch with `SYN_REPORT`.
    fn key(&mut self, code: u16, value: i32) -> Result<(), BackendError> {
        self.keyboard
            .emit(&[InputEvent::new(EventType::KEY, code, value)])
            .map_err(BackendError::synthesis)
    }

    fn mouse(&mut self, events: &[InputEvent]) -> Result<(), BackendError> {
        if events.is_empty() {
            return Ok(());
        }
        self.mouse.emit(events).map_err(BackendError::synthesis)
    }

    async fn run(&mut self, actions: &[KeyAction]) -> Result<(), BackendError> {
        run_actions(actions, |code, value| self.key(code, value)).await
    }
}

/// Sends `actions` through `emit`.
///
/// When an event fails, every key still down is released (best effort,
/// most recent first) before the error is returned, so a failed text never
/// leaves a shift key held for later sessions.
async fn run_actions<F>(actions: &[KeyAction], mut emit: F) -> Result<(), BackendError>
where
    F: FnMut(u16, i32) -> Result<(), BackendError>,
{
    let mut down: Vec<u16> = Vec::new();
    for action in actions {
        let result = match *action {
            KeyAction::Press(code) => emit(code, 1).map(|()| down.push(code)),
            KeyAction::Release(code) => emit(code, 0).map(|()| down.retain(|&k| k != code)),
            KeyAction::Settle => {
                tokio::time::sleep(SHIFT_SETTLE_DELAY).await;
                Ok(())
            }
        };
        if let Err(e) = result {
            for &code in down.iter().rev() {
                if let Err(release) = emit(code, 0) {
                    warn!("releasing key {code} after failed input failed: {release}");
                }
            }
            return Err(e);
        }
    }
    Ok(())
}

/// Virtual-device [`InputBackend`] driven by a console keymap.
pub struct UinputBackend {
    keymap: Keymap,
    devices: Mutex<Lifecycle<UinputDevices>>,
}

impl UinputBackend {
    /// Loads the console keymap `keymap_name` and creates the devices.
    ///
    /// # Errors
    ///
    /// - [`BackendError::Keymap`] for an invalid name or a malformed dump.
    /// - [`BackendError::Unsupported`] if `loadkeys` cannot run or
    ///   `/dev/uinput` cannot be opened.
    pub async fn create(keymap_name: &str) -> Result<Self, BackendError> {
        let keymap = load_keymap(keymap_name).await?;
        let devices = UinputDevices::create()?;
        info!(
            "created uinput devices with keymap {keymap_name:?} ({} characters)",
            keymap.len()
        );
        Ok(Self {
            keymap,
            devices: Mutex::new(Lifecycle::Open(devices)),
        })
    }
}

/// Runs `loadkeys --bkeymap` and parses its output.
async fn load_keymap(name: &str) -> Result<Keymap, BackendError> {
    validate_keymap_name(name)?;
    let output = Command::new("loadkeys")
        .arg("--bkeymap")
        .arg(name)
        .output()
        .await
        .map_err(|e| BackendError::unsupported(format!("failed to run loadkeys: {e}")))?;
    if !output.status.success() {
        return Err(BackendError::unsupported(format!("loadkeys failed: {}", output.status)));
    }
    debug!("loadkeys produced {} bytes", output.stdout.len());
    Ok(parse_bkeymap(&output.stdout)?)
}

/// Turns `text` into key events, changing shift keys only when needed.
fn plan_text(keymap: &Keymap, text: &str) -> Result<Vec<KeyAction>, BackendError> {
    let enter = KeyCombo {
        key: EvKey::KEY_ENTER.code(),
        shift_keys: Vec::new(),
    };
    let mut actions = Vec::new();
    let mut held: &[u16] = &[];
    for c in text.chars() {
        let combo = if c == '\n' {
            &enter
        } else {
            keymap.get(c).ok_or(BackendError::UnmappedCharacter(c))?
        };
        if combo.shift_keys.as_slice() != held {
            for &key in held.iter().filter(|k| !combo.shift_keys.contains(k)) {
                actions.push(KeyAction::Release(key));
            }
            for &key in combo.shift_keys.iter().filter(|k| !held.contains(k)) {
                actions.push(KeyAction::Press(key));
            }
            actions.push(KeyAction::Settle);
            held = &combo.shift_keys;
        }
        actions.push(KeyAction::Press(combo.key));
        actions.push(KeyAction::Release(combo.key));
    }
    actions.extend(held.iter().map(|&key| KeyAction::Release(key)));
    Ok(actions)
}

fn evdev_key(key: Key) -> EvKey {
    match key {
        Key::VolumeMute => EvKey::KEY_MUTE,
        Key::VolumeDown => EvKey::KEY_VOLUMEDOWN,
        Key::VolumeUp => EvKey::KEY_VOLUMEUP,
        Key::MediaPlayPause => EvKey::KEY_PLAYPAUSE,
        Key::MediaPrevTrack => EvKey::KEY_PREVIOUSSONG,
        Key::MediaNextTrack => EvKey::KEY_NEXTSONG,
        Key::BrowserBack => EvKey::KEY_BACK,
        Key::BrowserForward => EvKey::KEY_FORWARD,
        Key::Super => EvKey::KEY_LEFTMETA,
        Key::Left => EvKey::KEY_LEFT,
        Key::Right => EvKey::KEY_RIGHT,
        Key::Up => EvKey::KEY_UP,
        Key::Down => EvKey::KEY_DOWN,
        Key::Home => EvKey::KEY_HOME,
        Key::End => EvKey::KEY_END,
        Key::BackSpace => EvKey::KEY_BACKSPACE,
        Key::Delete => EvKey::KEY_DELETE,
        Key::Return => EvKey::KEY_ENTER,
    }
}

fn evdev_button(button: PointerButton) -> EvKey {
    match button {
        PointerButton::Left => EvKey::BTN_LEFT,
        PointerButton::Right => EvKey::BTN_RIGHT,
        PointerButton::Middle => EvKey::BTN_MIDDLE,
    }
}

/// Wheel events for whole scroll steps.  Positive vertical steps scroll down,
/// which is a negative `REL_WHEEL` value.
fn wheel_events(horizontal: i32, vertical: i32) -> Vec<InputEvent> {
    let mut events = Vec::with_capacity(2);
    if horizontal != 0 {
        events.push(InputEvent::new(
            EventType::RELATIVE,
            RelativeAxisType::REL_HWHEEL.0,
            horizontal,
        ));
    }
    if vertical != 0 {
        events.push(InputEvent::new(EventType::RELATIVE, RelativeAxisType::REL_WHEEL.0, -vertical));
    }
    events
}

#[async_trait]
impl InputBackend for UinputBackend {
    async fn keyboard_text(&self, text: &str) -> Result<(), BackendError> {
        let actions = plan_text(&self.keymap, text)?;
        let mut devices = self.devices.lock().await;
        devices.handle_mut()?.run(&actions).await
    }

    async fn keyboard_key(&self, key: Key) -> Result<(), BackendError> {
        let code = evdev_key(key).code();
        let mut devices = self.devices.lock().await;
        devices
            .handle_mut()?
            .run(&[KeyAction::Press(code), KeyAction::Release(code)])
            .await
    }

    async fn pointer_button(&self, button: PointerButton, press: bool) -> Result<(), BackendError> {
        let event = InputEvent::new(EventType::KEY, evdev_button(button).code(), i32::from(press));
        let mut devices = self.devices.lock().await;
        devices.handle_mut()?.mouse(&[event])
    }

    async fn pointer_move(&self, dx: i32, dy: i32) -> Result<(), BackendError> {
        let events = [
            InputEvent::new(EventType::RELATIVE, RelativeAxisType::REL_X.0, dx),
            InputEvent::new(EventType::RELATIVE, RelativeAxisType::REL_Y.0, dy),
        ];
        let mut devices = self.devices.lock().await;
        devices.handle_mut()?.mouse(&events)
    }

    async fn pointer_scroll(&self, dx: i32, dy: i32, finish: bool) -> Result<(), BackendError> {
        let mut guard = self.devices.lock().await;
        let devices = guard.handle_mut()?;
        let (horizontal, vertical) = devices.scroll.accumulate(dx, dy, finish);
        devices.mouse(&wheel_events(horizontal, vertical))
    }

    async fn close(&self) -> Result<(), BackendError> {
        // Dropping the devices destroys them.
        self.devices.lock().await.close()?;
        info!("uinput devices destroyed");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
