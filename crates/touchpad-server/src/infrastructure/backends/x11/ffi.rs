//! Thin safe wrappers around the Xlib, XKB and XTest calls the X11 backend
//! needs.
//!
//! Every `unsafe` block lives in this file.  Raw arrays returned by Xlib are
//! copied into owned buffers and freed right away; callers index them
//! through the views in [`super::mapping`].

use std::ffi::{c_int, c_uint, c_ulong};
use std::ptr::{self, NonNull};

use x11::{xlib, xtest};

use super::mapping::{ModifierKeycodes, ModifierMapView};
use crate::application::BackendError;

// ── XKB declarations ──────────────────────────────────────────────────────────

/// Opaque `XkbDescRec`.
#[repr(C)]
struct XkbDesc {
    _private: [u8; 0],
}

const XKB_USE_CORE_KBD: c_uint = 0x0100;
const XKB_COMPAT_MAP_MASK: c_uint = 1 << 2;
const XKB_GEOMETRY_MASK: c_uint = 1 << 5;
const XKB_ALL_COMPONENTS_MASK: c_uint = 0x7f;

#[link(name = "X11")]
extern "C" {
    fn XkbGetKeyboard(
        display: *mut xlib::Display,
        which: c_uint,
        device_spec: c_uint,
    ) -> *mut XkbDesc;
    fn XkbFreeKeyboard(xkb: *mut XkbDesc, which: c_uint, free_desc: xlib::Bool);
    fn XkbTranslateKeyCode(
        xkb: *mut XkbDesc,
        keycode: xlib::KeyCode,
        modifiers: c_uint,
        mods_return: *mut c_uint,
        keysym_return: *mut xlib::KeySym,
    ) -> xlib::Bool;
}

const XWAYLAND_EXTENSION: &[u8] = b"XWAYLAND\0";

// ── Connection ────────────────────────────────────────────────────────────────

/// An open Xlib display connection.  Closed on drop.
pub struct XConnection {
    display: NonNull<xlib::Display>,
}

// SAFETY: the display pointer is only used by one thread at a time; the X11
// backend keeps the connection behind a mutex.
unsafe impl Send for XConnection {}

impl XConnection {
    /// Connects to the display named by `$DISPLAY`.
    pub fn open() -> Result<Self, BackendError> {
        // SAFETY: a null name selects $DISPLAY; a null return is handled.
        let display = unsafe { xlib::XOpenDisplay(ptr::null()) };
        NonNull::new(display)
            .map(|display| Self { display })
            .ok_or_else(|| BackendError::unsupported("failed to connect to X server"))
    }

    fn raw(&self) -> *mut xlib::Display {
        self.display.as_ptr()
    }

    /// `true` if the server advertises the XWAYLAND extension.
    pub fn is_xwayland(&self) -> bool {
        let (mut opcode, mut event, mut error) = (0, 0, 0);
        // SAFETY: valid display, NUL-terminated name, out-pointers to locals.
        unsafe {
            xlib::XQueryExtension(
                self.raw(),
                XWAYLAND_EXTENSION.as_ptr().cast(),
                &mut opcode,
                &mut event,
                &mut error,
            ) != 0
        }
    }

    /// Copies the full core keyboard mapping.
    ///
    /// Returns `(keysyms, min_keycode, keysyms_per_keycode)`.
    pub fn keyboard_mapping(&self) -> Result<(Vec<u64>, u8, usize), BackendError> {
        let (mut min, mut max) = (0 as c_int, 0 as c_int);
        // SAFETY: valid display, out-pointers to locals.
        unsafe { xlib::XDisplayKeycodes(self.raw(), &mut min, &mut max) };
        let min_keycode = u8::try_from(min).map_err(BackendError::synthesis)?;
        let count = max - min + 1;

        let mut per_keycode: c_int = 0;
        // SAFETY: keycode range comes from XDisplayKeycodes.
        let keysyms = unsafe {
            xlib::XGetKeyboardMapping(self.raw(), min_keycode, count, &mut per_keycode)
        };
        if keysyms.is_null() {
            return Err(BackendError::synthesis("failed to get keyboard mapping"));
        }
        let per_keycode = usize::try_from(per_keycode).unwrap_or(0);
        let len = usize::try_from(count).unwrap_or(0) * per_keycode;
        // SAFETY: Xlib returns `count * per_keycode` keysyms; freed below.
        let copied = unsafe { std::slice::from_raw_parts(keysyms, len) }
            .iter()
            .map(|&k| u64::from(k))
            .collect();
        // SAFETY: allocated by Xlib, not used after this point.
        unsafe { xlib::XFree(keysyms.cast()) };
        Ok((copied, min_keycode, per_keycode))
    }

    /// Reads which keycodes toggle each controllable modifier.
    pub fn modifier_keycodes(&self) -> Result<ModifierKeycodes, BackendError> {
        // SAFETY: valid display; a null return is handled.
        let map = unsafe { xlib::XGetModifierMapping(self.raw()) };
        if map.is_null() {
            return Err(BackendError::synthesis("failed to get modifier mapping"));
        }
        // SAFETY: `map` is non-null and owned until XFreeModifiermap.
        let result = unsafe {
            let max_keypermod = usize::try_from((*map).max_keypermod).unwrap_or(0);
            let keycodes = std::slice::from_raw_parts((*map).modifiermap, 8 * max_keypermod);
            ModifierKeycodes::from_map(&ModifierMapView::new(keycodes, max_keypermod))
        };
        // SAFETY: allocated by XGetModifierMapping.
        unsafe { xlib::XFreeModifiermap(map) };
        Ok(result)
    }

    /// Loads the XKB description of the core keyboard.
    pub fn xkb_keyboard(&self) -> Result<XkbKeyboard, BackendError> {
        // SAFETY: valid display; a null return is handled.
        let desc = unsafe {
            XkbGetKeyboard(
                self.raw(),
                XKB_COMPAT_MAP_MASK | XKB_GEOMETRY_MASK,
                XKB_USE_CORE_KBD,
            )
        };
        NonNull::new(desc)
            .map(|desc| XkbKeyboard { desc })
            .ok_or_else(|| BackendError::synthesis("failed to get XKB keyboard description"))
    }

    /// Keycode the server maps `keysym` to, `0` if none.
    pub fn keysym_to_keycode(&self, keysym: u64) -> u8 {
        // SAFETY: valid display.
        unsafe { xlib::XKeysymToKeycode(self.raw(), keysym as xlib::KeySym) }
    }

    /// Current modifier and button state of the core pointer.
    pub fn modifier_state(&self) -> u32 {
        let (mut root, mut child): (xlib::Window, xlib::Window) = (0, 0);
        let (mut root_x, mut root_y, mut x, mut y): (c_int, c_int, c_int, c_int) = (0, 0, 0, 0);
        let mut mask: c_uint = 0;
        // SAFETY: valid display, out-pointers to locals.
        unsafe {
            xlib::XSync(self.raw(), xlib::False);
            let root_window = xlib::XDefaultRootWindow(self.raw());
            xlib::XQueryPointer(
                self.raw(),
                root_window,
                &mut root,
                &mut child,
                &mut root_x,
                &mut root_y,
                &mut x,
                &mut y,
                &mut mask,
            );
        }
        mask
    }

    /// Maps every level of `keycode` to `keysym` (0 clears it) and flushes.
    pub fn set_keycode_mapping(&self, keycode: u8, per_keycode: usize, keysym: u64) {
        let mut levels = vec![keysym as xlib::KeySym; per_keycode.max(1)];
        // SAFETY: `levels` holds exactly `per_keycode` keysyms for one keycode.
        unsafe {
            xlib::XChangeKeyboardMapping(
                self.raw(),
                c_int::from(keycode),
                levels.len() as c_int,
                levels.as_mut_ptr(),
                1,
            );
            xlib::XFlush(self.raw());
        }
    }

    pub fn fake_key(&self, keycode: u8, press: bool) {
        // SAFETY: valid display.
        unsafe { xtest::XTestFakeKeyEvent(self.raw(), c_uint::from(keycode), to_bool(press), 0) };
    }

    pub fn fake_button(&self, button: u32, press: bool) {
        // SAFETY: valid display.
        unsafe { xtest::XTestFakeButtonEvent(self.raw(), button, to_bool(press), 0) };
    }

    pub fn fake_relative_motion(&self, dx: i32, dy: i32) {
        // SAFETY: valid display. The x11 crate declares a trailing extra
        // parameter; libXtst reads (dpy, dx, dy, delay) and ignores it.
        unsafe { xtest::XTestFakeRelativeMotionEvent(self.raw(), dx, dy, 0, 0 as c_ulong) };
    }

    pub fn flush(&self) {
        // SAFETY: valid display.
        unsafe { xlib::XFlush(self.raw()) };
    }
}

impl Drop for XConnection {
    fn drop(&mut self) {
        // SAFETY: the pointer came from XOpenDisplay and is closed once.
        unsafe { xlib::XCloseDisplay(self.raw()) };
    }
}

fn to_bool(value: bool) -> xlib::Bool {
    if value {
        xlib::True
    } else {
        xlib::False
    }
}

// ── XKB keyboard description ──────────────────────────────────────────────────

/// XKB keyboard description, freed on drop.
pub struct XkbKeyboard {
    desc: NonNull<XkbDesc>,
}

impl XkbKeyboard {
    /// Keysym produced by `keycode` under modifier state `mods`.
    pub fn translate(&self, keycode: u8, mods: u32) -> u64 {
        let mut mods_return: c_uint = 0;
        let mut keysym: xlib::KeySym = 0;
        // SAFETY: valid description, out-pointers to locals.
        unsafe {
            XkbTranslateKeyCode(self.desc.as_ptr(), keycode, mods, &mut mods_return, &mut keysym);
        }
        u64::from(keysym)
    }
}

impl Drop for XkbKeyboard {
    fn drop(&mut self) {
        // SAFETY: allocated by XkbGetKeyboard, freed once.
        unsafe { XkbFreeKeyboard(self.desc.as_ptr(), XKB_ALL_COMPONENTS_MASK, xlib::True) };
    }
}
