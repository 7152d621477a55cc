//! Unicode and [`Key`] to X11 KeySym translation.
//!
//! KeySyms are the common currency of the X11 and RemoteDesktop portal
//! backends.  A character is translated in two steps:
//!
//! 1. Look it up in a static table of characters that have a legacy KeySym
//!    (Latin-1 printable characters map to themselves, control characters
//!    map to the `0xFFxx` function-key range, and every other character
//!    listed in keysymdef.h has its dedicated code, e.g. Cyrillic, Greek,
//!    Kana and the technical symbols).
//! 2. Otherwise characters in `U+0100..=U+10FFFF` use the direct Unicode
//!    encoding `0x01000000 + code point`.
//!
//! Characters below `U+0100` without a table entry (mostly C0/C1 control
//! characters) cannot be typed and are rejected.
//!
//! Reference: X11/keysymdef.h and X11/XF86keysym.h.

use std::fmt;

use thiserror::Error;

use super::keysym_table::LEGACY_KEYSYMS;
use crate::domain::Key;

/// Offset of the direct Unicode KeySym encoding.
pub const UNICODE_KEYSYM_OFFSET: u32 = 0x0100_0000;

/// A 32-bit X11 KeySym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Keysym(pub u32);

impl Keysym {
    pub const BACKSPACE: Keysym = Keysym(0xff08);
    pub const TAB: Keysym = Keysym(0xff09);
    pub const RETURN: Keysym = Keysym(0xff0d);
    pub const ESCAPE: Keysym = Keysym(0xff1b);
    pub const HOME: Keysym = Keysym(0xff50);
    pub const LEFT: Keysym = Keysym(0xff51);
    pub const UP: Keysym = Keysym(0xff52);
    pub const RIGHT: Keysym = Keysym(0xff53);
    pub const DOWN: Keysym = Keysym(0xff54);
    pub const END: Keysym = Keysym(0xff57);
    pub const SUPER_L: Keysym = Keysym(0xffeb);
    pub const DELETE: Keysym = Keysym(0xffff);

    pub const AUDIO_LOWER_VOLUME: Keysym = Keysym(0x1008_ff11);
    pub const AUDIO_MUTE: Keysym = Keysym(0x1008_ff12);
    pub const AUDIO_RAISE_VOLUME: Keysym = Keysym(0x1008_ff13);
    pub const AUDIO_PLAY: Keysym = Keysym(0x1008_ff14);
    pub const AUDIO_PREV: Keysym = Keysym(0x1008_ff16);
    pub const AUDIO_NEXT: Keysym = Keysym(0x1008_ff17);
    pub const BACK: Keysym = Keysym(0x1008_ff26);
    pub const FORWARD: Keysym = Keysym(0x1008_ff27);

    /// Raw value as expected by Xlib.
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Keysym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// Error returned when a character has no KeySym.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeysymError {
    #[error("character {0:?} has no keysym and is out of range for direct unicode mapping")]
    Unmappable(char),
    #[error("code point U+{0:04X} is not a valid character")]
    InvalidCodePoint(u32),
}

/// Returns the table KeySym for `code_point`, if any.
fn table_keysym(code_point: u32) -> Option<Keysym> {
    match code_point {
        0x08 => Some(Keysym::BACKSPACE),
        0x09 => Some(Keysym::TAB),
        0x0d => Some(Keysym::RETURN),
        0x1b => Some(Keysym::ESCAPE),
        0x7f => Some(Keysym::DELETE),
        // Latin-1 printable characters are their own KeySym.
        0x20..=0x7e | 0xa0..=0xff => Some(Keysym(code_point)),
        _ => LEGACY_KEYSYMS
            .binary_search_by_key(&code_point, |&(cp, _)| cp)
            .ok()
            .map(|i| Keysym(LEGACY_KEYSYMS[i].1)),
    }
}

/// Translates a character to the KeySym that types it.
///
/// A line feed is typed as Return.
///
/// # Errors
///
/// Returns [`KeysymError::Unmappable`] for characters below `U+0100` that are
/// not in the table.
pub fn char_to_keysym(c: char) -> Result<Keysym, KeysymError> {
    let c = if c == '\n' { '\r' } else { c };
    let code_point = u32::from(c);
    if let Some(keysym) = table_keysym(code_point) {
        return Ok(keysym);
    }
    if code_point < 0x100 {
        return Err(KeysymError::Unmappable(c));
    }
    Ok(Keysym(UNICODE_KEYSYM_OFFSET + code_point))
}

/// Translates a raw code point to a KeySym.
///
/// Same as [`char_to_keysym`] but also rejects values that are not Unicode
/// scalar values (surrogates and anything above `U+10FFFF`).
///
/// # Errors
///
/// Returns [`KeysymError::InvalidCodePoint`] or [`KeysymError::Unmappable`].
pub fn rune_to_keysym(code_point: u32) -> Result<Keysym, KeysymError> {
    let c = char::from_u32(code_point).ok_or(KeysymError::InvalidCodePoint(code_point))?;
    char_to_keysym(c)
}

/// Translates every character of `text`, failing on the first unmappable one.
pub fn text_to_keysyms(text: &str) -> Result<Vec<Keysym>, KeysymError> {
    text.chars().map(char_to_keysym).collect()
}

/// Translates a [`Key`] to its KeySym.
pub fn key_to_keysym(key: Key) -> Keysym {
    match key {
        Key::VolumeMute => Keysym::AUDIO_MUTE,
        Key::VolumeDown => Keysym::AUDIO_LOWER_VOLUME,
        Key::VolumeUp => Keysym::AUDIO_RAISE_VOLUME,
        Key::MediaPlayPause => Keysym::AUDIO_PLAY,
        Key::MediaPrevTrack => Keysym::AUDIO_PREV,
        Key::MediaNextTrack => Keysym::AUDIO_NEXT,
        Key::BrowserBack => Keysym::BACK,
        Key::BrowserForward => Keysym::FORWARD,
        Key::Super => Keysym::SUPER_L,
        Key::Left => Keysym::LEFT,
        Key::Right => Keysym::RIGHT,
        Key::Up => Keysym::UP,
        Key::Down => Keysym::DOWN,
        Key::Home => Keysym::HOME,
        Key::End => Keysym::END,
        Key::BackSpace => Keysym::BACKSPACE,
        Key::Delete => Keysym::DELETE,
        Key::Return => Keysym::RETURN,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_table_is_sorted_and_outside_latin1() {
        for pair in LEGACY_KEYSYMS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "table not sorted at {:#x}", pair[1].0);
        }
        assert!(LEGACY_KEYSYMS.iter().all(|&(cp, _)| cp >= 0x100));
    }

    #[test]
    fn test_ascii_maps_to_itself() {
        assert_eq!(rune_to_keysym('a' as u32), Ok(Keysym(0x61)));
        assert_eq!(rune_to_keysym(' ' as u32), Ok(Keysym(0x20)));
        assert_eq!(rune_to_keysym('~' as u32), Ok(Keysym(0x7e)));
    }

    #[test]
    fn test_latin1_maps_to_itself() {
        assert_eq!(rune_to_keysym(0xe9), Ok(Keysym(0xe9))); // é
        assert_eq!(rune_to_keysym(0xa0), Ok(Keysym(0xa0)));
    }

    #[test]
    fn test_control_characters_use_function_keysyms() {
        assert_eq!(char_to_keysym('\r'), Ok(Keysym::RETURN));
        assert_eq!(char_to_keysym('\t'), Ok(Keysym::TAB));
        assert_eq!(char_to_keysym('\u{8}'), Ok(Keysym::BACKSPACE));
        assert_eq!(char_to_keysym('\u{7f}'), Ok(Keysym::DELETE));
    }

    #[test]
    fn test_newline_is_typed_as_return() {
        assert_eq!(char_to_keysym('\n'), Ok(Keysym::RETURN));
    }

    #[test]
    fn test_legacy_entry_wins_over_unicode_offset() {
        assert_eq!(rune_to_keysym(0x0141), Ok(Keysym(0x01a3))); // Ł
        assert_eq!(rune_to_keysym(0x20ac), Ok(Keysym(0x20ac))); // €
    }

    #[test]
    fn test_every_script_block_uses_its_legacy_keysym() {
        let cases = [
            (0x0126, 0x02a1), // Ħ Latin-3
            (0x0138, 0x03a2), // ĸ Latin-4
            (0x30a2, 0x04b1), // ア Kana
            (0x0627, 0x05c7), // ا Arabic
            (0x0430, 0x06c1), // а Cyrillic
            (0x03b1, 0x07e1), // α Greek
            (0x2190, 0x08fb), // ← Technical
            (0x2014, 0x0aa9), // Publishing
            (0x05d0, 0x0ce0), // א Hebrew
            (0x0e01, 0x0da1), // ก Thai
            (0x0152, 0x13bc), // Œ Latin-9
        ];
        for (code_point, keysym) in cases {
            assert_eq!(rune_to_keysym(code_point), Ok(Keysym(keysym)), "U+{code_point:04X}");
        }
    }

    #[test]
    fn test_cyrillic_and_greek_text_use_legacy_keysyms() {
        assert_eq!(
            text_to_keysyms("\u{430}\u{3b1}"),
            Ok(vec![Keysym(0x6c1), Keysym(0x7e1)])
        );
    }

    #[test]
    fn test_no_code_point_has_both_encodings() {
        assert!(LEGACY_KEYSYMS.iter().all(|&(_, ks)| ks < UNICODE_KEYSYM_OFFSET));
    }

    #[test]
    fn test_unmapped_rune_uses_unicode_offset() {
        assert_eq!(rune_to_keysym(0x1e02), Ok(Keysym(0x0100_1e02))); // Latin-8 Ḃ
        assert_eq!(rune_to_keysym(0x263a), Ok(Keysym(0x0100_263a)));
        assert_eq!(rune_to_keysym(0x10ffff), Ok(Keysym(0x0110_ffff)));
    }

    #[test]
    fn test_unmapped_low_rune_is_rejected() {
        assert_eq!(
            rune_to_keysym(0x01),
            Err(KeysymError::Unmappable('\u{1}'))
        );
        assert_eq!(
            rune_to_keysym(0x85),
            Err(KeysymError::Unmappable('\u{85}'))
        );
    }

    #[test]
    fn test_out_of_range_rune_is_rejected() {
        assert_eq!(
            rune_to_keysym(0x11_0000),
            Err(KeysymError::InvalidCodePoint(0x11_0000))
        );
    }

    #[test]
    fn test_text_to_keysyms_stops_at_first_error() {
        assert_eq!(
            text_to_keysyms("a\n"),
            Ok(vec![Keysym(0x61), Keysym::RETURN])
        );
        assert!(text_to_keysyms("a\u{2}b").is_err());
    }

    #[test]
    fn test_key_to_keysym_media_and_navigation() {
        assert_eq!(key_to_keysym(Key::VolumeMute), Keysym(0x1008ff12));
        assert_eq!(key_to_keysym(Key::MediaNextTrack), Keysym(0x1008ff17));
        assert_eq!(key_to_keysym(Key::Super), Keysym(0xffeb));
        assert_eq!(key_to_keysym(Key::Return), Keysym(0xff0d));
    }

    #[test]
    fn test_key_to_keysym_is_injective() {
        let mut seen: Vec<Keysym> = Key::ALL.iter().map(|k| key_to_keysym(*k)).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), Key::ALL.len());
    }
}
