//! Parser for the binary console keymap dump produced by `loadkeys --bkeymap`.
//!
//! The uinput backend types text by pressing physical keys, so it needs to
//! know which key (and which shift keys) produce each character under the
//! active console layout.  `loadkeys` compiles a named layout into this
//! format:
//!
//! ```text
//! "bkeymap"                       7-byte signature
//! [u8; 256]                       non-zero = keymap slot is present
//! for each present slot, ascending:
//!     [u16 LE; 128]               one entry per physical key code
//! ```
//!
//! Each entry packs a key type into the high byte and a value into the low
//! byte (see `linux/keyboard.h`).  A slot index is a bitmask of the shift
//! semantics (Shift, AltGr, Control, ...) that must be held to select it.
//!
//! # Building the character table
//!
//! 1. Slot 0 tells which physical key carries each shift semantic
//!    (`KT_SHIFT` entries; the first key wins).
//! 2. Slots are visited in ascending index order.  A slot that needs a shift
//!    semantic with no known physical key is skipped.
//! 3. Every `KT_LATIN` / `KT_LETTER` entry with a non-zero value maps that
//!    character to `(physical key, held shift keys)`.  The first mapping for
//!    a character is kept, so the simplest combination wins.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

/// File signature at the start of every dump.
pub const BKEYMAP_SIGNATURE: &[u8] = b"bkeymap";

/// Number of key codes per keymap slot (`NR_KEYS`).
pub const NR_KEYS: usize = 128;

/// Number of possible keymap slots (`MAX_NR_KEYMAPS`).
pub const MAX_NR_KEYMAPS: usize = 256;

/// Number of shift semantics (`NR_SHIFT`).
pub const NR_SHIFT: usize = 9;

const KT_LATIN: u16 = 0;
const KT_SHIFT: u16 = 7;
const KT_LETTER: u16 = 11;

/// Errors produced while validating a keymap name or parsing a dump.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeymapError {
    #[error("invalid keymap name: {0:?}")]
    InvalidName(String),
    #[error("invalid bkeymap: signature not found")]
    MissingSignature,
    #[error("invalid bkeymap: unexpected end of data in {0}")]
    Truncated(&'static str),
}

/// The physical key and shift keys that produce one character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyCombo {
    /// Linux input key code of the character key.
    pub key: u16,
    /// Key codes of the shift keys to hold, in shift-semantic order.
    pub shift_keys: Vec<u16>,
}

/// Character to [`KeyCombo`] table for one console layout.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    combos: HashMap<char, KeyCombo>,
}

impl Keymap {
    /// Looks up the combination that types `c`.
    pub fn get(&self, c: char) -> Option<&KeyCombo> {
        self.combos.get(&c)
    }

    /// Number of characters the layout can type.
    pub fn len(&self) -> usize {
        self.combos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }
}

/// Builds a table directly; like the parser, the first entry per character wins.
impl FromIterator<(char, KeyCombo)> for Keymap {
    fn from_iter<I: IntoIterator<Item = (char, KeyCombo)>>(iter: I) -> Self {
        let mut combos = HashMap::new();
        for (c, combo) in iter {
            combos.entry(c).or_insert(combo);
        }
        Self { combos }
    }
}

/// Rejects names that `loadkeys` would interpret as options.
///
/// # Errors
///
/// Returns [`KeymapError::InvalidName`] for an empty name or one starting
/// with `-`.
pub fn validate_keymap_name(name: &str) -> Result<(), KeymapError> {
    if name.is_empty() || name.starts_with('-') {
        return Err(KeymapError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Parses a `loadkeys --bkeymap` dump into a [`Keymap`].
///
/// # Errors
///
/// Returns [`KeymapError`] if the signature is missing or the data ends
/// before the slot header or a present slot is complete.
pub fn parse_bkeymap(data: &[u8]) -> Result<Keymap, KeymapError> {
    let rest = data
        .strip_prefix(BKEYMAP_SIGNATURE)
        .ok_or(KeymapError::MissingSignature)?;
    if rest.len() < MAX_NR_KEYMAPS {
        return Err(KeymapError::Truncated("slot header"));
    }
    let (header, mut body) = rest.split_at(MAX_NR_KEYMAPS);

    let mut slots: Vec<Option<[u16; NR_KEYS]>> = vec![None; MAX_NR_KEYMAPS];
    for (index, present) in header.iter().enumerate() {
        if *present == 0 {
            continue;
        }
        if body.len() < NR_KEYS * 2 {
            return Err(KeymapError::Truncated("keymap slot"));
        }
        let (slot_bytes, tail) = body.split_at(NR_KEYS * 2);
        let mut entries = [0u16; NR_KEYS];
        for (entry, bytes) in entries.iter_mut().zip(slot_bytes.chunks_exact(2)) {
            *entry = u16::from_le_bytes([bytes[0], bytes[1]]);
        }
        slots[index] = Some(entries);
        body = tail;
    }

    let mut keymap = Keymap::default();
    let Some(base) = slots[0] else {
        return Ok(keymap);
    };

    // Physical key for each shift semantic, from the unshifted slot.  Key 0
    // is KEY_RESERVED and never a shift key.
    let mut shift_keys: [Option<u16>; NR_SHIFT] = [None; NR_SHIFT];
    for (key, entry) in base.iter().enumerate().skip(1) {
        let (kind, value) = (entry >> 8, usize::from(entry & 0xff));
        if kind == KT_SHIFT && value < NR_SHIFT && shift_keys[value].is_none() {
            shift_keys[value] = Some(key as u16);
        }
    }

    'slots: for (index, slot) in slots.iter().enumerate() {
        let Some(entries) = slot else { continue };
        let mut held = Vec::new();
        for (bit, shift_key) in shift_keys.iter().enumerate() {
            if index & (1 << bit) == 0 {
                continue;
            }
            match shift_key {
                Some(key) => held.push(*key),
                None => continue 'slots,
            }
        }
        for (key, entry) in entries.iter().enumerate() {
            let (kind, value) = (entry >> 8, (entry & 0xff) as u8);
            if (kind != KT_LATIN && kind != KT_LETTER) || value == 0 {
                continue;
            }
            keymap
                .combos
                .entry(char::from(value))
                .or_insert_with(|| KeyCombo {
                    key: key as u16,
                    shift_keys: held.clone(),
                });
        }
    }

    debug!("parsed bkeymap with {} characters", keymap.len());
    Ok(keymap)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_A: usize = 30;
    const KEY_LEFTSHIFT: usize = 42;
    const KEY_RIGHTALT: usize = 100;

    /// Builds a dump from `(slot index, [(key, entry)])` descriptions.
    fn build_dump(slots: &[(usize, &[(usize, u16)])]) -> Vec<u8> {
        let mut header = [0u8; MAX_NR_KEYMAPS];
        let mut tables = vec![[0u16; NR_KEYS]; MAX_NR_KEYMAPS];
        for (index, entries) in slots {
            header[*index] = 1;
            for (key, entry) in entries.iter() {
                tables[*index][*key] = *entry;
            }
        }
        let mut data = BKEYMAP_SIGNATURE.to_vec();
        data.extend_from_slice(&header);
        for (index, present) in header.iter().enumerate() {
            if *present != 0 {
                for entry in tables[index] {
                    data.extend_from_slice(&entry.to_le_bytes());
                }
            }
        }
        data
    }

    fn latin(c: char) -> u16 {
        (KT_LATIN << 8) | c as u16
    }

    fn letter(c: char) -> u16 {
        (KT_LETTER << 8) | c as u16
    }

    fn shift(semantic: u16) -> u16 {
        (KT_SHIFT << 8) | semantic
    }

    #[test]
    fn test_single_latin_entry_in_base_slot() {
        // Arrange
        let data = build_dump(&[(0, &[(KEY_A, latin('a'))])]);

        // Act
        let keymap = parse_bkeymap(&data).unwrap();

        // Assert
        assert_eq!(
            keymap.get('a'),
            Some(&KeyCombo {
                key: 30,
                shift_keys: vec![]
            })
        );
        assert_eq!(keymap.get('b'), None);
    }

    #[test]
    fn test_shifted_slot_records_shift_key() {
        let data = build_dump(&[
            (0, &[(KEY_A, letter('a')), (KEY_LEFTSHIFT, shift(0))]),
            (1, &[(KEY_A, letter('A'))]),
        ]);

        let keymap = parse_bkeymap(&data).unwrap();

        assert_eq!(
            keymap.get('A'),
            Some(&KeyCombo {
                key: KEY_A as u16,
                shift_keys: vec![KEY_LEFTSHIFT as u16]
            })
        );
    }

    #[test]
    fn test_slot_with_unknown_shift_key_is_skipped() {
        // Slot 2 needs AltGr, but no key carries it in slot 0.
        let data = build_dump(&[(0, &[(KEY_A, latin('a'))]), (2, &[(KEY_A, latin('@'))])]);

        let keymap = parse_bkeymap(&data).unwrap();

        assert_eq!(keymap.get('@'), None);
    }

    #[test]
    fn test_altgr_slot_used_when_shift_key_known() {
        let data = build_dump(&[
            (0, &[(KEY_A, latin('a')), (KEY_RIGHTALT, shift(1))]),
            (2, &[(KEY_A, latin('@'))]),
        ]);

        let keymap = parse_bkeymap(&data).unwrap();

        assert_eq!(keymap.get('@').unwrap().shift_keys, vec![KEY_RIGHTALT as u16]);
    }

    #[test]
    fn test_first_mapping_wins() {
        let data = build_dump(&[
            (0, &[(10, latin('x')), (20, latin('x')), (KEY_LEFTSHIFT, shift(0))]),
            (1, &[(5, latin('x'))]),
        ]);

        let keymap = parse_bkeymap(&data).unwrap();

        assert_eq!(keymap.get('x').unwrap().key, 10);
        assert!(keymap.get('x').unwrap().shift_keys.is_empty());
    }

    #[test]
    fn test_first_shift_key_wins() {
        let data = build_dump(&[
            (0, &[(KEY_LEFTSHIFT, shift(0)), (54, shift(0))]),
            (1, &[(KEY_A, latin('A'))]),
        ]);

        let keymap = parse_bkeymap(&data).unwrap();

        assert_eq!(keymap.get('A').unwrap().shift_keys, vec![KEY_LEFTSHIFT as u16]);
    }

    #[test]
    fn test_reserved_key_zero_is_not_a_shift_key() {
        let data = build_dump(&[
            (0, &[(0, shift(0)), (KEY_A, latin('a'))]),
            (1, &[(KEY_A, latin('A'))]),
        ]);

        let keymap = parse_bkeymap(&data).unwrap();

        assert_eq!(keymap.get('A'), None);
        assert!(keymap.get('a').is_some());
    }

    #[test]
    fn test_non_character_types_and_zero_values_are_ignored() {
        let function_key = (1u16 << 8) | 5; // KT_FN
        let data = build_dump(&[(0, &[(59, function_key), (KEY_A, latin('\0'))])]);

        let keymap = parse_bkeymap(&data).unwrap();

        assert!(keymap.is_empty());
    }

    #[test]
    fn test_missing_base_slot_gives_empty_keymap() {
        let data = build_dump(&[(1, &[(KEY_A, latin('A'))])]);

        let keymap = parse_bkeymap(&data).unwrap();

        assert!(keymap.is_empty());
    }

    #[test]
    fn test_missing_signature_is_rejected() {
        assert_eq!(
            parse_bkeymap(b"keymap!").unwrap_err(),
            KeymapError::MissingSignature
        );
    }

    #[test]
    fn test_truncated_header_is_rejected() {
        let mut data = BKEYMAP_SIGNATURE.to_vec();
        data.extend_from_slice(&[0u8; 10]);
        assert_eq!(
            parse_bkeymap(&data).unwrap_err(),
            KeymapError::Truncated("slot header")
        );
    }

    #[test]
    fn test_truncated_slot_is_rejected() {
        let mut data = build_dump(&[(0, &[(KEY_A, latin('a'))])]);
        data.truncate(data.len() - 1);
        assert_eq!(
            parse_bkeymap(&data).unwrap_err(),
            KeymapError::Truncated("keymap slot")
        );
    }

    #[test]
    fn test_validate_keymap_name() {
        assert!(validate_keymap_name("us").is_ok());
        assert!(validate_keymap_name("de-latin1").is_ok());
        assert_eq!(
            validate_keymap_name(""),
            Err(KeymapError::InvalidName(String::new()))
        );
        assert!(validate_keymap_name("--help").is_err());
    }

    #[test]
    fn test_collected_keymap_keeps_first_combo() {
        let keymap: Keymap = [
            ('a', KeyCombo { key: 30, shift_keys: vec![] }),
            ('a', KeyCombo { key: 99, shift_keys: vec![] }),
        ]
        .into_iter()
        .collect();

        assert_eq!(keymap.len(), 1);
        assert_eq!(keymap.get('a').map(|c| c.key), Some(30));
    }
}
