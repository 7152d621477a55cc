//! Bounds-checked views over X11 keyboard and modifier mapping tables, plus
//! the pure parts of the keysym resolution algorithm.
//!
//! Xlib hands out keyboard and modifier mappings as flat C arrays that are
//! indexed with `(keycode - min_keycode) * per_keycode + level` and
//! `modifier_index * max_keypermod + slot`.  The views below copy nothing;
//! they borrow the slice and do the index arithmetic with checked accessors,
//! so a malformed reply yields `None` instead of an out-of-bounds read.
//!
//! Everything here is independent of a live display and unit tested.

/// Bit for the Shift modifier in an X11 modifier mask.
pub const SHIFT_MASK: u32 = 1 << SHIFT_MAP_INDEX;

const SHIFT_MAP_INDEX: usize = 0;

/// Modifier map rows the resolver may press or release, in search order:
/// Shift, then Mod1 to Mod5.  Lock and Control are never synthesized.
pub const MODIFIER_INDICES: [usize; 6] = [SHIFT_MAP_INDEX, 3, 4, 5, 6, 7];

/// Number of rows in an X11 modifier map.
const MODIFIER_COUNT: usize = 8;

// ── Keyboard mapping ──────────────────────────────────────────────────────────

/// Read-only view of an `XGetKeyboardMapping` reply.
#[derive(Debug, Clone, Copy)]
pub struct KeyboardMappingView<'a> {
    keysyms: &'a [u64],
    min_keycode: u8,
    per_keycode: usize,
}

impl<'a> KeyboardMappingView<'a> {
    /// Wraps a mapping that starts at `min_keycode` with `per_keycode`
    /// keysyms (levels) per keycode.
    pub fn new(keysyms: &'a [u64], min_keycode: u8, per_keycode: usize) -> Self {
        Self {
            keysyms,
            min_keycode,
            per_keycode,
        }
    }

    pub fn per_keycode(&self) -> usize {
        self.per_keycode
    }

    /// Number of keycodes covered by the reply.
    pub fn keycode_count(&self) -> usize {
        self.keysyms.len().checked_div(self.per_keycode).unwrap_or(0)
    }

    /// Keysym at `(keycode, level)`, or `None` outside the table.
    pub fn get(&self, keycode: u8, level: usize) -> Option<u64> {
        if level >= self.per_keycode {
            return None;
        }
        let row = usize::from(keycode.checked_sub(self.min_keycode)?);
        self.keysyms.get(row * self.per_keycode + level).copied()
    }

    /// All keysyms of one keycode.
    pub fn levels(&self, keycode: u8) -> Option<&'a [u64]> {
        let row = usize::from(keycode.checked_sub(self.min_keycode)?);
        let start = row.checked_mul(self.per_keycode)?;
        self.keysyms.get(start..start + self.per_keycode)
    }

    /// Lowest keycode whose every level is `NoSymbol` (0).
    pub fn find_empty_keycode(&self) -> Option<u8> {
        (0..self.keycode_count()).find_map(|row| {
            let keycode = u8::try_from(usize::from(self.min_keycode) + row).ok()?;
            let levels = self.levels(keycode)?;
            levels.iter().all(|&k| k == 0).then_some(keycode)
        })
    }
}

// ── Modifier mapping ──────────────────────────────────────────────────────────

/// Read-only view of an `XGetModifierMapping` reply.
#[derive(Debug, Clone, Copy)]
pub struct ModifierMapView<'a> {
    keycodes: &'a [u8],
    max_keypermod: usize,
}

impl<'a> ModifierMapView<'a> {
    pub fn new(keycodes: &'a [u8], max_keypermod: usize) -> Self {
        Self {
            keycodes,
            max_keypermod,
        }
    }

    /// Keycode in `(modifier_index, slot)`, `0` meaning unused.
    pub fn get(&self, modifier_index: usize, slot: usize) -> Option<u8> {
        if modifier_index >= MODIFIER_COUNT || slot >= self.max_keypermod {
            return None;
        }
        self.keycodes
            .get(modifier_index * self.max_keypermod + slot)
            .copied()
    }

    /// First non-zero keycode bound to a modifier row.
    pub fn first_keycode(&self, modifier_index: usize) -> Option<u8> {
        (0..self.max_keypermod)
            .filter_map(|slot| self.get(modifier_index, slot))
            .find(|&keycode| keycode != 0)
    }
}

/// Keycodes that can press each controllable modifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierKeycodes {
    by_index: [Option<u8>; MODIFIER_COUNT],
}

impl ModifierKeycodes {
    /// Collects the first keycode of every row in [`MODIFIER_INDICES`].
    pub fn from_map(map: &ModifierMapView<'_>) -> Self {
        let mut by_index = [None; MODIFIER_COUNT];
        for index in MODIFIER_INDICES {
            by_index[index] = map.first_keycode(index);
        }
        Self { by_index }
    }

    /// `true` if some keycode can toggle the modifier bit `mask`.
    pub fn is_available(&self, mask: u32) -> bool {
        self.iter().any(|(m, _)| m == mask)
    }

    /// `(mask, keycode)` pairs in ascending modifier order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u8)> + '_ {
        self.by_index
            .iter()
            .enumerate()
            .filter_map(|(index, keycode)| keycode.map(|k| (1u32 << index, k)))
    }

    /// Keycodes for every bit set in `mods`.
    pub fn keycodes_for(&self, mods: u32) -> impl Iterator<Item = u8> + '_ {
        self.iter()
            .filter(move |(mask, _)| mods & mask != 0)
            .map(|(_, keycode)| keycode)
    }

    /// Active modifiers the resolver cannot release (no keycode for them).
    pub fn locked_active(&self, active_mods: u32) -> u32 {
        (0..MODIFIER_COUNT)
            .map(|index| 1u32 << index)
            .filter(|&mask| !self.is_available(mask))
            .fold(0, |acc, mask| acc | (active_mods & mask))
    }

    /// Modifier states to try, in order, when looking for a keysym.
    ///
    /// Each candidate keeps the modifiers that cannot be released and adds
    /// one of Mod1 to Mod5 (or none), without and then with Shift.
    pub fn candidate_mods(&self, active_mods: u32) -> Vec<u32> {
        let base = self.locked_active(active_mods);
        let shift_available = self.is_available(SHIFT_MASK);
        let mut candidates = Vec::with_capacity(MODIFIER_INDICES.len() * 2);
        for index in MODIFIER_INDICES {
            let modifier = if index == SHIFT_MAP_INDEX { 0 } else { 1 << index };
            for shift in [0, SHIFT_MASK] {
                if shift != 0 && !shift_available {
                    continue;
                }
                candidates.push(base | shift | modifier);
            }
        }
        candidates
    }
}

/// Searches `candidates` for a modifier state under which `translate`
/// produces `keysym`.
pub fn find_mods(
    candidates: &[u32],
    keysym: u64,
    mut translate: impl FnMut(u32) -> u64,
) -> Option<u32> {
    candidates.iter().copied().find(|&mods| translate(mods) == keysym)
}

/// Modifier keys to toggle around one key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierAdjustment {
    /// Wanted but not active: pressed before, released after.
    pub press: u32,
    /// Active but unwanted: released before, pressed again after.
    pub release: u32,
}

impl ModifierAdjustment {
    pub fn between(wanted: u32, active: u32) -> Self {
        Self {
            press: wanted & !active,
            release: active & !wanted,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const MOD1_MASK: u32 = 1 << 3;
    const LOCK_MASK: u32 = 1 << 1;
    const CONTROL_MASK: u32 = 1 << 2;

    /// Two levels per keycode, keycodes 8..=11.
    fn mapping() -> Vec<u64> {
        vec![
            0x61, 0x41, // 8: a A
            0, 0, // 9: empty
            0x62, 0, // 10: b
            0, 0, // 11: empty
        ]
    }

    /// max_keypermod = 2; Shift = 50, Lock = 66, Control = 37, Mod1 = 64.
    fn modifier_map() -> Vec<u8> {
        let mut map = vec![0u8; 16];
        map[0] = 50;
        map[2] = 66;
        map[4] = 37;
        map[7] = 64; // Mod1, second slot
        map
    }

    #[test]
    fn test_keyboard_view_indexes_by_keycode_and_level() {
        // Arrange
        let keysyms = mapping();
        let view = KeyboardMappingView::new(&keysyms, 8, 2);

        // Act / Assert
        assert_eq!(view.get(8, 0), Some(0x61));
        assert_eq!(view.get(8, 1), Some(0x41));
        assert_eq!(view.get(10, 0), Some(0x62));
    }

    #[test]
    fn test_keyboard_view_rejects_out_of_range() {
        let keysyms = mapping();
        let view = KeyboardMappingView::new(&keysyms, 8, 2);

        assert_eq!(view.get(7, 0), None);
        assert_eq!(view.get(12, 0), None);
        assert_eq!(view.get(8, 2), None);
    }

    #[test]
    fn test_find_empty_keycode_returns_lowest() {
        let keysyms = mapping();
        let view = KeyboardMappingView::new(&keysyms, 8, 2);
        assert_eq!(view.find_empty_keycode(), Some(9));
    }

    #[test]
    fn test_find_empty_keycode_none_when_full() {
        let keysyms = vec![1, 2, 3, 4];
        let view = KeyboardMappingView::new(&keysyms, 8, 2);
        assert_eq!(view.find_empty_keycode(), None);
    }

    #[test]
    fn test_zero_levels_per_keycode_is_empty() {
        let keysyms = vec![1, 2];
        let view = KeyboardMappingView::new(&keysyms, 8, 0);
        assert_eq!(view.keycode_count(), 0);
        assert_eq!(view.find_empty_keycode(), None);
    }

    #[test]
    fn test_modifier_view_finds_first_nonzero_slot() {
        let map = modifier_map();
        let view = ModifierMapView::new(&map, 2);

        assert_eq!(view.first_keycode(0), Some(50));
        assert_eq!(view.first_keycode(3), Some(64));
        assert_eq!(view.first_keycode(4), None);
        assert_eq!(view.get(8, 0), None);
    }

    #[test]
    fn test_modifier_keycodes_skip_lock_and_control() {
        // Arrange
        let map = modifier_map();
        let view = ModifierMapView::new(&map, 2);

        // Act
        let keycodes = ModifierKeycodes::from_map(&view);

        // Assert
        assert_eq!(keycodes.iter().collect::<Vec<_>>(), vec![(SHIFT_MASK, 50), (MOD1_MASK, 64)]);
        assert!(!keycodes.is_available(LOCK_MASK));
        assert!(!keycodes.is_available(CONTROL_MASK));
    }

    #[test]
    fn test_locked_active_keeps_uncontrollable_modifiers() {
        let map = modifier_map();
        let keycodes = ModifierKeycodes::from_map(&ModifierMapView::new(&map, 2));

        // Caps Lock and Shift are active; only Lock cannot be released.
        let locked = keycodes.locked_active(LOCK_MASK | SHIFT_MASK);

        assert_eq!(locked, LOCK_MASK);
    }

    #[test]
    fn test_candidate_order_is_plain_then_shift_per_modifier() {
        let map = modifier_map();
        let keycodes = ModifierKeycodes::from_map(&ModifierMapView::new(&map, 2));

        let candidates = keycodes.candidate_mods(0);

        assert_eq!(&candidates[..4], &[0, SHIFT_MASK, MOD1_MASK, MOD1_MASK | SHIFT_MASK]);
        assert_eq!(candidates.len(), 12);
    }

    #[test]
    fn test_candidates_without_shift_key_skip_shift() {
        let keycodes = ModifierKeycodes::default();

        let candidates = keycodes.candidate_mods(0);

        assert!(candidates.iter().all(|m| m & SHIFT_MASK == 0));
        assert_eq!(candidates.len(), 6);
    }

    #[test]
    fn test_find_mods_returns_first_matching_state() {
        // 'A' (0x41) needs Shift on a key whose base level is 'a'.
        let candidates = [0, SHIFT_MASK, MOD1_MASK];
        let translate = |mods: u32| if mods & SHIFT_MASK != 0 { 0x41 } else { 0x61 };

        assert_eq!(find_mods(&candidates, 0x41, translate), Some(SHIFT_MASK));
        assert_eq!(find_mods(&candidates, 0x61, translate), Some(0));
        assert_eq!(find_mods(&candidates, 0x20ac, translate), None);
    }

    #[test]
    fn test_adjustment_presses_missing_and_releases_extra() {
        let adjustment = ModifierAdjustment::between(SHIFT_MASK, MOD1_MASK);

        assert_eq!(adjustment.press, SHIFT_MASK);
        assert_eq!(adjustment.release, MOD1_MASK);
    }

    #[test]
    fn test_adjustment_is_empty_when_state_matches() {
        let adjustment = ModifierAdjustment::between(SHIFT_MASK, SHIFT_MASK);
        assert_eq!(adjustment, ModifierAdjustment::default());
    }
}
