//! [`Key`] to Windows Virtual-Key code translation.
//!
//! Reference: <https://learn.microsoft.com/en-us/windows/win32/inputdev/virtual-key-codes>
//!
//! Text never goes through this table: the Windows backend sends characters
//! as `KEYEVENTF_UNICODE` events, which need no layout knowledge.

use crate::domain::Key;

/// Translates a [`Key`] to its Windows Virtual-Key code.
pub fn key_to_vk(key: Key) -> u16 {
    match key {
        Key::VolumeMute => 0xAD,     // VK_VOLUME_MUTE
        Key::VolumeDown => 0xAE,     // VK_VOLUME_DOWN
        Key::VolumeUp => 0xAF,       // VK_VOLUME_UP
        Key::MediaPlayPause => 0xB3, // VK_MEDIA_PLAY_PAUSE
        Key::MediaPrevTrack => 0xB1, // VK_MEDIA_PREV_TRACK
        Key::MediaNextTrack => 0xB0, // VK_MEDIA_NEXT_TRACK
        Key::BrowserBack => 0xA6,    // VK_BROWSER_BACK
        Key::BrowserForward => 0xA7, // VK_BROWSER_FORWARD
        Key::Super => 0x5B,          // VK_LWIN
        Key::Left => 0x25,           // VK_LEFT
        Key::Right => 0x27,          // VK_RIGHT
        Key::Up => 0x26,             // VK_UP
        Key::Down => 0x28,           // VK_DOWN
        Key::Home => 0x24,           // VK_HOME
        Key::End => 0x23,            // VK_END
        Key::BackSpace => 0x08,      // VK_BACK
        Key::Delete => 0x2E,         // VK_DELETE
        Key::Return => 0x0D,         // VK_RETURN
    }
}

/// Returns `true` for keys that must be sent with `KEYEVENTF_EXTENDEDKEY`.
pub fn is_extended_vk(vk: u16) -> bool {
    matches!(vk, 0x21..=0x28 | 0x2D | 0x2E | 0x5B | 0x5C)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys_are_extended() {
        assert!(is_extended_vk(key_to_vk(Key::Left)));
        assert!(is_extended_vk(key_to_vk(Key::Delete)));
        assert!(is_extended_vk(key_to_vk(Key::Super)));
        assert!(!is_extended_vk(key_to_vk(Key::Return)));
        assert!(!is_extended_vk(key_to_vk(Key::VolumeUp)));
    }

    #[test]
    fn test_media_keys() {
        assert_eq!(key_to_vk(Key::MediaPlayPause), 0xB3);
        assert_eq!(key_to_vk(Key::BrowserBack), 0xA6);
    }
}
