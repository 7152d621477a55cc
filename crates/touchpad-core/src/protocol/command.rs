//! Decoder for the text command protocol spoken by the browser client.
//!
//! Every WebSocket message after the authentication handshake is one command.
//! The first byte selects the operation, the rest carries its arguments:
//!
//! | Message            | Meaning                                           |
//! |--------------------|---------------------------------------------------|
//! | `t<text>`          | type UTF-8 text (CR and CRLF become LF)           |
//! | `k<index>`         | press and release a [`Key`]                       |
//! | `m<dx>;<dy>`       | move the pointer relatively                       |
//! | `s<dx>;<dy>`       | scroll, gesture continues                         |
//! | `S<dx>;<dy>`, `S`  | scroll and end the gesture (bare `S` = 0;0)       |
//! | `b<index>;<state>` | press (`state != 0`) or release a [`PointerButton`] |
//!
//! Integers are base-10 `i32` values with an optional sign.  Anything else
//! is a [`CommandError`]; the session closes the connection on the first one.

use thiserror::Error;

use crate::domain::{InputError, Key, PointerButton};

/// A decoded client command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    KeyboardText(String),
    KeyboardKey(Key),
    PointerMove { dx: i32, dy: i32 },
    PointerScroll { dx: i32, dy: i32, finish: bool },
    PointerButton { button: PointerButton, press: bool },
}

/// Errors produced while decoding a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("invalid utf-8 in text command")]
    InvalidUtf8,
    #[error("unknown command opcode: 0x{0:02x}")]
    UnknownOpcode(u8),
    #[error("wrong number of arguments: expected {expected}, got {found}")]
    WrongArgumentCount { expected: usize, found: usize },
    #[error("invalid integer argument: {0:?}")]
    InvalidInteger(String),
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Decodes one command message.
///
/// # Errors
///
/// Returns [`CommandError`] for an empty message, an unknown opcode, a wrong
/// argument count, a non-integer argument, an out-of-range key or button
/// index, or invalid UTF-8 in a text command.
///
/// # Examples
///
/// ```rust
/// use touchpad_core::protocol::{decode_command, Command};
///
/// assert_eq!(
///     decode_command(b"m5;-3").unwrap(),
///     Command::PointerMove { dx: 5, dy: -3 }
/// );
/// ```
pub fn decode_command(message: &[u8]) -> Result<Command, CommandError> {
    let (&opcode, args) = message.split_first().ok_or(CommandError::Empty)?;
    match opcode {
        b't' => {
            let text = std::str::from_utf8(args).map_err(|_| CommandError::InvalidUtf8)?;
            Ok(Command::KeyboardText(normalize_line_endings(text)))
        }
        b'k' => {
            let [index] = parse_args::<1>(args)?;
            Ok(Command::KeyboardKey(Key::try_from(i64::from(index))?))
        }
        b'm' => {
            let [dx, dy] = parse_args::<2>(args)?;
            Ok(Command::PointerMove { dx, dy })
        }
        b's' => {
            let [dx, dy] = parse_args::<2>(args)?;
            Ok(Command::PointerScroll {
                dx,
                dy,
                finish: false,
            })
        }
        b'S' if args.is_empty() => Ok(Command::PointerScroll {
            dx: 0,
            dy: 0,
            finish: true,
        }),
        b'S' => {
            let [dx, dy] = parse_args::<2>(args)?;
            Ok(Command::PointerScroll {
                dx,
                dy,
                finish: true,
            })
        }
        b'b' => {
            let [index, state] = parse_args::<2>(args)?;
            Ok(Command::PointerButton {
                button: PointerButton::try_from(i64::from(index))?,
                press: state != 0,
            })
        }
        other => Err(CommandError::UnknownOpcode(other)),
    }
}

/// Replaces CRLF and lone CR with LF.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Splits `args` on `;` into exactly `N` integers.
fn parse_args<const N: usize>(args: &[u8]) -> Result<[i32; N], CommandError> {
    let args = std::str::from_utf8(args)
        .map_err(|_| CommandError::InvalidInteger(String::from_utf8_lossy(args).into_owned()))?;
    let parts: Vec<&str> = args.split(';').collect();
    if parts.len() != N {
        return Err(CommandError::WrongArgumentCount {
            expected: N,
            found: parts.len(),
        });
    }
    let mut values = [0i32; N];
    for (value, part) in values.iter_mut().zip(parts) {
        *value = part
            .parse()
            .map_err(|_| CommandError::InvalidInteger(part.to_string()))?;
    }
    Ok(values)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pointer_move() {
        assert_eq!(
            decode_command(b"m5;-3"),
            Ok(Command::PointerMove { dx: 5, dy: -3 })
        );
    }

    #[test]
    fn test_decode_text_normalizes_crlf() {
        assert_eq!(
            decode_command(b"t\r\n"),
            Ok(Command::KeyboardText("\n".to_string()))
        );
    }

    #[test]
    fn test_decode_text_normalizes_lone_cr() {
        assert_eq!(
            decode_command(b"ta\rb\r\n\nc"),
            Ok(Command::KeyboardText("a\nb\n\nc".to_string()))
        );
    }

    #[test]
    fn test_decode_empty_text_is_allowed() {
        assert_eq!(
            decode_command(b"t"),
            Ok(Command::KeyboardText(String::new()))
        );
    }

    #[test]
    fn test_decode_text_rejects_invalid_utf8() {
        assert_eq!(decode_command(b"t\xff\xfe"), Err(CommandError::InvalidUtf8));
    }

    #[test]
    fn test_decode_key() {
        assert_eq!(decode_command(b"k0"), Ok(Command::KeyboardKey(Key::VolumeMute)));
        assert_eq!(decode_command(b"k17"), Ok(Command::KeyboardKey(Key::Return)));
    }

    #[test]
    fn test_decode_key_out_of_range() {
        assert_eq!(
            decode_command(b"k18"),
            Err(CommandError::Input(InputError::UnknownKey(18)))
        );
        assert_eq!(
            decode_command(b"k-1"),
            Err(CommandError::Input(InputError::UnknownKey(-1)))
        );
    }

    #[test]
    fn test_decode_key_with_two_arguments_is_rejected() {
        assert_eq!(
            decode_command(b"k1;2"),
            Err(CommandError::WrongArgumentCount {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_decode_scroll_variants() {
        assert_eq!(
            decode_command(b"s1;-40"),
            Ok(Command::PointerScroll {
                dx: 1,
                dy: -40,
                finish: false
            })
        );
        assert_eq!(
            decode_command(b"S0;7"),
            Ok(Command::PointerScroll {
                dx: 0,
                dy: 7,
                finish: true
            })
        );
        assert_eq!(
            decode_command(b"S"),
            Ok(Command::PointerScroll {
                dx: 0,
                dy: 0,
                finish: true
            })
        );
    }

    #[test]
    fn test_decode_bare_lowercase_scroll_is_rejected() {
        assert_eq!(
            decode_command(b"s"),
            Err(CommandError::WrongArgumentCount {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            decode_command(b"k"),
            Err(CommandError::InvalidInteger(String::new()))
        );
    }

    #[test]
    fn test_decode_button_press_and_release() {
        assert_eq!(
            decode_command(b"b1;1"),
            Ok(Command::PointerButton {
                button: PointerButton::Right,
                press: true
            })
        );
        assert_eq!(
            decode_command(b"b0;0"),
            Ok(Command::PointerButton {
                button: PointerButton::Left,
                press: false
            })
        );
        assert_eq!(
            decode_command(b"b2;-5"),
            Ok(Command::PointerButton {
                button: PointerButton::Middle,
                press: true
            })
        );
    }

    #[test]
    fn test_decode_button_out_of_range() {
        assert_eq!(
            decode_command(b"b3;1"),
            Err(CommandError::Input(InputError::UnknownPointerButton(3)))
        );
    }

    #[test]
    fn test_decode_rejects_malformed_arguments() {
        assert!(matches!(
            decode_command(b"m1"),
            Err(CommandError::WrongArgumentCount { expected: 2, found: 1 })
        ));
        assert!(matches!(
            decode_command(b"m1;2;3"),
            Err(CommandError::WrongArgumentCount { expected: 2, found: 3 })
        ));
        assert_eq!(
            decode_command(b"m1;x"),
            Err(CommandError::InvalidInteger("x".to_string()))
        );
        assert_eq!(
            decode_command(b"m1; 2"),
            Err(CommandError::InvalidInteger(" 2".to_string()))
        );
    }

    #[test]
    fn test_decode_rejects_values_outside_i32() {
        assert_eq!(
            decode_command(b"m2147483648;0"),
            Err(CommandError::InvalidInteger("2147483648".to_string()))
        );
        assert_eq!(
            decode_command(b"m-2147483648;0"),
            Ok(Command::PointerMove {
                dx: i32::MIN,
                dy: 0
            })
        );
    }

    #[test]
    fn test_decode_empty_and_unknown() {
        assert_eq!(decode_command(b""), Err(CommandError::Empty));
        assert_eq!(decode_command(b"x1;2"), Err(CommandError::UnknownOpcode(b'x')));
    }
}
