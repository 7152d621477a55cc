//! Routes decoded client commands to the active backend.
//!
//! The session loop decodes each WebSocket message into a [`Command`] and
//! hands it here.  One command maps to exactly one backend call; errors are
//! returned unchanged so the session can log them and close the connection
//! while the shared backend stays up for other clients.

use touchpad_core::Command;

use super::backend::{BackendError, InputBackend};

/// Executes one command against `backend`.
///
/// # Errors
///
/// Propagates the backend's [`BackendError`].
pub async fn apply_command(
    backend: &dyn InputBackend,
    command: Command,
) -> Result<(), BackendError> {
    match command {
        Command::KeyboardText(text) => backend.keyboard_text(&text).await,
        Command::KeyboardKey(key) => backend.keyboard_key(key).await,
        Command::PointerMove { dx, dy } => backend.pointer_move(dx, dy).await,
        Command::PointerScroll { dx, dy, finish } => backend.pointer_scroll(dx, dy, finish).await,
        Command::PointerButton { button, press } => backend.pointer_button(button, press).await,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::backend::MockInputBackend;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use touchpad_core::{decode_command, Key, PointerButton};

    #[tokio::test]
    async fn test_move_command_calls_pointer_move() {
        // Arrange
        let mut backend = MockInputBackend::new();
        backend
            .expect_pointer_move()
            .with(eq(5), eq(-3))
            .times(1)
            .returning(|_, _| Ok(()));
        let command = decode_command(b"m5;-3").unwrap();

        // Act
        let result = apply_command(&backend, command).await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_button_press_then_release_in_order() {
        // Arrange
        let mut backend = MockInputBackend::new();
        let mut seq = Sequence::new();
        backend
            .expect_pointer_button()
            .with(eq(PointerButton::Right), eq(true))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        backend
            .expect_pointer_button()
            .with(eq(PointerButton::Right), eq(false))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        // Act
        for message in [&b"b1;1"[..], &b"b1;0"[..]] {
            let command = decode_command(message).unwrap();
            apply_command(&backend, command).await.unwrap();
        }

        // Assert: expectations are verified when `backend` drops.
    }

    #[tokio::test]
    async fn test_text_command_receives_normalized_line_break() {
        let mut backend = MockInputBackend::new();
        backend
            .expect_keyboard_text()
            .withf(|text| text == "\n")
            .times(1)
            .returning(|_| Ok(()));

        let command = decode_command(b"t\r\n").unwrap();
        apply_command(&backend, command).await.unwrap();
    }

    #[tokio::test]
    async fn test_finish_only_scroll_passes_zero_delta() {
        let mut backend = MockInputBackend::new();
        backend
            .expect_pointer_scroll()
            .with(eq(0), eq(0), eq(true))
            .times(1)
            .returning(|_, _, _| Ok(()));

        apply_command(&backend, decode_command(b"S").unwrap()).await.unwrap();
    }

    #[tokio::test]
    async fn test_key_command_calls_keyboard_key() {
        let mut backend = MockInputBackend::new();
        backend
            .expect_keyboard_key()
            .with(eq(Key::Return))
            .times(1)
            .returning(|_| Ok(()));

        apply_command(&backend, Command::KeyboardKey(Key::Return)).await.unwrap();
    }

    #[tokio::test]
    async fn test_backend_error_is_propagated() {
        let mut backend = MockInputBackend::new();
        backend
            .expect_pointer_move()
            .returning(|_, _| Err(BackendError::Closed));

        let err = apply_command(&backend, Command::PointerMove { dx: 1, dy: 1 })
            .await
            .unwrap_err();

        assert!(matches!(err, BackendError::Closed));
    }
}
