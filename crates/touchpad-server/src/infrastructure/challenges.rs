//! Rate-limited authentication challenge generator.
//!
//! One background task produces [`Challenge`]s into a bounded channel at a
//! fixed rate.  Every connecting client takes exactly one challenge from the
//! shared [`ChallengeQueue`] before it can authenticate, so the generator
//! throttles handshake attempts across all connections together: once the
//! burst buffer is drained, a new connection waits for the next tick.
//!
//! # For beginners: why a channel instead of a counter?
//!
//! A bounded `mpsc` channel is both the buffer and the rate limiter.  The
//! generator's `send` blocks while the buffer is full, and a session's
//! `recv` blocks while it is empty.  No timestamps or token arithmetic are
//! needed.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::OsRng;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error};

use touchpad_core::Challenge;

/// Challenges that may be handed out back to back before rate limiting applies.
pub const CHALLENGE_BURST: usize = 10;

/// Pause between two generated challenges (10 per second).
pub const CHALLENGE_INTERVAL: Duration = Duration::from_millis(100);

/// Shared receiving end of the challenge stream.
///
/// Cloning the surrounding `Arc` lets every session task draw from the same
/// queue.
#[derive(Debug)]
pub struct ChallengeQueue {
    rx: Mutex<mpsc::Receiver<Challenge>>,
}

impl ChallengeQueue {
    /// Waits for the next challenge.
    ///
    /// Returns `None` once the generator has stopped.
    pub async fn next(&self) -> Option<Challenge> {
        self.rx.lock().await.recv().await
    }
}

/// Starts the generator task for `secret`.
///
/// The task stops by itself when the returned queue is dropped.
pub fn spawn_challenge_generator(secret: String) -> (Arc<ChallengeQueue>, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel(CHALLENGE_BURST);
    let handle = tokio::spawn(generate_challenges(secret, tx));
    (Arc::new(ChallengeQueue { rx: Mutex::new(rx) }), handle)
}

async fn generate_challenges(secret: String, tx: mpsc::Sender<Challenge>) {
    loop {
        let challenge = match Challenge::generate(&mut OsRng, &secret) {
            Ok(c) => c,
            Err(e) => {
                error!("failed to generate authentication challenge: {e}");
                return;
            }
        };
        if tx.send(challenge).await.is_err() {
            debug!("challenge queue dropped; stopping generator");
            return;
        }
        tokio::time::sleep(CHALLENGE_INTERVAL).await;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use touchpad_core::protocol::client_response;

    #[tokio::test]
    async fn test_generated_challenge_verifies_with_secret() {
        // Arrange
        let (queue, _handle) = spawn_challenge_generator("hunter2".to_string());

        // Act
        let challenge = queue.next().await.unwrap();
        let response = client_response(challenge.message(), "hunter2").unwrap();

        // Assert
        assert!(challenge.verify(&response));
    }

    #[tokio::test]
    async fn test_challenges_are_distinct() {
        let (queue, _handle) = spawn_challenge_generator("s".to_string());

        let first = queue.next().await.unwrap();
        let second = queue.next().await.unwrap();

        assert_ne!(first.message(), second.message());
    }

    #[tokio::test]
    async fn test_wrong_secret_does_not_verify() {
        let (queue, _handle) = spawn_challenge_generator("right".to_string());

        let challenge = queue.next().await.unwrap();
        let response = client_response(challenge.message(), "wrong").unwrap();

        assert!(!challenge.verify(&response));
    }

    #[tokio::test]
    async fn test_generator_stops_when_queue_dropped() {
        let (queue, handle) = spawn_challenge_generator("s".to_string());

        drop(queue);

        // The pending `send` or the next one fails and the task returns.
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("generator did not stop")
            .unwrap();
    }
}
