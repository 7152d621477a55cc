//! Challenge-response authentication for new client connections.
//!
//! The client learns the shared secret out of band (it is part of the URL
//! fragment the server prints at startup).  On connect the server sends a
//! random challenge message and expects
//!
//! ```text
//! base64(HMAC-SHA256(key = challenge message, data = secret))
//! ```
//!
//! back as the first client message.  This is the direction the browser
//! client computes it in, so it must not be swapped.
//!
//! Challenges are produced ahead of time by a rate-limited generator task in
//! the server; this module only deals with building and checking them.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use rand::{rngs::OsRng, RngCore};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Random bytes in a challenge message (before base64).
pub const CHALLENGE_LENGTH: usize = 8;

/// Random bytes in a generated default secret (before base64).
pub const DEFAULT_SECRET_LENGTH: usize = 8;

/// Errors produced while building a challenge.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid HMAC key: {0}")]
    InvalidKey(#[from] hmac::digest::InvalidLength),
}

/// One authentication challenge and the only response that answers it.
#[derive(Clone, PartialEq, Eq)]
pub struct Challenge {
    message: String,
    expected_response: String,
}

impl std::fmt::Debug for Challenge {
    // The expected response is a credential; keep it out of logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Challenge")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Challenge {
    /// Builds the challenge for a given message.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the HMAC cannot be keyed with `message`.
    pub fn new(message: String, secret: &str) -> Result<Self, AuthError> {
        let mut mac = HmacSha256::new_from_slice(message.as_bytes())?;
        mac.update(secret.as_bytes());
        let expected_response = STANDARD.encode(mac.finalize().into_bytes());
        Ok(Self {
            message,
            expected_response,
        })
    }

    /// Builds a challenge around a fresh random message drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the HMAC cannot be keyed.
    pub fn generate<R: RngCore>(rng: &mut R, secret: &str) -> Result<Self, AuthError> {
        let mut bytes = [0u8; CHALLENGE_LENGTH];
        rng.fill_bytes(&mut bytes);
        Self::new(STANDARD.encode(bytes), secret)
    }

    /// The text sent to the client.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` only for the exact expected response.
    pub fn verify(&self, response: &str) -> bool {
        self.expected_response == response
    }
}

/// Generates a random base64 secret from the OS random source.
pub fn random_secret() -> String {
    let mut bytes = [0u8; DEFAULT_SECRET_LENGTH];
    OsRng.fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

/// Computes the response a client holding `secret` sends for `message`.
///
/// Used by tests and tools that act as a client.
///
/// # Errors
///
/// Returns [`AuthError`] if the HMAC cannot be keyed.
pub fn client_response(message: &str, secret: &str) -> Result<String, AuthError> {
    Ok(Challenge::new(message.to_string(), secret)?.expected_response)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_known_vector() {
        // RFC 4231 test case 2: key "Jefe", data "what do ya want for nothing?".
        let challenge =
            Challenge::new("Jefe".to_string(), "what do ya want for nothing?").unwrap();
        let expected = STANDARD.encode([
            0x5b, 0xdc, 0xc1, 0x46, 0xbf, 0x60, 0x75, 0x4e, 0x6a, 0x04, 0x24, 0x26, 0x08, 0x95,
            0x75, 0xc7, 0x5a, 0x00, 0x3f, 0x08, 0x9d, 0x27, 0x39, 0x83, 0x9d, 0xec, 0x58, 0xb9,
            0x64, 0xec, 0x38, 0x43,
        ]);
        assert!(challenge.verify(&expected));
    }

    #[test]
    fn test_generated_message_is_base64_of_eight_bytes() {
        let mut rng = StdRng::seed_from_u64(7);
        let challenge = Challenge::generate(&mut rng, "secret").unwrap();
        let decoded = STANDARD.decode(challenge.message()).unwrap();
        assert_eq!(decoded.len(), CHALLENGE_LENGTH);
    }

    #[test]
    fn test_client_response_is_accepted() {
        let mut rng = StdRng::seed_from_u64(1);
        let challenge = Challenge::generate(&mut rng, "s3cret").unwrap();
        let response = client_response(challenge.message(), "s3cret").unwrap();
        assert!(challenge.verify(&response));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let mut rng = StdRng::seed_from_u64(2);
        let challenge = Challenge::generate(&mut rng, "s3cret").unwrap();
        let response = client_response(challenge.message(), "guess").unwrap();
        assert!(!challenge.verify(&response));
    }

    #[test]
    fn test_any_single_byte_alteration_is_rejected() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(3);
        let challenge = Challenge::generate(&mut rng, "s3cret").unwrap();
        let response = client_response(challenge.message(), "s3cret").unwrap();

        // Act / Assert
        for i in 0..response.len() {
            let mut altered = response.clone().into_bytes();
            altered[i] = if altered[i] == b'A' { b'B' } else { b'A' };
            let altered = String::from_utf8(altered).unwrap();
            assert!(!challenge.verify(&altered), "alteration at {i} accepted");
        }
        assert!(!challenge.verify(&response[..response.len() - 1]));
        assert!(!challenge.verify(""));
    }

    #[test]
    fn test_debug_hides_expected_response() {
        let challenge = Challenge::new("msg".to_string(), "secret").unwrap();
        let expected = client_response("msg", "secret").unwrap();
        assert!(!format!("{challenge:?}").contains(&expected));
    }

    #[test]
    fn test_random_secret_is_base64_of_eight_bytes() {
        let secret = random_secret();
        assert_eq!(STANDARD.decode(&secret).unwrap().len(), DEFAULT_SECRET_LENGTH);
        assert_ne!(secret, random_secret());
    }
}
