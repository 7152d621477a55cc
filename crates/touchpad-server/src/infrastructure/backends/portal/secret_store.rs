//! Encrypted on-disk store for the portal restore token.
//!
//! The RemoteDesktop portal can hand out a restore token that lets a later
//! run skip the consent dialog.  The token grants input access to the whole
//! desktop, so it is never written in clear text.  The key comes from the
//! portal's own `Secret` interface, which returns bytes bound to this
//! application.
//!
//! # File format (for beginners)
//!
//! ```text
//! ┌──────────────┬──────────────────────────────────────┐
//! │ nonce (12 B) │ AES-256-GCM ciphertext + 16 B tag     │
//! └──────────────┴──────────────────────────────────────┘
//! ```
//!
//! The AES key is HKDF-SHA256 (no salt, no info) of the portal secret.  Every
//! write picks a fresh random nonce.  The file is created with mode `0600`
//! inside a `0700` cache directory.

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};
use std::path::{Path, PathBuf};

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use hkdf::Hkdf;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use thiserror::Error;

/// File name of the restore token inside the user cache directory.
pub const RESTORE_TOKEN_FILE: &str = "remote-touchpad.portal-restore-token.bin";

/// Fewest secret bytes accepted from the portal.
pub const MIN_SECRET_LEN: usize = 16;

const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;

/// Errors from deriving the key or reading and writing the token file.
#[derive(Debug, Error)]
pub enum SecretStoreError {
    #[error("'RetrieveSecret' returned too few bytes ({0})")]
    ShortSecret(usize),

    #[error("no user cache directory")]
    NoCacheDir,

    #[error("key derivation failed")]
    KeyDerivation,

    #[error("invalid ciphertext")]
    InvalidCiphertext,

    #[error("encryption failed")]
    Encryption,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SecretStoreError {
    /// `true` if the token file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

/// AES-256-GCM cipher bound to one token file.
pub struct SecretStore {
    cipher: Aes256Gcm,
    path: PathBuf,
}

impl SecretStore {
    /// Derives the file key from `secret`.
    ///
    /// # Errors
    ///
    /// [`SecretStoreError::ShortSecret`] if `secret` has fewer than
    /// [`MIN_SECRET_LEN`] bytes.
    pub fn new(secret: &[u8], path: impl Into<PathBuf>) -> Result<Self, SecretStoreError> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(SecretStoreError::ShortSecret(secret.len()));
        }
        let mut key = [0u8; KEY_LEN];
        Hkdf::<Sha256>::new(None, secret)
            .expand(&[], &mut key)
            .map_err(|_| SecretStoreError::KeyDerivation)?;
        Ok(Self {
            cipher: Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key)),
            path: path.into(),
        })
    }

    /// Store at [`RESTORE_TOKEN_FILE`] in the user cache directory, creating
    /// the directory (mode `0700`) if needed.
    pub fn in_cache_dir(secret: &[u8]) -> Result<Self, SecretStoreError> {
        let cache_dir = dirs::cache_dir().ok_or(SecretStoreError::NoCacheDir)?;
        DirBuilder::new().recursive(true).mode(0o700).create(&cache_dir)?;
        Self::new(secret, cache_dir.join(RESTORE_TOKEN_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decrypts the stored token.
    ///
    /// # Errors
    ///
    /// A missing file is reported as an I/O error for which
    /// [`SecretStoreError::is_not_found`] is `true`.  A file written with a
    /// different key, or a truncated file, is
    /// [`SecretStoreError::InvalidCiphertext`].
    pub fn load(&self) -> Result<Vec<u8>, SecretStoreError> {
        let data = fs::read(&self.path)?;
        if data.len() < NONCE_LEN {
            return Err(SecretStoreError::InvalidCiphertext);
        }
        let (nonce, ciphertext) = data.split_at(NONCE_LEN);
        self.cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| SecretStoreError::InvalidCiphertext)
    }

    /// Encrypts `token` under a fresh nonce and replaces the file.
    pub fn store(&self, token: &[u8]) -> Result<(), SecretStoreError> {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);
        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce), token)
            .map_err(|_| SecretStoreError::Encryption)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(&self.path)?;
        file.write_all(&nonce)?;
        file.write_all(&ciphertext)?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef-portal-secret";
    const TAG_LEN: usize = 16;

    fn store_in(dir: &tempfile::TempDir) -> SecretStore {
        SecretStore::new(SECRET, dir.path().join(RESTORE_TOKEN_FILE)).unwrap()
    }

    #[test]
    fn test_stored_token_loads_back() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        // Act
        store.store(b"restore-token-1").unwrap();
        let loaded = store.load().unwrap();

        // Assert
        assert_eq!(loaded, b"restore-token-1");
    }

    #[test]
    fn test_file_is_nonce_then_ciphertext_and_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.store(b"token").unwrap();

        let data = fs::read(store.path()).unwrap();
        assert_eq!(data.len(), NONCE_LEN + b"token".len() + TAG_LEN);
        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_each_write_uses_a_fresh_nonce() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.store(b"same token").unwrap();
        let first = fs::read(store.path()).unwrap();
        store.store(b"same token").unwrap();
        let second = fs::read(store.path()).unwrap();

        assert_ne!(first[..NONCE_LEN], second[..NONCE_LEN]);
        assert_ne!(first, second);
    }

    #[test]
    fn test_empty_token_is_stored() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.store(b"").unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_different_secret_cannot_decrypt() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).store(b"token").unwrap();
        let other =
            SecretStore::new(b"another secret of 16+ bytes", dir.path().join(RESTORE_TOKEN_FILE))
                .unwrap();

        // Act
        let err = other.load().unwrap_err();

        // Assert
        assert!(matches!(err, SecretStoreError::InvalidCiphertext));
    }

    #[test]
    fn test_truncated_file_is_invalid_ciphertext() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), [0u8; NONCE_LEN - 1]).unwrap();

        assert!(matches!(store.load(), Err(SecretStoreError::InvalidCiphertext)));
    }

    #[test]
    fn test_tampered_ciphertext_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.store(b"token").unwrap();
        let mut data = fs::read(store.path()).unwrap();
        data[NONCE_LEN] ^= 0x01;
        fs::write(store.path(), &data).unwrap();

        assert!(matches!(store.load(), Err(SecretStoreError::InvalidCiphertext)));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let err = store.load().unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let err = SecretStore::new(&[7u8; MIN_SECRET_LEN - 1], "unused").err().unwrap();
        assert!(matches!(err, SecretStoreError::ShortSecret(15)));
        assert_eq!(err.to_string(), "'RetrieveSecret' returned too few bytes (15)");
    }
}
