//! TLS for the WebSocket endpoint.
//!
//! When a certificate and key are configured, every accepted TCP connection
//! goes through a rustls handshake before the WebSocket upgrade, so the
//! challenge and the client's response travel over `wss://`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio_rustls::rustls::pki_types::{CertificateDer, PrivateKeyDer};
use tokio_rustls::{rustls, TlsAcceptor};
use tracing::info;

/// Loads a PEM certificate chain and private key and builds an acceptor.
///
/// # Errors
///
/// Returns an error if either file cannot be read, holds no certificate or
/// key, or the key does not match the certificate.
pub fn load_from_files(cert_path: &Path, key_path: &Path) -> Result<TlsAcceptor> {
    info!(?cert_path, ?key_path, "loading TLS certificate from files");

    let certs = read_certs(cert_path)?;
    let key = read_private_key(key_path)?;
    make_acceptor(certs, key)
}

fn read_certs(path: &Path) -> Result<Vec<CertificateDer<'static>>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let certs = rustls_pemfile::certs(&mut BufReader::new(file))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid PEM in {}", path.display()))?;
    if certs.is_empty() {
        anyhow::bail!("no certificate found in {}", path.display());
    }
    Ok(certs)
}

fn read_private_key(path: &Path) -> Result<PrivateKeyDer<'static>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    rustls_pemfile::private_key(&mut BufReader::new(file))
        .with_context(|| format!("invalid PEM in {}", path.display()))?
        .with_context(|| format!("no private key found in {}", path.display()))
}

fn make_acceptor(
    certs: Vec<CertificateDer<'static>>,
    key: PrivateKeyDer<'static>,
) -> Result<TlsAcceptor> {
    let server_config = rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .context("bad certificate/key")?;

    Ok(TlsAcceptor::from(Arc::new(server_config)))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
