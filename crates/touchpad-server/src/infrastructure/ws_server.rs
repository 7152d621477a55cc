//! WebSocket server: accept loop, authentication handshake and command loop.
//!
//! This module is responsible for:
//!
//! 1. Binding a TCP listener on the configured address.
//! 2. Running the TLS handshake first when a certificate is configured.
//! 3. Upgrading connections on the `/ws` path to WebSocket sessions.
//! 4. Running the challenge-response handshake for each session.
//! 5. Decoding every later message into a command and applying it to the
//!    shared backend, strictly in arrival order.
//! 6. Stopping the accept loop when the `running` flag is cleared.
//!
//! # Failure policy
//!
//! A failed handshake, a malformed command, or a backend error ends only the
//! session that caused it.  Nothing is sent back to the peer before the
//! connection closes; the reason is logged here.  The backend itself stays
//! open for other sessions and is closed once by `main` at shutdown.

use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use anyhow::{anyhow, bail, Context};
use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tokio_rustls::TlsAcceptor;
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};
use tokio_tungstenite::tungstenite::http::StatusCode;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{accept_hdr_async, WebSocketStream};
use tracing::{debug, error, info, warn};

use touchpad_core::decode_command;

use crate::application::{apply_command, ActiveBackend};
use crate::domain::ServerConfig;
use crate::infrastructure::challenges::{spawn_challenge_generator, ChallengeQueue};
use crate::infrastructure::tls;

/// Path the browser client opens its WebSocket on.
pub const WS_PATH: &str = "/ws";

const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(200);

// ── Public API ────────────────────────────────────────────────────────────────

/// Binds `config.bind_addr` and serves sessions until `running` is cleared.
///
/// # Errors
///
/// Returns an error if the TLS files cannot be loaded or the listener cannot
/// be bound.
pub async fn run_server(
    config: ServerConfig,
    backend: ActiveBackend,
    running: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    let acceptor = match &config.tls {
        Some(files) => Some(tls::load_from_files(&files.cert, &files.key)?),
        None => None,
    };

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind WebSocket listener on {}", config.bind_addr))?;

    let local_addr = listener.local_addr().context("failed to read listener address")?;
    let scheme = if acceptor.is_some() { "https" } else { "http" };
    info!("listening on {scheme}://{local_addr}/#{}", config.secret);

    serve(listener, config.secret, acceptor, backend, running).await
}

/// Runs the accept loop on an already bound listener.
///
/// Split from [`run_server`] so callers that need the real port of a
/// `:0` bind (tests, mostly) can bind themselves.  With an `acceptor` every
/// connection is served over TLS.
pub async fn serve(
    listener: TcpListener,
    secret: String,
    acceptor: Option<TlsAcceptor>,
    backend: ActiveBackend,
    running: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    let (challenges, generator) = spawn_challenge_generator(secret);

    loop {
        if !running.load(Ordering::Relaxed) {
            info!("shutdown flag set; stopping accept loop");
            break;
        }

        // Short accept timeout so the loop notices the flag without a client.
        match timeout(ACCEPT_POLL_INTERVAL, listener.accept()).await {
            Ok(Ok((stream, peer_addr))) => {
                debug!("new connection from {peer_addr}");
                let challenges = Arc::clone(&challenges);
                let backend = backend.clone();
                let acceptor = acceptor.clone();
                tokio::spawn(async move {
                    handle_session(stream, peer_addr, acceptor, challenges, backend).await;
                });
            }
            Ok(Err(e)) => error!("accept error: {e}"),
            Err(_) => {}
        }
    }

    generator.abort();
    Ok(())
}

// ── Per-session handler ───────────────────────────────────────────────────────

async fn handle_session(
    raw_stream: TcpStream,
    peer_addr: SocketAddr,
    acceptor: Option<TlsAcceptor>,
    challenges: Arc<ChallengeQueue>,
    backend: ActiveBackend,
) {
    let result = match acceptor {
        Some(acceptor) => match acceptor.accept(raw_stream).await {
            Ok(stream) => run_session(stream, peer_addr, &challenges, &backend).await,
            Err(e) => Err(anyhow::Error::new(e).context("TLS handshake failed")),
        },
        None => run_session(raw_stream, peer_addr, &challenges, &backend).await,
    };
    match result {
        Ok(()) => info!("session {peer_addr} closed"),
        Err(e) => warn!("session {peer_addr} closed with error: {e:#}"),
    }
}

/// Runs one session from the WebSocket upgrade to disconnect.
async fn run_session<S>(
    raw_stream: S,
    peer_addr: SocketAddr,
    challenges: &ChallengeQueue,
    backend: &ActiveBackend,
) -> anyhow::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut ws = accept_hdr_async(raw_stream, ws_path_only)
        .await
        .with_context(|| format!("WebSocket handshake failed with {peer_addr}"))?;

    // ── Authentication ────────────────────────────────────────────────────────
    let challenge = challenges
        .next()
        .await
        .ok_or_else(|| anyhow!("challenge generator stopped"))?;
    ws.send(WsMessage::Text(challenge.message().to_string()))
        .await
        .context("failed to send challenge")?;

    let response = match next_payload(&mut ws).await? {
        Some(payload) => payload,
        None => return Ok(()),
    };
    if !challenge.verify(&String::from_utf8_lossy(&response)) {
        // Close without telling the peer why.
        let _ = ws.close(None).await;
        bail!("authentication failed");
    }
    info!("session {peer_addr} authenticated");

    // ── Commands ──────────────────────────────────────────────────────────────
    while let Some(payload) = next_payload(&mut ws).await? {
        let command = match decode_command(&payload) {
            Ok(c) => c,
            Err(e) => {
                let _ = ws.close(None).await;
                return Err(anyhow::Error::new(e).context("invalid command"));
            }
        };
        if let Err(e) = apply_command(backend.backend.as_ref(), command).await {
            let _ = ws.close(None).await;
            return Err(anyhow::Error::new(e).context(format!("{} backend", backend.name)));
        }
    }
    Ok(())
}

/// Reads the next text or binary message body.
///
/// Control frames are skipped.  Returns `None` when the peer closes.
async fn next_payload<S>(ws: &mut WebSocketStream<S>) -> anyhow::Result<Option<Vec<u8>>>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    while let Some(msg) = ws.next().await {
        match msg.context("WebSocket read failed")? {
            WsMessage::Text(text) => return Ok(Some(text.into_bytes())),
            WsMessage::Binary(data) => return Ok(Some(data)),
            WsMessage::Close(_) => return Ok(None),
            WsMessage::Ping(_) | WsMessage::Pong(_) | WsMessage::Frame(_) => {}
        }
    }
    Ok(None)
}

/// Handshake callback: only `/ws` is upgraded, everything else gets a 404.
#[allow(clippy::result_large_err)]
fn ws_path_only(request: &Request, response: Response) -> Result<Response, ErrorResponse> {
    if request.uri().path() == WS_PATH {
        return Ok(response);
    }
    let mut not_found = ErrorResponse::new(Some("not found".to_string()));
    *not_found.status_mut() = StatusCode::NOT_FOUND;
    Err(not_found)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
