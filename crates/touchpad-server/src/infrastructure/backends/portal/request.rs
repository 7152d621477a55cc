//! Matching portal requests with their asynchronous `Response` signals.
//!
//! # How portal requests work (for beginners)
//!
//! Portal methods such as `CreateSession` do not return their result
//! directly.  They return the object path of a *request* and later emit
//! `org.freedesktop.portal.Request.Response(status, results)` from that
//! path, possibly after the user answered a consent dialog.
//!
//! [`ResponseRouter`] subscribes to all `Response` signals **before** the
//! first call is made, so no signal can be missed.  One background task
//! drains the signal stream and hands each response to the caller waiting
//! on its path.  A response that arrives before the caller registered (the
//! method reply and the signal race) is parked until it is claimed.
//!
//! Every wait is bounded by the router's timeout; a broker that never
//! answers yields [`PortalError::Timeout`], which is distinct from a
//! refusal ([`PortalError::Status`]).

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use futures_util::StreamExt;
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use zbus::message::Type as MessageType;
use zbus::zvariant::{OwnedObjectPath, OwnedValue};
use zbus::{Connection, MatchRule, MessageStream};

use super::secret_store::SecretStoreError;

const REQUEST_INTERFACE: &str = "org.freedesktop.portal.Request";

/// Parked responses kept for callers that have not registered yet.
const MAX_UNCLAIMED: usize = 32;

/// `results` dictionary of a `Response` signal.
pub type Results = HashMap<String, OwnedValue>;

/// Errors from talking to the portal.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("calling '{method}' failed: {source}")]
    Call {
        method: &'static str,
        #[source]
        source: zbus::Error,
    },

    #[error("unexpected 'Response' status ({status}) for '{method}'")]
    Status { method: &'static str, status: u32 },

    #[error("unexpected '{0}' type")]
    UnexpectedType(&'static str),

    #[error("timed out waiting for '{0}' response")]
    Timeout(&'static str),

    #[error("signal stream closed while waiting for '{0}' response")]
    StreamClosed(&'static str),

    #[error(transparent)]
    Bus(#[from] zbus::Error),

    #[error(transparent)]
    SecretStore(#[from] SecretStoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Body of one `Response` signal.
#[derive(Debug)]
pub struct Response {
    pub status: u32,
    pub results: Results,
}

impl Response {
    /// The results if `status` is 0 (success).
    pub fn granted(self, method: &'static str) -> Result<Results, PortalError> {
        if self.status == 0 {
            Ok(self.results)
        } else {
            Err(PortalError::Status {
                method,
                status: self.status,
            })
        }
    }
}

/// Waiting callers and parked responses, keyed by request path.
#[derive(Default)]
struct Routes {
    waiting: HashMap<OwnedObjectPath, oneshot::Sender<Response>>,
    unclaimed: HashMap<OwnedObjectPath, Response>,
}

impl Routes {
    fn deliver(&mut self, path: OwnedObjectPath, response: Response) {
        if let Some(waiter) = self.waiting.remove(&path) {
            // The receiver is gone only if its wait already timed out.
            let _ = waiter.send(response);
            return;
        }
        if self.unclaimed.len() >= MAX_UNCLAIMED {
            debug!("dropping {} unclaimed portal responses", self.unclaimed.len());
            self.unclaimed.clear();
        }
        self.unclaimed.insert(path, response);
    }

    fn claim(&mut self, path: OwnedObjectPath) -> oneshot::Receiver<Response> {
        let (tx, rx) = oneshot::channel();
        match self.unclaimed.remove(&path) {
            Some(response) => {
                let _ = tx.send(response);
            }
            None => {
                self.waiting.insert(path, tx);
            }
        }
        rx
    }

    fn abandon(&mut self, path: &OwnedObjectPath) {
        self.waiting.remove(path);
    }

    /// Fails every waiter; their receivers see a closed channel.
    fn close(&mut self) {
        self.waiting.clear();
        self.unclaimed.clear();
    }
}

fn lock(routes: &Mutex<Routes>) -> MutexGuard<'_, Routes> {
    routes.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Routes `Response` signals on one bus connection to their callers.
pub struct ResponseRouter {
    routes: Arc<Mutex<Routes>>,
    drain: JoinHandle<()>,
    timeout: Duration,
}

impl ResponseRouter {
    /// Subscribes to `Response` signals and starts the draining task.
    pub async fn subscribe(
        connection: &Connection,
        timeout: Duration,
    ) -> Result<Self, PortalError> {
        let rule = MatchRule::builder()
            .msg_type(MessageType::Signal)
            .interface(REQUEST_INTERFACE)?
            .member("Response")?
            .build();
        let mut stream = MessageStream::for_match_rule(rule, connection, None).await?;

        let routes = Arc::new(Mutex::new(Routes::default()));
        let drain_routes = Arc::clone(&routes);
        let drain = tokio::spawn(async move {
            while let Some(message) = stream.next().await {
                let message = match message {
                    Ok(message) => message,
                    Err(e) => {
                        warn!("portal signal stream error: {e}");
                        continue;
                    }
                };
                let header = message.header();
                let Some(path) = header.path() else {
                    continue;
                };
                let path = OwnedObjectPath::from(path.to_owned());
                match message.body().deserialize::<(u32, Results)>() {
                    Ok((status, results)) => {
                        debug!("portal response on {path}: status {status}");
                        lock(&drain_routes).deliver(path, Response { status, results });
                    }
                    Err(e) => warn!("malformed portal response on {path}: {e}"),
                }
            }
            debug!("portal signal stream ended");
            lock(&drain_routes).close();
        });

        Ok(Self {
            routes,
            drain,
            timeout,
        })
    }

    /// Runs `call` (which returns a request path) and waits for the
    /// matching response.
    ///
    /// # Errors
    ///
    /// - [`PortalError::Call`] if the method call itself fails.
    /// - [`PortalError::Timeout`] if no response arrives in time.
    /// - [`PortalError::StreamClosed`] if the bus connection went away.
    pub async fn request<F>(&self, method: &'static str, call: F) -> Result<Response, PortalError>
    where
        F: Future<Output = zbus::Result<OwnedObjectPath>>,
    {
        let path = call.await.map_err(|source| PortalError::Call { method, source })?;
        debug!("'{method}' started request {path}");
        let response = lock(&self.routes).claim(path.clone());

        match tokio::time::timeout(self.timeout, response).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(_)) => Err(PortalError::StreamClosed(method)),
            Err(_) => {
                lock(&self.routes).abandon(&path);
                Err(PortalError::Timeout(method))
            }
        }
    }
}

impl Drop for ResponseRouter {
    fn drop(&mut self) {
        self.drain.abort();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
