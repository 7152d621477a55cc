//! Backend registry and startup selection.
//!
//! `main` builds one [`BackendRegistry`] from the descriptors compiled for
//! the target platform, then calls [`BackendRegistry::select`] once.
//! Candidates are tried in ascending priority order (stable for equal
//! priorities).  A constructor can:
//!
//! - succeed: selection stops and that backend becomes the process-wide
//!   [`ActiveBackend`];
//! - report [`BackendError::Unsupported`]: the reason is recorded and the
//!   next candidate is tried;
//! - fail in any other way: selection aborts.
//!
//! Constructors run one at a time and must release whatever they acquired
//! before returning an error, so two backends never hold OS handles at once.

use std::fmt::Write as _;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::backend::{BackendError, InputBackend};

/// Future returned by a backend constructor.
pub type BackendFuture = BoxFuture<'static, Result<Arc<dyn InputBackend>, BackendError>>;

type Constructor = Box<dyn Fn() -> BackendFuture + Send + Sync>;

/// A named, prioritized backend constructor.
pub struct BackendDescriptor {
    name: &'static str,
    priority: i32,
    constructor: Constructor,
}

impl BackendDescriptor {
    /// Creates a descriptor.  Lower `priority` values are tried first.
    pub fn new<F, Fut>(name: &'static str, priority: i32, constructor: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<dyn InputBackend>, BackendError>> + Send + 'static,
    {
        Self {
            name,
            priority,
            constructor: Box::new(move || Box::pin(constructor())),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }
}

impl std::fmt::Debug for BackendDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendDescriptor")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// The backend chosen at startup, shared by every session.
#[derive(Clone)]
pub struct ActiveBackend {
    pub name: &'static str,
    pub backend: Arc<dyn InputBackend>,
}

impl std::fmt::Debug for ActiveBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveBackend")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Why no backend could be selected.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// Every candidate reported itself unsupported.
    #[error("unsupported platform:\n{0}")]
    Unsupported(String),

    /// A candidate failed with a non-recoverable error.
    #[error("{name} backend: {source}")]
    Fatal {
        name: &'static str,
        #[source]
        source: BackendError,
    },
}

/// Ordered list of backend descriptors.
#[derive(Debug, Default)]
pub struct BackendRegistry {
    descriptors: Vec<BackendDescriptor>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a descriptor and re-sorts by ascending priority.
    ///
    /// The sort is stable, so descriptors with equal priority keep their
    /// registration order.
    pub fn register(&mut self, descriptor: BackendDescriptor) {
        self.descriptors.push(descriptor);
        self.descriptors.sort_by_key(|d| d.priority);
    }

    /// Descriptor names in the order selection will try them.
    pub fn names(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|d| d.name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Tries each constructor in order until one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Fatal`] on the first non-recoverable
    /// constructor error, or [`SelectionError::Unsupported`] with one line
    /// per candidate if every candidate is unsupported.
    pub async fn select(&self) -> Result<ActiveBackend, SelectionError> {
        let mut reasons = String::new();
        for descriptor in &self.descriptors {
            debug!("trying {} backend", descriptor.name);
            match (descriptor.constructor)().await {
                Ok(backend) => {
                    info!("using {} backend", descriptor.name);
                    return Ok(ActiveBackend {
                        name: descriptor.name,
                        backend,
                    });
                }
                Err(err) if err.is_unsupported() => {
                    debug!("{} backend unsupported: {err}", descriptor.name);
                    let _ = writeln!(reasons, "{}: {err}", descriptor.name);
                }
                Err(err) => {
                    warn!("{} backend failed: {err}", descriptor.name);
                    return Err(SelectionError::Fatal {
                        name: descriptor.name,
                        source: err,
                    });
                }
            }
        }
        Err(SelectionError::Unsupported(reasons))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::backend::MockInputBackend;
    use std::sync::Mutex;

    /// Descriptor whose constructor records its name and returns `outcome`.
    fn recording(
        name: &'static str,
        priority: i32,
        attempts: &Arc<Mutex<Vec<&'static str>>>,
        outcome: fn() -> Result<Arc<dyn InputBackend>, BackendError>,
    ) -> BackendDescriptor {
        let attempts = Arc::clone(attempts);
        BackendDescriptor::new(name, priority, move || {
            attempts.lock().unwrap().push(name);
            let result = outcome();
            async move { result }
        })
    }

    fn unsupported() -> Result<Arc<dyn InputBackend>, BackendError> {
        Err(BackendError::unsupported("not here"))
    }

    fn denied() -> Result<Arc<dyn InputBackend>, BackendError> {
        Err(BackendError::Denied("keyboard or pointer access denied".into()))
    }

    fn working() -> Result<Arc<dyn InputBackend>, BackendError> {
        Ok(Arc::new(MockInputBackend::new()))
    }

    #[test]
    fn test_register_sorts_by_priority() {
        // Arrange
        let attempts = Arc::new(Mutex::new(Vec::new()));
        let mut registry = BackendRegistry::new();

        // Act
        registry.register(recording("ten", 10, &attempts, unsupported));
        registry.register(recording("zero", 0, &attempts, unsupported));
        registry.register(recording("five", 5, &attempts, unsupported));

        // Assert
        assert_eq!(registry.names(), vec!["zero", "five", "ten"]);
    }

    #[test]
    fn test_register_is_stable_for_equal_priority() {
        let attempts = Arc::new(Mutex::new(Vec::new()));
        let mut registry = BackendRegistry::new();
        registry.register(recording("a", 1, &attempts, unsupported));
        registry.register(recording("b", 0, &attempts, unsupported));
        registry.register(recording("c", 1, &attempts, unsupported));
        registry.register(recording("d", 0, &attempts, unsupported));

        assert_eq!(registry.names(), vec!["b", "d", "a", "c"]);
    }

    #[tokio::test]
    async fn test_select_tries_candidates_in_priority_order() {
        // Arrange
        let attempts = Arc::new(Mutex::new(Vec::new()));
        let mut registry = BackendRegistry::new();
        registry.register(recording("ten", 10, &attempts, unsupported));
        registry.register(recording("zero", 0, &attempts, unsupported));
        registry.register(recording("five", 5, &attempts, unsupported));

        // Act
        let result = registry.select().await;

        // Assert
        assert!(matches!(result, Err(SelectionError::Unsupported(_))));
        assert_eq!(*attempts.lock().unwrap(), vec!["zero", "five", "ten"]);
    }

    #[tokio::test]
    async fn test_select_stops_at_first_success() {
        let attempts = Arc::new(Mutex::new(Vec::new()));
        let mut registry = BackendRegistry::new();
        registry.register(recording("x11", 0, &attempts, unsupported));
        registry.register(recording("portal", 1, &attempts, working));
        registry.register(recording("uinput", 2, &attempts, working));

        let active = registry.select().await.unwrap();

        assert_eq!(active.name, "portal");
        assert_eq!(*attempts.lock().unwrap(), vec!["x11", "portal"]);
    }

    #[tokio::test]
    async fn test_select_aborts_on_fatal_error() {
        let attempts = Arc::new(Mutex::new(Vec::new()));
        let mut registry = BackendRegistry::new();
        registry.register(recording("portal", 1, &attempts, denied));
        registry.register(recording("uinput", 2, &attempts, working));

        let err = registry.select().await.unwrap_err();

        assert!(matches!(err, SelectionError::Fatal { name: "portal", .. }));
        assert_eq!(*attempts.lock().unwrap(), vec!["portal"]);
    }

    #[tokio::test]
    async fn test_select_aggregates_unsupported_reasons() {
        let attempts = Arc::new(Mutex::new(Vec::new()));
        let mut registry = BackendRegistry::new();
        registry.register(recording("X11", 0, &attempts, unsupported));
        registry.register(recording("uinput", 2, &attempts, unsupported));

        let err = registry.select().await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "unsupported platform:\nX11: not here\nuinput: not here\n"
        );
    }

    #[tokio::test]
    async fn test_select_on_empty_registry_is_unsupported() {
        let registry = BackendRegistry::new();
        let err = registry.select().await.unwrap_err();
        assert!(matches!(err, SelectionError::Unsupported(ref r) if r.is_empty()));
    }
}
