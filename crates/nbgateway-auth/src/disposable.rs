//! Asynchronous teardown for resources that outlive a single call, such as
//! clients holding per-server session state.

use std::sync::{Arc, Mutex};

/// A resource that needs asynchronous teardown.
#[async_trait::async_trait]
pub trait AsyncDisposable: Send + Sync {
    /// Release any state held by the resource.
    ///
    /// Disposal is idempotent; disposing an already disposed resource is a
    /// no-op.
    async fn dispose(&self);
}

/// Collects [`AsyncDisposable`] resources so the host can tear them down
/// together, typically when a workspace or extension shuts down.
#[derive(Default)]
pub struct AsyncDisposableRegistry {
    disposables: Mutex<Vec<Arc<dyn AsyncDisposable>>>,
}

impl AsyncDisposableRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a resource for later disposal.
    pub fn register(&self, disposable: Arc<dyn AsyncDisposable>) {
        self.disposables
            .lock()
            .expect("Mutex is not poisoned")
            .push(disposable);
    }

    /// Dispose every registered resource in registration order and forget
    /// them.
    pub async fn dispose_all(&self) {
        let drained: Vec<_> = {
            let mut disposables = self.disposables.lock().expect("Mutex is not poisoned");
            disposables.drain(..).collect()
        };

        for disposable in drained {
            disposable.dispose().await;
        }
    }
}
