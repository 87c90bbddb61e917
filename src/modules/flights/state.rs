//! Per-view fetch state.
//!
//! Handlers resolve a [`ViewState`] and hand it to a pure render function.
//! Each backend call runs as its own task. A page waits on it for at most the
//! render budget; a call still running after that is parked in an
//! [`InFlight`] table under the page's route, and the placeholder's refresh
//! picks it up instead of issuing a second request.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::StatusCode;
use flightdesk_backend::ClientError;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;

/// What a view knows about the data it displays.
#[derive(Debug)]
pub enum ViewState<T> {
    /// Nothing to fetch yet.
    Idle,
    /// The backend has not answered within the render budget.
    Loading,
    Loaded(T),
    Failed(ViewError),
}

/// Why a view could not load its data.
#[derive(Error, Debug)]
pub enum ViewError {
    #[error(transparent)]
    Backend(#[from] ClientError),

    #[error("request abandoned during shutdown")]
    Cancelled,
}

impl<T> ViewState<T> {
    /// Status code the rendered page is served with.
    pub fn status(&self) -> StatusCode {
        match self {
            ViewState::Idle | ViewState::Loading | ViewState::Loaded(_) => StatusCode::OK,
            ViewState::Failed(ViewError::Cancelled) => StatusCode::SERVICE_UNAVAILABLE,
            ViewState::Failed(ViewError::Backend(e)) if e.status() == Some(404) => {
                StatusCode::NOT_FOUND
            }
            ViewState::Failed(ViewError::Backend(_)) => StatusCode::BAD_GATEWAY,
        }
    }
}

struct Pending<T> {
    started: Instant,
    handle: JoinHandle<Result<T, ClientError>>,
}

/// Backend calls that outlived a page's render budget, keyed by route.
pub struct InFlight<T> {
    entries: Arc<Mutex<HashMap<String, Pending<T>>>>,
    retention: Duration,
}

impl<T> Clone for InFlight<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            retention: self.retention,
        }
    }
}

impl<T: Send + 'static> InFlight<T> {
    /// Parked calls older than `retention` are aborted and forgotten.
    pub fn new(retention: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            retention,
        }
    }

    /// Number of parked calls.
    pub async fn parked(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Abort every parked call.
    pub async fn abort_all(&self) {
        for (_, pending) in self.entries.lock().await.drain() {
            pending.handle.abort();
        }
    }

    async fn take_or_spawn<F, Fut>(&self, key: &str, request: F) -> Pending<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ClientError>> + Send + 'static,
    {
        let mut entries = self.entries.lock().await;
        self.prune(&mut entries);

        match entries.remove(key) {
            Some(pending) => {
                tracing::debug!(key, "resuming parked fetch");
                pending
            }
            None => Pending {
                started: Instant::now(),
                handle: tokio::spawn(request()),
            },
        }
    }

    async fn park(&self, key: &str, pending: Pending<T>) {
        let mut entries = self.entries.lock().await;
        self.prune(&mut entries);
        if let Some(previous) = entries.insert(key.to_string(), pending) {
            previous.handle.abort();
        }
    }

    fn prune(&self, entries: &mut HashMap<String, Pending<T>>) {
        entries.retain(|key, pending| {
            let keep = pending.started.elapsed() <= self.retention;
            if !keep {
                tracing::debug!(key = key.as_str(), "dropping stale parked fetch");
                pending.handle.abort();
            }
            keep
        });
    }
}

enum Settled<T> {
    Shutdown,
    Joined(Result<Result<T, ClientError>, JoinError>),
    OverBudget,
}

/// Drive the backend call for `view` at `key` and settle its state.
///
/// `request` is only invoked when no call for `key` is already parked.
pub async fn fetch<T, F, Fut>(
    view: &'static str,
    inflight: &InFlight<T>,
    key: &str,
    shutdown: &CancellationToken,
    budget: Duration,
    request: F,
) -> ViewState<T>
where
    T: Send + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ClientError>> + Send + 'static,
{
    tracing::debug!(view, key, "loading");

    if shutdown.is_cancelled() {
        return ViewState::Failed(ViewError::Cancelled);
    }

    let mut pending = inflight.take_or_spawn(key, request).await;

    let settled = tokio::select! {
        biased;
        _ = shutdown.cancelled() => Settled::Shutdown,
        joined = &mut pending.handle => Settled::Joined(joined),
        _ = tokio::time::sleep(budget) => Settled::OverBudget,
    };

    match settled {
        Settled::Shutdown => {
            tracing::debug!(view, "fetch cancelled by shutdown");
            pending.handle.abort();
            ViewState::Failed(ViewError::Cancelled)
        }
        Settled::Joined(Ok(Ok(data))) => ViewState::Loaded(data),
        Settled::Joined(Ok(Err(error))) => {
            tracing::warn!(
                view,
                error = %error,
                status = ?error.status(),
                "backend fetch failed"
            );
            ViewState::Failed(error.into())
        }
        Settled::Joined(Err(error)) => {
            tracing::warn!(view, error = %error, "fetch task stopped");
            ViewState::Failed(ViewError::Cancelled)
        }
        Settled::OverBudget => {
            tracing::debug!(view, budget_ms = budget.as_millis() as u64, "backend still pending");
            inflight.park(key, pending).await;
            ViewState::Loading
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const BUDGET: Duration = Duration::from_millis(50);

    fn table<T: Send + 'static>() -> InFlight<T> {
        InFlight::new(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn successful_fetch_is_loaded() {
        let shutdown = CancellationToken::new();
        let state = fetch("test", &table(), "k", &shutdown, BUDGET, || async {
            Ok::<_, ClientError>(3)
        })
        .await;
        assert!(matches!(state, ViewState::Loaded(3)));
        assert_eq!(state.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn backend_error_is_failed() {
        let shutdown = CancellationToken::new();
        let state: ViewState<u32> = fetch("test", &table(), "k", &shutdown, BUDGET, || async {
            Err(ClientError::Status {
                status: 500,
                body: json!({"detail": "boom"}),
            })
        })
        .await;
        assert!(matches!(state, ViewState::Failed(ViewError::Backend(_))));
        assert_eq!(state.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn missing_record_maps_to_not_found() {
        let state: ViewState<u32> = ViewState::Failed(ViewError::Backend(ClientError::Status {
            status: 404,
            body: json!({"detail": "Booking not found"}),
        }));
        assert_eq!(state.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn slow_backend_renders_placeholder_and_parks_the_call() {
        let shutdown = CancellationToken::new();
        let inflight = table();
        let state: ViewState<u32> = fetch("test", &inflight, "k", &shutdown, BUDGET, || {
            std::future::pending()
        })
        .await;
        assert!(matches!(state, ViewState::Loading));
        assert_eq!(inflight.parked().await, 1);

        inflight.abort_all().await;
        assert_eq!(inflight.parked().await, 0);
    }

    #[tokio::test]
    async fn refresh_resumes_parked_call_without_new_request() {
        let shutdown = CancellationToken::new();
        let inflight = table();
        let calls = Arc::new(AtomicUsize::new(0));

        let request = |calls: Arc<AtomicUsize>| {
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
                async {
                    tokio::time::sleep(Duration::from_millis(120)).await;
                    Ok::<_, ClientError>(7)
                }
            }
        };

        let first = fetch("test", &inflight, "k", &shutdown, BUDGET, request(calls.clone())).await;
        assert!(matches!(first, ViewState::Loading));

        tokio::time::sleep(Duration::from_millis(150)).await;

        let second = fetch("test", &inflight, "k", &shutdown, BUDGET, request(calls.clone())).await;
        assert!(matches!(second, ViewState::Loaded(7)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(inflight.parked().await, 0);
    }

    #[tokio::test]
    async fn stale_parked_call_is_replaced() {
        let shutdown = CancellationToken::new();
        let inflight = InFlight::new(Duration::from_millis(10));

        let first: ViewState<u32> = fetch("test", &inflight, "k", &shutdown, BUDGET, || {
            std::future::pending()
        })
        .await;
        assert!(matches!(first, ViewState::Loading));

        let second = fetch("test", &inflight, "k", &shutdown, BUDGET, || async {
            Ok::<_, ClientError>(9)
        })
        .await;
        assert!(matches!(second, ViewState::Loaded(9)));
    }

    #[tokio::test]
    async fn shutdown_abandons_inflight_fetch() {
        let shutdown = CancellationToken::new();
        shutdown.cancel();
        let state: ViewState<u32> = fetch("test", &table(), "k", &shutdown, BUDGET, || async {
            Ok(1)
        })
        .await;
        assert!(matches!(state, ViewState::Failed(ViewError::Cancelled)));
        assert_eq!(state.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
