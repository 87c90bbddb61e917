//! HTTP server facade for FLIGHTDESK: router assembly, middleware, error
//! pages and graceful shutdown.

use anyhow::Context;
use axum::{routing::get, Router};
use tokio_util::sync::CancellationToken;

use flightdesk_kernel::{settings::Settings, ModuleRegistry};

pub mod error;
pub mod html;
pub mod router;

use router::RouterBuilder;

/// Serve every registered module until `shutdown` is cancelled
pub async fn start_server(
    registry: &ModuleRegistry,
    settings: &Settings,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!(
        "starting HTTP server on {}:{}",
        settings.server.host,
        settings.server.port
    );

    let app = build_router(registry, settings);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", settings.server.host, settings.server.port))
            .await
            .context("failed to bind to address")?;

    tracing::info!(
        "HTTP server listening on http://{}:{}",
        settings.server.host,
        settings.server.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Build the main HTTP router with all module pages mounted
pub fn build_router(registry: &ModuleRegistry, settings: &Settings) -> Router {
    let mut router_builder = RouterBuilder::new().route("/healthz", get(health_check));

    for module in registry.modules() {
        tracing::info!(module = module.name(), "mounting module routes");
        router_builder = router_builder.mount_module(module.name(), module.routes());
    }

    router_builder
        .with_not_found()
        .with_timeout(settings.server.request_timeout_ms)
        .with_tracing()
        .with_request_id()
        .build()
}

/// Cancel `shutdown` on Ctrl-C or SIGTERM
pub async fn cancel_on_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
        _ = shutdown.cancelled() => return,
    }

    shutdown.cancel();
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn empty_registry_still_serves_health() {
        let registry = ModuleRegistry::new();
        let router = build_router(&registry, &Settings::default());

        let response = router
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn server_stops_when_token_is_cancelled() {
        let registry = ModuleRegistry::new();
        let mut settings = Settings::default();
        settings.server.host = "127.0.0.1".to_string();
        settings.server.port = 0;

        let shutdown = CancellationToken::new();
        shutdown.cancel();

        start_server(&registry, &settings, shutdown).await.unwrap();
    }

    #[tokio::test]
    async fn signal_listener_returns_once_cancelled() {
        let shutdown = CancellationToken::new();
        shutdown.cancel();
        cancel_on_signal(shutdown).await;
    }
}
