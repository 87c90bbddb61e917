//! Flight search and booking pages.

pub mod forms;
pub mod nav;
pub mod routes;
pub mod state;
pub mod views;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use axum::Router;
use flightdesk_backend::BackendClient;
use flightdesk_kernel::{settings::Settings, InitCtx, Module};
use tokio_util::sync::CancellationToken;

use routes::FlightsState;

/// Serves the landing, search, booking and confirmation views
pub struct FlightsModule {
    state: FlightsState,
}

impl FlightsModule {
    pub fn new(state: FlightsState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Module for FlightsModule {
    fn name(&self) -> &'static str {
        "flights"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            backend = %self.state.backend.base_url(),
            "flights module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.state.clone())
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        // Pages still render an error state when the backend is down, so an
        // unreachable backend is only worth a warning here.
        match self.state.backend.probe().await {
            Ok(status) => tracing::info!(
                module = self.name(),
                backend = %self.state.backend.base_url(),
                status,
                "backend reachable"
            ),
            Err(error) => tracing::warn!(
                module = self.name(),
                backend = %self.state.backend.base_url(),
                %error,
                "backend unreachable; pages will show an error state until it is up"
            ),
        }
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        self.state.searches.abort_all().await;
        self.state.bookings.abort_all().await;
        tracing::info!(module = self.name(), "flights module stopped");
        Ok(())
    }
}

/// Create the flights module from settings
pub fn create_module(
    settings: &Settings,
    shutdown: CancellationToken,
) -> anyhow::Result<Arc<dyn Module>> {
    let backend =
        BackendClient::new(&settings.backend).context("failed to build backend client")?;

    Ok(Arc::new(FlightsModule::new(FlightsState::new(
        backend,
        settings.display.clone(),
        Duration::from_millis(settings.backend.timeout_ms),
        shutdown,
    ))))
}
