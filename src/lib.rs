//! FLIGHTDESK application library
//!
//! A server-rendered front-end for the flight booking backend: search,
//! results, booking and confirmation pages.

use anyhow::Context;
use flightdesk_kernel::{settings::Settings, InitCtx, ModuleRegistry};
use tokio_util::sync::CancellationToken;

pub mod modules;
pub mod utils;

/// Build a registry holding every application module
pub fn build_registry(
    settings: &Settings,
    shutdown: &CancellationToken,
) -> anyhow::Result<ModuleRegistry> {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, settings, shutdown)?;
    Ok(registry)
}

/// Run the web front-end until `shutdown` is cancelled or a signal arrives
pub async fn serve(settings: &Settings, shutdown: CancellationToken) -> anyhow::Result<()> {
    let registry = build_registry(settings, &shutdown)?;
    let ctx = InitCtx {
        settings,
        shutdown: &shutdown,
    };

    registry
        .init_modules(&ctx)
        .await
        .context("module initialization failed")?;
    registry
        .start_modules(&ctx)
        .await
        .context("module startup failed")?;

    tokio::spawn(flightdesk_http::cancel_on_signal(shutdown.clone()));

    let served = flightdesk_http::start_server(&registry, settings, shutdown.clone()).await;

    // Stop modules even when the server failed to bind
    shutdown.cancel();
    registry.stop_modules().await?;

    served
}
