use async_trait::async_trait;
use axum::Router;
use tokio_util::sync::CancellationToken;

/// Context provided to modules during initialization
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
    /// Cancelled once the process begins shutting down
    pub shutdown: &'a CancellationToken,
}

/// Core module trait that all FLIGHTDESK modules must implement
#[async_trait]
pub trait Module: Sync + Send {
    /// Unique name for this module
    fn name(&self) -> &'static str;

    /// Initialize the module with the provided context
    /// Called during application startup before the server binds
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Return the Axum router for this module's pages
    /// Routes are merged at the site root
    fn routes(&self) -> Router {
        Router::new()
    }

    /// Start background work for this module
    /// Called after every module has been initialized
    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Stop the module and clean up resources
    /// Called during application shutdown
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
