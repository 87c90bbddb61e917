pub mod flights;

use flightdesk_kernel::{settings::Settings, ModuleRegistry};
use tokio_util::sync::CancellationToken;

/// Register all project-specific modules with the registry
pub fn register_all(
    registry: &mut ModuleRegistry,
    settings: &Settings,
    shutdown: &CancellationToken,
) -> anyhow::Result<()> {
    registry.register(flights::create_module(settings, shutdown.clone())?);
    Ok(())
}
