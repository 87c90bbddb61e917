use anyhow::Context;
use flightdesk_kernel::settings::Settings;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load FLIGHTDESK settings")?;

    flightdesk_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        backend = %settings.backend.base_url,
        "flightdesk-app bootstrap starting"
    );

    flightdesk_app::serve(&settings, CancellationToken::new()).await?;

    tracing::info!("flightdesk-app shut down");
    Ok(())
}
