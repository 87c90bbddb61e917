//! Page handlers for the flights module.

mod booking;
mod confirmation;
mod landing;
mod search;

use std::time::Duration;

use axum::{response::Html, routing::get, Router};
use flightdesk_backend::{BackendClient, BookingConfirmation, FlightSummary};
use flightdesk_kernel::settings::DisplaySettings;
use tokio_util::sync::CancellationToken;

use super::state::InFlight;
use super::views::Page;

/// Shared by every page handler.
#[derive(Clone)]
pub struct FlightsState {
    pub backend: BackendClient,
    pub display: DisplaySettings,
    pub shutdown: CancellationToken,
    pub searches: InFlight<Vec<FlightSummary>>,
    pub bookings: InFlight<BookingConfirmation>,
}

impl FlightsState {
    /// Parked backend calls live as long as the backend may take to answer,
    /// plus two placeholder refreshes to collect the result.
    pub fn new(
        backend: BackendClient,
        display: DisplaySettings,
        backend_timeout: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        let retention =
            backend_timeout + Duration::from_secs(display.loading_refresh_secs.saturating_mul(2));
        Self {
            backend,
            display,
            shutdown,
            searches: InFlight::new(retention),
            bookings: InFlight::new(retention),
        }
    }

    fn render_budget(&self) -> Duration {
        Duration::from_millis(self.display.render_budget_ms)
    }

    fn html(&self, page: Page) -> Html<String> {
        Html(page.into_html(&self.display))
    }
}

/// Map the four views onto their paths.
pub fn router(state: FlightsState) -> Router {
    Router::new()
        .route("/", get(landing::show).post(landing::submit))
        .route("/search", get(search::show))
        .route("/booking/{flight_id}", get(booking::show).post(booking::submit))
        .route("/confirmation/{pnr}", get(confirmation::show))
        .with_state(state)
}
