use flightdesk_backend::BookingConfirmation;
use flightdesk_http::html::escape;
use flightdesk_kernel::settings::DisplaySettings;

use super::{retry_block, Page};
use crate::modules::flights::state::ViewState;
use crate::utils::format_price;

pub fn render(
    state: &ViewState<BookingConfirmation>,
    display: &DisplaySettings,
    retry_href: &str,
) -> Page {
    let mut page = Page::new("Booking Confirmation", String::new());

    match state {
        ViewState::Loaded(details) => {
            page.body = format!(
                r#"<div class="receipt">
<p><b>PNR:</b> {pnr}</p>
<p><b>Passenger:</b> {passenger}</p>
<p><b>Flight:</b> {flight}</p>
<p><b>Seats:</b> {seats}</p>
<p><b>Total Price:</b> {total}</p>
<button type="button" onclick="window.print()">Download Receipt</button>
</div>
"#,
                pnr = escape(&details.pnr),
                passenger = escape(&details.passenger_name),
                flight = escape(&details.flight_id),
                seats = details.seats,
                total = escape(&format_price(&display.currency_symbol, details.total_price)),
            );
        }
        ViewState::Idle => page.body.push_str("<p>Loading...</p>\n"),
        ViewState::Loading => {
            page.body.push_str("<p>Loading...</p>\n");
            page.refresh_secs = Some(display.loading_refresh_secs);
        }
        ViewState::Failed(_) if state.status().as_u16() == 404 => {
            page.body
                .push_str(&retry_block("We could not find that booking.", retry_href));
        }
        ViewState::Failed(_) => page.body.push_str(&retry_block(
            "We could not load your booking right now.",
            retry_href,
        )),
    }

    page
}
