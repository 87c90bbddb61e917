use flightdesk_backend::FlightSummary;
use flightdesk_http::html::escape;

use crate::modules::flights::nav::Route;
use crate::utils::format_price;

pub fn render(flight: &FlightSummary, currency_symbol: &str) -> String {
    let book = Route::Booking {
        flight_id: flight.flight_id.clone(),
    };

    format!(
        r#"<div class="flight-card" style="border: 1px solid #ccc; margin: 10px; padding: 10px; border-radius: 8px;">
<h3>{airline}</h3>
<p>{source} → {destination}</p>
<p>Departure: {departure}</p>
<p>Price: {price}</p>
<a class="book" href="{href}">Book Now</a>
</div>
"#,
        airline = escape(&flight.airline),
        source = escape(&flight.source),
        destination = escape(&flight.destination),
        departure = escape(&flight.departure_time),
        price = escape(&format_price(currency_symbol, flight.price)),
        href = escape(&book.href()),
    )
}
