use flightdesk_http::html::escape;

use super::{Notice, Page};
use crate::modules::flights::forms::{BookingForm, ValidationError};
use crate::modules::flights::nav::Route;

pub fn render(
    flight_id: &str,
    form: &BookingForm,
    notice: Option<&Notice>,
    errors: Option<&ValidationError>,
) -> Page {
    let action = Route::Booking {
        flight_id: flight_id.to_string(),
    }
    .href();

    let body = format!(
        r#"{notice}<p>Flight: {flight_id}</p>
<form method="post" action="{action}">
<div>
<input type="text" name="passenger_name" placeholder="Passenger Name" value="{name}" required>
{name_error}</div>
<div>
<input type="email" name="email" placeholder="Email Address" value="{email}" required>
{email_error}</div>
<div>
<input type="number" name="seats" min="1" placeholder="Seats" value="{seats}" required>
{seats_error}</div>
<button type="submit">Confirm Booking</button>
</form>
"#,
        notice = notice.map(Notice::render).unwrap_or_default(),
        flight_id = escape(flight_id),
        action = escape(&action),
        name = escape(&form.passenger_name),
        email = escape(&form.email),
        seats = escape(&form.seats),
        name_error = field_error(errors, "passenger_name"),
        email_error = field_error(errors, "email"),
        seats_error = field_error(errors, "seats"),
    );

    Page::new("Book Flight", body)
}

fn field_error(errors: Option<&ValidationError>, field: &str) -> String {
    BookingForm::error_for(errors, field)
        .map(|message| format!("<p class=\"field-error\">{}</p>\n", escape(message)))
        .unwrap_or_default()
}
