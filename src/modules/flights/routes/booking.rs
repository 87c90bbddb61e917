use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};

use flightdesk_http::error::AppError;

use super::FlightsState;
use crate::modules::flights::{
    forms::BookingForm,
    nav::Route,
    views::{booking, Notice},
};

pub(super) async fn show(
    State(state): State<FlightsState>,
    Path(flight_id): Path<String>,
) -> Response {
    state
        .html(booking::render(&flight_id, &BookingForm::default(), None, None))
        .into_response()
}

/// Submitted once; the backend call is not raced against shutdown because an
/// abandoned booking may still be committed upstream.
pub(super) async fn submit(
    State(state): State<FlightsState>,
    Path(flight_id): Path<String>,
    form: Result<Form<BookingForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;

    let request = match form.to_request(&flight_id) {
        Ok(request) => request,
        Err(error) => {
            tracing::debug!(view = "booking", %flight_id, %error, "booking form rejected");
            let notice = Notice::from(&error);
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                state.html(booking::render(&flight_id, &form, Some(&notice), Some(&error))),
            )
                .into_response());
        }
    };

    let response = match state.backend.create_booking(&request).await {
        Ok(created) => {
            tracing::info!(view = "booking", %flight_id, pnr = %created.pnr, "booking created");
            Redirect::to(&Route::Confirmation { pnr: created.pnr }.href()).into_response()
        }
        Err(error) => {
            tracing::warn!(
                view = "booking",
                %flight_id,
                error = %error,
                status = ?error.status(),
                "booking failed"
            );
            let notice = Notice::new("Booking failed!");
            (
                StatusCode::BAD_GATEWAY,
                state.html(booking::render(&flight_id, &form, Some(&notice), None)),
            )
                .into_response()
        }
    };
    Ok(response)
}
