use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};

use flightdesk_http::error::AppError;

use super::FlightsState;
use crate::modules::flights::{
    forms::SearchForm,
    views::{landing, Notice},
};

pub(super) async fn show(State(state): State<FlightsState>) -> Response {
    state
        .html(landing::render(&SearchForm::default(), None))
        .into_response()
}

pub(super) async fn submit(
    State(state): State<FlightsState>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;

    let response = match form.submit() {
        Ok(route) => Redirect::to(&route.href()).into_response(),
        Err(error) => {
            tracing::debug!(view = "landing", %error, "search rejected");
            let notice = Notice::from(&error);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                state.html(landing::render(&form, Some(&notice))),
            )
                .into_response()
        }
    };
    Ok(response)
}
