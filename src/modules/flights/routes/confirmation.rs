use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use super::FlightsState;
use crate::modules::flights::{nav::Route, state::fetch, views::confirmation};

pub(super) async fn show(State(state): State<FlightsState>, Path(pnr): Path<String>) -> Response {
    let retry = Route::Confirmation { pnr: pnr.clone() }.href();

    let backend = state.backend.clone();
    let view = fetch(
        "confirmation",
        &state.bookings,
        &retry,
        &state.shutdown,
        state.render_budget(),
        move || async move { backend.fetch_booking(&pnr).await },
    )
    .await;

    (
        view.status(),
        state.html(confirmation::render(&view, &state.display, &retry)),
    )
        .into_response()
}
