use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use flightdesk_http::error::AppError;

use super::FlightsState;
use crate::modules::flights::{
    nav::Route,
    state::{fetch, ViewState},
    views::search,
};
use crate::utils::is_blank;

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    source: Option<String>,
    destination: Option<String>,
}

pub(super) async fn show(
    State(state): State<FlightsState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let source = query.source.unwrap_or_default();
    let destination = query.destination.unwrap_or_default();

    let retry = Route::Search {
        source: source.clone(),
        destination: destination.clone(),
    }
    .href();

    let view = if is_blank(&source) || is_blank(&destination) {
        ViewState::Idle
    } else {
        let backend = state.backend.clone();
        let (from, to) = (source.clone(), destination.clone());
        fetch(
            "search",
            &state.searches,
            &retry,
            &state.shutdown,
            state.render_budget(),
            move || async move { backend.search_flights(&from, &to).await },
        )
        .await
    };

    if let ViewState::Loaded(flights) = &view {
        tracing::info!(
            view = "search",
            %source,
            %destination,
            results = flights.len(),
            "flights listed"
        );
    }

    Ok((
        view.status(),
        state.html(search::render(&view, &state.display, &retry)),
    )
        .into_response())
}
