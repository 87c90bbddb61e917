use flightdesk_backend::FlightSummary;
use flightdesk_kernel::settings::DisplaySettings;

use super::{flight_card, retry_block, Page};
use crate::modules::flights::state::ViewState;

const EMPTY: &str = "<p class=\"empty\">No flights found.</p>\n";

pub fn render(
    state: &ViewState<Vec<FlightSummary>>,
    display: &DisplaySettings,
    retry_href: &str,
) -> Page {
    let mut page = Page::new("Available Flights", String::new());

    match state {
        ViewState::Idle => page.body.push_str(EMPTY),
        ViewState::Loaded(flights) if flights.is_empty() => page.body.push_str(EMPTY),
        ViewState::Loaded(flights) => {
            for flight in flights {
                page.body
                    .push_str(&flight_card::render(flight, &display.currency_symbol));
            }
        }
        ViewState::Loading => {
            page.body
                .push_str("<p class=\"loading\">Searching for flights...</p>\n");
            page.refresh_secs = Some(display.loading_refresh_secs);
        }
        ViewState::Failed(_) => page.body.push_str(&retry_block(
            "We could not load flights right now.",
            retry_href,
        )),
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::flights::state::ViewError;
    use flightdesk_backend::ClientError;
    use rust_decimal::Decimal;

    fn flight(id: &str, airline: &str) -> FlightSummary {
        FlightSummary {
            flight_id: id.to_string(),
            airline: airline.to_string(),
            source: "DEL".to_string(),
            destination: "BOM".to_string(),
            departure_time: "06:30".to_string(),
            price: Decimal::new(4500, 0),
        }
    }

    fn cards(page: &Page) -> usize {
        page.body.matches("class=\"flight-card\"").count()
    }

    #[test]
    fn idle_and_empty_show_empty_state() {
        let display = DisplaySettings::default();
        for state in [ViewState::Idle, ViewState::Loaded(Vec::new())] {
            let page = render(&state, &display, "/search");
            assert!(page.body.contains("No flights found."));
            assert_eq!(cards(&page), 0);
        }
    }

    #[test]
    fn cards_follow_backend_order() {
        let state = ViewState::Loaded(vec![
            flight("3", "Vistara"),
            flight("1", "IndiGo"),
            flight("2", "SpiceJet"),
        ]);
        let page = render(&state, &DisplaySettings::default(), "/search");

        assert_eq!(cards(&page), 3);
        let vistara = page.body.find("Vistara").unwrap();
        let indigo = page.body.find("IndiGo").unwrap();
        let spicejet = page.body.find("SpiceJet").unwrap();
        assert!(vistara < indigo && indigo < spicejet);
        assert!(!page.body.contains("No flights found."));
    }

    #[test]
    fn failure_is_not_an_empty_result() {
        let state = ViewState::Failed(ViewError::Backend(ClientError::Status {
            status: 500,
            body: serde_json::json!("boom"),
        }));
        let page = render(
            &state,
            &DisplaySettings::default(),
            "/search?source=DEL&destination=BOM",
        );
        assert!(!page.body.contains("No flights found."));
        assert!(page
            .body
            .contains(r#"href="/search?source=DEL&amp;destination=BOM""#));
    }

    #[test]
    fn loading_refreshes() {
        let display = DisplaySettings::default();
        let page = render(&ViewState::Loading, &display, "/search");
        assert_eq!(page.refresh_secs, Some(display.loading_refresh_secs));
    }
}
