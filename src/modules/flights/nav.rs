//! The four routed views and the links between them.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// RFC 3986 unreserved characters stay literal; everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A navigable view of the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Search { source: String, destination: String },
    Booking { flight_id: String },
    Confirmation { pnr: String },
}

impl Route {
    /// Path (and query) of the view with user-supplied parts encoded.
    pub fn href(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Search {
                source,
                destination,
            } => format!(
                "/search?source={}&destination={}",
                encode(source),
                encode(destination)
            ),
            Route::Booking { flight_id } => format!("/booking/{}", encode(flight_id)),
            Route::Confirmation { pnr } => format!("/confirmation/{}", encode(pnr)),
        }
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_pass_through() {
        let route = Route::Search {
            source: "DEL".to_string(),
            destination: "BOM".to_string(),
        };
        assert_eq!(route.href(), "/search?source=DEL&destination=BOM");
    }

    #[test]
    fn query_delimiters_are_escaped() {
        let route = Route::Search {
            source: "A&B=C".to_string(),
            destination: "x+y #1".to_string(),
        };
        assert_eq!(
            route.href(),
            "/search?source=A%26B%3DC&destination=x%2By%20%231"
        );
    }

    #[test]
    fn path_segments_cannot_escape_their_slot() {
        let route = Route::Confirmation {
            pnr: "../admin?x".to_string(),
        };
        assert_eq!(route.href(), "/confirmation/..%2Fadmin%3Fx");
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        let route = Route::Booking {
            flight_id: "₹1".to_string(),
        };
        assert_eq!(route.href(), "/booking/%E2%82%B91");
    }

    #[test]
    fn landing_is_root() {
        assert_eq!(Route::Landing.href(), "/");
    }
}
