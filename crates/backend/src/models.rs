use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// One bookable flight as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
    #[serde(deserialize_with = "text_or_number")]
    pub flight_id: String,
    pub airline: String,
    pub source: String,
    pub destination: String,
    /// Kept exactly as the backend formats it.
    pub departure_time: String,
    pub price: Decimal,
}

/// Body posted to `/book`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub flight_id: String,
    pub passenger_name: String,
    pub email: String,
    pub seats: u32,
}

/// Response of `/book`; only the reservation code is needed to move on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCreated {
    #[serde(deserialize_with = "text_or_number")]
    pub pnr: String,
}

/// Booking details served by `/booking/{pnr}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    #[serde(deserialize_with = "text_or_number")]
    pub pnr: String,
    pub passenger_name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub flight_id: String,
    pub seats: u32,
    pub total_price: Decimal,
}

/// Identifiers arrive as strings from some backends and integers from others.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Int(value) => value.to_string(),
        Raw::Float(value) => value.to_string(),
    })
}
