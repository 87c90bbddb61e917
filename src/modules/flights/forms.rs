//! Form state for the landing search and the booking form.
//!
//! Fields hold exactly what the user typed so a rejected submission can be
//! shown again unchanged.

use flightdesk_backend::BookingRequest;
use serde::Deserialize;
use thiserror::Error;

use super::nav::Route;
use crate::utils::is_blank;

/// A rejected form submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub fields: Vec<FieldError>,
}

/// One problem with one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub destination: String,
}

impl SearchForm {
    /// Where a valid search leads. Values are passed on untrimmed.
    pub fn submit(&self) -> Result<Route, ValidationError> {
        if is_blank(&self.source) || is_blank(&self.destination) {
            return Err(ValidationError {
                message: "Please enter both source and destination".to_string(),
                fields: Vec::new(),
            });
        }

        Ok(Route::Search {
            source: self.source.clone(),
            destination: self.destination.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub passenger_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "BookingForm::default_seats")]
    pub seats: String,
}

impl BookingForm {
    fn default_seats() -> String {
        "1".to_string()
    }

    /// Check the fields and build the request for `flight_id`.
    pub fn to_request(&self, flight_id: &str) -> Result<BookingRequest, ValidationError> {
        let mut fields = Vec::new();

        if is_blank(&self.passenger_name) {
            fields.push(FieldError {
                field: "passenger_name",
                message: "Enter the passenger's name",
            });
        }

        if !looks_like_email(self.email.trim()) {
            fields.push(FieldError {
                field: "email",
                message: "Enter an email address like name@example.com",
            });
        }

        let seats = match self.seats.trim().parse::<u32>() {
            Ok(seats) if seats >= 1 => Some(seats),
            _ => {
                fields.push(FieldError {
                    field: "seats",
                    message: "Seats must be a whole number of at least 1",
                });
                None
            }
        };

        match seats {
            Some(seats) if fields.is_empty() => Ok(BookingRequest {
                flight_id: flight_id.to_string(),
                passenger_name: self.passenger_name.trim().to_string(),
                email: self.email.trim().to_string(),
                seats,
            }),
            _ => Err(ValidationError {
                message: "Please correct the highlighted fields".to_string(),
                fields,
            }),
        }
    }

    /// Field problems for `field`, if any.
    pub fn error_for<'a>(errors: Option<&'a ValidationError>, field: &str) -> Option<&'a str> {
        errors?
            .fields
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            passenger_name: String::new(),
            email: String::new(),
            seats: Self::default_seats(),
        }
    }
}

/// The same shape check a browser applies to `type="email"`: one `@`,
/// something on both sides, no whitespace.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}
