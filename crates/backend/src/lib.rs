//! Client for the flight booking backend.
//!
//! Every call goes through [`BackendClient`], which owns the base address and
//! the request timeout. Path segments and query values are percent-encoded by
//! the URL builder, so user input can be passed through untouched.

use std::time::Duration;

use flightdesk_kernel::settings::BackendSettings;
use reqwest::Url;
use serde::{de::DeserializeOwned, Serialize};

pub mod error;
pub mod models;

pub use error::ClientError;
pub use models::{BookingConfirmation, BookingCreated, BookingRequest, FlightSummary};

/// HTTP client bound to one backend base address.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Build a client from backend settings.
    pub fn new(settings: &BackendSettings) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(&settings.base_url).map_err(|e| ClientError::InvalidBaseUrl {
                url: settings.base_url.clone(),
                reason: e.to_string(),
            })?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: settings.base_url.clone(),
                reason: "expected an http(s) address".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self { client, base_url })
    }

    /// The address every request is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve path segments against the base address, encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "base url cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue a GET and decode the JSON body.
    pub async fn get<T>(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let mut url = self.endpoint(segments)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        tracing::debug!(target: "flightdesk-backend", method = "GET", %url, "backend request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        read_json(response).await
    }

    /// Issue a POST with a JSON body and decode the JSON response.
    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;

        tracing::debug!(target: "flightdesk-backend", method = "POST", %url, "backend request");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        read_json(response).await
    }

    /// Check that something answers at the base address; any HTTP status counts.
    pub async fn probe(&self) -> Result<u16, ClientError> {
        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(ClientError::Transport)?;
        Ok(response.status().as_u16())
    }

    /// `GET /search?source=..&destination=..`, in backend order.
    pub async fn search_flights(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<Vec<FlightSummary>, ClientError> {
        self.get(&["search"], &[("source", source), ("destination", destination)])
            .await
    }

    /// `POST /book`.
    pub async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingCreated, ClientError> {
        self.post(&["book"], request).await
    }

    /// `GET /booking/{pnr}`.
    pub async fn fetch_booking(&self, pnr: &str) -> Result<BookingConfirmation, ClientError> {
        self.get(&["booking", pnr], &[]).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(ClientError::Transport)?;

    if !status.is_success() {
        let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        });
        tracing::debug!(
            target: "flightdesk-backend",
            status = status.as_u16(),
            "backend rejected request"
        );
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_slice(&bytes).map_err(ClientError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: String) -> BackendClient {
        BackendClient::new(&BackendSettings {
            base_url,
            timeout_ms: 2000,
        })
        .unwrap()
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = BackendClient::new(&BackendSettings {
            base_url: "mailto:ops@example.com".to_string(),
            timeout_ms: 1000,
        })
        .unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn endpoint_encodes_path_segments() {
        let client = client_for("http://127.0.0.1:8000".to_string());
        let url = client.endpoint(&["booking", "AB/12 ?#"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/booking/AB%2F12%20%3F%23");
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let client = client_for("http://127.0.0.1:8000/api/".to_string());
        let url = client.endpoint(&["search"]).unwrap();
        assert_eq!(url.path(), "/api/search");
    }

    #[tokio::test]
    async fn search_sends_raw_values_as_query() {
        let router = Router::new().route(
            "/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!([{
                    "flight_id": 1,
                    "airline": "Echo Air",
                    "source": params.get("source").cloned().unwrap_or_default(),
                    "destination": params.get("destination").cloned().unwrap_or_default(),
                    "departure_time": "08:00",
                    "price": 1200
                }]))
            }),
        );
        let client = client_for(spawn(router).await);

        let flights = client
            .search_flights("New Delhi & Co", "Mumbai=BOM#1")
            .await
            .unwrap();

        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].source, "New Delhi & Co");
        assert_eq!(flights[0].destination, "Mumbai=BOM#1");
    }

    #[tokio::test]
    async fn booking_lookup_uses_encoded_pnr() {
        let router = Router::new().route(
            "/booking/{pnr}",
            get(|Path(pnr): Path<String>| async move {
                Json(json!({
                    "pnr": pnr,
                    "passenger_name": "Asha Rao",
                    "flight_id": 7,
                    "seats": 1,
                    "total_price": 4500
                }))
            }),
        );
        let client = client_for(spawn(router).await);

        let details = client.fetch_booking("XY Z/1").await.unwrap();
        assert_eq!(details.pnr, "XY Z/1");
        assert_eq!(details.flight_id, "7");
    }

    #[tokio::test]
    async fn non_success_status_carries_parsed_body() {
        let router = Router::new().route(
            "/book",
            post(|Json(_body): Json<Value>| async move {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"detail": "Not enough seats available"})),
                )
            }),
        );
        let client = client_for(spawn(router).await);

        let request = BookingRequest {
            flight_id: "7".to_string(),
            passenger_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            seats: 40,
        };
        let err = client.create_booking(&request).await.unwrap_err();

        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body["detail"], "Not enough seats available");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_is_kept_as_text() {
        let router = Router::new().route(
            "/booking/{pnr}",
            get(|| async { (StatusCode::NOT_FOUND, "no such booking") }),
        );
        let client = client_for(spawn(router).await);

        let err = client.fetch_booking("NOPE").await.unwrap_err();
        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, Value::String("no such booking".to_string()));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unexpected_shape_is_decode_error() {
        let router = Router::new().route("/search", get(|| async { Json(json!({"oops": true})) }));
        let client = client_for(spawn(router).await);

        let err = client.search_flights("DEL", "BOM").await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn probe_accepts_any_status() {
        let client = client_for(spawn(Router::new()).await);
        assert_eq!(client.probe().await.unwrap(), 404);
    }

    #[tokio::test]
    async fn unreachable_backend_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}", addr));
        let err = client.search_flights("DEL", "BOM").await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
