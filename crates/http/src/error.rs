//! Error pages for the FLIGHTDESK HTTP layer

use axum::{
    extract::rejection::{FormRejection, QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::html::escape;

/// Server-level errors that end a request with an error page
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {message}")]
    NotFound { message: String, code: String },

    /// A request whose form body or query string could not be read.
    #[error("rejected request: {message}")]
    Rejected { status: StatusCode, message: String },
}

impl AppError {
    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            code: "not_found".to_string(),
        }
    }

    fn parts(self) -> (StatusCode, String, String) {
        match self {
            AppError::NotFound { message, code } => (StatusCode::NOT_FOUND, code, message),
            AppError::Rejected { status, message } => {
                (status, "rejected_request".to_string(), message)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();
        let timestamp = OffsetDateTime::now_utc().to_string();

        let (status, error_code, message) = self.parts();

        tracing::error!(
            error_id = %error_id,
            error_code = %error_code,
            status_code = %status.as_u16(),
            "Request error"
        );

        let page = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{status}</title></head>
<body style="text-align: center;">
<h2>{status}</h2>
<p class="error-message">{message}</p>
<p><a href="/">Back to search</a></p>
<p><small>code: {code} · trace: {trace} · {timestamp}</small></p>
</body>
</html>"#,
            status = escape(&status.to_string()),
            message = escape(&message),
            code = escape(&error_code),
            trace = error_id,
            timestamp = escape(&timestamp),
        );

        (status, Html(page)).into_response()
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_mapping() {
        let error = AppError::not_found("No page at /nowhere");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_form_rejection_keeps_status() {
        use axum::{extract::FromRequest, http::Request, Form};
        use std::collections::HashMap;

        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{}"))
            .unwrap();
        let rejection = Form::<HashMap<String, String>>::from_request(request, &())
            .await
            .unwrap_err();

        let response = AppError::from(rejection).into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_error_page_escapes_message() {
        let response = AppError::not_found("No page at /<script>x</script>").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "text/html; charset=utf-8"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(body.contains("code: not_found"));
    }
}
