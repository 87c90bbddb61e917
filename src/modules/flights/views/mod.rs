//! Pure HTML renderers, one per view.
//!
//! Each renderer turns view state into a [`Page`]; the root shell wraps it.

pub mod booking;
pub mod confirmation;
pub mod flight_card;
pub mod landing;
pub mod search;

use flightdesk_http::html::escape;
use flightdesk_kernel::settings::DisplaySettings;

use super::forms::ValidationError;

/// The routed part of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub heading: &'static str,
    pub body: String,
    /// Reload the page after this many seconds.
    pub refresh_secs: Option<u64>,
}

impl Page {
    pub fn new(heading: &'static str, body: String) -> Self {
        Self {
            heading,
            body,
            refresh_secs: None,
        }
    }

    /// Wrap the page in the root shell.
    pub fn into_html(self, display: &DisplaySettings) -> String {
        let refresh = self
            .refresh_secs
            .map(|secs| format!(r#"<meta http-equiv="refresh" content="{secs}">"#))
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{refresh}<title>{heading} · {title}</title>
<style>
.notice {{ border: 2px solid #b00020; border-radius: 8px; }}
.field-error {{ color: #b00020; }}
@media print {{ button, .no-print {{ display: none; }} }}
</style>
</head>
<body>
<h1 style="text-align: center;">{title}</h1>
<div style="text-align: center;">
<h2>{heading}</h2>
{body}
</div>
</body>
</html>"#,
            refresh = refresh,
            heading = escape(self.heading),
            title = escape(&display.title),
            body = self.body,
        )
    }
}

/// A blocking message the user must acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(pub String);

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn render(&self) -> String {
        format!(
            r#"<dialog open class="notice" role="alertdialog">
<p>{}</p>
<form method="dialog"><button>OK</button></form>
</dialog>
"#,
            escape(&self.0)
        )
    }
}

impl From<&ValidationError> for Notice {
    fn from(error: &ValidationError) -> Self {
        Notice(error.message.clone())
    }
}

/// Error block with a link that repeats the request.
pub(crate) fn retry_block(message: &str, retry_href: &str) -> String {
    format!(
        r#"<p class="error">{}</p>
<p class="no-print"><a class="retry" href="{}">Try again</a></p>
"#,
        escape(message),
        escape(retry_href)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_carries_title_and_heading() {
        let html = Page::new("Search Flights", "<p>body</p>".to_string())
            .into_html(&DisplaySettings::default());
        assert!(html.contains(r#"<h1 style="text-align: center;">✈️ Flight Booking Simulator</h1>"#));
        assert!(html.contains("<h2>Search Flights</h2>"));
        assert!(html.contains("<p>body</p>"));
        assert!(!html.contains("http-equiv"));
    }

    #[test]
    fn placeholder_pages_refresh() {
        let mut page = Page::new("Booking Confirmation", String::new());
        page.refresh_secs = Some(2);
        let html = page.into_html(&DisplaySettings::default());
        assert!(html.contains(r#"<meta http-equiv="refresh" content="2">"#));
    }

    #[test]
    fn notice_is_escaped() {
        let html = Notice::new("<b>nope</b>").render();
        assert!(html.contains("&lt;b&gt;nope&lt;/b&gt;"));
        assert!(html.contains(r#"role="alertdialog""#));
        assert!(!html.contains("aria-modal"));
    }
}
