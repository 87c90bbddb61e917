use flightdesk_http::html::escape;

use super::{Notice, Page};
use crate::modules::flights::forms::SearchForm;

pub fn render(form: &SearchForm, notice: Option<&Notice>) -> Page {
    let body = format!(
        r#"{notice}<form method="post" action="/">
<input type="text" name="source" placeholder="Source" value="{source}">
<input type="text" name="destination" placeholder="Destination" value="{destination}">
<button type="submit">Search</button>
</form>
"#,
        notice = notice.map(Notice::render).unwrap_or_default(),
        source = escape(&form.source),
        destination = escape(&form.destination),
    );

    Page::new("Search Flights", body)
}
