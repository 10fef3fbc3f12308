//! Current year in the footer.

use chrono::Datelike;
use web_sys::Document;

use crate::dom::by_id;
use crate::selectors::YEAR_ID;

/// Fill the year element once. Returns false when the page has none.
pub fn mount(document: &Document) -> bool {
    let Some(year) = by_id(document, YEAR_ID) else {
        return false;
    };
    year.set_text_content(Some(&chrono::Local::now().year().to_string()));
    true
}
