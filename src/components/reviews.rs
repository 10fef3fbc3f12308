//! Review board binding.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use storefront_core::{
    KeyValueStore, Review, ReviewBoard, ReviewDraft, ReviewListView, ReviewStore, SiteConfig,
    StorefrontResult,
};
use web_sys::{Document, Element, HtmlFormElement};

use super::Listeners;
use crate::dom::{by_id, cast, dom_error, field_value};
use crate::selectors::{REVIEW_FORM_ID, REVIEW_LIST_ID};

struct ReviewList {
    document: Document,
    form: HtmlFormElement,
    list: Element,
}

impl ReviewList {
    fn child(&self, tag: &str, class: &str, text: Option<&str>) -> StorefrontResult<Element> {
        let element = self
            .document
            .create_element(tag)
            .map_err(|e| dom_error("create review element", e))?;
        element.set_class_name(class);
        if let Some(text) = text {
            element.set_text_content(Some(text));
        }
        Ok(element)
    }

    /// `article.review-card` with header, badge and text, filled as plain text.
    fn build_entry(&self, review: &Review, badge: &str) -> StorefrontResult<Element> {
        let article = self.child("article", "review-card", None)?;
        let header = self.child("div", "review-header", None)?;
        let append = |parent: &Element, child: &Element| {
            parent
                .append_child(child)
                .map(|_| ())
                .map_err(|e| dom_error("append review element", e))
        };

        append(&header, &self.child("div", "review-name", Some(&review.name))?)?;
        append(&header, &self.child("div", "review-rating", Some(&review.stars))?)?;
        append(&article, &header)?;
        append(&article, &self.child("div", "review-badge", Some(badge))?)?;
        append(&article, &self.child("p", "review-text", Some(&review.message))?)?;
        Ok(article)
    }
}

impl ReviewListView for ReviewList {
    fn render(&self, review: &Review, badge: &str) {
        let appended = self.build_entry(review, badge).and_then(|entry| {
            self.list
                .append_child(&entry)
                .map(|_| ())
                .map_err(|e| dom_error("append review", e))
        });
        if let Err(e) = appended {
            tracing::warn!(error = %e, "Review not rendered");
        }
    }

    fn reset_form(&self) {
        self.form.reset();
    }
}

pub fn mount<S>(
    document: &Document,
    store: S,
    config: &SiteConfig,
) -> StorefrontResult<Option<Listeners>>
where
    S: KeyValueStore + 'static,
{
    let (Some(form), Some(list)) = (
        by_id(document, REVIEW_FORM_ID),
        by_id(document, REVIEW_LIST_ID),
    ) else {
        return Ok(None);
    };
    let form: HtmlFormElement = cast(form, "review form")?;

    let view = ReviewList {
        document: document.clone(),
        form: form.clone(),
        list,
    };
    let store = ReviewStore::new(store, config.reviews_key.clone());
    let mut board = ReviewBoard::new(store, view, config);
    board.load();
    let board = Rc::new(RefCell::new(board));

    let fields = form.clone();
    let on_submit = EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let draft = ReviewDraft::new(
                field_value(&fields, "name"),
                field_value(&fields, "rating"),
                field_value(&fields, "message"),
            );
            board.borrow_mut().submit(draft);
        },
    );

    Ok(Some(vec![on_submit]))
}
