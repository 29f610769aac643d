//! Service Page
//!
//! Hover feedback on service cards and hand-off of the picked service to
//! the enquiry page.

use web_sys::Element;

use crate::dom;
use crate::storage::{BrowserStore, SelectionStore};

pub fn initialize() {
    initialize_service_cards();
    setup_quick_quotes();
}

fn initialize_service_cards() {
    for card in dom::query_all("#services > div > div") {
        let enter = card.clone();
        dom::listen(&card, "mouseenter", move |_| {
            dom::set_style(&enter, "transform", "translateY(-5px)");
            dom::set_style(&enter, "box-shadow", "0 10px 20px rgba(0,0,0,0.1)");
            dom::set_style(&enter, "transition", "all 0.3s ease");
        });

        let leave = card.clone();
        dom::listen(&card, "mouseleave", move |_| {
            dom::set_style(&leave, "transform", "translateY(0)");
            dom::set_style(&leave, "box-shadow", "none");
        });

        let clicked = card.clone();
        dom::listen(&card, "click", move |_| {
            if let Some(title) = card_title(&clicked) {
                web_sys::console::log_1(&format!("[SERVICE] Service selected: {}", title).into());
                BrowserStore.write(&title);
            }
        });
    }
}

/// Quick-quote buttons store the service of their surrounding card before
/// navigating to the enquiry page
fn setup_quick_quotes() {
    for button in dom::query_all(".button[href=\"enquiry.html\"]") {
        let source = button.clone();
        dom::listen(&button, "click", move |_| {
            if let Some(card) = source.closest("div").ok().flatten() {
                if let Some(title) = card_title(&card) {
                    BrowserStore.write(&title);
                }
            }
        });
    }
}

/// Heading text of a service card
fn card_title(card: &Element) -> Option<String> {
    let heading = card.query_selector("h3").ok().flatten()?;
    heading.text_content()
}
