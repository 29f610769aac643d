//! Enquiry Page
//!
//! Prefills the service selector from the cross-page selection and keeps
//! the job-details placeholder in sync with the chosen service type.

use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom;
use crate::storage::{BrowserStore, SelectionStore};

/// Details placeholder per service type value
const PLACEHOLDERS: &[(&str, &str)] = &[
    ("parcel", "Please describe what you need delivered, including size, weight, pickup and delivery addresses..."),
    ("furniture", "Please describe the furniture items, dimensions, pickup and delivery locations..."),
    ("apartment_move", "Please tell us about your move: number of rooms, large items, current and new address..."),
    ("retail_pickup", "Which store, what items, delivery address, and any special instructions..."),
    ("event_help", "Please describe your event, what needs setup/takedown, date, location..."),
    ("custom", "Tell us about your unique request and how we can help..."),
];

const GENERIC_PLACEHOLDER: &str = "Please provide details about your job...";

pub fn initialize() {
    prefill_service_type(&BrowserStore);
    setup_form_enhancements();
}

// ========================
// Service Prefill
// ========================

/// Apply a selection carried over from the services page, consuming it.
/// Matching is bidirectional-substring; the first matching option in
/// iteration order wins when several qualify.
fn prefill_service_type(store: &impl SelectionStore) {
    let Some(selected) = store.read_and_clear() else { return };
    let Some(select) = service_select() else { return };

    let options = select.options();
    let labels: Vec<String> = (0..options.length())
        .filter_map(|index| option_at(&options, index).map(|option| option.text()))
        .collect();

    if let Some(index) = match_index(&labels, &selected) {
        if let Some(option) = option_at(&options, index as u32) {
            option.set_selected(true);
        }
    }
}

fn option_at(options: &web_sys::HtmlOptionsCollection, index: u32) -> Option<HtmlOptionElement> {
    options
        .item(index)
        .and_then(|el| el.dyn_into::<HtmlOptionElement>().ok())
}

/// Whether an option label and a stored selection refer to the same
/// service: a substring test in either direction
pub fn option_matches(option_label: &str, stored: &str) -> bool {
    option_label.contains(stored) || stored.contains(option_label)
}

/// Index of the first option label matching the stored selection
pub fn match_index<S: AsRef<str>>(labels: &[S], stored: &str) -> Option<usize> {
    labels
        .iter()
        .position(|label| option_matches(label.as_ref(), stored))
}

// ========================
// Placeholder Sync
// ========================

/// Details placeholder for a service type value, with the generic prompt
/// for unrecognized or unset values
pub fn placeholder_for(service_type: &str) -> &'static str {
    PLACEHOLDERS
        .iter()
        .find(|(value, _)| *value == service_type)
        .map(|(_, text)| *text)
        .unwrap_or(GENERIC_PLACEHOLDER)
}

fn setup_form_enhancements() {
    let Some(select) = service_select() else { return };
    let Some(details) = job_details() else { return };

    let source = select.clone();
    let target = details.clone();
    dom::listen(&select, "change", move |_| {
        target.set_placeholder(placeholder_for(&source.value()));
    });

    // Initial placeholder for whatever is selected on load
    details.set_placeholder(placeholder_for(&select.value()));
}

fn service_select() -> Option<HtmlSelectElement> {
    dom::by_id("serviceType")?.dyn_into::<HtmlSelectElement>().ok()
}

fn job_details() -> Option<HtmlTextAreaElement> {
    dom::by_id("jobDetails")?.dyn_into::<HtmlTextAreaElement>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_lookup() {
        assert_eq!(
            placeholder_for("parcel"),
            "Please describe what you need delivered, including size, weight, pickup and delivery addresses..."
        );
        assert_eq!(
            placeholder_for("event_help"),
            "Please describe your event, what needs setup/takedown, date, location..."
        );
    }

    #[test]
    fn test_placeholder_fallback() {
        assert_eq!(placeholder_for("window_cleaning"), GENERIC_PLACEHOLDER);
        assert_eq!(placeholder_for(""), GENERIC_PLACEHOLDER);
    }

    #[test]
    fn test_option_matches_both_directions() {
        // Stored string inside the option label
        assert!(option_matches("Furniture Delivery Service", "Furniture Delivery"));
        // Option label inside the stored string
        assert!(option_matches("Parcel", "Parcel Delivery"));
        assert!(!option_matches("Event Help", "Apartment Move"));
    }

    #[test]
    fn test_match_index_picks_first_in_iteration_order() {
        // Both labels match the stored string; the first one wins
        let labels = ["Delivery", "Furniture Delivery"];
        assert_eq!(match_index(&labels, "Furniture Delivery"), Some(0));
    }

    #[test]
    fn test_match_index_without_match() {
        let labels = ["Parcel Delivery", "Event Help"];
        assert_eq!(match_index(&labels, "Gardening"), None);
    }
}
