//! Form Handling
//!
//! Submit interception, real-time validation, inline field feedback and the
//! simulated submission round trip. Validation rules themselves live in
//! `validate`; this module only snapshots controls and mutates the DOM.

use std::collections::BTreeMap;

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::dom;
use crate::notify::{self, Severity};
use crate::validate::{self, FieldKind, Verdict};

/// Simulated round-trip time for a submission
const SUBMIT_DELAY_MS: u32 = 1_500;

const PROCESSING_LABEL: &str = "Processing...";
const SUCCESS_MSG: &str = "Thank you for your submission! We will contact you soon.";
const FAILURE_MSG: &str = "Something went wrong while sending your request. Please try again.";

// ========================
// Submission Payload & Backend Seam
// ========================

/// Wire payload of a submission: flat field-name to value mapping
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubmissionData(pub BTreeMap<String, String>);

impl SubmissionData {
    pub fn insert(&mut self, name: String, value: String) {
        self.0.insert(name, value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Seam between the submit sequence and whatever performs the round trip.
/// A real endpoint slots in behind the same call without touching the
/// submit sequence itself.
#[allow(async_fn_in_trait)]
pub trait SubmitBackend {
    async fn submit(&self, data: &SubmissionData) -> Result<(), String>;
}

/// Stand-in backend: waits out a fixed delay and reports success
pub struct SimulatedBackend;

impl SubmitBackend for SimulatedBackend {
    async fn submit(&self, _data: &SubmissionData) -> Result<(), String> {
        TimeoutFuture::new(SUBMIT_DELAY_MS).await;
        Ok(())
    }
}

// ========================
// Form Wiring
// ========================

/// Wire submit interception and real-time validation on every form
pub fn initialize_forms() {
    for el in dom::query_all("form") {
        let Ok(form) = el.dyn_into::<HtmlFormElement>() else { continue };
        wire_submit(&form);
        wire_realtime_validation(&form);
    }
}

fn wire_submit(form: &HtmlFormElement) {
    let target = form.clone();
    dom::listen(form, "submit", move |ev| {
        ev.prevent_default();
        if validate_form(&target) {
            handle_submission(target.clone());
        }
    });
}

/// Blur re-checks only the required-empty rule; input clears the error as
/// soon as the field becomes non-empty. Strict pattern checks run on submit.
fn wire_realtime_validation(form: &HtmlFormElement) {
    for field in form_controls(form) {
        let on_blur = field.clone();
        dom::listen(&field, "blur", move |_| {
            let Some((_, required, value)) = field_state(&on_blur) else { return };
            if required && value.trim().is_empty() {
                highlight_field(&on_blur, &Verdict::Invalid(validate::REQUIRED_MSG));
            } else {
                highlight_field(&on_blur, &Verdict::Valid);
            }
        });

        let on_input = field.clone();
        dom::listen(&field, "input", move |_| {
            let Some((_, _, value)) = field_state(&on_input) else { return };
            if !value.trim().is_empty() {
                highlight_field(&on_input, &Verdict::Valid);
            }
        });
    }
}

// ========================
// Form Validation
// ========================

/// Check every control, render feedback for each, return the AND of all
/// verdicts. No early exit so the user sees every problem at once.
pub fn validate_form(form: &HtmlFormElement) -> bool {
    let mut all_valid = true;

    for field in form_controls(form) {
        let Some((kind, required, value)) = field_state(&field) else { continue };
        let verdict = validate::check_field(kind, required, &value);
        if !verdict.is_valid() {
            all_valid = false;
        }
        highlight_field(&field, &verdict);
    }

    all_valid
}

/// Apply or clear the inline error state for one control. Any previous
/// message is stripped first, so repeated calls leave at most a single
/// annotation.
pub fn highlight_field(field: &Element, verdict: &Verdict) {
    if let Some(parent) = field.parent_element() {
        if let Ok(Some(existing)) = parent.query_selector(".field-error") {
            existing.remove();
        }
    }

    match verdict {
        Verdict::Invalid(message) => {
            dom::set_style(field, "border-color", "#ff4444");
            insert_error_message(field, message);
        }
        Verdict::Valid => {
            dom::set_style(field, "border-color", "#ccc");
        }
    }
}

fn insert_error_message(field: &Element, message: &str) {
    let Some(doc) = dom::document() else { return };
    let Ok(error) = doc.create_element("div") else { return };

    error.set_class_name("field-error");
    dom::set_style(&error, "color", "#ff4444");
    dom::set_style(&error, "font-size", "0.8rem");
    dom::set_style(&error, "margin-top", "5px");
    error.set_text_content(Some(message));

    if let Some(parent) = field.parent_node() {
        let _ = parent.insert_before(&error, field.next_sibling().as_ref());
    }
}

// ========================
// Submission
// ========================

/// Run the submit sequence against the simulated backend
fn handle_submission(form: HtmlFormElement) {
    let submit_btn = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());

    let original_label = submit_btn.as_ref().and_then(|btn| btn.text_content());
    if let Some(btn) = &submit_btn {
        btn.set_text_content(Some(PROCESSING_LABEL));
        btn.set_disabled(true);
    }

    let data = collect_form_data(&form);

    spawn_local(async move {
        match SimulatedBackend.submit(&data).await {
            Ok(()) => {
                notify::show(SUCCESS_MSG, Severity::Success);
                form.reset();

                if form.id() == "enquiryForm" {
                    log_enquiry(&data);
                }
            }
            Err(err) => {
                notify::show(FAILURE_MSG, Severity::Error);
                web_sys::console::log_1(&format!("[FORMS] Submission failed: {}", err).into());
            }
        }

        if let Some(btn) = &submit_btn {
            btn.set_text_content(original_label.as_deref());
            btn.set_disabled(false);
        }
    });
}

/// Snapshot all named control values into a flat mapping
pub fn collect_form_data(form: &HtmlFormElement) -> SubmissionData {
    let mut data = SubmissionData::default();
    for field in form_controls(form) {
        let Some((_, _, value)) = field_state(&field) else { continue };
        if let Some(name) = field.get_attribute("name").filter(|name| !name.is_empty()) {
            data.insert(name, value);
        }
    }
    data
}

fn log_enquiry(data: &SubmissionData) {
    if let Ok(json) = serde_json::to_string(data) {
        web_sys::console::log_1(&format!("[FORMS] Enquiry submitted: {}", json).into());
    }
}

// ========================
// Control Snapshots
// ========================

fn form_controls(form: &HtmlFormElement) -> Vec<Element> {
    let mut controls = Vec::new();
    let Ok(list) = form.query_selector_all("input, textarea, select") else { return controls };
    for index in 0..list.length() {
        if let Some(el) = list.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            controls.push(el);
        }
    }
    controls
}

/// (kind, required, value) snapshot of a form control
fn field_state(el: &Element) -> Option<(FieldKind, bool, String)> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        let kind = FieldKind::from_input_type(&input.type_());
        return Some((kind, input.required(), input.value()));
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return Some((FieldKind::TextArea, area.required(), area.value()));
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return Some((FieldKind::Select, select.required(), select.value()));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_data_serializes_as_flat_mapping() {
        let mut data = SubmissionData::default();
        data.insert("name".to_string(), "Jane".to_string());
        data.insert("email".to_string(), "jane@example.org".to_string());

        let json = serde_json::to_string(&data).unwrap();
        // BTreeMap keys serialize in sorted order
        assert_eq!(json, r#"{"email":"jane@example.org","name":"Jane"}"#);
    }

    #[test]
    fn test_submission_data_starts_empty() {
        assert!(SubmissionData::default().is_empty());
    }
}
