//! Odd Jobbers Frontend Entry Point
//!
//! Progressive enhancement layer for the static site: form validation,
//! notifications, and the per-page setup routines.

pub mod dom;
pub mod forms;
pub mod hours;
pub mod interactive;
pub mod nav;
pub mod notify;
pub mod pages;
pub mod storage;
pub mod validate;

use wasm_bindgen::prelude::*;

/// Called automatically when the module is instantiated
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    nav::initialize_navigation();
    forms::initialize_forms();
    interactive::initialize_interactive_elements();

    match dom::current_page().as_deref() {
        Some("service.html") => pages::service::initialize(),
        Some("contact.html") => pages::contact::initialize(),
        Some("enquiry.html") => pages::enquiry::initialize(),
        _ => {}
    }

    Ok(())
}
