//! Navigation Setup
//!
//! Marks the current page's link in the site navigation.

use crate::dom;

pub fn initialize_navigation() {
    let Some(current) = dom::current_page() else { return };

    for link in dom::query_all("nav a") {
        if link.get_attribute("href").as_deref() == Some(current.as_str()) {
            let _ = link.class_list().add_1("active");
        }
    }

    setup_mobile_menu();
}

/// Hook for the planned responsive menu toggle
fn setup_mobile_menu() {
    web_sys::console::log_1(&"[NAV] Navigation ready for mobile enhancements".into());
}
