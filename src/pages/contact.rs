//! Contact Page
//!
//! Map loading indicator, clickable contact details and the business-hours
//! status banner.

use regex::Regex;
use std::sync::LazyLock;
use web_sys::Element;

use crate::dom;
use crate::hours;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone pattern"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern"));

const OPEN_MSG: &str = "\u{2713} We are currently open and ready to help!";
const CLOSED_MSG: &str = "\u{2717} We are currently closed. Please leave a message and we will get back to you during business hours.";

pub fn initialize() {
    initialize_map();
    initialize_contact_info();
    update_business_hours_status();
}

// ========================
// Map Frame
// ========================

/// Hide the embedded map behind a loading placeholder until it loads,
/// or swap the placeholder for an error note if it never does
fn initialize_map() {
    let Some(map_frame) = dom::query("iframe") else { return };
    let Some(container) = map_frame.parent_element() else { return };
    let Some(doc) = dom::document() else { return };
    let Ok(loading) = doc.create_element("div") else { return };

    loading.set_text_content(Some("Loading map..."));
    dom::set_style(&loading, "text-align", "center");
    dom::set_style(&loading, "padding", "20px");
    let _ = container.insert_before(&loading, Some(map_frame.as_ref()));

    dom::set_style(&map_frame, "display", "none");

    let frame = map_frame.clone();
    let indicator = loading.clone();
    dom::listen(&map_frame, "load", move |_| {
        indicator.remove();
        dom::set_style(&frame, "display", "block");
        web_sys::console::log_1(&"[CONTACT] Map loaded successfully".into());
    });

    let failed = loading.clone();
    dom::listen(&map_frame, "error", move |_| {
        failed.set_text_content(Some(
            "Unable to load map. Please check your internet connection.",
        ));
        dom::set_style(&failed, "color", "#ff4444");
    });
}

// ========================
// Contact Details
// ========================

/// Turn the phone number and email address inside the address block into
/// tel:/mailto: links
fn initialize_contact_info() {
    let Some(contact_info) = dom::query("address") else { return };

    if let Ok(Some(phone_el)) = contact_info.query_selector("p:nth-child(2)") {
        apply_linked_html(&phone_el, link_phone_number);
    }
    if let Ok(Some(email_el)) = contact_info.query_selector("p:first-child") {
        apply_linked_html(&email_el, link_email_address);
    }
}

fn apply_linked_html(paragraph: &Element, link: fn(&str) -> Option<String>) {
    if let Some(html) = link(&paragraph.inner_html()) {
        paragraph.set_inner_html(&html);
    }
}

/// Wrap the first phone number in the markup in a tel: anchor.
/// None when no phone number is present.
pub fn link_phone_number(html: &str) -> Option<String> {
    let phone = PHONE_RE.find(html)?.as_str();
    let anchor = format!(
        "<a href=\"tel:{}\" style=\"color: #007bff; text-decoration: none;\">{}</a>",
        digits_only(phone),
        phone
    );
    Some(html.replacen(phone, &anchor, 1))
}

/// Wrap the first email address in the markup in a mailto: anchor
pub fn link_email_address(html: &str) -> Option<String> {
    let email = EMAIL_RE.find(html)?.as_str();
    let anchor = format!(
        "<a href=\"mailto:{}\" style=\"color: #007bff; text-decoration: none;\">{}</a>",
        email, email
    );
    Some(html.replacen(email, &anchor, 1))
}

/// Strip everything but digits
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format a bare ten-digit number as (123) 456-7890; anything else passes
/// through unchanged
pub fn format_phone_number(raw: &str) -> String {
    let cleaned = digits_only(raw);
    if cleaned.len() == 10 {
        format!("({}) {}-{}", &cleaned[..3], &cleaned[3..6], &cleaned[6..])
    } else {
        raw.to_string()
    }
}

// ========================
// Business Hours Banner
// ========================

/// Banner text for the current open state
pub fn status_message(open: bool) -> &'static str {
    if open {
        OPEN_MSG
    } else {
        CLOSED_MSG
    }
}

fn update_business_hours_status() {
    let Some(doc) = dom::document() else { return };
    let Ok(status) = doc.create_element("div") else { return };

    dom::set_style(&status, "padding", "10px");
    dom::set_style(&status, "margin", "10px 0");
    dom::set_style(&status, "border-radius", "5px");
    dom::set_style(&status, "font-weight", "bold");

    let open = hours::is_open_now();
    status.set_text_content(Some(status_message(open)));
    if open {
        dom::set_style(&status, "background-color", "#d4edda");
        dom::set_style(&status, "color", "#155724");
        dom::set_style(&status, "border", "1px solid #c3e6cb");
    } else {
        dom::set_style(&status, "background-color", "#f8d7da");
        dom::set_style(&status, "color", "#721c24");
        dom::set_style(&status, "border", "1px solid #f5c6cb");
    }

    let Some(section) = dom::query("#contact") else { return };
    let Some(heading) = section.query_selector("h3").ok().flatten() else { return };
    let Some(info) = heading.next_element_sibling() else { return };
    if let Some(parent) = info.parent_node() {
        let _ = parent.insert_before(&status, Some(info.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_phone_number() {
        let html = "Phone: (011) 555-0123";
        let linked = link_phone_number(html).unwrap();
        assert!(linked.contains("href=\"tel:0115550123\""));
        assert!(linked.contains(">(011) 555-0123</a>"));
    }

    #[test]
    fn test_link_phone_number_without_match() {
        assert_eq!(link_phone_number("Call us any time"), None);
    }

    #[test]
    fn test_link_email_address() {
        let html = "Email: hello@oddjobbers.co.za";
        let linked = link_email_address(html).unwrap();
        assert!(linked.contains("href=\"mailto:hello@oddjobbers.co.za\""));
        assert!(linked.contains(">hello@oddjobbers.co.za</a>"));
    }

    #[test]
    fn test_link_email_address_without_match() {
        assert_eq!(link_email_address("Write to us"), None);
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("(011) 555-0123"), "0115550123");
        assert_eq!(digits_only("no digits"), "");
    }

    #[test]
    fn test_format_phone_number() {
        assert_eq!(format_phone_number("0115550123"), "(011) 555-0123");
        assert_eq!(format_phone_number("011-555-0123"), "(011) 555-0123");
    }

    #[test]
    fn test_format_phone_number_passthrough() {
        // Not ten digits: returned unchanged
        assert_eq!(format_phone_number("12345"), "12345");
        assert_eq!(format_phone_number("+27 11 555 0199"), "+27 11 555 0199");
    }

    #[test]
    fn test_status_message() {
        assert!(status_message(true).contains("currently open"));
        assert!(status_message(false).contains("currently closed"));
    }
}
