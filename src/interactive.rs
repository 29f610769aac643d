//! Generic Interactive Elements
//!
//! Site-wide polish wired on every page: smooth anchor scrolling, press
//! feedback on buttons and image fade-in.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlImageElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;

/// Press feedback duration for `.button` elements
const PRESS_FEEDBACK_MS: u32 = 150;

pub fn initialize_interactive_elements() {
    setup_smooth_scrolling();
    setup_button_feedback();
    setup_image_fade_in();
}

/// Same-page anchor links scroll smoothly instead of jumping
fn setup_smooth_scrolling() {
    for anchor in dom::query_all("a[href^=\"#\"]") {
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            let Some(target_id) = link.get_attribute("href") else { return };
            if let Some(target) = dom::query(&target_id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
}

/// Briefly scale buttons down on click
fn setup_button_feedback() {
    for button in dom::query_all(".button") {
        let pressed = button.clone();
        dom::listen(&button, "click", move |_| {
            dom::set_style(&pressed, "transform", "scale(0.98)");
            let release = pressed.clone();
            spawn_local(async move {
                TimeoutFuture::new(PRESS_FEEDBACK_MS).await;
                dom::set_style(&release, "transform", "scale(1)");
            });
        });
    }
}

/// Fade images in as they finish loading
fn setup_image_fade_in() {
    for img in dom::query_all("img") {
        dom::set_style(&img, "opacity", "0");
        dom::set_style(&img, "transition", "opacity 0.3s ease");

        let loaded = img.clone();
        dom::listen(&img, "load", move |_| {
            dom::set_style(&loaded, "opacity", "1");
        });

        // Cached images never fire load again
        if img.dyn_ref::<HtmlImageElement>().is_some_and(|i| i.complete()) {
            dom::set_style(&img, "opacity", "1");
        }
    }
}
