//! Notification Presenter
//!
//! Fixed-position banners that dismiss themselves after a short delay.
//! Every call creates an independent element and timer; concurrent banners
//! stack without interacting.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::dom;

/// How long a banner stays fully visible
const DISMISS_MS: u32 = 5_000;
/// Fade-out duration before the banner is detached
const FADE_MS: u32 = 500;

/// Banner severity, mapped to its color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl Severity {
    /// Parse a severity name; unrecognized values fall back to Info
    pub fn from_str(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    /// (background, text) colors for the banner
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            Severity::Success => ("#28a745", "white"),
            Severity::Error => ("#dc3545", "white"),
            Severity::Info => ("#007bff", "white"),
            Severity::Warning => ("#ffc107", "#212529"),
        }
    }
}

/// Show a transient banner in the top-right corner of the page
pub fn show(message: &str, severity: Severity) {
    let Some(doc) = dom::document() else { return };
    let Some(body) = doc.body() else { return };
    let Ok(banner) = doc.create_element("div") else { return };

    banner.set_text_content(Some(message));
    dom::set_style(&banner, "position", "fixed");
    dom::set_style(&banner, "top", "20px");
    dom::set_style(&banner, "right", "20px");
    dom::set_style(&banner, "padding", "15px 20px");
    dom::set_style(&banner, "border-radius", "5px");
    dom::set_style(&banner, "z-index", "1000");
    dom::set_style(&banner, "box-shadow", "0 4px 6px rgba(0,0,0,0.1)");
    dom::set_style(&banner, "max-width", "300px");

    let (background, text) = severity.colors();
    dom::set_style(&banner, "background-color", background);
    dom::set_style(&banner, "color", text);

    let _ = body.append_child(&banner);

    spawn_local(async move {
        TimeoutFuture::new(DISMISS_MS).await;
        dom::set_style(&banner, "opacity", "0");
        dom::set_style(&banner, "transition", "opacity 0.5s ease");
        TimeoutFuture::new(FADE_MS).await;
        banner.remove();
    });
}
