//! Browser bindings for the sidebar highlighter
//!
//! `start` runs when the WASM module is instantiated and hooks the page's
//! `load` event; `highlightSidebar` / `highlightWith` let the host re-run it.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlAnchorElement, Window};

use crate::config::HighlightConfig;
use crate::domain::{HighlightOutcome, NavElement, NavPage, highlight, runs_immediately};
use crate::shared::constants::CONFIG_ATTRIBUTE;
use crate::shared::errors::{HighlightError, Result};

/// A sidebar entry in the DOM
pub struct DomLink(Element);

impl NavElement for DomLink {
    fn href(&self) -> Option<String> {
        // Anchors report the resolved URL, like `a.href` in the page
        match self.0.dyn_ref::<HtmlAnchorElement>() {
            Some(anchor) => Some(anchor.href()),
            None => self.0.get_attribute("href"),
        }
    }

    fn add_class(&self, class: &str) -> Result<()> {
        self.0
            .class_list()
            .add_1(class)
            .map_err(|e| dom_error("add", class, e))
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        self.0
            .class_list()
            .remove_1(class)
            .map_err(|e| dom_error("remove", class, e))
    }
}

fn dom_error(action: &str, class: &str, err: JsValue) -> HighlightError {
    HighlightError::Dom(format!("classList.{}({:?}) failed: {:?}", action, class, err))
}

/// The current browser page
pub struct DomPage {
    window: Window,
    document: Option<Document>,
}

impl DomPage {
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or(HighlightError::MissingWindow)?;
        let document = window.document();
        Ok(Self { window, document })
    }

    /// Config from the `<body>` attribute, defaults otherwise
    pub fn config(&self) -> HighlightConfig {
        let raw = self
            .document
            .as_ref()
            .and_then(Document::body)
            .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
        HighlightConfig::from_attribute(CONFIG_ATTRIBUTE, raw.as_deref())
    }

    fn ready_state(&self) -> Option<String> {
        self.document.as_ref().map(Document::ready_state)
    }
}

impl NavPage for DomPage {
    type Element = DomLink;

    fn nav_elements(&self, marker_class: &str) -> Vec<DomLink> {
        let Some(document) = &self.document else {
            return Vec::new();
        };

        let collection = document.get_elements_by_class_name(marker_class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .map(DomLink)
            .collect()
    }

    fn location_href(&self) -> Option<String> {
        self.window.location().href().ok()
    }
}

/// Highlight the current page, with `config` or the page's own config
pub fn run(config: Option<HighlightConfig>) -> Result<HighlightOutcome> {
    let page = DomPage::from_window()?;
    let config = config.unwrap_or_else(|| page.config());
    config.validate()?;
    highlight(&page, &config)
}

/// `load` handler: runs once, errors go to the console
fn on_page_load() {
    if let Err(e) = run(None) {
        tracing::error!(error = %e, "Sidebar highlight failed");
        web_sys::console::error_1(&format!("[sidebar-highlight] {}", e).into());
    }
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    web_sys::console::log_1(&"[WASM] sidebar-highlight initialized".into());

    let page = DomPage::from_window()?;
    if runs_immediately(page.ready_state().as_deref()) {
        // Module instantiated after `load` already fired
        on_page_load();
        return Ok(());
    }

    let callback = Closure::once_into_js(on_page_load);
    page.window.add_event_listener_with_callback("load", callback.unchecked_ref())?;
    Ok(())
}

/// Re-run with the page's config. Returns the active identifier, if any.
#[wasm_bindgen(js_name = highlightSidebar)]
pub fn highlight_sidebar() -> std::result::Result<Option<String>, JsValue> {
    let outcome = run(None)?;
    Ok(outcome.active.map(|id| id.to_string()))
}

/// Config object passed from JS; `undefined` and `null` mean the defaults
pub fn config_from_js(value: JsValue) -> Result<HighlightConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(HighlightConfig::default());
    }

    serde_wasm_bindgen::from_value(value).map_err(|e| HighlightError::Config(e.to_string()))
}

/// Re-run with an explicit config object, e.g. `{ activeClass: "current" }`
#[wasm_bindgen(js_name = highlightWith)]
pub fn highlight_with(config: JsValue) -> std::result::Result<Option<String>, JsValue> {
    let outcome = run(Some(config_from_js(config)?))?;
    Ok(outcome.active.map(|id| id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::last_segment;
    use serde::Serialize;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn js_object(value: serde_json::Value) -> JsValue {
        value
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .unwrap()
    }

    fn entry(tag: &str, class: &str, href: Option<&str>) -> Element {
        let element = document().create_element(tag).unwrap();
        if !class.is_empty() {
            element.set_class_name(class);
        }
        if let Some(href) = href {
            element.set_attribute("href", href).unwrap();
        }
        element
    }

    #[wasm_bindgen_test]
    fn test_anchor_href_is_resolved() {
        let link = DomLink(entry("a", "", Some("reservations")));
        let href = link.href().unwrap();
        assert!(href.starts_with("http"), "{}", href);
        assert!(href.ends_with("/reservations"), "{}", href);
    }

    #[wasm_bindgen_test]
    fn test_anchor_without_href_is_empty() {
        let link = DomLink(entry("a", "", None));
        assert_eq!(link.href(), Some(String::new()));
    }

    #[wasm_bindgen_test]
    fn test_other_elements_use_raw_attribute() {
        assert_eq!(DomLink(entry("div", "", Some(" Home "))).href(), Some(" Home ".to_string()));
        assert_eq!(DomLink(entry("div", "", None)).href(), None);
    }

    #[wasm_bindgen_test]
    fn test_config_from_js_defaults() {
        assert_eq!(config_from_js(JsValue::UNDEFINED).unwrap(), HighlightConfig::default());
        assert_eq!(config_from_js(JsValue::NULL).unwrap(), HighlightConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_config_from_js_object() {
        let config = config_from_js(js_object(serde_json::json!({ "activeClass": "current" })));
        let config = config.unwrap();
        assert_eq!(config.active_class, "current");
        assert_eq!(config.marker_class, "clickable");
        assert_eq!(config.inactive_class, "link-dark");
    }

    #[wasm_bindgen_test]
    fn test_config_from_js_rejects_non_object() {
        let err = config_from_js(JsValue::from_str("current")).unwrap_err();
        assert!(matches!(err, HighlightError::Config(_)));
    }

    #[wasm_bindgen_test]
    fn test_highlight_with_without_config() {
        assert!(highlight_with(JsValue::UNDEFINED).is_ok());
    }

    #[wasm_bindgen_test]
    fn test_highlight_with_custom_classes() {
        let location = web_sys::window().unwrap().location().href().unwrap();
        let page = last_segment(&location).to_lowercase();

        let body = document().body().unwrap();
        let current = entry("div", "sidebar-test-entry", Some(&format!("/admin/{}", page)));
        let other = entry("div", "sidebar-test-entry", Some("/admin/not-this-page"));
        body.append_child(&current).unwrap();
        body.append_child(&other).unwrap();

        let active = highlight_with(js_object(serde_json::json!({
            "markerClass": "sidebar-test-entry",
            "activeClass": "current",
            "inactiveClass": "muted",
        })))
        .unwrap();

        assert_eq!(active, Some(page));
        assert!(current.class_list().contains("current"));
        assert!(!current.class_list().contains("muted"));
        assert!(other.class_list().contains("muted"));

        current.remove();
        other.remove();
    }
}
