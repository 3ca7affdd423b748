//! Sidebar highlight routine
//!
//! Marks the sidebar entry whose identifier matches the current page as
//! active and every other tracked entry as inactive. The routine only sees
//! the page through `NavPage` / `NavElement`, so it runs the same against
//! the browser DOM and against in-memory pages.

use super::link::{LinkId, NavState, PageId};
use super::registry::LinkRegistry;
use crate::config::HighlightConfig;
use crate::shared::errors::Result;
use crate::shared::logging::{log_highlight_result, log_scan_start, log_state_applied};

/// One sidebar entry
pub trait NavElement {
    /// Destination URL, `None` when the element has none
    fn href(&self) -> Option<String>;

    fn add_class(&self, class: &str) -> Result<()>;

    fn remove_class(&self, class: &str) -> Result<()>;
}

/// The page hosting the sidebar
pub trait NavPage {
    type Element: NavElement;

    /// All elements carrying `marker_class`, in document order.
    /// A page without the expected structure returns an empty list.
    fn nav_elements(&self, marker_class: &str) -> Vec<Self::Element>;

    /// Current location URL, `None` when unavailable
    fn location_href(&self) -> Option<String>;
}

/// What a highlight run did
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightOutcome {
    /// Elements carrying the marker class
    pub scanned: usize,
    /// Distinct identifiers after last-write-wins
    pub tracked: usize,
    /// Identifier marked active, if any entry matched
    pub active: Option<LinkId>,
    pub page: PageId,
}

/// Set `state` on one element: add its class, remove the opposite one
pub fn apply_state<E: NavElement>(
    element: &E,
    state: NavState,
    config: &HighlightConfig,
) -> Result<()> {
    match state {
        NavState::Active => {
            element.remove_class(&config.inactive_class)?;
            element.add_class(&config.active_class)
        }
        NavState::Inactive => {
            element.add_class(&config.inactive_class)?;
            element.remove_class(&config.active_class)
        }
    }
}

/// Run the highlighter once over `page`.
///
/// The registry and page identifier live only for this call; running it
/// again on an unchanged page gives the same classes.
pub fn highlight<P: NavPage>(page: &P, config: &HighlightConfig) -> Result<HighlightOutcome> {
    let page_id = PageId::from_location(&page.location_href().unwrap_or_default());
    log_scan_start(&config.marker_class, page_id.as_str());

    let elements = page.nav_elements(&config.marker_class);
    let scanned = elements.len();
    let registry = LinkRegistry::from_links(
        elements
            .into_iter()
            .map(|element| (element.href().unwrap_or_default(), element)),
    );

    let mut active = None;
    for (id, element) in registry.iter() {
        let state = if page_id.matches(id) {
            active = Some(id.clone());
            NavState::Active
        } else {
            NavState::Inactive
        };
        apply_state(element, state, config)?;
        log_state_applied(id.as_str(), state.as_str());
    }

    log_highlight_result(
        scanned,
        registry.len(),
        active.as_ref().map(LinkId::as_str),
        page_id.as_str(),
    );

    Ok(HighlightOutcome {
        scanned,
        tracked: registry.len(),
        active,
        page: page_id,
    })
}
