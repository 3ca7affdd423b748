pub mod highlighter;
pub mod lifecycle;
pub mod link;
pub mod registry;

pub use highlighter::{HighlightOutcome, NavElement, NavPage, apply_state, highlight};
pub use lifecycle::runs_immediately;
pub use link::{LinkId, NavState, PageId, is_js_whitespace, last_segment};
pub use registry::LinkRegistry;
