// Target-independent core (tested natively)
pub mod config;
pub mod domain;
pub mod shared;

// Browser bindings (only compiled for WASM)
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::HighlightConfig;
pub use domain::{HighlightOutcome, highlight};
pub use shared::errors::{HighlightError, Result};
