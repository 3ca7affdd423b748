use crate::shared::constants::LOADED_READY_STATE;

/// Whether the routine should run right away instead of waiting for `load`.
///
/// Only a `complete` document has already fired `load`; `loading` and
/// `interactive` still will. Without a document the listener is still used.
pub fn runs_immediately(ready_state: Option<&str>) -> bool {
    ready_state == Some(LOADED_READY_STATE)
}
