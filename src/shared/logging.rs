//! Structured logging module for the sidebar highlighter
//!
//! Provides consistent, contextual logging for each highlight run.
//! Uses tracing with structured fields; the host decides where events go.

/// Log levels for different operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Scan,
    Register,
    Apply,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Scan => "scan",
            LogOperation::Register => "register",
            LogOperation::Apply => "apply",
            LogOperation::Config => "config",
        }
    }
}

/// Log scan start
pub fn log_scan_start(marker_class: &str, page: &str) {
    tracing::debug!(
        operation = LogOperation::Scan.as_str(),
        marker_class = marker_class,
        page = page,
        "Scanning sidebar entries"
    );
}

/// Log a link registration
pub fn log_link_registered(identifier: &str, href: &str) {
    tracing::trace!(
        operation = LogOperation::Register.as_str(),
        identifier = identifier,
        href = href,
        "Registered sidebar entry"
    );
}

/// Log an earlier entry losing its registry slot (last-write-wins)
pub fn log_link_shadowed(identifier: &str) {
    tracing::warn!(
        operation = LogOperation::Register.as_str(),
        identifier = identifier,
        "Duplicate sidebar identifier - earlier entry is no longer tracked"
    );
}

/// Log a state change for one entry
pub fn log_state_applied(identifier: &str, state: &str) {
    tracing::trace!(
        operation = LogOperation::Apply.as_str(),
        identifier = identifier,
        state = state,
        "Applied sidebar entry state"
    );
}

/// Log the result of a run
pub fn log_highlight_result(scanned: usize, tracked: usize, active: Option<&str>, page: &str) {
    match active {
        Some(identifier) => tracing::info!(
            operation = LogOperation::Apply.as_str(),
            scanned = scanned,
            tracked = tracked,
            active = identifier,
            page = page,
            "Sidebar highlight completed"
        ),
        None if tracked > 0 => tracing::debug!(
            operation = LogOperation::Apply.as_str(),
            scanned = scanned,
            tracked = tracked,
            page = page,
            "No sidebar entry matches the current page"
        ),
        None => tracing::debug!(
            operation = LogOperation::Apply.as_str(),
            page = page,
            "No sidebar entries found"
        ),
    }
}

/// Log a configuration that could not be used
pub fn log_config_rejected(source: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        source = source,
        error = error,
        "Ignoring sidebar configuration, using defaults"
    );
}
