/// Class that tags an element as a sidebar entry
pub const MARKER_CLASS: &str = "clickable";

/// Class applied to the entry for the current page
pub const ACTIVE_CLASS: &str = "active";

/// Class applied to every other entry
pub const INACTIVE_CLASS: &str = "link-dark";

/// Attribute on `<body>` that may carry a JSON `HighlightConfig`
pub const CONFIG_ATTRIBUTE: &str = "data-sidebar-highlight";

/// Separator used to take the last segment of a URL
pub const PATH_SEPARATOR: char = '/';

/// `document.readyState` once the `load` event has fired
pub const LOADED_READY_STATE: &str = "complete";
