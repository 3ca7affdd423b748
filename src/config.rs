use serde::Deserialize;

use crate::shared::constants::{ACTIVE_CLASS, INACTIVE_CLASS, MARKER_CLASS};
use crate::shared::errors::{HighlightError, Result};
use crate::shared::logging::log_config_rejected;

/// Class names used by the highlighter.
///
/// Every field is optional in serialized form; missing fields fall back to
/// the defaults (`clickable`, `active`, `link-dark`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightConfig {
    pub marker_class: String,
    pub active_class: String,
    pub inactive_class: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            marker_class: MARKER_CLASS.to_string(),
            active_class: ACTIVE_CLASS.to_string(),
            inactive_class: INACTIVE_CLASS.to_string(),
        }
    }
}

impl HighlightConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: HighlightConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Config carried by a page attribute; absent or unusable values give the defaults
    pub fn from_attribute(source: &str, value: Option<&str>) -> Self {
        let Some(json) = value else {
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                log_config_rejected(source, &e.to_string());
                Self::default()
            }
        }
    }

    /// Class names end up in `DomTokenList.add`, which throws on empty tokens
    /// and on tokens containing ASCII whitespace.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("markerClass", &self.marker_class),
            ("activeClass", &self.active_class),
            ("inactiveClass", &self.inactive_class),
        ] {
            if value.is_empty() {
                return Err(HighlightError::Config(format!("{} must not be empty", field)));
            }
            if value.chars().any(|c| c.is_ascii_whitespace()) {
                return Err(HighlightError::Config(format!(
                    "{} must be a single class name, got {:?}",
                    field, value
                )));
            }
        }

        if self.active_class == self.inactive_class {
            return Err(HighlightError::Config(
                "activeClass and inactiveClass must differ".to_string(),
            ));
        }

        Ok(())
    }
}
