use serde::Deserialize;
use std::collections::HashMap;

pub const KEY_TITLE_FALLBACK: &str = "title-fallback";
pub const KEY_DESCRIPTION_FALLBACK: &str = "description-fallback";
pub const KEY_NO_PREVIEW: &str = "no-preview";
pub const KEY_VISIT_SITE: &str = "visit-site";
pub const KEY_DESCRIPTION_LABEL: &str = "description-label";

/// Display strings rendered by the card.
///
/// Hosts substitute translations through the `KEY_*` lookup keys; locating
/// and loading locale files stays with the host.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayStrings {
    pub title_fallback: String,
    pub description_fallback: String,
    pub no_preview: String,
    pub visit_site: String,
    pub description_label: String,
}

impl Default for DisplayStrings {
    fn default() -> Self {
        Self {
            title_fallback: "No Title Available".into(),
            description_fallback: "No Description Available".into(),
            no_preview: "No Preview Available".into(),
            visit_site: "Visit Site".into(),
            description_label: "Description".into(),
        }
    }
}

impl DisplayStrings {
    /// Applies a translation map keyed by the `KEY_*` lookup keys. Unknown
    /// keys are ignored.
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Self {
        for (key, value) in overrides {
            match key.as_str() {
                KEY_TITLE_FALLBACK => self.title_fallback = value.clone(),
                KEY_DESCRIPTION_FALLBACK => self.description_fallback = value.clone(),
                KEY_NO_PREVIEW => self.no_preview = value.clone(),
                KEY_VISIT_SITE => self.visit_site = value.clone(),
                KEY_DESCRIPTION_LABEL => self.description_label = value.clone(),
                _ => {}
            }
        }
        self
    }
}
