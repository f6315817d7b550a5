use async_trait::async_trait;

mod card;
mod error;
mod extractor;
mod fetcher;
mod host;
mod logging;
mod render;
mod strings;
mod theme;

pub use card::LinkPreviewCard;
pub use error::PreviewError;
pub use extractor::MetadataExtractor;
pub use fetcher::{FetcherConfig, MetadataFetcher, MetadataFields, METADATA_ENDPOINT};
pub use host::{NoopHost, RenderHost};
pub use logging::{log_error_card, log_preview_card};
#[cfg(feature = "logging")]
pub use logging::{setup_logging, LogConfig, LogLevelGuard};
pub use render::render_card;
pub use strings::{
    DisplayStrings, KEY_DESCRIPTION_FALLBACK, KEY_DESCRIPTION_LABEL, KEY_NO_PREVIEW,
    KEY_TITLE_FALLBACK, KEY_VISIT_SITE,
};
pub use theme::{default_theme, INSTITUTIONAL_PRIMARY, SECONDARY_DEFAULT};

/// Normalized display fields for one preview card.
///
/// Empty strings stand for "nothing to render": an empty `image` suppresses
/// the image region, an empty `theme_color` occurs only before the first
/// fetch settles.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PreviewRecord {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub theme_color: String,
    pub loading_state: bool,
}

/// Source of raw metadata for a target URL.
///
/// [`MetadataFetcher`] is the production implementation; tests and embedded
/// hosts substitute their own.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch_metadata(&self, url: &str) -> Result<MetadataFields, PreviewError>;
}

pub fn is_penn_state_url(url: &str) -> bool {
    url.contains("psu.edu")
}
