use crate::theme::default_theme;
use crate::{DisplayStrings, MetadataFields, PreviewRecord};
use tracing::debug;

/// Normalizes a fetched metadata field set into the card's display record.
#[derive(Clone, Default)]
pub struct MetadataExtractor {
    strings: DisplayStrings,
}

impl MetadataExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strings(strings: DisplayStrings) -> Self {
        Self { strings }
    }

    /// First-match-wins over non-empty candidates, falling back to the
    /// configured display strings when every candidate is absent or empty:
    ///
    /// - title: `og:title`, `title`, title fallback
    /// - description: `description`, description fallback
    /// - image: `image`, `logo`, `og:image`, empty
    /// - link: `url`, the input URL
    /// - theme color: `theme-color`, the default theme for the input URL
    pub fn extract(&self, fields: &MetadataFields, href: &str) -> PreviewRecord {
        let title = first_non_empty([fields.og_title.as_deref(), fields.title.as_deref()])
            .unwrap_or(self.strings.title_fallback.as_str());
        let description = first_non_empty([fields.description.as_deref()])
            .unwrap_or(self.strings.description_fallback.as_str());
        let image = first_non_empty([
            fields.image.as_deref(),
            fields.logo.as_deref(),
            fields.og_image.as_deref(),
        ])
        .unwrap_or("");
        let link = first_non_empty([fields.url.as_deref()]).unwrap_or(href);
        let theme_color =
            first_non_empty([fields.theme_color.as_deref()]).unwrap_or_else(|| default_theme(href));

        debug!(title = %title, link = %link, "Normalized metadata into preview record");

        PreviewRecord {
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            link: link.to_string(),
            theme_color: theme_color.to_string(),
            loading_state: false,
        }
    }

    /// Degraded record shown when the fetch fails in any way. Every display
    /// field is blank except the title and the computed default theme.
    pub fn fallback(&self, href: &str) -> PreviewRecord {
        PreviewRecord {
            title: self.strings.no_preview.clone(),
            description: String::new(),
            image: String::new(),
            link: String::new(),
            theme_color: default_theme(href).to_string(),
            loading_state: false,
        }
    }
}

fn first_non_empty<const N: usize>(candidates: [Option<&str>; N]) -> Option<&str> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> MetadataExtractor {
        MetadataExtractor::new()
    }

    #[test]
    fn test_og_title_wins_over_title() {
        let fields = MetadataFields {
            og_title: Some("Open Graph Title".into()),
            title: Some("Document Title".into()),
            ..Default::default()
        };
        let record = extractor().extract(&fields, "https://example.com");
        assert_eq!(record.title, "Open Graph Title");
    }

    #[test]
    fn test_title_used_when_og_title_missing() {
        let fields = MetadataFields {
            title: Some("Document Title".into()),
            ..Default::default()
        };
        let record = extractor().extract(&fields, "https://example.com");
        assert_eq!(record.title, "Document Title");
    }

    #[test]
    fn test_empty_og_title_is_skipped() {
        let fields = MetadataFields {
            og_title: Some(String::new()),
            title: Some("Document Title".into()),
            ..Default::default()
        };
        let record = extractor().extract(&fields, "https://example.com");
        assert_eq!(record.title, "Document Title");
    }

    #[test]
    fn test_title_fallback_literal() {
        let record = extractor().extract(&MetadataFields::default(), "https://example.com");
        assert_eq!(record.title, "No Title Available");
    }

    #[test]
    fn test_description_fallback_literal() {
        let record = extractor().extract(&MetadataFields::default(), "https://example.com");
        assert_eq!(record.description, "No Description Available");
    }

    #[test]
    fn test_image_precedence_chain() {
        let fields = MetadataFields {
            image: Some("https://example.com/a.png".into()),
            logo: Some("https://example.com/b.png".into()),
            og_image: Some("https://example.com/c.png".into()),
            ..Default::default()
        };
        let record = extractor().extract(&fields, "https://example.com");
        assert_eq!(record.image, "https://example.com/a.png");

        let fields = MetadataFields {
            logo: Some("https://example.com/b.png".into()),
            og_image: Some("https://example.com/c.png".into()),
            ..Default::default()
        };
        let record = extractor().extract(&fields, "https://example.com");
        assert_eq!(record.image, "https://example.com/b.png");

        let fields = MetadataFields {
            og_image: Some("https://example.com/c.png".into()),
            ..Default::default()
        };
        let record = extractor().extract(&fields, "https://example.com");
        assert_eq!(record.image, "https://example.com/c.png");

        let record = extractor().extract(&MetadataFields::default(), "https://example.com");
        assert_eq!(record.image, "");
    }

    #[test]
    fn test_link_falls_back_to_input_url() {
        let fields = MetadataFields {
            url: Some("https://example.com/canonical".into()),
            ..Default::default()
        };
        let record = extractor().extract(&fields, "https://example.com/page");
        assert_eq!(record.link, "https://example.com/canonical");

        let record = extractor().extract(&MetadataFields::default(), "https://example.com/page");
        assert_eq!(record.link, "https://example.com/page");
    }

    #[test]
    fn test_theme_color_from_metadata() {
        let fields = MetadataFields {
            theme_color: Some("#1e407c".into()),
            ..Default::default()
        };
        let record = extractor().extract(&fields, "https://example.com");
        assert_eq!(record.theme_color, "#1e407c");
    }

    #[test]
    fn test_theme_color_defaults_by_host() {
        let record = extractor().extract(&MetadataFields::default(), "https://psu.edu/page");
        assert_eq!(record.theme_color, crate::INSTITUTIONAL_PRIMARY);

        let record = extractor().extract(&MetadataFields::default(), "https://example.com");
        assert_eq!(record.theme_color, crate::SECONDARY_DEFAULT);
    }

    #[test]
    fn test_fallback_record_shape() {
        let record = extractor().fallback("https://example.com");
        assert_eq!(record.title, "No Preview Available");
        assert_eq!(record.description, "");
        assert_eq!(record.image, "");
        assert_eq!(record.link, "");
        assert_eq!(record.theme_color, crate::SECONDARY_DEFAULT);
        assert!(!record.loading_state);

        let record = extractor().fallback("https://psu.edu/page");
        assert_eq!(record.theme_color, crate::INSTITUTIONAL_PRIMARY);
    }

    #[test]
    fn test_fallback_honors_custom_strings() {
        let strings = DisplayStrings {
            no_preview: "Vista previa no disponible".into(),
            ..Default::default()
        };
        let record = MetadataExtractor::with_strings(strings).fallback("https://example.com");
        assert_eq!(record.title, "Vista previa no disponible");
    }
}
