use crate::is_penn_state_url;

/// Institutional primary theme token, applied to Penn State URLs.
pub const INSTITUTIONAL_PRIMARY: &str = "--ddd-primary-2";

/// Secondary theme token for every other host.
pub const SECONDARY_DEFAULT: &str = "--ddd-primary-20";

/// Theme token used when the metadata carries no `theme-color`.
pub fn default_theme(url: &str) -> &'static str {
    if is_penn_state_url(url) {
        INSTITUTIONAL_PRIMARY
    } else {
        SECONDARY_DEFAULT
    }
}
