use crate::{DisplayStrings, PreviewRecord};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CARD_WIDTH: usize = 60;
const CONTENT_WIDTH: usize = CARD_WIDTH - 4;

/// Renders a record as a boxed text card.
///
/// While `loading_state` is set the card shows only the spinner region;
/// otherwise it shows the content regions: image line (when an image is
/// present), title, description (when `expanded` and non-empty), the
/// outbound link line, and the accent token.
pub fn render_card(record: &PreviewRecord, strings: &DisplayStrings, expanded: bool) -> String {
    let horizontal = "═".repeat(CARD_WIDTH - 2);
    let mut lines = vec![format!("╔{horizontal}╗")];

    if record.loading_state {
        lines.push(spinner_line());
    } else {
        if !record.image.is_empty() {
            lines.push(content_line(&format!("[img] {}", record.image)));
        }
        lines.push(content_line(&record.title));
        if expanded && !record.description.is_empty() {
            lines.push(content_line(&format!(
                "{}: {}",
                strings.description_label, record.description
            )));
        }
        if !record.link.is_empty() {
            lines.push(content_line(&format!(
                "{} -> {}",
                strings.visit_site, record.link
            )));
        }
        if !record.theme_color.is_empty() {
            lines.push(content_line(&format!("accent: {}", record.theme_color)));
        }
    }

    lines.push(format!("╚{horizontal}╝"));
    lines.join("\n")
}

fn spinner_line() -> String {
    let glyphs = "◌ ◌ ◌";
    let width = glyphs.width();
    let left = (CONTENT_WIDTH - width) / 2;
    let right = CONTENT_WIDTH - width - left;
    format!("║ {}{}{} ║", " ".repeat(left), glyphs, " ".repeat(right))
}

fn content_line(text: &str) -> String {
    let clipped = truncate_display(text, CONTENT_WIDTH);
    let pad = CONTENT_WIDTH.saturating_sub(clipped.width());
    format!("║ {}{} ║", clipped, " ".repeat(pad))
}

/// Truncates to a display width without splitting multi-column characters,
/// appending "..." when anything was cut.
fn truncate_display(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(1);
        if current_width + char_width + 3 > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push_str("...");
    result
}
