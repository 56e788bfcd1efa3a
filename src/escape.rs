//! Markup escaping helpers.
//!
//! The renderer embeds term-supplied strings into attribute values and
//! element text. Both helpers are pure string-to-string functions; the
//! host may additionally rewrite display names through a label filter
//! before they reach `esc_html` (see `ChecklistRenderer::with_label_filter`).

/// Escape a string for embedding in a double- or single-quoted attribute.
pub fn esc_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Escape a string for embedding as element text content.
pub fn esc_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
