//! Escaping helpers shared by the HTML, SVG and OOXML writers.

/// Escape special XML characters.
pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Make a user-supplied value safe to place inside a `style` attribute.
///
/// Declaration and block separators are dropped so a value cannot smuggle
/// extra declarations in.
pub(crate) fn css_value(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '\n' | '\r'))
        .collect();
    escape_xml(cleaned.trim())
}

/// Drop characters XML 1.0 cannot represent.
pub(crate) fn strip_control(input: &str) -> String {
    input
        .chars()
        .filter(|&c| matches!(c, '\t' | '\n' | '\r') || !c.is_control())
        .collect()
}
