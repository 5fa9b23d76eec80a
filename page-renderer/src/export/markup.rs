//! Standalone HTML producer.
//!
//! Serializes the rendered view, removes the attributes that only the
//! editor needs, and inlines every stylesheet whose rules can be read.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::view::{CaptureGuard, StyleSheet, ViewHandle};
use crate::xml::escape_xml;

/// Attribute names (or prefixes, ending in `-`) stripped from exported markup.
pub const EPHEMERAL_ATTRIBUTES: &[&str] = &[
    "data-testid",
    "data-rbd-",
    "data-dnd-",
    "data-editor-",
    "draggable",
    "contenteditable",
];

/// A start tag, attributes included.
static START_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[A-Za-z][^<>]*>").expect("BUG: invalid START_TAG_RE regex literal")
});

/// One [`EPHEMERAL_ATTRIBUTES`] entry with its optional value.
static EPHEMERAL_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    let names = EPHEMERAL_ATTRIBUTES
        .iter()
        .map(|name| {
            if name.ends_with('-') {
                format!("{}[A-Za-z0-9_-]+", regex::escape(name))
            } else {
                regex::escape(name)
            }
        })
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r#"\s+(?:{names})\b(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?"#
    ))
    .expect("BUG: invalid EPHEMERAL_ATTR_RE pattern")
});

/// A page ready to be written as `index.html`.
#[derive(Debug, Clone)]
pub struct MarkupDocument {
    /// Complete HTML document.
    pub html: String,
    /// Stylesheets that could not be inlined.
    pub warnings: Vec<String>,
}

/// Capture the view's markup and styles and build a standalone page.
pub async fn capture_markup(view: &ViewHandle, title: &str) -> MarkupDocument {
    let (markup, sheets) = {
        let mut locked = view.lock().await;
        let guard = CaptureGuard::expand(locked.as_mut());
        (guard.view().outer_html(), guard.view().stylesheets())
    };
    build_document(&markup, &sheets, title)
}

/// Strip editor attributes from `markup`, inline `sheets` and wrap the
/// result in a page shell.
#[must_use]
pub fn build_document(markup: &str, sheets: &[StyleSheet], title: &str) -> MarkupDocument {
    let body = strip_ephemeral_attributes(markup);
    let mut warnings = Vec::new();
    let mut css = String::new();

    for sheet in sheets {
        match &sheet.rules {
            Some(rules) => {
                for rule in rules {
                    css.push_str(rule);
                    css.push('\n');
                }
            }
            None => {
                let source = sheet.href.as_deref().unwrap_or("inline stylesheet");
                tracing::warn!(%source, "skipping stylesheet with unreadable rules");
                warnings.push(format!(
                    "Stylesheet {source} could not be read and was not included"
                ));
            }
        }
    }

    let mut html = String::with_capacity(body.len() + css.len() + 512);
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape_xml(title),
        // A closing tag inside a rule would end the style block early.
        css.replace("</style", "<\\/style"),
    );

    MarkupDocument { html, warnings }
}

/// Remove [`EPHEMERAL_ATTRIBUTES`] from every start tag in `markup`.
///
/// Text content is left alone even if it happens to contain attribute-like
/// strings.
#[must_use]
pub fn strip_ephemeral_attributes(markup: &str) -> String {
    START_TAG_RE
        .replace_all(markup, |caps: &regex::Captures<'_>| {
            EPHEMERAL_ATTR_RE.replace_all(&caps[0], "").into_owned()
        })
        .into_owned()
}
