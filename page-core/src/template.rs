//! Default content for newly added sections.
//!
//! Every call builds new elements with new IDs, so two sections created from
//! the same template never share element identity.

use crate::element::{ButtonElement, Element, ElementId, ImageElement, TextAlign, TextElement};
use crate::section::SectionKind;

/// Default elements for a section kind, in render order.
#[must_use]
pub fn template_for(kind: SectionKind) -> Vec<Element> {
    match kind {
        SectionKind::Hero => vec![
            text(
                "Build your landing page in minutes",
                "48px",
                "#ffffff",
                "bold",
                TextAlign::Center,
            ),
            text(
                "Drag sections into place, edit the copy, and export when you are ready.",
                "20px",
                "#dbeafe",
                "normal",
                TextAlign::Center,
            ),
            button("Get Started", "#", "#f59e0b", "#111827", "8px"),
        ],
        SectionKind::Feature => vec![
            text("Features", "36px", "#111827", "bold", TextAlign::Center),
            text(
                "Fast setup\nResponsive layout\nOne-click export",
                "18px",
                "#4b5563",
                "normal",
                TextAlign::Center,
            ),
            image(
                "https://placehold.co/960x400?text=Feature",
                "Feature overview",
                "100%",
                "auto",
            ),
        ],
        SectionKind::Pricing => vec![
            text("Simple pricing", "36px", "#111827", "bold", TextAlign::Center),
            text(
                "Starter - $9/month\nPro - $29/month\nEnterprise - contact us",
                "18px",
                "#374151",
                "normal",
                TextAlign::Center,
            ),
            button("Choose a plan", "#pricing", "#2563eb", "#ffffff", "8px"),
        ],
        SectionKind::Testimonial => vec![
            text("What our customers say", "32px", "#111827", "bold", TextAlign::Center),
            text(
                "\"We launched our product page in an afternoon.\"",
                "20px",
                "#374151",
                "normal",
                TextAlign::Center,
            ),
            text("- Jordan Lee, Founder", "16px", "#6b7280", "600", TextAlign::Center),
        ],
        SectionKind::Contact => vec![
            text("Get in touch", "32px", "#111827", "bold", TextAlign::Center),
            text(
                "Questions about the product? We reply within one business day.",
                "18px",
                "#4b5563",
                "normal",
                TextAlign::Center,
            ),
            button("Contact us", "mailto:hello@example.com", "#16a34a", "#ffffff", "24px"),
        ],
        SectionKind::Footer => vec![text(
            "© 2024 Your Company. All rights reserved.",
            "14px",
            "#9ca3af",
            "normal",
            TextAlign::Center,
        )],
        SectionKind::Custom => Vec::new(),
    }
}

fn text(content: &str, font_size: &str, color: &str, weight: &str, align: TextAlign) -> Element {
    Element::Text(TextElement {
        id: ElementId::new(),
        content: content.to_string(),
        font_size: font_size.to_string(),
        color: color.to_string(),
        font_weight: weight.to_string(),
        text_align: align,
    })
}

fn image(src: &str, alt: &str, width: &str, height: &str) -> Element {
    Element::Image(ImageElement {
        id: ElementId::new(),
        src: src.to_string(),
        alt: alt.to_string(),
        width: width.to_string(),
        height: height.to_string(),
    })
}

fn button(label: &str, url: &str, background: &str, color: &str, radius: &str) -> Element {
    Element::Button(ButtonElement {
        id: ElementId::new(),
        label: label.to_string(),
        url: url.to_string(),
        background_color: background.to_string(),
        text_color: color.to_string(),
        border_radius: radius.to_string(),
    })
}
