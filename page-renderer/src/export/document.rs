//! Slide deck producer.
//!
//! Writes the PPTX package parts directly: one slide per section, the
//! section's background color as the slide background, a title box, and
//! the section's elements stacked under it. Style strings that do not
//! parse fall back to defaults and are reported as warnings; they never
//! fail the export.

use std::fmt::Write;

use base64::Engine;
use page_core::{
    ButtonElement, CssLength, Element, ImageElement, RgbColor, Section, TextAlign, TextElement,
};

use super::archive::ArchiveBuilder;
use super::ExportConfig;
use crate::error::ExportResult;
use crate::layout::is_bold;
use crate::xml::{escape_xml, strip_control};

/// English Metric Units per inch.
pub const EMU_PER_INCH: f64 = 914_400.0;

const MARGIN_IN: f64 = 0.5;
const TITLE_TOP_IN: f64 = 0.35;
const TITLE_HEIGHT_IN: f64 = 0.8;
const CONTENT_TOP_IN: f64 = 1.3;
const GAP_IN: f64 = 0.15;
const BUTTON_HEIGHT_IN: f64 = 0.5;

const DEFAULT_FONT_PX: f64 = 16.0;
const DEFAULT_TEXT: RgbColor = RgbColor::new(0x1F, 0x29, 0x37);
const DEFAULT_BUTTON_FILL: RgbColor = RgbColor::new(0x25, 0x63, 0xEB);

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// A generated slide deck.
#[derive(Debug, Clone)]
pub struct Deck {
    /// PPTX package bytes.
    pub bytes: Vec<u8>,
    /// Values that were replaced by defaults.
    pub warnings: Vec<String>,
}

/// Build a deck for `sections`.
///
/// # Errors
///
/// Returns an error only if the package archive cannot be written.
pub fn build_deck(sections: &[Section], config: &ExportConfig, title: &str) -> ExportResult<Deck> {
    let mut writer = DeckWriter::new(config);
    let slides: Vec<SlidePart> = sections
        .iter()
        .enumerate()
        .map(|(index, section)| writer.slide(index, section))
        .collect();

    let mut archive = ArchiveBuilder::new();
    archive.add("[Content_Types].xml", content_types(slides.len()).as_bytes())?;
    archive.add("_rels/.rels", root_rels().as_bytes())?;
    archive.add("docProps/core.xml", core_props(title).as_bytes())?;
    archive.add(
        "docProps/app.xml",
        app_props(&config.application, slides.len()).as_bytes(),
    )?;
    archive.add(
        "ppt/presentation.xml",
        presentation(slides.len(), config).as_bytes(),
    )?;
    archive.add(
        "ppt/_rels/presentation.xml.rels",
        presentation_rels(slides.len()).as_bytes(),
    )?;
    archive.add("ppt/slideMasters/slideMaster1.xml", SLIDE_MASTER.as_bytes())?;
    archive.add(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        MASTER_RELS.as_bytes(),
    )?;
    archive.add("ppt/slideLayouts/slideLayout1.xml", SLIDE_LAYOUT.as_bytes())?;
    archive.add(
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        LAYOUT_RELS.as_bytes(),
    )?;
    archive.add("ppt/theme/theme1.xml", THEME.as_bytes())?;

    for (index, slide) in slides.iter().enumerate() {
        let n = index + 1;
        archive.add(&format!("ppt/slides/slide{n}.xml"), slide.xml.as_bytes())?;
        archive.add(
            &format!("ppt/slides/_rels/slide{n}.xml.rels"),
            slide.rels.as_bytes(),
        )?;
    }
    for (name, bytes) in &writer.media {
        archive.add(&format!("ppt/media/{name}"), bytes)?;
    }

    Ok(Deck {
        bytes: archive.finish()?,
        warnings: writer.warnings,
    })
}

// ---------------------------------------------------------------------------
// Slides
// ---------------------------------------------------------------------------

struct SlidePart {
    xml: String,
    rels: String,
}

/// Accumulates relationships for one slide.
struct SlideRels {
    entries: Vec<String>,
}

impl SlideRels {
    fn new() -> Self {
        Self {
            entries: vec![format!(
                r#"<Relationship Id="rId1" Type="{REL}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>"#
            )],
        }
    }

    fn push(&mut self, kind: &str, target: &str, external: bool) -> String {
        let id = format!("rId{}", self.entries.len() + 1);
        let mode = if external {
            r#" TargetMode="External""#
        } else {
            ""
        };
        self.entries.push(format!(
            r#"<Relationship Id="{id}" Type="{REL}/{kind}" Target="{}"{mode}/>"#,
            escape_xml(target)
        ));
        id
    }

    fn into_xml(self) -> String {
        format!(
            r#"{XML_DECL}<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{}</Relationships>"#,
            self.entries.concat()
        )
    }
}

struct DeckWriter {
    slide_w: f64,
    slide_h: f64,
    media: Vec<(String, Vec<u8>)>,
    warnings: Vec<String>,
}

impl DeckWriter {
    fn new(config: &ExportConfig) -> Self {
        Self {
            slide_w: f64::from(config.slide_width_in),
            slide_h: f64::from(config.slide_height_in),
            media: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn content_width(&self) -> f64 {
        (self.slide_w - MARGIN_IN * 2.0).max(1.0)
    }

    fn degrade(&mut self, slide: usize, what: &str) {
        tracing::warn!(slide = slide + 1, "{what}");
        self.warnings.push(format!("Slide {}: {what}", slide + 1));
    }

    fn color(&mut self, slide: usize, field: &str, value: &str, fallback: RgbColor) -> RgbColor {
        RgbColor::parse(value).unwrap_or_else(|_| {
            self.degrade(
                slide,
                &format!("{field} {value:?} is not a color; using {fallback}"),
            );
            fallback
        })
    }

    fn slide(&mut self, index: usize, section: &Section) -> SlidePart {
        let mut rels = SlideRels::new();
        let mut shapes = String::new();
        let mut next_id = 2_u32;

        let background = self.color(
            index,
            "background",
            &section.background_color,
            RgbColor::WHITE,
        );
        let title_color = contrast(background);

        let title = Run {
            text: &section.title,
            size_pt: 28.0,
            bold: true,
            color: title_color,
        };
        text_shape(
            &mut shapes,
            next_id,
            "Title",
            Frame::inches(MARGIN_IN, TITLE_TOP_IN, self.content_width(), TITLE_HEIGHT_IN),
            "l",
            &title,
        );
        next_id += 1;

        let mut cursor = CONTENT_TOP_IN;
        for element in &section.elements {
            let used = match element {
                Element::Text(text) => Some(self.text(index, text, cursor, next_id, &mut shapes)),
                Element::Image(image) => {
                    self.image(index, image, cursor, next_id, &mut shapes, &mut rels)
                }
                Element::Button(button) => Some(self.button(
                    index,
                    button,
                    cursor,
                    next_id,
                    &mut shapes,
                    &mut rels,
                )),
            };
            if let Some(height) = used {
                cursor += height + GAP_IN;
                next_id += 1;
            }
        }
        if cursor > self.slide_h {
            tracing::debug!(slide = index + 1, cursor, "content runs past slide bottom");
        }

        let mut xml = String::with_capacity(2048 + shapes.len());
        let _ = write!(
            xml,
            r#"{XML_DECL}<p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg><p:spTree>{GROUP_HEADER}{shapes}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#,
            background.to_hex(),
        );

        SlidePart {
            xml,
            rels: rels.into_xml(),
        }
    }

    fn text(
        &mut self,
        slide: usize,
        text: &TextElement,
        top: f64,
        id: u32,
        out: &mut String,
    ) -> f64 {
        let px = match page_core::parse_px(&text.font_size) {
            Ok(px) if px > 0.0 => f64::from(px),
            _ => {
                self.degrade(
                    slide,
                    &format!(
                        "font size {:?} is not a length; using {DEFAULT_FONT_PX}px",
                        text.font_size
                    ),
                );
                DEFAULT_FONT_PX
            }
        };
        let size_pt = px * 0.75;
        let color = self.color(slide, "text color", &text.color, DEFAULT_TEXT);

        let width = self.content_width();
        let chars_per_line = (width * 72.0 / (size_pt * 0.5)).max(1.0);
        #[allow(clippy::cast_precision_loss)]
        let lines: f64 = text
            .content
            .split('\n')
            .map(|p| (p.chars().count() as f64 / chars_per_line).ceil().max(1.0))
            .sum();
        let height = lines * size_pt * 1.2 / 72.0 + 0.1;

        let align = match text.text_align {
            TextAlign::Left => "l",
            TextAlign::Center => "ctr",
            TextAlign::Right => "r",
            TextAlign::Justify => "just",
        };
        text_shape(
            out,
            id,
            &format!("Text {id}"),
            Frame::inches(MARGIN_IN, top, width, height),
            align,
            &Run {
                text: &text.content,
                size_pt,
                bold: is_bold(&text.font_weight),
                color,
            },
        );
        height
    }

    fn image(
        &mut self,
        slide: usize,
        image: &ImageElement,
        top: f64,
        id: u32,
        out: &mut String,
        rels: &mut SlideRels,
    ) -> Option<f64> {
        let src = image.src.trim();
        let blip = if src.starts_with("data:") {
            match decode_data_uri(src) {
                Some((ext, bytes)) => {
                    let name = format!("image{}.{ext}", self.media.len() + 1);
                    self.media.push((name.clone(), bytes));
                    let rid = rels.push("image", &format!("../media/{name}"), false);
                    format!(r#"<a:blip r:embed="{rid}"/>"#)
                }
                None => {
                    self.degrade(slide, "image data URI could not be decoded; skipped");
                    return None;
                }
            }
        } else if src.starts_with("http://") || src.starts_with("https://") {
            let rid = rels.push("image", src, true);
            format!(r#"<a:blip r:link="{rid}"/>"#)
        } else {
            self.degrade(slide, &format!("image source {src:?} is not reachable; skipped"));
            return None;
        };

        let content = self.content_width();
        let width = match CssLength::parse(&image.width) {
            Ok(CssLength::Px(px)) => f64::from(px) / 96.0,
            Ok(CssLength::Percent(pct)) => content * f64::from(pct) / 100.0,
            Ok(CssLength::Auto) => content,
            Err(_) => {
                self.degrade(
                    slide,
                    &format!("image width {:?} is not a length; using 100%", image.width),
                );
                content
            }
        }
        .clamp(0.1, content);
        let height = match CssLength::parse(&image.height) {
            Ok(CssLength::Px(px)) => f64::from(px) / 96.0,
            Ok(CssLength::Percent(pct)) => width * f64::from(pct) / 100.0,
            Ok(CssLength::Auto) => width * 9.0 / 16.0,
            Err(_) => {
                self.degrade(
                    slide,
                    &format!("image height {:?} is not a length; using auto", image.height),
                );
                width * 9.0 / 16.0
            }
        }
        .max(0.1);

        let frame = Frame::inches(MARGIN_IN + (content - width) / 2.0, top, width, height);
        let _ = write!(
            out,
            r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="Picture {id}" descr="{}"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr><p:blipFill>{blip}<a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#,
            escape_xml(&strip_control(&image.alt)),
            frame.xfrm(),
        );
        Some(height)
    }

    fn button(
        &mut self,
        slide: usize,
        button: &ButtonElement,
        top: f64,
        id: u32,
        out: &mut String,
        rels: &mut SlideRels,
    ) -> f64 {
        let fill = self.color(
            slide,
            "button color",
            &button.background_color,
            DEFAULT_BUTTON_FILL,
        );
        let text_color =
            self.color(slide, "button text color", &button.text_color, RgbColor::WHITE);
        let radius_px = page_core::parse_px(&button.border_radius).unwrap_or_else(|_| {
            self.degrade(
                slide,
                &format!("border radius {:?} is not a length; using 0px", button.border_radius),
            );
            0.0
        });

        #[allow(clippy::cast_precision_loss)]
        let width = (button.label.chars().count() as f64 * 0.11 + 0.6).min(self.content_width());
        let height = BUTTON_HEIGHT_IN;
        // roundRect adj is radius over the shorter side, in 1/100000, capped at half.
        let short_side = width.min(height) * 96.0;
        #[allow(clippy::cast_possible_truncation)]
        let adj = ((f64::from(radius_px) / short_side) * 100_000.0).clamp(0.0, 50_000.0) as i64;

        let url = button.url.trim();
        let link = if url.is_empty() || url.starts_with('#') {
            String::new()
        } else {
            let rid = rels.push("hyperlink", url, true);
            format!(r#"<a:hlinkClick r:id="{rid}"/>"#)
        };

        let frame = Frame::inches(MARGIN_IN, top, width, height);
        let _ = write!(
            out,
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Button {id}">{link}</p:cNvPr><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>{}<a:prstGeom prst="roundRect"><a:avLst><a:gd name="adj" fmla="val {adj}"/></a:avLst></a:prstGeom><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:ln><a:noFill/></a:ln></p:spPr><p:txBody><a:bodyPr anchor="ctr" wrap="none"/><a:lstStyle/><a:p><a:pPr algn="ctr"/>{}</a:p></p:txBody></p:sp>"#,
            frame.xfrm(),
            fill.to_hex(),
            run_xml(&Run {
                text: &button.label,
                size_pt: 14.0,
                bold: true,
                color: text_color,
            }),
        );
        height
    }
}

// ---------------------------------------------------------------------------
// Shape helpers
// ---------------------------------------------------------------------------

const GROUP_HEADER: &str = r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#;

#[derive(Debug, Clone, Copy)]
struct Frame {
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
}

impl Frame {
    #[allow(clippy::cast_possible_truncation)]
    fn inches(x: f64, y: f64, w: f64, h: f64) -> Self {
        let emu = |v: f64| (v * EMU_PER_INCH).round() as i64;
        Self {
            x: emu(x),
            y: emu(y),
            cx: emu(w).max(1),
            cy: emu(h).max(1),
        }
    }

    fn xfrm(self) -> String {
        format!(
            r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
            self.x, self.y, self.cx, self.cy
        )
    }
}

struct Run<'a> {
    text: &'a str,
    size_pt: f64,
    bold: bool,
    color: RgbColor,
}

fn run_xml(run: &Run<'_>) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let sz = (run.size_pt * 100.0).round() as i64;
    format!(
        r#"<a:r><a:rPr lang="en-US" sz="{sz}" b="{}" dirty="0"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:rPr><a:t>{}</a:t></a:r>"#,
        u8::from(run.bold),
        run.color.to_hex(),
        escape_xml(&strip_control(run.text)),
    )
}

fn text_shape(out: &mut String, id: u32, name: &str, frame: Frame, align: &str, run: &Run<'_>) {
    let _ = write!(
        out,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr><p:txBody><a:bodyPr wrap="square" rtlCol="0"><a:normAutofit/></a:bodyPr><a:lstStyle/>"#,
        escape_xml(name),
        frame.xfrm(),
    );
    for paragraph in run.text.split('\n') {
        let _ = write!(out, r#"<a:p><a:pPr algn="{align}"/>"#);
        if !paragraph.is_empty() {
            out.push_str(&run_xml(&Run {
                text: paragraph,
                ..*run
            }));
        }
        out.push_str("</a:p>");
    }
    out.push_str("</p:txBody></p:sp>");
}

/// Dark text on light backgrounds, white on dark ones.
fn contrast(background: RgbColor) -> RgbColor {
    let luma = 0.299 * f64::from(background.r)
        + 0.587 * f64::from(background.g)
        + 0.114 * f64::from(background.b);
    if luma > 140.0 {
        RgbColor::new(0x11, 0x18, 0x27)
    } else {
        RgbColor::WHITE
    }
}

/// Decode a base64 `data:image/...` URI into a media extension and bytes.
fn decode_data_uri(src: &str) -> Option<(&'static str, Vec<u8>)> {
    let rest = src.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    let mut parts = meta.split(';');
    let mime = parts.next()?.trim().to_ascii_lowercase();
    if !parts.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
        return None;
    }
    let ext = match mime.as_str() {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpeg",
        "image/gif" => "gif",
        _ => return None,
    };
    let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    base64::engine::general_purpose::STANDARD
        .decode(cleaned)
        .ok()
        .map(|bytes| (ext, bytes))
}

// ---------------------------------------------------------------------------
// Package parts
// ---------------------------------------------------------------------------

fn content_types(slides: usize) -> String {
    let mut xml = format!(
        r#"{XML_DECL}<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Default Extension="png" ContentType="image/png"/><Default Extension="jpeg" ContentType="image/jpeg"/><Default Extension="gif" ContentType="image/gif"/><Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/><Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/><Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/><Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/><Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#
    );
    for n in 1..=slides {
        let _ = write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        );
    }
    xml.push_str("</Types>");
    xml
}

fn root_rels() -> String {
    format!(
        r#"{XML_DECL}<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{REL}/officeDocument" Target="ppt/presentation.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/><Relationship Id="rId3" Type="{REL}/extended-properties" Target="docProps/app.xml"/></Relationships>"#
    )
}

fn core_props(title: &str) -> String {
    format!(
        r#"{XML_DECL}<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:title>{}</dc:title></cp:coreProperties>"#,
        escape_xml(&strip_control(title))
    )
}

fn app_props(application: &str, slides: usize) -> String {
    format!(
        r#"{XML_DECL}<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties"><Application>{}</Application><Slides>{slides}</Slides></Properties>"#,
        escape_xml(application)
    )
}

fn presentation(slides: usize, config: &ExportConfig) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let (cx, cy) = (
        (f64::from(config.slide_width_in) * EMU_PER_INCH).round() as i64,
        (f64::from(config.slide_height_in) * EMU_PER_INCH).round() as i64,
    );
    let mut ids = String::new();
    for n in 1..=slides {
        let _ = write!(
            ids,
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            255 + n,
            n + 1
        );
    }
    let list = if ids.is_empty() {
        String::new()
    } else {
        format!("<p:sldIdLst>{ids}</p:sldIdLst>")
    };
    format!(
        r#"{XML_DECL}<p:presentation xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" saveSubsetFonts="1"><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>{list}<p:sldSz cx="{cx}" cy="{cy}"/><p:notesSz cx="6858000" cy="9144000"/></p:presentation>"#
    )
}

fn presentation_rels(slides: usize) -> String {
    let mut xml = format!(
        r#"{XML_DECL}<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{REL}/slideMaster" Target="slideMasters/slideMaster1.xml"/>"#
    );
    for n in 1..=slides {
        let _ = write!(
            xml,
            r#"<Relationship Id="rId{}" Type="{REL}/slide" Target="slides/slide{n}.xml"/>"#,
            n + 1
        );
    }
    let _ = write!(
        xml,
        r#"<Relationship Id="rId{}" Type="{REL}/theme" Target="theme/theme1.xml"/></Relationships>"#,
        slides + 2
    );
    xml
}

const SLIDE_MASTER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld><p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/><p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst></p:sldMaster>"#;

const MASTER_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/></Relationships>"#;

const SLIDE_LAYOUT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank" preserve="1"><p:cSld name="Blank"><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#;

const LAYOUT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/></Relationships>"#;

const THEME: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Landing"><a:themeElements><a:clrScheme name="Landing"><a:dk1><a:srgbClr val="111827"/></a:dk1><a:lt1><a:srgbClr val="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="1F2937"/></a:dk2><a:lt2><a:srgbClr val="F1F5F9"/></a:lt2><a:accent1><a:srgbClr val="2563EB"/></a:accent1><a:accent2><a:srgbClr val="1E3A8A"/></a:accent2><a:accent3><a:srgbClr val="10B981"/></a:accent3><a:accent4><a:srgbClr val="F59E0B"/></a:accent4><a:accent5><a:srgbClr val="EF4444"/></a:accent5><a:accent6><a:srgbClr val="8B5CF6"/></a:accent6><a:hlink><a:srgbClr val="2563EB"/></a:hlink><a:folHlink><a:srgbClr val="7C3AED"/></a:folHlink></a:clrScheme><a:fontScheme name="Landing"><a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme><a:fmtScheme name="Landing"><a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst><a:lnStyleLst><a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst><a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst><a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst></a:fmtScheme></a:themeElements></a:theme>"#;
