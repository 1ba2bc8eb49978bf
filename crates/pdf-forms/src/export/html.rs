//! HTML preview driver
//!
//! Produces one absolutely positioned HTML fragment per page. The screen
//! adapter (image capture, canvas, DOM) lives outside this crate; the
//! fragments are a pure function of the composed pages.

use crate::compose::ComposedPage;
use crate::constants::BASELINE_RATIO;
use crate::layout::{Origin, Point, Rect};
use crate::render::{DrawPrimitive, Glyph, TextStyle};
use crate::types::*;

use super::ExportDriver;

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";
const VALUE_COLOR: &str = "#000";
const PLACEHOLDER_COLOR: &str = "#999";

/// One previewed page
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPage {
    pub schema_index: usize,
    pub record_index: usize,
    /// Page width in pixels
    pub width: f32,
    /// Page height in pixels
    pub height: f32,
    pub html: String,
}

/// Renders composed pages as HTML fragments
#[derive(Debug, Clone, Default)]
pub struct HtmlPreview {
    /// Page background color, CSS syntax
    pub background: Option<String>,
}

impl ExportDriver for HtmlPreview {
    type Output = Vec<PreviewPage>;

    fn export(&self, pages: &[ComposedPage]) -> Result<Vec<PreviewPage>> {
        pages.iter().map(|page| self.render_page(page)).collect()
    }
}

impl HtmlPreview {
    fn render_page(&self, page: &ComposedPage) -> Result<PreviewPage> {
        if page.origin != Origin::TopLeft {
            return Err(FormError::Config(format!(
                "HTML preview needs top-left coordinates, page {} was composed bottom-left",
                page.schema_index
            )));
        }

        let background = self.background.as_deref().unwrap_or("#fff");
        let mut html = format!(
            "<div class=\"form-page\" data-page=\"{}\" data-record=\"{}\" style=\"position:relative;width:{}px;height:{}px;background:{};overflow:hidden\">",
            page.schema_index,
            page.record_index,
            px(page.size.width),
            px(page.size.height),
            escape_text(background),
        );

        for primitive in &page.primitives {
            write_primitive(&mut html, primitive);
        }

        html.push_str("</div>");

        Ok(PreviewPage {
            schema_index: page.schema_index,
            record_index: page.record_index,
            width: page.size.width,
            height: page.size.height,
            html,
        })
    }
}

/// Wrap preview pages in a standalone HTML document
pub fn to_html_document(pages: &[PreviewPage], title: &str) -> String {
    let mut html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>body{{background:#ddd;margin:0;padding:16px}}.form-page{{margin:0 auto 16px;box-shadow:0 1px 4px rgba(0,0,0,.3)}}</style>\n</head>\n<body>\n",
        escape_text(title)
    );
    for page in pages {
        html.push_str(&page.html);
        html.push('\n');
    }
    html.push_str("</body>\n</html>\n");
    html
}

fn write_primitive(html: &mut String, primitive: &DrawPrimitive) {
    match primitive {
        DrawPrimitive::Rect { rect, stroke_width } => {
            html.push_str(&format!(
                "<div style=\"{}box-sizing:border-box;border:{}px solid #000\"></div>",
                box_style(rect),
                px(*stroke_width)
            ));
        }
        DrawPrimitive::Text {
            text,
            baseline,
            font_size,
            clip,
            style,
        } => {
            open_clip(html, clip, *font_size, *style);
            write_run(html, clip, baseline, *font_size, text);
            html.push_str("</div>");
        }
        DrawPrimitive::Lines {
            lines,
            font_size,
            clip,
            style,
        } => {
            open_clip(html, clip, *font_size, *style);
            for line in lines {
                write_run(html, clip, &line.baseline, *font_size, &line.text);
            }
            html.push_str("</div>");
        }
        DrawPrimitive::Glyph {
            glyph: Glyph::Check,
            rect,
            ..
        } => {
            html.push_str(&format!(
                "<div style=\"{}text-align:center;font-size:{}px;line-height:{}px;color:#000\">&#10003;</div>",
                box_style(rect),
                px(rect.height * 0.8),
                px(rect.height)
            ));
        }
    }
}

fn open_clip(html: &mut String, clip: &Rect, font_size: f32, style: TextStyle) {
    let color = match style {
        TextStyle::Value => VALUE_COLOR,
        TextStyle::Placeholder => PLACEHOLDER_COLOR,
    };
    html.push_str(&format!(
        "<div style=\"{}overflow:hidden;font-family:{};font-size:{}px;line-height:{}px;white-space:pre;color:{}\">",
        box_style(clip),
        FONT_FAMILY,
        px(font_size),
        px(font_size),
        color
    ));
}

/// Text run positioned by its line box, relative to the clip container
fn write_run(html: &mut String, clip: &Rect, baseline: &Point, font_size: f32, text: &str) {
    let left = baseline.x - clip.x;
    let top = baseline.y - font_size * BASELINE_RATIO - clip.y;
    html.push_str(&format!(
        "<span style=\"position:absolute;left:{}px;top:{}px\">{}</span>",
        px(left),
        px(top),
        escape_text(text)
    ));
}

fn box_style(rect: &Rect) -> String {
    format!(
        "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;",
        px(rect.x),
        px(rect.y),
        px(rect.width),
        px(rect.height)
    )
}

/// Format a length with at most two decimals and no trailing zeros
fn px(value: f32) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
