//! Per-kind field layout
//!
//! One vertical-centering rule is used for every single-line kind: a line
//! box `font_size` tall is centered in the field and the baseline sits
//! `font_size * BASELINE_RATIO` below the line box top.

use crate::constants::{
    BASELINE_RATIO, CHECK_STROKE_RATIO, CHECKBOX_BORDER_WIDTH, DEFAULT_FONT_SIZE,
    LINE_HEIGHT_RATIO,
};
use crate::layout::{Frame, OutputSpace};
use crate::record::FieldValue;
use crate::template::{FieldDescriptor, FieldKind};
use crate::types::Result;

use super::{DrawPrimitive, Glyph, TextLine, TextStyle};

/// Which of the two render paths is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Final output: fields without a value draw nothing
    Export,
    /// Designer preview: fields without a value show their placeholder
    Design,
}

/// Tunables for field layout, in design units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStyle {
    pub default_font_size: f32,
    pub line_height_ratio: f32,
    pub checkbox_border_width: f32,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            default_font_size: DEFAULT_FONT_SIZE,
            line_height_ratio: LINE_HEIGHT_RATIO,
            checkbox_border_width: CHECKBOX_BORDER_WIDTH,
        }
    }
}

/// Content a field is drawn with after the absent-value policy is applied
enum Content<'a> {
    Value(&'a FieldValue),
    Placeholder(&'a str),
}

/// Render one field into draw primitives.
///
/// Fails with `UnsupportedFieldKind` for an unknown kind tag and with
/// `InvalidGeometry` for degenerate rectangles, before anything is drawn.
///
/// # Arguments
/// * `field` - The field descriptor, in design space
/// * `value` - The field's value, `None` when the record has no entry
/// * `space` - Output space of the page being rendered
/// * `mode` - Export or design preview
/// * `style` - Layout tunables
pub fn render_field(
    field: &FieldDescriptor,
    value: Option<&FieldValue>,
    space: &OutputSpace,
    mode: RenderMode,
    style: &FieldStyle,
) -> Result<Vec<DrawPrimitive>> {
    let kind = field.kind()?;
    let rect = space.map_rect(&field.rect())?;
    let frame = Frame::new(rect, space.origin);
    let font_size = space.map_length(field.font_size.unwrap_or(style.default_font_size));

    let content = match (value, mode) {
        (Some(value), _) => Content::Value(value),
        (None, RenderMode::Design) => Content::Placeholder(field.placeholder_label()),
        (None, RenderMode::Export) => return Ok(Vec::new()),
    };

    let primitives = match kind {
        FieldKind::Text | FieldKind::Number | FieldKind::Email | FieldKind::Date => {
            let (text, text_style) = text_content(&content);
            single_line(&frame, text, font_size, text_style)
        }
        FieldKind::MultilineText => {
            let (text, text_style) = text_content(&content);
            let line_height = font_size * style.line_height_ratio;
            multi_line(&frame, &text, font_size, line_height, text_style)
        }
        FieldKind::Boolean => {
            let checked = match content {
                Content::Value(value) => value.is_truthy(),
                Content::Placeholder(_) => false,
            };
            checkbox(&frame, checked, space.map_length(style.checkbox_border_width))
        }
    };

    Ok(primitives)
}

fn text_content(content: &Content<'_>) -> (String, TextStyle) {
    match content {
        Content::Value(value) => (value.display(), TextStyle::Value),
        Content::Placeholder(label) => (label.to_string(), TextStyle::Placeholder),
    }
}

fn single_line(frame: &Frame, text: String, font_size: f32, style: TextStyle) -> Vec<DrawPrimitive> {
    if text.is_empty() {
        return Vec::new();
    }

    let line_top = (frame.rect.height - font_size) / 2.0;
    vec![DrawPrimitive::Text {
        text,
        baseline: frame.point(0.0, line_top + font_size * BASELINE_RATIO),
        font_size,
        clip: frame.rect,
        style,
    }]
}

fn multi_line(
    frame: &Frame,
    text: &str,
    font_size: f32,
    line_height: f32,
    style: TextStyle,
) -> Vec<DrawPrimitive> {
    let half_leading = (line_height - font_size) / 2.0;

    let lines: Vec<TextLine> = split_lines(text)
        .into_iter()
        .enumerate()
        .map(|(i, line)| (i as f32 * line_height, line))
        .take_while(|(top, _)| *top < frame.rect.height)
        .filter(|(_, line)| !line.is_empty())
        .map(|(top, line)| TextLine {
            text: line.to_string(),
            baseline: frame.point(0.0, top + half_leading + font_size * BASELINE_RATIO),
        })
        .collect();

    if lines.is_empty() {
        return Vec::new();
    }

    vec![DrawPrimitive::Lines {
        lines,
        font_size,
        clip: frame.rect,
        style,
    }]
}

fn checkbox(frame: &Frame, checked: bool, border_width: f32) -> Vec<DrawPrimitive> {
    let side = frame.rect.width.min(frame.rect.height);
    let square = frame.square_at_top_left(side);

    let mut primitives = vec![DrawPrimitive::Rect {
        rect: square,
        stroke_width: border_width,
    }];
    if checked {
        primitives.push(DrawPrimitive::Glyph {
            glyph: Glyph::Check,
            rect: square,
            stroke_width: side * CHECK_STROKE_RATIO,
        });
    }
    primitives
}

/// Split text on `\r\n`, `\n` or `\r`
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(['\r', '\n']) {
        lines.push(&rest[..pos]);
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
    }
    lines.push(rest);
    lines
}

// =============================================================================
// Tests
// =============================================================================
