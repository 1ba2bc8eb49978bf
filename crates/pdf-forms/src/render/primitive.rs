use crate::layout::{Point, Rect};

/// How a text run should be painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Real data
    Value,
    /// Design-time hint shown in place of a missing value
    Placeholder,
}

/// Glyphs drawn as vector shapes rather than font text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Check,
}

/// One line of a multi-line text block
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Left end of the baseline in output space
    pub baseline: Point,
}

/// An abstract drawing instruction, independent of the output format.
///
/// All coordinates are in the output space the field was rendered for.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    /// Stroked rectangle outline
    Rect { rect: Rect, stroke_width: f32 },
    /// Single line of text, clipped to `clip`
    Text {
        text: String,
        baseline: Point,
        font_size: f32,
        clip: Rect,
        style: TextStyle,
    },
    /// Stacked lines of text, clipped to `clip`
    Lines {
        lines: Vec<TextLine>,
        font_size: f32,
        clip: Rect,
        style: TextStyle,
    },
    /// Vector glyph centered in `rect`
    Glyph {
        glyph: Glyph,
        rect: Rect,
        stroke_width: f32,
    },
}

impl DrawPrimitive {
    pub fn name(&self) -> &'static str {
        match self {
            DrawPrimitive::Rect { .. } => "drawRect",
            DrawPrimitive::Text { .. } => "drawText",
            DrawPrimitive::Lines { .. } => "drawLines",
            DrawPrimitive::Glyph { .. } => "drawGlyph",
        }
    }
}
