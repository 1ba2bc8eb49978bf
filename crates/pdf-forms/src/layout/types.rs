//! Geometry types shared by the transform, the renderer and the drivers

/// Where the y axis starts in an output space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    /// Screen canvases and HTML: y grows downward
    #[default]
    TopLeft,
    /// PDF content streams: y grows upward
    BottomLeft,
}

/// A point in some output space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
///
/// `(x, y)` is the corner nearest the origin of whatever space the rectangle
/// lives in: the top-left corner in design and screen space, the bottom-left
/// corner in PDF space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position of the edge nearest the origin
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Y coordinate of the edge farthest from the origin
    pub fn far_y(&self) -> f32 {
        self.y + self.height
    }

    /// Uniformly scale position and size
    pub fn scale(&self, s: f32) -> Rect {
        Rect::new(self.x * s, self.y * s, self.width * s, self.height * s)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}
