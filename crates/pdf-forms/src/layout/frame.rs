//! Layout inside a transformed field rectangle
//!
//! Per-kind layout is expressed as offsets from the field's visual top-left
//! corner. A [`Frame`] turns those offsets into coordinates for either
//! origin convention, so the same layout code serves screen and PDF output.

use super::{Origin, Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// The field rectangle in output space
    pub rect: Rect,
    pub origin: Origin,
}

impl Frame {
    pub fn new(rect: Rect, origin: Origin) -> Self {
        Self { rect, origin }
    }

    /// Y coordinate of the visual top edge
    pub fn top(&self) -> f32 {
        match self.origin {
            Origin::TopLeft => self.rect.y,
            Origin::BottomLeft => self.rect.far_y(),
        }
    }

    /// Y coordinate `offset` below the visual top edge
    pub fn below_top(&self, offset: f32) -> f32 {
        match self.origin {
            Origin::TopLeft => self.top() + offset,
            Origin::BottomLeft => self.top() - offset,
        }
    }

    /// Point `dx` right of the left edge and `dy` below the top edge
    pub fn point(&self, dx: f32, dy: f32) -> Point {
        Point::new(self.rect.x + dx, self.below_top(dy))
    }

    /// Sub-rectangle whose visual top-left corner is `(dx, dy)` from the frame's
    pub fn sub_rect(&self, dx: f32, dy: f32, width: f32, height: f32) -> Rect {
        let y = match self.origin {
            Origin::TopLeft => self.rect.y + dy,
            Origin::BottomLeft => self.rect.far_y() - dy - height,
        };
        Rect::new(self.rect.x + dx, y, width, height)
    }

    /// Square of the given side pinned to the visual top-left corner
    pub fn square_at_top_left(&self, side: f32) -> Rect {
        self.sub_rect(0.0, 0.0, side, side)
    }
}
