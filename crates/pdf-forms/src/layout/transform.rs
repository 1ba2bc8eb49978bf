//! Design space to output space conversion
//!
//! Design space has its origin at the top-left of the page. Screen targets
//! keep that convention and only scale; PDF content streams put the origin
//! at the bottom-left, so the vertical axis is flipped around the page height.
//! A field pinned to the visual top of a page (`y = 0`) lands at
//! `H - height` in PDF space, not at `H`.

use super::{Origin, Rect};
use crate::types::{FormError, Result};

/// Target coordinate system for one output page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputSpace {
    pub origin: Origin,
    /// Page height in output units
    pub page_height: f32,
    /// Output units per design unit
    pub scale: f32,
}

impl OutputSpace {
    pub fn new(origin: Origin, page_height: f32, scale: f32) -> Result<Self> {
        if !page_height.is_finite() || page_height <= 0.0 {
            return Err(FormError::InvalidGeometry(format!(
                "page height must be positive, got {}",
                page_height
            )));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(FormError::InvalidGeometry(format!(
                "scale must be positive, got {}",
                scale
            )));
        }
        Ok(Self {
            origin,
            page_height,
            scale,
        })
    }

    /// Map a design-space rectangle into this space
    pub fn map_rect(&self, rect: &Rect) -> Result<Rect> {
        if !rect.is_finite() {
            return Err(FormError::InvalidGeometry(format!(
                "rectangle {:?} has a non-finite coordinate",
                rect
            )));
        }
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Err(FormError::InvalidGeometry(format!(
                "rectangle size must be positive, got {}x{}",
                rect.width, rect.height
            )));
        }
        if rect.x < 0.0 || rect.y < 0.0 {
            return Err(FormError::InvalidGeometry(format!(
                "rectangle position must not be negative, got ({}, {})",
                rect.x, rect.y
            )));
        }

        let scaled = rect.scale(self.scale);
        Ok(match self.origin {
            Origin::TopLeft => scaled,
            Origin::BottomLeft => Rect::new(
                scaled.x,
                self.page_height - scaled.y - scaled.height,
                scaled.width,
                scaled.height,
            ),
        })
    }

    /// Convert a design-space length (font size, stroke width)
    pub fn map_length(&self, length: f32) -> f32 {
        length * self.scale
    }
}

/// Convert a rectangle from design space into an output space.
///
/// * `rect` - Field rectangle, origin top-left, design units
/// * `page_height` - Target page height `H` in output units
/// * `origin` - Target coordinate convention
/// * `scale` - Output units per design unit
pub fn transform_rect(rect: &Rect, page_height: f32, origin: Origin, scale: f32) -> Result<Rect> {
    OutputSpace::new(origin, page_height, scale)?.map_rect(rect)
}
