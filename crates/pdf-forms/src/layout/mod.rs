//! Coordinate calculations for form rendering
//!
//! This module maps field rectangles from design space into the
//! output space of an export driver:
//! - Rectangles and points (types)
//! - Design space to screen or PDF space (transform)
//! - Visual-top relative helpers shared by both conventions (frame)

mod frame;
mod transform;
mod types;

pub use frame::*;
pub use transform::*;
pub use types::*;
