//! Field rendering
//!
//! Turns one field descriptor plus its value into backend-neutral draw
//! primitives in output space. Every export driver consumes the same
//! primitives, so per-kind layout lives here exactly once.

mod field;
mod primitive;

pub use field::{FieldStyle, RenderMode, render_field, split_lines};
pub use primitive::*;
