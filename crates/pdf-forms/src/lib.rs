//! Form template rendering
//!
//! Places field values onto pages at exact positions, either as an HTML
//! preview or as a PDF overlaid on an optional base document.
//!
//! ```text
//! Template + DataRecord
//!       ↓
//!   [layout]   : design space to output space
//!       ↓
//!   [render]   : per-kind draw primitives
//!       ↓
//!   [compose]  : pages in order, base page sizes
//!       ↓
//!   [export]   : HTML fragments or PDF bytes
//! ```

pub mod compose;
pub mod constants;
pub mod export;
pub mod layout;
mod options;
pub mod record;
pub mod render;
mod stats;
pub mod template;
mod types;

pub use compose::{
    ComposeSettings, ComposedPage, compose, compose_batch, load_base_pdf, load_records,
    load_template, save_pdf,
};
pub use export::{
    ExportDriver, HtmlPreview, PdfExporter, PreviewPage, check_template, generate_pdf,
    load_base_document, render_pdf_bytes, render_preview, to_html_document,
};
pub use layout::{Frame, Origin, OutputSpace, Point, Rect, transform_rect};
pub use options::*;
pub use record::{
    DataRecord, FieldValue, MissingField, missing_required, records_from_csv, records_from_json,
};
pub use render::{DrawPrimitive, FieldStyle, Glyph, RenderMode, TextLine, TextStyle, render_field};
pub use stats::calculate_statistics;
pub use template::{BLANK_PDF, BasePdf, FieldDescriptor, FieldKind, Page, Template};
pub use types::*;
