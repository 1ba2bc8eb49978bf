//! Export drivers
//!
//! Two backends consume the same composed pages:
//! - `HtmlPreview` for on-screen previews (top-left origin, pixels)
//! - `PdfExporter` for download and print (bottom-left origin, points)

mod html;
mod pdf;
mod xobject;

pub use html::{HtmlPreview, PreviewPage, to_html_document};
pub use pdf::{PdfExporter, encode_win_ansi};
pub use xobject::{PageBox, copy_object_deep, import_page_xobject, media_box, page_sizes};

use crate::compose::{ComposedPage, compose, compose_batch};
use crate::options::RenderOptions;
use crate::record::DataRecord;
use crate::render::RenderMode;
use crate::template::Template;
use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// A backend that turns composed pages into a concrete artifact
pub trait ExportDriver {
    type Output;

    fn export(&self, pages: &[ComposedPage]) -> Result<Self::Output>;
}

/// Parse the template's base document, if it has one
pub fn load_base_document(template: &Template) -> Result<Option<Document>> {
    match template.base_pdf_bytes()? {
        Some(bytes) => Ok(Some(Document::load_mem(&bytes)?)),
        None => Ok(None),
    }
}

/// Check that a template renders: kinds, geometry and base page coverage.
///
/// Composes once against an empty record in print space, so it fails
/// exactly where `render_pdf_bytes` would.
pub fn check_template(template: &Template, options: &RenderOptions) -> Result<()> {
    options.validate()?;
    template.validate()?;

    let base = load_base_document(template)?;
    let base_sizes = base.as_ref().map(page_sizes).transpose()?;

    compose(
        template,
        &DataRecord::default(),
        base_sizes.as_deref(),
        &options.pdf_settings(),
    )?;
    Ok(())
}

/// Render a design preview.
///
/// Uses `record` when given, else the template's first sample record.
/// Fields without a value show their placeholder.
pub fn render_preview(
    template: &Template,
    record: Option<&DataRecord>,
    options: &RenderOptions,
) -> Result<Vec<PreviewPage>> {
    options.validate()?;

    let base = load_base_document(template)?;
    let base_sizes = base.as_ref().map(page_sizes).transpose()?;

    let empty = DataRecord::default();
    let record = record
        .or_else(|| template.sampledata.first())
        .unwrap_or(&empty);

    let pages = compose_batch(
        template,
        std::slice::from_ref(record),
        base_sizes.as_deref(),
        &options.preview_settings(RenderMode::Design),
    )?;

    HtmlPreview::default().export(&pages)
}

/// Render the template once per record into PDF bytes
pub fn render_pdf_bytes(
    template: &Template,
    records: &[DataRecord],
    options: &RenderOptions,
) -> Result<Vec<u8>> {
    options.validate()?;

    let base = load_base_document(template)?;
    let base_sizes = base.as_ref().map(page_sizes).transpose()?;

    let pages = compose_batch(
        template,
        records,
        base_sizes.as_deref(),
        &options.pdf_settings(),
    )?;

    PdfExporter::new(base.as_ref())
        .with_compression(options.compress)
        .export(&pages)
}

/// Render a PDF and write it to `output_path`
pub async fn generate_pdf(
    template: &Template,
    records: &[DataRecord],
    options: &RenderOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let template = template.clone();
    let records = records.to_vec();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    // PDF generation is CPU-bound, spawn blocking
    let bytes =
        tokio::task::spawn_blocking(move || render_pdf_bytes(&template, &records, &options))
            .await??;

    tokio::fs::write(&output_path, bytes).await?;

    Ok(())
}
