//! Page composition
//!
//! This module orchestrates rendering a template against data:
//! 1. Check every field's kind and geometry up front
//! 2. Resolve each schema page's size from the base document or the default
//! 3. Render fields in insertion order, pages in schema order
//!
//! Nothing is produced unless the whole template renders.

mod io;

pub use io::{load_base_pdf, load_records, load_template, save_pdf};

use crate::layout::{Origin, OutputSpace};
use crate::record::DataRecord;
use crate::render::{DrawPrimitive, FieldStyle, RenderMode, render_field};
use crate::template::Template;
use crate::types::*;

/// Everything the composer needs to know about the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposeSettings {
    pub origin: Origin,
    /// Output units per PDF point (1 for PDF, pixels per point for screens)
    pub units_per_point: f32,
    pub design_unit: DesignUnit,
    /// Size of synthesized pages when there is no base document, in points
    pub default_page_size: PageSize,
    pub mode: RenderMode,
    pub style: FieldStyle,
}

impl ComposeSettings {
    /// Output units per design unit
    pub fn scale(&self) -> f32 {
        self.design_unit.points_per_unit() * self.units_per_point
    }
}

/// One rendered page
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPage {
    /// Index into the template's schemas
    pub schema_index: usize,
    /// Index of the data record this page was filled from
    pub record_index: usize,
    /// Page size in output units
    pub size: PageSize,
    /// Coordinate convention of `primitives`
    pub origin: Origin,
    pub primitives: Vec<DrawPrimitive>,
}

/// Compose every schema page of a template against one record.
///
/// `base_pages` holds the page sizes of the base document in points, or
/// `None` when the template has no base document.
pub fn compose(
    template: &Template,
    record: &DataRecord,
    base_pages: Option<&[PageSize]>,
    settings: &ComposeSettings,
) -> Result<Vec<ComposedPage>> {
    compose_batch(template, std::slice::from_ref(record), base_pages, settings)
}

/// Compose the template once per record, concatenating the pages.
///
/// With no records the template is composed once against an empty record.
pub fn compose_batch(
    template: &Template,
    records: &[DataRecord],
    base_pages: Option<&[PageSize]>,
    settings: &ComposeSettings,
) -> Result<Vec<ComposedPage>> {
    preflight(template, base_pages)?;

    let empty = [DataRecord::default()];
    let records = if records.is_empty() { &empty[..] } else { records };

    let mut pages = Vec::with_capacity(records.len() * template.page_count());
    for (record_index, record) in records.iter().enumerate() {
        for (schema_index, page) in template.schemas.iter().enumerate() {
            let size_pt = page_size_pt(base_pages, schema_index, settings)?;
            let size = PageSize::new(
                size_pt.width * settings.units_per_point,
                size_pt.height * settings.units_per_point,
            );
            let space = OutputSpace::new(settings.origin, size.height, settings.scale())?;

            let mut primitives = Vec::new();
            for field in &page.fields {
                primitives.extend(render_field(
                    field,
                    record.get(&field.name),
                    &space,
                    settings.mode,
                    &settings.style,
                )?);
            }

            log::debug!(
                "Composed record {} page {}: {} fields, {} primitives",
                record_index,
                schema_index,
                page.len(),
                primitives.len()
            );

            pages.push(ComposedPage {
                schema_index,
                record_index,
                size,
                origin: settings.origin,
                primitives,
            });
        }
    }

    Ok(pages)
}

/// Reject templates that cannot render before any output exists
fn preflight(template: &Template, base_pages: Option<&[PageSize]>) -> Result<()> {
    if template.schemas.is_empty() {
        return Err(FormError::NoPages);
    }

    if let Some(base) = base_pages {
        if template.schemas.len() > base.len() {
            return Err(FormError::PageIndexOutOfRange {
                index: base.len(),
                available: base.len(),
            });
        }
    }

    for (_, field) in template.fields() {
        field.kind()?;
        field.validate_geometry()?;
    }

    Ok(())
}

fn page_size_pt(
    base_pages: Option<&[PageSize]>,
    index: usize,
    settings: &ComposeSettings,
) -> Result<PageSize> {
    match base_pages {
        Some(base) => base
            .get(index)
            .copied()
            .ok_or(FormError::PageIndexOutOfRange {
                index,
                available: base.len(),
            }),
        None => Ok(settings.default_page_size),
    }
}
