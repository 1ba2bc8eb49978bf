//! PDF export driver
//!
//! Builds a new document with one page per composed page. When a base
//! document is present its page is drawn first as a Form XObject and the
//! field content is overlaid on top.

use crate::compose::ComposedPage;
use crate::constants::{BASE_XOBJECT_NAME, CHECK_MARK_PATH, FONT_RESOURCE_NAME, PLACEHOLDER_GRAY};
use crate::layout::{Origin, Point, Rect};
use crate::render::{DrawPrimitive, Glyph, TextLine, TextStyle};
use crate::types::*;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::collections::HashMap;

use super::ExportDriver;
use super::xobject::{import_page_xobject, media_box, page_ids};

/// Serializes composed pages to PDF bytes
pub struct PdfExporter<'a> {
    base: Option<&'a Document>,
    compress: bool,
}

impl<'a> PdfExporter<'a> {
    pub fn new(base: Option<&'a Document>) -> Self {
        Self {
            base,
            compress: true,
        }
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

impl ExportDriver for PdfExporter<'_> {
    type Output = Vec<u8>;

    fn export(&self, pages: &[ComposedPage]) -> Result<Vec<u8>> {
        let mut doc = self.build_document(pages)?;
        if self.compress {
            doc.compress();
        }

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        log::info!("Exported {} pages ({} bytes)", pages.len(), bytes.len());
        Ok(bytes)
    }
}

impl PdfExporter<'_> {
    /// Build the output document without serializing it
    pub fn build_document(&self, pages: &[ComposedPage]) -> Result<Document> {
        if pages.is_empty() {
            return Err(FormError::NoPages);
        }
        if let Some(page) = pages.iter().find(|p| p.origin != Origin::BottomLeft) {
            return Err(FormError::Config(format!(
                "PDF export needs bottom-left coordinates, page {} was composed top-left",
                page.schema_index
            )));
        }

        let mut output = Document::with_version("1.7");
        let pages_id = output.new_object_id();
        let font_id = output.add_object(helvetica_font());

        let base_ids = self.base.map(page_ids).unwrap_or_default();
        let mut copy_cache: HashMap<ObjectId, ObjectId> = HashMap::new();
        let mut xobject_cache: HashMap<usize, ObjectId> = HashMap::new();

        let mut kids = Vec::with_capacity(pages.len());
        for page in pages {
            let mut operations = Vec::new();
            let mut xobjects = Dictionary::new();

            if let Some(base) = self.base {
                let base_page_id = *base_ids.get(page.schema_index).ok_or(
                    FormError::PageIndexOutOfRange {
                        index: page.schema_index,
                        available: base_ids.len(),
                    },
                )?;

                let xobject_id = match xobject_cache.get(&page.schema_index) {
                    Some(&id) => id,
                    None => {
                        let id =
                            import_page_xobject(&mut output, base, base_page_id, &mut copy_cache)?;
                        xobject_cache.insert(page.schema_index, id);
                        id
                    }
                };
                xobjects.set(BASE_XOBJECT_NAME, Object::Reference(xobject_id));

                // Shift base content so its lower-left corner sits at the origin
                let bounds = media_box(base, base_page_id)?;
                operations.push(Operation::new("q", vec![]));
                operations.push(Operation::new(
                    "cm",
                    vec![
                        1.into(),
                        0.into(),
                        0.into(),
                        1.into(),
                        (-bounds.x0).into(),
                        (-bounds.y0).into(),
                    ],
                ));
                operations.push(Operation::new("Do", vec![Object::Name(
                    BASE_XOBJECT_NAME.as_bytes().to_vec(),
                )]));
                operations.push(Operation::new("Q", vec![]));
            }

            for primitive in &page.primitives {
                operations.extend(primitive_operations(primitive));
            }

            let content = Content { operations }.encode()?;
            let content_id = output.add_object(Stream::new(Dictionary::new(), content));

            let mut fonts = Dictionary::new();
            fonts.set(FONT_RESOURCE_NAME, Object::Reference(font_id));
            let mut resources = Dictionary::new();
            resources.set("Font", Object::Dictionary(fonts));
            if !xobjects.is_empty() {
                resources.set("XObject", Object::Dictionary(xobjects));
            }

            let mut page_dict = Dictionary::new();
            page_dict.set("Type", Object::Name(b"Page".to_vec()));
            page_dict.set("Parent", Object::Reference(pages_id));
            page_dict.set(
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(page.size.width),
                    Object::Real(page.size.height),
                ]),
            );
            page_dict.set("Contents", Object::Reference(content_id));
            page_dict.set("Resources", Object::Dictionary(resources));

            kids.push(Object::Reference(output.add_object(page_dict)));
        }

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Count", Object::Integer(kids.len() as i64));
        pages_dict.set("Kids", Object::Array(kids));
        output.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = output.add_object(catalog);
        output.trailer.set("Root", catalog_id);

        Ok(output)
    }
}

fn helvetica_font() -> Dictionary {
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
    font_dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    font_dict
}

// =============================================================================
// Primitive Operations
// =============================================================================

/// Content stream operations for one primitive, wrapped in `q ... Q`
fn primitive_operations(primitive: &DrawPrimitive) -> Vec<Operation> {
    let mut ops = vec![Operation::new("q", vec![])];

    match primitive {
        DrawPrimitive::Rect { rect, stroke_width } => {
            ops.push(Operation::new("RG", vec![0.into(), 0.into(), 0.into()]));
            ops.push(Operation::new("w", vec![(*stroke_width).into()]));
            // Inset by half the stroke so the border stays inside the rectangle
            let half = stroke_width / 2.0;
            ops.push(rect_operation(&Rect::new(
                rect.x + half,
                rect.y + half,
                (rect.width - stroke_width).max(0.0),
                (rect.height - stroke_width).max(0.0),
            )));
            ops.push(Operation::new("S", vec![]));
        }
        DrawPrimitive::Text {
            text,
            baseline,
            font_size,
            clip,
            style,
        } => {
            ops.extend(clip_operations(clip));
            ops.push(fill_gray(*style));
            ops.push(Operation::new("BT", vec![]));
            ops.push(font_operation(*font_size));
            ops.push(text_matrix(baseline));
            ops.push(show_text(text));
            ops.push(Operation::new("ET", vec![]));
        }
        DrawPrimitive::Lines {
            lines,
            font_size,
            clip,
            style,
        } => {
            ops.extend(clip_operations(clip));
            ops.push(fill_gray(*style));
            ops.push(Operation::new("BT", vec![]));
            ops.push(font_operation(*font_size));
            for TextLine { text, baseline } in lines {
                ops.push(text_matrix(baseline));
                ops.push(show_text(text));
            }
            ops.push(Operation::new("ET", vec![]));
        }
        DrawPrimitive::Glyph {
            glyph: Glyph::Check,
            rect,
            stroke_width,
        } => {
            ops.push(Operation::new("RG", vec![0.into(), 0.into(), 0.into()]));
            ops.push(Operation::new("w", vec![(*stroke_width).into()]));
            ops.push(Operation::new("J", vec![1.into()]));
            ops.push(Operation::new("j", vec![1.into()]));
            for (i, &(u, v)) in CHECK_MARK_PATH.iter().enumerate() {
                // Path coordinates are measured from the visual top-left
                let x = rect.x + u * rect.width;
                let y = rect.far_y() - v * rect.height;
                let op = if i == 0 { "m" } else { "l" };
                ops.push(Operation::new(op, vec![x.into(), y.into()]));
            }
            ops.push(Operation::new("S", vec![]));
        }
    }

    ops.push(Operation::new("Q", vec![]));
    ops
}

fn rect_operation(rect: &Rect) -> Operation {
    Operation::new(
        "re",
        vec![
            rect.x.into(),
            rect.y.into(),
            rect.width.into(),
            rect.height.into(),
        ],
    )
}

fn clip_operations(clip: &Rect) -> Vec<Operation> {
    vec![
        rect_operation(clip),
        Operation::new("W", vec![]),
        Operation::new("n", vec![]),
    ]
}

fn fill_gray(style: TextStyle) -> Operation {
    let level = match style {
        TextStyle::Value => 0.0,
        TextStyle::Placeholder => PLACEHOLDER_GRAY,
    };
    Operation::new("g", vec![level.into()])
}

fn font_operation(font_size: f32) -> Operation {
    Operation::new(
        "Tf",
        vec![
            Object::Name(FONT_RESOURCE_NAME.as_bytes().to_vec()),
            font_size.into(),
        ],
    )
}

fn text_matrix(baseline: &Point) -> Operation {
    Operation::new(
        "Tm",
        vec![
            1.into(),
            0.into(),
            0.into(),
            1.into(),
            baseline.x.into(),
            baseline.y.into(),
        ],
    )
}

fn show_text(text: &str) -> Operation {
    Operation::new(
        "Tj",
        vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
    )
}

/// Encode text for the standard Helvetica font.
///
/// Characters outside WinAnsiEncoding become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8a,
            '‹' => 0x8b,
            'Œ' => 0x8c,
            'Ž' => 0x8e,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9a,
            '›' => 0x9b,
            'œ' => 0x9c,
            'ž' => 0x9e,
            'Ÿ' => 0x9f,
            '\t' => b' ',
            _ => b'?',
        })
        .collect()
}
