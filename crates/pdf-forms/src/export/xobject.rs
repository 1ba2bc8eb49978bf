//! Base document import
//!
//! Each base page is copied into the output as a Form XObject so field
//! content can be overlaid on top of it. The same XObject is reused when
//! several records are rendered onto the same base page.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::{PageSize, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Page bounds as `[x0, y0, x1, y1]` in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl PageBox {
    pub fn width(&self) -> f32 {
        (self.x1 - self.x0).abs()
    }

    pub fn height(&self) -> f32 {
        (self.y1 - self.y0).abs()
    }

    pub fn size(&self) -> PageSize {
        PageSize::new(self.width(), self.height())
    }

    fn to_array(self) -> Vec<Object> {
        vec![
            Object::Real(self.x0),
            Object::Real(self.y0),
            Object::Real(self.x1),
            Object::Real(self.y1),
        ]
    }
}

impl Default for PageBox {
    fn default() -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            x1: DEFAULT_PAGE_DIMENSIONS.0,
            y1: DEFAULT_PAGE_DIMENSIONS.1,
        }
    }
}

// =============================================================================
// Page Geometry
// =============================================================================

/// Object IDs of the document's pages in page order
pub fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

/// MediaBox of a page, following inheritance from the page tree
pub fn media_box(doc: &Document, page_id: ObjectId) -> Result<PageBox> {
    let page_dict = doc.get_dictionary(page_id)?;

    let bounds = inherited(doc, page_dict, b"MediaBox")
        .and_then(|obj| resolve(doc, obj).as_array().ok())
        .filter(|arr| arr.len() == 4)
        .and_then(|arr| {
            let nums: Vec<f32> = arr
                .iter()
                .filter_map(|obj| extract_number(resolve(doc, obj)))
                .collect();
            (nums.len() == 4).then(|| PageBox {
                x0: nums[0].min(nums[2]),
                y0: nums[1].min(nums[3]),
                x1: nums[0].max(nums[2]),
                y1: nums[1].max(nums[3]),
            })
        })
        .unwrap_or_default();

    Ok(bounds)
}

/// Sizes of every page of a document, in points
pub fn page_sizes(doc: &Document) -> Result<Vec<PageSize>> {
    page_ids(doc)
        .into_iter()
        .map(|id| media_box(doc, id).map(|b| b.size()))
        .collect()
}

/// Look up a page attribute, walking `Parent` links for inheritable keys
fn inherited<'a>(doc: &'a Document, dict: &'a Dictionary, key: &[u8]) -> Option<&'a Object> {
    let mut current = dict;
    // Bounded walk guards against cyclic page trees
    for _ in 0..32 {
        if let Ok(value) = current.get(key) {
            return Some(value);
        }
        let parent_id = current.get(b"Parent").and_then(Object::as_reference).ok()?;
        current = doc.get_dictionary(parent_id).ok()?;
    }
    None
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

// =============================================================================
// XObject Import
// =============================================================================

/// Copy a base page into `output` as a Form XObject.
///
/// # Arguments
/// * `output` - The document being built
/// * `source` - The base document
/// * `page_id` - The base page to import
/// * `cache` - Source to output object IDs, shared across imports
pub fn import_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;
    let bounds = media_box(source, page_id)?;
    let content = page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("FormType", Object::Integer(1));
    xobject_dict.set("BBox", Object::Array(bounds.to_array()));

    if let Some(resources) = inherited(source, page_dict, b"Resources") {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content)))
}

/// Decoded content of a page, concatenating content arrays
fn page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let refs: Vec<ObjectId> = match page_dict.get(b"Contents") {
        Ok(Object::Reference(id)) => vec![*id],
        Ok(Object::Array(arr)) => arr
            .iter()
            .filter_map(|obj| obj.as_reference().ok())
            .collect(),
        _ => return Ok(Vec::new()),
    };

    let mut result = Vec::new();
    for id in refs {
        if let Ok(stream) = doc.get_object(id)?.as_stream() {
            let content = stream
                .decompressed_content()
                .unwrap_or_else(|_| stream.content.clone());
            result.extend_from_slice(&content);
            result.push(b'\n');
        }
    }
    Ok(result)
}

/// Deep copy an object from source to output document, following references.
///
/// `Parent` links are skipped so that copying resources never drags the
/// source page tree along.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the ID first so self-references terminate
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => Ok(Object::Stream(Stream {
            dict: copy_dictionary(output, source, &stream.dict, cache)?,
            content: stream.content.clone(),
            allows_compression: stream.allows_compression,
            start_position: None,
        })),
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        if key.as_slice() == b"Parent" {
            continue;
        }
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}
