//! Template data model
//!
//! A template is an ordered list of pages, each an ordered list of
//! positioned field descriptors, plus an optional base document to draw
//! onto and optional sample records used as preview defaults.
//!
//! The JSON shape is the one persisted by the designer:
//! `{ "schemas": [[field, ...], ...], "basePdf": "...", "sampledata": [...] }`.

use crate::constants::DEFAULT_FONT_SIZE;
use crate::layout::Rect;
use crate::record::DataRecord;
use crate::types::{FormError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Sentinel used by the designer for "no base document"
pub const BLANK_PDF: &str = "BLANK_PDF";

/// The closed set of field kinds the renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Number,
    Email,
    Date,
    MultilineText,
    Boolean,
}

impl FieldKind {
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Text,
        FieldKind::Number,
        FieldKind::Email,
        FieldKind::Date,
        FieldKind::MultilineText,
        FieldKind::Boolean,
    ];

    /// Canonical tag written to JSON
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Email => "email",
            FieldKind::Date => "date",
            FieldKind::MultilineText => "multiline-text",
            FieldKind::Boolean => "boolean",
        }
    }

    /// Resolve a tag, accepting the aliases older templates use
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "text" => Some(FieldKind::Text),
            "number" => Some(FieldKind::Number),
            "email" => Some(FieldKind::Email),
            "date" => Some(FieldKind::Date),
            "multiline-text" | "multilineText" | "textarea" => Some(FieldKind::MultilineText),
            "boolean" | "checkbox" => Some(FieldKind::Boolean),
            _ => None,
        }
    }

    /// Kinds rendered as one line of text
    pub fn is_single_line(self) -> bool {
        matches!(
            self,
            FieldKind::Text | FieldKind::Number | FieldKind::Email | FieldKind::Date
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One placeable form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    /// Kind tag as stored; resolved by [`FieldDescriptor::kind`]
    #[serde(rename = "type", alias = "kind")]
    pub kind_tag: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind, rect: Rect) -> Self {
        Self {
            name: name.into(),
            kind_tag: kind.as_str().to_string(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            font_size: None,
            required: false,
            placeholder: None,
        }
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn kind(&self) -> Result<FieldKind> {
        FieldKind::from_tag(&self.kind_tag).ok_or_else(|| FormError::UnsupportedFieldKind {
            field: self.name.clone(),
            kind: self.kind_tag.clone(),
        })
    }

    /// Design-space rectangle, origin top-left
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn font_size(&self) -> f32 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Label shown in design previews when there is no value
    pub fn placeholder_label(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(&self.name)
    }

    /// Check the geometry invariants of the descriptor
    pub fn validate_geometry(&self) -> Result<()> {
        let r = self.rect();
        if ![r.x, r.y, r.width, r.height].iter().all(|v| v.is_finite()) {
            return Err(FormError::InvalidGeometry(format!(
                "field '{}' has a non-finite coordinate",
                self.name
            )));
        }
        if r.width <= 0.0 || r.height <= 0.0 {
            return Err(FormError::InvalidGeometry(format!(
                "field '{}' has non-positive size {}x{}",
                self.name, r.width, r.height
            )));
        }
        if r.x < 0.0 || r.y < 0.0 {
            return Err(FormError::InvalidGeometry(format!(
                "field '{}' has negative position ({}, {})",
                self.name, r.x, r.y
            )));
        }
        let font_size = self.font_size();
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(FormError::InvalidGeometry(format!(
                "field '{}' has non-positive font size {}",
                self.name, font_size
            )));
        }
        Ok(())
    }
}

/// One page of fields. Insertion order is drawing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page {
    pub fields: Vec<FieldDescriptor>,
}

impl Page {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldDescriptor> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Replace the field with the same name in place, or append it
    pub fn upsert(&mut self, field: FieldDescriptor) {
        match self.field_mut(&field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldDescriptor> {
        let idx = self.fields.iter().position(|f| f.name == name)?;
        Some(self.fields.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Base document encoded as base64, optionally as a `data:` URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasePdf(pub String);

impl BasePdf {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        BasePdf(format!("data:application/pdf;base64,{}", STANDARD.encode(bytes)))
    }

    pub fn is_blank(&self) -> bool {
        let s = self.0.trim();
        s.is_empty() || s == BLANK_PDF
    }

    /// Decode the document bytes; `None` for the blank sentinel
    pub fn decode(&self) -> Result<Option<Vec<u8>>> {
        if self.is_blank() {
            return Ok(None);
        }
        let s = self.0.trim();
        let payload = match s.strip_prefix("data:") {
            Some(rest) => rest.split_once(',').map(|(_, data)| data).unwrap_or(rest),
            None => s,
        };
        let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        Ok(Some(STANDARD.decode(cleaned)?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub schemas: Vec<Page>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_pdf: Option<BasePdf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sampledata: Vec<DataRecord>,
}

impl Template {
    pub fn new(schemas: Vec<Page>) -> Self {
        Self {
            schemas,
            ..Default::default()
        }
    }

    pub fn with_base_pdf(mut self, bytes: &[u8]) -> Self {
        self.base_pdf = Some(BasePdf::from_bytes(bytes));
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn page_count(&self) -> usize {
        self.schemas.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = (usize, &FieldDescriptor)> {
        self.schemas
            .iter()
            .enumerate()
            .flat_map(|(idx, page)| page.fields.iter().map(move |f| (idx, f)))
    }

    /// Decoded base document bytes, if the template carries one
    pub fn base_pdf_bytes(&self) -> Result<Option<Vec<u8>>> {
        match &self.base_pdf {
            Some(base) => base.decode(),
            None => Ok(None),
        }
    }

    /// Validate structure, names, kinds and geometry
    pub fn validate(&self) -> Result<()> {
        if self.schemas.is_empty() {
            return Err(FormError::NoPages);
        }

        for (page_idx, page) in self.schemas.iter().enumerate() {
            let mut seen = HashSet::new();
            for field in &page.fields {
                if !seen.insert(field.name.as_str()) {
                    return Err(FormError::DuplicateFieldName {
                        page: page_idx,
                        name: field.name.clone(),
                    });
                }
                field.kind()?;
                field.validate_geometry()?;
            }
        }

        Ok(())
    }
}
