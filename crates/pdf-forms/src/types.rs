use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("Unsupported field kind '{kind}' on field '{field}'")]
    UnsupportedFieldKind { field: String, kind: String },
    #[error("Schema page {index} has no matching base document page ({available} available)")]
    PageIndexOutOfRange { index: usize, available: usize },
    #[error("Duplicate field name '{name}' on page {page}")]
    DuplicateFieldName { page: usize, name: String },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Template has no pages")]
    NoPages,
}

impl FormError {
    /// Whether the error comes from the template itself rather than the environment.
    pub fn is_template_error(&self) -> bool {
        matches!(
            self,
            FormError::InvalidGeometry(_)
                | FormError::UnsupportedFieldKind { .. }
                | FormError::PageIndexOutOfRange { .. }
                | FormError::DuplicateFieldName { .. }
                | FormError::NoPages
        )
    }

    /// Message suitable for end users, hiding internal distinctions.
    pub fn user_message(&self) -> &'static str {
        "PDF generation failed"
    }
}

pub type Result<T> = std::result::Result<T, FormError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Standard paper sizes used for synthesized blank pages
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_pt: f32, height_pt: f32 },
}

impl PaperSize {
    /// Get base dimensions in points (always portrait for standard sizes)
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (841.89, 1190.55),
            PaperSize::A4 => (595.28, 841.89),
            PaperSize::A5 => (419.53, 595.28),
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::Legal => (612.0, 1008.0),
            PaperSize::Tabloid => (792.0, 1224.0),
            PaperSize::Custom {
                width_pt,
                height_pt,
            } => (width_pt, height_pt),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_pt();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Unit the template designer laid fields out in
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignUnit {
    /// PDF points (1/72 inch)
    #[default]
    Point,
    /// CSS pixels (1/96 inch)
    Pixel,
    Millimeter,
}

impl DesignUnit {
    pub fn points_per_unit(self) -> f32 {
        match self {
            DesignUnit::Point => 1.0,
            DesignUnit::Pixel => 72.0 / 96.0,
            DesignUnit::Millimeter => crate::constants::POINTS_PER_MM,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DesignUnit::Point => "pt",
            DesignUnit::Pixel => "px",
            DesignUnit::Millimeter => "mm",
        }
    }
}

/// Size of one output page in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<(f32, f32)> for PageSize {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// Statistics about a template
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateStatistics {
    /// Number of schema pages
    pub pages: usize,
    /// Total number of fields across all pages
    pub fields: usize,
    /// Field count per kind tag, in first-seen order
    pub fields_by_kind: Vec<(String, usize)>,
    /// Number of fields marked required
    pub required_fields: usize,
    /// Page count of the base document, if one is attached
    pub base_pdf_pages: Option<usize>,
    /// Number of sample data records
    pub sample_records: usize,
}
