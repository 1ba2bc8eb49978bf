use crate::compose::ComposeSettings;
use crate::constants::{CHECKBOX_BORDER_WIDTH, DEFAULT_FONT_SIZE, LINE_HEIGHT_RATIO, PIXELS_PER_POINT};
use crate::layout::Origin;
use crate::render::{FieldStyle, RenderMode};
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Rendering configuration shared by the preview and PDF drivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Unit the template's field geometry is expressed in
    pub design_unit: DesignUnit,

    // Pages synthesized when the template has no base document
    pub default_paper_size: PaperSize,
    pub default_orientation: Orientation,

    /// Screen pixels per PDF point for previews
    pub preview_pixels_per_point: f32,

    // Field layout, in design units
    pub default_font_size: f32,
    pub line_height_ratio: f32,
    pub checkbox_border_width: f32,

    /// Compress PDF streams on export
    pub compress: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            design_unit: DesignUnit::Point,
            default_paper_size: PaperSize::Letter,
            default_orientation: Orientation::Portrait,
            preview_pixels_per_point: PIXELS_PER_POINT,
            default_font_size: DEFAULT_FONT_SIZE,
            line_height_ratio: LINE_HEIGHT_RATIO,
            checkbox_border_width: CHECKBOX_BORDER_WIDTH,
            compress: true,
        }
    }
}

impl RenderOptions {
    /// Load options from JSON file
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| FormError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| FormError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.default_page_size_pt();
        if !(width > 0.0 && height > 0.0) {
            return Err(FormError::Config(format!(
                "Default page size must be positive, got {}x{}",
                width, height
            )));
        }

        let positive = [
            ("preview_pixels_per_point", self.preview_pixels_per_point),
            ("default_font_size", self.default_font_size),
            ("line_height_ratio", self.line_height_ratio),
            ("checkbox_border_width", self.checkbox_border_width),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FormError::Config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Default page size with orientation applied, in points
    pub fn default_page_size_pt(&self) -> (f32, f32) {
        self.default_paper_size
            .dimensions_with_orientation(self.default_orientation)
    }

    pub fn field_style(&self) -> FieldStyle {
        FieldStyle {
            default_font_size: self.default_font_size,
            line_height_ratio: self.line_height_ratio,
            checkbox_border_width: self.checkbox_border_width,
        }
    }

    /// Settings for print output: points, bottom-left origin, real data only
    pub fn pdf_settings(&self) -> ComposeSettings {
        ComposeSettings {
            origin: Origin::BottomLeft,
            units_per_point: 1.0,
            design_unit: self.design_unit,
            default_page_size: self.default_page_size_pt().into(),
            mode: RenderMode::Export,
            style: self.field_style(),
        }
    }

    /// Settings for screen previews: pixels, top-left origin
    pub fn preview_settings(&self, mode: RenderMode) -> ComposeSettings {
        ComposeSettings {
            origin: Origin::TopLeft,
            units_per_point: self.preview_pixels_per_point,
            design_unit: self.design_unit,
            default_page_size: self.default_page_size_pt().into(),
            mode,
            style: self.field_style(),
        }
    }
}
