//! Shared constants for form rendering
//!
//! This module centralizes magic numbers used by the transform, the
//! field renderer and the export drivers.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Screen pixels per PDF point at 96 DPI
pub const PIXELS_PER_POINT: f32 = 96.0 / 72.0;

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Text Layout
// =============================================================================

/// Font size used when a field does not set one (design units)
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Multi-line text advances by `font_size * LINE_HEIGHT_RATIO`
pub const LINE_HEIGHT_RATIO: f32 = 1.2;

/// Distance from the top of a line box to its baseline, as a fraction of font size
pub const BASELINE_RATIO: f32 = 0.8;

// =============================================================================
// Checkbox
// =============================================================================

/// Border width of the checkbox square (design units)
pub const CHECKBOX_BORDER_WIDTH: f32 = 1.0;

/// Check mark stroke width as a fraction of the square side
pub const CHECK_STROKE_RATIO: f32 = 0.1;

/// Check mark polyline in unit-square coordinates, origin at the visual top-left
pub const CHECK_MARK_PATH: [(f32, f32); 3] = [(0.2, 0.55), (0.42, 0.75), (0.8, 0.25)];

// =============================================================================
// PDF Resources
// =============================================================================

/// Resource name of the Helvetica font on every overlay page
pub const FONT_RESOURCE_NAME: &str = "F1";

/// Resource name of the imported base page XObject
pub const BASE_XOBJECT_NAME: &str = "Base";

/// Gray level used for placeholder text in design previews
pub const PLACEHOLDER_GRAY: f32 = 0.6;
