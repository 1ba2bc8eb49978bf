use pdf_forms::*;

#[test]
fn test_default_options_are_valid() {
    let options = RenderOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.default_page_size_pt(), (612.0, 792.0));
    assert_eq!(options.design_unit, DesignUnit::Point);
    assert!(options.compress);
}

#[test]
fn test_validation_rejects_non_positive_values() {
    let mut options = RenderOptions::default();
    options.default_font_size = 0.0;
    match options.validate() {
        Err(FormError::Config(msg)) => assert!(msg.contains("default_font_size")),
        other => panic!("Expected Config error, got {:?}", other),
    }

    let mut options = RenderOptions::default();
    options.preview_pixels_per_point = f32::NAN;
    assert!(options.validate().is_err());

    let mut options = RenderOptions::default();
    options.default_paper_size = PaperSize::Custom {
        width_pt: 100.0,
        height_pt: -1.0,
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_landscape_default_page() {
    let options = RenderOptions {
        default_paper_size: PaperSize::A4,
        default_orientation: Orientation::Landscape,
        ..Default::default()
    };
    assert_eq!(options.default_page_size_pt(), (841.89, 595.28));
    assert_eq!(options.pdf_settings().default_page_size, PageSize::new(841.89, 595.28));
}

#[test]
fn test_settings_per_target() {
    let options = RenderOptions {
        design_unit: DesignUnit::Pixel,
        ..Default::default()
    };

    let pdf = options.pdf_settings();
    assert_eq!(pdf.origin, Origin::BottomLeft);
    assert_eq!(pdf.mode, RenderMode::Export);
    assert_eq!(pdf.scale(), 0.75);

    let preview = options.preview_settings(RenderMode::Design);
    assert_eq!(preview.origin, Origin::TopLeft);
    assert_eq!(preview.mode, RenderMode::Design);
    // Pixel-designed templates preview at one pixel per design unit
    assert!((preview.scale() - 1.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");

    let options = RenderOptions {
        design_unit: DesignUnit::Millimeter,
        default_paper_size: PaperSize::A5,
        compress: false,
        ..Default::default()
    };
    options.save(&path).await.unwrap();

    let loaded = RenderOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}

#[tokio::test]
async fn test_load_partial_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");
    tokio::fs::write(&path, r#"{ "design_unit": "pixel" }"#).await.unwrap();

    let loaded = RenderOptions::load(&path).await.unwrap();
    assert_eq!(loaded.design_unit, DesignUnit::Pixel);
    assert_eq!(loaded.default_font_size, 12.0);
}

#[tokio::test]
async fn test_load_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");
    tokio::fs::write(&path, r#"{ "line_height_ratio": -1 }"#).await.unwrap();
    assert!(matches!(
        RenderOptions::load(&path).await,
        Err(FormError::Config(_))
    ));

    tokio::fs::write(&path, "not json").await.unwrap();
    assert!(matches!(
        RenderOptions::load(&path).await,
        Err(FormError::Config(_))
    ));
}
