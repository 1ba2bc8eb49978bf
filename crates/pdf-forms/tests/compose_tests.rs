mod common;

use common::*;
use pdf_forms::*;

fn settings() -> ComposeSettings {
    RenderOptions::default().pdf_settings()
}

fn three_page_template() -> Template {
    let page = |name: &str| {
        Page::new(vec![FieldDescriptor::new(
            name,
            FieldKind::Text,
            Rect::new(10.0, 10.0, 100.0, 20.0),
        )])
    };
    Template::new(vec![page("a"), page("b"), page("c")])
}

#[test]
fn test_pages_follow_schema_order() {
    let template = three_page_template();
    let record = DataRecord::from_iter([("a", "1"), ("b", "2"), ("c", "3")]);

    let pages = compose(&template, &record, None, &settings()).unwrap();
    let order: Vec<usize> = pages.iter().map(|p| p.schema_index).collect();
    assert_eq!(order, vec![0, 1, 2]);

    for (page, expected) in pages.iter().zip(["1", "2", "3"]) {
        assert!(matches!(&page.primitives[..], [DrawPrimitive::Text { text, .. }] if text == expected));
        assert_eq!(page.size, PageSize::new(612.0, 792.0));
        assert_eq!(page.origin, Origin::BottomLeft);
    }
}

#[test]
fn test_fields_render_in_insertion_order() {
    let template = sample_template();
    let pages = compose(&template, &sample_record(), None, &settings()).unwrap();
    let names: Vec<&str> = pages[0].primitives.iter().map(DrawPrimitive::name).collect();
    assert_eq!(names, vec!["drawText", "drawLines", "drawRect", "drawGlyph"]);
}

#[test]
fn test_base_page_sizes_are_used() {
    let template = three_page_template();
    let base = [
        PageSize::new(595.0, 842.0),
        PageSize::new(612.0, 792.0),
        PageSize::new(842.0, 595.0),
    ];
    let pages = compose(&template, &DataRecord::new(), Some(&base), &settings()).unwrap();
    let sizes: Vec<PageSize> = pages.iter().map(|p| p.size).collect();
    assert_eq!(sizes, base.to_vec());
}

#[test]
fn test_base_with_too_few_pages_fails() {
    let template = three_page_template();
    let base = [PageSize::new(612.0, 792.0); 2];
    let err = compose(&template, &DataRecord::new(), Some(&base), &settings()).unwrap_err();
    match err {
        FormError::PageIndexOutOfRange { index, available } => {
            assert_eq!(index, 2);
            assert_eq!(available, 2);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_extra_base_pages_are_ignored() {
    let template = three_page_template();
    let base = [PageSize::new(612.0, 792.0); 5];
    let pages = compose(&template, &DataRecord::new(), Some(&base), &settings()).unwrap();
    assert_eq!(pages.len(), 3);
}

#[test]
fn test_unknown_kind_fails_whole_composition() {
    let mut template = three_page_template();
    template.schemas[2].fields[0].kind_tag = "image".to_string();
    let record = DataRecord::from_iter([("a", "1")]);
    assert!(matches!(
        compose(&template, &record, None, &settings()),
        Err(FormError::UnsupportedFieldKind { .. })
    ));
}

#[test]
fn test_empty_schemas_fail() {
    assert!(matches!(
        compose(&Template::default(), &DataRecord::new(), None, &settings()),
        Err(FormError::NoPages)
    ));
}

#[test]
fn test_batch_repeats_template_per_record() {
    let template = three_page_template();
    let records = vec![
        DataRecord::from_iter([("a", "first")]),
        DataRecord::from_iter([("a", "second")]),
    ];
    let pages = compose_batch(&template, &records, None, &settings()).unwrap();
    let indices: Vec<(usize, usize)> = pages.iter().map(|p| (p.record_index, p.schema_index)).collect();
    assert_eq!(indices, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);

    // No records still composes the template once
    let pages = compose_batch(&template, &[], None, &settings()).unwrap();
    assert_eq!(pages.len(), 3);
    assert!(pages.iter().all(|p| p.primitives.is_empty()));
}

#[test]
fn test_preview_settings_scale_to_pixels() {
    let template = sample_template();
    let settings = RenderOptions::default().preview_settings(RenderMode::Design);
    let pages = compose(&template, &DataRecord::new(), None, &settings).unwrap();

    assert_eq!(pages[0].origin, Origin::TopLeft);
    assert!((pages[0].size.width - 816.0).abs() < 1e-3);
    assert!((pages[0].size.height - 1056.0).abs() < 1e-3);
    // Placeholders for the text fields, an empty box for the checkbox
    let names: Vec<&str> = pages[0].primitives.iter().map(DrawPrimitive::name).collect();
    assert_eq!(names, vec!["drawText", "drawLines", "drawRect"]);
}

#[test]
fn test_millimeter_design_unit() {
    let template = Template::new(vec![Page::new(vec![FieldDescriptor::new(
        "a",
        FieldKind::Text,
        Rect::new(25.4, 25.4, 25.4, 10.0),
    )])]);
    let mut options = RenderOptions::default();
    options.design_unit = DesignUnit::Millimeter;

    let record = DataRecord::from_iter([("a", "x")]);
    let pages = compose(&template, &record, None, &options.pdf_settings()).unwrap();
    match &pages[0].primitives[0] {
        DrawPrimitive::Text { clip, .. } => {
            assert!((clip.x - 72.0).abs() < 1e-3);
            assert!((clip.width - 72.0).abs() < 1e-3);
        }
        other => panic!("expected text, got {:?}", other),
    }
}
