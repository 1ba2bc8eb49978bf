use pdf_forms::*;

fn pdf_space() -> OutputSpace {
    OutputSpace::new(Origin::BottomLeft, 792.0, 1.0).unwrap()
}

fn screen_space() -> OutputSpace {
    OutputSpace::new(Origin::TopLeft, 792.0, 1.0).unwrap()
}

fn render(
    field: &FieldDescriptor,
    value: Option<&FieldValue>,
    space: &OutputSpace,
    mode: RenderMode,
) -> Result<Vec<DrawPrimitive>> {
    render_field(field, value, space, mode, &FieldStyle::default())
}

#[test]
fn test_text_field_draws_value() {
    let field = FieldDescriptor::new("name", FieldKind::Text, Rect::new(100.0, 100.0, 150.0, 30.0));
    let value = FieldValue::from("Ada");

    let prims = render(&field, Some(&value), &pdf_space(), RenderMode::Export).unwrap();
    assert_eq!(prims.len(), 1);
    match &prims[0] {
        DrawPrimitive::Text {
            text,
            font_size,
            clip,
            style,
            ..
        } => {
            assert_eq!(text, "Ada");
            assert_eq!(*font_size, 12.0);
            assert_eq!(*clip, Rect::new(100.0, 662.0, 150.0, 30.0));
            assert_eq!(*style, TextStyle::Value);
        }
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn test_absent_value_skipped_on_export() {
    let field = FieldDescriptor::new("name", FieldKind::Text, Rect::new(10.0, 10.0, 100.0, 20.0))
        .with_placeholder("Your name");
    let prims = render(&field, None, &pdf_space(), RenderMode::Export).unwrap();
    assert!(prims.is_empty());
}

#[test]
fn test_absent_value_shows_placeholder_in_design() {
    let field = FieldDescriptor::new("name", FieldKind::Text, Rect::new(10.0, 10.0, 100.0, 20.0))
        .with_placeholder("Your name");
    let prims = render(&field, None, &screen_space(), RenderMode::Design).unwrap();
    match &prims[..] {
        [DrawPrimitive::Text { text, style, .. }] => {
            assert_eq!(text, "Your name");
            assert_eq!(*style, TextStyle::Placeholder);
        }
        other => panic!("expected one placeholder text, got {:?}", other),
    }
}

#[test]
fn test_design_placeholder_falls_back_to_field_name() {
    let field = FieldDescriptor::new("email", FieldKind::Email, Rect::new(10.0, 10.0, 100.0, 20.0));
    let prims = render(&field, None, &screen_space(), RenderMode::Design).unwrap();
    assert!(matches!(&prims[0], DrawPrimitive::Text { text, .. } if text == "email"));
}

#[test]
fn test_number_keeps_given_representation() {
    let field = FieldDescriptor::new("qty", FieldKind::Number, Rect::new(10.0, 10.0, 100.0, 20.0));
    for literal in ["2.50", "1e2", "1.0", "12345678901234567890123"] {
        let value: FieldValue = serde_json::from_str(literal).unwrap();
        let prims = render(&field, Some(&value), &pdf_space(), RenderMode::Export).unwrap();
        match &prims[0] {
            DrawPrimitive::Text { text, .. } => assert_eq!(text, literal),
            other => panic!("expected text, got {:?}", other),
        }
    }

    let value = FieldValue::from("0042");
    let prims = render(&field, Some(&value), &pdf_space(), RenderMode::Export).unwrap();
    assert!(matches!(&prims[0], DrawPrimitive::Text { text, .. } if text == "0042"));
}

#[test]
fn test_empty_text_draws_nothing() {
    let field = FieldDescriptor::new("name", FieldKind::Text, Rect::new(10.0, 10.0, 100.0, 20.0));
    let value = FieldValue::from("");
    let prims = render(&field, Some(&value), &pdf_space(), RenderMode::Export).unwrap();
    assert!(prims.is_empty());
}

#[test]
fn test_multiline_clips_to_field_height() {
    // 12pt line height: tops at 0 and 12 fit in 20, the third line starts at 24
    let field = FieldDescriptor::new(
        "notes",
        FieldKind::MultilineText,
        Rect::new(50.0, 50.0, 200.0, 20.0),
    )
    .with_font_size(10.0);
    let value = FieldValue::from("one\ntwo\nthree\nfour");

    let prims = render(&field, Some(&value), &screen_space(), RenderMode::Export).unwrap();
    match &prims[..] {
        [DrawPrimitive::Lines { lines, clip, .. }] => {
            let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
            assert_eq!(texts, vec!["one", "two"]);
            assert_eq!(*clip, Rect::new(50.0, 50.0, 200.0, 20.0));
            // Baselines step down by one line height
            assert_eq!(lines[1].baseline.y - lines[0].baseline.y, 12.0);
        }
        other => panic!("expected lines, got {:?}", other),
    }
}

#[test]
fn test_multiline_baselines_descend_in_pdf_space() {
    let field = FieldDescriptor::new(
        "notes",
        FieldKind::MultilineText,
        Rect::new(50.0, 50.0, 200.0, 100.0),
    )
    .with_font_size(10.0);
    let value = FieldValue::from("a\r\nb");

    let prims = render(&field, Some(&value), &pdf_space(), RenderMode::Export).unwrap();
    match &prims[..] {
        [DrawPrimitive::Lines { lines, .. }] => {
            assert_eq!(lines.len(), 2);
            assert!(lines[0].baseline.y > lines[1].baseline.y);
            // First baseline: field top 742, half leading 1, ascent 8
            assert_eq!(lines[0].baseline.y, 742.0 - 1.0 - 8.0);
        }
        other => panic!("expected lines, got {:?}", other),
    }
}

#[test]
fn test_checkbox_unchecked_draws_border_only() {
    let field = FieldDescriptor::new("ok", FieldKind::Boolean, Rect::new(10.0, 10.0, 20.0, 20.0));
    let value = FieldValue::from(false);
    let prims = render(&field, Some(&value), &pdf_space(), RenderMode::Export).unwrap();
    assert_eq!(prims.len(), 1);
    assert_eq!(prims[0].name(), "drawRect");
}

#[test]
fn test_checkbox_checked_adds_glyph() {
    let field = FieldDescriptor::new("ok", FieldKind::Boolean, Rect::new(10.0, 10.0, 40.0, 20.0));
    for value in [FieldValue::from(true), FieldValue::from("yes"), FieldValue::from(1i64)] {
        let prims = render(&field, Some(&value), &pdf_space(), RenderMode::Export).unwrap();
        let names: Vec<&str> = prims.iter().map(DrawPrimitive::name).collect();
        assert_eq!(names, vec!["drawRect", "drawGlyph"]);
    }

    // The box is square, sized by the shorter side, pinned top-left
    let prims = render(&field, Some(&FieldValue::from(true)), &pdf_space(), RenderMode::Export).unwrap();
    match &prims[0] {
        DrawPrimitive::Rect { rect, .. } => assert_eq!(*rect, Rect::new(10.0, 762.0, 20.0, 20.0)),
        other => panic!("expected rect, got {:?}", other),
    }
}

#[test]
fn test_checkbox_design_mode_without_value_is_unchecked() {
    let field = FieldDescriptor::new("ok", FieldKind::Boolean, Rect::new(10.0, 10.0, 20.0, 20.0));
    let prims = render(&field, None, &screen_space(), RenderMode::Design).unwrap();
    assert_eq!(prims.len(), 1);
}

#[test]
fn test_unknown_kind_fails() {
    let mut field = FieldDescriptor::new("sig", FieldKind::Text, Rect::new(10.0, 10.0, 20.0, 20.0));
    field.kind_tag = "signature".to_string();

    let err = render(&field, Some(&FieldValue::from("x")), &pdf_space(), RenderMode::Export)
        .unwrap_err();
    match err {
        FormError::UnsupportedFieldKind { field, kind } => {
            assert_eq!(field, "sig");
            assert_eq!(kind, "signature");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_zero_size_field_fails() {
    let field = FieldDescriptor::new("name", FieldKind::Text, Rect::new(10.0, 10.0, 0.0, 20.0));
    let err = render(&field, Some(&FieldValue::from("x")), &pdf_space(), RenderMode::Export)
        .unwrap_err();
    assert!(matches!(err, FormError::InvalidGeometry(_)));
}

#[test]
fn test_font_size_scales_with_output() {
    let space = OutputSpace::new(Origin::TopLeft, 1056.0, 4.0 / 3.0).unwrap();
    let field = FieldDescriptor::new("name", FieldKind::Text, Rect::new(0.0, 0.0, 150.0, 30.0))
        .with_font_size(9.0);
    let prims = render(&field, Some(&FieldValue::from("x")), &space, RenderMode::Export).unwrap();
    match &prims[0] {
        DrawPrimitive::Text { font_size, .. } => assert!((font_size - 12.0).abs() < 1e-4),
        other => panic!("expected text, got {:?}", other),
    }
}
