mod common;

use common::*;
use pdf_forms::*;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_load_template() {
    let template = sample_template();
    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), template.to_json_pretty().unwrap()).unwrap();

    let loaded = load_template(temp.path()).await.unwrap();
    assert_eq!(loaded, template);
}

#[tokio::test]
async fn test_load_template_missing_file() {
    let result = load_template("/nonexistent/template.json").await;
    assert!(matches!(result, Err(FormError::Io(_))));
}

#[tokio::test]
async fn test_load_records_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("data.CSV");
    std::fs::write(&csv_path, "name,agree\nAda,1\nGrace,0\n").unwrap();
    let records = load_records(&csv_path).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].get("name"), Some(&FieldValue::from("Grace")));

    let json_path = dir.path().join("data.json");
    std::fs::write(&json_path, r#"{ "name": "Ada" }"#).unwrap();
    let records = load_records(&json_path).await.unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_load_base_pdf() {
    let mut doc = create_test_pdf(5);
    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), pdf_bytes(&mut doc)).unwrap();

    let bytes = load_base_pdf(temp.path()).await.unwrap();
    let template = sample_template().with_base_pdf(&bytes);
    let base = load_base_document(&template).unwrap().unwrap();
    assert_eq!(base.get_pages().len(), 5);
}

#[tokio::test]
async fn test_load_base_pdf_rejects_garbage() {
    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), b"not a pdf").unwrap();
    assert!(matches!(load_base_pdf(temp.path()).await, Err(FormError::Pdf(_))));
}

#[tokio::test]
async fn test_save_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");

    let bytes = render_pdf_bytes(&sample_template(), &[sample_record()], &RenderOptions::default()).unwrap();
    save_pdf(bytes.clone(), &path).await.unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}
