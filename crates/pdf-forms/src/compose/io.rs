//! Template, record and document I/O

use crate::record::{DataRecord, records_from_csv, records_from_json};
use crate::template::Template;
use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Load a template from a JSON file
pub async fn load_template(path: impl AsRef<Path>) -> Result<Template> {
    let json = tokio::fs::read_to_string(path).await?;
    Template::from_json(&json)
}

/// Load data records from a `.csv` file or a JSON file (one object or an array)
pub async fn load_records(path: impl AsRef<Path>) -> Result<Vec<DataRecord>> {
    let path = path.as_ref().to_owned();
    let contents = tokio::fs::read(&path).await?;

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    // CSV parsing is CPU-bound, spawn blocking
    tokio::task::spawn_blocking(move || {
        if is_csv {
            records_from_csv(contents.as_slice())
        } else {
            let json = String::from_utf8_lossy(&contents);
            records_from_json(&json)
        }
    })
    .await?
}

/// Read a base document from disk, checking that it parses
pub async fn load_base_pdf(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let bytes = tokio::fs::read(path).await?;
    let bytes = tokio::task::spawn_blocking(move || {
        Document::load_mem(&bytes)?;
        Ok::<_, FormError>(bytes)
    })
    .await??;
    Ok(bytes)
}

/// Write finished document bytes
pub async fn save_pdf(bytes: Vec<u8>, path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
