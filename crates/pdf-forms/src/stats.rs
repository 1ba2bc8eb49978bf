use crate::export::load_base_document;
use crate::template::Template;
use crate::types::*;

/// Calculate statistics for a template
pub fn calculate_statistics(template: &Template) -> Result<TemplateStatistics> {
    if template.schemas.is_empty() {
        return Err(FormError::NoPages);
    }

    let mut fields = 0;
    let mut required_fields = 0;
    let mut fields_by_kind: Vec<(String, usize)> = Vec::new();

    for (_, field) in template.fields() {
        fields += 1;
        if field.required {
            required_fields += 1;
        }

        // Known kinds are counted under their canonical tag
        let tag = field
            .kind()
            .map(|kind| kind.as_str().to_string())
            .unwrap_or_else(|_| field.kind_tag.clone());
        match fields_by_kind.iter_mut().find(|(k, _)| *k == tag) {
            Some((_, count)) => *count += 1,
            None => fields_by_kind.push((tag, 1)),
        }
    }

    let base_pdf_pages = load_base_document(template)?.map(|doc| doc.get_pages().len());

    Ok(TemplateStatistics {
        pages: template.page_count(),
        fields,
        fields_by_kind,
        required_fields,
        base_pdf_pages,
        sample_records: template.sampledata.len(),
    })
}
