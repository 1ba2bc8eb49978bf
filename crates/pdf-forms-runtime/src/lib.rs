use std::path::PathBuf;

mod worker;

pub use worker::worker_task;

// Re-export types from the library crate
pub use pdf_forms::{DataRecord, PreviewPage, RenderOptions, Template, TemplateStatistics};

/// Commands sent from the UI to the worker
#[derive(Debug)]
pub enum FormCommand {
    LoadTemplate {
        path: PathBuf,
    },
    LoadRecords {
        path: PathBuf,
    },
    /// Queued previews are coalesced; only the most recent one renders
    RenderPreview {
        template: Template,
        record: Option<DataRecord>,
        options: RenderOptions,
    },
    GeneratePdf {
        template: Template,
        records: Vec<DataRecord>,
        options: RenderOptions,
        output_path: PathBuf,
    },
    CalculateStats {
        template: Template,
    },
}

/// Updates sent from the worker to the UI
#[derive(Debug, Clone)]
pub enum FormUpdate {
    TemplateLoaded {
        template: Template,
    },
    RecordsLoaded {
        records: Vec<DataRecord>,
    },
    PreviewRendered {
        pages: Vec<PreviewPage>,
    },
    PdfGenerated {
        path: PathBuf,
        page_count: usize,
    },
    StatsCalculated {
        stats: TemplateStatistics,
    },
    Error {
        message: String,
    },
}
