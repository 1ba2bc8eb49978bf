use crate::{FormCommand, FormUpdate};
use pdf_forms::{
    DataRecord, RenderOptions, Template, calculate_statistics, generate_pdf, load_records,
    load_template, render_preview,
};
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Async worker task that processes form commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<FormCommand>,
    update_tx: mpsc::UnboundedSender<FormUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut command_rx, &update_tx).await;
    }
    log::debug!("Command channel closed, worker exiting");
}

async fn process_command(
    cmd: FormCommand,
    command_rx: &mut mpsc::UnboundedReceiver<FormCommand>,
    update_tx: &mpsc::UnboundedSender<FormUpdate>,
) {
    match cmd {
        FormCommand::LoadTemplate { path } => handle_load_template(path, update_tx).await,
        FormCommand::LoadRecords { path } => handle_load_records(path, update_tx).await,
        FormCommand::RenderPreview {
            mut template,
            mut record,
            mut options,
        } => {
            // Drain queued preview commands, keeping only the most recent
            let mut deferred = Vec::new();
            while let Ok(next_cmd) = command_rx.try_recv() {
                match next_cmd {
                    FormCommand::RenderPreview {
                        template: new_template,
                        record: new_record,
                        options: new_options,
                    } => {
                        log::debug!("Discarding queued preview, using newer request");
                        template = new_template;
                        record = new_record;
                        options = new_options;
                    }
                    other => deferred.push(other),
                }
            }

            handle_render_preview(template, record, options, update_tx).await;

            // Everything else runs after the preview, in arrival order
            for next_cmd in deferred {
                Box::pin(process_command(next_cmd, command_rx, update_tx)).await;
            }
        }
        FormCommand::GeneratePdf {
            template,
            records,
            options,
            output_path,
        } => handle_generate_pdf(template, records, options, output_path, update_tx).await,
        FormCommand::CalculateStats { template } => {
            handle_calculate_stats(template, update_tx).await
        }
    }
}

fn send_error(update_tx: &mpsc::UnboundedSender<FormUpdate>, message: String) {
    log::error!("{}", message);
    let _ = update_tx.send(FormUpdate::Error { message });
}

async fn handle_load_template(path: PathBuf, update_tx: &mpsc::UnboundedSender<FormUpdate>) {
    match load_template(&path).await {
        Ok(template) => {
            log::info!(
                "Loaded template {} ({} pages)",
                path.display(),
                template.page_count()
            );
            let _ = update_tx.send(FormUpdate::TemplateLoaded { template });
        }
        Err(e) => send_error(update_tx, format!("Failed to load template: {e}")),
    }
}

async fn handle_load_records(path: PathBuf, update_tx: &mpsc::UnboundedSender<FormUpdate>) {
    match load_records(&path).await {
        Ok(records) => {
            log::info!("Loaded {} records from {}", records.len(), path.display());
            let _ = update_tx.send(FormUpdate::RecordsLoaded { records });
        }
        Err(e) => send_error(update_tx, format!("Failed to load records: {e}")),
    }
}

async fn handle_render_preview(
    template: Template,
    record: Option<DataRecord>,
    options: RenderOptions,
    update_tx: &mpsc::UnboundedSender<FormUpdate>,
) {
    // Rendering is CPU-bound, spawn blocking
    let result = tokio::task::spawn_blocking(move || {
        render_preview(&template, record.as_ref(), &options)
    })
    .await;

    match result {
        Ok(Ok(pages)) => {
            let _ = update_tx.send(FormUpdate::PreviewRendered { pages });
        }
        Ok(Err(e)) => send_error(update_tx, format!("Failed to render preview: {e}")),
        Err(e) => send_error(update_tx, format!("Preview task failed: {e}")),
    }
}

async fn handle_generate_pdf(
    template: Template,
    records: Vec<DataRecord>,
    options: RenderOptions,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<FormUpdate>,
) {
    let page_count = template.page_count() * records.len().max(1);

    match generate_pdf(&template, &records, &options, &output_path).await {
        Ok(()) => {
            log::info!("Wrote {} pages to {}", page_count, output_path.display());
            let _ = update_tx.send(FormUpdate::PdfGenerated {
                path: output_path,
                page_count,
            });
        }
        Err(e) => send_error(update_tx, format!("{}: {e}", e.user_message())),
    }
}

async fn handle_calculate_stats(template: Template, update_tx: &mpsc::UnboundedSender<FormUpdate>) {
    let result = tokio::task::spawn_blocking(move || calculate_statistics(&template)).await;

    match result {
        Ok(Ok(stats)) => {
            let _ = update_tx.send(FormUpdate::StatsCalculated { stats });
        }
        Ok(Err(e)) => send_error(update_tx, format!("Failed to calculate statistics: {e}")),
        Err(e) => send_error(update_tx, format!("Statistics task failed: {e}")),
    }
}
