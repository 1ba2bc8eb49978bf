use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use pdf_forms::{DataRecord, DesignUnit, RenderOptions, Template};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pdff", about = "PDF form overlay CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a template with data and write a PDF
    Render {
        /// Template JSON file
        #[arg(short, long)]
        template: PathBuf,

        /// Data JSON file (one object or an array of objects)
        #[arg(short, long, conflicts_with = "csv")]
        data: Option<PathBuf>,

        /// Data CSV file (header row names the fields)
        #[arg(short, long)]
        csv: Option<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Render options JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Unit of the template's field geometry
        #[arg(long, value_enum)]
        unit: Option<UnitArg>,
    },

    /// Write an HTML design preview of the template
    Preview {
        /// Template JSON file
        #[arg(short, long)]
        template: PathBuf,

        /// Data JSON file; the first record is previewed
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Output HTML file
        #[arg(short, long)]
        output: PathBuf,

        /// Render options JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Unit of the template's field geometry
        #[arg(long, value_enum)]
        unit: Option<UnitArg>,
    },

    /// Show template statistics
    Inspect {
        /// Template JSON file
        #[arg(short, long)]
        template: PathBuf,
    },

    /// Validate a template and report missing required fields
    Check {
        /// Template JSON file
        #[arg(short, long)]
        template: PathBuf,

        /// Data JSON or CSV file to check against
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Render options JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Unit of the template's field geometry
        #[arg(long, value_enum)]
        unit: Option<UnitArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Pt,
    Px,
    Mm,
}

impl From<UnitArg> for DesignUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Pt => Self::Point,
            UnitArg::Px => Self::Pixel,
            UnitArg::Mm => Self::Millimeter,
        }
    }
}

async fn load_options(config: Option<&Path>, unit: Option<UnitArg>) -> Result<RenderOptions> {
    let mut options = match config {
        Some(path) => RenderOptions::load(path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RenderOptions::default(),
    };
    if let Some(unit) = unit {
        options.design_unit = unit.into();
    }
    Ok(options)
}

async fn load_template(path: &Path) -> Result<Template> {
    let template = pdf_forms::load_template(path)
        .await
        .with_context(|| format!("Failed to load template {}", path.display()))?;
    template.validate()?;
    Ok(template)
}

async fn load_records(path: &Path) -> Result<Vec<DataRecord>> {
    pdf_forms::load_records(path)
        .await
        .with_context(|| format!("Failed to load data {}", path.display()))
}

/// Log missing required fields, returning how many were found
fn warn_missing(template: &Template, records: &[DataRecord]) -> usize {
    let mut total = 0;
    for (index, record) in records.iter().enumerate() {
        for missing in pdf_forms::missing_required(template, record) {
            log::warn!(
                "Record {}: required field '{}' on page {} has no value",
                index,
                missing.name,
                missing.page
            );
            total += 1;
        }
    }
    total
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            template,
            data,
            csv,
            output,
            config,
            unit,
        } => {
            let options = load_options(config.as_deref(), unit).await?;
            let template = load_template(&template).await?;
            let records = match data.as_deref().or(csv.as_deref()) {
                Some(path) => load_records(path).await?,
                None => Vec::new(),
            };

            warn_missing(&template, &records);

            pdf_forms::generate_pdf(&template, &records, &options, &output).await?;
            println!(
                "Rendered {} record(s) x {} page(s) → {}",
                records.len().max(1),
                template.page_count(),
                output.display()
            );
        }

        Commands::Preview {
            template,
            data,
            output,
            config,
            unit,
        } => {
            let options = load_options(config.as_deref(), unit).await?;
            let template = load_template(&template).await?;
            let records = match data.as_deref() {
                Some(path) => load_records(path).await?,
                None => Vec::new(),
            };

            let pages = pdf_forms::render_preview(&template, records.first(), &options)?;
            let title = output
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Preview");
            let html = pdf_forms::to_html_document(&pages, title);
            tokio::fs::write(&output, html)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Previewed {} page(s) → {}", pages.len(), output.display());
        }

        Commands::Inspect { template } => {
            let template = pdf_forms::load_template(&template).await?;
            let stats = pdf_forms::calculate_statistics(&template)?;
            println!("Template Statistics:");
            println!("  Pages: {}", stats.pages);
            println!("  Fields: {}", stats.fields);
            for (kind, count) in &stats.fields_by_kind {
                println!("    {}: {}", kind, count);
            }
            println!("  Required fields: {}", stats.required_fields);
            match stats.base_pdf_pages {
                Some(pages) => println!("  Base PDF pages: {}", pages),
                None => println!("  Base PDF: none"),
            }
            println!("  Sample records: {}", stats.sample_records);
        }

        Commands::Check {
            template,
            data,
            config,
            unit,
        } => {
            let options = load_options(config.as_deref(), unit).await?;
            let template = load_template(&template).await?;
            let records = match data.as_deref() {
                Some(path) => load_records(path).await?,
                None => template.sampledata.clone(),
            };

            pdf_forms::check_template(&template, &options)?;

            let missing = warn_missing(&template, &records);
            if missing > 0 {
                bail!("{} required value(s) missing", missing);
            }
            println!("Template OK ({} record(s) checked)", records.len());
        }
    }

    Ok(())
}
