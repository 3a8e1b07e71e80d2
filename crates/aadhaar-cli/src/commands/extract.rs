//! Extract command - build a record from the OCR text of one card.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use aadhaar_core::document::combine_sides;
use aadhaar_core::extract::rules::format_aadhaar;
use aadhaar_core::{AadhaarParser, DocumentVerifier, ExtractedRecord, ExtractionResult, RecordParser};

use super::load_config;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// OCR text of the front side
    #[arg(required = true)]
    front: PathBuf,

    /// OCR text of the back side
    #[arg(required = true)]
    back: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Skip the marker-phrase check and the empty-record rejection
    #[arg(long)]
    skip_gate: bool,

    /// Print missing fields and validation issues
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let front = read_side(&args.front).await?;
    let back = read_side(&args.back).await?;

    info!(
        "Extracting from {} and {}",
        args.front.display(),
        args.back.display()
    );

    let result: ExtractionResult = if args.skip_gate {
        AadhaarParser::from_config(&config.extraction)?.parse(&combine_sides(&front, &back))
    } else {
        DocumentVerifier::from_config(&config)?.verify(&front, &back)?
    };

    let output = format_record(&result.record, args.format)?;

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read the OCR text of one side.
pub async fn read_side(path: &Path) -> anyhow::Result<String> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    Ok(tokio::fs::read_to_string(path).await?)
}

pub fn format_record(record: &ExtractedRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

pub const CSV_HEADER: [&str; 6] = [
    "id_number",
    "name",
    "date_of_birth",
    "gender",
    "address",
    "postal_code",
];

/// Record fields in CSV column order; absent fields are empty.
pub fn csv_row(record: &ExtractedRecord) -> [String; 6] {
    [
        record.id_number.clone().unwrap_or_default(),
        record.name.clone().unwrap_or_default(),
        record.date_of_birth.clone().unwrap_or_default(),
        record.gender.map(|g| g.to_string()).unwrap_or_default(),
        record.address.clone().unwrap_or_default(),
        record.postal_code.clone().unwrap_or_default(),
    ]
}

fn format_csv(record: &ExtractedRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(CSV_HEADER)?;
    wtr.write_record(csv_row(record))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ExtractedRecord) -> String {
    let field = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

    let mut output = String::new();
    output.push_str(&format!(
        "Aadhaar No:    {}\n",
        field(record.id_number.as_deref().map(format_aadhaar))
    ));
    output.push_str(&format!("Name:          {}\n", field(record.name.clone())));
    output.push_str(&format!(
        "Date of birth: {}\n",
        field(record.date_of_birth.clone())
    ));
    output.push_str(&format!(
        "Gender:        {}\n",
        field(record.gender.map(|g| g.to_string()))
    ));
    output.push_str(&format!("Address:       {}\n", field(record.address.clone())));
    output.push_str(&format!("PIN code:      {}\n", field(record.postal_code.clone())));
    output
}
