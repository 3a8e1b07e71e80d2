//! Batch processing command for many cards.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use aadhaar_core::{DocumentVerifier, ExtractedRecord};

use super::extract::{csv_row, format_record, read_side, OutputFormat, CSV_HEADER};
use super::load_config;

const FRONT_SUFFIX: &str = ".front.txt";
const BACK_SUFFIX: &str = ".back.txt";

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Directory containing `<name>.front.txt` / `<name>.back.txt` pairs
    #[arg(required = true)]
    input_dir: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each card
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single card.
struct CardResult {
    name: String,
    record: Option<ExtractedRecord>,
    error: Option<String>,
    processing_time_ms: u64,
}

/// Front/back OCR text files of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CardFiles {
    name: String,
    front: PathBuf,
    back: PathBuf,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let cards = discover_cards(&args.input_dir)?;
    if cards.is_empty() {
        anyhow::bail!(
            "No *{} files found in {}",
            FRONT_SUFFIX,
            args.input_dir.display()
        );
    }

    println!(
        "{} Found {} cards to process",
        style("ℹ").blue(),
        cards.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(cards.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} cards")?
            .progress_chars("=>-"),
    );

    let verifier = DocumentVerifier::from_config(&config)?;
    let mut results = Vec::with_capacity(cards.len());

    for card in cards {
        let card_start = Instant::now();
        let result = process_card(&card, &verifier).await;
        let processing_time_ms = card_start.elapsed().as_millis() as u64;

        match result {
            Ok(record) => results.push(CardResult {
                name: card.name,
                record: Some(record),
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", card.name, error_msg);
                    results.push(CardResult {
                        name: card.name,
                        record: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", card.name, error_msg);
                    anyhow::bail!("Processing failed for {}: {}", card.name, error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            if let Some(record) = &result.record {
                let output_path =
                    output_dir.join(format!("{}.{}", result.name, args.format.extension()));
                fs::write(&output_path, format_record(record, args.format)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    println!();
    println!(
        "{} Processed {} cards in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed cards:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.name,
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Pair every `<name>.front.txt` in a directory with its `<name>.back.txt`.
fn discover_cards(dir: &Path) -> anyhow::Result<Vec<CardFiles>> {
    let pattern = dir.join(format!("*{}", FRONT_SUFFIX));
    let pattern = pattern
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Input path is not valid UTF-8: {}", dir.display()))?;

    let mut cards: Vec<CardFiles> = glob(pattern)?
        .filter_map(|r| r.ok())
        .filter_map(|front| {
            let file_name = front.file_name()?.to_str()?;
            let name = file_name.strip_suffix(FRONT_SUFFIX)?.to_string();
            let back = front.with_file_name(format!("{}{}", name, BACK_SUFFIX));
            Some(CardFiles { name, front, back })
        })
        .collect();

    cards.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(cards)
}

async fn process_card(card: &CardFiles, verifier: &DocumentVerifier) -> anyhow::Result<ExtractedRecord> {
    if !card.back.exists() {
        anyhow::bail!("Missing back side {}", card.back.display());
    }

    let front = read_side(&card.front).await?;
    let back = read_side(&card.back).await?;

    Ok(verifier.verify(&front, &back)?.record)
}

fn write_summary(path: &Path, results: &[CardResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["card", "status"];
    header.extend(CSV_HEADER);
    header.extend(["processing_time_ms", "error"]);
    wtr.write_record(&header)?;

    for result in results {
        let mut row = vec![result.name.clone()];
        match &result.record {
            Some(record) => {
                row.push("success".to_string());
                row.extend(csv_row(record));
            }
            None => {
                row.push("error".to_string());
                row.extend(std::iter::repeat_n(String::new(), CSV_HEADER.len()));
            }
        }
        row.push(result.processing_time_ms.to_string());
        row.push(result.error.clone().unwrap_or_default());
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
