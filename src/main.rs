use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};

use textops::{current_timestamp, Lexicon, ProcessingRecord, ProcessingType, Processor};

#[derive(Parser)]
#[command(name = "textops", about = "Text analytics — summaries, sentiment, keywords, translation stubs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one processing operation over a text or file
    Process {
        /// Inline input text
        #[arg(short, long)]
        text: Option<String>,
        /// Read input from a file instead (txt, md, csv, json, pdf)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Processing type: summarize, analyze, extract, or translate
        #[arg(short = 'p', long = "type", default_value = "summarize")]
        processing_type: String,
        /// Emit the full result envelope as JSON
        #[arg(long)]
        json: bool,
        /// Attach a user id and emit a persistence record (JSON mode only)
        #[arg(short, long)]
        user: Option<String>,
    },
}

fn read_file_content(path: &Path) -> Result<String> {
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    match ext {
        "txt" | "md" | "csv" | "json" => {
            let mut file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            let mut content = String::new();
            file.read_to_string(&mut content)?;
            Ok(content)
        }
        "pdf" => pdf_extract::extract_text(path)
            .map_err(|e| anyhow!("PDF extraction failed: {}", e)),
        _ => Err(anyhow!("Unsupported file format: {}", ext)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Process {
            text,
            file,
            processing_type,
            json,
            user,
        } => {
            let input = match (text, file) {
                (Some(t), None) => t,
                (None, Some(p)) => read_file_content(&p)?,
                _ => bail!("provide exactly one of --text or --file"),
            };

            // Missing lexical resources are fatal at startup.
            let lexicon = Lexicon::load().context("failed to load lexical resources")?;
            let processor = Processor::new(lexicon);

            let Some(parsed_type) = ProcessingType::parse(&processing_type) else {
                println!("Unknown processing type: {processing_type}");
                return Ok(());
            };

            let started = Instant::now();
            match processor.process(&input, parsed_type) {
                Ok(mut result) => {
                    if json {
                        let metadata = HashMap::from([
                            (
                                "processing_time".to_string(),
                                format!("{}ms", started.elapsed().as_millis()),
                            ),
                            ("timestamp".to_string(), current_timestamp()),
                        ]);
                        result.metadata = Some(metadata);
                        println!("{}", serde_json::to_string_pretty(&result)?);
                        if let Some(user_id) = user {
                            let record = ProcessingRecord::new(
                                &user_id,
                                &input,
                                parsed_type.as_str(),
                                &result.result,
                            );
                            println!("{}", serde_json::to_string_pretty(&record)?);
                        }
                    } else {
                        println!("{}", result.result);
                    }
                }
                // Soft-fail contract: component faults come back on the
                // result channel as a message, not a process failure.
                Err(e) => println!("{e}"),
            }
        }
    }
    Ok(())
}
