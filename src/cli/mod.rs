// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `extract` — runs the full pipeline and writes the
//                  output files
//   2. `inspect` — segments a file and prints a per-article
//                  summary without writing anything
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExtractArgs, InspectArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "transition-extractor",
    version = "0.1.0",
    about = "Extract (paragraph_a, transition, paragraph_b) triplets from .docx press bulletins."
)]
pub struct Cli {
    /// The subcommand to run (extract or inspect)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Extract(args) => Self::run_extract(args),
            Commands::Inspect(args) => Self::run_inspect(args),
        }
    }

    /// Handles the `extract` subcommand.
    /// Converts CLI args into an ExtractConfig and hands off to Layer 2.
    fn run_extract(args: ExtractArgs) -> Result<()> {
        use crate::application::extract_use_case::ExtractUseCase;

        tracing::info!("Starting extraction from: {}", args.input);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = ExtractUseCase::new(args.into());
        let summary  = use_case.execute()?;

        println!(
            "Extracted {} structured triplets from {} articles.",
            summary.triplet_count, summary.article_count
        );
        println!(
            "Transitions: {} accepted, {} rejected by the usage cap.",
            summary.accepted_count, summary.rejected_count
        );

        if !summary.preview.is_empty() {
            println!("\nPreview (first {} entries):", summary.preview.len());
            println!("{}", serde_json::to_string_pretty(&summary.preview)?);
        }

        Ok(())
    }

    /// Handles the `inspect` subcommand.
    /// Prints one summary line per article.
    fn run_inspect(args: InspectArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        let use_case  = InspectUseCase::new(args.input.as_str(), args.max_footer_lines);
        let summaries = use_case.execute()?;

        println!("{} articles in '{}':\n", summaries.len(), args.input);
        for s in &summaries {
            println!(
                "  #{:<3} {:<50} {:>3} paragraphs, {} candidates{}",
                s.index,
                truncate_for_display(&s.first_line, 50),
                s.paragraphs,
                s.candidates,
                if s.has_marker { "" } else { ", no marker" },
            );
        }

        Ok(())
    }
}

/// Shorten a line to `max` chars for column display
fn truncate_for_display(line: &str, max: usize) -> String {
    if line.chars().count() <= max {
        line.to_string()
    } else {
        let head: String = line.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}
