// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `extract` and `inspect`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::extract_use_case::ExtractConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract transition triplets from a .docx bulletin
    Extract(ExtractArgs),

    /// Segment a .docx bulletin and summarise its articles
    Inspect(InspectArgs),
}

/// All arguments for the `extract` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Path to the .docx file to process
    #[arg(long)]
    pub input: String,

    /// Directory to write the output files into
    #[arg(long, default_value = "output")]
    pub out_dir: String,

    /// How many trailing lines of each article to scan
    /// for transition candidates
    #[arg(long, default_value_t = 5)]
    pub max_footer_lines: usize,

    /// Maximum accepted triplets per transition phrase —
    /// occurrences beyond this are rejected
    #[arg(long, default_value_t = 3)]
    pub usage_cap: usize,

    /// How many accepted triplets to print after the run
    #[arg(long, default_value_t = 5)]
    pub preview: usize,
}

/// Convert CLI ExtractArgs into the application-layer ExtractConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<ExtractArgs> for ExtractConfig {
    fn from(a: ExtractArgs) -> Self {
        ExtractConfig {
            input:            a.input,
            out_dir:          a.out_dir,
            max_footer_lines: a.max_footer_lines,
            usage_cap:        a.usage_cap,
            preview:          a.preview,
        }
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the .docx file to inspect
    #[arg(long)]
    pub input: String,

    /// How many trailing lines of each article to scan
    /// for transition candidates
    #[arg(long, default_value_t = 5)]
    pub max_footer_lines: usize,
}
