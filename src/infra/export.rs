// ============================================================
// Layer 6 — Export Manager
// ============================================================
// Writes one extraction run's results to the output directory.
//
// Files written per run:
//   fewshot_examples.json          ← accepted triplets, pretty
//                                    JSON array in acceptance
//                                    order
//   fewshot_examples.jsonl         ← the same triplets as
//                                    chat-format training
//                                    examples, one per line
//   transitions_only.txt           ← accepted transitions,
//                                    sorted, one per line
//   transitions_only_rejected.txt  ← rejected transitions,
//                                    sorted, one per line
//   repetitions.json               ← rejected transition →
//                                    excess occurrence count
//
// The JSONL file is what actually feeds fine-tuning: each line
// is a messages array with a fixed French system instruction,
// a user turn presenting both paragraphs, and an assistant turn
// holding the transition the model should learn to produce.
//
// serde_json writes UTF-8 with non-ASCII characters unescaped,
// so the French text lands in the files as-is.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json crate documentation

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use serde::{Deserialize, Serialize};

use crate::data::aggregator::ExtractionResults;
use crate::domain::triplet::Triplet;

/// The fixed system instruction of every training example
const SYSTEM_INSTRUCTION: &str =
    "Insère une courte transition naturelle entre deux paragraphes de presse.";

/// One turn of a chat-format training example
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role:    String,
    pub content: String,
}

/// One chat-format training example (a JSONL line)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExample {
    pub messages: Vec<ChatMessage>,
}

impl ChatExample {
    /// Build the system/user/assistant turns for one triplet
    fn from_triplet(triplet: &Triplet) -> Self {
        Self {
            messages: vec![
                ChatMessage {
                    role:    "system".to_string(),
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role:    "user".to_string(),
                    content: format!(
                        "Paragraphe A : {}\nParagraphe B : {}",
                        triplet.paragraph_a, triplet.paragraph_b
                    ),
                },
                ChatMessage {
                    role:    "assistant".to_string(),
                    content: triplet.transition.clone(),
                },
            ],
        }
    }
}

/// Render the triplets as newline-separated JSONL, one chat
/// example per line, in the same order as the JSON array.
/// Pure so the line format is directly unit-testable.
pub fn jsonl_lines(triplets: &[Triplet]) -> Result<String> {
    let lines = triplets
        .iter()
        .map(|t| Ok(serde_json::to_string(&ChatExample::from_triplet(t))?))
        .collect::<Result<Vec<String>>>()?;
    Ok(lines.join("\n"))
}

/// Writes the run's output files into one directory.
pub struct ExportManager {
    /// The output directory; created on construction
    dir: PathBuf,
}

impl ExportManager {
    /// Create a new ExportManager.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        // create_dir_all creates parent directories too, like `mkdir -p`
        // .ok() ignores the error if the directory already exists
        fs::create_dir_all(&dir).ok();
        Self { dir }
    }

    /// Write all five output files for one run
    pub fn write_all(&self, results: &ExtractionResults) -> Result<()> {
        self.write_triplets_json(results)?;
        self.write_triplets_jsonl(results)?;
        self.write_transition_list("transitions_only.txt", &results.accepted_transitions)?;
        self.write_transition_list(
            "transitions_only_rejected.txt",
            &results.rejected_transitions,
        )?;
        self.write_repetitions(results)?;

        tracing::info!("Wrote output files to '{}'", self.dir.display());
        Ok(())
    }

    /// fewshot_examples.json — pretty-printed triplet array
    fn write_triplets_json(&self, results: &ExtractionResults) -> Result<()> {
        let path = self.dir.join("fewshot_examples.json");
        let json = serde_json::to_string_pretty(&results.triplets)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::debug!("Wrote {} triplets to '{}'", results.triplets.len(), path.display());
        Ok(())
    }

    /// fewshot_examples.jsonl — chat-format training examples
    fn write_triplets_jsonl(&self, results: &ExtractionResults) -> Result<()> {
        let path = self.dir.join("fewshot_examples.jsonl");

        fs::write(&path, jsonl_lines(&results.triplets)?)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;
        Ok(())
    }

    /// Newline-joined transition list (already sorted upstream)
    fn write_transition_list(&self, name: &str, transitions: &[String]) -> Result<()> {
        let path = self.dir.join(name);

        fs::write(&path, transitions.join("\n"))
            .with_context(|| format!("Cannot write '{}'", path.display()))?;
        Ok(())
    }

    /// repetitions.json — excess occurrence counts
    fn write_repetitions(&self, results: &ExtractionResults) -> Result<()> {
        let path = self.dir.join("repetitions.json");
        let json = serde_json::to_string_pretty(&results.repetitions)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;
        Ok(())
    }
}
