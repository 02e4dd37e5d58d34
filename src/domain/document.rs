// ============================================================
// Layer 3 — SourceDocument Domain Type
// ============================================================
// Represents a single document loaded from disk.
// This is a plain data struct with no behaviour —
// just a source name and the extracted paragraphs.
//
// Using #[derive(Debug, Clone)] gives us:
//   - Debug: lets us print the struct with {:?}
//   - Clone: lets us make copies of the struct
//   - Serialize/Deserialize: lets us save/load as JSON
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

use serde::{Deserialize, Serialize};

/// A raw document loaded from disk.
/// Format-agnostic — by the time a SourceDocument is created,
/// the paragraph texts have already been extracted from the
/// .docx format, normalised, and filtered of empty lines.
/// Paragraph order is document order and is significant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    /// The filename or path — kept for traceability
    /// so we know which file a triplet came from
    pub source: String,

    /// The ordered, non-empty paragraph texts of the document
    pub paragraphs: Vec<String>,
}

impl SourceDocument {
    /// Create a new SourceDocument with a source path and paragraphs.
    /// Uses impl Into<String> so callers can pass &str or String —
    /// this is idiomatic Rust for flexible string arguments.
    pub fn new(source: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            source:     source.into(),
            paragraphs,
        }
    }

    /// Number of paragraphs in the document
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// True if the document contains no paragraphs at all.
    /// An empty document is a valid input that simply yields
    /// zero articles and zero triplets downstream.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
