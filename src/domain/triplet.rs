// ============================================================
// Layer 3 — Triplet Domain Type
// ============================================================
// Represents a single training example in domain terms.
// This is the core concept of transition mining:
//   - We have a paragraph that comes BEFORE a transition
//   - We have the transition phrase itself
//   - We have the paragraph that comes AFTER it
//
// A fine-tuned model learns from these to insert natural
// transitions between two given paragraphs.
//
// Example:
//   paragraph_a: "Le décret est entré en vigueur au 1er mars."
//   transition:  "Dans le même esprit,"
//   paragraph_b: "la direction générale a publié une circulaire."
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// A (paragraph_a, transition, paragraph_b) training example.
///
/// Both paragraph fields are trimmed and hold at most 200
/// characters (the matcher truncates longer slices). The
/// transition field is the trimmed candidate text exactly as
/// it appeared in the article footer, not the body's casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triplet {
    /// The paragraph text immediately before the transition
    pub paragraph_a: String,

    /// The transition phrase bridging the two paragraphs
    pub transition: String,

    /// The paragraph text immediately after the transition
    pub paragraph_b: String,
}

impl Triplet {
    /// Create a new Triplet
    pub fn new(
        paragraph_a: impl Into<String>,
        transition:  impl Into<String>,
        paragraph_b: impl Into<String>,
    ) -> Self {
        Self {
            paragraph_a: paragraph_a.into(),
            transition:  transition.into(),
            paragraph_b: paragraph_b.into(),
        }
    }
}
