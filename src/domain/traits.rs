// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - DocxLoader implements DocumentSource
//   - A future PlainTextLoader could also implement it
//   - The application layer only sees DocumentSource
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use crate::domain::document::SourceDocument;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can load one document's paragraphs.
///
/// Implementations:
///   - DocxLoader → loads from a .docx file on disk
///   - (future) PlainTextLoader → loads from a .txt file
pub trait DocumentSource {
    /// Load the document: ordered, normalised, non-empty
    /// paragraph strings plus a source identifier.
    fn load(&self) -> Result<SourceDocument>;
}
