// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles all cross-cutting concerns that don't belong in
// any specific business layer:
//
//   export.rs — Output file writing
//               Serialises the run's results into the five
//               deliverable files (triplet JSON, chat-format
//               JSONL, transition lists, repetition counts)
//               using serde_json.
//
//   stats.rs  — Per-article stats logging
//               Writes one CSV row per article (paragraph,
//               candidate, match, and kept counts) for later
//               inspection of how a bulletin was processed.
//
// Why is this a separate layer?
//   These concerns are used by the application layer but
//   don't belong to the pipeline itself. Keeping them here:
//   - Keeps the pipeline pure and unit-testable
//   - Makes it easy to swap implementations
//     (e.g. stream results over HTTP instead of files)
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Output file writing (JSON, JSONL, plain text lists)
pub mod export;

/// Per-article extraction stats CSV logger
pub mod stats;
