// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO docx parsing or file I/O here
//   - NO regex or matching heuristics here
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no fixtures needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A loaded document: source name plus ordered paragraphs
pub mod document;

// An article: one header-delimited group of paragraphs
pub mod article;

// A (paragraph_a, transition, paragraph_b) training example
pub mod triplet;

// Core abstractions (traits) that other layers implement
pub mod traits;
