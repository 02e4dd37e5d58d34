// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from a raw .docx file
// all the way to accepted (paragraph_a, transition, paragraph_b)
// triplets.
//
// The pipeline flows in this order:
//
//   .docx file
//       │
//       ▼
//   DocxLoader        → reads the file, extracts raw paragraphs
//       │
//       ▼
//   Preprocessor      → normalises paragraph text (whitespace)
//       │
//       ▼
//   ArticleSegmenter  → groups paragraphs into dated articles
//       │
//       ▼
//   FooterExtractor   → proposes transition candidates per article
//       │
//       ▼
//   FuzzyMatcher      → locates candidates in the article body,
//       │               slices it into triplets
//       ▼
//   UsagePolicy       → caps per-transition reuse, accumulates
//                       the final accepted triplet list
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads a .docx file using docx-rs
pub mod loader;

/// Normalises raw extracted paragraph text
pub mod preprocessor;

/// Splits the paragraph sequence into dated articles
pub mod segmenter;

/// Extracts transition candidates from article footers
pub mod footer;

/// Fuzzy-locates transitions in body text and slices triplets
pub mod matcher;

/// Enforces the per-transition usage cap across the document
pub mod aggregator;
