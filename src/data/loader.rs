// ============================================================
// Layer 4 — Document Loader
// ============================================================
// Loads one .docx file using the docx-rs crate.
//
// How .docx files work:
//   A .docx file is actually a ZIP archive containing XML files.
//   docx-rs parses this ZIP and gives us a typed Rust API
//   over the XML content.
//
// The document structure in docx-rs looks like:
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       └── Run
//                             └── children: Vec<RunChild>
//                                   └── Text (the actual words!)
//
// We walk this tree collecting all Text nodes, joining them
// into a single string per paragraph. Each paragraph is then
// normalised and empty paragraphs are dropped, so downstream
// stages only ever see trimmed, non-empty strings in document
// order.
//
// Reference: docx-rs crate documentation
//            Rust Book §8 (Collections)
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::Path, path::PathBuf};
use docx_rs::read_docx;

use crate::data::preprocessor::Preprocessor;
use crate::domain::document::SourceDocument;
use crate::domain::traits::DocumentSource;

/// Loads a single .docx file from disk.
/// Implements the DocumentSource trait from Layer 3.
pub struct DocxLoader {
    /// Path to the .docx file
    path: PathBuf,
}

impl DocxLoader {
    /// Create a new DocxLoader pointed at a file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Implement the DocumentSource trait so the application layer
/// can call load() without knowing about .docx internals
impl DocumentSource for DocxLoader {
    fn load(&self) -> Result<SourceDocument> {
        let doc = load_single_docx(&self.path)?;
        tracing::info!(
            "Loaded '{}': {} non-empty paragraphs",
            doc.source,
            doc.len()
        );
        Ok(doc)
    }
}

/// Parse a single .docx file and return a SourceDocument.
/// Extracts each paragraph's text, normalises it, and drops
/// paragraphs that are empty after trimming.
fn load_single_docx(path: &Path) -> Result<SourceDocument> {
    // Read the raw bytes of the .docx file (which is a ZIP)
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    // Parse the ZIP/XML using docx-rs
    let docx = read_docx(&bytes)
        .map_err(|e| {
            anyhow::anyhow!("docx-rs parse error in '{}': {:?}", path.display(), e)
        })?;

    let preprocessor = Preprocessor::new();

    // Walk the document tree collecting paragraph text
    let mut paragraphs: Vec<String> = Vec::new();

    for child in &docx.document.children {
        use docx_rs::DocumentChild;

        // We only care about Paragraph nodes (not tables, images, etc.)
        if let DocumentChild::Paragraph(para) = child {
            let cleaned = preprocessor.clean(&extract_paragraph_text(para));

            // Skip empty paragraphs (section breaks, blank lines, etc.)
            if !cleaned.is_empty() {
                paragraphs.push(cleaned);
            }
        }
    }

    // Use the filename as the source identifier
    let source = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(SourceDocument::new(source, paragraphs))
}

/// Extract plain text from a single docx-rs Paragraph node.
///
/// Paragraph → Run → Text is the path through the docx-rs tree.
/// Multiple runs in a paragraph are concatenated with no separator
/// because they are parts of the same sentence.
fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();

    for child in &para.children {
        use docx_rs::ParagraphChild;

        // ParagraphChild::Run contains the actual text
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                use docx_rs::RunChild;

                // RunChild::Text is the leaf node with the actual string
                if let RunChild::Text(t) = rc {
                    parts.push(t.text.clone());
                }
            }
        }
    }

    // Join all text runs in this paragraph
    parts.join("")
}
