// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Segmentation-only dry run: load a document, split it into
// articles, and report what the extractor would see — without
// matching anything or writing any output files.
//
// Useful when a new bulletin extracts zero triplets: the
// summary shows at a glance whether the header pattern fired,
// whether articles carry the "À savoir " marker, and how many
// footer candidates each one offers.
//
// Reference: Rust Book §7 (Module System)

use anyhow::Result;

use crate::data::{
    loader::DocxLoader,
    segmenter::ArticleSegmenter,
    footer::FooterExtractor,
};
use crate::application::extract_use_case::BODY_MARKER;
use crate::domain::traits::DocumentSource;

/// What the CLI prints for one article.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    /// 1-based position in the document
    pub index: usize,

    /// The article's first paragraph (usually its header line)
    pub first_line: String,

    /// Paragraph count
    pub paragraphs: usize,

    /// Footer transition candidates found
    pub candidates: usize,

    /// Whether a body marker paragraph is present
    pub has_marker: bool,
}

/// Loads a document and summarises its articles.
pub struct InspectUseCase {
    input:            String,
    max_footer_lines: usize,
}

impl InspectUseCase {
    /// Create a new InspectUseCase for one file
    pub fn new(input: impl Into<String>, max_footer_lines: usize) -> Self {
        Self {
            input: input.into(),
            max_footer_lines,
        }
    }

    /// Load, segment, and summarise. No files are written.
    pub fn execute(&self) -> Result<Vec<ArticleSummary>> {
        let loader   = DocxLoader::new(&self.input);
        let document = loader.load()?;

        let segmenter = ArticleSegmenter::new();
        let footer    = FooterExtractor::new(self.max_footer_lines);

        let articles = segmenter.segment(document.paragraphs);
        tracing::info!("'{}' holds {} articles", document.source, articles.len());

        let summaries = articles
            .iter()
            .enumerate()
            .map(|(i, article)| ArticleSummary {
                index:      i + 1,
                first_line: article.paragraphs.first().cloned().unwrap_or_default(),
                paragraphs: article.len(),
                candidates: footer.extract(article).len(),
                has_marker: article.marker_index(BODY_MARKER).is_some(),
            })
            .collect();

        Ok(summaries)
    }
}
