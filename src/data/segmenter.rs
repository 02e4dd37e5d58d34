// ============================================================
// Layer 4 — Article Segmenter
// ============================================================
// Splits the document's paragraph sequence into articles.
//
// The source documents are press/legal digests where every
// article begins with a numbered, dated header line:
//
//   "214 du 03/06 Loi de finances rectificative"
//    ^^^    ^^ ^^
//    2-3    DD MM
//    digits
//
// Algorithm: walk the paragraphs keeping an accumulator.
// When a paragraph matches the header pattern and the
// accumulator already holds paragraphs, flush the accumulator
// as a finished article and start a new one. Every paragraph
// (header or not) is appended to the current accumulator, so
// the output is a partition of the input: concatenating all
// articles' paragraphs in order reproduces the input exactly.
//
// Edge case: paragraphs before the first header line form the
// first article, which therefore does not start with a header.
// This is accepted behaviour (a document preamble), not an
// error.
//
// Reference: Rust Book §8 (Vectors)
//            regex crate documentation

use regex::Regex;

use crate::domain::article::Article;

/// Anchored header pattern: 2-3 ASCII digits, " du ", then a
/// DD/MM date fragment. More text may follow on the same line.
const HEADER_PATTERN: &str = r"^[0-9]{2,3} du [0-9]{2}/[0-9]{2}";

/// Groups a paragraph sequence into header-delimited articles.
pub struct ArticleSegmenter {
    /// Compiled header pattern, built once per segmenter
    header: Regex,
}

impl ArticleSegmenter {
    /// Create a new ArticleSegmenter.
    /// The pattern is a constant, so compilation cannot fail.
    pub fn new() -> Self {
        Self {
            header: Regex::new(HEADER_PATTERN).expect("header pattern is valid"),
        }
    }

    /// True if the paragraph is an article header line
    pub fn is_header(&self, paragraph: &str) -> bool {
        self.header.is_match(paragraph)
    }

    /// Partition `paragraphs` into ordered articles.
    /// Consumes the input — every paragraph ends up in exactly
    /// one article, in its original position.
    pub fn segment(&self, paragraphs: Vec<String>) -> Vec<Article> {
        let mut articles = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for para in paragraphs {
            // A header closes the running article before
            // opening the next one
            if self.is_header(&para) && !current.is_empty() {
                articles.push(Article::new(std::mem::take(&mut current)));
            }
            current.push(para);
        }

        // Flush the trailing article
        if !current.is_empty() {
            articles.push(Article::new(current));
        }

        tracing::debug!("Segmented document into {} articles", articles.len());
        articles
    }
}

impl Default for ArticleSegmenter {
    fn default() -> Self {
        Self::new()
    }
}
