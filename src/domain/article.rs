// ============================================================
// Layer 3 — Article Domain Type
// ============================================================
// Represents one article of the source document: a contiguous,
// ordered, non-empty run of paragraphs bounded by two dated
// header lines (or by document start/end).
//
// Invariants maintained by the segmenter (Layer 4):
//   - Every Article contains at least one paragraph
//   - Every Article after the first starts with a paragraph
//     matching the header pattern; the very first Article may
//     instead hold the document's leading preamble paragraphs
//
// Example header paragraph:
//   "214 du 03/06 Loi de finances rectificative"
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// One header-delimited group of paragraphs, in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// The paragraphs of this article, first of which is
    /// usually (but not always — see invariants) the header
    pub paragraphs: Vec<String>,
}

impl Article {
    /// Create a new Article from its paragraphs
    pub fn new(paragraphs: Vec<String>) -> Self {
        Self { paragraphs }
    }

    /// Number of paragraphs in this article
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// True if the article holds no paragraphs.
    /// The segmenter never emits an empty article; this exists
    /// for callers constructing articles directly (e.g. tests).
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Index of the first paragraph starting with `marker`,
    /// or None if no paragraph does.
    ///
    /// The comparison is case-sensitive and the marker's
    /// trailing whitespace is significant — "À savoir " only
    /// matches paragraphs that continue past the marker word.
    pub fn marker_index(&self, marker: &str) -> Option<usize> {
        self.paragraphs.iter().position(|p| p.starts_with(marker))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_index_finds_first_occurrence() {
        let article = Article::new(vec![
            "214 du 03/06 Header".to_string(),
            "Introduction.".to_string(),
            "À savoir les points suivants".to_string(),
            "À savoir encore autre chose".to_string(),
        ]);
        assert_eq!(article.marker_index("À savoir "), Some(2));
    }

    #[test]
    fn test_marker_index_is_case_sensitive() {
        let article = Article::new(vec!["à savoir quelque chose".to_string()]);
        assert_eq!(article.marker_index("À savoir "), None);
    }

    #[test]
    fn test_marker_trailing_space_is_significant() {
        // The paragraph ends exactly at the marker word, so the
        // marker with its trailing space does not match
        let article = Article::new(vec!["À savoir".to_string()]);
        assert_eq!(article.marker_index("À savoir "), None);
    }
}
