// ============================================================
// Layer 4 — Footer Transition Extractor
// ============================================================
// Proposes transition-phrase candidates from an article's
// trailing lines.
//
// In the source documents, the editors list the transition
// phrases used in an article as short standalone lines at the
// very end of it (a "footer zone"). We don't know exactly how
// many there are, so we look at a fixed window of trailing
// lines and keep those whose length is plausible for a
// transition phrase:
//
//   - longer than 5 chars  → filters page numbers, bullets,
//                            stray punctuation
//   - shorter than 100 chars → filters full body sentences
//                              that happen to sit near the end
//
// Both bounds are strict. No deduplication happens here:
// the same phrase recurring across articles is expected and
// handled by the usage policy downstream.
//
// Reference: Rust Book §8 (Slices)

use crate::domain::article::Article;

/// Strict lower bound on a candidate's trimmed length
const MIN_LEN: usize = 5;

/// Strict upper bound on a candidate's trimmed length
const MAX_LEN: usize = 100;

/// Extracts transition candidates from an article's footer zone.
pub struct FooterExtractor {
    /// How many trailing lines to inspect
    max_lines: usize,
}

impl FooterExtractor {
    /// Create a new FooterExtractor inspecting the last
    /// `max_lines` paragraphs of each article
    pub fn new(max_lines: usize) -> Self {
        Self { max_lines }
    }

    /// Return the candidate transitions of `article`, in their
    /// original order. May be empty.
    ///
    /// Candidates are trimmed; lengths are measured in chars so
    /// accented phrases are judged by what the reader sees.
    pub fn extract(&self, article: &Article) -> Vec<String> {
        let window = self.max_lines.min(article.len());
        let start  = article.len() - window;

        article.paragraphs[start..]
            .iter()
            .map(|line| line.trim())
            .filter(|line| {
                let len = line.chars().count();
                len > MIN_LEN && len < MAX_LEN
            })
            .map(|line| line.to_string())
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn article(items: &[&str]) -> Article {
        Article::new(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_window_limits_candidate_count() {
        let e = FooterExtractor::new(2);
        let a = article(&[
            "ligne une assez longue",
            "ligne deux assez longue",
            "ligne trois assez longue",
        ]);
        let c = e.extract(&a);
        // Only the last 2 lines are inspected
        assert_eq!(c, vec!["ligne deux assez longue", "ligne trois assez longue"]);
    }

    #[test]
    fn test_window_larger_than_article() {
        let e = FooterExtractor::new(5);
        let a = article(&["une seule ligne ici"]);
        assert_eq!(e.extract(&a).len(), 1);
    }

    #[test]
    fn test_length_bounds_are_strict() {
        let e = FooterExtractor::new(5);
        let a = article(&[
            "12345",                 // exactly 5 chars → too short
            "123456",                // 6 chars → kept
            &"x".repeat(100),        // exactly 100 chars → too long
            &"y".repeat(99),         // 99 chars → kept
        ]);
        let c = e.extract(&a);
        assert_eq!(c.len(), 2);
        assert_eq!(c[0], "123456");
        assert_eq!(c[1], "y".repeat(99));
    }

    #[test]
    fn test_candidates_are_trimmed() {
        let e = FooterExtractor::new(5);
        let a = article(&["  En revanche,  "]);
        assert_eq!(e.extract(&a), vec!["En revanche,"]);
    }

    #[test]
    fn test_length_measured_after_trim() {
        let e = FooterExtractor::new(5);
        // 5 visible chars padded with spaces: trimmed length is 5 → dropped
        let a = article(&["  abcde  "]);
        assert!(e.extract(&a).is_empty());
    }

    #[test]
    fn test_length_measured_in_chars_not_bytes() {
        let e = FooterExtractor::new(5);
        // "éàçîô" is 5 chars but 10 bytes — must still be rejected
        let a = article(&["éàçîô"]);
        assert!(e.extract(&a).is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let e = FooterExtractor::new(5);
        let a = article(&["Par ailleurs,", "Par ailleurs,"]);
        assert_eq!(e.extract(&a).len(), 2);
    }

    #[test]
    fn test_empty_article_gives_no_candidates() {
        let e = FooterExtractor::new(5);
        assert!(e.extract(&Article::new(Vec::new())).is_empty());
    }
}
