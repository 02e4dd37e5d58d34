// ============================================================
// Layer 4 — Paragraph Preprocessor
// ============================================================
// Normalises one paragraph of text extracted from a .docx file.
//
// Why do we need to clean text?
//   .docx files often contain:
//   - Non-breaking spaces (U+00A0) from Word formatting —
//     very common in French text around punctuation
//   - Zero-width spaces (U+200B) from copy-pasting
//   - Carriage returns (\r) from Windows line endings
//   - Tab characters from table formatting
//   - Multiple consecutive spaces from indentation
//
// If we don't clean these, the header pattern and the marker
// check fail on visually identical paragraphs, and transition
// candidates pick up invisible characters that break matching.
//
// Cleaning steps (applied in order):
//   1. Replace Unicode whitespace variants with plain space
//   2. Remove invisible control characters
//   3. Collapse multiple spaces into one
//   4. Trim leading/trailing whitespace
//
// Note: this runs in the loader only. Downstream stages never
// re-trim whole paragraphs, because the "À savoir " marker's
// trailing space must survive inside marker paragraphs.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Normalise one raw paragraph string.
    /// Takes a &str and returns an owned String.
    pub fn clean(&self, text: &str) -> String {

        // ── Step 1: Normalise individual characters ───────────────────────────
        // Map problematic Unicode characters to plain spaces.
        // This uses Rust's char-level iterator for safe Unicode handling.
        let normalised: String = text
            .chars()
            .map(|c| match c {
                // Tab → space
                '\t' => ' ',
                // Non-breaking space → regular space
                '\u{00A0}' => ' ',
                // Narrow non-breaking space → regular space
                '\u{202F}' => ' ',
                // Zero-width space → regular space
                '\u{200B}' => ' ',
                // Byte order mark → space
                '\u{FEFF}' => ' ',
                // Line breaks within a paragraph → space
                '\r' | '\n' => ' ',
                // Any other control character → space
                c if c.is_control() => ' ',
                // All other characters pass through unchanged
                c => c,
            })
            .collect();

        // ── Step 2: Collapse runs of spaces ──────────────────────────────────
        let mut out        = String::with_capacity(normalised.len());
        let mut last_space = false;

        for c in normalised.chars() {
            if c == ' ' {
                // Only add a space if the last char wasn't a space
                if !last_space {
                    out.push(' ');
                }
                last_space = true;
            } else {
                out.push(c);
                last_space = false;
            }
        }

        // ── Step 3: Trim the paragraph edges ─────────────────────────────────
        out.trim().to_string()
    }
}

/// Implement Default so Preprocessor can be created with Preprocessor::default()
impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// These tests run with `cargo test` and verify the cleaning logic.
// Reference: Rust Book §11 (Writing Automated Tests)
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_multiple_spaces() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("hello   world"), "hello world");
    }

    #[test]
    fn test_trims_edges() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("  hello world  "), "hello world");
    }

    #[test]
    fn test_replaces_non_breaking_space() {
        let p = Preprocessor::new();
        // French text frequently carries U+00A0 before punctuation
        assert_eq!(p.clean("À\u{00A0}savoir\u{00A0}:"), "À savoir :");
    }

    #[test]
    fn test_removes_control_chars() {
        let p = Preprocessor::new();
        // \x01 is a control character that should become a space
        assert_eq!(p.clean("hello\x01world"), "hello world");
    }

    #[test]
    fn test_whitespace_only_becomes_empty() {
        let p = Preprocessor::new();
        assert_eq!(p.clean(" \t \u{00A0} "), "");
    }

    #[test]
    fn test_empty_string() {
        let p = Preprocessor::new();
        assert_eq!(p.clean(""), "");
    }
}
