// ============================================================
// Layer 4 — Fuzzy Triplet Matcher
// ============================================================
// Locates transition phrases inside an article's body text and
// slices the body into (paragraph_a, transition, paragraph_b)
// triplets.
//
// Why "fuzzy"? Footer candidates don't always reproduce the
// body's exact casing, and a naive full scan of every candidate
// over a long body is O(n·m). So matching is a two-step
// anchor-then-confirm search:
//
//   Step 1: take the candidate's first 10 characters as a fast
//           anchor and find every case-insensitive occurrence
//           of it in the body
//   Step 2: around each anchor hit, look at a context window of
//           len(candidate)+30 characters; if the whole candidate
//           occurs (case-insensitively) in that window, confirm
//           by searching the full candidate from the anchor
//           offset and record (start, end, candidate)
//
// The 30-char cushion absorbs minor trailing drift between the
// footer text and the body occurrence.
//
// Slicing: sort all confirmed matches by start offset, then for
// each match take the text between the previous match's end and
// this match's start as paragraph_a, and the text between this
// match's end and the next match's start as paragraph_b. Both
// slices are trimmed and capped at 200 characters; a triplet is
// emitted only when both are non-empty.
//
// Overlap policy: no conflict resolution between overlapping
// match spans. Overlaps and duplicate matches produce inverted
// or empty slices which the non-empty filter drops. This is a
// deliberate, known limitation of the heuristic — do not "fix"
// it, output on ambiguous inputs depends on it.
//
// All offsets are character indices, not byte indices: the body
// is French text full of multi-byte accented characters, and
// windows/truncation must count what the reader sees. The body
// is materialised as a Vec<char> once up front.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators and Closures)

use crate::domain::triplet::Triplet;

/// Length of the fast-search anchor prefix, in chars
const ANCHOR_LEN: usize = 10;

/// Extra chars appended to the containment window
const CONTEXT_CUSHION: usize = 30;

/// Maximum length of paragraph_a / paragraph_b, in chars
const MAX_PARAGRAPH_LEN: usize = 200;

/// A confirmed occurrence: (start, end, transition text).
/// Tuple ordering gives the required sort: ascending start,
/// ties broken by end offset then transition text.
type Match = (usize, usize, String);

/// Finds transition occurrences in body text and slices the
/// text between them into triplets.
pub struct FuzzyMatcher;

impl FuzzyMatcher {
    /// Create a new FuzzyMatcher
    pub fn new() -> Self {
        Self
    }

    /// Locate every transition occurrence in `body` and emit
    /// the resulting triplets, ordered by position in the body.
    ///
    /// The emitted `transition` field is the trimmed candidate
    /// text as supplied, not the body's matched casing.
    pub fn find_triplets(&self, body: &str, transitions: &[String]) -> Vec<Triplet> {
        let chars: Vec<char> = body.chars().collect();
        let lower            = lowercase_chars(&chars);

        let matches = self.collect_matches(&lower, transitions);
        self.slice_triplets(&chars, &matches)
    }

    /// Step 1 + 2: anchor search and confirmation.
    /// Returns confirmed matches sorted by (start, end, text).
    fn collect_matches(&self, lower: &[char], transitions: &[String]) -> Vec<Match> {
        let mut matches: Vec<Match> = Vec::new();

        for transition in transitions {
            let clean = transition.trim();

            // Whitespace-only candidates can never match
            if clean.is_empty() {
                continue;
            }

            let needle = lowercase_chars(&clean.chars().collect::<Vec<char>>());
            let anchor = &needle[..needle.len().min(ANCHOR_LEN)];

            // Non-overlapping anchor occurrences; occurrences of
            // different transitions may still overlap each other
            let mut from = 0;
            while let Some(s) = find_from(lower, anchor, from) {
                from = s + anchor.len();

                // Containment check on the cushioned window
                let window_end = (s + needle.len() + CONTEXT_CUSHION).min(lower.len());
                if !contains(&lower[s..window_end], &needle) {
                    continue;
                }

                // Confirm: full case-insensitive search from the
                // anchor offset pins down the real start
                if let Some(real_start) = find_from(lower, &needle, s) {
                    matches.push((real_start, real_start + needle.len(), clean.to_string()));
                }
            }
        }

        matches.sort();
        matches
    }

    /// Step 3: walk the sorted matches and slice the body text
    /// between neighbouring matches.
    fn slice_triplets(&self, chars: &[char], matches: &[Match]) -> Vec<Triplet> {
        let mut triplets = Vec::new();

        for (idx, (start, end, transition)) in matches.iter().enumerate() {
            let prev_end = if idx > 0 { matches[idx - 1].1 } else { 0 };
            let next_start = if idx + 1 < matches.len() {
                matches[idx + 1].0
            } else {
                chars.len()
            };

            let paragraph_a = slice_trimmed(chars, prev_end, *start);
            let paragraph_b = slice_trimmed(chars, *end, next_start);

            // Empty slices (including inverted ranges from
            // overlapping matches) produce no triplet
            if !paragraph_a.is_empty() && !paragraph_b.is_empty() {
                triplets.push(Triplet::new(
                    truncate_chars(&paragraph_a, MAX_PARAGRAPH_LEN),
                    transition.clone(),
                    truncate_chars(&paragraph_b, MAX_PARAGRAPH_LEN),
                ));
            }
        }

        triplets
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Char-slice helpers ───────────────────────────────────────────────────────

/// Lowercase a char sequence one char at a time.
/// char::to_lowercase can expand to multiple chars for a few
/// exotic code points; we keep the first so offsets stay 1:1
/// with the original text, which is what slicing requires.
fn lowercase_chars(chars: &[char]) -> Vec<char> {
    chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect()
}

/// First occurrence of `needle` in `haystack` at or after
/// `from`, as a char index. Empty needles never match.
fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (from..=haystack.len() - needle.len())
        .find(|&i| &haystack[i..i + needle.len()] == needle)
}

/// True if `needle` occurs anywhere in `haystack`
fn contains(haystack: &[char], needle: &[char]) -> bool {
    find_from(haystack, needle, 0).is_some()
}

/// The trimmed text between char indices `start` and `end`.
/// An inverted range (start >= end) yields the empty string.
fn slice_trimmed(chars: &[char], start: usize, end: usize) -> String {
    if start >= end {
        return String::new();
    }
    chars[start..end].iter().collect::<String>().trim().to_string()
}

/// At most the first `max` chars of `text`
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
