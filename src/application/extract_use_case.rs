// ============================================================
// Layer 2 — ExtractUseCase
// ============================================================
// Orchestrates the full extraction pipeline in order:
//
//   Step 1: Load the .docx file          (Layer 4 - data)
//   Step 2: Segment into articles        (Layer 4 - data)
//   Step 3: Per article:
//             footer candidates          (Layer 4 - data)
//             body selection             (this file)
//             fuzzy triplet matching     (Layer 4 - data)
//             usage policy               (Layer 4 - data)
//   Step 4: Log per-article stats        (Layer 6 - infra)
//   Step 5: Write the output files       (Layer 6 - infra)
//
// Steps 2-3 live in the pure free function run_pipeline so the
// whole document → triplets transformation can be unit tested
// on in-memory paragraphs, with all state threaded through
// explicit arguments and return values.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::DocxLoader,
    segmenter::ArticleSegmenter,
    footer::FooterExtractor,
    matcher::FuzzyMatcher,
    aggregator::{ExtractionResults, UsagePolicy},
};
use crate::domain::article::Article;
use crate::domain::traits::DocumentSource;
use crate::domain::triplet::Triplet;
use crate::infra::{
    export::ExportManager,
    stats::{ArticleStats, StatsLogger},
};

/// The paragraph that opens an article's long body. The trailing
/// space is significant: the marker only matches paragraphs that
/// continue past the marker word.
pub const BODY_MARKER: &str = "À savoir ";

// ─── Extraction Configuration ────────────────────────────────────────────────
// All knobs for one extraction run. Serialisable so a run's
// settings can be written next to its outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub input:            String,
    pub out_dir:          String,
    pub max_footer_lines: usize,
    pub usage_cap:        usize,
    pub preview:          usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input:            "bulletin.docx".to_string(),
            out_dir:          "output".to_string(),
            max_footer_lines: 5,
            usage_cap:        3,
            preview:          5,
        }
    }
}

// ─── Run Summary ─────────────────────────────────────────────────────────────
/// What the CLI reports to the user once a run is finished.
#[derive(Debug, Clone)]
pub struct ExtractSummary {
    /// Articles found in the document
    pub article_count: usize,

    /// Accepted triplets written to disk
    pub triplet_count: usize,

    /// Distinct accepted transition phrases
    pub accepted_count: usize,

    /// Distinct rejected transition phrases
    pub rejected_count: usize,

    /// The first few accepted triplets, for display
    pub preview: Vec<Triplet>,
}

// ─── ExtractUseCase ──────────────────────────────────────────────────────────
// Owns the config and runs the full extraction pipeline.
pub struct ExtractUseCase {
    config: ExtractConfig,
}

impl ExtractUseCase {
    /// Create a new ExtractUseCase with the given configuration
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Execute the full extraction pipeline end to end
    pub fn execute(&self) -> Result<ExtractSummary> {
        let cfg = &self.config;

        // ── Step 1: Load the .docx document ──────────────────────────────────
        tracing::info!("Loading '{}'", cfg.input);
        let loader   = DocxLoader::new(&cfg.input);
        let document = loader.load()?;

        // ── Steps 2-3: Run the pure pipeline ─────────────────────────────────
        let output = run_pipeline(
            document.paragraphs,
            cfg.max_footer_lines,
            cfg.usage_cap,
        );
        tracing::info!(
            "Extracted {} triplets from {} articles ({} transitions rejected)",
            output.results.triplets.len(),
            output.article_count,
            output.results.rejected_transitions.len(),
        );

        // ── Step 4: Log per-article stats ─────────────────────────────────────
        let stats_logger = StatsLogger::new(&cfg.out_dir)?;
        for row in &output.stats {
            stats_logger.log(row)?;
        }

        // ── Step 5: Write the output files ────────────────────────────────────
        let exporter = ExportManager::new(&cfg.out_dir);
        exporter.write_all(&output.results)?;

        let preview = output
            .results
            .triplets
            .iter()
            .take(cfg.preview)
            .cloned()
            .collect();

        Ok(ExtractSummary {
            article_count:  output.article_count,
            triplet_count:  output.results.triplets.len(),
            accepted_count: output.results.accepted_transitions.len(),
            rejected_count: output.results.rejected_transitions.len(),
            preview,
        })
    }
}

// ─── Pure Pipeline ───────────────────────────────────────────────────────────

/// Everything one pipeline run produces, before any I/O.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Accepted triplets and the transition reports
    pub results: ExtractionResults,

    /// Articles found in the document
    pub article_count: usize,

    /// One stats row per article, in document order
    pub stats: Vec<ArticleStats>,
}

/// Run the document → triplets pipeline on in-memory paragraphs.
///
/// Pure: no I/O, no shared state. Articles are processed in
/// document order and triplets in match order, which the usage
/// cap depends on — this loop must not be reordered or
/// parallelised.
pub fn run_pipeline(
    paragraphs:       Vec<String>,
    max_footer_lines: usize,
    usage_cap:        usize,
) -> PipelineOutput {
    let segmenter = ArticleSegmenter::new();
    let footer    = FooterExtractor::new(max_footer_lines);
    let matcher   = FuzzyMatcher::new();

    let articles      = segmenter.segment(paragraphs);
    let article_count = articles.len();

    let mut policy = UsagePolicy::new(usage_cap);
    let mut stats  = Vec::with_capacity(article_count);

    for (index, article) in articles.iter().enumerate() {
        let transitions = footer.extract(article);

        let triplets = match select_body(article, transitions.len()) {
            Some(body) => matcher.find_triplets(&body, &transitions),
            // No marker, no usable tail: the article simply
            // contributes nothing
            None => Vec::new(),
        };

        let matched    = triplets.len();
        let mut kept   = 0usize;
        for triplet in triplets {
            if policy.offer(triplet) {
                kept += 1;
            }
        }

        tracing::debug!(
            "Article {}: {} candidates, {} matches, {} kept",
            index + 1,
            transitions.len(),
            matched,
            kept,
        );

        stats.push(ArticleStats {
            article:    index + 1,
            paragraphs: article.len(),
            candidates: transitions.len(),
            matched,
            kept,
        });
    }

    PipelineOutput {
        results: policy.into_results(),
        article_count,
        stats,
    }
}

/// Select an article's long body text: the space-joined
/// paragraphs strictly after the first "À savoir " marker
/// paragraph and strictly before the trailing footer zone
/// (the last `transitions_len` paragraphs).
///
/// Returns None when the article has no marker, when the marker
/// is the last paragraph, when no candidate was extracted, or
/// when the footer zone swallows everything after the marker.
pub fn select_body(article: &Article, transitions_len: usize) -> Option<String> {
    let marker = article.marker_index(BODY_MARKER)?;
    let start  = marker + 1;

    if start >= article.len() || transitions_len == 0 {
        return None;
    }

    let end = article.len().saturating_sub(transitions_len);
    if end <= start {
        return None;
    }

    Some(article.paragraphs[start..end].join(" "))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    // Body filler sentences, each comfortably over the 100-char
    // footer bound so they are never mistaken for candidates
    // when they fall inside the footer window.
    const FILLER_A: &str = "Le premier texte commenté précise les modalités d'application du dispositif et détaille le calendrier de mise en œuvre retenu pour les collectivités.";
    const FILLER_B: &str = "Le deuxième texte commenté étend le champ du dispositif aux opérateurs privés et fixe les obligations déclaratives qui en découlent pour chacun d'eux.";
    const FILLER_C: &str = "la circulaire d'accompagnement revient sur les points soulevés lors de la consultation et apporte des précisions attendues sur le régime transitoire.";

    /// One realistic article: header, long marker paragraph,
    /// three long body paragraphs (the transition opens the
    /// third), and the transition itself as the footer line.
    fn demo_article(n: usize, transition: &str) -> Vec<String> {
        vec![
            format!("{n:03} du 01/01 Bulletin officiel"),
            format!("À savoir : {FILLER_A}"),
            FILLER_A.to_string(),
            FILLER_B.to_string(),
            format!("{transition} {FILLER_C}"),
            transition.to_string(),
        ]
    }

    #[test]
    fn test_single_article_yields_one_triplet() {
        let out = run_pipeline(demo_article(1, "Dans le même esprit,"), 5, 3);

        assert_eq!(out.article_count, 1);
        assert_eq!(out.results.triplets.len(), 1);

        let triplet = &out.results.triplets[0];
        assert_eq!(triplet.transition, "Dans le même esprit,");
        // paragraph_a is the body before the transition, capped at 200 chars
        assert!(triplet.paragraph_a.starts_with("Le premier texte"));
        assert_eq!(triplet.paragraph_a.chars().count(), 200);
        // paragraph_b is the body after it
        assert!(triplet.paragraph_b.starts_with("la circulaire"));
    }

    #[test]
    fn test_usage_cap_across_articles() {
        let transition = "Dans le même esprit,";
        let mut paragraphs = Vec::new();
        for n in 1..=4 {
            paragraphs.extend(demo_article(n, transition));
        }

        let out = run_pipeline(paragraphs, 5, 3);

        assert_eq!(out.article_count, 4);
        // Three accepted, the fourth occurrence rejected
        assert_eq!(out.results.triplets.len(), 3);
        assert_eq!(out.results.rejected_transitions, vec![transition]);
        assert_eq!(out.results.repetitions[transition], 1);
        // Once rejected, the transition is not reported accepted
        assert!(out.results.accepted_transitions.is_empty());

        // Per-article stats reflect the cap
        assert_eq!(out.stats.len(), 4);
        assert_eq!(out.stats[2].kept, 1);
        assert_eq!(out.stats[3].matched, 1);
        assert_eq!(out.stats[3].kept, 0);
    }

    #[test]
    fn test_distinct_transitions_all_accepted() {
        let mut paragraphs = demo_article(1, "Dans le même esprit,");
        paragraphs.extend(demo_article(2, "Sur le même sujet,"));

        let out = run_pipeline(paragraphs, 5, 3);

        assert_eq!(out.results.triplets.len(), 2);
        assert_eq!(
            out.results.accepted_transitions,
            vec!["Dans le même esprit,", "Sur le même sujet,"]
        );
        assert!(out.results.rejected_transitions.is_empty());
    }

    #[test]
    fn test_empty_input_is_not_an_error() {
        let out = run_pipeline(Vec::new(), 5, 3);
        assert_eq!(out.article_count, 0);
        assert!(out.results.triplets.is_empty());
        assert!(out.stats.is_empty());
    }

    #[test]
    fn test_article_without_marker_contributes_nothing() {
        let paragraphs = vec![
            "001 du 01/01 Bulletin officiel".to_string(),
            FILLER_A.to_string(),
            "Dans le même esprit,".to_string(),
        ];
        let out = run_pipeline(paragraphs, 5, 3);
        assert_eq!(out.article_count, 1);
        assert!(out.results.triplets.is_empty());
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let mut paragraphs = demo_article(1, "Dans le même esprit,");
        paragraphs.extend(demo_article(2, "Sur le même sujet,"));

        let a = run_pipeline(paragraphs.clone(), 5, 3);
        let b = run_pipeline(paragraphs, 5, 3);
        assert_eq!(a.results.triplets, b.results.triplets);
        assert_eq!(a.results.accepted_transitions, b.results.accepted_transitions);
    }

    // ── select_body ──────────────────────────────────────────────────────────

    fn article(items: &[&str]) -> Article {
        Article::new(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_select_body_joins_with_spaces() {
        let a = article(&["entête", "À savoir ceci", "un", "deux", "footer"]);
        assert_eq!(select_body(&a, 1), Some("un deux".to_string()));
    }

    #[test]
    fn test_select_body_without_marker() {
        let a = article(&["entête", "un", "deux"]);
        assert_eq!(select_body(&a, 1), None);
    }

    #[test]
    fn test_select_body_marker_last() {
        let a = article(&["entête", "À savoir ceci"]);
        assert_eq!(select_body(&a, 1), None);
    }

    #[test]
    fn test_select_body_no_candidates() {
        // Zero footer candidates means nothing could ever match;
        // the article is skipped outright
        let a = article(&["entête", "À savoir ceci", "un", "deux"]);
        assert_eq!(select_body(&a, 0), None);
    }

    #[test]
    fn test_select_body_footer_swallows_tail() {
        // The footer zone covers everything after the marker
        let a = article(&["entête", "À savoir ceci", "un", "deux"]);
        assert_eq!(select_body(&a, 2), None);
    }
}
