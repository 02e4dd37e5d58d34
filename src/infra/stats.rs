// ============================================================
// Layer 6 — Stats Logger
// ============================================================
// Records per-article extraction stats to a CSV file.
//
// Why log stats to CSV?
//   - Easy to open in Excel or Google Sheets
//   - Shows at a glance which articles produced triplets
//     and which were skipped (no marker, no candidates)
//   - Provides a permanent record of each extraction run
//
// Columns, one row per article:
//   - article:    1-based article position in the document
//   - paragraphs: paragraph count of the article
//   - candidates: footer transition candidates found
//   - matched:    triplets produced by the fuzzy matcher
//   - kept:       triplets surviving the usage cap
//
// Output file: <out_dir>/extraction_stats.csv
//
// Example CSV output:
//   article,paragraphs,candidates,matched,kept
//   1,12,3,2,2
//   2,8,1,0,0
//   ...
//
// How to read the stats:
//   - candidates > 0 but matched = 0 → footer phrases never
//     found in the body (check the marker paragraph)
//   - matched > kept → the usage cap fired for that article
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};
use serde::{Deserialize, Serialize};

/// One row of stats for a single article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleStats {
    /// 1-based position of the article in the document
    pub article: usize,

    /// Paragraph count of the article
    pub paragraphs: usize,

    /// Footer transition candidates proposed
    pub candidates: usize,

    /// Triplets produced by the matcher before the usage cap
    pub matched: usize,

    /// Triplets kept after the usage cap
    pub kept: usize,
}

impl ArticleStats {
    /// True if the article produced at least one kept triplet
    pub fn is_productive(&self) -> bool {
        self.kept > 0
    }
}

/// Logs per-article stats to a CSV file.
pub struct StatsLogger {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl StatsLogger {
    /// Create a new StatsLogger.
    /// Truncates any previous run's file and writes the header,
    /// so the CSV always describes exactly one run.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();

        // Create directory if it doesn't exist
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("extraction_stats.csv");

        let mut f = fs::File::create(&csv_path)?;
        writeln!(f, "article,paragraphs,candidates,matched,kept")?;
        tracing::debug!("Created stats CSV: '{}'", csv_path.display());

        Ok(Self { csv_path })
    }

    /// Append one article's stats as a new row in the CSV.
    pub fn log(&self, s: &ArticleStats) -> Result<()> {
        // Open in append mode — adds to end of file
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)?;

        writeln!(
            f,
            "{},{},{},{},{}",
            s.article,
            s.paragraphs,
            s.candidates,
            s.matched,
            s.kept,
        )?;

        Ok(())
    }

    /// Return the path to the stats CSV file
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_productive() {
        let row = ArticleStats {
            article:    1,
            paragraphs: 10,
            candidates: 2,
            matched:    2,
            kept:       1,
        };
        assert!(row.is_productive());

        let empty = ArticleStats { kept: 0, ..row };
        assert!(!empty.is_productive());
    }
}
