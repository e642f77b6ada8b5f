//! Demo search shown on the landing page.
//!
//! This is a lookup table, not a search engine: a committed query is
//! lower-cased, matched by substring against a few keyword sets in a fixed
//! priority order, and answered with that bucket's pre-authored results.
//!
//! # Pipeline
//!
//! ```text
//! query ─► trim ─► (blank? Ignored) ─► classify ─► results_for ─► ResultView
//! ```
//!
//! Everything here is pure, so the presenter can be tested without a DOM.
//!
//! # Examples
//!
//! ```
//! use rustysearch_core::demo::{search, DemoOutcome, DemoResults, KeywordBucket};
//!
//! match search("  JWT Login flow ") {
//!     DemoOutcome::Rendered { bucket, results: DemoResults::Results(views) } => {
//!         assert_eq!(bucket, KeywordBucket::Authentication);
//!         assert_eq!(views[0].match_label, "92% match");
//!     }
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//!
//! assert_eq!(search("   "), DemoOutcome::Ignored);
//! ```

mod catalog;
mod types;

pub use types::{DemoOutcome, DemoResults, KeywordBucket, ResultEntry, ResultView};

use tracing::debug;

/// Classifies a query into its keyword bucket.
///
/// Matching is case-insensitive substring containment. The first bucket in
/// [`KeywordBucket::PRIORITY`] with a matching keyword wins, so
/// `"auth database"` is an authentication query.
pub fn classify(query: &str) -> KeywordBucket {
    let query = query.to_lowercase();
    KeywordBucket::PRIORITY
        .into_iter()
        .find(|bucket| bucket.keywords().iter().any(|kw| query.contains(kw)))
        .unwrap_or(KeywordBucket::General)
}

/// Returns the bucket's results sorted by descending score.
///
/// The sort is stable, so entries with equal scores keep their authored order.
pub fn results_for(bucket: KeywordBucket) -> Vec<ResultEntry> {
    let mut results = catalog::entries(bucket).to_vec();
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}

/// Strips surrounding whitespace, counting a byte-order mark as whitespace
/// the way a browser's `String.prototype.trim` does.
fn trim_query(query: &str) -> &str {
    query.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Runs the demo for a committed query.
///
/// Blank or whitespace-only input yields [`DemoOutcome::Ignored`]; any other
/// input always renders something.
pub fn search(query: &str) -> DemoOutcome {
    let query = trim_query(query);
    if query.is_empty() {
        return DemoOutcome::Ignored;
    }

    let bucket = classify(query);
    let entries = results_for(bucket);
    debug!(%bucket, count = entries.len(), "demo query '{}'", query);

    let results = if entries.is_empty() {
        DemoResults::Empty
    } else {
        DemoResults::Results(entries.iter().map(ResultView::from).collect())
    };

    DemoOutcome::Rendered { bucket, results }
}
