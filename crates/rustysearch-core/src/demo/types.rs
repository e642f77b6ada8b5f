use std::fmt;

/// A pre-authored search hit shown by the landing page demo.
///
/// Entries are compiled into the binary and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultEntry {
    /// Repository-relative path of the fictitious source file
    pub file_path: &'static str,
    /// 1-based line number of the snippet
    pub line_number: u32,
    /// Relevance in `[0, 1]`
    pub score: f32,
    /// The matching source line
    pub snippet: &'static str,
    /// One-sentence explanation of why the line matched
    pub description: &'static str,
}

impl ResultEntry {
    /// Relevance as a whole percentage (`score * 100`, rounded half away from zero).
    pub fn relevance_percent(&self) -> u32 {
        (self.score * 100.0).round() as u32
    }
}

/// Fixed category a free-text query is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordBucket {
    Authentication,
    Database,
    Api,
    /// Fallback for anything that matches no keyword set
    General,
}

impl KeywordBucket {
    /// Buckets with keyword sets, in the order they are tested.
    pub const PRIORITY: [KeywordBucket; 3] = [
        KeywordBucket::Authentication,
        KeywordBucket::Database,
        KeywordBucket::Api,
    ];

    /// Substrings that select this bucket. Empty for [`KeywordBucket::General`].
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            KeywordBucket::Authentication => &["authentication", "login", "auth"],
            KeywordBucket::Database => &["database", "db", "connection"],
            KeywordBucket::Api => &["api", "endpoint", "rest"],
            KeywordBucket::General => &[],
        }
    }
}

impl fmt::Display for KeywordBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeywordBucket::Authentication => "authentication",
            KeywordBucket::Database => "database",
            KeywordBucket::Api => "api",
            KeywordBucket::General => "general",
        };
        f.write_str(name)
    }
}

/// Display-ready projection of a [`ResultEntry`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub file_path: String,
    pub line_label: String,
    pub relevance_percent: u32,
    pub match_label: String,
    pub snippet: String,
    pub description: String,
}

impl From<&ResultEntry> for ResultView {
    fn from(entry: &ResultEntry) -> Self {
        let relevance_percent = entry.relevance_percent();
        Self {
            file_path: entry.file_path.to_string(),
            line_label: format!("Line {}", entry.line_number),
            relevance_percent,
            match_label: format!("{}% match", relevance_percent),
            snippet: entry.snippet.to_string(),
            description: entry.description.to_string(),
        }
    }
}

/// What the results container should show after a committed query.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoResults {
    Results(Vec<ResultView>),
    /// "No results found" placeholder
    Empty,
}

/// Outcome of committing a query in the demo input.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoOutcome {
    /// Blank query: leave the results container as it is
    Ignored,
    /// Replace the container's contents
    Rendered {
        bucket: KeywordBucket,
        results: DemoResults,
    },
}
