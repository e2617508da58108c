//! Weighted multi-field document search.
//!
//! Each query term scores a fixed weight per field it appears in,
//! case-folded, as a substring. Documents scoring zero drop out;
//! ties keep the corpus's date-descending order.

use tracing::debug;

use curator_corpus::DocumentLoader;
use curator_store::CorpusStore;
use curator_types::Document;

use crate::error::SearchError;

const TITLE_WEIGHT: u32 = 10;
const TAGS_WEIGHT: u32 = 7;
const DESCRIPTION_WEIGHT: u32 = 5;
const EXCERPT_WEIGHT: u32 = 3;

/// A document with its relevance score, held only while ranking.
struct ScoredMatch {
    doc: Document,
    score: u32,
}

/// Relevance-ranked search over the whole corpus.
pub struct SearchEngine {
    loader: DocumentLoader,
}

impl SearchEngine {
    pub fn new(store: CorpusStore) -> Self {
        Self {
            loader: DocumentLoader::new(store),
        }
    }

    /// Run a free-text query and return matching documents, best
    /// first.
    ///
    /// Terms split on whitespace; single-character terms are dropped.
    /// An empty or whitespace-only query returns an empty list, not
    /// an error.
    pub fn search(&self, query: &str) -> Result<Vec<Document>, SearchError> {
        let terms: Vec<String> = query
            .split_whitespace()
            .filter(|term| term.chars().count() > 1)
            .map(str::to_lowercase)
            .collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let docs = self.loader.list_all()?;
        let mut matches: Vec<ScoredMatch> = docs
            .into_iter()
            .filter_map(|doc| {
                let score = score(&doc, &terms);
                (score > 0).then_some(ScoredMatch { doc, score })
            })
            .collect();
        matches.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(query, matched = matches.len(), "search complete");
        Ok(matches.into_iter().map(|m| m.doc).collect())
    }
}

fn score(doc: &Document, terms: &[String]) -> u32 {
    let title = doc.title.to_lowercase();
    let tags = doc.tags.join(" ").to_lowercase();
    let description = doc.description.to_lowercase();
    let excerpt = doc.excerpt.to_lowercase();

    let mut total = 0;
    for term in terms {
        if title.contains(term.as_str()) {
            total += TITLE_WEIGHT;
        }
        if tags.contains(term.as_str()) {
            total += TAGS_WEIGHT;
        }
        if description.contains(term.as_str()) {
            total += DESCRIPTION_WEIGHT;
        }
        if excerpt.contains(term.as_str()) {
            total += EXCERPT_WEIGHT;
        }
    }
    total
}
