//! Document loading and field resolution.
//!
//! The loader turns stored files into [`Document`] values with every
//! display field resolved: header values win, then derived fallbacks.
//! Listing skips files that fail to decode so one corrupt document
//! never takes down the whole corpus.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;

use curator_store::CorpusStore;
use curator_types::{Document, Metadata};

use crate::error::CorpusError;
use crate::filename::{parse_filename, DOC_EXTENSION};
use crate::matter::MatterCodec;

/// Header fields the loader resolves into dedicated [`Document`]
/// fields. Everything else passes through as extra metadata.
const RESOLVED_KEYS: [&str; 5] = ["title", "description", "excerpt", "tags", "date"];

/// First body line usable as an excerpt, truncated to 200 characters.
///
/// Blank lines and heading lines never qualify. Returns an empty
/// string when no line does.
pub fn derive_excerpt(body: &str) -> String {
    body.lines()
        .find(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| line.chars().take(200).collect())
        .unwrap_or_default()
}

/// Reads corpus files and resolves them into documents.
pub struct DocumentLoader {
    store: CorpusStore,
    codec: MatterCodec,
}

impl DocumentLoader {
    pub fn new(store: CorpusStore) -> Self {
        Self {
            store,
            codec: MatterCodec::new(),
        }
    }

    /// Read a document file as UTF-8 text.
    pub fn read_raw(&self, filename: &str) -> Result<String, CorpusError> {
        let bytes = self.store.read(filename)?;
        String::from_utf8(bytes)
            .map_err(|_| CorpusError::malformed(filename, "contents are not valid UTF-8"))
    }

    /// Read a document and split it into raw text, header, and body.
    pub fn load_parts(&self, filename: &str) -> Result<(String, Metadata, String), CorpusError> {
        let raw = self.read_raw(filename)?;
        let (meta, body) = self.codec.decode(filename, &raw)?;
        Ok((raw, meta, body))
    }

    /// Load one document with every display field resolved.
    pub fn load(&self, filename: &str) -> Result<Document, CorpusError> {
        let (_, meta, body) = self.load_parts(filename)?;
        let info = self.store.stat(filename)?;
        let parsed = parse_filename(filename);

        let derived = derive_excerpt(&body);
        let excerpt = meta
            .get_str("excerpt")
            .map(str::to_string)
            .unwrap_or_else(|| derived.clone());
        let description = meta
            .get_str("description")
            .or_else(|| meta.get_str("excerpt"))
            .map(str::to_string)
            .unwrap_or(derived);

        let date = meta
            .get_str("date")
            .and_then(parse_date)
            .unwrap_or(info.modified);

        let extra: Metadata = meta
            .iter()
            .filter(|(key, _)| !RESOLVED_KEYS.contains(key))
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();

        Ok(Document {
            title: meta
                .get_str("title")
                .unwrap_or(parsed.title.as_str())
                .to_string(),
            slug: parsed.slug,
            filename: filename.to_string(),
            description,
            excerpt,
            tags: meta.get_items("tags"),
            date,
            modified: info.modified,
            body,
            extra,
        })
    }

    /// Load every document in the corpus, newest first.
    ///
    /// Files that fail to load are logged and skipped. Documents with
    /// equal dates keep filename order, so listings are stable.
    pub fn list_all(&self) -> Result<Vec<Document>, CorpusError> {
        let names = self.store.list(DOC_EXTENSION)?;
        let mut docs = Vec::with_capacity(names.len());
        for name in names {
            match self.load(&name) {
                Ok(doc) => docs.push(doc),
                Err(error) => {
                    warn!(filename = %name, %error, "skipping unreadable document");
                }
            }
        }
        docs.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(docs)
    }

    /// Map a slug to the filename that produces it.
    pub fn resolve(&self, slug: &str) -> Result<String, CorpusError> {
        if slug.trim().is_empty() {
            return Err(CorpusError::InvalidInput(
                "slug must not be empty".to_string(),
            ));
        }
        let names = self.store.list(DOC_EXTENSION)?;
        names
            .into_iter()
            .find(|name| parse_filename(name).slug == slug)
            .ok_or_else(|| CorpusError::NotFound(slug.to_string()))
    }

    /// Load the document addressed by a slug.
    pub fn get_by_slug(&self, slug: &str) -> Result<Document, CorpusError> {
        let filename = self.resolve(slug)?;
        self.load(&filename)
    }
}

/// Parse a header date: RFC 3339 first, then a bare `YYYY-MM-DD`
/// read as midnight UTC.
fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
