//! Filename parsing.
//!
//! Corpus filenames follow a loose `NN-topic-words.md` convention. The
//! slug is the lower-cased stem with whitespace hyphenated; the
//! fallback title drops purely numeric ordering tokens and splits
//! camelCase words. Parsing is total: degenerate names produce empty
//! slugs and titles rather than errors.

/// Extension (without the dot) of every corpus document.
pub const DOC_EXTENSION: &str = "md";

/// Slug, fallback title, and source filename for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilename {
    /// Stable identifier: lower-cased stem, whitespace hyphenated
    pub slug: String,
    /// Human title derived from the stem
    pub title: String,
    /// The filename the fields were derived from
    pub filename: String,
}

/// Filename without the document extension.
pub fn stem(filename: &str) -> &str {
    filename.strip_suffix(".md").unwrap_or(filename)
}

/// Derive slug and fallback title from a filename.
pub fn parse_filename(filename: &str) -> ParsedFilename {
    let stem = stem(filename);

    let title_words: Vec<&str> = stem
        .split('-')
        .filter(|part| !is_numeric_token(part))
        .collect();

    ParsedFilename {
        slug: hyphenate(&stem.to_lowercase()),
        title: split_camel(&title_words.join(" ")),
        filename: filename.to_string(),
    }
}

fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// Replace every whitespace run with a single hyphen.
fn hyphenate(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_whitespace = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// Insert a space at each lowercase-to-uppercase boundary.
fn split_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_uppercase() && prev_lower {
            out.push(' ');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        out.push(c);
    }
    out
}
