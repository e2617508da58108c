//! Metadata-header codec.
//!
//! Documents open with an optional header block delimited by `---`
//! lines. Decoding uses the YAML front matter parser; encoding writes
//! the canonical block syntax back out: scalar fields as `key: value`
//! lines, list fields as a key line followed by indented `- item`
//! lines. Values that YAML would reinterpret (numbers, booleans,
//! leading indicators) are double-quoted so a decode of the encoded
//! header always yields the same field values.

use gray_matter::engine::YAML;
use gray_matter::{Matter, Pod};

use curator_types::{MetaValue, Metadata};

use crate::error::CorpusError;

/// Parses and serializes metadata header blocks.
pub struct MatterCodec {
    matter: Matter<YAML>,
}

impl MatterCodec {
    pub fn new() -> Self {
        Self {
            matter: Matter::<YAML>::new(),
        }
    }

    /// Split raw file contents into the header mapping and body.
    ///
    /// A file without a header decodes to an empty mapping and its
    /// full contents as the body. A header that is present but not a
    /// key/value mapping of scalars and string lists is malformed.
    pub fn decode(&self, filename: &str, raw: &str) -> Result<(Metadata, String), CorpusError> {
        let parsed = self.matter.parse(raw);

        if parsed.matter.trim().is_empty() {
            return Ok((Metadata::new(), parsed.content));
        }

        let map = match parsed.data {
            Some(Pod::Hash(map)) => map,
            Some(_) => {
                return Err(CorpusError::malformed(
                    filename,
                    "header is not a key/value mapping",
                ))
            }
            None => {
                return Err(CorpusError::malformed(filename, "header is not valid YAML"))
            }
        };

        let mut fields = Vec::with_capacity(map.len());
        for (key, pod) in map {
            let value = pod_value(&pod).ok_or_else(|| {
                CorpusError::malformed(
                    filename,
                    format!("unsupported value for header field '{key}'"),
                )
            })?;
            fields.push((key, value));
        }

        Ok((fields.into_iter().collect(), parsed.content))
    }

    /// Serialize a header mapping into canonical block syntax, without
    /// the surrounding delimiter lines.
    pub fn encode(&self, meta: &Metadata) -> String {
        let mut lines = Vec::with_capacity(meta.len());
        for (key, value) in meta.iter() {
            match value {
                MetaValue::String(s) => lines.push(format!("{key}: {}", scalar(s))),
                MetaValue::List(items) if items.is_empty() => {
                    lines.push(format!("{key}: []"));
                }
                MetaValue::List(items) => {
                    lines.push(format!("{key}:"));
                    for item in items {
                        lines.push(format!("  - {}", scalar(item)));
                    }
                }
            }
        }
        lines.join("\n")
    }

    /// Assemble the canonical on-disk document: header block, one
    /// blank line, then the body.
    pub fn compose(&self, meta: &Metadata, body: &str) -> String {
        format!("---\n{}\n---\n\n{}", self.encode(meta), body)
    }
}

impl Default for MatterCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a parsed YAML value as a header value. Nested mappings have
/// no representation here and report as unsupported.
fn pod_value(pod: &Pod) -> Option<MetaValue> {
    match pod {
        Pod::Array(items) => items
            .iter()
            .map(pod_scalar)
            .collect::<Option<Vec<String>>>()
            .map(MetaValue::List),
        other => pod_scalar(other).map(MetaValue::String),
    }
}

fn pod_scalar(pod: &Pod) -> Option<String> {
    match pod {
        Pod::String(s) => Some(s.clone()),
        Pod::Integer(i) => Some(i.to_string()),
        Pod::Float(f) => Some(f.to_string()),
        Pod::Boolean(b) => Some(b.to_string()),
        Pod::Null => Some(String::new()),
        _ => None,
    }
}

fn scalar(s: &str) -> String {
    if needs_quoting(s) {
        quote(s)
    } else {
        s.to_string()
    }
}

/// Characters that start a YAML construct when they lead a plain
/// scalar.
const SPECIAL_LEAD: &[char] = &[
    '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@', '`', '[', ']', '{', '}', ',', '-', '?', ':',
];

fn needs_quoting(s: &str) -> bool {
    if s.is_empty() || s.trim() != s {
        return true;
    }
    if s.contains(['\n', '\r', '\t', '"', '\\']) {
        return true;
    }
    if s.contains(": ") || s.ends_with(':') || s.contains(" #") {
        return true;
    }
    if s.starts_with(SPECIAL_LEAD) {
        return true;
    }
    // Strings YAML would read back as a different type
    if s.parse::<i64>().is_ok() || s.parse::<f64>().is_ok() {
        return true;
    }
    matches!(
        s.to_ascii_lowercase().as_str(),
        "true" | "false" | "null" | "yes" | "no" | "on" | "off" | "~"
    )
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_without_header() {
        let codec = MatterCodec::new();
        let (meta, body) = codec.decode("a.md", "# Title\n\nBody text.\n").unwrap();
        assert!(meta.is_empty());
        assert!(body.contains("Body text."));
    }

    #[test]
    fn test_decode_header_fields() {
        let codec = MatterCodec::new();
        let raw = "---\ntitle: Deploy Guide\ntags:\n  - go\n  - docker\n---\n\nBody.\n";
        let (meta, body) = codec.decode("a.md", raw).unwrap();

        assert_eq!(meta.get_str("title"), Some("Deploy Guide"));
        assert_eq!(
            meta.get_items("tags"),
            vec!["go".to_string(), "docker".to_string()]
        );
        assert!(body.contains("Body."));
    }

    #[test]
    fn test_decode_non_mapping_header_is_malformed() {
        let codec = MatterCodec::new();
        let raw = "---\n- just\n- a list\n---\n\nBody.\n";
        let err = codec.decode("bad.md", raw).unwrap_err();
        assert!(matches!(err, CorpusError::Malformed { .. }));
        assert!(err.to_string().contains("bad.md"));
    }

    #[test]
    fn test_decode_scalar_types_render_as_strings() {
        let codec = MatterCodec::new();
        let raw = "---\ntitle: Guide\nrevision: 3\ndraft: true\n---\n\nBody.\n";
        let (meta, _) = codec.decode("a.md", raw).unwrap();

        assert_eq!(meta.get_str("revision"), Some("3"));
        assert_eq!(meta.get_str("draft"), Some("true"));
    }

    #[test]
    fn test_encode_scalars_and_lists() {
        let codec = MatterCodec::new();
        let mut meta = Metadata::new();
        meta.set("title", "Deploy Guide");
        meta.set(
            "tags",
            MetaValue::List(vec!["go".to_string(), "docker".to_string()]),
        );
        meta.set("date", "2024-01-15");

        let block = codec.encode(&meta);
        assert_eq!(
            block,
            "title: Deploy Guide\ntags:\n  - go\n  - docker\ndate: 2024-01-15"
        );
    }

    #[test]
    fn test_encode_quotes_reinterpretable_scalars() {
        let codec = MatterCodec::new();
        let mut meta = Metadata::new();
        meta.set("revision", "007");
        meta.set("draft", "true");
        meta.set("note", "contains: colon");

        let block = codec.encode(&meta);
        assert_eq!(
            block,
            "revision: \"007\"\ndraft: \"true\"\nnote: \"contains: colon\""
        );
    }

    #[test]
    fn test_encode_empty_list() {
        let codec = MatterCodec::new();
        let mut meta = Metadata::new();
        meta.set("tags", MetaValue::List(Vec::new()));
        assert_eq!(codec.encode(&meta), "tags: []");
    }

    #[test]
    fn test_compose_places_blank_line_after_header() {
        let codec = MatterCodec::new();
        let mut meta = Metadata::new();
        meta.set("title", "T");

        let doc = codec.compose(&meta, "Body.\n");
        assert_eq!(doc, "---\ntitle: T\n---\n\nBody.\n");
    }

    #[test]
    fn test_round_trip_preserves_values() {
        let codec = MatterCodec::new();
        let mut meta = Metadata::new();
        meta.set("title", "A: colon title");
        meta.set("revision", "007");
        meta.set(
            "tags",
            MetaValue::List(vec!["go".to_string(), "version control".to_string()]),
        );

        let doc = codec.compose(&meta, "Body.\n");
        let (decoded, body) = codec.decode("a.md", &doc).unwrap();

        assert_eq!(decoded.get_str("title"), Some("A: colon title"));
        assert_eq!(decoded.get_str("revision"), Some("007"));
        assert_eq!(
            decoded.get_items("tags"),
            vec!["go".to_string(), "version control".to_string()]
        );
        assert!(body.contains("Body."));
    }
}
