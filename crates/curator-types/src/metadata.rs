//! Ordered metadata header mapping.
//!
//! A document's header is a mapping of string keys to scalar or
//! list-of-string values. Key order is significant for serialization:
//! the canonical fields come first, in a fixed order, followed by any
//! extra fields sorted by key so rewrites stay deterministic.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Canonical header fields, in serialization order.
pub const CANONICAL_KEYS: [&str; 5] = ["title", "description", "tags", "date", "last_updated"];

/// A single header value: a scalar string or a list of strings.
///
/// Numbers and booleans from the source header are carried as their
/// string rendering; the distinction is not significant to any
/// operation in this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    /// Scalar value
    String(String),
    /// List of scalar values
    List(Vec<String>),
}

impl MetaValue {
    /// Borrow the scalar value, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::String(s) => Some(s.as_str()),
            MetaValue::List(_) => None,
        }
    }

    /// View the value as a list of items. A scalar lifts to a
    /// single-item list, so `tags: docker` and `tags: [docker]`
    /// read the same.
    pub fn items(&self) -> Vec<String> {
        match self {
            MetaValue::String(s) => vec![s.clone()],
            MetaValue::List(items) => items.clone(),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::String(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::String(value)
    }
}

impl From<Vec<String>> for MetaValue {
    fn from(value: Vec<String>) -> Self {
        MetaValue::List(value)
    }
}

/// An ordered key/value header mapping.
///
/// Unlike a plain map, field order is preserved so a rewritten header
/// always serializes the same way for the same input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Metadata {
    fields: Vec<(String, MetaValue)>,
}

impl Metadata {
    /// Create an empty header.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the header carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when a field with the given key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// Look up a field value.
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Look up a scalar field, filtering out empty strings.
    ///
    /// Empty values count as absent everywhere a default applies, so
    /// `title: ""` falls back the same way a missing title does.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(MetaValue::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Look up a field as a list of items (scalars lift to one item).
    pub fn get_items(&self, key: &str) -> Vec<String> {
        self.get(key).map(MetaValue::items).unwrap_or_default()
    }

    /// Set a field, replacing an existing value in place or appending
    /// a new field at the end.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<MetaValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Remove a field, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<MetaValue> {
        let pos = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(pos).1)
    }

    /// Iterate fields in serialization order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Fields other than the canonical ones, in serialization order.
    pub fn extras(&self) -> impl Iterator<Item = (&str, &MetaValue)> {
        self.iter().filter(|(k, _)| !CANONICAL_KEYS.contains(k))
    }
}

/// Collects fields into canonical order: the known header fields
/// first, then everything else sorted by key.
impl FromIterator<(String, MetaValue)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, MetaValue)>>(iter: I) -> Self {
        let mut rest: Vec<(String, MetaValue)> = iter.into_iter().collect();
        let mut fields = Vec::with_capacity(rest.len());
        for key in CANONICAL_KEYS {
            if let Some(pos) = rest.iter().position(|(k, _)| k == key) {
                fields.push(rest.remove(pos));
            }
        }
        rest.sort_by(|a, b| a.0.cmp(&b.0));
        fields.extend(rest);
        Self { fields }
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Metadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MetadataVisitor;

        impl<'de> Visitor<'de> for MetadataVisitor {
            type Value = Metadata;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a metadata header mapping")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, MetaValue>()? {
                    fields.push(entry);
                }
                Ok(fields.into_iter().collect())
            }
        }

        deserializer.deserialize_map(MetadataVisitor)
    }
}
