use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::language::Language;

/// A text value stored once per language, or legacy content that was
/// already localized upstream and passes through unchanged.
///
/// Decoding is shape-tolerant: a JSON string becomes `Plain`, an object
/// contributes its `id`/`en` members, and anything else collapses to an
/// empty pair rather than failing the enclosing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BilingualText {
    Plain(String),
    Pair { id: String, en: String },
}

impl Default for BilingualText {
    fn default() -> Self {
        BilingualText::Pair {
            id: String::new(),
            en: String::new(),
        }
    }
}

impl BilingualText {
    pub fn new(id: impl Into<String>, en: impl Into<String>) -> Self {
        BilingualText::Pair {
            id: id.into(),
            en: en.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        BilingualText::Plain(text.into())
    }

    /// Resolve the value for one language. Pairs fall back to Indonesian,
    /// then to the empty string; plain values pass through for any language.
    pub fn get(&self, language: Language) -> &str {
        match self {
            BilingualText::Plain(text) => text,
            BilingualText::Pair { id, en } => {
                let preferred = match language {
                    Language::Indonesian => id,
                    Language::English => en,
                };
                if !preferred.trim().is_empty() {
                    preferred
                } else if !id.trim().is_empty() {
                    id
                } else {
                    ""
                }
            }
        }
    }

    /// One side of a pair, without fallback. Plain values count as
    /// Indonesian content; their English side is empty.
    pub fn side(&self, language: Language) -> &str {
        match (self, language) {
            (BilingualText::Plain(text), Language::Indonesian) => text,
            (BilingualText::Plain(_), Language::English) => "",
            (BilingualText::Pair { id, .. }, Language::Indonesian) => id,
            (BilingualText::Pair { en, .. }, Language::English) => en,
        }
    }

    /// True only when both languages carry text. A plain value cannot prove
    /// both sides exist and counts as incomplete.
    pub fn is_complete(&self) -> bool {
        match self {
            BilingualText::Plain(_) => false,
            BilingualText::Pair { id, en } => {
                !id.trim().is_empty() && !en.trim().is_empty()
            }
        }
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => BilingualText::Plain(text),
            Value::Object(map) => BilingualText::Pair {
                id: string_member(&map, "id"),
                en: string_member(&map, "en"),
            },
            _ => BilingualText::default(),
        }
    }
}

impl<'de> Deserialize<'de> for BilingualText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(BilingualText::from_value(Value::deserialize(deserializer)?))
    }
}

/// List-valued counterpart of [`BilingualText`]. Presence per language is
/// list non-emptiness rather than trimmed-string non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BilingualArray {
    Plain(Vec<String>),
    Pair { id: Vec<String>, en: Vec<String> },
}

impl Default for BilingualArray {
    fn default() -> Self {
        BilingualArray::Pair {
            id: Vec::new(),
            en: Vec::new(),
        }
    }
}

impl BilingualArray {
    pub fn new(id: Vec<String>, en: Vec<String>) -> Self {
        BilingualArray::Pair { id, en }
    }

    pub fn plain(items: Vec<String>) -> Self {
        BilingualArray::Plain(items)
    }

    /// Resolve the list for one language, falling back to Indonesian and
    /// then to the empty list. Plain lists pass through unchanged.
    pub fn get(&self, language: Language) -> &[String] {
        match self {
            BilingualArray::Plain(items) => items,
            BilingualArray::Pair { id, en } => {
                let preferred = match language {
                    Language::Indonesian => id,
                    Language::English => en,
                };
                if !preferred.is_empty() {
                    preferred
                } else if !id.is_empty() {
                    id
                } else {
                    &[]
                }
            }
        }
    }

    /// One side of a pair, without fallback. Plain lists count as
    /// Indonesian content.
    pub fn side(&self, language: Language) -> &[String] {
        match (self, language) {
            (BilingualArray::Plain(items), Language::Indonesian) => items,
            (BilingualArray::Plain(_), Language::English) => &[],
            (BilingualArray::Pair { id, .. }, Language::Indonesian) => id,
            (BilingualArray::Pair { en, .. }, Language::English) => en,
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            BilingualArray::Plain(_) => false,
            BilingualArray::Pair { id, en } => !id.is_empty() && !en.is_empty(),
        }
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => BilingualArray::Plain(string_items(items)),
            Value::Object(map) => BilingualArray::Pair {
                id: array_member(&map, "id"),
                en: array_member(&map, "en"),
            },
            _ => BilingualArray::default(),
        }
    }
}

impl<'de> Deserialize<'de> for BilingualArray {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(BilingualArray::from_value(Value::deserialize(deserializer)?))
    }
}

fn string_member(map: &serde_json::Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn array_member(map: &serde_json::Map<String, Value>, key: &str) -> Vec<String> {
    match map.get(key) {
        Some(Value::Array(items)) => string_items(items.clone()),
        _ => Vec::new(),
    }
}

fn string_items(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(text),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_prefers_requested_language() {
        let value = BilingualText::new("Desa Wisata", "Tourist Village");
        assert_eq!(value.get(Language::Indonesian), "Desa Wisata");
        assert_eq!(value.get(Language::English), "Tourist Village");
    }

    #[test]
    fn empty_english_falls_back_to_indonesian() {
        let value = BilingualText::new("Desa Wisata", "");
        assert_eq!(value.get(Language::English), "Desa Wisata");
    }

    #[test]
    fn both_sides_empty_resolves_to_empty_string() {
        let value = BilingualText::new("", "  ");
        assert_eq!(value.get(Language::Indonesian), "");
        assert_eq!(value.get(Language::English), "");
    }

    #[test]
    fn plain_text_passes_through_for_any_language() {
        let value = BilingualText::plain("Hello");
        assert_eq!(value.get(Language::Indonesian), "Hello");
        assert_eq!(value.get(Language::English), "Hello");
    }

    #[test]
    fn completeness_requires_both_sides() {
        assert!(BilingualText::new("a", "b").is_complete());
        assert!(!BilingualText::new("a", "").is_complete());
        assert!(!BilingualText::new("", "").is_complete());
        assert!(!BilingualText::plain("already localized").is_complete());
    }

    #[test]
    fn array_falls_back_like_text() {
        let value = BilingualArray::new(vec!["satu".into(), "dua".into()], vec![]);
        assert_eq!(value.get(Language::English), &["satu", "dua"]);

        let plain = BilingualArray::plain(vec!["one".into()]);
        assert_eq!(plain.get(Language::English), &["one"]);
        assert!(!plain.is_complete());
    }

    #[test]
    fn decodes_string_object_and_garbage() {
        let plain: BilingualText = serde_json::from_str("\"Hello\"").unwrap();
        assert_eq!(plain, BilingualText::plain("Hello"));

        let pair: BilingualText =
            serde_json::from_str(r#"{"id": "Halo", "en": "Hello"}"#).unwrap();
        assert_eq!(pair, BilingualText::new("Halo", "Hello"));

        // Malformed shapes decode to an empty pair instead of failing.
        let garbage: BilingualText = serde_json::from_str("42").unwrap();
        assert_eq!(garbage, BilingualText::default());

        let partial: BilingualText = serde_json::from_str(r#"{"en": "Hello"}"#).unwrap();
        assert_eq!(partial, BilingualText::new("", "Hello"));
    }

    #[test]
    fn serializes_back_to_wire_shape() {
        let pair = BilingualText::new("Halo", "Hello");
        assert_eq!(
            serde_json::to_value(&pair).unwrap(),
            serde_json::json!({"id": "Halo", "en": "Hello"})
        );

        let plain = BilingualText::plain("Hello");
        assert_eq!(serde_json::to_value(&plain).unwrap(), serde_json::json!("Hello"));
    }

    #[test]
    fn array_decodes_object_and_legacy_list() {
        let pair: BilingualArray =
            serde_json::from_str(r#"{"id": ["satu"], "en": ["one"]}"#).unwrap();
        assert!(pair.is_complete());

        let plain: BilingualArray = serde_json::from_str(r#"["one", "two"]"#).unwrap();
        assert_eq!(plain, BilingualArray::plain(vec!["one".into(), "two".into()]));

        let garbage: BilingualArray = serde_json::from_str("true").unwrap();
        assert_eq!(garbage, BilingualArray::default());
    }
}
