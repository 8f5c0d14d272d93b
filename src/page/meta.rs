//! Page metadata from Markdown front matter.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::JsonMap;
use crate::utils::date::DateTimeUtc;

/// Scalar as text; numbers and booleans are stringified, other shapes dropped.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => {
            crate::debug!("meta"; "expected text, ignored `{}`", other);
            None
        }
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(scalar_text)
}

/// Deserialize tags, treating `null` as empty and a bare scalar as one tag
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    })
}

/// Deserialize a field, falling back to its default on a type mismatch.
fn deserialize_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_else(|e| {
        crate::debug!("meta"; "front matter field ignored: {}", e);
        T::default()
    }))
}

/// Page metadata from front matter in Markdown files
///
/// # Standard Fields
///
/// | Field         | Type          | Description                        |
/// |---------------|---------------|------------------------------------|
/// | `title`       | `String`      | Page title                         |
/// | `description` | `String`      | Brief description (alias `summary`) |
/// | `date`        | `String`      | Publication date                   |
/// | `layout`      | `String`      | Layout name (`home` marks the home page) |
/// | `draft`       | `bool`        | Draft status (default: false)      |
/// | `tags`        | `Vec<String>` | Categorization tags                |
///
/// # Custom Fields (`extra`)
///
/// Any additional fields are captured in `extra` as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageMeta {
    #[serde(deserialize_with = "deserialize_text")]
    pub title: Option<String>,
    #[serde(alias = "summary", deserialize_with = "deserialize_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub layout: Option<String>,
    #[serde(deserialize_with = "deserialize_or_default")]
    pub draft: bool,
    #[serde(deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    /// Additional user-defined fields.
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl PageMeta {
    /// Build metadata from a front matter object.
    ///
    /// A field with the wrong type falls back to its default on its own;
    /// the remaining fields are kept.
    pub fn from_json(mut map: JsonMap) -> Self {
        if map.contains_key("description") {
            map.remove("summary");
        }
        match serde_json::from_value(Value::Object(map.clone())) {
            Ok(meta) => meta,
            Err(e) => {
                crate::debug!("meta"; "front matter fields ignored: {}", e);
                Self {
                    extra: map,
                    ..Default::default()
                }
            }
        }
    }

    /// Publication date; unparseable values count as absent.
    pub fn parsed_date(&self) -> Option<DateTimeUtc> {
        self.date.as_deref().and_then(DateTimeUtc::parse)
    }

    /// Non-empty description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meta(value: serde_json::Value) -> PageMeta {
        let serde_json::Value::Object(map) = value else {
            panic!("expected object");
        };
        PageMeta::from_json(map)
    }

    #[test]
    fn test_page_meta_default() {
        let meta = PageMeta::default();
        assert!(meta.title.is_none());
        assert!(!meta.draft);
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_page_meta_deserialize() {
        let meta = meta(json!({"title": "Hello", "draft": true, "tags": ["rust", "web"]}));
        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert!(meta.draft);
        assert_eq!(meta.tags, vec!["rust", "web"]);
    }

    #[test]
    fn test_page_meta_extra_fields() {
        let meta = meta(json!({"title": "Test", "custom_field": "value", "number": 42}));
        assert_eq!(
            meta.extra.get("custom_field").and_then(|v| v.as_str()),
            Some("value")
        );
        assert_eq!(meta.extra.get("number").and_then(|v| v.as_i64()), Some(42));
    }

    #[test]
    fn test_page_meta_tags_forms() {
        assert!(meta(json!({"tags": null})).tags.is_empty());
        assert_eq!(meta(json!({"tags": "rust"})).tags, vec!["rust"]);
    }

    #[test]
    fn test_summary_alias() {
        let meta = meta(json!({"summary": "Short"}));
        assert_eq!(meta.description(), Some("Short"));
    }

    #[test]
    fn test_wrong_types_tolerated() {
        let meta = meta(json!({
            "title": "Kept",
            "date": "2024-06-01",
            "draft": "yes",
            "tags": {"nested": true},
        }));
        assert_eq!(meta.title.as_deref(), Some("Kept"));
        assert_eq!(meta.date.as_deref(), Some("2024-06-01"));
        assert!(!meta.draft);
        assert!(meta.tags.is_empty());
        assert!(!meta.extra.contains_key("title"));
        assert!(!meta.extra.contains_key("draft"));
    }

    #[test]
    fn test_scalar_fields_stringified() {
        let meta = meta(json!({"title": 2024, "layout": ["home"], "tags": ["a", 1, null]}));
        assert_eq!(meta.title.as_deref(), Some("2024"));
        assert!(meta.layout.is_none());
        assert_eq!(meta.tags, vec!["a", "1"]);
    }

    #[test]
    fn test_description_wins_over_summary() {
        let meta = meta(json!({"description": "Long", "summary": "Short"}));
        assert_eq!(meta.description(), Some("Long"));
    }

    #[test]
    fn test_parsed_date() {
        let good = meta(json!({"date": "2024-06-01"}));
        assert_eq!(good.parsed_date(), Some(DateTimeUtc::from_ymd(2024, 6, 1)));

        let bad = meta(json!({"date": "last tuesday"}));
        assert_eq!(bad.parsed_date(), None);
    }

    #[test]
    fn test_blank_description_ignored() {
        assert_eq!(meta(json!({"description": "  "})).description(), None);
    }
}
