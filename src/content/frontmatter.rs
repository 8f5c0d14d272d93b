//! Front matter extraction from YAML (`---`) or TOML (`+++`) blocks.

use serde_json::Value;

use crate::page::{JsonMap, PageMeta};

/// Split a Markdown document into its metadata and body.
///
/// Documents without front matter get default metadata and the full text as
/// body. Malformed YAML or TOML is logged and treated as absent.
pub fn extract(content: &str) -> (PageMeta, &str) {
    let Some((fm, body, is_toml)) = detect(content) else {
        return (PageMeta::default(), content);
    };

    let parsed = if is_toml {
        parse_toml(fm).map_err(|e| e.to_string())
    } else {
        parse_yaml(fm)
    };
    let map = parsed.unwrap_or_else(|e| {
        let format = if is_toml { "TOML" } else { "YAML" };
        crate::debug!("meta"; "invalid {} front matter: {}", format, e);
        JsonMap::new()
    });

    (PageMeta::from_json(map), body)
}

/// Detect and extract front matter.
/// Returns `(frontmatter, body, is_toml)` if found.
fn detect(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        let Some(rest) = trimmed.strip_prefix(fence) else {
            continue;
        };
        if !rest.starts_with(['\n', '\r']) {
            continue;
        }
        let closing = format!("\n{fence}");
        let end = rest.find(&closing)?;
        let fm = rest[..end].trim();
        let body = rest[end + closing.len()..]
            .trim_start_matches(['\r', '\n'].as_slice());
        return Some((fm, body, is_toml));
    }

    None
}

/// Parse YAML front matter into a JSON object.
///
/// An empty block is an empty map. A block that is not a mapping is an error.
fn parse_yaml(content: &str) -> Result<JsonMap, String> {
    if content.trim().is_empty() {
        return Ok(JsonMap::new());
    }
    match serde_yaml::from_str::<Value>(content).map_err(|e| e.to_string())? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(JsonMap::new()),
        other => Err(format!("expected a mapping, found `{other}`")),
    }
}

/// Parse TOML front matter into a JSON object.
fn parse_toml(content: &str) -> Result<JsonMap, toml::de::Error> {
    let table: toml::Table = toml::from_str(content)?;
    Ok(table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect())
}

/// Convert TOML values, rendering datetimes as their string form.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(n) => Value::Number(n.into()),
        toml::Value::Float(f) => {
            serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number)
        }
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaml_frontmatter() {
        let content = "---\ntitle: Hello\ndate: 2024-01-01\ntags: [a, b]\n---\n\n# Body";
        let (meta, body) = extract(content);

        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.date.as_deref(), Some("2024-01-01"));
        assert_eq!(meta.tags, vec!["a", "b"]);
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_yaml_quoted_title_with_comma() {
        let (meta, _) = extract("---\ntitle: \"Hello, world\"\nlayout: home\n---\n");
        assert_eq!(meta.title.as_deref(), Some("Hello, world"));
        assert_eq!(meta.layout.as_deref(), Some("home"));

        let (meta, _) = extract("---\ntitle: Hello, world\n---\n");
        assert_eq!(meta.title.as_deref(), Some("Hello, world"));
    }

    #[test]
    fn test_yaml_folded_description() {
        let content = "---\ntitle: Post\ndescription: >\n  Folded\n  text\n---\nbody";
        let (meta, body) = extract(content);
        assert_eq!(meta.description().map(str::trim_end), Some("Folded text"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_yaml_literal_block() {
        let (meta, _) = extract("---\ndescription: |\n  one\n  two\n---\n");
        assert_eq!(meta.description().map(str::trim_end), Some("one\ntwo"));
    }

    #[test]
    fn test_yaml_bare_string_tag() {
        let (meta, _) = extract("---\ntags: rust\n---\n");
        assert_eq!(meta.tags, vec!["rust"]);
    }

    #[test]
    fn test_invalid_yaml_treated_as_absent() {
        let (meta, body) = extract("---\ntitle: [unclosed\n---\ntext");
        assert_eq!(meta, PageMeta::default());
        assert_eq!(body, "text");

        let (meta, _) = extract("---\njust a string\n---\n");
        assert_eq!(meta, PageMeta::default());
    }

    #[test]
    fn test_bad_field_keeps_others() {
        let (meta, _) = extract("---\ntitle: Post\ndate: 2024-06-01\ndraft: yes\n---\n");
        assert_eq!(meta.title.as_deref(), Some("Post"));
        assert!(meta.parsed_date().is_some());
        assert!(!meta.draft);

        let (meta, _) = extract("+++\ntitle = 2024\ndate = 2024-06-01\n+++\n");
        assert_eq!(meta.title.as_deref(), Some("2024"));
        assert!(meta.parsed_date().is_some());
    }

    #[test]
    fn test_yaml_block_list() {
        let (meta, _) = extract("---\ntags:\n  - rust\n  - 'web'\ndraft: true\n---\nbody");
        assert_eq!(meta.tags, vec!["rust", "web"]);
        assert!(meta.draft);
    }

    #[test]
    fn test_yaml_empty_value() {
        let (meta, _) = extract("---\ntitle:\ndescription: Kept\n---\n");
        assert!(meta.title.is_none());
        assert_eq!(meta.description(), Some("Kept"));
    }

    #[test]
    fn test_toml_frontmatter() {
        let content = "+++\ntitle = \"Hello\"\ntags = [\"a\", \"b\"]\n+++\n\n# Body";
        let (meta, body) = extract(content);

        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.tags, vec!["a", "b"]);
        assert_eq!(body, "# Body");
    }

    #[test]
    fn test_toml_datetime_becomes_string() {
        let (meta, _) = extract("+++\ndate = 2024-06-01\n+++\n");
        assert_eq!(meta.date.as_deref(), Some("2024-06-01"));
        assert!(meta.parsed_date().is_some());
    }

    #[test]
    fn test_invalid_toml_treated_as_absent() {
        let (meta, body) = extract("+++\ntitle = \n+++\ntext");
        assert_eq!(meta, PageMeta::default());
        assert_eq!(body, "text");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just content";
        let (meta, body) = extract(content);
        assert_eq!(meta, PageMeta::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_frontmatter() {
        let content = "---\ntitle: Hello\n";
        let (meta, body) = extract(content);
        assert!(meta.title.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_horizontal_rule_is_not_frontmatter() {
        let content = "----\ntext\n---\n";
        let (meta, body) = extract(content);
        assert!(meta.title.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_yaml_extra_fields() {
        let content =
            "---\ntitle: Hello\ncustom: world\ncount: 42\nflag: true\nitems: [x, y, z]\n---\n";
        let (meta, _) = extract(content);

        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.extra.get("custom"), Some(&json!("world")));
        assert_eq!(meta.extra.get("count"), Some(&json!(42)));
        assert_eq!(meta.extra.get("flag"), Some(&json!(true)));
        assert_eq!(meta.extra.get("items"), Some(&json!(["x", "y", "z"])));
    }

    #[test]
    fn test_toml_extra_fields() {
        let content = "+++\ntitle = \"Hello\"\ncustom = \"world\"\ncount = 42\n+++\n";
        let (meta, _) = extract(content);

        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.extra.get("custom"), Some(&json!("world")));
        assert_eq!(meta.extra.get("count"), Some(&json!(42)));
    }
}
