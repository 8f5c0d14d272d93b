//! Schema.org structured data.

use serde_json::json;

use super::HeadTag;

/// Page kind in structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    WebSite,
    Article,
}

impl SchemaType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WebSite => "WebSite",
            Self::Article => "Article",
        }
    }
}

/// Fields of a structured-data record.
#[derive(Debug, Clone, Copy)]
pub struct StructuredData<'a> {
    pub kind: SchemaType,
    pub name: &'a str,
    pub description: &'a str,
    pub url: &'a str,
    pub author_name: &'a str,
    pub author_url: &'a str,
}

impl StructuredData<'_> {
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "@context": "https://schema.org",
            "@type": self.kind.as_str(),
            "name": self.name,
            "description": self.description,
            "url": self.url,
            "author": {
                "@type": "Person",
                "name": self.author_name,
                "url": self.author_url,
            },
        })
    }

    /// `<script type="application/ld+json">` with `<` escaped so the
    /// payload cannot close the script element.
    pub fn to_tag(&self) -> HeadTag {
        let json = self.to_json().to_string().replace('<', "\\u003c");
        HeadTag::new("script")
            .with_attr("type", "application/ld+json")
            .with_content(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(kind: SchemaType, name: &'static str) -> StructuredData<'static> {
        StructuredData {
            kind,
            name,
            description: "",
            url: "https://maoya.dev/blog/post.html",
            author_name: "Mao Ya",
            author_url: "https://maoya.dev",
        }
    }

    #[test]
    fn test_json_fields_in_order() {
        let json = data(SchemaType::Article, "Post").to_json().to_string();
        assert_eq!(
            json,
            r#"{"@context":"https://schema.org","@type":"Article","name":"Post","description":"","url":"https://maoya.dev/blog/post.html","author":{"@type":"Person","name":"Mao Ya","url":"https://maoya.dev"}}"#
        );
    }

    #[test]
    fn test_tag_escapes_script_close() {
        let tag = data(SchemaType::WebSite, "</script><b>").to_tag();
        assert_eq!(tag.name, "script");
        assert_eq!(tag.attr("type"), Some("application/ld+json"));
        let content = tag.content.unwrap();
        assert!(!content.contains('<'));
        assert!(content.contains(r"\u003c/script>"));

        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["name"], "</script><b>");
        assert_eq!(parsed["@type"], "WebSite");
    }
}
