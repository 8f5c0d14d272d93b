//! Head tag model, HTML rendering and `</head>` injection.

use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use regex::Regex;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use std::{
    fmt,
    io::{Cursor, Write},
    sync::LazyLock,
};

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &["base", "link", "meta"];

/// Elements whose content is emitted without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

const BLOCK_START: &str = "<!-- folio:head -->";
const BLOCK_END: &str = "<!-- /folio:head -->";

/// Ordered attribute list; serialized as a map in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(String, String)>);

impl Attrs {
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for Attrs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Attrs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttrsVisitor;

        impl<'de> Visitor<'de> for AttrsVisitor {
            type Value = Attrs;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a table of attribute names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Attrs, A::Error> {
                let mut attrs = Attrs::default();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    attrs.insert(key, value);
                }
                Ok(attrs)
            }
        }

        deserializer.deserialize_map(AttrsVisitor)
    }
}

/// A single `<head>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag {
    /// Element name (`meta`, `link`, `script`, ...).
    #[serde(rename = "tag")]
    pub name: String,
    #[serde(default)]
    pub attrs: Attrs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl HeadTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Attrs::default(),
            content: None,
        }
    }

    /// `<meta property="..." content="...">`
    pub fn meta_property(property: &str, content: impl Into<String>) -> Self {
        Self::new("meta")
            .with_attr("property", property)
            .with_attr("content", content)
    }

    /// `<meta name="..." content="...">`
    pub fn meta_name(name: &str, content: impl Into<String>) -> Self {
        Self::new("meta")
            .with_attr("name", name)
            .with_attr("content", content)
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[cfg(test)]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    fn write_to(&self, writer: &mut Writer<Cursor<Vec<u8>>>) -> Result<()> {
        let mut elem = BytesStart::new(self.name.as_str());
        for (key, value) in self.attrs.iter() {
            elem.push_attribute((key, value));
        }

        let is_void = VOID_ELEMENTS.contains(&self.name.as_str());
        match &self.content {
            None if is_void => writer.write_event(Event::Empty(elem))?,
            content => {
                writer.write_event(Event::Start(elem))?;
                if let Some(text) = content {
                    let text = if RAW_TEXT_ELEMENTS.contains(&self.name.as_str()) {
                        BytesText::from_escaped(text.as_str())
                    } else {
                        BytesText::new(text)
                    };
                    writer.write_event(Event::Text(text))?;
                }
                writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
            }
        }
        Ok(())
    }
}

/// Render tags to HTML, one element per line.
pub fn render_tags(tags: &[HeadTag]) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    for tag in tags {
        tag.write_to(&mut writer)?;
        writer.get_mut().write_all(b"\n")?;
    }
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Insert rendered tags right before `</head>`.
///
/// A block injected by a previous run is replaced. Returns `None` when the
/// document has no `</head>`.
pub fn inject_head(html: &str, rendered: &str) -> Option<String> {
    static RE_HEAD_END: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)</head\s*>").unwrap());
    static RE_PREVIOUS: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(&format!(
            r"(?s){}.*?{}\n?",
            regex::escape(BLOCK_START),
            regex::escape(BLOCK_END)
        ))
        .unwrap()
    });

    let html = RE_PREVIOUS.replace(html, "");
    let pos = RE_HEAD_END.find(&html)?.start();

    let mut out = String::with_capacity(html.len() + rendered.len() + 48);
    out.push_str(&html[..pos]);
    out.push_str(BLOCK_START);
    out.push('\n');
    out.push_str(rendered);
    out.push_str(BLOCK_END);
    out.push('\n');
    out.push_str(&html[pos..]);
    Some(out)
}
