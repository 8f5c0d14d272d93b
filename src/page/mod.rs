//! Page types: metadata, routing, and storage.

mod meta;
mod route;
mod store;

pub use meta::PageMeta;
pub use route::{PageRoute, canonical_path};
pub use store::{ContentItem, ItemSummary, PageStore};

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
