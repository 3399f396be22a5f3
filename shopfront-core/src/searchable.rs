use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of content an indexed item represents
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Article,
    Product,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Article => write!(f, "ARTICLE"),
            ContentType::Product => write!(f, "PRODUCT"),
        }
    }
}

/// Anything the search engine can hold
pub trait Searchable: fmt::Debug {
    /// Lowercase text the engine matches queries against
    fn search_term(&self) -> String;

    fn content_type(&self) -> ContentType;

    /// Display name shown in search results
    fn name(&self) -> &str;

    /// "name — CONTENT_TYPE"
    fn string_representation(&self) -> String {
        format!("{} — {}", self.name(), self.content_type())
    }
}
