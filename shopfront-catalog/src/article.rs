use serde::Serialize;
use shopfront_core::{require_non_blank, CatalogResult, ContentType, Searchable};
use std::fmt;

/// Editorial text indexed alongside products
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Article {
    title: String,
    text: String,
}

impl Article {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> CatalogResult<Self> {
        let title = title.into();
        let text = text.into();
        require_non_blank("article title", &title)?;
        require_non_blank("article text", &text)?;
        Ok(Self { title, text })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Searchable for Article {
    fn search_term(&self) -> String {
        format!("{} {}", self.title, self.text).to_lowercase()
    }

    fn content_type(&self) -> ContentType {
        ContentType::Article
    }

    fn name(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.text)
    }
}
