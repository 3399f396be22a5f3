pub mod searchable;

pub use searchable::{ContentType, Searchable};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Empty query")]
    EmptyQuery,
    #[error("Not found: {0}")]
    NotFound(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Reject empty or whitespace-only text for the given field
pub fn require_non_blank(field: &str, value: &str) -> CatalogResult<()> {
    if value.trim().is_empty() {
        tracing::warn!(field, "rejected blank value");
        return Err(CatalogError::ValidationError(format!("{} must not be blank", field)));
    }
    Ok(())
}
