use chrono::{DateTime, Utc};
use serde::Serialize;
use shopfront_catalog::Product;
use std::fmt;
use uuid::Uuid;

/// Ordered collection of products picked by a customer
#[derive(Debug, Clone, Serialize)]
pub struct Basket {
    id: Uuid,
    items: Vec<Product>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Basket {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Append a product; duplicates are allowed
    pub fn add(&mut self, product: Product) {
        tracing::debug!(basket_id = %self.id, product = product.name(), "adding product");
        self.items.push(product);
        self.updated_at = Utc::now();
    }

    /// Remove every product whose name equals `name` ignoring case.
    ///
    /// Removed products come back in their original order. An empty result
    /// leaves the basket untouched.
    pub fn remove_by_name(&mut self, name: &str) -> Vec<Product> {
        let needle = name.to_lowercase();
        let (removed, kept): (Vec<Product>, Vec<Product>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|p| p.name().to_lowercase() == needle);
        self.items = kept;

        if !removed.is_empty() {
            self.updated_at = Utc::now();
        }
        tracing::debug!(basket_id = %self.id, name, removed = removed.len(), "removed products by name");
        removed
    }

    pub fn summarize(&self) -> BasketSummary<'_> {
        BasketSummary {
            items: &self.items,
            // Empty f64 sums yield -0.0
            total: self.items.iter().fold(0.0, |total, p| total + p.price()),
            special_count: self.items.iter().filter(|p| p.is_special()).count(),
        }
    }
}

impl Default for Basket {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a basket's contents and totals
#[derive(Debug, Clone, Serialize)]
pub struct BasketSummary<'a> {
    pub items: &'a [Product],
    pub total: f64,
    pub special_count: usize,
}

impl fmt::Display for BasketSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items {
            writeln!(f, "{}", item)?;
        }
        writeln!(f, "Total: {:.2}", self.total)?;
        write!(f, "Special items: {}", self.special_count)
    }
}
