use serde::Serialize;
use shopfront_core::{require_non_blank, CatalogResult, ContentType, Searchable};
use std::fmt;
use crate::pricing::PricingRule;

/// A purchasable catalog entry
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Product {
    name: String,
    #[serde(flatten)]
    pricing: PricingRule,
}

impl Product {
    pub fn new(name: impl Into<String>, pricing: PricingRule) -> CatalogResult<Self> {
        let name = name.into();
        require_non_blank("product name", &name)?;
        pricing.validate()?;
        Ok(Self { name, pricing })
    }

    /// Product sold at its list price
    pub fn simple(name: impl Into<String>, price: f64) -> CatalogResult<Self> {
        Self::new(name, PricingRule::Simple { price })
    }

    /// Product sold at `base_price` minus `discount` percent
    pub fn discounted(name: impl Into<String>, base_price: f64, discount: i32) -> CatalogResult<Self> {
        Self::new(name, PricingRule::Discounted { base_price, discount })
    }

    /// Product sold at the catalog-wide fixed price
    pub fn fix_price(name: impl Into<String>) -> CatalogResult<Self> {
        Self::new(name, PricingRule::FixPrice)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pricing(&self) -> &PricingRule {
        &self.pricing
    }

    pub fn price(&self) -> f64 {
        self.pricing.price()
    }

    pub fn is_special(&self) -> bool {
        self.pricing.is_special()
    }
}

impl Searchable for Product {
    fn search_term(&self) -> String {
        self.name.to_lowercase()
    }

    fn content_type(&self) -> ContentType {
        ContentType::Product
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pricing {
            PricingRule::Simple { .. } => write!(f, "{}: {:.2}", self.name, self.price()),
            PricingRule::Discounted { discount, .. } => {
                write!(f, "{}: {:.2} ({}% discount)", self.name, self.price(), discount)
            }
            PricingRule::FixPrice => write!(f, "{}: fixed price {:.2}", self.name, self.price()),
        }
    }
}
