use serde::Serialize;
use shopfront_core::{CatalogError, CatalogResult};

/// Price charged for every fixed-price product
pub const FIXED_PRICE: f64 = 99.99;

/// How a product's price is derived
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingRule {
    /// Plain list price
    Simple { price: f64 },

    /// Base price reduced by a whole percentage
    Discounted { base_price: f64, discount: i32 },

    /// Always [`FIXED_PRICE`]
    FixPrice,
}

impl PricingRule {
    /// Check price and discount bounds
    pub fn validate(&self) -> CatalogResult<()> {
        match *self {
            PricingRule::Simple { price } => require_positive("price", price),
            PricingRule::Discounted { base_price, discount } => {
                require_positive("base price", base_price)?;
                if !(0..=100).contains(&discount) {
                    return Err(CatalogError::ValidationError(format!(
                        "discount must be between 0 and 100%: {}",
                        discount
                    )));
                }
                Ok(())
            }
            PricingRule::FixPrice => Ok(()),
        }
    }

    pub fn price(&self) -> f64 {
        match *self {
            PricingRule::Simple { price } => price,
            PricingRule::Discounted { base_price, discount } => {
                base_price * (100 - discount) as f64 / 100.0
            }
            PricingRule::FixPrice => FIXED_PRICE,
        }
    }

    /// Anything other than a plain list price counts as special
    pub fn is_special(&self) -> bool {
        !matches!(self, PricingRule::Simple { .. })
    }
}

fn require_positive(field: &str, value: f64) -> CatalogResult<()> {
    // NaN fails the comparison
    if !(value > 0.0 && value.is_finite()) {
        return Err(CatalogError::ValidationError(format!(
            "{} must be greater than 0: {}",
            field, value
        )));
    }
    Ok(())
}
