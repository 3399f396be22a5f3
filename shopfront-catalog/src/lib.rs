pub mod article;
pub mod pricing;
pub mod product;

pub use article::Article;
pub use pricing::{PricingRule, FIXED_PRICE};
pub use product::Product;
