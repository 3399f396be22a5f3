pub mod basket;

pub use basket::{Basket, BasketSummary};
