pub mod app_config;
pub mod demo;

pub use app_config::{Config, DemoConfig};
pub use demo::{run, seed_basket, seed_search_engine};
