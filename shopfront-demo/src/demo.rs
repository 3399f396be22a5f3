use crate::app_config::DemoConfig;
use anyhow::Context;
use shopfront_basket::Basket;
use shopfront_catalog::{Article, Product};
use shopfront_core::CatalogResult;
use shopfront_search::SearchEngine;
use std::io::Write;

/// Basket used by the walkthrough, including a duplicate "Bread"
pub fn seed_basket() -> CatalogResult<Basket> {
    let mut basket = Basket::new();
    basket.add(Product::simple("Bread", 30.0)?);
    basket.add(Product::discounted("Milk", 50.0, 20)?);
    basket.add(Product::fix_price("Book")?);
    basket.add(Product::simple("Bread", 25.0)?);
    Ok(basket)
}

pub fn seed_search_engine() -> CatalogResult<SearchEngine> {
    let mut engine = SearchEngine::new();
    engine.add(Article::new("Baking", "Bread recipes")?)?;
    engine.add(Product::discounted("Milk", 50.0, 20)?)?;
    Ok(engine)
}

/// Run the scripted walkthrough, writing the report to `out`
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> anyhow::Result<()> {
    let mut basket = seed_basket().context("failed to build sample basket")?;
    let engine = seed_search_engine().context("failed to build sample search index")?;
    tracing::info!(basket_id = %basket.id(), products = basket.len(), indexed = engine.len(), "catalog seeded");

    writeln!(out, "=== Initial basket ===")?;
    writeln!(out, "{}", basket.summarize())?;
    if config.print_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&basket.summarize())?)?;
    }

    writeln!(out, "\n=== Removing '{}' ===", config.remove_name)?;
    for product in basket.remove_by_name(&config.remove_name) {
        writeln!(out, "{}", product)?;
    }

    writeln!(out, "\n=== Basket after removal ===")?;
    writeln!(out, "{}", basket.summarize())?;

    writeln!(out, "\n=== Search results for '{}' ===", config.search_query)?;
    for item in engine.search(&config.search_query) {
        writeln!(out, "{}", item.string_representation())?;
    }

    writeln!(out, "\n=== Best match for '{}' ===", config.best_match_query)?;
    match engine.find_best_match(&config.best_match_query) {
        Ok(item) => writeln!(out, "{}", item.string_representation())?,
        Err(err) => {
            tracing::warn!(error = %err, "best match lookup failed");
            writeln!(out, "No best match: {}", err)?
        }
    }

    Ok(())
}
