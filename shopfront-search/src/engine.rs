use shopfront_core::{CatalogError, CatalogResult, Searchable};

/// Linear substring search over everything added so far
#[derive(Debug, Default)]
pub struct SearchEngine {
    items: Vec<Box<dyn Searchable>>,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &dyn Searchable> {
        self.items.iter().map(|item| item.as_ref() as &dyn Searchable)
    }

    /// Index an item.
    ///
    /// Items with a blank name or search term are rejected, since nothing
    /// could ever display or match them.
    pub fn add<S: Searchable + 'static>(&mut self, item: S) -> CatalogResult<()> {
        if item.name().trim().is_empty() || item.search_term().trim().is_empty() {
            tracing::warn!(item = ?item, "rejected empty searchable item");
            return Err(CatalogError::ValidationError(
                "searchable item must have a name and search term".to_string(),
            ));
        }

        tracing::debug!(name = item.name(), content_type = %item.content_type(), "indexing item");
        self.items.push(Box::new(item));
        Ok(())
    }

    /// All items whose search term contains `query`, ignoring case, in insertion order.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&dyn Searchable> {
        let query = query.to_lowercase();
        let results: Vec<&dyn Searchable> = self
            .items()
            .filter(|item| item.search_term().contains(&query))
            .collect();

        tracing::debug!(query = %query, hits = results.len(), "search complete");
        results
    }

    /// Item with the most non-overlapping occurrences of `query`.
    ///
    /// The first item is taken as the starting best even if it has no
    /// occurrences; later items only win with a strictly higher count.
    pub fn find_best_match(&self, query: &str) -> CatalogResult<&dyn Searchable> {
        if query.is_empty() {
            return Err(CatalogError::EmptyQuery);
        }

        let needle = query.to_lowercase();
        let mut best: Option<(&dyn Searchable, usize)> = None;

        for item in self.items() {
            let count = count_occurrences(&item.search_term(), &needle);
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((item, count));
            }
        }

        let (item, count) = best.ok_or_else(|| CatalogError::NotFound(query.to_string()))?;
        tracing::debug!(query = %query, best = item.name(), occurrences = count, "best match selected");
        Ok(item)
    }
}

/// Non-overlapping occurrences, scanning left to right
fn count_occurrences(text: &str, needle: &str) -> usize {
    text.matches(needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_catalog::{Article, Product};
    use shopfront_core::ContentType;

    #[derive(Debug)]
    struct Blank;

    impl Searchable for Blank {
        fn search_term(&self) -> String {
            String::new()
        }

        fn content_type(&self) -> ContentType {
            ContentType::Article
        }

        fn name(&self) -> &str {
            ""
        }
    }

    fn names(items: &[&dyn Searchable]) -> Vec<String> {
        items.iter().map(|i| i.name().to_string()).collect()
    }

    fn sample_engine() -> SearchEngine {
        let mut engine = SearchEngine::new();
        engine.add(Article::new("Baking", "Bread recipes").unwrap()).unwrap();
        engine.add(Product::discounted("Milk", 50.0, 20).unwrap()).unwrap();
        engine
    }

    #[test]
    fn test_count_occurrences_non_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("aaa", "aa"), 1);
        assert_eq!(count_occurrences("bread and bread", "bread"), 2);
        assert_eq!(count_occurrences("milk", "bread"), 0);
    }

    #[test]
    fn test_search_substring() {
        let engine = sample_engine();

        let results = engine.search("bread");
        assert_eq!(names(&results), vec!["Baking"]);
        assert_eq!(results[0].content_type(), ContentType::Article);

        assert_eq!(names(&engine.search("MILK")), vec!["Milk"]);
        assert!(engine.search("cheese").is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let engine = sample_engine();
        assert_eq!(names(&engine.search("")), vec!["Baking", "Milk"]);
    }

    #[test]
    fn test_search_keeps_insertion_order() {
        let mut engine = SearchEngine::new();
        engine.add(Product::simple("Rye bread", 3.0).unwrap()).unwrap();
        engine.add(Article::new("Notes", "nothing here").unwrap()).unwrap();
        engine.add(Product::simple("Bread", 2.0).unwrap()).unwrap();
        engine.add(Product::simple("Bread", 2.0).unwrap()).unwrap();

        assert_eq!(names(&engine.search("bread")), vec!["Rye bread", "Bread", "Bread"]);
        assert_eq!(engine.len(), 4);
    }

    #[test]
    fn test_add_rejects_blank_item() {
        let mut engine = SearchEngine::new();
        let result = engine.add(Blank);

        assert!(matches!(result, Err(CatalogError::ValidationError(_))));
        assert!(engine.is_empty());
    }

    #[test]
    fn test_best_match_picks_highest_count() {
        let mut engine = SearchEngine::new();
        engine.add(Product::simple("Bread", 1.0).unwrap()).unwrap();
        engine.add(Article::new("Bread", "bread, more bread").unwrap()).unwrap();
        engine.add(Article::new("Bread twice", "bread").unwrap()).unwrap();

        let best = engine.find_best_match("BREAD").unwrap();
        assert_eq!(best.name(), "Bread");
        assert_eq!(best.content_type(), ContentType::Article);
    }

    #[test]
    fn test_best_match_first_item_wins_without_hits() {
        let engine = sample_engine();
        let best = engine.find_best_match("cheese").unwrap();
        assert_eq!(best.name(), "Baking");
    }

    #[test]
    fn test_best_match_ties_keep_earliest() {
        let mut engine = SearchEngine::new();
        engine.add(Product::simple("Oat milk", 2.0).unwrap()).unwrap();
        engine.add(Product::simple("Milk", 1.0).unwrap()).unwrap();

        assert_eq!(engine.find_best_match("milk").unwrap().name(), "Oat milk");
    }

    #[test]
    fn test_best_match_later_item_needs_strictly_more() {
        let mut engine = SearchEngine::new();
        engine.add(Article::new("Cheese", "no match").unwrap()).unwrap();
        engine.add(Product::simple("Milk", 1.0).unwrap()).unwrap();

        assert_eq!(engine.find_best_match("milk").unwrap().name(), "Milk");
    }

    #[test]
    fn test_best_match_errors() {
        let engine = SearchEngine::new();
        assert_eq!(engine.find_best_match("milk").unwrap_err(), CatalogError::NotFound("milk".to_string()));
        assert_eq!(engine.find_best_match("").unwrap_err(), CatalogError::EmptyQuery);
        assert_eq!(
            engine.find_best_match("MiLK").unwrap_err().to_string(),
            "Not found: MiLK"
        );

        let engine = sample_engine();
        assert_eq!(engine.find_best_match("").unwrap_err(), CatalogError::EmptyQuery);
    }
}
