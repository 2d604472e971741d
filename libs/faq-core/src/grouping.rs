//! Insertion-ordered grouping of FAQ items and search results by category.

use crate::types::{CategoryGroup, CategorySummary, FaqItem, SearchResult};
use std::collections::HashMap;

/// Group values by a string key.
///
/// Groups appear in the order their key is first seen; values keep their
/// relative order inside each group.
pub fn group_by_key<T, I, F>(values: I, key: F) -> Vec<CategoryGroup<T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> &str,
{
    let mut groups: Vec<CategoryGroup<T>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for value in values {
        let category = key(&value);
        match index.get(category) {
            Some(&pos) => groups[pos].items.push(value),
            None => {
                index.insert(category.to_string(), groups.len());
                groups.push(CategoryGroup {
                    category: category.to_string(),
                    items: vec![value],
                });
            }
        }
    }

    groups
}

/// Group FAQ items by `category`.
pub fn group_by_category(items: Vec<FaqItem>) -> Vec<CategoryGroup<FaqItem>> {
    group_by_key(items, |item| item.category.as_str())
}

/// Group search results by their item's category.
pub fn group_results(results: Vec<SearchResult>) -> Vec<CategoryGroup<SearchResult>> {
    group_by_key(results, |result| result.item.category.as_str())
}

/// Item count per category, in first-seen order.
pub fn category_counts(items: &[FaqItem]) -> Vec<CategorySummary> {
    group_by_key(items, |item| item.category.as_str())
        .into_iter()
        .map(|group| CategorySummary {
            name: group.category,
            count: group.items.len(),
        })
        .collect()
}
