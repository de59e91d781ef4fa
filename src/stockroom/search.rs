use crate::model::Item;

/// Project the collection down to the items whose name contains `query`,
/// case-insensitively, keeping original relative order. An empty query
/// returns the whole collection.
///
/// Pure and cheap enough to call on every keystroke.
pub fn filter(items: &[Item], query: &str) -> Vec<Item> {
    if query.is_empty() {
        return items.to_vec();
    }
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
