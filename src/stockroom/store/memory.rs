use super::KeyValueStore;
use crate::error::{Result, StockroomError};
use crate::model::Item;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Holds serialized JSON per key, so loading goes through the same
/// parse path as the file store. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw string under `key`, bypassing serialization. Lets
    /// tests plant corrupt entries.
    pub fn insert_raw(&mut self, key: impl Into<String>, raw: impl Into<String>) {
        self.entries.insert(key.into(), raw.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for InMemoryStore {
    fn load(&self, key: &str) -> Option<Vec<Item>> {
        let raw = self.entries.get(key)?;
        match serde_json::from_str(raw) {
            Ok(items) => Some(items),
            Err(err) => {
                tracing::warn!("corrupt collection under '{key}': {err}; treating as absent");
                None
            }
        }
    }

    fn save(&mut self, key: &str, items: &[Item]) -> Result<()> {
        let raw = serde_json::to_string(items).map_err(StockroomError::Serialization)?;
        self.entries.insert(key.to_string(), raw);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Category;
    use chrono::NaiveDate;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn item(name: &str) -> Item {
        Item::new(name, Category::Other, 1, 100, date(2024, 1, 15))
    }

    /// The three-item collection most scenario tests start from.
    pub fn sample_collection() -> Vec<Item> {
        vec![
            Item::new("Kabel USB", Category::Electronics, 3, 15000, date(2024, 3, 5)),
            Item::new("Sweater", Category::Clothing, 2, 250, date(2023, 11, 30)),
            Item::new("Kopi Bubuk", Category::Food, 10, 1200, date(2024, 5, 1)),
        ]
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_collection(mut self, key: &str, items: &[Item]) -> Self {
            self.store.save(key, items).unwrap();
            self
        }

        pub fn with_corrupt_entry(mut self, key: &str) -> Self {
            self.store.insert_raw(key, "{ definitely not a collection");
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{item, sample_collection};
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let mut store = InMemoryStore::new();
        let items = sample_collection();
        store.save("inventory", &items).unwrap();
        assert_eq!(store.load("inventory"), Some(items));
    }

    #[test]
    fn missing_key_is_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.load("inventory"), None);
    }

    #[test]
    fn corrupt_entry_reads_as_absent() {
        let mut store = InMemoryStore::new();
        store.insert_raw("inventory", "][");
        assert_eq!(store.load("inventory"), None);
        assert!(store.contains_key("inventory"));
    }

    #[test]
    fn an_empty_collection_is_present_not_absent() {
        let mut store = InMemoryStore::new();
        store.save("inventory", &[]).unwrap();
        assert_eq!(store.load("inventory"), Some(Vec::new()));
    }

    #[test]
    fn last_write_wins() {
        let mut store = InMemoryStore::new();
        store.save("inventory", &[item("First")]).unwrap();
        store.save("inventory", &[item("Second")]).unwrap();
        let loaded = store.load("inventory").unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Second");
    }
}
