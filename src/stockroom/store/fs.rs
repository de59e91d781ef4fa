use super::KeyValueStore;
use crate::error::{Result, StockroomError};
use crate::model::Item;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed key-value store: one pretty-printed JSON document per
/// key, `{key}.json` under the root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Open a store rooted at the platform data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::default_root()?))
    }

    /// Platform data directory for stockroom (e.g. `~/.local/share/stockroom`).
    pub fn default_root() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "stockroom", "stockroom").ok_or_else(|| {
            StockroomError::Store("Could not determine a data directory".to_string())
        })?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StockroomError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Option<Vec<Item>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return None;
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("could not read {}: {err}; treating as absent", path.display());
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(items) => Some(items),
            Err(err) => {
                tracing::warn!(
                    "corrupt collection in {}: {err}; treating as absent",
                    path.display()
                );
                None
            }
        }
    }

    fn save(&mut self, key: &str, items: &[Item]) -> Result<()> {
        self.ensure_root()?;
        let content = serde_json::to_string_pretty(items).map_err(StockroomError::Serialization)?;
        fs::write(self.entry_path(key), content).map_err(StockroomError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new(
                "Kabel USB",
                Category::Electronics,
                3,
                15000,
                NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            ),
            Item::new(
                "Sweater",
                Category::Clothing,
                2,
                250,
                NaiveDate::from_ymd_opt(2023, 11, 30).unwrap(),
            ),
        ]
    }

    #[test]
    fn load_of_missing_key_is_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert_eq!(store.load("inventory"), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        let items = sample_items();

        store.save("inventory", &items).unwrap();
        assert_eq!(store.load("inventory"), Some(items));
    }

    #[test]
    fn save_creates_the_root_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join("store");
        let mut store = FileStore::new(root.clone());

        store.save("inventory", &sample_items()).unwrap();
        assert!(root.join("inventory.json").exists());
    }

    #[test]
    fn corrupt_entry_reads_as_absent() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.save("inventory", &sample_items()).unwrap();

        fs::write(temp.path().join("inventory.json"), "{ not json").unwrap();
        assert_eq!(store.load("inventory"), None);
    }

    #[test]
    fn keys_are_isolated_from_each_other() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        let items = sample_items();

        store.save("inventory", &items).unwrap();
        assert_eq!(store.load("archive"), None);
        store.save("archive", &items[..1]).unwrap();
        assert_eq!(store.load("inventory"), Some(items));
    }
}
