//! Locally persisted favorites set
//!
//! Backed by a single JSON file holding an array of string ids (ids are
//! stored as decimal strings for storage stability). Every mutation persists
//! synchronously before returning; mutation frequency is user-click-driven,
//! so durability wins over batching.

use crate::error::StorageError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// User-curated set of favorite book ids, persisted to disk
#[derive(Debug)]
pub struct Favorites {
    ids: HashSet<String>,
    path: PathBuf,
}

impl Favorites {
    /// Load the set from `path`.
    ///
    /// A missing file yields an empty set. A corrupt file also yields an
    /// empty set: the corruption is logged, never surfaced to the caller.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ids = match std::fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str::<Vec<String>>(&data) {
                Ok(list) => list.into_iter().collect(),
                Err(e) => {
                    tracing::warn!("corrupt favorites file, starting empty: {}", e);
                    HashSet::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashSet::new(),
            Err(e) => {
                tracing::warn!("failed to read favorites file, starting empty: {}", e);
                HashSet::new()
            }
        };
        Self { ids, path }
    }

    /// Whether the given book id is a favorite
    pub fn has(&self, id: u64) -> bool {
        self.ids.contains(&id.to_string())
    }

    /// Mark a book as favorite
    pub fn add(&mut self, id: u64) -> Result<(), StorageError> {
        if self.ids.insert(id.to_string()) {
            self.persist()?;
        }
        Ok(())
    }

    /// Unmark a book
    pub fn remove(&mut self, id: u64) -> Result<(), StorageError> {
        if self.ids.remove(&id.to_string()) {
            self.persist()?;
        }
        Ok(())
    }

    /// Add if absent, remove if present. Returns the new membership state.
    ///
    /// This is the only mutation path the UI uses.
    pub fn toggle(&mut self, id: u64) -> Result<bool, StorageError> {
        if self.has(id) {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }

    /// Number of favorites
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Where the set is persisted
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the set to disk as a sorted JSON array.
    /// Writes to a temp file then renames to avoid partial writes.
    fn persist(&self) -> Result<(), StorageError> {
        let mut list: Vec<&String> = self.ids.iter().collect();
        list.sort();
        let data = serde_json::to_string(&list)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Temp file in the same directory (ensures same filesystem for rename)
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, &data)?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn favorites_in(dir: &TempDir) -> Favorites {
        Favorites::load(dir.path().join("favorites.json"))
    }

    #[test]
    fn test_missing_file_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        let favorites = favorites_in(&dir);
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_corrupt_file_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{not json!").unwrap();
        let favorites = Favorites::load(&path);
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let dir = TempDir::new().unwrap();
        let mut favorites = favorites_in(&dir);

        assert!(favorites.toggle(42).unwrap());
        assert!(favorites.has(42));
        assert!(!favorites.toggle(42).unwrap());
        assert!(!favorites.has(42));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_round_trip_through_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");

        let mut favorites = Favorites::load(&path);
        favorites.add(84).unwrap();
        favorites.add(1342).unwrap();
        favorites.remove(84).unwrap();

        let reloaded = Favorites::load(&path);
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.has(1342));
        assert!(!reloaded.has(84));
    }

    #[test]
    fn test_persisted_format_is_sorted_string_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");

        let mut favorites = Favorites::load(&path);
        favorites.add(7).unwrap();
        favorites.add(1342).unwrap();
        favorites.add(84).unwrap();

        let data = std::fs::read_to_string(&path).unwrap();
        let stored: Vec<String> = serde_json::from_str(&data).unwrap();
        assert_eq!(stored, vec!["1342", "7", "84"]);
    }

    #[test]
    fn test_redundant_mutations_are_noops() {
        let dir = TempDir::new().unwrap();
        let mut favorites = favorites_in(&dir);

        favorites.add(5).unwrap();
        favorites.add(5).unwrap();
        assert_eq!(favorites.len(), 1);

        favorites.remove(99).unwrap();
        assert_eq!(favorites.len(), 1);
    }
}
