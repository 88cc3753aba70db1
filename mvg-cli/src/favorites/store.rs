//! Disk-backed alias → station name mapping.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::FavoritesError;

/// Alias → literal station name.
pub type Favorites = BTreeMap<String, String>;

/// The favorites file.
///
/// Every operation goes back to disk; nothing is cached between calls.
/// Read-modify-write sequences are not locked, so two concurrent
/// invocations can lose an update.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the mapping.
    ///
    /// A missing file is an empty mapping. Content that isn't a flat JSON
    /// object of strings is an error, never silently treated as empty.
    pub fn load(&self) -> Result<Favorites, FavoritesError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no favorites file");
                return Ok(Favorites::new());
            }
            Err(source) => {
                return Err(FavoritesError::Io {
                    action: "failed to read",
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|source| FavoritesError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the file with `favorites`.
    ///
    /// Creates parent directories if they don't exist. Output is
    /// pretty-printed and keeps non-ASCII names as-is.
    pub fn save(&self, favorites: &Favorites) -> Result<(), FavoritesError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|source| FavoritesError::Io {
                action: "failed to create directory for",
                path: self.path.clone(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(favorites).map_err(|source| {
            FavoritesError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        std::fs::write(&self.path, json).map_err(|source| FavoritesError::Io {
            action: "failed to write",
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), count = favorites.len(), "saved favorites");
        Ok(())
    }

    /// Map an alias to its station name; anything else passes through unchanged.
    pub fn resolve(&self, name_or_alias: &str) -> Result<String, FavoritesError> {
        let favorites = self.load()?;
        Ok(favorites
            .get(name_or_alias)
            .cloned()
            .unwrap_or_else(|| name_or_alias.to_string()))
    }

    /// Get the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn favorites(entries: &[(&str, &str)]) -> Favorites {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_file_loads_empty() {
        let store = FavoritesStore::new("/nonexistent/path/favorites.json");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = FavoritesStore::new(dir.path().join("favorites.json"));
        let saved = favorites(&[("home", "Marienplatz"), ("work", "Münchner Freiheit")]);

        store.save(&saved).unwrap();

        assert_eq!(store.load().unwrap(), saved);
    }

    #[test]
    fn save_overwrites_rather_than_merges() {
        let dir = tempdir().unwrap();
        let store = FavoritesStore::new(dir.path().join("favorites.json"));

        store.save(&favorites(&[("home", "Marienplatz")])).unwrap();
        store.save(&favorites(&[("work", "Giesing")])).unwrap();

        assert_eq!(store.load().unwrap(), favorites(&[("work", "Giesing")]));
    }

    #[test]
    fn file_is_pretty_and_keeps_umlauts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        let store = FavoritesStore::new(&path);

        store.save(&favorites(&[("work", "Münchner Freiheit")])).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "{\n  \"work\": \"Münchner Freiheit\"\n}");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("mvg-cli").join("favorites.json");
        let store = FavoritesStore::new(&path);

        store.save(&Favorites::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{\"home\": 42}").unwrap();

        let err = FavoritesStore::new(&path).load().unwrap_err();
        assert!(matches!(err, FavoritesError::Malformed { .. }));

        std::fs::write(&path, "not json").unwrap();
        assert!(FavoritesStore::new(&path).load().is_err());
    }

    #[test]
    fn resolve_passes_unknown_names_through() {
        let dir = tempdir().unwrap();
        let store = FavoritesStore::new(dir.path().join("favorites.json"));

        assert_eq!(store.resolve("unknownAlias").unwrap(), "unknownAlias");

        store.save(&favorites(&[("home", "Marienplatz")])).unwrap();
        assert_eq!(store.resolve("home").unwrap(), "Marienplatz");
        assert_eq!(store.resolve("Home").unwrap(), "Home");
    }
}
