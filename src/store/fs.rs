use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::StoreError;
use super::{MatchKey, StoreBackend, StoredMatchSet};

const SET_EXTENSION: &str = "json";

const TEMP_EXTENSION: &str = "json.tmp";

/// Backend with one JSON document per key (file-per-set layout).
///
/// Writes go to a temp file, are fsynced, then renamed over the final path,
/// so a reader only ever observes the old complete set or the new one.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Creates a store rooted at `root`. Call [`StoreBackend::prepare`]
    /// before first use.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn set_path(&self, key: MatchKey) -> PathBuf {
        self.root
            .join(format!("{}_{}.{}", key.kind(), key.id(), SET_EXTENSION))
    }

    fn temp_set_path(&self, key: MatchKey) -> PathBuf {
        self.root
            .join(format!("{}_{}.{}", key.kind(), key.id(), TEMP_EXTENSION))
    }

    fn ensure_root(&self) -> Result<(), StoreError> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|_| StoreError::RootUnavailable {
                path: self.root.clone(),
            })?;
        }
        Ok(())
    }

    fn write_set(&self, key: MatchKey, set: &StoredMatchSet) -> Result<(), StoreError> {
        self.ensure_root()?;

        let bytes = serde_json::to_vec(set)?;

        let temp_path = self.temp_set_path(key);
        let final_path = self.set_path(key);

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &final_path)?;
        Ok(())
    }

    fn read_set(&self, key: MatchKey) -> Result<Option<StoredMatchSet>, StoreError> {
        let path = self.set_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let set = serde_json::from_slice(&bytes)?;
        Ok(Some(set))
    }

    fn remove_set(&self, key: MatchKey) -> Result<bool, StoreError> {
        let path = self.set_path(key);
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)?;
        Ok(true)
    }
}

impl StoreBackend for FsStore {
    async fn prepare(&self) -> Result<(), StoreError> {
        self.ensure_root()
    }

    async fn write(&self, key: MatchKey, set: &StoredMatchSet) -> Result<(), StoreError> {
        self.write_set(key, set)
    }

    async fn read(&self, key: MatchKey) -> Result<Option<StoredMatchSet>, StoreError> {
        self.read_set(key)
    }

    async fn remove(&self, key: MatchKey) -> Result<bool, StoreError> {
        self.remove_set(key)
    }
}
