use anyhow::Context as _;
use gte_shared::store_key::STORE_KEY_NAMESPACE;
use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};
use tracing::instrument;

use super::SessionStore;

/// Keeps one file per key inside a folder
#[derive(Debug)]
pub struct FileStore {
    folder: PathBuf,
}

impl FileStore {
    /// Creates the folder if it does not exist yet
    #[instrument]
    pub fn new(folder: PathBuf) -> anyhow::Result<Self> {
        fs::create_dir_all(&folder)
            .with_context(|| format!("failed to create store folder: {folder:?}"))?;
        Ok(Self { folder })
    }

    fn key_to_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .strip_prefix(STORE_KEY_NAMESPACE)
            .unwrap_or(key)
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.folder.join(name)
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.key_to_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read {path:?}")),
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let path = self.key_to_path(key);
        // Write next to the target then rename so readers never see half a value
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, value).with_context(|| format!("failed to write {tmp_path:?}"))?;
        fs::rename(&tmp_path, &path)
            .with_context(|| format!("failed to move {tmp_path:?} to {path:?}"))
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        let path = self.key_to_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("failed to remove {path:?}")),
        }
    }
}
