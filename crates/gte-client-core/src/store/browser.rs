use anyhow::{anyhow, Context as _};

use super::SessionStore;

/// `window.localStorage`, shared with the rest of the web application
///
/// The handle is looked up on every call so the store itself holds no
/// javascript values
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> anyhow::Result<web_sys::Storage> {
        web_sys::window()
            .context("no window found")?
            .local_storage()
            .map_err(|e| anyhow!("failed to access local storage: {e:?}"))?
            .context("local storage is not available")
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| anyhow!("failed to read {key}: {e:?}"))
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("failed to write {key}: {e:?}"))
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| anyhow!("failed to remove {key}: {e:?}"))
    }
}
