//! The persistence boundary for the session
//!
//! Stores are plain string key-value maps. Typed access goes through
//! [`SessionStoreExt`] so that malformed entries are reported when they are
//! loaded instead of surfacing later as missing fields

use anyhow::Context as _;
use gte_shared::{store_key::StoreKey, token::AuthToken};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod file;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
pub use memory::MemoryStore;

/// String keyed storage that survives restarts of the application
///
/// Writes are not transactional, callers that need several keys to agree
/// must write them one after the other
pub trait SessionStore: Debug + Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    /// Removing a key that is not present is not an error
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}

pub trait SessionStoreExt: SessionStore {
    /// Returns `Ok(None)` if the key is absent and an error if it is present
    /// but cannot be decoded as `T`
    fn read_json<T: DeserializeOwned>(&self, key: StoreKey) -> anyhow::Result<Option<T>> {
        self.get(key.as_str())?
            .map(|raw| decode(key, &raw))
            .transpose()
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: StoreKey, value: &T) -> anyhow::Result<()> {
        let encoded = encode(key, value)?;
        self.set(key.as_str(), &encoded)
    }

    /// The token is stored raw (not as JSON). An empty value counts as absent
    fn read_token(&self) -> anyhow::Result<Option<AuthToken>> {
        Ok(self
            .get(StoreKey::Token.as_str())?
            .filter(|x| !x.is_empty())
            .map(AuthToken::from))
    }

    fn write_token(&self, token: &AuthToken) -> anyhow::Result<()> {
        self.set(StoreKey::Token.as_str(), token.as_str())
    }
}

impl<S: SessionStore + ?Sized> SessionStoreExt for S {}

pub fn encode<T: Serialize + ?Sized>(key: StoreKey, value: &T) -> anyhow::Result<String> {
    serde_json::to_string(value).with_context(|| format!("failed to encode value for {key}"))
}

pub fn decode<T: DeserializeOwned>(key: StoreKey, raw: &str) -> anyhow::Result<T> {
    serde_json::from_str(raw).with_context(|| format!("malformed value stored under {key}"))
}
