use std::{collections::HashMap, fmt::Debug, sync::Mutex};

use super::SessionStore;

/// Keeps everything in memory, nothing survives the process
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn is_empty(&self) -> bool {
        self.entries.lock().expect("mutex poisoned").is_empty()
    }
}

impl Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Values include the token so only the keys are shown
        let entries = self.entries.lock().expect("mutex poisoned");
        f.debug_struct("MemoryStore")
            .field("keys", &entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.lock().expect("mutex poisoned").get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries
            .lock()
            .expect("mutex poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.entries.lock().expect("mutex poisoned").remove(key);
        Ok(())
    }
}
