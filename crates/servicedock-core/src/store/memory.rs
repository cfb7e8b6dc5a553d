//! In-process key-value store.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::KeyValueStore;
use crate::error::DockResult;

/// [`KeyValueStore`] held in memory; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> DockResult<Option<Vec<u8>>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put_raw(&self, key: &str, value: &[u8]) -> DockResult<()> {
        self.entries.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> DockResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove() {
        let store = MemoryStore::default();
        assert!(store.is_empty());

        store.put_raw("user", b"{}").unwrap();
        assert_eq!(store.get_raw("user").unwrap().as_deref(), Some(&b"{}"[..]));
        assert_eq!(store.len(), 1);

        store.remove_raw("user").unwrap();
        store.remove_raw("user").unwrap();
        assert!(store.get_raw("user").unwrap().is_none());
    }
}
