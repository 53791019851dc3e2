use std::time::{Duration, Instant};
use async_trait::async_trait;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_store_memory::CacheStoreMemory;
use crate::cache::traits::cache_store::CacheStore;

impl CacheStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries. Expired ones are dropped first.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write();
        entries.retain(|_, (_, expires)| *expires > now);
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries
            .read()
            .get(key)
            .is_some_and(|(_, expires)| *expires > Instant::now())
    }
}

#[async_trait]
impl CacheStore for CacheStoreMemory {
    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let now = Instant::now();
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return Ok(None),
                Some((value, expires)) if *expires > now => return Ok(Some(value.clone())),
                Some(_) => {}
            }
        }
        let mut entries = self.entries.write();
        if entries.get(key).is_some_and(|(_, expires)| *expires <= now) {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn set_ex(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), CacheError> {
        let expires = Instant::now() + ttl;
        self.entries.write().insert(key.to_string(), (value.to_vec(), expires));
        Ok(())
    }
}
