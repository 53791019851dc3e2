use std::time::Duration;
use async_trait::async_trait;
use crate::cache::errors::CacheError;

/// Byte oriented key/value store with per entry expiry.
///
/// Implementations must be safe to share between tasks without extra
/// locking; the adapter calls them concurrently through an `Arc`.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn ping(&self) -> Result<(), CacheError>;

    /// `Ok(None)` when the key does not exist or has expired.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Overwrites any existing value under `key`.
    async fn set_ex(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), CacheError>;
}
