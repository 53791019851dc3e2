use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use parking_lot::RwLock;

/// Process local store with the same expiry semantics as Redis.
///
/// Cloning shares the underlying map, which is how two adapters are pointed
/// at "the same cluster" in tests.
#[derive(Debug, Clone, Default)]
pub struct CacheStoreMemory {
    pub(crate) entries: Arc<RwLock<HashMap<String, (Vec<u8>, Instant)>>>,
}
