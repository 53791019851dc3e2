use std::sync::Arc;
use redis::aio::ConnectionManager;

/// One independent server of a ring.
#[derive(Clone)]
pub struct RingShard {
    pub(crate) name: String,
    pub(crate) address: String,
    pub(crate) connection: ConnectionManager,
}

#[derive(Clone)]
pub struct CacheStoreRing {
    pub(crate) shards: Arc<Vec<RingShard>>,
}
