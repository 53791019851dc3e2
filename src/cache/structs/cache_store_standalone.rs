use redis::aio::ConnectionManager;

#[derive(Clone)]
pub struct CacheStoreStandalone {
    pub(crate) connection: ConnectionManager,
    pub(crate) address: String,
}
