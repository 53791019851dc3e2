use redis::cluster_async::ClusterConnection;

#[derive(Clone)]
pub struct CacheStoreCluster {
    pub(crate) connection: ClusterConnection,
    pub(crate) nodes: Vec<String>,
}
