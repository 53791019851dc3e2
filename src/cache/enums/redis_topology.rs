use std::collections::BTreeMap;
use crate::config::structs::server_address::ServerAddress;

/// A validated topology, ready to connect.
///
/// Built only by `RedisTopology::resolve`, so every variant already satisfies
/// its mode's constraints: cluster never selects a database and a ring
/// always has at least two shards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedisTopology {
    Standalone {
        server: ServerAddress,
        database: i64,
    },
    Cluster {
        servers: Vec<ServerAddress>,
    },
    Ring {
        /// Shard name to node. Names feed the rendezvous hash.
        shards: BTreeMap<String, ServerAddress>,
        database: i64,
    },
}
