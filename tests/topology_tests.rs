mod common;

use proptest::prelude::*;
use tilecache_redis::cache::enums::redis_mode::RedisMode;
use tilecache_redis::cache::enums::redis_topology::RedisTopology;
use tilecache_redis::cache::errors::{CacheError, TopologyError};
use tilecache_redis::cache::structs::tile_cache_redis::TileCacheRedis;
use tilecache_redis::config::structs::cache_config::CacheConfig;
use tilecache_redis::config::structs::error_messages::ErrorMessages;
use tilecache_redis::config::structs::server_address::ServerAddress;

#[test]
fn test_scenario_host_shorthand_normalizes_to_standalone() {
    let input = CacheConfig {
        mode: String::new(),
        host: "cache1".to_string(),
        port: 6379,
        ..Default::default()
    };
    let (config, topology) = input.normalize(&ErrorMessages::default()).unwrap();
    assert_eq!(config.mode, "standalone");
    assert_eq!(config.servers, vec![ServerAddress::new("cache1", 6379)]);
    assert_eq!(topology.mode(), RedisMode::standalone);
}

#[test]
fn test_scenario_ring_across_two_nodes() {
    let input = CacheConfig {
        mode: "ring".to_string(),
        servers: common::servers(&[("a", 1), ("b", 2)]),
        ..Default::default()
    };
    let (_, topology) = input.normalize(&ErrorMessages::default()).unwrap();
    match topology {
        RedisTopology::Ring { shards, .. } => assert_eq!(shards.len(), 2),
        other => panic!("expected ring, got {:?}", other),
    }
}

#[test]
fn test_scenario_ring_with_one_node_fails() {
    let input = CacheConfig {
        mode: "ring".to_string(),
        servers: common::servers(&[("a", 1)]),
        ..Default::default()
    };
    match input.normalize(&ErrorMessages::default()) {
        Err(TopologyError::InvalidParam { value, .. }) => assert_eq!(value, "1"),
        other => panic!("expected invalid param, got {:?}", other),
    }
}

#[test]
fn test_scenario_cluster_with_database_fails() {
    let input = CacheConfig {
        mode: "cluster".to_string(),
        database: 2,
        ..Default::default()
    };
    assert!(matches!(input.normalize(&ErrorMessages::default()), Err(TopologyError::MutuallyExclusive { .. })));
}

#[test]
fn test_scenario_bogus_mode_lists_allowed_values() {
    let input = CacheConfig {
        mode: "bogus".to_string(),
        ..Default::default()
    };
    let error = input.normalize(&ErrorMessages::default()).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("bogus"));
    assert!(message.contains("standalone"));
    assert!(message.contains("cluster"));
    assert!(message.contains("ring"));
}

#[tokio::test]
async fn test_construct_fails_before_connecting() {
    let input = CacheConfig {
        mode: "ring".to_string(),
        servers: common::servers(&[("unreachable.invalid", 1)]),
        ..Default::default()
    };
    let result = TileCacheRedis::construct(&input, &ErrorMessages::default()).await;
    assert!(matches!(result, Err(CacheError::Topology(TopologyError::InvalidParam { .. }))));
}

#[tokio::test]
async fn test_construct_reports_unreachable_server() {
    let input = CacheConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        ..Default::default()
    };
    let result = TileCacheRedis::construct(&input, &ErrorMessages::default()).await;
    assert!(matches!(result, Err(CacheError::ConnectionError(_))));
}

fn host_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,10}"
}

fn servers_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<ServerAddress>> {
    prop::collection::vec((host_strategy(), 1u16..), min..max)
        .prop_map(|list| list.into_iter().map(|(host, port)| ServerAddress::new(&host, port)).collect())
}

proptest! {
    #[test]
    fn prop_host_shorthand_becomes_single_server(host in host_strategy(), port in 0u16..) {
        let input = CacheConfig { host: host.clone(), port, ..Default::default() };
        let (config, _) = input.normalize(&ErrorMessages::default()).unwrap();
        let expected_port = if port == 0 { 6379 } else { port };
        prop_assert_eq!(config.servers, vec![ServerAddress::new(&host, expected_port)]);
    }

    #[test]
    fn prop_host_and_servers_are_rejected(host in host_strategy(), servers in servers_strategy(1, 5)) {
        let input = CacheConfig { host, servers, ..Default::default() };
        let is_mutually_exclusive = matches!(input.normalize(&ErrorMessages::default()), Err(TopologyError::MutuallyExclusive { .. }));
        prop_assert!(is_mutually_exclusive);
    }

    #[test]
    fn prop_cluster_rejects_any_database(database in any::<i64>().prop_filter("non-zero", |db| *db != 0)) {
        let input = CacheConfig { mode: "cluster".to_string(), database, ..Default::default() };
        let is_mutually_exclusive = matches!(input.normalize(&ErrorMessages::default()), Err(TopologyError::MutuallyExclusive { .. }));
        prop_assert!(is_mutually_exclusive);
    }

    #[test]
    fn prop_ring_repeated_single_node_is_rejected(host in host_strategy(), port in 1u16.., copies in 2usize..6) {
        let input = CacheConfig { mode: "ring".to_string(), servers: vec![ServerAddress::new(&host, port); copies], ..Default::default() };
        let is_invalid = matches!(input.normalize(&ErrorMessages::default()), Err(TopologyError::InvalidParam { .. }));
        prop_assert!(is_invalid);
    }

    #[test]
    fn prop_ring_needs_two_servers(servers in servers_strategy(0, 2)) {
        let count = if servers.is_empty() { 1 } else { servers.len() };
        let input = CacheConfig { mode: "ring".to_string(), servers, ..Default::default() };
        match input.normalize(&ErrorMessages::default()) {
            Err(TopologyError::InvalidParam { value, .. }) => prop_assert_eq!(value, count.to_string()),
            other => prop_assert!(false, "expected invalid param, got {:?}", other),
        }
    }

    #[test]
    fn prop_ring_keeps_every_server(servers in servers_strategy(2, 8)) {
        let mut distinct = servers.clone();
        distinct.sort_by_key(|server| server.to_string());
        distinct.dedup();
        prop_assume!(distinct.len() >= 2);
        let input = CacheConfig { mode: "ring".to_string(), servers: servers.clone(), ..Default::default() };
        match input.normalize(&ErrorMessages::default()).unwrap().1 {
            RedisTopology::Ring { shards, .. } => {
                let mut expected: Vec<ServerAddress> = servers;
                expected.sort_by_key(|server| server.to_string());
                expected.dedup();
                let mut actual: Vec<ServerAddress> = shards.values().cloned().collect();
                actual.sort_by_key(|server| server.to_string());
                actual.dedup();
                prop_assert_eq!(actual, expected);
            }
            other => prop_assert!(false, "expected ring, got {:?}", other),
        }
    }

    #[test]
    fn prop_unknown_mode_is_enum_error(mode in "[a-zA-Z]{1,12}") {
        prop_assume!(!["standalone", "cluster", "ring"].contains(&mode.as_str()));
        let input = CacheConfig { mode, ..Default::default() };
        let is_enum_violation = matches!(input.normalize(&ErrorMessages::default()), Err(TopologyError::EnumViolation { .. }));
        prop_assert!(is_enum_violation);
    }

    #[test]
    fn prop_zero_ttl_defaults_to_one_day(mode in prop::sample::select(vec!["", "standalone", "cluster"])) {
        let input = CacheConfig { mode: mode.to_string(), ttl: 0, ..Default::default() };
        let (config, _) = input.normalize(&ErrorMessages::default()).unwrap();
        prop_assert_eq!(config.ttl, 86400);
    }

    #[test]
    fn prop_normalized_config_is_canonical(ttl in any::<u32>(), port in any::<u16>()) {
        let input = CacheConfig { ttl, port, ..Default::default() };
        let (config, _) = input.normalize(&ErrorMessages::default()).unwrap();
        prop_assert!(!config.servers.is_empty());
        prop_assert!(config.ttl > 0);
        prop_assert!(["standalone", "cluster", "ring"].contains(&config.mode.as_str()));
    }
}
