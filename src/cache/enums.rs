//! Cache enumeration types.

/// Configured operating mode (standalone, cluster, ring).
pub mod redis_mode;

/// Validated topology with the nodes it addresses.
pub mod redis_topology;
