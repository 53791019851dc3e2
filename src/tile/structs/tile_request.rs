use serde::{Deserialize, Serialize};

/// Identity of a single tile in a layer.
///
/// The canonical string form (`Display`) is `layer/z/x/y` and is used as the
/// cache key component, so two requests for the same tile always produce the
/// same key.
///
/// # Example
///
/// ```rust
/// use tilecache_redis::tile::structs::tile_request::TileRequest;
///
/// let request = TileRequest::new("osm", 12, 2048, 1361);
/// assert_eq!(request.to_string(), "osm/12/2048/1361");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileRequest {
    pub layer_name: String,
    pub z: u32,
    pub x: u32,
    pub y: u32,
}
