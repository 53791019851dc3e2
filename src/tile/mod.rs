//! Tile addressing and payload types.
//!
//! The cache does not interpret tiles. A [`TileRequest`](structs::tile_request::TileRequest)
//! only needs a stable canonical string form to build a cache key, and a
//! [`TileImage`](structs::tile_image::TileImage) is carried as opaque bytes.

/// Data structures for tile requests and images.
pub mod structs;

/// Implementation blocks for tile types.
pub mod impls;
