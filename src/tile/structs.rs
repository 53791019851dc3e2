//! Tile structures.

/// Identity of a single tile (layer, zoom, column, row).
pub mod tile_request;

/// Rendered tile content.
pub mod tile_image;
