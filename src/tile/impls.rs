//! Implementation blocks for tile types.

pub mod tile_request;

pub mod tile_image;
