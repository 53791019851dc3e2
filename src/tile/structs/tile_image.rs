use serde::{Deserialize, Serialize};

/// Rendered tile content as stored in the cache.
///
/// `content` is serialized as a binary blob rather than a sequence of
/// integers, which keeps MessagePack payloads the size of the image.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TileImage {
    #[serde(with = "crate::tile::impls::tile_image::content_bytes")]
    pub content: Vec<u8>,
    pub content_type: String,
}
