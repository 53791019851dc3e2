use async_trait::async_trait;
use crate::cache::errors::CacheError;
use crate::tile::structs::tile_image::TileImage;
use crate::tile::structs::tile_request::TileRequest;

/// The capability a tile server uses: look a tile up before rendering, save
/// it afterwards.
#[async_trait]
pub trait TileCache: Send + Sync {
    /// A miss is reported as `CacheError::KeyNotFound`. Callers should treat
    /// any error as a miss and render.
    async fn lookup(&self, request: &TileRequest) -> Result<TileImage, CacheError>;

    async fn save(&self, request: &TileRequest, image: &TileImage) -> Result<(), CacheError>;
}
