use std::fmt;
use std::fmt::Formatter;
use crate::tile::structs::tile_request::TileRequest;

impl TileRequest {
    pub fn new(layer_name: &str, z: u32, x: u32, y: u32) -> TileRequest {
        TileRequest {
            layer_name: layer_name.to_string(),
            z,
            x,
            y,
        }
    }
}

impl fmt::Display for TileRequest {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}/{}/{}/{}", self.layer_name, self.z, self.x, self.y)
    }
}
