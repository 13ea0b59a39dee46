//! Background map decoder
//!
//! Decodes the terrain/feature/resource grid of a map file. The grid is only
//! used to paint the background of a replay; nothing in the event decoding
//! depends on it.
//!
//! ## Layout
//! - 1 flag byte: top bit = scenario, low nibble = format version
//! - width, height (`i32`)
//! - 1 unknown byte, 1 unknown `i32`
//! - block lengths (`i32` each): terrain names, feature names, second feature
//!   block, resource names, reserved, map name, map description
//! - the name tables, the skipped block and the two strings
//! - version 0x0B and later: one more length-prefixed block (skipped)
//! - `height` rows of `width` 8-byte tiles, stored bottom row first
//!
//! A tile's resource or feature byte of 0xFF (-1) means the tile has none.

use crate::reader::ByteStream;
use crate::types::{DecoderError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Feature name that turns a water tile into ice
pub const FEATURE_ICE: &str = "FEATURE_ICE";

/// Size of one tile record in bytes
const TILE_RECORD_SIZE: u64 = 8;

/// Elevation of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Elevation {
    Flat,
    Hill,
    Mountain,
    /// Water covered by ice
    IceOnWater,
    /// A hill flag value that has not been seen before
    Other(i8),
}

impl Elevation {
    fn from_raw(flag: i8, feature: Option<&str>) -> Self {
        if feature == Some(FEATURE_ICE) {
            return Elevation::IceOnWater;
        }
        match flag {
            0 => Elevation::Flat,
            1 => Elevation::Hill,
            2 => Elevation::Mountain,
            other => Elevation::Other(other),
        }
    }

    /// Numeric hill flag: 0 none, 1 hill, 2 mountain, -1 ice on water
    pub fn flag(self) -> i8 {
        match self {
            Elevation::Flat => 0,
            Elevation::Hill => 1,
            Elevation::Mountain => 2,
            Elevation::IceOnWater => -1,
            Elevation::Other(raw) => raw,
        }
    }
}

/// A single decoded map tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapTile {
    pub terrain: String,
    pub resource: Option<String>,
    pub feature: Option<String>,
    pub elevation: Elevation,
    /// Rivers along the right, lower-right and lower-left edges (bits 0..3)
    pub river_bits: u8,
}

/// A decoded map file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    pub is_scenario: bool,
    pub version: u8,
    pub width: i32,
    pub height: i32,
    pub terrains: Vec<String>,
    pub features: Vec<String>,
    pub resources: Vec<String>,
    pub name: String,
    pub description: String,
    /// Rows top to bottom
    pub rows: Vec<Vec<MapTile>>,
}

impl GameMap {
    /// Load and decode a map file
    pub fn open(path: &Path) -> Result<Self> {
        log::info!("Loading map file: {:?}", path);
        let data = std::fs::read(path)?;
        Self::decode(&mut ByteStream::new(data))
    }

    /// Decode a map from the current stream position
    pub fn decode(stream: &mut ByteStream) -> Result<Self> {
        let flags = stream.read_u8()?;
        let is_scenario = flags & 0x80 != 0;
        let version = flags & 0x0f;

        let width = stream.read_i32_le()?;
        let height = stream.read_i32_le()?;

        stream.skip(1)?;
        stream.read_i32_le()?;

        let terrain_len = stream.read_length("terrain block length")?;
        let features_len = stream.read_length("feature block length")?;
        let features_extra_len = stream.read_length("second feature block length")?;
        let resource_len = stream.read_length("resource block length")?;
        stream.read_i32_le()?;
        let name_len = stream.read_length("map name length")?;
        let description_len = stream.read_length("map description length")?;

        let terrains = stream.read_sized_string_list(terrain_len)?;
        let features = stream.read_sized_string_list(features_len)?;
        stream.skip(features_extra_len)?;
        let resources = stream.read_sized_string_list(resource_len)?;

        let name = String::from_utf8_lossy(&stream.read_bytes(name_len)?).into_owned();
        let description = String::from_utf8_lossy(&stream.read_bytes(description_len)?).into_owned();

        if version >= 0x0b {
            let extra_len = stream.read_length("version 11 block length")?;
            stream.skip(extra_len)?;
        }

        log::debug!(
            "Map v{} {}x{}: {} terrains, {} features, {} resources",
            version,
            width,
            height,
            terrains.len(),
            features.len(),
            resources.len()
        );

        let mut map = GameMap {
            is_scenario,
            version,
            width,
            height,
            terrains,
            features,
            resources,
            name,
            description,
            rows: Vec::new(),
        };

        let columns = usize::try_from(width).unwrap_or(0);
        let row_count = usize::try_from(height).unwrap_or(0);
        let needed = columns
            .checked_mul(row_count)
            .and_then(|tiles| tiles.checked_mul(TILE_RECORD_SIZE as usize));
        match needed {
            Some(needed) if needed <= stream.remaining() => {}
            _ => {
                return Err(DecoderError::EndOfStream {
                    offset: stream.position(),
                    needed: needed.unwrap_or(usize::MAX),
                    available: stream.remaining(),
                })
            }
        }

        for _ in 0..row_count {
            let mut row = Vec::new();
            for _ in 0..columns {
                row.push(map.read_tile(stream)?);
            }
            // Stream is bottom to top
            map.rows.insert(0, row);
        }

        Ok(map)
    }

    fn read_tile(&self, stream: &mut ByteStream) -> Result<MapTile> {
        let offset = stream.position();
        let bytes = stream.read_bytes(TILE_RECORD_SIZE as usize)?;
        let raw: Vec<i8> = bytes.iter().map(|&b| b as i8).collect();

        let terrain = resolve(&self.terrains, "terrain", raw[0], offset)?
            .ok_or(DecoderError::CorruptMap {
                offset,
                table: "terrain",
                index: raw[0] as i32,
                len: self.terrains.len(),
            })?;
        let resource = resolve(&self.resources, "resource", raw[1], offset)?;
        let feature = resolve(&self.features, "feature", raw[2], offset)?;
        let elevation = Elevation::from_raw(raw[4], feature.as_deref());

        Ok(MapTile {
            terrain,
            resource,
            feature,
            elevation,
            river_bits: (raw[3] as u8) & 0x07,
        })
    }

    /// Tile at column `x`, row `y` (row 0 is the top row)
    pub fn tile(&self, x: usize, y: usize) -> Option<&MapTile> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    /// Short human-readable description
    pub fn info(&self) -> String {
        format!("{} x {}", self.width, self.height)
    }
}

/// Resolve a table index; negative means "none", past the end is corrupt
fn resolve(table: &[String], name: &'static str, index: i8, offset: u64) -> Result<Option<String>> {
    if index < 0 {
        return Ok(None);
    }
    table
        .get(index as usize)
        .cloned()
        .map(Some)
        .ok_or(DecoderError::CorruptMap {
            offset,
            table: name,
            index: index as i32,
            len: table.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{LittleEndian, WriteBytesExt};

    fn map_bytes(version: u8, tiles: &[[i8; 8]]) -> Vec<u8> {
        sized_map_bytes(version, 2, 2, tiles)
    }

    fn sized_map_bytes(version: u8, width: i32, height: i32, tiles: &[[i8; 8]]) -> Vec<u8> {
        let terrain = b"TERRAIN_GRASS\0";
        let features = b"FEATURE_ICE\0";
        let resources = b"RESOURCE_IRON\0";
        let mut buf = Vec::new();
        buf.push(0x80 | version);
        buf.write_i32::<LittleEndian>(width).unwrap();
        buf.write_i32::<LittleEndian>(height).unwrap();
        buf.push(0);
        buf.write_i32::<LittleEndian>(0).unwrap();
        for len in [terrain.len(), features.len(), 3, resources.len(), 0, 4, 0] {
            buf.write_i32::<LittleEndian>(len as i32).unwrap();
        }
        buf.extend_from_slice(terrain);
        buf.extend_from_slice(features);
        buf.extend_from_slice(&[9, 9, 9]);
        buf.extend_from_slice(resources);
        buf.extend_from_slice(b"Tiny");
        if version >= 0x0b {
            buf.write_i32::<LittleEndian>(2).unwrap();
            buf.extend_from_slice(&[1, 2]);
        }
        for tile in tiles {
            buf.extend(tile.iter().map(|&b| b as u8));
        }
        buf
    }

    #[test]
    fn test_two_by_two_grid_resolves_sole_entries() {
        let tiles = [
            [0, 0, 0, 1, 0, 0, 0, 0],
            [0, 0, 0, 0, 1, 0, 0, 0],
            [0, 0, 0, 0, 2, 0, 0, 0],
            [0, 0, 0, 6, 0, 0, 0, 0],
        ];
        let mut stream = ByteStream::new(map_bytes(0x0b, &tiles));
        let map = GameMap::decode(&mut stream).unwrap();

        assert!(map.is_scenario);
        assert_eq!(map.version, 0x0b);
        assert_eq!(map.name, "Tiny");
        assert_eq!(map.info(), "2 x 2");
        assert_eq!(map.rows.len(), 2);
        assert_eq!(stream.remaining(), 0);
        for row in &map.rows {
            for tile in row {
                assert_eq!(tile.terrain, "TERRAIN_GRASS");
                assert_eq!(tile.resource.as_deref(), Some("RESOURCE_IRON"));
                assert_eq!(tile.feature.as_deref(), Some(FEATURE_ICE));
                assert_eq!(tile.elevation, Elevation::IceOnWater);
            }
        }
        // First row in the stream ends up at the bottom
        assert_eq!(map.tile(0, 1).unwrap().river_bits, 1);
        assert_eq!(map.tile(1, 0).unwrap().river_bits, 6);
    }

    #[test]
    fn test_negative_indices_mean_none() {
        let tiles = [
            [0, -1, -1, 0, 1, 0, 0, 0],
            [0, -1, -1, 0, 2, 0, 0, 0],
            [0, -1, -1, 0, 0, 0, 0, 0],
            [0, -1, -1, 0, 0, 0, 0, 0],
        ];
        let map = GameMap::decode(&mut ByteStream::new(map_bytes(0x0a, &tiles))).unwrap();
        let tile = map.tile(0, 1).unwrap();
        assert_eq!(tile.resource, None);
        assert_eq!(tile.feature, None);
        assert_eq!(tile.elevation, Elevation::Hill);
        assert_eq!(map.tile(1, 1).unwrap().elevation.flag(), 2);
    }

    #[test]
    fn test_out_of_range_index_is_corrupt() {
        let tiles = [
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 3, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
        ];
        let err = GameMap::decode(&mut ByteStream::new(map_bytes(0x0a, &tiles))).unwrap_err();
        match err {
            DecoderError::CorruptMap { table, index, len, .. } => {
                assert_eq!(table, "resource");
                assert_eq!(index, 3);
                assert_eq!(len, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_oversized_grid_is_rejected_before_reading_tiles() {
        let tile = [[0, 0, 0, 0, 0, 0, 0, 0]];
        let bytes = sized_map_bytes(0x0a, i32::MAX, 1, &tile);
        let tiles_start = (bytes.len() - 8) as u64;

        let err = GameMap::decode(&mut ByteStream::new(bytes)).unwrap_err();
        match err {
            DecoderError::EndOfStream { offset, needed, available } => {
                assert_eq!(offset, tiles_start);
                assert_eq!(needed, i32::MAX as usize * 8);
                assert_eq!(available, 8);
            }
            other => panic!("unexpected error: {other}"),
        }

        let bytes = sized_map_bytes(0x0a, i32::MAX, i32::MAX, &tile);
        assert!(GameMap::decode(&mut ByteStream::new(bytes)).unwrap_err().is_end_of_stream());
    }
}
