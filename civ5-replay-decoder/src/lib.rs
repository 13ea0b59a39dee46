//! Civilization V Replay Decoder Library
//!
//! Decodes `.Civ5Replay` files into a time-ordered event log and the state
//! derived from it: tile ownership over time, city lifecycle, the
//! civilization roster and per-civilization score history. Background
//! `.Civ5Map` files can be decoded as well.
//!
//! # Architecture
//!
//! - [`reader`]: little-endian stream primitives
//! - [`header`], [`events`], [`histogram`], [`map`]: the binary layouts
//! - [`detect`]: replay language detection
//! - [`cities`], [`ownership`]: state derived from the event texts
//! - [`decoder`]: the session that ties everything together
//!
//! The library does NOT render anything. [`Replay`] exposes the decoded model
//! and leaves presentation to the caller.
//!
//! # Example Usage
//!
//! ```no_run
//! use civ5_replay_decoder::{DecoderConfig, GameMap, ReplayDecoder};
//! use std::path::Path;
//!
//! let mut decoder = ReplayDecoder::open(Path::new("game.Civ5Replay"), DecoderConfig::new()).unwrap();
//! let map = GameMap::open(Path::new("game.Civ5Map")).unwrap();
//! decoder.set_background(&map);
//!
//! for event in decoder.events() {
//!     match event {
//!         Ok(event) => println!("{}", event),
//!         Err(e) => eprintln!("Decode error: {}", e),
//!     }
//! }
//! ```

// Public modules
pub mod cities;
pub mod config;
pub mod decoder;
pub mod detect;
pub mod events;
pub mod header;
pub mod histogram;
pub mod locale;
pub mod map;
pub mod ownership;
pub mod reader;
pub mod replay;
pub mod tables;
pub mod types;

#[cfg(test)]
mod test_support;

// Re-export main types for convenience
pub use config::DecoderConfig;
pub use decoder::{Events, ReplayDecoder};
pub use header::{GameHeader, HeaderLabels};
pub use histogram::Histogram;
pub use locale::{lookup, Language, MessageId};
pub use map::{Elevation, GameMap, MapTile};
pub use ownership::{NeutralReset, Region, TileState};
pub use replay::{Replay, TileOwner, TileUpdate};
pub use types::{
    CityFlag, Civilization, DecoderError, GameSummary, ReplayEvent, Result, TileCoord,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
