//! Core types for the replay decoder library
//!
//! This module defines the error taxonomy and the records the decoder emits:
//! replay events (with their derived city fields), civilizations and the
//! end-of-game summary carried by the terminal record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Map tile coordinate in hex-offset addressing (`x` column, `y` row)
pub type TileCoord = (i32, i32);

/// Event kind code for general announcements
pub const KIND_GENERAL: i32 = 0;

/// Event kind code for "city founded" records
pub const KIND_CITY_FOUNDED: i32 = 1;

/// Errors that can occur during decoding
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    #[error("Unexpected end of stream at offset {offset}: needed {needed} bytes, {available} available")]
    EndOfStream {
        offset: u64,
        needed: usize,
        available: usize,
    },

    #[error("Corrupt map at offset {offset}: {table} index {index} out of range (table has {len} entries)")]
    CorruptMap {
        offset: u64,
        table: &'static str,
        index: i32,
        len: usize,
    },

    #[error("Format invariant violated at offset {offset} ({context}): expected {expected}, found {found}")]
    FormatInvariantViolation {
        offset: u64,
        context: &'static str,
        expected: String,
        found: String,
    },

    #[error("Unknown language tag: {0}")]
    UnknownLanguage(String),

    #[error("Invalid founded-city pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DecoderError {
    /// True for the recoverable primitive-level end-of-stream condition
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, DecoderError::EndOfStream { .. })
    }
}

/// City classification attached to an event by the city lifecycle tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CityFlag {
    /// Nothing is known about a city on this tile
    #[default]
    Unknown,
    /// A live city sits on this tile
    IsCity,
    /// The city on this tile was destroyed
    NotCity,
}

/// Summary carried by the terminal record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Leading discriminator of the terminal record
    pub start_turn: i32,
    /// Starting year, BC is negative
    pub start_year: i32,
    /// Turn on which the game ended
    pub final_turn: i32,
    /// Ending year/era text
    pub final_year: String,
}

/// A single decoded replay event
///
/// Events are immutable once appended to the log. The derived city fields are
/// filled in by [`EventDraft`] before the event is finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayEvent {
    turn: i32,
    kind: i32,
    x: i32,
    y: i32,
    civ: i32,
    text: String,
    terminal: Option<GameSummary>,
    city: CityFlag,
    city_name: Option<String>,
}

impl ReplayEvent {
    /// Turn the event happened on (final turn for the terminal record)
    pub fn turn(&self) -> i32 {
        self.turn
    }

    /// Opaque event kind code (0 info, 1 city founded, 2 culture gain, ...)
    pub fn kind(&self) -> i32 {
        self.kind
    }

    /// Column, -1 if the event is not tile-bound
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Row, -1 if the event is not tile-bound
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Tile coordinate of the event
    pub fn tile(&self) -> TileCoord {
        (self.x, self.y)
    }

    /// True if the event is bound to a map tile
    pub fn is_tile_bound(&self) -> bool {
        self.x >= 0 && self.y >= 0
    }

    /// Player index, -1 for city-states and neutral ownership
    pub fn civ(&self) -> i32 {
        self.civ
    }

    /// Announcement text as stored in the replay
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True for the record that ends the replay
    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    /// End-of-game data, present only on the terminal record
    pub fn summary(&self) -> Option<&GameSummary> {
        self.terminal.as_ref()
    }

    /// Derived city classification
    pub fn city_flag(&self) -> CityFlag {
        self.city
    }

    /// Derived city name, if the tile is known to carry a city
    pub fn city_name(&self) -> Option<&str> {
        self.city_name.as_deref()
    }
}

impl fmt::Display for ReplayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.terminal {
            Some(summary) => write!(f, "[{}] end of game in {}", summary.final_turn, self.text),
            None => write!(f, "[{}] {}", self.turn, self.text),
        }
    }
}

/// An event under construction
///
/// The city lifecycle tracker is the only writer of the derived fields; it
/// works on a draft, and the draft is finalized into a [`ReplayEvent`] right
/// before it is appended to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    event: ReplayEvent,
}

impl EventDraft {
    /// Start a draft for a normal record
    pub fn new(turn: i32, kind: i32, x: i32, y: i32, civ: i32, text: String) -> Self {
        Self {
            event: ReplayEvent {
                turn,
                kind,
                x,
                y,
                civ,
                text,
                terminal: None,
                city: CityFlag::Unknown,
                city_name: None,
            },
        }
    }

    /// Start a draft for the terminal record
    pub fn terminal(start_turn: i32, start_year: i32, final_turn: i32, text: String) -> Self {
        let summary = GameSummary {
            start_turn,
            start_year,
            final_turn,
            final_year: text.clone(),
        };
        Self {
            event: ReplayEvent {
                turn: final_turn,
                kind: 0,
                x: -1,
                y: -1,
                civ: 0,
                text,
                terminal: Some(summary),
                city: CityFlag::Unknown,
                city_name: None,
            },
        }
    }

    /// Fixed-shape placeholder used for anomalous and unrecognized records
    ///
    /// The placeholder is a normal (record type 1) general announcement on
    /// turn 0, off the map, for civ 0. Its kind is never "city founded", so
    /// its text cannot identify a civilization.
    pub fn placeholder(text: String) -> Self {
        Self::new(0, KIND_GENERAL, -1, -1, 0, text)
    }

    /// Read-only view of the event being built
    pub fn event(&self) -> &ReplayEvent {
        &self.event
    }

    pub(crate) fn set_city(&mut self, flag: CityFlag, name: Option<String>) {
        self.event.city = flag;
        self.event.city_name = name;
    }

    /// Seal the draft
    pub fn finish(self) -> ReplayEvent {
        self.event
    }
}

/// A civilization slot in the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Civilization {
    /// Display name, e.g. "Roman Empire"
    pub display_name: String,
    /// Name of the first city founded by this civ
    pub capital_name: String,
    /// Border colour (CSS notation)
    pub border_color: String,
    /// Fill colour (CSS notation)
    pub fill_color: String,
    /// False while the slot still holds the placeholder identity
    pub identified: bool,
}

impl Civilization {
    /// Placeholder identity used until the first founded city is matched
    pub fn unknown() -> Self {
        Self {
            display_name: "Unknown Empire".to_string(),
            capital_name: "Unknown First City".to_string(),
            border_color: "black".to_string(),
            fill_color: "white".to_string(),
            identified: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_draft_is_not_tile_bound() {
        let event = EventDraft::terminal(0, -4000, 330, "1912 AD".to_string()).finish();
        assert!(event.is_terminal());
        assert!(!event.is_tile_bound());
        assert_eq!(event.turn(), 330);
        assert_eq!(event.summary().unwrap().final_year, "1912 AD");
        assert_eq!(event.city_flag(), CityFlag::Unknown);
    }

    #[test]
    fn test_placeholder_shape() {
        let event = EventDraft::placeholder(String::new()).finish();
        assert_eq!(event.kind(), KIND_GENERAL);
        assert_eq!(event.turn(), 0);
        assert_eq!(event.tile(), (-1, -1));
        assert_eq!(event.civ(), 0);
        assert!(!event.is_terminal());
    }

    #[test]
    fn test_draft_city_fields() {
        let mut draft = EventDraft::new(3, 1, 4, 5, 0, "Rome is founded.".to_string());
        draft.set_city(CityFlag::IsCity, Some("Rome".to_string()));
        let event = draft.finish();
        assert_eq!(event.city_flag(), CityFlag::IsCity);
        assert_eq!(event.city_name(), Some("Rome"));
    }

    #[test]
    fn test_error_display_carries_offset() {
        let err = DecoderError::FormatInvariantViolation {
            offset: 42,
            context: "event terminator",
            expected: "-1".to_string(),
            found: "7".to_string(),
        };
        assert!(err.to_string().contains("offset 42"));
        assert!(!err.is_end_of_stream());
    }
}
