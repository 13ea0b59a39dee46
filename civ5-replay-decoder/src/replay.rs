//! Fully decoded replay
//!
//! [`Replay`] is what a renderer consumes: the event log with its derived
//! city fields, the civilization roster, ownership queries, the score
//! histogram and the header's display strings.

use crate::header::{GameHeader, HeaderLabels};
use crate::histogram::Histogram;
use crate::locale::{Language, MessageId};
use crate::ownership::{NeutralReset, OwnershipTracker, Region, TileState};
use crate::types::{CityFlag, Civilization, GameSummary, ReplayEvent, TileCoord};
use serde::Serialize;

/// Highest turn covered by [`Replay::turn_index`]; larger turns only come
/// from corrupt records
const MAX_INDEXED_TURN: i32 = 1 << 16;

/// Owner classification of a tile after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "civ")]
pub enum TileOwner {
    /// A player
    Civ(i32),
    /// A city-state, or neutral territory that was ceded rather than razed
    CityState,
    /// Territory of a destroyed city
    Razed,
}

/// What a tile-bound event changed on the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileUpdate {
    /// Index of the event in the log
    pub event_index: usize,
    pub turn: i32,
    pub tile: TileCoord,
    pub owner: TileOwner,
    pub city: CityFlag,
    pub city_name: Option<String>,
}

/// Everything decoded from one replay
#[derive(Debug, Clone, Serialize)]
pub struct Replay {
    pub header: GameHeader,
    pub labels: HeaderLabels,
    pub language: Language,
    pub events: Vec<ReplayEvent>,
    pub civs: Vec<Civilization>,
    /// Missing when the stream ended before or inside the score block
    pub histogram: Option<Histogram>,
    /// Missing when the stream ended before the terminal record
    pub summary: Option<GameSummary>,
    /// Text of the victory announcement, empty if there was none
    pub victory_text: String,
    pub width: i32,
    pub height: i32,
    #[serde(skip)]
    pub(crate) ownership: OwnershipTracker,
}

impl Replay {
    /// True if the replay was decoded up to its terminal record
    pub fn is_complete(&self) -> bool {
        self.summary.is_some()
    }

    /// Last turn of the game, or the last event's turn for a partial replay
    pub fn final_turn(&self) -> i32 {
        match &self.summary {
            Some(summary) => summary.final_turn,
            None => self.events.last().map(|e| e.turn()).unwrap_or(0),
        }
    }

    pub fn ownership(&self) -> &OwnershipTracker {
        &self.ownership
    }

    /// State of a tile as known at `turn`
    pub fn tile_state(&self, tile: TileCoord, turn: i32) -> Option<TileState> {
        self.ownership.query(tile, turn)
    }

    /// Connected same-owner area around `tile` at `turn`
    pub fn region(&self, tile: TileCoord, turn: i32) -> Region {
        self.ownership.region(tile, turn)
    }

    /// "<leader> of the <civ> (<difficulty>, <map size>, <map name>)"
    pub fn leader_info(&self) -> String {
        format!(
            "{} {}{} ({}, {}, {})",
            self.header.leader_name,
            MessageId::OfThe.text(self.language),
            self.header.civ_name,
            self.labels.difficulty,
            self.labels.map_size,
            self.labels.map_name
        )
    }

    /// "Game ends after N turns in <year>", if the replay is complete
    pub fn end_line(&self) -> Option<String> {
        let summary = self.summary.as_ref()?;
        Some(
            MessageId::GameEnds
                .text(self.language)
                .replace("{turns}", &summary.final_turn.to_string())
                .replace("{year}", &summary.final_year),
        )
    }

    /// For every turn up to the final turn, the index of its first event
    ///
    /// Turns without events point at the next event that follows them.
    pub fn turn_index(&self) -> Vec<usize> {
        let last = self.final_turn().clamp(-1, MAX_INDEXED_TURN);
        let mut index = Vec::new();
        let mut turn = 0;
        for (i, event) in self.events.iter().enumerate() {
            while turn <= last && event.turn() >= turn {
                index.push(i);
                turn += 1;
            }
        }
        while turn <= last {
            index.push(self.events.len());
            turn += 1;
        }
        index
    }

    /// Map changes of every tile-bound event, in log order
    pub fn tile_updates(&self) -> Vec<TileUpdate> {
        self.events
            .iter()
            .enumerate()
            .filter(|(_, event)| event.is_tile_bound() && !event.is_terminal())
            .map(|(event_index, event)| TileUpdate {
                event_index,
                turn: event.turn(),
                tile: event.tile(),
                owner: self.classify_owner(event),
                city: event.city_flag(),
                city_name: event.city_name().map(str::to_string),
            })
            .collect()
    }

    fn classify_owner(&self, event: &ReplayEvent) -> TileOwner {
        if event.civ() != -1 {
            return TileOwner::Civ(event.civ());
        }
        match self.ownership.classify_neutral_reset(event.tile(), event.turn()) {
            Some(NeutralReset::Razed) => TileOwner::Razed,
            _ => TileOwner::CityState,
        }
    }
}
