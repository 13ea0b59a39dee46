//! Per-tile ownership history
//!
//! Every tile-bound event records who owned the tile on that turn and what is
//! known about a city on it. Queries are causal: a question about turn `t`
//! only sees entries at turns `<= t`.
//!
//! Regions are connected same-owner areas on the hex grid. Rows are offset,
//! so the neighbours of a tile depend on the parity of its row.

use crate::types::{CityFlag, ReplayEvent, TileCoord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, VecDeque};

/// What a single event said about a tile
#[derive(Debug, Clone, PartialEq, Eq)]
struct OwnershipEntry {
    owner: i32,
    city: CityFlag,
    city_name: Option<String>,
}

/// Best-known state of a tile at some turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileState {
    /// Turn of the newest entry that contributed
    pub last_turn: i32,
    /// Owner from the newest entry
    pub owner: i32,
    /// Newest city flag that is not [`CityFlag::Unknown`]
    pub city: CityFlag,
    /// Newest city name that was recorded
    pub city_name: Option<String>,
}

/// How a tile ended up neutral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeutralReset {
    /// The city and its territory were destroyed
    Razed,
    /// The territory passed to a city-state
    Ceded,
}

/// A connected same-owner area, keyed by tile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    tiles: BTreeMap<TileCoord, TileState>,
}

impl Region {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, tile: TileCoord) -> bool {
        self.tiles.contains_key(&tile)
    }

    pub fn get(&self, tile: TileCoord) -> Option<&TileState> {
        self.tiles.get(&tile)
    }

    pub fn tiles(&self) -> impl Iterator<Item = (&TileCoord, &TileState)> {
        self.tiles.iter()
    }

    /// True if any tile in the region carries a live city
    pub fn has_city(&self) -> bool {
        self.tiles.values().any(|state| state.city == CityFlag::IsCity)
    }

    /// Tiles of `self` that are also part of `older`, with `self`'s states
    pub fn intersection(&self, older: &Region) -> Region {
        Region {
            tiles: self
                .tiles
                .iter()
                .filter(|(tile, _)| older.contains(**tile))
                .map(|(tile, state)| (*tile, state.clone()))
                .collect(),
        }
    }
}

/// The six neighbours of a tile on the offset hex grid
pub fn neighbours((x, y): TileCoord) -> [TileCoord; 6] {
    let xoff = y.rem_euclid(2);
    let (up, down) = (y.saturating_sub(1), y.saturating_add(1));
    let (left, right) = (x.saturating_sub(1), x.saturating_add(1));
    [
        (x.saturating_add(xoff), up),
        (right, y),
        (x.saturating_add(xoff), down),
        (left.saturating_add(xoff), down),
        (left, y),
        (left.saturating_add(xoff), up),
    ]
}

/// Ownership log over all tiles
#[derive(Debug, Clone, Default)]
pub struct OwnershipTracker {
    tiles: HashMap<TileCoord, BTreeMap<i32, OwnershipEntry>>,
}

impl OwnershipTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tiles with at least one entry
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Record what happened on a tile; a later record for the same turn wins
    pub fn record(&mut self, tile: TileCoord, turn: i32, owner: i32, city: CityFlag, city_name: Option<String>) {
        if tile.0 < 0 || tile.1 < 0 {
            return;
        }
        self.tiles.entry(tile).or_default().insert(
            turn,
            OwnershipEntry {
                owner,
                city,
                city_name,
            },
        );
    }

    /// Record a finalized event; events that are not tile-bound are ignored
    pub fn record_event(&mut self, event: &ReplayEvent) {
        if !event.is_tile_bound() {
            return;
        }
        self.record(
            event.tile(),
            event.turn(),
            event.civ(),
            event.city_flag(),
            event.city_name().map(str::to_string),
        );
    }

    /// Mark the city on `tile` as destroyed, keeping the current owner
    pub fn mark_razed(&mut self, tile: TileCoord, turn: i32) {
        let owner = self.query(tile, turn).map(|state| state.owner).unwrap_or(-1);
        self.record(tile, turn, owner, CityFlag::NotCity, Some(String::new()));
    }

    /// State of a tile as known at `turn`
    pub fn query(&self, tile: TileCoord, turn: i32) -> Option<TileState> {
        let history = self.tiles.get(&tile)?;
        let mut state: Option<TileState> = None;
        for (&entry_turn, entry) in history.range(..=turn) {
            let state = state.get_or_insert_with(|| TileState {
                last_turn: entry_turn,
                owner: entry.owner,
                city: CityFlag::Unknown,
                city_name: None,
            });
            state.last_turn = entry_turn;
            state.owner = entry.owner;
            if entry.city != CityFlag::Unknown {
                state.city = entry.city;
            }
            if entry.city_name.is_some() {
                state.city_name = entry.city_name.clone();
            }
        }
        state
    }

    /// Connected area around `tile` sharing its owner at `turn`
    pub fn region(&self, tile: TileCoord, turn: i32) -> Region {
        let mut region = Region::default();
        let owner = match self.query(tile, turn) {
            Some(state) => state.owner,
            None => return region,
        };

        let mut queue = VecDeque::from([tile]);
        while let Some(current) = queue.pop_front() {
            if region.contains(current) {
                continue;
            }
            let state = match self.query(current, turn) {
                Some(state) if state.owner == owner => state,
                _ => continue,
            };
            region.tiles.insert(current, state);
            queue.extend(neighbours(current).into_iter().filter(|n| !region.contains(*n)));
        }
        region
    }

    /// Decide whether a tile that went neutral on `turn` was razed or ceded
    ///
    /// Returns `None` when the tile has no history before `turn`.
    pub fn classify_neutral_reset(&self, tile: TileCoord, turn: i32) -> Option<NeutralReset> {
        if turn <= 0 {
            return None;
        }
        let before = self.query(tile, turn - 1)?;
        if before.owner == -1 {
            return Some(NeutralReset::Razed);
        }

        let after = self.region(tile, turn);
        if !after.has_city() {
            return Some(NeutralReset::Razed);
        }
        let surviving = after.intersection(&self.region(tile, turn - 1));
        if !surviving.has_city() {
            return Some(NeutralReset::Razed);
        }
        Some(NeutralReset::Ceded)
    }
}
