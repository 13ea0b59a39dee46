//! Standalone replay inspection tool
//!
//! Decodes a replay and prints statistics about its events, followed by a
//! rough text rendering of tile ownership at the end of the game.
//!
//! Usage:
//!   inspect_replay <game.Civ5Replay> [--locale <tag>] [--no-map]
//!
//! Example:
//!   inspect_replay game.Civ5Replay --locale de

use civ5_replay_decoder::{CityFlag, DecoderConfig, Language, Replay, ReplayDecoder};
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

struct ReplayStats {
    events_by_kind: BTreeMap<i32, usize>,
    tile_bound: usize,
    cities_founded: usize,
    cities_destroyed: usize,
    busiest_turn: Option<(i32, usize)>,
}

impl ReplayStats {
    fn collect(replay: &Replay) -> Self {
        let mut events_by_kind = BTreeMap::new();
        let mut per_turn: BTreeMap<i32, usize> = BTreeMap::new();
        let mut tile_bound = 0;
        let mut cities_founded = 0;
        let mut cities_destroyed = 0;

        for event in replay.events.iter().filter(|e| !e.is_terminal()) {
            *events_by_kind.entry(event.kind()).or_insert(0) += 1;
            *per_turn.entry(event.turn()).or_insert(0) += 1;
            if event.is_tile_bound() {
                tile_bound += 1;
            }
            if event.kind() == 1 && event.city_flag() == CityFlag::IsCity && event.civ() >= 0 {
                cities_founded += 1;
            }
            if event.city_flag() == CityFlag::NotCity {
                cities_destroyed += 1;
            }
        }

        let busiest_turn = per_turn
            .into_iter()
            .max_by_key(|&(turn, count)| (count, -turn));

        Self {
            events_by_kind,
            tile_bound,
            cities_founded,
            cities_destroyed,
            busiest_turn,
        }
    }

    fn print_summary(&self) {
        println!("\n=== EVENT SUMMARY ===");
        for (kind, count) in &self.events_by_kind {
            println!("Kind {:>3}: {} events", kind, count);
        }
        println!("Tile-bound events: {}", self.tile_bound);
        println!("Cities founded: {}", self.cities_founded);
        println!("Cities destroyed: {}", self.cities_destroyed);
        if let Some((turn, count)) = self.busiest_turn {
            println!("Busiest turn: {} ({} events)", turn, count);
        }
    }
}

/// One character per tile: owner digit, `*` for a city, `~` for city-states
fn ownership_map(replay: &Replay) -> String {
    let turn = replay.final_turn();
    let mut out = String::new();
    for y in (0..replay.height).rev() {
        if y % 2 == 1 {
            out.push(' ');
        }
        for x in 0..replay.width {
            let c = match replay.tile_state((x, y), turn) {
                None => '.',
                Some(state) if state.city == CityFlag::IsCity => '*',
                Some(state) if state.owner < 0 => '~',
                Some(state) => std::char::from_digit((state.owner % 36) as u32, 36).unwrap_or('?'),
            };
            out.push(c);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <game.Civ5Replay> [--locale <tag>] [--no-map]", args[0]);
        std::process::exit(1);
    }

    let replay_file = PathBuf::from(&args[1]);
    let mut config = DecoderConfig::new();
    let mut show_map = true;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--locale" => {
                i += 1;
                if i < args.len() {
                    config = config.with_language(args[i].parse::<Language>()?);
                }
            }
            "--no-map" => {
                show_map = false;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    println!("=== Civ5 Replay Inspector ===");
    println!("Replay file: {:?}", replay_file);

    let replay = ReplayDecoder::open(&replay_file, config)?.read_full()?;

    println!("{}", replay.leader_info());
    println!("Language: {}", replay.language);
    println!("Events: {} ({})", replay.events.len(), if replay.is_complete() { "complete" } else { "partial" });
    println!("Civilizations:");
    for (i, civ) in replay.civs.iter().enumerate() {
        println!("  {:>2}: {} ({})", i, civ.display_name, civ.capital_name);
    }

    ReplayStats::collect(&replay).print_summary();

    if show_map {
        println!("\n=== OWNERSHIP ON TURN {} ===", replay.final_turn());
        print!("{}", ownership_map(&replay));
    }

    Ok(())
}
