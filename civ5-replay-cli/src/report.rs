//! Report generation
//!
//! Plain-text event listing, histogram CSV and a JSON dump of the decoded
//! replay for external renderers.

use anyhow::{Context, Result};
use civ5_replay_decoder::{MessageId, Replay, TileUpdate};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Render the replay as text
///
/// With `quiet` only the end-of-game line is produced.
pub fn text_report(replay: &Replay, quiet: bool) -> String {
    let mut out = String::new();
    let lang = replay.language;

    if !quiet {
        let _ = writeln!(out, "{}", replay.leader_info());
        let _ = writeln!(out, "Victory: {}", replay.labels.victory_outcome);
        let _ = writeln!(out, "Options: {}", replay.labels.game_options_text());
        let _ = writeln!(out, "Victory types: {}", replay.labels.victory_types_text());
        let _ = writeln!(out, "Map: {} x {}", replay.width, replay.height);
        out.push('\n');

        let turn_label = MessageId::Turn.text(lang);
        for event in replay.events.iter().filter(|e| !e.is_terminal() && !e.text().is_empty()) {
            let _ = writeln!(out, "[{} {}] {}", turn_label, event.turn(), event.text());
        }
    }

    match replay.end_line() {
        Some(line) => {
            let _ = writeln!(out, "{}", line);
        }
        None => {
            let _ = writeln!(out, "(replay ends early after {} events)", replay.events.len());
        }
    }
    out
}

/// Write the score histogram as CSV
pub fn write_csv(replay: &Replay, path: &Path) -> Result<()> {
    let csv = replay
        .histogram
        .as_ref()
        .map(|h| h.to_csv())
        .unwrap_or_default();
    fs::write(path, csv).with_context(|| format!("Failed to write CSV file: {:?}", path))?;
    log::info!("Histogram written to {:?}", path);
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    decoder_version: &'static str,
    #[serde(flatten)]
    replay: &'a Replay,
    turn_index: Vec<usize>,
    tile_updates: Vec<TileUpdate>,
}

/// Serialize the decoded replay, with turn index and tile updates
pub fn to_json(replay: &Replay) -> Result<String> {
    let report = JsonReport {
        decoder_version: civ5_replay_decoder::VERSION,
        replay,
        turn_index: replay.turn_index(),
        tile_updates: replay.tile_updates(),
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize replay")
}

/// Write the JSON dump of the replay
pub fn write_json(replay: &Replay, path: &Path) -> Result<()> {
    let json = to_json(replay)?;
    fs::write(path, json).with_context(|| format!("Failed to write JSON file: {:?}", path))?;
    log::info!("Replay model written to {:?}", path);
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use civ5_replay_decoder::{DecoderConfig, ReplayDecoder};

    fn int(buf: &mut Vec<u8>, v: i32) {
        buf.extend_from_slice(&v.to_le_bytes());
    }

    fn string(buf: &mut Vec<u8>, s: &str) {
        int(buf, s.len() as i32);
        buf.extend_from_slice(s.as_bytes());
    }

    /// A short two-event replay with a score block
    pub(crate) fn sample_replay_bytes() -> Vec<u8> {
        let mut b = Vec::new();
        for v in [5, 0, 3] {
            int(&mut b, v);
        }
        for s in ["Augustus Caesar", "Roman Empire", "Rome", "Roman", "Assets\\Maps\\Pangaea.lua"] {
            string(&mut b, s);
        }
        for v in [1, 0, 0, 0, 0, 0, 1, 3, 3, 3, 0, 0, 0, -1] {
            int(&mut b, v);
        }
        for (turn, kind, x, y, text) in [(0, 1, 2, 3, "Rome is founded."), (1, 0, -1, -1, "")] {
            for v in [1, turn, kind, x, y, 0] {
                int(&mut b, v);
            }
            string(&mut b, text);
            int(&mut b, -1);
        }
        for v in [0, -4000, 1] {
            int(&mut b, v);
        }
        string(&mut b, "3950 BC");
        for v in [0, 0, 1, 0, 0, 2, 5, 0, 0, 0, 8, 0, 0, 0] {
            int(&mut b, v);
        }
        b
    }

    fn sample_replay() -> Replay {
        ReplayDecoder::from_bytes(sample_replay_bytes(), DecoderConfig::new())
            .read_full()
            .unwrap()
    }

    #[test]
    fn test_text_report() {
        let text = text_report(&sample_replay(), false);
        assert!(text.starts_with("Augustus Caesar of the Roman Empire (Prince, Tiny, Pangaea)\n"));
        assert!(text.contains("Options: None\n"));
        assert!(text.contains("[Turn 0] Rome is founded.\n"));
        assert!(!text.contains("[Turn 1]"));
        assert!(text.ends_with("Game ends after 1 turns in 3950 BC\n"));
    }

    #[test]
    fn test_quiet_report_only_has_end_line() {
        let text = text_report(&sample_replay(), true);
        assert_eq!(text, "Game ends after 1 turns in 3950 BC\n");
    }

    #[test]
    fn test_csv_and_json_output() {
        let replay = sample_replay();
        let dir = tempfile::tempdir().unwrap();

        let csv_path = dir.path().join("scores.csv");
        write_csv(&replay, &csv_path).unwrap();
        assert_eq!(fs::read_to_string(&csv_path).unwrap(), "5\n8\n");

        let json: serde_json::Value = serde_json::from_str(&to_json(&replay).unwrap()).unwrap();
        assert_eq!(json["language"], "en");
        assert_eq!(json["civs"][0]["display_name"], "Roman Empire");
        assert_eq!(json["tile_updates"][0]["owner"]["kind"], "civ");
        assert_eq!(json["turn_index"], serde_json::json!([0, 1]));
    }
}
