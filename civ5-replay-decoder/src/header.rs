//! Replay header decoder
//!
//! The header is a fixed sequence of fields ahead of the first event record.
//! Several fields have no known meaning; they are still consumed to keep the
//! stream aligned and are kept verbatim in [`ReservedHeaderData`].

use crate::locale::{Language, MessageId};
use crate::reader::ByteStream;
use crate::tables;
use crate::types::{DecoderError, Result};
use serde::{Deserialize, Serialize};

/// Header fields whose meaning is unknown, kept in stream order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedHeaderData {
    /// Two values ahead of the difficulty level
    pub leading: [i32; 2],
    /// Four values after the map size id
    pub after_map_size: [i32; 4],
    /// Two values after the declared event count
    pub after_event_count: [i32; 2],
    /// Variable-length array of pairs, usually empty or a single entry
    pub pairs: Vec<(i32, i32)>,
    /// Last value before the first event
    pub trailing: i32,
}

/// Decoded replay header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHeader {
    pub difficulty_id: i32,
    pub leader_name: String,
    pub civ_name: String,
    pub civ_short_name: String,
    pub civ_adjective: String,
    /// Map script path, e.g. `Assets\Maps\Pangea.lua`
    pub map_script: String,
    pub map_size_id: i32,
    /// Enabled advanced game option ids
    pub game_options: Vec<i32>,
    /// Enabled victory type ids
    pub victory_types: Vec<i32>,
    /// Victory outcome id, -1 for a loss
    pub victory_type_id: i32,
    /// Number of event records the file claims to hold
    pub event_count: i32,
    pub reserved: ReservedHeaderData,
}

impl GameHeader {
    /// Decode the header from the current stream position
    pub fn decode(stream: &mut ByteStream) -> Result<Self> {
        let mut reserved = ReservedHeaderData::default();
        reserved.leading = [stream.read_i32_le()?, stream.read_i32_le()?];

        let offset = stream.position();
        let difficulty_id = stream.read_i32_le()?;
        if tables::difficulty(difficulty_id).is_none() {
            return Err(out_of_range(offset, "difficulty level", tables::DIFFICULTIES.len(), difficulty_id));
        }

        let leader_name = stream.read_length_prefixed_string()?;
        let civ_name = stream.read_length_prefixed_string()?;
        let civ_short_name = stream.read_length_prefixed_string()?;
        let civ_adjective = stream.read_length_prefixed_string()?;
        let map_script = stream.read_length_prefixed_string()?;

        let offset = stream.position();
        let map_size_id = stream.read_i32_le()?;
        if tables::map_size(map_size_id).is_none() {
            return Err(out_of_range(offset, "map size", tables::MAP_SIZES.len(), map_size_id));
        }

        for slot in reserved.after_map_size.iter_mut() {
            *slot = stream.read_i32_le()?;
        }

        let game_options = stream.read_int_array(None)?;
        let victory_types = stream.read_int_array(None)?;
        let victory_type_id = stream.read_i32_le()?;
        let event_count = stream.read_i32_le()?;

        reserved.after_event_count = [stream.read_i32_le()?, stream.read_i32_le()?];
        reserved.pairs = stream
            .read_int_tuples(None, 2)?
            .into_iter()
            .map(|pair| (pair[0], pair[1]))
            .collect();
        reserved.trailing = stream.read_i32_le()?;

        log::debug!("Replay content starts at offset {}", stream.position());

        Ok(GameHeader {
            difficulty_id,
            leader_name,
            civ_name,
            civ_short_name,
            civ_adjective,
            map_script,
            map_size_id,
            game_options,
            victory_types,
            victory_type_id,
            event_count,
            reserved,
        })
    }

    /// Map name: last path segment of the script, without its extension
    pub fn map_name(&self) -> &str {
        let file = self
            .map_script
            .rsplit(&['/', '\\'][..])
            .next()
            .unwrap_or(&self.map_script);
        match file.rsplit_once('.') {
            Some((stem, _)) => stem,
            None => file,
        }
    }

    /// Default map dimensions for the declared map size
    pub fn default_dimensions(&self) -> (i32, i32) {
        tables::map_size(self.map_size_id)
            .map(|size| (size.width, size.height))
            .unwrap_or((0, 0))
    }

    /// True if the "One-City Challenge" option is enabled
    pub fn one_city_challenge(&self) -> bool {
        self.game_options.contains(&tables::OPTION_ONE_CITY_CHALLENGE)
    }

    /// True if the "No City Razing" option is enabled
    pub fn no_razing(&self) -> bool {
        self.game_options.contains(&tables::OPTION_NO_RAZING)
    }

    /// Resolve the display strings for this header in `lang`
    pub fn labels(&self, lang: Language) -> HeaderLabels {
        let difficulty = tables::difficulty(self.difficulty_id)
            .map(|d| d.get(lang).to_string())
            .unwrap_or_default();
        let map_size = tables::map_size(self.map_size_id)
            .map(|m| m.name.get(lang).to_string())
            .unwrap_or_default();
        let victory_outcome = tables::victory_type(self.victory_type_id)
            .map(|v| v.get(lang).to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let game_options = self
            .game_options
            .iter()
            .map(|&id| label_or_id(tables::game_option(id), id, lang))
            .collect();
        let victory_types = self
            .victory_types
            .iter()
            .map(|&id| label_or_id(tables::victory_type(id), id, lang))
            .collect();

        HeaderLabels {
            language: lang,
            difficulty,
            map_size,
            map_name: self.map_name().to_string(),
            victory_outcome,
            game_options,
            victory_types,
        }
    }
}

fn out_of_range(offset: u64, context: &'static str, len: usize, found: i32) -> DecoderError {
    DecoderError::FormatInvariantViolation {
        offset,
        context,
        expected: format!("index in 0..{}", len),
        found: found.to_string(),
    }
}

fn label_or_id(entry: Option<&crate::locale::Localized>, id: i32, lang: Language) -> String {
    match entry {
        Some(entry) => entry.get(lang).to_string(),
        None => format!("#{}", id),
    }
}

/// Header values resolved to display strings in a fixed language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLabels {
    pub language: Language,
    pub difficulty: String,
    pub map_size: String,
    pub map_name: String,
    pub victory_outcome: String,
    pub game_options: Vec<String>,
    pub victory_types: Vec<String>,
}

impl HeaderLabels {
    /// Enabled options joined for display, "None" if there are none
    pub fn game_options_text(&self) -> String {
        join_or_none(&self.game_options, self.language)
    }

    /// Enabled victory types joined for display, "None" if there are none
    pub fn victory_types_text(&self) -> String {
        join_or_none(&self.victory_types, self.language)
    }
}

fn join_or_none(items: &[String], lang: Language) -> String {
    if items.is_empty() {
        MessageId::NoneLabel.text(lang).to_string()
    } else {
        items.join(", ")
    }
}
