//! Synthetic replay buffers for unit tests

use byteorder::{LittleEndian, WriteBytesExt};

/// Field values for a synthetic header
#[derive(Debug, Clone)]
pub(crate) struct HeaderFixture {
    pub difficulty: i32,
    pub leader: String,
    pub civ: String,
    pub map_script: String,
    pub map_size: i32,
    pub game_options: Vec<i32>,
    pub victory_types: Vec<i32>,
    pub victory_type: i32,
    pub event_count: i32,
    pub pairs: Vec<(i32, i32)>,
}

impl Default for HeaderFixture {
    fn default() -> Self {
        Self {
            difficulty: 3,
            leader: "Augustus Caesar".to_string(),
            civ: "Roman Empire".to_string(),
            map_script: "Assets\\Maps\\Pangaea.lua".to_string(),
            map_size: 3,
            game_options: Vec::new(),
            victory_types: vec![0, 1, 2, 3, 4],
            victory_type: 2,
            event_count: 100,
            pairs: Vec::new(),
        }
    }
}

impl HeaderFixture {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut w = ReplayWriter::new();
        w.int(5).int(0).int(self.difficulty);
        w.string(&self.leader)
            .string(&self.civ)
            .string("Rome")
            .string("Roman")
            .string(&self.map_script);
        w.int(self.map_size);
        w.int(0).int(1).int(0).int(2);
        w.ints(&self.game_options).ints(&self.victory_types);
        w.int(self.victory_type).int(self.event_count);
        w.int(0).int(1);
        w.int(self.pairs.len() as i32);
        for &(a, b) in &self.pairs {
            w.int(a).int(b);
        }
        w.int(-1);
        w.into_bytes()
    }
}

/// Little-endian writer mirroring the replay layout
#[derive(Debug, Default)]
pub(crate) struct ReplayWriter {
    buf: Vec<u8>,
}

impl ReplayWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(fixture: &HeaderFixture) -> Self {
        Self {
            buf: fixture.to_bytes(),
        }
    }

    pub fn int(&mut self, value: i32) -> &mut Self {
        self.buf.write_i32::<LittleEndian>(value).unwrap();
        self
    }

    pub fn ints(&mut self, values: &[i32]) -> &mut Self {
        self.int(values.len() as i32);
        for &v in values {
            self.int(v);
        }
        self
    }

    pub fn string(&mut self, s: &str) -> &mut Self {
        self.int(s.len() as i32);
        self.buf.extend_from_slice(s.as_bytes());
        self
    }

    /// A normal record: discriminator 1, fields, text, terminator
    pub fn event(&mut self, turn: i32, kind: i32, x: i32, y: i32, civ: i32, text: &str) -> &mut Self {
        self.int(1).int(turn).int(kind).int(x).int(y).int(civ);
        self.string(text);
        self.int(-1)
    }

    /// The terminal record
    pub fn terminal(&mut self, start_year: i32, final_turn: i32, text: &str) -> &mut Self {
        self.int(0).int(start_year).int(final_turn);
        self.string(text)
    }

    /// Trailing score block; `scores[civ][turn]`
    pub fn histogram(&mut self, scores: &[Vec<i32>]) -> &mut Self {
        self.int(0).int(12345).int(scores.len() as i32);
        for civ in scores {
            self.int(0).int(0).int(civ.len() as i32);
            for &score in civ {
                self.int(score).int(1).int(2).int(3);
            }
        }
        self
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
