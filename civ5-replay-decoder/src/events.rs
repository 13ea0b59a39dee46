//! Event record state machine
//!
//! Decodes one record per call. Most records are "normal" events, but the
//! format has a few irregular shapes that have to be recognized by their
//! leading discriminator:
//!
//! - `0`, or anything other than `1`/`2` once the declared event count is
//!   (nearly) reached: the terminal record, which ends the replay
//! - `-1`: a record seen in a single known file; one value is dropped and a
//!   fixed-shape placeholder stands in for the real fields
//! - anything else: unknown shape; the decoder scans forward to the next `-1`
//!   and hands back a placeholder that is not part of the event log

use crate::reader::ByteStream;
use crate::types::{DecoderError, EventDraft, Result};
use std::ops::Range;

/// Value every normal record ends with
pub const RECORD_TERMINATOR: i32 = -1;

/// Decoder lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    /// More records may follow
    Ready,
    /// The terminal record has been decoded
    Exhausted,
}

/// One decoded record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A regular event
    Normal(EventDraft),
    /// The single-file `-1` anomaly, patched to a fixed shape
    Patched(EventDraft),
    /// A record of unknown shape that was skipped up to the next `-1`
    Resynced {
        placeholder: EventDraft,
        skipped: Range<u64>,
    },
    /// The record that ends the replay
    Terminal(EventDraft),
}

impl Record {
    /// True if the record belongs in the event log
    pub fn is_logged(&self) -> bool {
        !matches!(self, Record::Resynced { .. })
    }
}

/// Decodes event records against the header's declared event count
#[derive(Debug, Clone)]
pub struct EventDecoder {
    declared_event_count: i32,
    state: DecoderState,
}

impl EventDecoder {
    pub fn new(declared_event_count: i32) -> Self {
        Self {
            declared_event_count,
            state: DecoderState::Ready,
        }
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Decode the next record
    ///
    /// `events_so_far` is the length of the event log before this record; it
    /// drives the end-of-replay heuristic. Returns `Ok(None)` once the
    /// terminal record has been produced.
    pub fn decode_record(&mut self, stream: &mut ByteStream, events_so_far: usize) -> Result<Option<Record>> {
        if self.state == DecoderState::Exhausted {
            return Ok(None);
        }

        let start = stream.position();
        let discriminator = stream.read_i32_le()?;

        // Some files carry one more event than declared, hence ">=".
        let near_end = events_so_far as i64 >= self.declared_event_count as i64 - 1;
        if (near_end && !matches!(discriminator, 1 | 2)) || discriminator == 0 {
            let start_year = stream.read_i32_le()?;
            let final_turn = stream.read_i32_le()?;
            let text = stream.read_length_prefixed_string()?;
            log::debug!(
                "Terminal record at offset {} (discriminator {}, {} events so far)",
                start,
                discriminator,
                events_so_far
            );
            self.state = DecoderState::Exhausted;
            return Ok(Some(Record::Terminal(EventDraft::terminal(
                discriminator,
                start_year,
                final_turn,
                text,
            ))));
        }

        match discriminator {
            -1 => {
                stream.read_i32_le()?;
                let text = stream.read_length_prefixed_string()?;
                expect_terminator(stream)?;
                log::debug!("Patched anomalous record at offset {}", start);
                Ok(Some(Record::Patched(EventDraft::placeholder(text))))
            }
            1 | 2 => {
                let turn = stream.read_i32_le()?;
                let kind = stream.read_i32_le()?;
                let x = stream.read_i32_le()?;
                let y = stream.read_i32_le()?;
                let civ = stream.read_i32_le()?;
                let text = stream.read_length_prefixed_string()?;
                expect_terminator(stream)?;
                log::trace!("Event turn {} kind {} at ({}, {}) civ {}", turn, kind, x, y, civ);
                Ok(Some(Record::Normal(EventDraft::new(turn, kind, x, y, civ, text))))
            }
            other => {
                let skipped = resync(stream, start)?;
                log::warn!(
                    "Unrecognized record discriminator {} at offset {}; skipped bytes {}..{}",
                    other,
                    start,
                    skipped.start,
                    skipped.end
                );
                Ok(Some(Record::Resynced {
                    placeholder: EventDraft::placeholder(String::new()),
                    skipped,
                }))
            }
        }
    }
}

/// Scan forward one `i32` at a time until a `-1` or the end of the stream
fn resync(stream: &mut ByteStream, start: u64) -> Result<Range<u64>> {
    loop {
        match stream.read_i32_le() {
            Ok(RECORD_TERMINATOR) => break,
            Ok(_) => continue,
            Err(e) if e.is_end_of_stream() => break,
            Err(e) => return Err(e),
        }
    }
    Ok(start..stream.position())
}

fn expect_terminator(stream: &mut ByteStream) -> Result<()> {
    let offset = stream.position();
    let found = stream.read_i32_le()?;
    if found != RECORD_TERMINATOR {
        return Err(DecoderError::FormatInvariantViolation {
            offset,
            context: "event record terminator",
            expected: RECORD_TERMINATOR.to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}
