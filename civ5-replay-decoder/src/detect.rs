//! Replay language detection
//!
//! Replays do not record the language they were played in. Detection decodes
//! events speculatively from the end of the header and scans their texts for
//! known phrases; the first hit decides. The stream is always rewound to where
//! it started, so the real decoding pass sees the same events again.

use crate::events::{EventDecoder, Record};
use crate::locale::{Language, MessageId, DETECTION_PHRASES};
use crate::reader::ByteStream;
use crate::types::Result;

/// A successful detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub language: Language,
    /// Phrase set that matched
    pub phrase: MessageId,
    /// Number of logged events scanned, including the matching one
    pub events_scanned: usize,
}

/// Find the first known phrase in `text`
///
/// Phrase sets are tried in priority order, languages in [`Language::ALL`]
/// order within each set.
pub fn match_phrase(text: &str) -> Option<(Language, MessageId)> {
    DETECTION_PHRASES.iter().find_map(|&phrase| {
        phrase
            .localized()
            .entries()
            .find(|(_, needle)| text.contains(needle))
            .map(|(lang, _)| (lang, phrase))
    })
}

/// Scan events from the current position for a known phrase
///
/// Stops at the first match, the terminal record, the declared event count or
/// the end of the stream, whichever comes first. The stream position is
/// restored before returning, also on error.
pub fn detect_language(stream: &mut ByteStream, declared_event_count: i32) -> Result<Option<Detection>> {
    let start = stream.position();
    let result = scan(stream, declared_event_count);
    stream.rewind_to(start);
    result
}

fn scan(stream: &mut ByteStream, declared_event_count: i32) -> Result<Option<Detection>> {
    let mut decoder = EventDecoder::new(declared_event_count);
    let mut scanned = 0usize;

    loop {
        let record = match decoder.decode_record(stream, scanned) {
            Ok(Some(record)) => record,
            Ok(None) => return Ok(None),
            Err(e) if e.is_end_of_stream() => {
                log::debug!("Language scan hit end of stream after {} events", scanned);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        match record {
            Record::Terminal(_) => return Ok(None),
            Record::Resynced { .. } => {}
            Record::Normal(draft) | Record::Patched(draft) => {
                scanned += 1;
                if let Some((language, phrase)) = match_phrase(draft.event().text()) {
                    return Ok(Some(Detection {
                        language,
                        phrase,
                        events_scanned: scanned,
                    }));
                }
            }
        }

        if scanned as i64 >= declared_event_count as i64 - 1 {
            return Ok(None);
        }
    }
}
