//! Main decoder API
//!
//! [`ReplayDecoder`] owns one replay byte stream and drives a decoding
//! session over it:
//!
//! 1. the header is decoded once
//! 2. the replay language is fixed, either from the configuration or by a
//!    speculative scan over the events that rewinds the stream afterwards
//! 3. events are decoded one per call; each passes through the city tracker
//!    and the ownership log before it is appended
//! 4. after the terminal record the score histogram is decoded
//!
//! [`ReplayDecoder::read_full`] runs all of it and returns a [`Replay`].

use crate::cities::{CityTracker, CivRoster};
use crate::config::DecoderConfig;
use crate::detect;
use crate::events::{EventDecoder, Record};
use crate::header::{GameHeader, HeaderLabels};
use crate::histogram::Histogram;
use crate::locale::{Language, MessageId};
use crate::map::GameMap;
use crate::ownership::OwnershipTracker;
use crate::reader::ByteStream;
use crate::replay::Replay;
use crate::types::{GameSummary, ReplayEvent, Result};
use std::path::Path;

/// State that exists once the language is fixed
#[derive(Debug)]
struct Session {
    header: GameHeader,
    language: Language,
    labels: HeaderLabels,
    records: EventDecoder,
    log: Vec<ReplayEvent>,
    cities: CityTracker,
    roster: CivRoster,
    ownership: OwnershipTracker,
    histogram: Option<Histogram>,
    summary: Option<GameSummary>,
    victory_text: String,
    width: i32,
    height: i32,
    finished: bool,
}

impl Session {
    fn observe(&mut self, event: &ReplayEvent) {
        if event.text().contains(MessageId::Victory.text(self.language)) {
            self.victory_text = event.text().to_string();
        }
        self.width = self.width.max(event.x().saturating_add(1));
        self.height = self.height.max(event.y().saturating_add(1));
    }
}

/// Decoding session over one replay
#[derive(Debug)]
pub struct ReplayDecoder {
    stream: ByteStream,
    config: DecoderConfig,
    header: Option<GameHeader>,
    content_start: u64,
    background: Option<(i32, i32)>,
    session: Option<Session>,
}

impl ReplayDecoder {
    /// Create a decoder over an in-memory replay
    pub fn from_bytes(data: Vec<u8>, config: DecoderConfig) -> Self {
        Self {
            stream: ByteStream::new(data),
            config,
            header: None,
            content_start: 0,
            background: None,
            session: None,
        }
    }

    /// Load a replay file
    ///
    /// # Example
    /// ```no_run
    /// use civ5_replay_decoder::{DecoderConfig, ReplayDecoder};
    /// use std::path::Path;
    ///
    /// let decoder = ReplayDecoder::open(Path::new("game.Civ5Replay"), DecoderConfig::new()).unwrap();
    /// let replay = decoder.read_full().unwrap();
    /// println!("{}", replay.leader_info());
    /// ```
    pub fn open(path: &Path, config: DecoderConfig) -> Result<Self> {
        log::info!("Loading replay file: {:?}", path);
        let data = std::fs::read(path)?;
        Ok(Self::from_bytes(data, config))
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Current byte offset in the replay stream
    pub fn position(&self) -> u64 {
        self.stream.position()
    }

    /// Use the dimensions of a background map instead of the map size default
    pub fn set_background(&mut self, map: &GameMap) {
        log::debug!("Background map {} replaces default dimensions", map.info());
        self.background = Some((map.width, map.height));
        if let Some(session) = self.session.as_mut() {
            session.width = session.width.max(map.width);
            session.height = session.height.max(map.height);
        }
    }

    /// Decode the header; later calls return the already decoded one
    pub fn read_header(&mut self) -> Result<&GameHeader> {
        let header = match self.header.take() {
            Some(header) => header,
            None => {
                let header = GameHeader::decode(&mut self.stream)?;
                self.content_start = self.stream.position();
                log::info!(
                    "Header decoded: {} ({}), {} events declared",
                    header.leader_name,
                    header.civ_name,
                    header.event_count
                );
                header
            }
        };
        Ok(self.header.insert(header))
    }

    pub fn header(&self) -> Option<&GameHeader> {
        self.header.as_ref()
    }

    /// Offset of the first event record, once the header is decoded
    pub fn content_start(&self) -> Option<u64> {
        self.header.as_ref().map(|_| self.content_start)
    }

    /// Language of the session, once it is fixed
    pub fn language(&self) -> Option<Language> {
        self.session.as_ref().map(|s| s.language)
    }

    /// Fix the replay language, detecting it if it is not configured
    ///
    /// Detection leaves the stream at the start of the first event record.
    pub fn resolve_language(&mut self) -> Result<Language> {
        if let Some(session) = &self.session {
            return Ok(session.language);
        }
        let session = self.start_session()?;
        let language = session.language;
        self.session = Some(session);
        Ok(language)
    }

    fn start_session(&mut self) -> Result<Session> {
        let header = self.read_header()?.clone();
        let language = match self.config.language {
            Some(language) => {
                log::info!("Using configured language: {}", language);
                language
            }
            None => match detect::detect_language(&mut self.stream, header.event_count)? {
                Some(detection) => {
                    log::info!(
                        "Detected language {} from {:?} phrase after {} events",
                        detection.language,
                        detection.phrase,
                        detection.events_scanned
                    );
                    detection.language
                }
                None => {
                    log::warn!(
                        "No known phrase found; falling back to {}",
                        self.config.fallback_language
                    );
                    self.config.fallback_language
                }
            },
        };

        let (width, height) = self.background.unwrap_or_else(|| header.default_dimensions());
        Ok(Session {
            language,
            labels: header.labels(language),
            records: EventDecoder::new(header.event_count),
            cities: CityTracker::new(language, header.one_city_challenge())?,
            header,
            log: Vec::new(),
            roster: CivRoster::new(),
            ownership: OwnershipTracker::new(),
            histogram: None,
            summary: None,
            victory_text: String::new(),
            width,
            height,
            finished: false,
        })
    }

    /// Events appended so far
    pub fn event_log(&self) -> &[ReplayEvent] {
        self.session.as_ref().map(|s| s.log.as_slice()).unwrap_or(&[])
    }

    /// True once no more events can be decoded
    pub fn is_finished(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.finished)
    }

    /// Decode the next event
    ///
    /// Returns `Ok(None)` after the terminal record or once the stream is
    /// exhausted. A record skipped by resynchronization is returned as a
    /// placeholder but is not part of the event log. Any error ends the
    /// session.
    pub fn next_event(&mut self) -> Result<Option<ReplayEvent>> {
        self.resolve_language()?;
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };
        if session.finished || self.stream.is_exhausted() {
            session.finished = true;
            return Ok(None);
        }

        let record = match session.records.decode_record(&mut self.stream, session.log.len()) {
            Ok(Some(record)) => record,
            Ok(None) => {
                session.finished = true;
                return Ok(None);
            }
            Err(e) => {
                session.finished = true;
                return Err(e);
            }
        };

        match record {
            Record::Resynced { placeholder, .. } => Ok(Some(placeholder.finish())),
            Record::Terminal(draft) => {
                let event = draft.finish();
                session.summary = event.summary().cloned();
                session.log.push(event.clone());
                session.finished = true;
                log::info!(
                    "Replay finished after {} events on turn {}",
                    session.log.len(),
                    event.turn()
                );
                session.histogram = match Histogram::decode(&mut self.stream) {
                    Ok(histogram) => Some(histogram),
                    Err(e) if e.is_end_of_stream() => {
                        log::warn!("Score histogram is truncated: {}", e);
                        None
                    }
                    Err(e) => return Err(e),
                };
                Ok(Some(event))
            }
            Record::Normal(mut draft) | Record::Patched(mut draft) => {
                session
                    .cities
                    .classify(&mut draft, &mut session.roster, &mut session.ownership);
                let event = draft.finish();
                session.ownership.record_event(&event);
                session.observe(&event);
                session.log.push(event.clone());
                Ok(Some(event))
            }
        }
    }

    /// Iterate over the remaining events
    pub fn events(&mut self) -> Events<'_> {
        Events { decoder: self }
    }

    /// Decode everything and assemble the replay
    ///
    /// A stream that ends before the terminal record yields a partial replay.
    pub fn read_full(mut self) -> Result<Replay> {
        loop {
            match self.next_event() {
                Ok(Some(_)) => continue,
                Ok(None) => break,
                Err(e) if e.is_end_of_stream() => {
                    log::warn!(
                        "Replay ended early after {} events: {}",
                        self.event_log().len(),
                        e
                    );
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        self.into_replay()
    }

    /// Assemble what has been decoded so far
    pub fn into_replay(mut self) -> Result<Replay> {
        let session = match self.session.take() {
            Some(session) => session,
            None => self.start_session()?,
        };
        Ok(Replay {
            header: session.header,
            labels: session.labels,
            language: session.language,
            events: session.log,
            civs: session.roster.into_vec(),
            histogram: session.histogram,
            summary: session.summary,
            victory_text: session.victory_text,
            width: session.width,
            height: session.height,
            ownership: session.ownership,
        })
    }
}

/// Iterator over the events of a [`ReplayDecoder`]
///
/// Stops after the first error.
pub struct Events<'a> {
    decoder: &'a mut ReplayDecoder,
}

impl Iterator for Events<'_> {
    type Item = Result<ReplayEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decoder.next_event().transpose()
    }
}
