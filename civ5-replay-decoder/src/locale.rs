//! Localized text lookup
//!
//! Replays store announcement text in the language the game was played in.
//! Every localized string is an English default plus a static list of
//! per-language overrides; lookups for a language without an override fall
//! back to English.

use crate::types::DecoderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the game ships text for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    De,
    Es,
    It,
    Ko,
    Pl,
    Ja,
    Ru,
}

impl Language {
    /// All languages, in detection order
    pub const ALL: [Language; 9] = [
        Language::En,
        Language::Fr,
        Language::De,
        Language::Es,
        Language::It,
        Language::Ko,
        Language::Pl,
        Language::Ja,
        Language::Ru,
    ];

    /// Two-letter language tag
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Es => "es",
            Language::It => "it",
            Language::Ko => "ko",
            Language::Pl => "pl",
            Language::Ja => "ja",
            Language::Ru => "ru",
        }
    }

    /// Parse a language tag, case-insensitively
    pub fn from_tag(tag: &str) -> Option<Language> {
        let tag = tag.trim().to_ascii_lowercase();
        Language::ALL.into_iter().find(|lang| lang.tag() == tag)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Language {
    type Err = DecoderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_tag(s).ok_or_else(|| DecoderError::UnknownLanguage(s.to_string()))
    }
}

/// A string with an English default and per-language overrides
#[derive(Debug, Clone, Copy)]
pub struct Localized {
    en: &'static str,
    overrides: &'static [(Language, &'static str)],
}

impl Localized {
    pub const fn new(en: &'static str, overrides: &'static [(Language, &'static str)]) -> Self {
        Self { en, overrides }
    }

    /// Text for `lang`, English if there is no override
    pub fn get(&self, lang: Language) -> &'static str {
        self.explicit(lang).unwrap_or(self.en)
    }

    /// Text for `lang` only if the table actually carries it
    pub fn explicit(&self, lang: Language) -> Option<&'static str> {
        if lang == Language::En {
            return Some(self.en);
        }
        self.overrides
            .iter()
            .find(|(l, _)| *l == lang)
            .map(|(_, text)| *text)
    }

    /// Every (language, text) pair the table defines, English first
    pub fn entries(&self) -> impl Iterator<Item = (Language, &'static str)> + '_ {
        std::iter::once((Language::En, self.en)).chain(self.overrides.iter().copied())
    }
}

use Language::*;

/// Identifiers of the phrases looked up by the decoder and its consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    /// "Turn"
    Turn,
    /// "In" (as in "In 1912 AD, ...")
    In,
    /// "of the " (leader summary)
    OfThe,
    /// "turns played"
    TurnsPlayed,
    /// "Game ends after {turns} turns in {year}"
    GameEnds,
    /// Shown for empty option lists
    NoneLabel,
    /// Substring of the victory announcement
    Victory,
    /// Substring of the city-founded announcement
    Founded,
    /// Capture pattern extracting a founded city's name
    FoundedPattern,
    /// Substring of the city-razed announcement
    Razed,
    /// Substring of the city-captured announcement
    Captured,
}

impl MessageId {
    fn table(self) -> &'static Localized {
        match self {
            MessageId::Turn => &TURN,
            MessageId::In => &IN,
            MessageId::OfThe => &OF_THE,
            MessageId::TurnsPlayed => &TURNS_PLAYED,
            MessageId::GameEnds => &GAME_ENDS,
            MessageId::NoneLabel => &NONE_LABEL,
            MessageId::Victory => &VICTORY,
            MessageId::Founded => &FOUNDED,
            MessageId::FoundedPattern => &FOUNDED_PATTERN,
            MessageId::Razed => &RAZED,
            MessageId::Captured => &CAPTURED,
        }
    }

    /// Localized text for this message
    pub fn text(self, lang: Language) -> &'static str {
        self.table().get(lang)
    }

    /// Underlying table, for scanning all languages
    pub fn localized(self) -> &'static Localized {
        self.table()
    }
}

/// Look a message up by language tag, falling back to English
pub fn lookup(message: MessageId, tag: &str) -> &'static str {
    message.text(Language::from_tag(tag).unwrap_or_default())
}

/// Phrase sets scanned during locale detection, in priority order
pub const DETECTION_PHRASES: [MessageId; 4] = [
    MessageId::Founded,
    MessageId::Captured,
    MessageId::Razed,
    MessageId::Victory,
];

static TURN: Localized = Localized::new(
    "Turn",
    &[(Fr, "Tour"), (De, "Runde"), (Es, "Turno"), (It, "Turno"), (Ko, "턴"), (Pl, "Tura")],
);
static IN: Localized = Localized::new("In", &[(Fr, "En")]);
static OF_THE: Localized = Localized::new("of the ", &[(Fr, "de l'")]);
static TURNS_PLAYED: Localized = Localized::new("turns played", &[(Fr, "tours de jeu")]);
static GAME_ENDS: Localized = Localized::new(
    "Game ends after {turns} turns in {year}",
    &[(Fr, "Le jeu a pris fin après {turns} tours en {year}")],
);
static NONE_LABEL: Localized = Localized::new("None", &[]);

static VICTORY: Localized = Localized::new(
    " has won ",
    &[
        (Fr, " a remporté "),
        (De, " hat den Sieg in der Kategorie "),
        (Es, " ha conseguido una "),
        (It, " ha riportato una vittoria "),
        (Ko, " 승리를 거두었습니다"),
        (Pl, " wygrywa przez Zwycięstwo "),
        (Ja, "勝利を収めた"),
        (Ru, " одерживает "),
    ],
);
static FOUNDED: Localized = Localized::new(
    " is founded.",
    &[
        (Fr, " fondée !"),
        (De, " wurde gegründet."),
        (Es, "Se funda "),
        (It, " è fondata."),
        (Ko, "이(가) 건설되었습니다."),
        (Pl, "Powstaje "),
        (Ja, "設され"),
        (Ru, "Основан город"),
    ],
);
static FOUNDED_PATTERN: Localized = Localized::new(
    "(.*) is founded.",
    &[
        (Fr, "(.*) fondée !"),
        (De, "Die Stadt (.*) wurde gegründet."),
        (Es, "Se funda (.*)."),
        (It, "(.*) è fondata."),
        (Ko, "(.*)이(가) 건설되었습니다."),
        (Pl, "Powstaje (.*)."),
        (Ja, "(.*)が.設され.*た。"),
        (Ru, "Основан город (.*)."),
    ],
);
static RAZED: Localized = Localized::new(
    " was set ablaze by ",
    &[
        (Fr, " incendié "),
        (De, " in Brand gesteckt"),
        (Es, " ha sido arrasada por el "),
        (It, " è stata messa a ferro e fuoco dall"),
        (Ko, "(으)로 인해 불바다가 되었습니다"),
        (Pl, " podpala "),
        (Ru, " огню город "),
    ],
);
static CAPTURED: Localized = Localized::new(
    " was captured by ",
    &[
        (Fr, " pris "),
        (De, " eingenommen"),
        (Es, " ha capturado "),
        (It, " è stata catturata dall"),
        (Ko, "에 점령당했습니다"),
        (Pl, " zdobywa "),
        (Ja, "に占領されました"),
        (Ru, " захвачен державой "),
    ],
);
