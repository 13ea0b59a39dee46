//! Civ5 Replay Reader CLI Application
//!
//! Command-line interface for the replay decoder. It uses the
//! civ5-replay-decoder library and adds:
//! - Configuration file loading
//! - Background map discovery next to the replay
//! - Plain-text event listing
//! - Histogram CSV and replay JSON export

use anyhow::{bail, Context, Result};
use civ5_replay_decoder::{GameMap, Language, ReplayDecoder};
use clap::Parser;
use std::path::{Path, PathBuf};

mod config;
mod report;

/// Civ5 Replay Reader - Decode Civilization V replay files
#[derive(Parser, Debug)]
#[command(name = "civ5-replay-cli")]
#[command(about = "Decode Civilization V replay files (.Civ5Replay)", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the .Civ5Replay file to decode
    #[arg(value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Background map file (default: sibling .Civ5Map, if present)
    #[arg(short, long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Replay language tag (en, fr, de, es, it, ko, pl, ja, ru); detected if omitted
    #[arg(short, long, value_name = "TAG")]
    locale: Option<Language>,

    /// Write the score histogram as CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Write the decoded replay as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print the end-of-game line
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Civ5 Replay Reader CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using decoder library v{}", civ5_replay_decoder::VERSION);

    let app_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => config::AppConfig::default(),
    };
    let settings = merge(args, app_config);

    let Some(replay_path) = settings.replay.clone() else {
        println!("Civ5 Replay Reader - No input specified");
        println!("\nQuick Start:");
        println!("  civ5-replay-cli game.Civ5Replay");
        println!("  civ5-replay-cli game.Civ5Replay --locale fr --csv scores.csv");
        println!("\nUse --help for more options");
        return Ok(());
    };

    run(&replay_path, &settings)
}

/// Command line flags merged over the configuration file
#[derive(Debug)]
struct Settings {
    replay: Option<PathBuf>,
    map: Option<PathBuf>,
    decoder: civ5_replay_decoder::DecoderConfig,
    csv: Option<PathBuf>,
    json: Option<PathBuf>,
    quiet: bool,
}

fn merge(args: Args, file: config::AppConfig) -> Settings {
    let mut decoder = file.decoder;
    if let Some(language) = args.locale {
        decoder = decoder.with_language(language);
    }
    Settings {
        replay: args.replay.or(file.input.replay),
        map: args.map.or(file.input.map),
        decoder,
        csv: args.csv.or(file.output.csv),
        json: args.json.or(file.output.json),
        quiet: args.quiet || file.output.quiet,
    }
}

/// `game.Civ5Replay` -> `game.Civ5Map`, if that file exists
fn sibling_map(replay: &Path) -> Option<PathBuf> {
    let is_replay = replay
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("Civ5Replay"));
    if !is_replay {
        return None;
    }
    let candidate = replay.with_extension("Civ5Map");
    candidate.is_file().then_some(candidate)
}

fn run(replay_path: &Path, settings: &Settings) -> Result<()> {
    if !replay_path.is_file() {
        bail!("Replay file not found: {:?}", replay_path);
    }

    let mut decoder = ReplayDecoder::open(replay_path, settings.decoder.clone())
        .with_context(|| format!("Failed to open replay: {:?}", replay_path))?;

    let map_path = settings.map.clone().or_else(|| sibling_map(replay_path));
    if let Some(map_path) = map_path {
        let map = GameMap::open(&map_path)
            .with_context(|| format!("Failed to decode map: {:?}", map_path))?;
        log::info!("Background map: {}", map.info());
        decoder.set_background(&map);
    }

    let replay = decoder
        .read_full()
        .with_context(|| format!("Failed to decode replay: {:?}", replay_path))?;

    print!("{}", report::text_report(&replay, settings.quiet));

    if let Some(path) = &settings.csv {
        report::write_csv(&replay, path)?;
    }
    if let Some(path) = &settings.json {
        report::write_json(&replay, path)?;
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_map_discovery() {
        let dir = tempfile::tempdir().unwrap();
        let replay = dir.path().join("game.Civ5Replay");
        std::fs::write(&replay, report::tests::sample_replay_bytes()).unwrap();
        assert_eq!(sibling_map(&replay), None);

        let map = dir.path().join("game.Civ5Map");
        std::fs::write(&map, b"").unwrap();
        assert_eq!(sibling_map(&replay), Some(map));
        assert_eq!(sibling_map(&dir.path().join("game.txt")), None);
    }

    #[test]
    fn test_flags_override_config_file() {
        let args = Args::parse_from(["civ5-replay-cli", "--locale", "de", "--csv", "a.csv"]);
        let mut file = config::AppConfig::default();
        file.input.replay = Some(PathBuf::from("from_file.Civ5Replay"));
        file.output.csv = Some(PathBuf::from("b.csv"));
        file.output.quiet = true;

        let settings = merge(args, file);
        assert_eq!(settings.replay, Some(PathBuf::from("from_file.Civ5Replay")));
        assert_eq!(settings.csv, Some(PathBuf::from("a.csv")));
        assert_eq!(settings.decoder.language, Some(Language::De));
        assert!(settings.quiet);
    }

    #[test]
    fn test_run_writes_exports() {
        let dir = tempfile::tempdir().unwrap();
        let replay = dir.path().join("game.Civ5Replay");
        std::fs::write(&replay, report::tests::sample_replay_bytes()).unwrap();

        let settings = Settings {
            replay: Some(replay.clone()),
            map: None,
            decoder: Default::default(),
            csv: Some(dir.path().join("scores.csv")),
            json: Some(dir.path().join("replay.json")),
            quiet: true,
        };
        run(&replay, &settings).unwrap();
        assert!(dir.path().join("scores.csv").is_file());
        assert!(dir.path().join("replay.json").is_file());
    }

    #[test]
    fn test_missing_replay_is_an_error() {
        let settings = Settings {
            replay: None,
            map: None,
            decoder: Default::default(),
            csv: None,
            json: None,
            quiet: true,
        };
        assert!(run(Path::new("/nonexistent.Civ5Replay"), &settings).is_err());
    }
}
