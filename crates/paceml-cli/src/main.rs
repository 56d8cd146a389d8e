//! Command-line front end for PaceML.
//!
//! Usage:
//!   paceml `<file>` [--format json|dump|tokens] [--compact]  - Parse a workout file
//!   paceml                                                  - Parse the default workout
//!   paceml --list                                           - List configured workouts

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use paceml_config::Config;
use paceml_engine::{LoadError, Token, Workout, io, tokenize};
use std::path::{Path, PathBuf};
use std::process;

/// Exit code when the workout file does not exist.
const EXIT_NOT_FOUND: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Structured JSON document
    Json,
    /// Human-readable listing
    Dump,
    /// Token stream, one token per line
    Tokens,
}

#[derive(Debug, Parser)]
#[command(name = "paceml", version, about = "Parse PaceML workout files")]
struct Cli {
    /// Workout file. Defaults to the configured default workout.
    file: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Config file to use instead of ~/.config/paceml/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// List workout files in the configured workouts directory
    #[arg(long, conflicts_with = "file")]
    list: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(exit_code(&e));
    }
}

fn exit_code(e: &anyhow::Error) -> i32 {
    let not_found = e
        .downcast_ref::<LoadError>()
        .is_some_and(LoadError::is_not_found)
        || matches!(
            e.downcast_ref::<io::IoError>(),
            Some(io::IoError::NotFound(_))
        );
    if not_found { EXIT_NOT_FOUND } else { 1 }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    if cli.list {
        let Some(config) = config else {
            bail!(
                "--list needs a config file with `workouts_dir` (expected at {})",
                Config::config_path().display()
            );
        };
        for path in io::scan_workout_files(&config.workouts_dir)? {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let path = match (&cli.file, &config) {
        (Some(file), _) => file.clone(),
        (None, Some(config)) => config.default_workout_path(),
        (None, None) => bail!(
            "No workout file provided and no config file found\n\
             Usage: paceml <file.paceml>\n\
             Or create a config file at {}",
            Config::config_path().display()
        ),
    };
    log::info!("Workout file: {}", path.display());

    let pretty = !cli.compact && config.as_ref().is_none_or(|c| c.pretty);
    let output = match cli.format {
        Format::Tokens => {
            let text = io::read_file(&path)?;
            render_tokens(&tokenize(&text))
        }
        Format::Json => render_json(&io::load_workout(&path)?, pretty)?,
        Format::Dump => io::load_workout(&path)?.dump(),
    };

    print!("{output}");
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Option<Config>> {
    match explicit {
        Some(path) => {
            let config = Config::load_from_path(path)?
                .with_context(|| format!("Config file not found: {}", path.display()))?;
            Ok(Some(config))
        }
        None => Ok(Config::load()?),
    }
}

fn render_json(workout: &Workout, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        workout.to_json_pretty()?
    } else {
        workout.to_json()?
    };
    json.push('\n');
    Ok(json)
}

fn render_tokens(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|token| format!("{}\t{}\t{}\n", token.kind, token.line, token.text))
        .collect()
}
