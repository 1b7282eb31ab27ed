//! Wordle - CLI
//!
//! Play Wordle in the terminal, full-screen or line by line.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{run_simple, score_words},
    config::{self, Config},
    core::Word,
    game::GameRules,
    interactive::{App, run_tui},
    output::row_to_emoji,
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: ~/.wordle/config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Word list file: one word per line, or JSON {"words": [...]}
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Fixed answer for the first game (must be in the word list)
    #[arg(short, long, global = true)]
    answer: Option<String>,

    /// Seed for reproducible answer draws
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Guesses allowed per game
    #[arg(short, long, global = true)]
    max_guesses: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen game (default)
    Play,

    /// Line-based game without the full-screen interface
    Simple,

    /// Score a guess against a target and print the result
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },
}

/// Settings after merging the config file with command-line flags
struct Settings {
    config: Config,
    rules: GameRules,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => init_file_logging(),
        Commands::Simple | Commands::Score { .. } => init_stderr_logging(),
    }

    if let Commands::Score { guess, target } = &command {
        let row = score_words(guess, target)?;
        println!("{} {row}", row_to_emoji(&row));
        return Ok(());
    }

    let settings = load_settings(&cli)?;
    let list = load_wordlist(settings.config.wordlist.as_deref())?;
    let first_answer = cli
        .answer
        .as_deref()
        .map(|answer| resolve_answer(&list, answer))
        .transpose()?;

    let mut rng = match settings.config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match command {
        Commands::Simple => run_simple(&list, settings.rules, &mut rng, first_answer),
        _ => {
            let app = App::new(
                &list,
                settings.rules,
                rng,
                first_answer,
                settings.config.alert_duration(),
            )?;
            run_tui(app)
        }
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut config = Config::load(cli.config.as_deref()).context("failed to load config")?;

    if let Some(path) = &cli.wordlist {
        config.wordlist = Some(path.clone());
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(max_guesses) = cli.max_guesses {
        config.max_guesses = max_guesses;
    }

    let rules = config.rules()?;
    debug!(?config, "settings loaded");
    Ok(Settings { config, rules })
}

fn load_wordlist(path: Option<&Path>) -> Result<WordList> {
    match path {
        Some(path) => load_from_file(path).context("failed to load word list"),
        None => {
            let list = WordList::embedded();
            info!(words = list.len(), "using embedded word list");
            Ok(list)
        }
    }
}

fn resolve_answer(list: &WordList, answer: &str) -> Result<Word> {
    let word = Word::new(answer).with_context(|| format!("invalid answer '{answer}'"))?;
    if !list.contains(word.text()) {
        bail!("answer '{word}' is not in the word list");
    }
    Ok(word)
}

/// Log to stderr, filtered by `RUST_LOG` (default: warn)
fn init_stderr_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log to `~/.wordle/wordle.log` while the full-screen game owns the terminal
fn init_file_logging() {
    let Some(log_path) = config::log_path() else {
        return;
    };
    if let Some(parent) = log_path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    info!("wordle starting...");
}
