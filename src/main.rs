//*** START FILE: src/main.rs ***//

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sentence_builder::app::run_gui;
use sentence_builder::config::{load_config_from_file, Config};
use sentence_builder::dictionary_io::load_dictionary;
use sentence_builder::render;
use sentence_builder::SentenceSession;

#[derive(Parser, Debug)]
#[command(version, about = "Pick words from an annotated dictionary and see the sentence's tone")]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Dictionary JSON file (overrides dictionary_path from the config)
    #[arg(long)]
    dictionary: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the desktop window (default)
    Gui,
    /// Print the word list, optionally filtered
    List {
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Pick words in order and print the sentence, details and tone snapshot
    Build {
        #[arg(required = true)]
        words: Vec<String>,

        /// Print the picked entries and the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so list/build output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sentence_builder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = load_config_from_file(&cli.config)
        .with_context(|| format!("Could not load {}", cli.config.display()))?;
    if let Some(path) = cli.dictionary {
        config.dictionary_path = path;
    }
    info!("Dictionary: {}", config.dictionary_path.display());

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => run_gui(&config).map_err(|e| anyhow!("Window failed: {e}")),
        Command::List { query } => {
            let mut session = load_session(&config)?;
            session.set_query(&query);
            for entry in session.filtered() {
                println!("{}", render::word_list_line(entry));
            }
            println!("{}", session.status_line());
            Ok(())
        }
        Command::Build { words, json } => {
            let mut session = load_session(&config)?;
            for word in &words {
                if !session.pick_word(word) {
                    warn!("'{}' is not in the dictionary, skipping", word);
                }
            }
            if json {
                let report = render::BuildReport::new(session.selection(), session.summary());
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}\n", render::sentence_strip(session.selection()));
                println!("{}\n", render::render_details(session.selection()));
                println!("{}", render::render_summary(session.summary()));
            }
            Ok(())
        }
    }
}

fn load_session(config: &Config) -> Result<SentenceSession> {
    let mut session = SentenceSession::new();
    session.finish_load(load_dictionary(&config.dictionary_path));
    if let Some(msg) = session.load_error() {
        return Err(anyhow!("{msg}"));
    }
    Ok(session)
}
//*** END FILE: src/main.rs ***//
