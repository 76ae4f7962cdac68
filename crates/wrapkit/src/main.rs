use std::path::PathBuf;
use std::sync::{Arc, Barrier};
use std::thread;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wrapkit_config::{Appearance, HexColor, PreferenceStore};
use wrapkit_core::{AtomicValue, DynamicColor, UndoRedoBuffer};

/// Demonstrates the wrapkit value wrappers from the command line.
#[derive(Parser, Debug)]
#[command(name = "wrapkit", version, about)]
struct Cli {
    /// Preferences file to use instead of the default location.
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Increment a shared counter with get+set and with mutate.
    Race {
        #[arg(long, default_value_t = 8)]
        threads: usize,
    },
    /// Write values into an undo/redo buffer and move through it.
    History {
        #[arg(required = true)]
        values: Vec<String>,
        #[arg(long, default_value_t = 0)]
        undo: usize,
        #[arg(long, default_value_t = 0)]
        redo: usize,
        /// Drop everything but the current entry at the end.
        #[arg(long)]
        compact: bool,
    },
    /// Read or change persisted preferences.
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    /// Print the detected system appearance.
    Appearance,
}

#[derive(Subcommand, Debug)]
enum PrefsAction {
    Get { key: String },
    /// Store a JSON value under `key`.
    Set { key: String, value: String },
    Remove { key: String },
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Command::Race { threads } => run_race(threads),
        Command::History {
            values,
            undo,
            redo,
            compact,
        } => run_history(values, undo, redo, compact),
        Command::Prefs { action } => run_prefs(cli.prefs, action),
        Command::Appearance => {
            run_appearance();
            Ok(())
        }
    }
}

fn run_race(threads: usize) -> Result<()> {
    anyhow::ensure!(threads > 0, "--threads must be at least 1");
    tracing::info!("Racing {threads} threads");

    let racy_count = AtomicValue::new(0usize);
    let barrier = Barrier::new(threads);
    thread::scope(|s| {
        for _ in 0..threads {
            s.spawn(|| {
                let seen = racy_count.get();
                barrier.wait();
                racy_count.set(seen + 1);
            });
        }
    });

    let safe_count = AtomicValue::new(0usize);
    thread::scope(|s| {
        for _ in 0..threads {
            s.spawn(|| safe_count.mutate(|c| *c += 1));
        }
    });

    println!("get+set: {} / {threads}", racy_count.get());
    println!("mutate:  {} / {threads}", safe_count.get());
    Ok(())
}

fn run_history(values: Vec<String>, undo: usize, redo: usize, compact: bool) -> Result<()> {
    let mut values = values.into_iter();
    let first = values.next().context("at least one value is required")?;
    let mut buffer = UndoRedoBuffer::new(first);
    for value in values {
        buffer.write(value);
    }

    let undone = (0..undo).take_while(|_| buffer.undo()).count();
    let redone = (0..redo).take_while(|_| buffer.redo()).count();
    if undone < undo || redone < redo {
        tracing::warn!("Hit a history boundary: undid {undone}/{undo}, redid {redone}/{redo}");
    }
    if compact {
        buffer.compact();
    }

    println!("current:  {}", buffer.current());
    println!("position: {} of {}", buffer.cursor() + 1, buffer.len());
    println!("can undo: {}", buffer.can_undo());
    println!("can redo: {}", buffer.can_redo());
    Ok(())
}

fn run_appearance() {
    let background = DynamicColor::new(HexColor::rgb(250, 250, 250), HexColor::rgb(30, 30, 30));
    let resolved = *background.value();
    println!("system:     {}", Appearance::current());
    println!(
        "background: {resolved} (luminance {:.3}, reads as {})",
        resolved.luminance(),
        Appearance::for_background(resolved)
    );
}

fn run_prefs(path: Option<PathBuf>, action: PrefsAction) -> Result<()> {
    let path = path.unwrap_or_else(PreferenceStore::default_path);
    let store: Arc<PreferenceStore> = PreferenceStore::open(&path);
    tracing::debug!("Using preferences at {}", path.display());

    match action {
        PrefsAction::Get { key } => match store.get_raw(&key) {
            Some(value) => println!("{value}"),
            None => println!("{key} is not set"),
        },
        PrefsAction::Set { key, value } => {
            let value: serde_json::Value = serde_json::from_str(&value)
                .with_context(|| format!("'{value}' is not valid JSON"))?;
            store.set_raw(&key, value)?;
            println!("{key} saved");
        }
        PrefsAction::Remove { key } => {
            if store.remove(&key)? {
                println!("{key} removed");
            } else {
                println!("{key} is not set");
            }
        }
        PrefsAction::List => {
            for key in store.keys() {
                if let Some(value) = store.get_raw(&key) {
                    println!("{key} = {value}");
                }
            }
        }
    }
    Ok(())
}
