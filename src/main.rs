//! Headless Blockfall runner (default binary).
//!
//! Plays a scripted game frame by frame and prints every event as a JSON
//! line. Rendering, input devices and persistence stay outside; this is the
//! simplest collaborator that exercises the whole core.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use blockfall::core::{Game, GameConfig};
use blockfall::engine::{EventSink, LogSink, Script, Session};
use blockfall::types::GameEvent;

/// Run a falling-block game without a screen.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON game configuration; defaults apply for missing fields.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured RNG seed.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum number of frames to simulate.
    #[arg(short, long, default_value_t = 3600)]
    frames: u64,

    /// Simulated milliseconds per frame.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Comma-separated intents played one per frame, cycling.
    #[arg(long, default_value = "hardDrop")]
    script: String,

    /// Override the configured best score.
    #[arg(long)]
    best_score: Option<u32>,
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.best_score.is_some() {
        config.best_score = args.best_score;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let script: Script = args.script.parse().context("parsing --script")?;
    let game = Game::new(config).context("invalid game configuration")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut write_error = None;
    let mut log_sink = LogSink;
    let sink = |event: &GameEvent| {
        log_sink.on_event(event);
        if write_error.is_some() {
            return;
        }
        let line = serde_json::to_string(event).map_err(io::Error::from);
        if let Err(err) = line.and_then(|line| writeln!(out, "{line}")) {
            write_error = Some(err);
        }
    };

    let mut session = Session::new(game, sink, Duration::from_millis(args.frame_ms));
    let frames = session.run_script(&script, args.frames);
    let (game, sink) = session.into_parts();
    drop(sink);

    info!("session ended after {} frames with {:?}", frames, game.status());
    if let Some(err) = write_error {
        return Err(err).context("writing events");
    }
    writeln!(out, "final score {} after {} frames ({:?})", game.score(), frames, game.status())?;
    out.flush()?;
    Ok(())
}
