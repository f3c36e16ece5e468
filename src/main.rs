//! Torus Snake entry point
//!
//! Parses the CLI, layers it over the optional settings file, and runs the
//! terminal session. Logging goes to a file because the terminal itself is
//! the game screen.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;

use torus_snake::consts::*;
use torus_snake::driver::Session;
use torus_snake::settings::Settings;
use torus_snake::sim::{CollisionPolicy, EdgePolicy};
use torus_snake::term::{TermInput, TermRenderer};

/// Board size argument in the form `WIDTHxHEIGHT`
#[derive(Debug, Clone, Copy)]
struct BoardSize {
    width: u16,
    height: u16,
}

impl FromStr for BoardSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
        let width = w
            .trim()
            .parse()
            .map_err(|_| format!("bad board width {w:?}"))?;
        let height = h
            .trim()
            .parse()
            .map_err(|_| format!("bad board height {h:?}"))?;
        Ok(Self { width, height })
    }
}

fn parse_edge_policy(s: &str) -> Result<EdgePolicy, String> {
    EdgePolicy::from_str(s).ok_or_else(|| format!("unknown edge policy {s:?} (wrap, teleport)"))
}

fn parse_collision_policy(s: &str) -> Result<CollisionPolicy, String> {
    CollisionPolicy::from_str(s)
        .ok_or_else(|| format!("unknown collision policy {s:?} (end-round, restart)"))
}

/// Classic snake on a wrapping grid
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Board size as WIDTHxHEIGHT cells
    #[arg(long)]
    size: Option<BoardSize>,

    /// Simulation speed in ticks per second
    #[arg(long, value_parser = clap::value_parser!(u32)
        .range(MIN_TICKS_PER_SECOND as i64..=MAX_TICKS_PER_SECOND as i64))]
    speed: Option<u32>,

    /// Edge behavior: wrap or teleport
    #[arg(long, value_parser = parse_edge_policy)]
    edge: Option<EdgePolicy>,

    /// Self-collision behavior: end-round or restart
    #[arg(long = "on-collision", value_parser = parse_collision_policy)]
    on_collision: Option<CollisionPolicy>,

    /// Fixed RNG seed; every round replays identically
    #[arg(long)]
    seed: Option<u64>,

    /// Where the previous score is kept
    #[arg(long)]
    score_file: Option<PathBuf>,

    /// Settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (RUST_LOG controls verbosity)
    #[arg(long, default_value = "torus-snake.log")]
    log_file: PathBuf,
}

/// Route logs to a file; the terminal belongs to the game
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    if let Some(size) = cli.size {
        settings.game.grid_width = size.width;
        settings.game.grid_height = size.height;
    }
    if let Some(speed) = cli.speed {
        settings.ticks_per_second = speed;
    }
    if let Some(edge) = cli.edge {
        settings.game.edge_policy = edge;
    }
    if let Some(policy) = cli.on_collision {
        settings.game.collision_policy = policy;
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if let Some(path) = cli.score_file {
        settings.score_file = path;
    }
    settings.clamp();

    log::info!(
        "Starting torus-snake: {}x{} grid, {} ticks/s, edge {}, collision {}",
        settings.game.grid_width,
        settings.game.grid_height,
        settings.ticks_per_second,
        settings.game.edge_policy.as_str(),
        settings.game.collision_policy.as_str()
    );

    let renderer = TermRenderer::new(settings.game.grid_width, settings.game.grid_height)
        .context("taking over the terminal")?;
    let mut session = Session::new(&settings, TermInput::new(), renderer);
    session.run().context("session failed")?;

    log::info!("Session ended");
    Ok(())
}
