use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trail_manager::graph::{GraphConfig, MapKind};
use trail_manager::manager::TrailManager;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Landmark records (id, description, ...)
    #[arg(short, long)]
    landmarks: PathBuf,

    /// Trail records (landmark_one, landmark_two, length, ...)
    #[arg(short, long)]
    trails: PathBuf,

    /// Map implementation backing the graph: `hash` or `ordered`
    #[arg(long, default_value_t = MapKind::Hash)]
    map: MapKind,

    /// Print results as JSON instead of text reports
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Distances to all landmarks reachable from an origin
    Distances {
        /// Origin landmark id
        origin: String,
    },
    /// Proposed first-aid station locations
    Stations {
        /// Minimum number of intersecting trails
        #[arg(allow_negative_numbers = true)]
        min_trails: i64,
    },
    /// Interactive menu on stdin
    Menu,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let manager = TrailManager::from_files(&cli.landmarks, &cli.trails, GraphConfig::new(cli.map))
        .with_context(|| {
            format!(
                "could not load park from {} and {}",
                cli.landmarks.display(),
                cli.trails.display()
            )
        })?;

    info!(
        landmarks = manager.graph().landmark_count(),
        trails = manager.graph().trails().len(),
        map = %cli.map,
        "Park loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Distances { origin } => {
            if cli.json {
                print_json(&mut out, &manager.distances_json(&origin))?;
            } else {
                writeln!(out, "{}", manager.distances_report(&origin))?;
            }
        }
        Commands::Stations { min_trails } => {
            if cli.json {
                print_json(&mut out, &manager.first_aid_json(min_trails))?;
            } else {
                writeln!(out, "{}", manager.first_aid_report(min_trails))?;
            }
        }
        Commands::Menu => run_menu(&manager, cli.map, io::stdin().lock(), &mut out)?,
    }

    Ok(())
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Whitespace-separated tokens read lazily from a line source.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    fn next(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

fn run_menu(
    manager: &TrailManager,
    map: MapKind,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut tokens = Tokens::new(input);
    writeln!(out, "Map selected: {map}")?;

    loop {
        writeln!(out, "TrailManager ver 1.0")?;
        writeln!(out, "[1] List Potential Locations for First Aid Stations")?;
        writeln!(out, "[2] View Distances to All Reachable Landmarks")?;
        writeln!(out, "[3] Timing Experiment for a Distances Report")?;
        writeln!(out, "[Q] Quit")?;
        out.flush()?;

        let Some(choice) = tokens.next()? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                write!(out, "Enter number of intersecting trails: ")?;
                out.flush()?;
                let Some(raw) = tokens.next()? else {
                    break;
                };
                match raw.parse::<i64>() {
                    Ok(threshold) => writeln!(out, "{}", manager.first_aid_report(threshold))?,
                    Err(_) => writeln!(out, "Invalid number: {raw}")?,
                }
                writeln!(out)?;
            }
            "2" => {
                write!(out, "Enter starting landmark ID: ")?;
                out.flush()?;
                let Some(origin) = tokens.next()? else {
                    break;
                };
                writeln!(out, "{}", manager.distances_report(&origin))?;
                writeln!(out)?;
            }
            "3" => {
                write!(out, "Enter starting landmark ID: ")?;
                out.flush()?;
                let Some(origin) = tokens.next()? else {
                    break;
                };
                let start = Instant::now();
                let report = manager.distances_report(&origin);
                let elapsed = start.elapsed();
                info!(origin, bytes = report.len(), "Timed distances report");
                writeln!(out, "Elapsed time: {} ms", elapsed.as_millis())?;
            }
            "Q" | "q" => {
                writeln!(out, "Exiting...")?;
                break;
            }
            _ => {
                writeln!(out, "Invalid command.")?;
                writeln!(out)?;
            }
        }
    }

    Ok(())
}
