//! Terminal Game of Life runner (default binary).
//!
//! Seeds a toroidal board from a random fill or a pattern file, then hands the
//! terminal to the controller loop until the user quits.

mod setup;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use term_life::core::{load_file, Controller, Grid, LifeConfig, Renderer, SimpleRng};
use term_life::input::TerminalInput;
use term_life::term::{GridView, TerminalDisplay, TerminalRenderer};

use setup::SeedChoice;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file (defaults are used if it does not exist)
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,

    /// Start from a random board without prompting
    #[arg(long, conflicts_with = "pattern")]
    random: bool,

    /// Start from this pattern file without prompting
    #[arg(short, long, value_name = "FILE")]
    pattern: Option<PathBuf>,

    /// Directory the prompt lists pattern files from
    #[arg(long, value_name = "DIR", default_value = "patterns")]
    patterns_dir: PathBuf,

    /// Seed for the random board
    #[arg(long)]
    seed: Option<u32>,
}

/// Log to `LIFE_LOG_PATH` when set, stderr otherwise. Level from `RUST_LOG`.
fn init_logging() -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = std::env::var_os("LIFE_LOG_PATH").filter(|p| !p.is_empty()) {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", PathBuf::from(&path).display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse();

    let config = LifeConfig::load_or_default(&args.config)?;
    let (term_w, term_h) =
        TerminalRenderer::probe_size().context("no usable terminal to draw on")?;
    let (rows, cols) = config.board_dimensions(term_w, term_h);
    log::debug!("terminal {}x{}, board {}x{}", term_w, term_h, rows, cols);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let interactive = !args.random && args.pattern.is_none();
    let choice = if args.random {
        SeedChoice::Random
    } else if let Some(path) = &args.pattern {
        SeedChoice::Pattern(path.clone())
    } else {
        setup::choose(&mut input, &mut out, &args.patterns_dir)?
    };

    let mut controller = Controller::new(Grid::new(rows, cols), config.tick_interval());
    match choice {
        SeedChoice::Random => {
            let mut rng = args.seed.map(SimpleRng::new).unwrap_or_default();
            controller.seed_random(&mut rng)?;
        }
        SeedChoice::Pattern(path) => {
            let load = load_file(&path, (rows, cols))?;
            load.log_warnings(&path.display().to_string());
            if !load.is_clean() {
                writeln!(
                    out,
                    "{} line(s) of {} were skipped; only valid points inside the board are loaded.",
                    load.warnings.len(),
                    path.display()
                )?;
            }
            controller.seed_points(&load.points)?;
        }
    }

    if interactive {
        setup::wait_for_enter(&mut input, &mut out)?;
    }
    drop(input);

    let view = GridView::new(config.alive_symbol, config.dead_symbol);
    let mut display = TerminalDisplay::new(view);
    display.enter()?;
    let mut keys = TerminalInput::new();

    let result = controller.run(&mut display, &mut keys);

    // Always try to restore terminal state.
    let _ = display.teardown();
    log::info!("stopped after {} generations", controller.generation());
    result
}
