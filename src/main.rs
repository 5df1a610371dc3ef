use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{error, info};
use snake::config::Settings;
use snake::driver::{self, ThreadPacer, Timing};
use snake::error::AppError;
use snake::grid::Field;
use snake::input::CrosstermInput;
use snake::logging;
use snake::renderer::TerminalSurface;
use snake::session::Session;
use snake::terminal_runtime::{install_panic_hook, TerminalSession};

#[derive(Debug, Parser)]
#[command(version, about = "Yet Another Snake: arrows or WASD to steer, Esc or q to quit")]
struct Cli {
    /// Settings file (JSON). Defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fruit RNG seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms", value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: Option<u64>,

    /// Log file path.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(score) => {
            println!("Final score: {score}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("yet-another-snake: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<u32, AppError> {
    let settings = apply_overrides(Settings::load(cli.config.as_deref())?, &cli);

    logging::init(&settings.log_path(), settings.level_filter())?;
    install_panic_hook();

    let seed = settings.seed.unwrap_or_else(rand::random);
    let field = Field::CLASSIC;
    let mut session = Session::new_with_seed(field, seed);
    let timing = Timing {
        tick_interval: Duration::from_millis(settings.tick_interval_ms),
        game_over_hold: Duration::from_millis(settings.game_over_hold_ms),
    };

    let mut surface = TerminalSurface::new(TerminalSession::enter()?, field);
    let final_snapshot = driver::run(
        &mut session,
        &mut surface,
        &mut CrosstermInput,
        &mut ThreadPacer,
        timing,
    )?;
    drop(surface);

    info!(
        "game finished after {} ticks with score {}",
        final_snapshot.tick, final_snapshot.score
    );
    Ok(final_snapshot.score)
}

fn apply_overrides(mut settings: Settings, cli: &Cli) -> Settings {
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }
    if let Some(tick_ms) = cli.tick_ms {
        settings.tick_interval_ms = tick_ms;
    }
    if let Some(path) = &cli.log_file {
        settings.log_file = Some(path.clone());
    }
    settings
}
