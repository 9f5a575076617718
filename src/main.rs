use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};
use snake_controller::Error;
use snake_controller::config::{
    DEFAULT_CONFIGURATION, DEFAULT_TICK_INTERVAL_MS, InitialState, MIN_TICK_INTERVAL_MS,
};
use snake_controller::game::{GameState, GameStatus};
use snake_controller::input::{GameInput, poll_input};
use snake_controller::renderer;
use snake_controller::replay;
use snake_controller::terminal_runtime::TerminalSession;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Initial state: `W <w> <h> F <x> <y> S <U|D|L|R> <len> <x> <y>...`.
    #[arg(long, default_value = DEFAULT_CONFIGURATION)]
    config: String,

    /// Read JSON-lines events from stdin and print outbound messages instead of playing.
    #[arg(long)]
    replay: bool,

    /// Seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// File the log is written to.
    #[arg(long, default_value = "snake-controller.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    if let Err(error) = WriteLogger::init(
        cli.log_level.into(),
        Config::default(),
        File::create(&cli.log_file)?,
    ) {
        eprintln!("Failed to initialize logger: {error}");
    }
    info!("starting snake-controller");

    let initial: InitialState = cli.config.parse()?;

    if cli.replay {
        let stdin = io::stdin();
        replay::run(initial, stdin.lock(), io::stdout().lock())?;
        return Ok(());
    }

    run(initial, cli.seed)
}

fn run(initial: InitialState, seed: Option<u64>) -> Result<(), Error> {
    let mut session = TerminalSession::enter()?;
    let mut state = GameState::new(initial, seed);
    state.status = GameStatus::Paused;

    let mut last_tick = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state))?;

        if let Some(game_input) = poll_input(FRAME_INTERVAL)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Confirm if state.is_start_screen() => {
                    state.status = GameStatus::Playing;
                    last_tick = Instant::now();
                }
                GameInput::Confirm
                    if matches!(state.status, GameStatus::GameOver | GameStatus::Victory) =>
                {
                    state = state.restarted();
                    state.status = GameStatus::Paused;
                }
                other => state.apply_input(other)?,
            }
        }

        if last_tick.elapsed() >= tick_interval_for_speed(state.speed_level) {
            state.tick()?;
            last_tick = Instant::now();
        }
    }

    if state.status == GameStatus::Playing {
        warn!("quit mid-game with score {}", state.score);
    }
    info!("exiting after {} ticks", state.tick_count);
    Ok(())
}

fn tick_interval_for_speed(speed_level: u32) -> Duration {
    let speed_penalty_ms = u64::from(speed_level.saturating_sub(1)) * 10;
    let clamped_ms = DEFAULT_TICK_INTERVAL_MS
        .saturating_sub(speed_penalty_ms)
        .max(MIN_TICK_INTERVAL_MS);
    Duration::from_millis(clamped_ms)
}
