#![warn(clippy::all)]

use clap::Parser;
use conway_sandbox::{load_pattern_file, App, Config, Session, SessionConfig};
use std::{path::PathBuf, process::ExitCode, time::Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pattern file to use as the initial stamp (.rle, .cells, .txt or lexicon .json).
    pattern: Option<PathBuf>,

    /// Start paused instead of on the welcome screen.
    #[arg(long)]
    no_welcome: bool,

    /// Milliseconds between generations.
    #[arg(long, value_name = "MS", default_value_t = Config::TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for random fills (entropy if omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Fill the field randomly at startup with this probability of a live cell.
    #[arg(long, value_name = "RATE")]
    random_fill: Option<f64>,
}

fn main() -> ExitCode {
    use eframe::egui::{vec2, ViewportBuilder};

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = SessionConfig {
        grid_width: Config::GRID_WIDTH,
        grid_height: Config::GRID_HEIGHT,
        tick_interval_ms: cli.tick_ms,
        tick_interval_step_ms: Config::TICK_INTERVAL_STEP_MS,
        editor_base_scale: Config::EDITOR_BASE_SCALE,
        editor_scale_step: Config::EDITOR_SCALE_STEP,
        editor_max_width: (Config::GRID_WIDTH as f32 * Config::CELL_SIZE) as usize,
        editor_max_height: (Config::GRID_HEIGHT as f32 * Config::CELL_SIZE) as usize,
        show_welcome: !cli.no_welcome,
    };
    let mut session = Session::new(config, Instant::now());

    if let Some(path) = &cli.pattern {
        match load_pattern_file(path) {
            Ok(pattern) => {
                session.load_pattern(pattern.width, pattern.height, |x, y| pattern.is_alive(x, y))
            }
            Err(err) => {
                error!(path = %path.display(), %err, "cannot load pattern");
                return ExitCode::FAILURE;
            }
        }
    }
    if let Some(fill_rate) = cli.random_fill {
        session.randomize_grid(cli.seed, fill_rate);
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(Config::WINDOW_SIZE[0], Config::WINDOW_SIZE[1]))
            .with_min_inner_size(vec2(Config::MIN_WINDOW_SIZE[0], Config::MIN_WINDOW_SIZE[1])),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    info!(
        width = Config::GRID_WIDTH,
        height = Config::GRID_HEIGHT,
        "starting Game of Life"
    );
    let seed = cli.seed;
    let result = eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, session, seed)))),
    );
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "window loop failed");
            ExitCode::FAILURE
        }
    }
}
