use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{info, warn, LevelFilter};
use obstacle_snake::config::{ConfigError, EngineConfig, FRAME_INTERVAL_MS, THEME_CLASSIC};
use obstacle_snake::game::Engine;
use obstacle_snake::input::GameInput;
use obstacle_snake::logging::init_log;
use obstacle_snake::scheduler::{SystemClock, Ticker};
use obstacle_snake::terminal_runtime::{InputHandler, TerminalSession};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with engine settings; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the square grid.
    #[arg(long)]
    grid_size: Option<u16>,

    /// Obstacles placed at every start.
    #[arg(long)]
    obstacles: Option<usize>,

    /// Seed for a reproducible layout sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a log to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level used with --log-file.
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(error) = init_log(cli.log_level, path) {
            eprintln!("Failed to initialise logging: {error}");
            return ExitCode::FAILURE;
        }
    }

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            warn!("rejected config: {error}");
            eprintln!("Invalid configuration: {error}");
            return ExitCode::FAILURE;
        }
    };
    info!("starting with {config:?}");

    match run(config, cli.seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// File values first, then flags; the merged result is validated once.
fn resolve_config(cli: &Cli) -> Result<EngineConfig, ConfigError> {
    let base = match &cli.config {
        Some(path) => EngineConfig::read(path)?,
        None => EngineConfig::default(),
    };

    let config = base.with_overrides(cli.grid_size, cli.obstacles);
    config.validate()?;
    Ok(config)
}

fn run(config: EngineConfig, seed: Option<u64>) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new(Duration::from_millis(FRAME_INTERVAL_MS));
    let mut engine = match seed {
        Some(seed) => Engine::new_with_seed(config, seed),
        None => Engine::new(config),
    };
    let mut ticker = Ticker::new(SystemClock::new());
    let mut snapshot = engine.snapshot();

    loop {
        session.draw(&snapshot, &THEME_CLASSIC)?;

        if let Some(game_input) = input.poll_input()? {
            if game_input == GameInput::Quit {
                break;
            }

            engine.apply_input(game_input);
            if game_input == GameInput::Confirm {
                snapshot = engine.snapshot();
            }
        }

        if let Some(next) = ticker.drive(&mut engine) {
            snapshot = next;
        }
    }

    info!("quit with score {}", snapshot.score);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use clap::Parser;
    use obstacle_snake::config::{ConfigError, GridSize};

    use super::{resolve_config, Cli};

    fn config_file(label: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("obstacle-snake-cli-tests");
        fs::create_dir_all(&dir).expect("test directory should be creatable");
        let path = dir.join(format!("{label}-{}.json", std::process::id()));
        fs::write(&path, contents).expect("test file write should succeed");
        path
    }

    #[test]
    fn grid_flag_rescues_an_undersized_config_file() {
        let path = config_file("rescued", r#"{ "grid_size": 2, "obstacle_count": 3 }"#);
        let cli = Cli::try_parse_from([
            "obstacle-snake",
            "--config",
            path.to_str().expect("temp path is utf-8"),
            "--grid-size",
            "20",
        ])
        .expect("arguments should parse");

        let resolved = resolve_config(&cli);
        let _ = fs::remove_file(&path);

        let config = resolved.expect("merged config is valid");
        assert_eq!(config.grid_size, GridSize(20));
        assert_eq!(config.obstacle_count, 3);
    }

    #[test]
    fn merged_config_is_still_validated() {
        let path = config_file("overfilled", r#"{ "grid_size": 20 }"#);
        let cli = Cli::try_parse_from([
            "obstacle-snake",
            "--config",
            path.to_str().expect("temp path is utf-8"),
            "--grid-size",
            "3",
            "--obstacles",
            "8",
        ])
        .expect("arguments should parse");

        let resolved = resolve_config(&cli);
        let _ = fs::remove_file(&path);

        assert!(matches!(
            resolved,
            Err(ConfigError::GridTooSmall {
                cells: 9,
                obstacles: 8
            })
        ));
    }
}
