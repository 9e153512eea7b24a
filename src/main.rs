mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod options;
mod storage;
mod timer;
mod util;
mod warning;
use crate::app::App;
use crate::cli::{Arguments, Invocation, USAGE};
use crate::config::Config;
use crate::game::{Game, Patch};
use crate::highscore::{load_high_score, reset_high_score};
use crate::storage::{FileStorage, MemoryStorage, StorageBackend};
use crate::warning::Warning;
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use simplelog::{LevelFilter, WriteLogger};
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match Invocation::from_env() {
        Ok(Invocation::Run(args)) => exit_code(run(args)),
        Ok(Invocation::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Invocation::Version) => {
            println!("wrapsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("wrapsnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    if let Some(ref path) = args.log_file {
        let file = fs_err::File::create(path).context("failed to open log file")?;
        WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), file)
            .context("failed to initialize logging")?;
    }
    log::info!("Starting wrapsnake {}", env!("CARGO_PKG_VERSION"));
    let config = load_config(&args).context("failed to load configuration")?;
    let (mut storage, warning) = open_storage(&config);
    if args.reset_high_score {
        reset_high_score(&mut storage).context("failed to reset high score")?;
    }
    let high_score = load_high_score(&storage);
    log::debug!("Stored high score: {high_score}");

    let mut game = Game::new(config.game, high_score);
    if let Some(ref path) = args.state {
        let src = fs_err::read_to_string(path).context("failed to read state file")?;
        let patch = serde_json::from_str::<Patch>(&src).context("failed to parse state file")?;
        game.apply_patch(patch)
            .context("failed to apply state file")?;
        log::info!("Applied initial state from {}", path.display());
    }

    let mut app = App::new(game, storage, warning);
    let mut terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)
        .and_then(|()| app.run(&mut terminal));
    if let Err(e) = execute!(io::stdout(), DisableFocusChange, DisableMouseCapture) {
        log::warn!("Failed to disable mouse capture: {e}");
    }
    ratatui::restore();
    r.context("terminal I/O failed")?;

    if let Some(ref path) = args.dump_state {
        let mut src = serde_json::to_string_pretty(&app.game().snapshot())
            .context("failed to serialize game state")?;
        src.push('\n');
        fs_err::write(path, src).context("failed to write state file")?;
    }
    log::info!("Exiting");
    Ok(())
}

fn load_config(args: &Arguments) -> Result<Config, config::ConfigError> {
    if let Some(ref path) = args.config {
        log::debug!("Reading configuration from {}", path.display());
        Config::load(path, false)
    } else {
        match Config::default_path() {
            Ok(path) => {
                log::debug!("Reading configuration from {}", path.display());
                Config::load(&path, true)
            }
            Err(e) => {
                log::warn!("{e}; using default configuration");
                Ok(Config::default())
            }
        }
    }
}

/// Open the storage named by the configuration.  If it can't be read, the
/// returned in-memory storage is used instead so that the unreadable file is
/// left as-is, along with a warning to show the user.
fn open_storage(config: &Config) -> (StorageBackend, Option<Warning>) {
    let Some(path) = config.storage_path() else {
        log::warn!("Could not determine local data directory; high score will not be saved");
        return (MemoryStorage::default().into(), None);
    };
    match FileStorage::open(path) {
        Ok(storage) => {
            log::debug!("Using storage file {}", storage.path().display());
            (storage.into(), None)
        }
        Err(e) => {
            log::error!("Failed to open storage file: {e}");
            (MemoryStorage::default().into(), Some(Warning::from_error(&e)))
        }
    }
}

fn exit_code(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.chain()
                .filter_map(|c| c.downcast_ref::<io::Error>())
                .any(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("wrapsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}
