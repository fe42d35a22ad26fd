use std::panic;

use clap::Parser;
use grid_snake::config::{DEFAULT_GRID, THEME_CLASSIC, TICK_INTERVAL};
use grid_snake::error::Result;
use grid_snake::session::{Session, SessionRunner};
use grid_snake::terminal_runtime::{TerminalFrontend, restore_terminal};
use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Classic terminal Snake: steer with w/a/s/d, quit with x.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Warnings only: anything chattier would scribble over the game screen.
    TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    install_panic_hook();

    let frontend = TerminalFrontend::enter(&THEME_CLASSIC)?;
    let mut runner = SessionRunner::new(frontend, Session::new(), DEFAULT_GRID, TICK_INTERVAL);
    let outcome = runner.run();

    // Leave the alternate screen before anything is reported.
    drop(runner);

    let summary = outcome?;
    info!(
        "session over after {} game(s), {} tick(s), high score {}",
        summary.games_played, summary.ticks, summary.high_score
    );
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
