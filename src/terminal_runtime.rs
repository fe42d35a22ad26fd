use std::io;
use std::thread;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::Theme;
use crate::game::Game;
use crate::input::{InputHandler, ReplayChoice};
use crate::renderer;
use crate::session::{Frontend, GameReport};
use crate::ui::hud::HudInfo;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw mode and the alternate screen, held by [`TerminalFrontend`] from the
/// first game to the declined replay.
///
/// Raw mode stays on between ticks, so key polls never touch terminal modes.
/// Dropping the screen restores the terminal best-effort.
struct GameScreen {
    terminal: AppTerminal,
}

impl GameScreen {
    /// Enters raw mode, switches to alternate screen, and creates a ratatui terminal.
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                let _ = restore_terminal();
                Err(error)
            }
        }
    }

    fn draw(&mut self, game: &Game, info: &HudInfo<'_>) -> io::Result<()> {
        self.terminal.draw(|frame| renderer::render(frame, game, info))?;
        Ok(())
    }
}

impl Drop for GameScreen {
    fn drop(&mut self) {
        if let Err(error) = restore_terminal() {
            warn!("failed to restore terminal: {error}");
        }
    }
}

/// Restores cooked mode and the main screen. Also used by the panic hook.
pub fn restore_terminal() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}

/// The interactive frontend: ratatui drawing plus crossterm keys.
pub struct TerminalFrontend {
    screen: GameScreen,
    input: InputHandler,
    theme: &'static Theme,
}

impl TerminalFrontend {
    /// Takes over the terminal for a play session.
    pub fn enter(theme: &'static Theme) -> io::Result<Self> {
        debug!("using theme {}", theme.name);
        Ok(Self {
            screen: GameScreen::enter()?,
            input: InputHandler::new(),
            theme,
        })
    }
}

impl Frontend for TerminalFrontend {
    fn render(&mut self, game: &Game, high_score: u32) -> io::Result<()> {
        let info = HudInfo {
            high_score,
            theme: self.theme,
            report: None,
        };
        self.screen.draw(game, &info)
    }

    fn poll_key(&mut self) -> io::Result<Option<char>> {
        self.input.poll_char()
    }

    fn show_game_over(&mut self, game: &Game, report: &GameReport) -> io::Result<()> {
        let info = HudInfo {
            high_score: report.high_score,
            theme: self.theme,
            report: Some(*report),
        };
        self.screen.draw(game, &info)
    }

    fn read_replay_choice(&mut self) -> io::Result<ReplayChoice> {
        // Keys mashed while dying must not answer the prompt.
        self.input.drain_pending()?;
        let choice = ReplayChoice::from_key(self.input.wait_key()?);
        debug!("replay choice: {choice:?}");
        Ok(choice)
    }

    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
