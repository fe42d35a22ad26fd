use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GridSize;
use crate::error::Result;
use crate::game::{EndReason, Game};
use crate::input::{Command, ReplayChoice};

/// State shared by every game of one process run.
///
/// Created once at startup and handed to each new [`Game`] by reference, so
/// the high score survives replays without any global state.
#[derive(Debug, Clone)]
pub struct Session {
    high_score: u32,
    rng: StdRng,
}

impl Session {
    /// Creates a session whose RNG is seeded from the wall clock.
    #[must_use]
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(seed)
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            high_score: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Raises the high score to `score` if it is higher. Returns true when raised.
    pub fn observe_score(&mut self, score: u32) -> bool {
        if score <= self.high_score {
            return false;
        }

        self.high_score = score;
        true
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Closes out a finished game and reports how it went.
    pub fn finish_game(&mut self, game: &Game) -> GameReport {
        let score = game.state.score;
        self.observe_score(score);

        GameReport {
            score,
            high_score: self.high_score,
            new_high_score: score > game.starting_high_score(),
            reason: game.state.end_reason.unwrap_or(EndReason::Quit),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one finished game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameReport {
    pub score: u32,
    pub high_score: u32,
    /// True when `score` beat the high score held when the game began.
    pub new_high_score: bool,
    pub reason: EndReason,
}

/// Phases of the outer game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LoopState {
    Running,
    GameOver,
    AwaitingReplayChoice,
    Terminated,
}

/// Totals for a whole session, returned when the player stops.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SessionSummary {
    pub games_played: u32,
    pub ticks: u64,
    pub high_score: u32,
}

/// Side-effecting collaborators of the loop: drawing, keys and the clock.
pub trait Frontend {
    /// Redraws the whole screen. Must not block on input.
    fn render(&mut self, game: &Game, high_score: u32) -> io::Result<()>;

    /// Returns a pending key if there is one, never waiting.
    fn poll_key(&mut self) -> io::Result<Option<char>>;

    /// Shows the final result of a game.
    fn show_game_over(&mut self, game: &Game, report: &GameReport) -> io::Result<()>;

    /// Asks whether to play again; may block.
    fn read_replay_choice(&mut self) -> io::Result<ReplayChoice>;

    /// Waits between two running ticks.
    fn pause(&mut self, duration: Duration);
}

/// Drives games one after another until the player declines a replay.
pub struct SessionRunner<F> {
    frontend: F,
    session: Session,
    bounds: GridSize,
    tick_interval: Duration,
}

impl<F: Frontend> SessionRunner<F> {
    #[must_use]
    pub fn new(frontend: F, session: Session, bounds: GridSize, tick_interval: Duration) -> Self {
        Self {
            frontend,
            session,
            bounds,
            tick_interval,
        }
    }

    /// Runs the state machine to `Terminated`.
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut game = self.start_game(&mut summary);
        let mut state = LoopState::Running;

        while state != LoopState::Terminated {
            state = match state {
                LoopState::Running => {
                    summary.ticks += 1;
                    self.run_tick(&mut game)?
                }
                LoopState::GameOver => {
                    let report = self.session.finish_game(&game);
                    let banner = if report.new_high_score {
                        ", new high score"
                    } else {
                        ""
                    };
                    info!(
                        "final score {} ({:?}), high score {}{banner}",
                        report.score, report.reason, report.high_score
                    );
                    self.frontend.show_game_over(&game, &report)?;
                    LoopState::AwaitingReplayChoice
                }
                LoopState::AwaitingReplayChoice => match self.frontend.read_replay_choice()? {
                    ReplayChoice::Replay => {
                        game = self.start_game(&mut summary);
                        LoopState::Running
                    }
                    ReplayChoice::Quit => LoopState::Terminated,
                },
                LoopState::Terminated => LoopState::Terminated,
            };
        }

        summary.high_score = self.session.high_score();
        Ok(summary)
    }

    /// Consumes the runner, handing back the frontend.
    pub fn into_frontend(self) -> F {
        self.frontend
    }

    fn start_game(&mut self, summary: &mut SessionSummary) -> Game {
        summary.games_played += 1;
        debug!("starting game {}", summary.games_played);
        Game::new(self.bounds, &mut self.session)
    }

    /// One running tick: render, read input, update, sleep.
    fn run_tick(&mut self, game: &mut Game) -> Result<LoopState> {
        self.frontend.render(game, self.session.high_score())?;

        if let Some(command) = self.frontend.poll_key()?.and_then(Command::from_char) {
            game.apply_command(command);
            if game.is_over() {
                return Ok(LoopState::GameOver);
            }
        }

        game.tick(&mut self.session);
        self.frontend.pause(self.tick_interval);

        if game.is_over() {
            Ok(LoopState::GameOver)
        } else {
            Ok(LoopState::Running)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DEFAULT_GRID;
    use crate::fruit::Fruit;
    use crate::game::{EndReason, Game};
    use crate::snake::{Position, Snake};

    use super::Session;

    #[test]
    fn high_score_only_rises() {
        let mut session = Session::with_seed(1);

        assert!(session.observe_score(30));
        assert!(!session.observe_score(20));
        assert!(!session.observe_score(30));
        assert_eq!(session.high_score(), 30);
    }

    #[test]
    fn report_flags_new_high_against_starting_value() {
        let mut session = Session::with_seed(2);
        session.observe_score(40);

        let mut game = Game::with_parts(
            DEFAULT_GRID,
            Snake::new(Position { x: 1, y: 1 }, None),
            Fruit::at(Position { x: 0, y: 0 }),
            session.high_score(),
        );
        game.state.score = 50;
        // Live updates during play already raised the high score.
        session.observe_score(50);
        game.state.end(EndReason::WallCollision);

        let report = session.finish_game(&game);

        assert!(report.new_high_score);
        assert_eq!(report.high_score, 50);
        assert_eq!(report.reason, EndReason::WallCollision);
    }

    #[test]
    fn equal_score_is_not_a_new_high() {
        let mut session = Session::with_seed(3);
        session.observe_score(20);

        let mut game = Game::new(DEFAULT_GRID, &mut session);
        game.state.score = 20;
        game.state.end(EndReason::Quit);

        let report = session.finish_game(&game);

        assert!(!report.new_high_score);
        assert_eq!(report.reason, EndReason::Quit);
    }

    #[test]
    fn zero_score_game_is_not_a_new_high() {
        let mut session = Session::with_seed(4);
        let mut game = Game::new(DEFAULT_GRID, &mut session);
        game.state.end(EndReason::Quit);

        assert!(!session.finish_game(&game).new_high_score);
    }
}
