use log::{debug, info};

use crate::config::{GridSize, POINTS_PER_FRUIT};
use crate::fruit::Fruit;
use crate::input::Command;
use crate::session::Session;
use crate::snake::{Collision, Snake};

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    Quit,
}

impl From<Collision> for EndReason {
    fn from(collision: Collision) -> Self {
        match collision {
            Collision::Wall => Self::WallCollision,
            Collision::Body => Self::SelfCollision,
        }
    }
}

/// Score and termination flag of one game.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct GameState {
    pub score: u32,
    pub game_over: bool,
    pub end_reason: Option<EndReason>,
}

impl GameState {
    /// Flags the game as over. The first reason recorded sticks.
    pub fn end(&mut self, reason: EndReason) {
        if self.game_over {
            return;
        }

        self.game_over = true;
        self.end_reason = Some(reason);
    }
}

/// Result of advancing the game by one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickEvent {
    Moved,
    AteFruit { score: u32 },
    Ended(EndReason),
}

/// One round of play: a snake, a fruit and their score.
#[derive(Debug, Clone)]
pub struct Game {
    pub snake: Snake,
    pub fruit: Fruit,
    pub state: GameState,
    bounds: GridSize,
    starting_high_score: u32,
}

impl Game {
    /// Starts a fresh game: centred stationary snake, random fruit, zero score.
    #[must_use]
    pub fn new(bounds: GridSize, session: &mut Session) -> Self {
        let fruit = Fruit::spawn(session.rng_mut(), bounds);
        debug!(
            "new game on {}x{} grid, fruit at {:?}",
            bounds.width, bounds.height, fruit.position
        );

        Self::with_parts(bounds, Snake::centered(bounds), fruit, session.high_score())
    }

    /// Assembles a game from explicit parts.
    #[must_use]
    pub fn with_parts(
        bounds: GridSize,
        snake: Snake,
        fruit: Fruit,
        starting_high_score: u32,
    ) -> Self {
        Self {
            snake,
            fruit,
            state: GameState::default(),
            bounds,
            starting_high_score,
        }
    }

    /// Applies one command read during a running tick.
    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::Turn(direction) => self.snake.set_direction(direction),
            Command::Quit => self.state.end(EndReason::Quit),
        }
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Collision is resolved before consumption, and the snake grows only
    /// after the fruit has been moved away.
    pub fn tick(&mut self, session: &mut Session) -> TickEvent {
        if let Some(reason) = self.state.end_reason {
            return TickEvent::Ended(reason);
        }

        self.snake.move_forward();

        if let Some(collision) = self.snake.collision(self.bounds) {
            let reason = EndReason::from(collision);
            self.state.end(reason);
            info!(
                "game over ({reason:?}) at {:?} with score {}",
                self.snake.head(),
                self.state.score
            );
            return TickEvent::Ended(reason);
        }

        if self.snake.head() != self.fruit.position {
            return TickEvent::Moved;
        }

        self.state.score += POINTS_PER_FRUIT;
        session.observe_score(self.state.score);
        self.fruit.reset(session.rng_mut(), self.bounds);
        self.snake.grow();
        debug!(
            "fruit eaten, score {}, next fruit at {:?}",
            self.state.score, self.fruit.position
        );

        TickEvent::AteFruit {
            score: self.state.score,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// High score in force when this game began.
    #[must_use]
    pub fn starting_high_score(&self) -> u32 {
        self.starting_high_score
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.game_over
    }
}
