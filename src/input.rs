use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the one-cell `(dx, dy)` step for this direction.
    ///
    /// The y axis grows downwards, so `Up` decrements it.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Commands recognized while a game is running.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

impl Command {
    /// Maps one typed character to a command. Case-sensitive; anything
    /// unrecognized yields `None` and leaves the snake untouched.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'a' => Some(Self::Turn(Direction::Left)),
            'd' => Some(Self::Turn(Direction::Right)),
            'w' => Some(Self::Turn(Direction::Up)),
            's' => Some(Self::Turn(Direction::Down)),
            'x' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Answer to the "play again" prompt.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ReplayChoice {
    Replay,
    Quit,
}

impl ReplayChoice {
    /// Interprets a single key press.
    #[must_use]
    pub fn from_key(key: Option<char>) -> Self {
        match key {
            Some('y' | 'Y') => Self::Replay,
            _ => Self::Quit,
        }
    }

    /// Interprets a typed response: anything starting with `y`/`Y` replays.
    #[must_use]
    pub fn from_response(response: &str) -> Self {
        Self::from_key(response.trim_start().chars().next())
    }
}

/// Character sent in place of Ctrl+C, which raw mode no longer turns into SIGINT.
pub const INTERRUPT_CHAR: char = 'x';

/// Reads keyboard events from crossterm.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the next pending character without ever waiting for one.
    ///
    /// Non-character events (resize, mouse, key releases) are skipped until a
    /// character is found or the queue is empty.
    pub fn poll_char(&mut self) -> io::Result<Option<char>> {
        while event::poll(Duration::ZERO)? {
            if let Some(ch) = key_char(event::read()?) {
                return Ok(Some(ch));
            }
        }

        Ok(None)
    }

    /// Discards every event already queued.
    pub fn drain_pending(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let _ = event::read()?;
        }
        Ok(())
    }

    /// Blocks until a key is pressed. Returns `None` for keys without a character.
    pub fn wait_key(&mut self) -> io::Result<Option<char>> {
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(map_key(key));
            }
        }
    }
}

fn key_char(event: Event) -> Option<char> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(INTERRUPT_CHAR),
        KeyCode::Char(ch) => Some(ch),
        _ => None,
    }
}
