use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// What the head ran into.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    Body,
}

/// The player's snake: a head plus trailing body segments.
///
/// `body[0]` is the segment directly behind the head; later indices are
/// further away. The body only ever grows.
#[derive(Debug, Clone)]
pub struct Snake {
    head: Position,
    body: VecDeque<Position>,
    direction: Option<Direction>,
}

impl Snake {
    /// Creates a stationary, body-less snake at the centre of `bounds`.
    #[must_use]
    pub fn centered(bounds: GridSize) -> Self {
        Self::new(
            Position {
                x: i32::from(bounds.width / 2),
                y: i32::from(bounds.height / 2),
            },
            None,
        )
    }

    /// Creates a body-less snake at `head`.
    #[must_use]
    pub fn new(head: Position, direction: Option<Direction>) -> Self {
        Self {
            head,
            body: VecDeque::new(),
            direction,
        }
    }

    /// Creates a snake from an explicit head and body (nearest segment first).
    #[must_use]
    pub fn from_parts(head: Position, body: Vec<Position>, direction: Option<Direction>) -> Self {
        Self {
            head,
            body: VecDeque::from(body),
            direction,
        }
    }

    /// Sets the direction used by the next move.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    /// Advances one cell in the current direction (none while stationary).
    ///
    /// Every segment takes the position its predecessor held before the move,
    /// so the old head becomes the nearest segment and the farthest position is
    /// dropped. Bounds are not checked here; see [`Snake::collision`].
    pub fn move_forward(&mut self) {
        if !self.body.is_empty() {
            self.body.push_front(self.head);
            self.body.pop_back();
        }

        if let Some(direction) = self.direction {
            self.head = self.head.step(direction);
        }
    }

    /// Appends one segment at the head's current coordinates.
    ///
    /// The new segment trails behind the others and moves into place on the
    /// following [`Snake::move_forward`].
    pub fn grow(&mut self) {
        self.body.push_back(self.head);
    }

    /// Classifies the head's current cell, or `None` when it is free.
    #[must_use]
    pub fn collision(&self, bounds: GridSize) -> Option<Collision> {
        if !self.head.is_within_bounds(bounds) {
            return Some(Collision::Wall);
        }

        if self.body.contains(&self.head) {
            return Some(Collision::Body);
        }

        None
    }

    /// Returns true if the head left the arena or overlaps the body.
    #[must_use]
    pub fn check_collision(&self, bounds: GridSize) -> bool {
        self.collision(bounds).is_some()
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.head
    }

    /// Returns the current travel direction; `None` while stationary.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns the number of body segments, head excluded.
    #[must_use]
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Iterates over body segments from nearest to farthest.
    pub fn body(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
