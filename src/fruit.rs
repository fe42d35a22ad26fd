use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// The single fruit on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Fruit {
    pub position: Position,
}

impl Fruit {
    /// Creates a fruit at a fixed position.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns a fruit on a uniformly random cell of `bounds`.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        Self::at(random_position(rng, bounds))
    }

    /// Moves the fruit to a fresh random cell.
    ///
    /// Cells under the snake are not excluded.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: GridSize) {
        self.position = random_position(rng, bounds);
    }
}

fn random_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    debug_assert!(bounds.width > 0 && bounds.height > 0);

    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::snake::Position;

    use super::Fruit;

    #[test]
    fn fruit_always_lands_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = GridSize {
            width: 5,
            height: 3,
        };
        let mut fruit = Fruit::spawn(&mut rng, bounds);

        for _ in 0..500 {
            assert!(fruit.position.is_within_bounds(bounds));
            fruit.reset(&mut rng, bounds);
        }
    }

    #[test]
    fn fruit_reaches_every_cell_of_a_small_grid() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize {
            width: 3,
            height: 2,
        };
        let mut fruit = Fruit::at(Position { x: 0, y: 0 });
        let mut seen = HashSet::new();

        for _ in 0..500 {
            fruit.reset(&mut rng, bounds);
            seen.insert(fruit.position);
        }

        assert_eq!(seen.len(), usize::from(bounds.width * bounds.height));
    }

    #[test]
    fn single_cell_grid_always_yields_origin() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = GridSize {
            width: 1,
            height: 1,
        };

        let fruit = Fruit::spawn(&mut rng, bounds);

        assert_eq!(fruit.position, Position { x: 0, y: 0 });
    }
}
