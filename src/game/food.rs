use super::grid::{Grid, Position};
use super::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};

/// Pick a cell for the next piece of food that isn't covered by `snake`.
///
/// A handful of random cells are tried first; if they all land on the snake,
/// a random cell is chosen from a scan of every free cell instead, so a
/// nearly-full grid can't stall the game.  Returns `None` only if the snake
/// covers the entire grid.
pub(crate) fn place_food<R: Rng>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Position> {
    if snake.len() >= grid.cell_count() {
        return None;
    }
    let max = i32::from(grid.tile_count());
    for _ in 0..consts::FOOD_SPAWN_ATTEMPTS {
        let pos = Position::new(rng.random_range(0..max), rng.random_range(0..max));
        if !snake.contains(pos) {
            return Some(pos);
        }
    }
    grid.positions()
        .filter(|&p| !snake.contains(p))
        .choose(rng)
}
