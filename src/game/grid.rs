use super::direction::Direction;
use serde::{Deserialize, Serialize};

/// A cell on the tile grid.  Coordinates are signed so that a step off of
/// the grid can be represented before it is wrapped.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }
}

/// The square `tile_count × tile_count` grid that the game is played on
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    tile_count: u16,
}

impl Grid {
    pub(crate) fn new(tile_count: u16) -> Grid {
        Grid { tile_count }
    }

    pub(crate) fn tile_count(self) -> u16 {
        self.tile_count
    }

    /// The cell in the middle of the grid
    pub(crate) fn center(self) -> Position {
        let c = i32::from(self.tile_count / 2);
        Position::new(c, c)
    }

    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.tile_count) * usize::from(self.tile_count)
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        let max = i32::from(self.tile_count);
        (0..max).contains(&pos.x) && (0..max).contains(&pos.y)
    }

    /// Iterate over every cell of the grid in row-major order
    pub(crate) fn positions(self) -> impl Iterator<Item = Position> {
        let max = i32::from(self.tile_count);
        (0..max).flat_map(move |y| (0..max).map(move |x| Position::new(x, y)))
    }

    /// Compute where a snake moving from `pos` in `direction` ends up.  A move
    /// that leaves the grid comes back in on the opposite edge and is reported
    /// as a [`Step::Wrapped`].
    pub(crate) fn step(self, pos: Position, direction: Direction) -> Step {
        let next = Position::new(pos.x + direction.x, pos.y + direction.y);
        if self.contains(next) {
            Step::Inside(next)
        } else {
            let max = i32::from(self.tile_count);
            Step::Wrapped(Position::new(next.x.rem_euclid(max), next.y.rem_euclid(max)))
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Step {
    Inside(Position),
    Wrapped(Position),
}
