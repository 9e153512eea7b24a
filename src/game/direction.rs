use crate::consts;
use serde::{Deserialize, Serialize};

/// A movement vector.  Moving snakes use one of the four unit vectors; the
/// zero vector means "standing still".
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub(crate) struct Direction {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Direction {
    pub(crate) const NONE: Direction = Direction { x: 0, y: 0 };
    pub(crate) const UP: Direction = Direction { x: 0, y: -1 };
    pub(crate) const DOWN: Direction = Direction { x: 0, y: 1 };
    pub(crate) const LEFT: Direction = Direction { x: -1, y: 0 };
    pub(crate) const RIGHT: Direction = Direction { x: 1, y: 0 };

    pub(crate) fn is_none(self) -> bool {
        self == Direction::NONE
    }

    /// Is this one of the five vectors a snake can move by?
    pub(crate) fn is_valid(self) -> bool {
        matches!(
            (self.x, self.y),
            (0, 0) | (1, 0) | (-1, 0) | (0, 1) | (0, -1)
        )
    }

    pub(crate) fn reverse(self) -> Direction {
        Direction {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Return the glyph to use for a snake's head moving in this direction
    pub(crate) fn head_symbol(self) -> char {
        match self {
            Direction::UP => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::DOWN => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::RIGHT => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::LEFT => consts::SNAKE_HEAD_WEST_SYMBOL,
            _ => consts::SNAKE_HEAD_STILL_SYMBOL,
        }
    }
}
