use super::grid::{Grid, Position};
use std::collections::VecDeque;

/// The cells occupied by the snake, head first.
///
/// The head is stored apart from the rest of the body so that a snake can
/// never be empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    head: Position,

    /// The positions of the cells behind the head, nearest first
    body: VecDeque<Position>,
}

impl Snake {
    /// Length of the snake at the start of a game
    pub(crate) const INITIAL_LENGTH: i32 = 3;

    /// Create the snake used at the start of every game: lying horizontally
    /// with its head in the center of `grid`, facing east.
    pub(crate) fn starting(grid: Grid) -> Snake {
        let head = grid.center();
        Snake {
            head,
            body: (1..Self::INITIAL_LENGTH)
                .map(|i| Position::new(head.x - i, head.y))
                .collect(),
        }
    }

    /// Create a snake from a sequence of segments, head first.  Returns
    /// `None` if `segments` is empty.
    pub(crate) fn from_segments<I: IntoIterator<Item = Position>>(segments: I) -> Option<Snake> {
        let mut iter = segments.into_iter();
        let head = iter.next()?;
        Some(Snake {
            head,
            body: iter.collect(),
        })
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.head
    }

    /// Return the number of cells the snake occupies
    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Iterate over all of the snake's cells, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Iterate over the snake's cells other than the head
    pub(crate) fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Make `pos` the new head, keeping every existing cell
    pub(crate) fn push_head(&mut self, pos: Position) {
        self.body.push_front(self.head);
        self.head = pos;
    }

    /// Remove the last cell of the snake, unless the snake is only a head
    pub(crate) fn drop_tail(&mut self) {
        let _ = self.body.pop_back();
    }
}
