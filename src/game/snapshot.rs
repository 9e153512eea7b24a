//! Inspecting & overriding a live game from outside.
//!
//! A [`Snapshot`] is a plain copy of every externally observable field of a
//! [`Game`]; a [`Patch`] overwrites any subset of them.  Both use the field
//! names of the JSON documents accepted by `--state` and written by
//! `--dump-state`.
use super::direction::Direction;
use super::grid::Position;
use super::snake::Snake;
use super::Game;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Snapshot {
    pub(crate) snake: Vec<Position>,
    pub(crate) direction: Direction,
    pub(crate) next_direction: Direction,
    pub(crate) food: Option<Position>,
    pub(crate) score: u32,
    pub(crate) high_score: u32,
    pub(crate) wall_passes: u32,
    pub(crate) max_wall_passes: u32,
    pub(crate) game_running: bool,
    pub(crate) game_paused: bool,
    pub(crate) game_over: bool,
    pub(crate) game_speed: u64,
    pub(crate) tile_count: u16,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct Patch {
    pub(crate) snake: Option<Vec<Position>>,
    pub(crate) direction: Option<Direction>,
    pub(crate) next_direction: Option<Direction>,
    pub(crate) food: Option<Position>,
    pub(crate) score: Option<u32>,
    pub(crate) high_score: Option<u32>,
    pub(crate) wall_passes: Option<u32>,
    pub(crate) max_wall_passes: Option<u32>,
    pub(crate) game_running: Option<bool>,
    pub(crate) game_paused: Option<bool>,
    pub(crate) game_over: Option<bool>,
    pub(crate) game_speed: Option<u64>,
    /// The grid can't be resized in place; if given, this must match the
    /// game's current tile count.
    pub(crate) tile_count: Option<u16>,
}

impl<R> Game<R> {
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.segments().collect(),
            direction: self.direction,
            next_direction: self.next_direction,
            food: self.food,
            score: self.score,
            high_score: self.high_score,
            wall_passes: self.wall_passes,
            max_wall_passes: self.options.max_wall_passes,
            game_running: self.running,
            game_paused: self.paused,
            game_over: self.over,
            game_speed: self.game_speed,
            tile_count: self.grid.tile_count(),
        }
    }

    /// Overwrite the fields of the game that are set in `patch`.
    ///
    /// The patch is checked in full before anything is changed, so on error
    /// the game is left untouched.
    pub(crate) fn apply_patch(&mut self, patch: Patch) -> Result<(), PatchError> {
        if let Some(got) = patch.tile_count.filter(|&tc| tc != self.grid.tile_count()) {
            return Err(PatchError::TileCount {
                expected: self.grid.tile_count(),
                got,
            });
        }
        let snake = match patch.snake {
            Some(segments) => {
                for &pos in &segments {
                    self.check_cell("snake", pos)?;
                }
                Some(Snake::from_segments(segments).ok_or(PatchError::EmptySnake)?)
            }
            None => None,
        };
        if let Some(pos) = patch.food {
            self.check_cell("food", pos)?;
        }
        for (field, direction) in [
            ("direction", patch.direction),
            ("nextDirection", patch.next_direction),
        ] {
            if let Some(d) = direction.filter(|d| !d.is_valid()) {
                return Err(PatchError::Direction {
                    field,
                    x: d.x,
                    y: d.y,
                });
            }
        }
        if patch.game_speed == Some(0) {
            return Err(PatchError::ZeroSpeed);
        }

        if let Some(snake) = snake {
            self.snake = snake;
        }
        if let Some(d) = patch.direction {
            self.direction = d;
        }
        if let Some(d) = patch.next_direction {
            self.next_direction = d;
        }
        if let Some(pos) = patch.food {
            self.food = Some(pos);
        }
        if let Some(score) = patch.score {
            self.score = score;
        }
        if let Some(high_score) = patch.high_score {
            self.high_score = high_score;
        }
        if let Some(passes) = patch.wall_passes {
            self.wall_passes = passes;
        }
        if let Some(max) = patch.max_wall_passes {
            self.options.max_wall_passes = max;
        }
        if let Some(running) = patch.game_running {
            self.running = running;
        }
        if let Some(paused) = patch.game_paused {
            self.paused = paused;
        }
        if let Some(over) = patch.game_over {
            self.over = over;
        }
        if let Some(speed) = patch.game_speed {
            self.game_speed = speed;
        }
        Ok(())
    }

    fn check_cell(&self, field: &'static str, pos: Position) -> Result<(), PatchError> {
        if self.grid.contains(pos) {
            Ok(())
        } else {
            Err(PatchError::OutOfBounds {
                field,
                x: pos.x,
                y: pos.y,
                tile_count: self.grid.tile_count(),
            })
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum PatchError {
    #[error("snake must have at least one segment")]
    EmptySnake,
    #[error("{field} cell ({x}, {y}) is outside of the {tile_count}×{tile_count} grid")]
    OutOfBounds {
        field: &'static str,
        x: i32,
        y: i32,
        tile_count: u16,
    },
    #[error("{field} ({x}, {y}) is not a unit vector")]
    Direction { field: &'static str, x: i32, y: i32 },
    #[error("gameSpeed must be greater than zero")]
    ZeroSpeed,
    #[error("tileCount cannot be changed from {expected} to {got}")]
    TileCount { expected: u16, got: u16 },
}
