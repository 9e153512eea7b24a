use crate::consts;
use serde::Deserialize;
use thiserror::Error;

/// Gameplay rules: grid size, wall passes, scoring, and speed progression
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawOptions")]
pub(crate) struct Options {
    /// Width & height of the square tile grid
    pub(crate) tile_count: u16,

    /// Number of wraps around the grid edge allowed before hitting a wall is
    /// fatal
    pub(crate) max_wall_passes: u32,

    /// Points awarded per food eaten
    pub(crate) food_value: u32,

    /// Tick interval at a score of zero, in milliseconds
    pub(crate) base_speed_ms: u64,

    /// Amount the tick interval shrinks at each threshold, in milliseconds
    pub(crate) speed_step_ms: u64,

    /// Score interval at which the game speeds up
    pub(crate) speed_threshold: u32,

    /// Floor for the tick interval, in milliseconds
    pub(crate) min_speed_ms: u64,
}

impl Options {
    /// Return the tick interval, in milliseconds, for the given score.
    ///
    /// This is a non-increasing step function of `score`: every
    /// `speed_threshold` points knock `speed_step_ms` off of `base_speed_ms`,
    /// and the result never goes below `min_speed_ms`.
    pub(crate) fn speed_for_score(&self, score: u32) -> u64 {
        let steps = u64::from(score / self.speed_threshold);
        self.base_speed_ms
            .saturating_sub(steps.saturating_mul(self.speed_step_ms))
            .max(self.min_speed_ms)
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            tile_count: consts::TILE_COUNT,
            max_wall_passes: consts::MAX_WALL_PASSES,
            food_value: consts::FOOD_VALUE,
            base_speed_ms: consts::BASE_SPEED_MS,
            speed_step_ms: consts::SPEED_STEP_MS,
            speed_threshold: consts::SPEED_THRESHOLD,
            min_speed_ms: consts::MIN_SPEED_MS,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawOptions {
    tile_count: u16,
    max_wall_passes: u32,
    food_value: u32,
    base_speed_ms: u64,
    speed_step_ms: u64,
    speed_threshold: u32,
    min_speed_ms: u64,
}

impl Default for RawOptions {
    fn default() -> RawOptions {
        let opts = Options::default();
        RawOptions {
            tile_count: opts.tile_count,
            max_wall_passes: opts.max_wall_passes,
            food_value: opts.food_value,
            base_speed_ms: opts.base_speed_ms,
            speed_step_ms: opts.speed_step_ms,
            speed_threshold: opts.speed_threshold,
            min_speed_ms: opts.min_speed_ms,
        }
    }
}

impl TryFrom<RawOptions> for Options {
    type Error = OptionsError;

    fn try_from(value: RawOptions) -> Result<Options, OptionsError> {
        if !(consts::MIN_TILE_COUNT..=consts::MAX_TILE_COUNT).contains(&value.tile_count) {
            return Err(OptionsError::TileCount(value.tile_count));
        }
        if value.speed_threshold == 0 {
            return Err(OptionsError::ZeroThreshold);
        }
        if value.min_speed_ms == 0 {
            return Err(OptionsError::ZeroSpeed);
        }
        if value.min_speed_ms > value.base_speed_ms {
            return Err(OptionsError::SpeedRange {
                min: value.min_speed_ms,
                base: value.base_speed_ms,
            });
        }
        Ok(Options {
            tile_count: value.tile_count,
            max_wall_passes: value.max_wall_passes,
            food_value: value.food_value,
            base_speed_ms: value.base_speed_ms,
            speed_step_ms: value.speed_step_ms,
            speed_threshold: value.speed_threshold,
            min_speed_ms: value.min_speed_ms,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum OptionsError {
    #[error(
        "tile-count must be between {min} and {max}, got {0}",
        min = consts::MIN_TILE_COUNT,
        max = consts::MAX_TILE_COUNT
    )]
    TileCount(u16),
    #[error("speed-threshold must be greater than zero")]
    ZeroThreshold,
    #[error("min-speed-ms must be greater than zero")]
    ZeroSpeed,
    #[error("min-speed-ms ({min}) must not exceed base-speed-ms ({base})")]
    SpeedRange { min: u64, base: u64 },
}
