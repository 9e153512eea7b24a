//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Default width & height of the tile grid
pub(crate) const TILE_COUNT: u16 = 20;

/// Smallest tile grid accepted from the configuration
pub(crate) const MIN_TILE_COUNT: u16 = 4;

/// Largest tile grid accepted from the configuration; anything bigger
/// doesn't fit in [`DISPLAY_SIZE`] along with the score & control bars
pub(crate) const MAX_TILE_COUNT: u16 = 20;

/// How many times the snake may wrap around the edge of the grid before
/// touching a wall becomes fatal
pub(crate) const MAX_WALL_PASSES: u32 = 3;

/// Points awarded for each piece of food eaten
pub(crate) const FOOD_VALUE: u32 = 10;

/// Tick interval, in milliseconds, at a score of zero
pub(crate) const BASE_SPEED_MS: u64 = 150;

/// How much the tick interval shrinks, in milliseconds, at each speed
/// threshold
pub(crate) const SPEED_STEP_MS: u64 = 10;

/// The tick interval shrinks each time the score crosses a multiple of this
pub(crate) const SPEED_THRESHOLD: u32 = 50;

/// The tick interval never drops below this many milliseconds
pub(crate) const MIN_SPEED_MS: u64 = 50;

/// Number of random cells to try when placing food before falling back to a
/// scan of the whole grid
pub(crate) const FOOD_SPAWN_ATTEMPTS: usize = 100;

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the snake's head when it isn't moving
pub(crate) const SNAKE_HEAD_STILL_SYMBOL: char = '@';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with itself or a wall
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for control buttons that can currently be pressed
pub(crate) const BUTTON_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Style for control buttons that can't be pressed in the current phase
pub(crate) const DISABLED_BUTTON_STYLE: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::DIM);
