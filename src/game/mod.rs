mod controls;
mod direction;
mod food;
mod grid;
mod overlay;
mod snake;
mod snapshot;
pub(crate) use self::controls::Control;
use self::controls::ControlBar;
pub(crate) use self::direction::Direction;
use self::food::place_food;
use self::grid::{Grid, Position, Step};
use self::overlay::{GameOverOverlay, PausedBanner};
use self::snake::Snake;
pub(crate) use self::snapshot::Patch;
use crate::consts;
use crate::options::Options;
use crate::util::{center_rect, get_display_area};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position as CellPosition, Rect, Size},
    style::Style,
    text::Line,
    widgets::Widget,
    Frame,
};

/// The snake game proper.
///
/// Every mutation of the game happens through one of the methods here; the
/// app only decides *when* to call [`Game::tick()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    options: Options,
    grid: Grid,
    snake: Snake,
    direction: Direction,
    next_direction: Direction,
    food: Option<Position>,
    score: u32,
    high_score: u32,
    wall_passes: u32,
    game_speed: u64,
    running: bool,
    paused: bool,
    over: bool,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(options: Options, high_score: u32) -> Self {
        Game::new_with_rng(options, high_score, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(options: Options, high_score: u32, rng: R) -> Game<R> {
        let grid = Grid::new(options.tile_count);
        let snake = Snake::starting(grid);
        let mut game = Game {
            rng,
            options,
            grid,
            snake,
            direction: Direction::RIGHT,
            next_direction: Direction::RIGHT,
            food: None,
            score: 0,
            high_score,
            wall_passes: 0,
            game_speed: options.base_speed_ms,
            running: false,
            paused: false,
            over: false,
        };
        game.food = place_food(&mut game.rng, game.grid, &game.snake);
        game
    }

    /// Begin play.  Starting a finished game resets it first.  Does nothing
    /// if the game is already running or paused.
    pub(crate) fn start(&mut self) {
        match self.phase() {
            Phase::Idle => (),
            Phase::GameOver => self.reset(),
            Phase::Running | Phase::Paused => return,
        }
        log::debug!("Starting game");
        self.running = true;
        self.paused = false;
    }

    /// Return everything except the high score to its initial state and stop
    /// the game
    pub(crate) fn reset(&mut self) {
        log::debug!("Resetting game");
        self.snake = Snake::starting(self.grid);
        self.direction = Direction::RIGHT;
        self.next_direction = Direction::RIGHT;
        self.score = 0;
        self.wall_passes = 0;
        self.game_speed = self.options.base_speed_ms;
        self.running = false;
        self.paused = false;
        self.over = false;
        self.food = place_food(&mut self.rng, self.grid, &self.snake);
    }

    pub(crate) fn play_again(&mut self) {
        self.reset();
        self.start();
    }

    pub(crate) fn apply_control(&mut self, control: Control) {
        match control {
            Control::Start => self.start(),
            Control::TogglePause => self.toggle_pause(),
            Control::Reset => self.reset(),
            Control::PlayAgain => self.play_again(),
        }
    }

    /// Advance the game by one step.
    ///
    /// Nothing happens unless the game is running and not paused.
    pub(crate) fn tick(&mut self) -> Tick {
        if self.phase() != Phase::Running {
            return Tick::Idle;
        }
        self.direction = self.next_direction;
        if self.direction.is_none() {
            return Tick::Idle;
        }
        let head = match self.grid.step(self.snake.head(), self.direction) {
            Step::Inside(pos) => pos,
            Step::Wrapped(pos) => {
                if self.wall_passes >= self.options.max_wall_passes {
                    return self.end_game();
                }
                self.wall_passes += 1;
                pos
            }
        };
        if self.snake.contains(head) {
            return self.end_game();
        }
        self.snake.push_head(head);
        let outcome = if self.food == Some(head) {
            self.score = self.score.saturating_add(self.options.food_value);
            let new_high_score = self.score > self.high_score;
            if new_high_score {
                self.high_score = self.score;
            }
            self.food = place_food(&mut self.rng, self.grid, &self.snake);
            Tick::Ate {
                score: self.score,
                new_high_score,
            }
        } else {
            self.snake.drop_tail();
            Tick::Moved
        };
        self.game_speed = self.options.speed_for_score(self.score);
        outcome
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn toggle_pause(&mut self) {
        if self.running {
            self.paused = !self.paused;
            log::debug!("Paused: {}", self.paused);
        }
    }

    /// Request that the snake move in `direction` starting with the next
    /// tick.  Requests to stand still or to reverse onto the snake's own body
    /// are ignored.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if direction.is_none() || !direction.is_valid() || direction == self.direction.reverse() {
            return;
        }
        self.next_direction = direction;
    }

    fn end_game(&mut self) -> Tick {
        log::info!(
            "Game over: score {}, length {}, {} wall passes",
            self.score,
            self.snake.len(),
            self.wall_passes
        );
        self.running = false;
        self.paused = false;
        self.over = true;
        Tick::GameOver {
            final_score: self.score,
        }
    }

    pub(crate) fn phase(&self) -> Phase {
        if self.over {
            Phase::GameOver
        } else if !self.running {
            Phase::Idle
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }

    /// Current tick interval in milliseconds
    pub(crate) fn game_speed(&self) -> u64 {
        self.game_speed
    }

    /// Return the control, if any, that a mouse click at `pos` activates when
    /// the game is drawn in `area`
    pub(crate) fn control_at(&self, area: Rect, pos: CellPosition) -> Option<Control> {
        let regions = self.regions(area);
        if self.over && GameOverOverlay::play_again_area(regions.overlay).contains(pos) {
            return Some(Control::PlayAgain);
        }
        ControlBar::new(self.phase()).control_at(regions.controls, pos)
    }

    fn regions(&self, area: Rect) -> Regions {
        let display = get_display_area(area);
        let [score, board_area, controls] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        let side = self.grid.tile_count().saturating_add(2);
        let board = center_rect(
            board_area,
            Size {
                width: side,
                height: side,
            },
        );
        let overlay = match self.phase() {
            Phase::GameOver => center_rect(display, GameOverOverlay::SIZE),
            Phase::Paused => center_rect(display, PausedBanner::SIZE),
            Phase::Idle | Phase::Running => Rect::ZERO,
        };
        Regions {
            score,
            board,
            controls,
            overlay,
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let regions = self.regions(area);
        Line::styled(
            format!(
                " Score: {}   High Score: {}   Walls: {}/{}   Speed: {} ms",
                self.score,
                self.high_score,
                self.wall_passes,
                self.options.max_wall_passes,
                self.game_speed
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(regions.score, buf);

        DottedBorder.render(regions.board, buf);
        let mut level = Canvas {
            area: regions.board.inner(Margin::new(1, 1)),
            buf,
        };
        for p in self.snake.body() {
            level.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(pos) = self.food {
            level.draw_cell(pos, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if self.over {
            level.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            level.draw_cell(
                self.snake.head(),
                self.direction.head_symbol(),
                consts::SNAKE_STYLE,
            );
        }

        ControlBar::new(self.phase()).render(regions.controls, buf);

        match self.phase() {
            Phase::Paused => PausedBanner.render(regions.overlay, buf),
            Phase::GameOver => GameOverOverlay::new(self.score).render(regions.overlay, buf),
            Phase::Idle | Phase::Running => (),
        }
    }
}

/// Where the parts of the game screen are drawn
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Regions {
    score: Rect,
    board: Rect,
    controls: Rect,
    overlay: Rect,
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn cell_position(&self, pos: Position) -> Option<CellPosition> {
        let x = self.area.x.checked_add(u16::try_from(pos.x).ok()?)?;
        let y = self.area.y.checked_add(u16::try_from(pos.y).ok()?)?;
        Some(CellPosition { x, y })
    }

    fn draw_char(&mut self, pos: Position, symbol: char) {
        if let Some(cell) = self.cell_position(pos).and_then(|p| self.buf.cell_mut(p)) {
            cell.set_char(symbol);
        }
    }

    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        if let Some(cell) = self.cell_position(pos).and_then(|p| self.buf.cell_mut(p)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

/// Border drawn around the board.  It's dotted rather than solid because the
/// snake can pass through it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let max_x = i32::from(area.width) - 1;
        let max_y = i32::from(area.height) - 1;
        let mut canvas = Canvas { area, buf };
        canvas.draw_char(Position::new(0, 0), '·');
        canvas.draw_char(Position::new(max_x, 0), '·');
        canvas.draw_char(Position::new(max_x, max_y), '·');
        canvas.draw_char(Position::new(0, max_y), '·');
        for x in 1..max_x {
            canvas.draw_char(Position::new(x, 0), '⋯');
            canvas.draw_char(Position::new(x, max_y), '⋯');
        }
        for y in 1..max_y {
            canvas.draw_char(Position::new(0, y), '⋮');
            canvas.draw_char(Position::new(max_x, y), '⋮');
        }
    }
}

/// The coarse state of a game, derived from its running/paused/over flags
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    /// Freshly created or reset; waiting to be started
    Idle,
    Running,
    Paused,
    /// The snake crashed.  State is frozen until a reset.
    GameOver,
}

/// What happened during a call to [`Game::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The game wasn't running, or the snake is standing still
    Idle,
    Moved,
    Ate {
        score: u32,
        /// Whether `score` beat the previous high score
        new_high_score: bool,
    },
    GameOver {
        final_score: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game(options: Options, high_score: u32) -> Game<ChaCha12Rng> {
        Game::new_with_rng(options, high_score, ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn segments<R>(game: &Game<R>) -> Vec<Position> {
        game.snake.segments().collect()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn cell(buf: &Buffer, x: u16, y: u16) -> &ratatui::buffer::Cell {
        &buf[(x, y)]
    }

    fn render<R>(game: &Game<R>) -> Buffer {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Widget::render(game, area, &mut buf);
        buf
    }

    #[test]
    fn new_game_is_idle() {
        let mut game = new_game(Options::default(), 70);
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.score, 0);
        assert_eq!(game.high_score, 70);
        assert_eq!(game.direction, Direction::RIGHT);
        assert_eq!(game.game_speed, 150);
        let before = segments(&game);
        assert_eq!(game.tick(), Tick::Idle);
        assert_eq!(segments(&game), before);
    }

    #[test]
    fn start_pause_resume() {
        let mut game = new_game(Options::default(), 0);
        game.toggle_pause();
        assert_eq!(game.phase(), Phase::Idle);
        game.start();
        assert_eq!(game.phase(), Phase::Running);
        game.toggle_pause();
        assert_eq!(game.phase(), Phase::Paused);
        let head = game.snake.head();
        assert_eq!(game.tick(), Tick::Idle);
        assert_eq!(game.snake.head(), head);
        game.start();
        assert_eq!(game.phase(), Phase::Paused);
        game.toggle_pause();
        assert_eq!(game.phase(), Phase::Running);
    }

    #[test]
    fn move_right() {
        let mut game = new_game(Options::default(), 0);
        game.food = None;
        game.start();
        assert_eq!(game.tick(), Tick::Moved);
        assert_eq!(
            segments(&game),
            [
                Position::new(11, 10),
                Position::new(10, 10),
                Position::new(9, 10)
            ]
        );
    }

    #[test]
    fn reverse_is_rejected() {
        let mut game = new_game(Options::default(), 0);
        game.food = None;
        game.start();
        game.set_direction(Direction::LEFT);
        assert_eq!(game.next_direction, Direction::RIGHT);
        game.set_direction(Direction::UP);
        assert_eq!(game.tick(), Tick::Moved);
        assert_eq!(game.direction, Direction::UP);
        assert_eq!(game.snake.head(), Position::new(10, 9));
        game.set_direction(Direction::DOWN);
        assert_eq!(game.next_direction, Direction::UP);
    }

    #[test]
    fn never_steps_onto_neck() {
        let mut game = new_game(Options::default(), 0);
        game.food = None;
        game.start();
        let inputs = [
            Direction::UP,
            Direction::DOWN,
            Direction::LEFT,
            Direction::RIGHT,
            Direction::DOWN,
            Direction::UP,
            Direction::LEFT,
        ];
        for d in inputs {
            let neck = game.snake.body().next();
            game.set_direction(d);
            assert_eq!(game.tick(), Tick::Moved);
            assert_ne!(Some(game.snake.head()), neck);
        }
    }

    #[test]
    fn zero_direction_is_ignored() {
        let mut game = new_game(Options::default(), 0);
        game.set_direction(Direction::NONE);
        assert_eq!(game.next_direction, Direction::RIGHT);
        game.set_direction(Direction { x: 1, y: 1 });
        assert_eq!(game.next_direction, Direction::RIGHT);
    }

    #[test]
    fn standing_still() {
        let mut game = new_game(Options::default(), 0);
        game.start();
        game.next_direction = Direction::NONE;
        let before = segments(&game);
        assert_eq!(game.tick(), Tick::Idle);
        assert_eq!(segments(&game), before);
        assert_eq!(game.direction, Direction::NONE);
        assert_eq!(game.phase(), Phase::Running);
    }

    #[test]
    fn eat_food() {
        let mut game = new_game(Options::default(), 0);
        game.food = Some(Position::new(11, 10));
        game.start();
        assert_eq!(
            game.tick(),
            Tick::Ate {
                score: 10,
                new_high_score: true
            }
        );
        assert_eq!(game.score, 10);
        assert_eq!(game.high_score, 10);
        assert_eq!(game.snake.len(), 4);
        let food = game.food.unwrap();
        assert!(!game.snake.contains(food));
    }

    #[test]
    fn eat_food_below_high_score() {
        let mut game = new_game(Options::default(), 100);
        game.food = Some(Position::new(11, 10));
        game.start();
        assert_eq!(
            game.tick(),
            Tick::Ate {
                score: 10,
                new_high_score: false
            }
        );
        assert_eq!(game.high_score, 100);
    }

    #[test]
    fn speed_up_at_threshold() {
        let mut game = new_game(Options::default(), 0);
        game.score = 40;
        game.food = Some(Position::new(11, 10));
        game.start();
        assert_eq!(
            game.tick(),
            Tick::Ate {
                score: 50,
                new_high_score: true
            }
        );
        assert_eq!(game.game_speed, 140);
    }

    #[test]
    fn self_collision() {
        let mut game = new_game(Options::default(), 0);
        game.snake = Snake::from_segments([
            Position::new(5, 5),
            Position::new(6, 5),
            Position::new(7, 5),
        ])
        .unwrap();
        game.score = 30;
        game.start();
        let before = segments(&game);
        assert_eq!(game.tick(), Tick::GameOver { final_score: 30 });
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(!game.running);
        assert_eq!(segments(&game), before);
        assert_eq!(game.tick(), Tick::Idle);
        assert_eq!(segments(&game), before);
        game.toggle_pause();
        assert_eq!(game.phase(), Phase::GameOver);
    }

    #[test]
    fn self_collision_shows_final_score() {
        let mut game = new_game(Options::default(), 0);
        game.snake = Snake::from_segments([
            Position::new(5, 5),
            Position::new(6, 5),
            Position::new(7, 5),
        ])
        .unwrap();
        game.score = 30;
        game.start();
        assert_eq!(game.tick(), Tick::GameOver { final_score: 30 });
        let buf = render(&game);
        assert!(row_text(&buf, 9).contains("GAME OVER"));
        assert!(row_text(&buf, 11).contains("Final Score: 30"));
        let controls = row_text(&buf, 23);
        assert!(controls.contains("[Start (Enter)]"));
        let key_x = controls
            .find("Enter")
            .and_then(|i| u16::try_from(i).ok())
            .unwrap();
        assert_eq!(cell(&buf, key_x, 23).fg, consts::KEY_STYLE.fg.unwrap());
    }

    #[test]
    fn wall_passes_run_out() {
        let options = Options {
            tile_count: 5,
            ..Options::default()
        };
        let mut game = new_game(options, 0);
        game.food = None;
        game.start();
        // Head starts at x=2 and wraps on ticks 3, 8, and 13.
        for i in 1..18 {
            assert_eq!(game.tick(), Tick::Moved, "tick {i}");
        }
        assert_eq!(game.wall_passes, 3);
        assert_eq!(game.snake.head(), Position::new(4, 2));
        assert_eq!(game.tick(), Tick::GameOver { final_score: 0 });
        assert_eq!(game.wall_passes, 3);
        assert_eq!(game.snake.head(), Position::new(4, 2));
    }

    #[test]
    fn wrap_counts_pass() {
        let mut game = new_game(Options::default(), 0);
        game.food = None;
        game.snake = Snake::from_segments([Position::new(0, 4), Position::new(0, 5)]).unwrap();
        game.direction = Direction::UP;
        game.next_direction = Direction::UP;
        game.start();
        assert_eq!(game.tick(), Tick::Moved);
        assert_eq!(game.snake.head(), Position::new(0, 3));
        assert_eq!(game.wall_passes, 0);
        game.set_direction(Direction::LEFT);
        assert_eq!(game.tick(), Tick::Moved);
        assert_eq!(game.snake.head(), Position::new(19, 3));
        assert_eq!(game.wall_passes, 1);
    }

    #[test]
    fn no_wall_passes_allowed() {
        let options = Options {
            max_wall_passes: 0,
            ..Options::default()
        };
        let mut game = new_game(options, 0);
        game.food = None;
        game.snake = Snake::from_segments([Position::new(19, 0), Position::new(18, 0)]).unwrap();
        game.start();
        assert_eq!(game.tick(), Tick::GameOver { final_score: 0 });
        assert_eq!(game.wall_passes, 0);
    }

    #[test]
    fn reset_keeps_high_score() {
        let mut game = new_game(Options::default(), 0);
        game.food = Some(Position::new(11, 10));
        game.start();
        game.set_direction(Direction::UP);
        let _ = game.tick();
        game.reset();
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.score, 0);
        assert_eq!(game.high_score, 0);
        assert_eq!(game.direction, Direction::RIGHT);
        assert_eq!(game.next_direction, Direction::RIGHT);
        assert_eq!(game.game_speed, 150);
        assert_eq!(segments(&game), segments(&new_game(Options::default(), 0)));

        game.food = Some(Position::new(11, 10));
        game.start();
        let _ = game.tick();
        game.reset();
        assert_eq!(game.high_score, 10);
        assert_eq!(game.score, 0);
        assert_eq!(game.snake.len(), 3);
        assert!(game.food.is_some_and(|p| !game.snake.contains(p)));
    }

    #[test]
    fn start_after_game_over_resets() {
        let mut game = new_game(Options::default(), 0);
        game.snake = Snake::from_segments([
            Position::new(5, 5),
            Position::new(6, 5),
            Position::new(7, 5),
        ])
        .unwrap();
        game.score = 20;
        game.wall_passes = 2;
        game.start();
        let _ = game.tick();
        assert_eq!(game.phase(), Phase::GameOver);
        game.apply_control(Control::Start);
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.score, 0);
        assert_eq!(game.wall_passes, 0);
        assert_eq!(game.snake.head(), Position::new(10, 10));
    }

    #[test]
    fn play_again() {
        let mut game = new_game(Options::default(), 0);
        game.over = true;
        game.score = 50;
        game.apply_control(Control::PlayAgain);
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn click_controls() {
        let area = Rect::new(0, 0, 80, 24);
        let mut game = new_game(Options::default(), 0);
        assert_eq!(
            game.control_at(area, CellPosition::new(20, 23)),
            Some(Control::Start)
        );
        assert_eq!(game.control_at(area, CellPosition::new(40, 23)), None);
        game.start();
        assert_eq!(game.control_at(area, CellPosition::new(20, 23)), None);
        assert_eq!(
            game.control_at(area, CellPosition::new(40, 23)),
            Some(Control::TogglePause)
        );
        assert_eq!(
            game.control_at(area, CellPosition::new(60, 23)),
            Some(Control::Reset)
        );
    }

    #[test]
    fn click_play_again() {
        let area = Rect::new(0, 0, 80, 24);
        let mut game = new_game(Options::default(), 0);
        assert_eq!(game.control_at(area, CellPosition::new(40, 13)), None);
        game.over = true;
        assert_eq!(
            game.control_at(area, CellPosition::new(40, 13)),
            Some(Control::PlayAgain)
        );
    }

    #[test]
    fn render_idle() {
        let options = Options {
            tile_count: 10,
            ..Options::default()
        };
        let mut game = new_game(options, 30);
        game.food = Some(Position::new(7, 2));
        let buf = render(&game);
        assert!(row_text(&buf, 0)
            .starts_with(" Score: 0   High Score: 30   Walls: 0/3   Speed: 150 ms"));
        assert_eq!(cell(&buf, 34, 6).symbol(), "·");
        assert_eq!(cell(&buf, 35, 6).symbol(), "⋯");
        assert_eq!(cell(&buf, 34, 7).symbol(), "⋮");
        assert_eq!(cell(&buf, 45, 17).symbol(), "·");
        assert_eq!(cell(&buf, 40, 12).symbol(), "<");
        assert_eq!(cell(&buf, 39, 12).symbol(), "⚬");
        assert_eq!(cell(&buf, 38, 12).symbol(), "⚬");
        assert_eq!(cell(&buf, 42, 9).symbol(), "●");
        assert_eq!(cell(&buf, 42, 9).fg, consts::FOOD_STYLE.fg.unwrap());
        let controls = row_text(&buf, 23);
        assert!(controls.contains("[Start (Enter)]"));
        assert!(controls.contains("[Pause (Space)]"));
        assert!(controls.contains("[Reset (r)]"));
    }

    #[test]
    fn render_paused() {
        let mut game = new_game(Options::default(), 0);
        game.start();
        game.toggle_pause();
        let buf = render(&game);
        assert!((0..24).any(|y| row_text(&buf, y).contains("Press Space to resume")));
        assert!(row_text(&buf, 23).contains("[Resume (Space)]"));
    }

    #[test]
    fn render_game_over() {
        let mut game = new_game(Options::default(), 0);
        game.over = true;
        game.score = 120;
        let buf = render(&game);
        assert!(row_text(&buf, 9).contains("GAME OVER"));
        assert!(row_text(&buf, 11).contains("Final Score: 120"));
        assert!(row_text(&buf, 13).contains("[Play Again (Enter)]"));
    }
}
