use crate::command::Command;
use crate::game::{Control, Game, Phase, Tick};
use crate::highscore::save_high_score;
use crate::storage::StorageBackend;
use crate::timer::TickTimer;
use crate::util::get_display_area;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::{self, Event, MouseButton, MouseEvent, MouseEventKind};
use rand::Rng;
use ratatui::{
    backend::Backend,
    layout::{Position, Rect},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The running program: a game plus everything needed to drive it in real
/// time
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    storage: StorageBackend,
    timer: TickTimer,
    warning: Option<Warning>,
    /// Area of the most recently drawn frame, used to resolve mouse clicks
    area: Rect,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>, storage: StorageBackend, warning: Option<Warning>) -> App<R> {
        App {
            game,
            storage,
            timer: TickTimer::new(),
            warning,
            area: Rect::ZERO,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.sync_timer(Instant::now());
        while !self.quitting {
            self.draw(terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let game = &self.game;
        let warning = self.warning.as_ref();
        let frame = terminal.draw(|frame| {
            game.draw(frame);
            if let Some(w) = warning {
                frame.render_widget(w, get_display_area(frame.area()));
            }
        })?;
        self.area = frame.area;
        Ok(())
    }

    /// Wait for either the next tick or the next input event, whichever comes
    /// first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        let now = Instant::now();
        if self.timer.is_due(now) {
            self.fire_tick(now);
            return Ok(());
        }
        let ready = match self.timer.remaining(now) {
            Some(timeout) => event::poll(timeout)?,
            None => true,
        };
        if ready {
            let ev = event::read()?;
            self.handle_event(&ev, Instant::now());
        }
        Ok(())
    }

    fn fire_tick(&mut self, now: Instant) {
        self.timer.cancel();
        match self.game.tick() {
            Tick::Ate {
                score,
                new_high_score: true,
            } => self.persist_high_score(score),
            Tick::GameOver { final_score } => {
                log::debug!("Tick ended game with final score {final_score}");
            }
            Tick::Idle | Tick::Moved | Tick::Ate { .. } => (),
        }
        self.sync_timer(now);
    }

    fn handle_event(&mut self, ev: &Event, now: Instant) {
        if let Some(cmd) = ev.as_key_press_event().and_then(Command::from_key_event) {
            self.handle_command(cmd);
        } else if let Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) = *ev
        {
            if self.warning.is_none() {
                if let Some(control) = self.game.control_at(self.area, Position::new(column, row))
                {
                    self.game.apply_control(control);
                }
            }
        } else if *ev == Event::FocusLost && self.game.phase() == Phase::Running {
            log::debug!("Terminal lost focus; pausing");
            self.game.toggle_pause();
        }
        self.sync_timer(now);
    }

    fn handle_command(&mut self, cmd: Command) {
        if let Some(ref warning) = self.warning {
            match warning.handle_command(cmd) {
                Some(WarningOutcome::Dismissed) => self.warning = None,
                Some(WarningOutcome::Quit) => self.quitting = true,
                None => (),
            }
            return;
        }
        if let Some(direction) = cmd.direction() {
            self.game.set_direction(direction);
            return;
        }
        match cmd {
            Command::Quit | Command::Q => self.quitting = true,
            Command::Enter if self.game.phase() == Phase::GameOver => {
                self.game.apply_control(Control::PlayAgain);
            }
            Command::Enter => self.game.apply_control(Control::Start),
            Command::Space => self.game.apply_control(Control::TogglePause),
            Command::R => self.game.apply_control(Control::Reset),
            _ => (),
        }
    }

    /// Make the timer agree with the game: a tick is pending exactly when the
    /// game is running unpaused and no warning is up
    fn sync_timer(&mut self, now: Instant) {
        if self.game.phase() == Phase::Running && self.warning.is_none() {
            self.timer
                .ensure_armed(now, Duration::from_millis(self.game.game_speed()));
        } else {
            self.timer.cancel();
        }
    }

    fn persist_high_score(&mut self, score: u32) {
        if let Err(e) = save_high_score(&mut self.storage, score) {
            log::error!("Failed to save high score: {e}");
            self.warning = Some(Warning::from_error(&e));
        }
    }
}

impl<R> App<R> {
    pub(crate) fn game(&self) -> &Game<R> {
        &self.game
    }
}
