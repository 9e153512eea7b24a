use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{block::Block, Clear, Widget},
};

/// A widget for the pop-up shown once the snake has crashed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct GameOverOverlay {
    final_score: u32,
}

impl GameOverOverlay {
    /// The size that should be used for the `Rect` passed to
    /// `GameOverOverlay::render()`
    pub(super) const SIZE: Size = Size {
        width: 24,
        height: 6,
    };

    pub(super) fn new(final_score: u32) -> GameOverOverlay {
        GameOverOverlay { final_score }
    }

    fn block() -> Block<'static> {
        Block::bordered()
            .title(" GAME OVER ")
            .title_alignment(Alignment::Center)
            .style(Style::reset())
    }

    /// Split the inside of the pop-up into its score row and its button row
    fn rows(area: Rect) -> [Rect; 2] {
        let [_, score, _, button] =
            Layout::vertical([Constraint::Length(1); 4]).areas(Self::block().inner(area));
        [score, button]
    }

    /// Return the area taken up by the "Play Again" button when the pop-up is
    /// drawn in `area`
    pub(super) fn play_again_area(area: Rect) -> Rect {
        let [_, button] = Self::rows(area);
        button
    }
}

impl Widget for GameOverOverlay {
    /*
     * ┌───── GAME OVER ──────┐
     * │                      │
     * │   Final Score: 120   │
     * │                      │
     * │ [Play Again (Enter)] │
     * └──────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score, button] = Self::rows(area);
        Clear.render(area, buf);
        Self::block().render(area, buf);
        Line::from(format!("Final Score: {}", self.final_score))
            .centered()
            .render(score, buf);
        Line::from_iter([
            Span::raw("[Play Again ("),
            Span::styled("Enter", consts::KEY_STYLE),
            Span::raw(")]"),
        ])
        .style(consts::BUTTON_STYLE)
        .centered()
        .render(button, buf);
    }
}

/// A widget for the banner shown while the game is paused
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct PausedBanner;

impl PausedBanner {
    /// The size that should be used for the `Rect` passed to
    /// `PausedBanner::render()`
    pub(super) const SIZE: Size = Size {
        width: 26,
        height: 3,
    };
}

impl Widget for PausedBanner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" PAUSED ")
            .title_alignment(Alignment::Center)
            .style(Style::reset());
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        Line::from_iter([
            Span::raw("Press "),
            Span::styled("Space", consts::KEY_STYLE),
            Span::raw(" to resume"),
        ])
        .centered()
        .render(inner, buf);
    }
}
