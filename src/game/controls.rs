use super::Phase;
use crate::consts;
use enum_map::{Enum, EnumMap};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Position, Rect},
    text::{Line, Span},
    widgets::Widget,
};

/// An action that can be triggered from the control bar, the game-over
/// overlay, or the keyboard
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Control {
    Start,
    TogglePause,
    Reset,
    PlayAgain,
}

/// The buttons on the control bar below the board
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(super) enum Button {
    Start,
    Pause,
    Reset,
}

impl Button {
    fn control(self) -> Control {
        match self {
            Button::Start => Control::Start,
            Button::Pause => Control::TogglePause,
            Button::Reset => Control::Reset,
        }
    }

    fn label(self, phase: Phase) -> &'static str {
        match (self, phase) {
            (Button::Start, _) => "Start",
            (Button::Pause, Phase::Paused) => "Resume",
            (Button::Pause, _) => "Pause",
            (Button::Reset, _) => "Reset",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Button::Start => "Enter",
            Button::Pause => "Space",
            Button::Reset => "r",
        }
    }

    /// Can the button be pressed while the game is in `phase`?
    pub(super) fn enabled(self, phase: Phase) -> bool {
        match self {
            Button::Start => matches!(phase, Phase::Idle | Phase::GameOver),
            Button::Pause => matches!(phase, Phase::Running | Phase::Paused),
            Button::Reset => true,
        }
    }

    fn to_line(self, phase: Phase) -> Line<'static> {
        if self.enabled(phase) {
            Line::from_iter([
                Span::raw("["),
                Span::raw(self.label(phase)),
                Span::raw(" ("),
                Span::styled(self.key(), consts::KEY_STYLE),
                Span::raw(")]"),
            ])
            .style(consts::BUTTON_STYLE)
        } else {
            Line::from(format!("[{} ({})]", self.label(phase), self.key()))
                .style(consts::DISABLED_BUTTON_STYLE)
        }
    }
}

/// A widget for the row of buttons below the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct ControlBar {
    phase: Phase,
}

impl ControlBar {
    const BUTTON_WIDTH: u16 = 16;
    const SPACING: u16 = 2;

    pub(super) fn new(phase: Phase) -> ControlBar {
        ControlBar { phase }
    }

    fn layout(area: Rect) -> EnumMap<Button, Rect> {
        let areas: [Rect; 3] = Layout::horizontal([Self::BUTTON_WIDTH; 3])
            .spacing(Self::SPACING)
            .flex(Flex::Center)
            .areas(area);
        EnumMap::from_array(areas)
    }

    /// Return the control for the enabled button, if any, at `pos` when the
    /// bar is drawn in `area`
    pub(super) fn control_at(self, area: Rect, pos: Position) -> Option<Control> {
        Self::layout(area)
            .into_iter()
            .find(|&(button, rect)| rect.contains(pos) && button.enabled(self.phase))
            .map(|(button, _)| button.control())
    }
}

impl Widget for ControlBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (button, rect) in Self::layout(area) {
            button.to_line(self.phase).centered().render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Cell;
    use rstest::rstest;

    #[rstest]
    #[case(Phase::Idle, true, false, true)]
    #[case(Phase::Running, false, true, true)]
    #[case(Phase::Paused, false, true, true)]
    #[case(Phase::GameOver, true, false, true)]
    fn enabled_buttons(
        #[case] phase: Phase,
        #[case] start: bool,
        #[case] pause: bool,
        #[case] reset: bool,
    ) {
        assert_eq!(Button::Start.enabled(phase), start);
        assert_eq!(Button::Pause.enabled(phase), pause);
        assert_eq!(Button::Reset.enabled(phase), reset);
    }

    #[test]
    fn pause_label_flips() {
        assert_eq!(Button::Pause.label(Phase::Running), "Pause");
        assert_eq!(Button::Pause.label(Phase::Paused), "Resume");
    }

    #[test]
    fn layout_is_centered() {
        let map = ControlBar::layout(Rect::new(0, 23, 80, 1));
        assert_eq!(map[Button::Start], Rect::new(14, 23, 16, 1));
        assert_eq!(map[Button::Pause], Rect::new(32, 23, 16, 1));
        assert_eq!(map[Button::Reset], Rect::new(50, 23, 16, 1));
    }

    #[test]
    fn click_enabled_button() {
        let bar = ControlBar::new(Phase::Idle);
        let area = Rect::new(0, 23, 80, 1);
        assert_eq!(
            bar.control_at(area, Position::new(20, 23)),
            Some(Control::Start)
        );
        assert_eq!(
            bar.control_at(area, Position::new(55, 23)),
            Some(Control::Reset)
        );
    }

    #[test]
    fn click_disabled_button() {
        let bar = ControlBar::new(Phase::Idle);
        let area = Rect::new(0, 23, 80, 1);
        assert_eq!(bar.control_at(area, Position::new(40, 23)), None);
    }

    #[test]
    fn click_between_buttons() {
        let bar = ControlBar::new(Phase::Running);
        let area = Rect::new(0, 23, 80, 1);
        assert_eq!(bar.control_at(area, Position::new(31, 23)), None);
        assert_eq!(bar.control_at(area, Position::new(5, 23)), None);
    }

    #[test]
    fn render_running() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buffer = Buffer::empty(area);
        ControlBar::new(Phase::Running).render(area, &mut buffer);
        let text = buffer
            .content()
            .iter()
            .map(Cell::symbol)
            .collect::<String>();
        assert!(text.contains("[Start (Enter)]"));
        assert!(text.contains("[Pause (Space)]"));
        assert!(text.contains("[Reset (r)]"));
    }
}
