use crate::command::Command;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::borrow::Cow;

/// A pop-up describing a non-fatal error, such as a failure to save the high
/// score.  Play is suspended while it is shown.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
}

impl Warning {
    const MAX_LINES: u16 = 14;
    const TEXT_WIDTH: u16 = 48;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    /// Build a warning from an error and its chain of sources
    pub(crate) fn from_error(e: &dyn std::error::Error) -> Warning {
        let msgs = std::iter::successors(Some(e), |&e| e.source())
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        Warning::from_messages(&msgs)
    }

    fn from_messages(msgs: &[String]) -> Warning {
        let Some((first, causes)) = msgs.split_first() else {
            return Warning {
                lines: vec![String::from("Something went wrong.")],
            };
        };
        let width = usize::from(Warning::TEXT_WIDTH);
        let mut lines = wrap_lines(first, textwrap::Options::new(width).break_words(true));
        if !causes.is_empty() {
            lines.push(String::new());
            lines.push(String::from("Caused by:"));
        }
        if let [cause] = causes {
            let opts = textwrap::Options::new(width)
                .break_words(true)
                .initial_indent("    ")
                .subsequent_indent("    ");
            lines.extend(wrap_lines(cause, opts));
        } else {
            for (i, cause) in causes.iter().enumerate() {
                let prefix = format!("{i:>5}: ");
                let opts = textwrap::Options::new(width)
                    .break_words(true)
                    .initial_indent(&prefix)
                    .subsequent_indent("       ");
                lines.extend(wrap_lines(cause, opts));
            }
        }
        Warning { lines }
    }

    pub(crate) fn handle_command(&self, cmd: Command) -> Option<WarningOutcome> {
        match cmd {
            Command::Enter | Command::Space | Command::Esc => Some(WarningOutcome::Dismissed),
            Command::Quit | Command::Q => Some(WarningOutcome::Quit),
            _ => None,
        }
    }
}

fn wrap_lines(text: &str, opts: textwrap::Options<'_>) -> Vec<String> {
    textwrap::wrap(text, opts)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

impl Widget for &Warning {
    // `area` is the area of the entire display, not just that of the pop-up.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_height = u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .min(Warning::MAX_LINES);
        let block_area = center_rect(
            area,
            Size {
                width: Warning::WIDTH,
                height: text_height.saturating_add(4),
            },
        );
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let [text_area, ok_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
            .flex(Flex::Start)
            .spacing(1)
            .areas(block.inner(block_area));
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        Text::from_iter(self.lines.iter().map(String::as_str)).render(text_area, buf);
        Line::from("[OK]").centered().render(ok_area, buf);
    }
}
