use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One entry in the conversation log. Append-only, no identity beyond
/// position, gone when the app exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    fn base_style(&self) -> Style {
        match self.sender {
            Sender::User => Style::default().fg(Color::Rgb(255, 223, 128)),
            Sender::Bot => Style::default().fg(Color::Rgb(144, 238, 144)),
        }
    }

    fn alignment(&self) -> Alignment {
        match self.sender {
            Sender::User => Alignment::Right,
            Sender::Bot => Alignment::Left,
        }
    }

    /// Renders the message as wrapped, sender-aligned lines. The bubble
    /// takes at most 80% of the panel width, mirroring user-right /
    /// bot-left alignment.
    pub fn render(&self, panel_width: u16) -> Vec<Line<'static>> {
        let bubble_width = ((panel_width as usize) * 4 / 5).max(8);
        let style = self.base_style();
        let alignment = self.alignment();

        let mut lines = Vec::new();
        let marker = match self.sender {
            Sender::User => "▐ ",
            Sender::Bot => "▌ ",
        };

        for raw_line in self.text.lines() {
            if raw_line.is_empty() {
                lines.push(Line::from(Span::styled(marker.to_string(), style)).alignment(alignment));
                continue;
            }
            for wrapped in wrap(raw_line, bubble_width) {
                let line = Line::from(vec![
                    Span::styled(
                        marker.to_string(),
                        style.add_modifier(Modifier::DIM),
                    ),
                    Span::styled(wrapped.to_string(), style),
                ])
                .alignment(alignment);
                lines.push(line);
            }
        }

        lines
    }
}
