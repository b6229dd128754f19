// src/ui.rs

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PANEL_WIDTH: u16 = 48;
const PANEL_HEIGHT: u16 = 22;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    if app.open {
        draw_panel(f, app, size);
    } else {
        draw_badge(f, size);
    }
}

/// Closed state: a small badge anchored bottom-right, the toggle button
/// of the widget.
fn draw_badge(f: &mut Frame, size: Rect) {
    let label = " 🤖 AI Assistant — o to open · q to quit ";
    let width = (label.width() as u16).min(size.width);

    let area = Rect {
        x: size.width.saturating_sub(width + 1),
        y: size.height.saturating_sub(2),
        width,
        height: 1,
    };

    let badge = Paragraph::new(Span::styled(
        label,
        Style::default().fg(Color::White).bg(Color::Blue),
    ));
    f.render_widget(badge, area);
}

/// Open state: the floating chat panel, anchored bottom-right over
/// whatever the host screen shows.
fn draw_panel(f: &mut Frame, app: &mut App, size: Rect) {
    let width = PANEL_WIDTH.min(size.width.saturating_sub(2)).max(20);
    let height = PANEL_HEIGHT.min(size.height.saturating_sub(1)).max(8);

    let panel = Rect {
        x: size.width.saturating_sub(width + 1),
        y: size.height.saturating_sub(height + 1),
        width,
        height,
    };

    f.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" AI Assistant ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .style(Style::default().fg(Color::Blue));
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    // Composer grows with the draft, up to four visible lines.
    // split('\n') keeps the trailing empty line a fresh Alt+Enter opens.
    let draft_height = (app.draft.split('\n').count().min(4) as u16) + 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),            // language selector
                Constraint::Min(1),               // messages
                Constraint::Length(1),            // thinking indicator
                Constraint::Length(draft_height), // composer
                Constraint::Length(1),            // key hints
            ]
            .as_ref(),
        )
        .split(inner);

    draw_header(f, app, chunks[0]);
    draw_messages(f, app, chunks[1]);

    app.status_indicator.render(f, chunks[2]);

    draw_composer(f, app, chunks[3]);
    draw_hints(f, app, chunks[4]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let selector = Line::from(vec![
        Span::styled("Tab ", Style::default().fg(Color::DarkGray)),
        Span::styled("‹ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.language.label(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ›", Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Right);

    f.render_widget(Paragraph::new(selector), area);
}

fn draw_messages(f: &mut Frame, app: &mut App, area: Rect) {
    let mut lines = Vec::new();
    for message in app.messages.iter() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message.render(area.width));
    }

    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    if app.scroll > max_scroll {
        app.scroll = max_scroll;
    }

    let msgs_para = Paragraph::new(lines).scroll((app.scroll, 0));
    f.render_widget(msgs_para, area);
}

fn draw_composer(f: &mut Frame, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        )),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let text_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height.saturating_sub(1),
    };

    if app.draft.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                "Ask me anything...",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            )),
            text_area,
        );
    } else {
        let visible_width = area.width.saturating_sub(1);
        let draft_lines: Vec<Line> = app
            .draft
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::White))))
            .collect();

        let line_count = draft_lines.len() as u16;
        let vertical_scroll = line_count.saturating_sub(text_area.height);

        let last_line_width = app.draft.split('\n').last().unwrap_or("").width() as u16;
        let horizontal_scroll = last_line_width.saturating_sub(visible_width);

        f.render_widget(
            Paragraph::new(draft_lines).scroll((vertical_scroll, horizontal_scroll)),
            text_area,
        );

        let cursor_x = text_area.x + last_line_width.min(visible_width);
        let cursor_y = text_area.y + (line_count - 1).min(text_area.height.saturating_sub(1));
        f.set_cursor_position((cursor_x, cursor_y));
    }
}

fn draw_hints(f: &mut Frame, app: &App, area: Rect) {
    // The send affordance goes dim while a request is in flight
    let hints = if app.is_sending() {
        Line::from(Span::styled(
            "waiting for reply...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        ))
    } else {
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Gray)),
            Span::styled(" send · ", Style::default().fg(Color::DarkGray)),
            Span::styled("Alt+Enter", Style::default().fg(Color::Gray)),
            Span::styled(" newline · ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Gray)),
            Span::styled(" close", Style::default().fg(Color::DarkGray)),
        ])
    };

    f.render_widget(Paragraph::new(hints), area);
}
