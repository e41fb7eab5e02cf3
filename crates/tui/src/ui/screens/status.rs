use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::ui::{components::card::Card, theme::Theme};

pub fn render_loading(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Loading your savings...",
            Style::default().fg(theme.dim),
        )),
    ])
    .alignment(Alignment::Center);

    Card::new("Savings Tracker", theme).render_with(frame, area, body);
}

pub fn render_error(frame: &mut Frame<'_>, area: Rect, message: &str, theme: &Theme) {
    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Error: {message}"),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please check your server connection and configuration.",
            Style::default().fg(theme.dim),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    Card::new("Savings Tracker", theme)
        .focused(true)
        .render_with(frame, area, body);
}
