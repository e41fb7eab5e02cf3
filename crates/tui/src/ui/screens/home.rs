use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

use api_types::savings::{SavingMethod, TransactionView};
use chrono_tz::Tz;

use crate::{
    app::AppState,
    form::{FormField, FormState},
    ui::{components::card::Card, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Total
            Constraint::Length(7), // Form
            Constraint::Min(4),    // History
        ])
        .split(area);

    render_total(frame, layout[0], state.balance, theme);
    render_form(frame, layout[1], &state.form, theme);
    render_history(frame, layout[2], &state.transactions, state.timezone, theme);
}

pub fn format_amount(amount: f64) -> String {
    format!("₹{amount:.2}")
}

fn render_total(frame: &mut Frame<'_>, area: Rect, balance: f64, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled("Total Savings ", Style::default().fg(theme.dim)),
        Span::styled(
            format_amount(balance),
            Style::default()
                .fg(theme.positive)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    Card::new("Savings Tracker", theme).render_with(
        frame,
        area,
        Paragraph::new(line).alignment(Alignment::Center),
    );
}

fn render_form(frame: &mut Frame<'_>, area: Rect, form: &FormState, theme: &Theme) {
    let mut lines = vec![
        input_line("Amount", &form.amount, form.focus == FormField::Amount, theme),
        input_line(
            "Description",
            &form.description,
            form.focus == FormField::Description,
            theme,
        ),
        method_line(form.method, form.focus == FormField::Method, theme),
    ];

    let hint = match &form.hint {
        Some(hint) => Span::styled(hint.clone(), Style::default().fg(theme.error)),
        None => Span::styled(
            "Tab next field  ←/→ method  Enter add  Esc quit",
            Style::default().fg(theme.dim),
        ),
    };
    lines.push(Line::from(""));
    lines.push(Line::from(hint));

    Card::new("Add Saving", theme)
        .focused(true)
        .render_with(frame, area, Paragraph::new(lines));
}

fn input_line(label: &str, value: &str, focused: bool, theme: &Theme) -> Line<'static> {
    let cursor = if focused { "│" } else { "" };
    let style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    Line::from(vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(theme.dim)),
        Span::styled(format!("{value}{cursor}"), style),
    ])
}

fn method_line(selected: SavingMethod, focused: bool, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:<12}", "Method"),
        Style::default().fg(theme.dim),
    )];

    for method in SavingMethod::ALL {
        let style = if method == selected {
            let base = Style::default().add_modifier(Modifier::BOLD);
            if focused {
                base.fg(theme.accent)
            } else {
                base.fg(theme.text)
            }
        } else {
            Style::default().fg(theme.dim)
        };
        let label = if method == selected {
            format!("[{}]", method.label())
        } else {
            format!(" {} ", method.label())
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn render_history(
    frame: &mut Frame<'_>,
    area: Rect,
    transactions: &[TransactionView],
    timezone: Tz,
    theme: &Theme,
) {
    let card = Card::new("Recent Transactions", theme);

    if transactions.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No transactions yet",
            Style::default().fg(theme.dim),
        ))
        .alignment(Alignment::Center);
        card.render_with(frame, area, empty);
        return;
    }

    let header = Row::new(["Date", "Method", "Description", "Amount"]).style(
        Style::default()
            .fg(theme.dim)
            .add_modifier(Modifier::BOLD),
    );

    let rows = transactions.iter().map(|tx| {
        Row::new([
            Cell::from(
                tx.date
                    .with_timezone(&timezone)
                    .format("%d %b %Y")
                    .to_string(),
            ),
            Cell::from(tx.method.label()),
            Cell::from(tx.description.clone()),
            Cell::from(Span::styled(
                format_amount(tx.amount),
                Style::default().fg(theme.positive),
            )),
        ])
        .style(Style::default().fg(theme.text))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(15),
            Constraint::Min(10),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .column_spacing(2);

    card.render_with(frame, area, table);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_use_rupee_with_two_decimals() {
        assert_eq!(format_amount(0.0), "₹0.00");
        assert_eq!(format_amount(12.5), "₹12.50");
    }
}
