//! Login and register screen.
//!
//! ```text
//!        ┌ BPS Provinsi Gorontalo ─────────┐
//!        │  [ Masuk ]   Daftar             │
//!        │ ┌ Email ──────────────────────┐ │
//!        │ └─────────────────────────────┘ │
//!        │ ┌ Password ───────────────────┐ │
//!        │ └─────────────────────────────┘ │
//!        └─────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, AuthField, AuthForm, AuthMode};

use super::widgets::centered_rect;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.auth;
    let card = centered_rect(50, 90, area);
    let block = Block::default()
        .title(" BPS Provinsi Gorontalo ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let fields = form.fields();
    let message_lines = form.errors.len() as u16 + u16::from(form.success.is_some());
    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(fields.iter().map(|f| match f {
        AuthField::Terms => Constraint::Length(1),
        _ => Constraint::Length(3),
    }));
    constraints.push(Constraint::Length(message_lines + 1));
    constraints.push(Constraint::Min(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    render_tabs(frame, chunks[0], form.mode);
    for (idx, field) in fields.iter().enumerate() {
        render_field(frame, chunks[idx + 1], form, *field);
    }

    let mut messages: Vec<Line> = vec![Line::raw("")];
    messages.extend(
        form.errors
            .iter()
            .map(|e| Line::styled(format!("• {e}"), Style::default().fg(Color::Red))),
    );
    if let Some(success) = &form.success {
        messages.push(Line::styled(
            success.as_str(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Paragraph::new(messages), chunks[fields.len() + 1]);

    let hint = if form.busy {
        Line::styled("Memproses...", Style::default().fg(Color::Yellow))
    } else {
        let action = match form.mode {
            AuthMode::Login => "Masuk",
            AuthMode::Register => "Daftar",
        };
        Line::styled(
            format!("[Enter] {action}   [←→] Ganti tab   [Tab] Field   [Esc] Keluar"),
            Style::default().fg(Color::DarkGray),
        )
    };
    frame.render_widget(Paragraph::new(hint).centered(), chunks[fields.len() + 2]);
}

fn render_tabs(frame: &mut Frame, area: Rect, mode: AuthMode) {
    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(
                format!("[ {label} ]"),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!("  {label}  "), Style::default().fg(Color::Gray))
        }
    };
    let tabs = Line::from(vec![
        tab("Masuk", mode == AuthMode::Login),
        Span::raw("   "),
        tab("Daftar", mode == AuthMode::Register),
    ]);
    frame.render_widget(Paragraph::new(tabs).centered(), area);
}

fn render_field(frame: &mut Frame, area: Rect, form: &AuthForm, field: AuthField) {
    let focused = form.focus == field && !form.busy;

    if field == AuthField::Terms {
        let mark = if form.terms_accepted { "[x]" } else { "[ ]" };
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::styled(format!("{mark} "), style),
            Span::styled(field.label(), style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let value = match field {
        AuthField::Name => form.name.as_str().to_string(),
        AuthField::Email => form.email.as_str().to_string(),
        AuthField::Password => form.password.masked(),
        AuthField::ConfirmPassword => form.confirm_password.masked(),
        AuthField::Terms => String::new(),
    };
    let text = if focused { format!("{value}█") } else { value };
    let border = if focused { Color::Yellow } else { Color::DarkGray };

    let widget = Paragraph::new(text).block(
        Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(widget, area);
}
