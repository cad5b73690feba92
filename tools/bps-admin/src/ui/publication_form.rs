//! Add and edit form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use bps_03_validation::FormKind;

use crate::domain::{App, PublicationField, PublicationForm};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let title = match form.kind {
        FormKind::Add => " Tambah Publikasi ",
        FormKind::Edit => " Edit Publikasi ",
    };
    let outer = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if form.not_found {
        let missing = Paragraph::new(vec![
            Line::styled(
                "Publikasi tidak ditemukan",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(
                "[Enter] / [Esc] Kembali ke daftar",
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .centered()
        .block(outer);
        frame.render_widget(missing, area);
        return;
    }

    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let error_height = if form.errors.is_empty() {
        0
    } else {
        form.errors.len() as u16 + 2
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(error_height),
            Constraint::Length(3), // Title
            Constraint::Length(3), // Release date
            Constraint::Length(5), // Description
            Constraint::Length(4), // Cover
            Constraint::Length(1), // Status
            Constraint::Min(0),
        ])
        .split(inner);

    if !form.errors.is_empty() {
        let lines: Vec<Line> = form
            .errors
            .iter()
            .map(|e| Line::styled(format!("• {e}"), Style::default().fg(Color::Red)))
            .collect();
        let errors = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(errors, chunks[0]);
    }

    for (field, area) in PublicationField::ALL.into_iter().zip(chunks[1..5].iter()) {
        render_field(frame, *area, form, field);
    }

    let status = if form.submitting {
        Span::styled(
            "Menyimpan...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "[Enter] Simpan   [Tab] Field berikut   [Esc] Batal",
            Style::default().fg(Color::DarkGray),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(status)), chunks[5]);
}

fn render_field(frame: &mut Frame, area: Rect, form: &PublicationForm, field: PublicationField) {
    let focused = form.focus == field && !form.submitting;
    let value = form.field(field).as_str();

    let mut lines = Vec::new();
    let placeholder = match field {
        PublicationField::ReleaseDate => "YYYY-MM-DD",
        PublicationField::Cover => "Path ke file gambar (JPG, PNG, maks 5MB)",
        _ => "",
    };
    if value.is_empty() && !focused {
        lines.push(Line::styled(placeholder, Style::default().fg(Color::DarkGray)));
    } else if focused {
        lines.push(Line::raw(format!("{value}█")));
    } else {
        lines.push(Line::raw(value.to_string()));
    }
    if field == PublicationField::Cover {
        if let Some(url) = &form.existing_cover {
            if value.trim().is_empty() {
                lines.push(Line::styled(
                    format!("Sampul saat ini: {url}"),
                    Style::default().fg(Color::Green),
                ));
            }
        }
    }

    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(widget, area);
}
