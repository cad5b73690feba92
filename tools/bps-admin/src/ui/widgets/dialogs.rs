//! Confirmation dialog and notice popup.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use bps_04_publication_api::messages;
use shared_types::PublicationId;

use crate::domain::{truncate, App, Notice, NoticeKind};

use super::centered_rect;

pub fn render_confirm_delete(frame: &mut Frame, app: &App, id: PublicationId) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);

    let title = app
        .publications
        .iter()
        .find(|p| p.id == id)
        .map(|p| truncate(&p.title, 60))
        .unwrap_or_else(|| format!("#{id}"));

    let lines = vec![
        Line::styled(
            messages::DELETE_CONFIRM,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(title, Style::default().fg(Color::Yellow)),
        Line::raw(""),
        Line::styled(
            "[Y/Enter] Hapus   [N/Esc] Batal",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let dialog = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .centered()
        .block(
            Block::default()
                .title(" Hapus Publikasi ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(dialog, area);
}

/// Blocking notice; any key dismisses it.
pub fn render_notice(frame: &mut Frame, notice: &Notice) {
    let screen = frame.area();
    let width = (notice.text.chars().count() as u16 + 6)
        .max(30)
        .min(screen.width);
    let area = Rect {
        x: screen.x + screen.width.saturating_sub(width) / 2,
        y: screen.y + screen.height.saturating_sub(5) / 2,
        width,
        height: 5.min(screen.height),
    };
    frame.render_widget(Clear, area);

    let (title, color) = match notice.kind {
        NoticeKind::Success => (" Berhasil ", Color::Green),
        NoticeKind::Error => (" Gagal ", Color::Red),
    };
    let widget = Paragraph::new(vec![
        Line::styled(notice.text.as_str(), Style::default().fg(color)),
        Line::styled("Tekan tombol apa saja", Style::default().fg(Color::DarkGray)),
    ])
    .wrap(Wrap { trim: true })
    .centered()
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(widget, area);
}
