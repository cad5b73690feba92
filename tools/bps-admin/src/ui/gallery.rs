//! Activity gallery: list on the left, the shown item on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::domain::{App, GalleryItem};

use super::widgets::centered_rect;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let gallery = &app.gallery;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let items: Vec<ListItem> = gallery
        .items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let marker = if idx == gallery.shown { "● " } else { "  " };
            let style = if idx == gallery.cursor {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::raw(item.title),
            ]))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Galeri Kegiatan ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, chunks[0]);

    let shown = gallery.shown_item();
    let detail = Paragraph::new(detail_lines(shown))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Sedang Ditampilkan ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(detail, chunks[1]);

    if gallery.popup_open {
        let popup = centered_rect(60, 50, area);
        frame.render_widget(Clear, popup);
        let mut lines = detail_lines(shown);
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "[Esc] Tutup",
            Style::default().fg(Color::DarkGray),
        ));
        let widget = Paragraph::new(lines).centered().block(
            Block::default()
                .title(format!(" {} ", shown.image))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(widget, popup);
    }
}

fn detail_lines(item: &GalleryItem) -> Vec<Line<'static>> {
    vec![
        Line::styled(
            item.title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Tanggal  ", Style::default().fg(Color::DarkGray)),
            Span::raw(item.date),
        ]),
        Line::from(vec![
            Span::styled("Dilihat  ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{} kali", item.views)),
        ]),
        Line::from(vec![
            Span::styled("Gambar   ", Style::default().fg(Color::DarkGray)),
            Span::raw(item.image),
        ]),
    ]
}
