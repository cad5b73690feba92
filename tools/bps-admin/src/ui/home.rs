//! Welcome screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::App;

const CARDS: [(&str, &str, Color); 3] = [
    (
        "Publikasi Terbaru",
        "Akses publikasi statistik terkini dari BPS Gorontalo",
        Color::Blue,
    ),
    (
        "Data Statistik",
        "Temukan data statistik lengkap untuk berbagai sektor",
        Color::Green,
    ),
    (
        "Galeri Kegiatan",
        "Dokumentasi kegiatan dan program BPS Gorontalo",
        Color::Magenta,
    ),
];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5)])
        .split(area);

    let intro = vec![
        Line::from(Span::styled(
            "Welcome to BPS Provinsi Gorontalo",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(
            "Selamat datang di sistem informasi Badan Pusat Statistik Provinsi Gorontalo. \
             Akses data statistik terpercaya untuk pembangunan daerah yang berkelanjutan.",
        ),
        Line::raw(""),
        Line::from(Span::styled(
            format!("Masuk sebagai {}", app.user_name),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let intro = Paragraph::new(intro)
        .wrap(Wrap { trim: true })
        .centered()
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(intro, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[1]);

    for ((title, text, color), area) in CARDS.into_iter().zip(columns.iter()) {
        let card = Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {title} "))
                    .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        frame.render_widget(card, *area);
    }
}
