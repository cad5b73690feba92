//! Help overlay widget.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SECTIONS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Navigasi",
        &[
            ("1", "Beranda"),
            ("2", "Daftar Publikasi"),
            ("3", "Tambah Publikasi"),
            ("4", "Galeri Kegiatan"),
            ("Esc", "Kembali ke halaman sebelumnya"),
        ],
    ),
    (
        "Daftar Publikasi",
        &[
            ("/", "Cari judul atau deskripsi"),
            ("↑/↓", "Pilih publikasi atau saran"),
            ("A", "Tambah publikasi"),
            ("E", "Edit publikasi terpilih"),
            ("D", "Hapus publikasi terpilih"),
            ("V", "Ganti tampilan tabel/grid"),
            ("R", "Muat ulang daftar"),
            ("C", "Hapus pencarian"),
        ],
    ),
    (
        "Umum",
        &[("L", "Logout"), ("Q", "Keluar"), ("?", "Tampilkan bantuan ini")],
    ),
];

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(60, 80, frame.area());

    frame.render_widget(Clear, popup_area);

    let mut help_text = vec![
        Line::from(Span::styled(
            "BPS-ADMIN HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    for (title, keys) in SECTIONS {
        help_text.push(Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (key, description) in keys {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {key:<7}"), Style::default().fg(Color::Yellow)),
                Span::raw(*description),
            ]));
        }
        help_text.push(Line::raw(""));
    }
    help_text.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}

/// Create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
