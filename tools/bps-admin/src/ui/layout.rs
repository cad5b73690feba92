//! Main layout orchestration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ BPS PROVINSI GORONTALO  [1]Beranda [2]Daftar ...   Welcome, Admin│
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  SCREEN (home, list, form, gallery)                             │
//! │                                                                 │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  [2] Daftar  [3] Tambah  [L] Logout  [?] Help  [Q] Quit         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The login screen is drawn full-size without header and footer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, AppState, Route, NAV_ITEMS};

use super::{auth, gallery, home, publication_form, publications, widgets};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    if app.route.shows_header() {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Body
                Constraint::Length(3), // Footer (keybinds)
            ])
            .split(size);

        render_header(frame, main_chunks[0], app);
        render_body(frame, main_chunks[1], app);
        render_footer(frame, main_chunks[2], app);
    } else {
        render_body(frame, size, app);
    }

    match app.state {
        AppState::Help => widgets::render_help_overlay(frame),
        AppState::ConfirmDelete(id) => widgets::render_confirm_delete(frame, app, id),
        AppState::Browsing | AppState::Quit => {}
    }
    if let Some(notice) = &app.notice {
        widgets::render_notice(frame, notice);
    }
    if app.transition.is_transitioning {
        widgets::render_transition_overlay(frame, &app.transition);
    }
}

/// Render the header bar.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " BPS PROVINSI GORONTALO ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for item in NAV_ITEMS {
        let style = if item.is_active(app.route) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("[{}]", item.hotkey), Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(format!("{} ", item.label), style));
    }

    let user = if app.logging_out {
        " Logging out... ".to_string()
    } else {
        format!(" Welcome, {} ", app.user_name)
    };

    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = (area.width as usize)
        .saturating_sub(2)
        .saturating_sub(used + user.chars().count());
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(user, Style::default().fg(Color::Green)));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    match app.route {
        Route::Home => home::render(frame, area, app),
        Route::Login => auth::render(frame, area, app),
        Route::Publications => publications::render(frame, area, app),
        Route::AddPublication | Route::EditPublication(_) => {
            publication_form::render(frame, area, app)
        }
        Route::Gallery => gallery::render(frame, area, app),
    }
}

/// Keybinds relevant to the current screen.
fn footer_keybinds(route: Route) -> &'static [(&'static str, &'static str)] {
    match route {
        Route::Publications => &[
            ("[/]", " Cari  "),
            ("[↑↓]", " Pilih  "),
            ("[E]", " Edit  "),
            ("[D]", " Hapus  "),
            ("[A]", " Tambah  "),
            ("[V]", " Tabel/Grid  "),
            ("[R]", " Muat ulang  "),
            ("[?]", " Help  "),
        ],
        Route::AddPublication | Route::EditPublication(_) => &[
            ("[Tab]", " Field berikut  "),
            ("[Enter]", " Simpan  "),
            ("[Esc]", " Kembali  "),
        ],
        Route::Gallery => &[
            ("[↑↓]", " Pilih  "),
            ("[Enter]", " Lihat  "),
            ("[Esc]", " Kembali  "),
            ("[Q]", " Quit  "),
        ],
        Route::Home | Route::Login => &[
            ("[1-4]", " Navigasi  "),
            ("[L]", " Logout  "),
            ("[?]", " Help  "),
            ("[Q]", " Quit  "),
        ],
    }
}

/// Render the footer with keyboard shortcuts.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let keybinds: Vec<Span> = footer_keybinds(app.route)
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, Style::default().fg(Color::Yellow)),
                Span::raw(*label),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}
