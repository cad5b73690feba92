//! Publication list: search box, suggestion dropdown, table or grid.
//!
//! ```text
//! ┌ Cari ───────────────────────────────┐
//! │ sensus█                             │
//! ├─────────────────────────────────────┤
//! │ ▶ Hasil Sensus Pertanian 2023 ...   │  ← dropdown while open
//! │   Sensus Penduduk 2020: Hasil ...   │
//! └─────────────────────────────────────┘
//! ┌ Daftar Publikasi ───────────────────┐
//! │ No  Judul           Tanggal   Status │
//! └─────────────────────────────────────┘
//!   2 Hasil Pencarian · 7 Total · 2025
//! ```

use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame,
};

use bps_02_search::highlight;
use bps_04_publication_api::messages;
use shared_types::Publication;

use crate::domain::{format_date, truncate, App, ViewMode};

const GRID_COLUMNS: usize = 3;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let banner = app.delete_error.as_ref().or(app.list_error.as_ref());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                    // Search
            Constraint::Length(if banner.is_some() { 3 } else { 0 }), // Error banner
            Constraint::Min(5),                                       // List
            Constraint::Length(3),                                    // Statistics
        ])
        .split(area);

    render_search_box(frame, chunks[0], app);
    if let Some(message) = banner {
        let banner = Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Red))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            );
        frame.render_widget(banner, chunks[1]);
    }
    render_list(frame, chunks[2], app);
    render_statistics(frame, chunks[3], app);
    render_suggestions(frame, chunks[0], chunks[2], app);
}

fn render_search_box(frame: &mut Frame, area: Rect, app: &App) {
    let term = app.search_term();
    let (text, style) = if term.is_empty() && !app.search_focused {
        (
            "Cari publikasi berdasarkan judul atau deskripsi... [/]".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else if app.search_focused {
        (format!("{term}█"), Style::default())
    } else {
        (term, Style::default())
    };

    let border = if app.search_focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let search = Paragraph::new(text).style(style).block(
        Block::default()
            .title(" Cari ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(search, area);
}

/// Title or description with the search term marked.
fn highlighted<'a>(text: &'a str, term: &str) -> Line<'a> {
    let spans: Vec<Span> = highlight(text, term)
        .into_iter()
        .map(|segment| {
            if segment.matched {
                Span::styled(
                    segment.text,
                    Style::default().fg(Color::Black).bg(Color::Yellow),
                )
            } else {
                Span::raw(segment.text)
            }
        })
        .collect();
    Line::from(spans)
}

fn list_block(app: &App) -> Block<'static> {
    let mode = match app.view_mode {
        ViewMode::Table => "Tabel",
        ViewMode::Grid => "Grid",
    };
    Block::default()
        .title(format!(" Daftar Publikasi ({mode}) "))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    if app.loading && app.publications.is_empty() {
        let loading = Paragraph::new(messages::LOADING_LIST)
            .centered()
            .block(list_block(app));
        frame.render_widget(loading, area);
        return;
    }

    let term = app.search_term();
    let filtered = app.filtered();
    if filtered.is_empty() {
        let text = if term.is_empty() {
            "Belum ada publikasi. Tekan [A] untuk menambah.".to_string()
        } else {
            format!("Tidak ada publikasi yang cocok dengan \"{term}\"")
        };
        let empty = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .block(list_block(app));
        frame.render_widget(empty, area);
        return;
    }

    match app.view_mode {
        ViewMode::Table => render_table(frame, area, app, &filtered, &term),
        ViewMode::Grid => render_grid(frame, area, app, &filtered, &term),
    }
}

fn status_cell(app: &App, publication: &Publication) -> Cell<'static> {
    if app.is_deleting(publication.id) {
        Cell::from(Span::styled("Menghapus...", Style::default().fg(Color::Red)))
    } else {
        Cell::from(Span::styled("Aktif", Style::default().fg(Color::Green)))
    }
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    publications: &[&Publication],
    term: &str,
) {
    let header = Row::new(["No", "Judul", "Tanggal Rilis", "Deskripsi", "Status"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = publications
        .iter()
        .enumerate()
        .map(|(idx, publication)| {
            let style = if idx == app.selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else if app.is_deleting(publication.id) {
                Style::default().add_modifier(Modifier::DIM)
            } else {
                Style::default()
            };
            Row::new([
                Cell::from(format!("{}", idx + 1)),
                Cell::from(highlighted(&publication.title, term)),
                Cell::from(format_date(publication.release_date)),
                Cell::from(highlighted(publication.description_text(), term)),
                status_cell(app, publication),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Percentage(35),
            Constraint::Length(18),
            Constraint::Percentage(35),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .block(list_block(app));

    frame.render_widget(table, area);
}

fn render_grid(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    publications: &[&Publication],
    term: &str,
) {
    let block = list_block(app);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row_count = publications.len().div_ceil(GRID_COLUMNS);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(6); row_count])
        .split(inner);

    for (row_idx, chunk) in publications.chunks(GRID_COLUMNS).enumerate() {
        let Some(row_area) = rows.get(row_idx) else {
            break;
        };
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (col_idx, publication) in chunk.iter().enumerate() {
            let idx = row_idx * GRID_COLUMNS + col_idx;
            let border = if idx == app.selected {
                Color::Yellow
            } else if app.is_deleting(publication.id) {
                Color::Red
            } else {
                Color::DarkGray
            };
            let mut lines = vec![
                highlighted(&publication.title, term),
                Line::from(Span::styled(
                    format_date(publication.release_date),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::raw(truncate(publication.description_text(), 60)),
            ];
            if app.is_deleting(publication.id) {
                lines.push(Line::from(Span::styled(
                    "Menghapus...",
                    Style::default().fg(Color::Red),
                )));
            }
            let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
            frame.render_widget(card, columns[col_idx]);
        }
    }
}

fn render_statistics(frame: &mut Frame, area: Rect, app: &App) {
    let shown = app.filtered().len();
    let label = if app.search_term().is_empty() {
        "Publikasi Ditampilkan"
    } else {
        "Hasil Pencarian"
    };
    let active_year = app
        .publications
        .iter()
        .map(|p| p.release_date.year())
        .max()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "-".to_string());

    let stats = Line::from(vec![
        Span::styled(format!("{shown} "), Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Span::raw(format!("{label}   ")),
        Span::styled(
            format!("{} ", app.publications.len()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Total Semua Publikasi   "),
        Span::styled(
            format!("{active_year} "),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Tahun Aktif"),
    ]);
    let stats = Paragraph::new(stats).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(stats, area);
}

/// Dropdown drawn over the top of the list, just under the search box.
fn render_suggestions(frame: &mut Frame, search: Rect, list: Rect, app: &App) {
    let query = app.search_query();
    if !app.search_focused || !query.is_visible() {
        return;
    }

    let height = (query.candidates().len() as u16 + 2).min(list.height);
    let area = Rect {
        x: search.x + 1,
        y: search.y + search.height,
        width: search.width.saturating_sub(2),
        height,
    };

    let items: Vec<ListItem> = query
        .candidates()
        .iter()
        .enumerate()
        .map(|(idx, candidate)| {
            let active = query.active_index() == Some(idx);
            let marker = if active { "▶ " } else { "  " };
            let style = if active {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            let mut line = highlighted(candidate, query.term());
            line.spans.insert(0, Span::raw(marker));
            ListItem::new(line).style(style)
        })
        .collect();

    frame.render_widget(Clear, area);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(list, area);
}
