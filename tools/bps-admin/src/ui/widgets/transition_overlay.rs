//! Page transition progress bar.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Gauge},
    Frame,
};

use bps_01_page_transition::{Direction, Phase, TransitionState};

fn arrow(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "↑",
        Direction::Down => "↓",
        Direction::Left => "←",
        Direction::Right => "→",
    }
}

/// Thin gauge at the bottom of the screen while a transition runs.
pub fn render_transition_overlay(frame: &mut Frame, state: &TransitionState) {
    let screen = frame.area();
    let height = 3.min(screen.height);
    let area = Rect {
        x: screen.x,
        y: screen.y + screen.height - height,
        width: screen.width,
        height,
    };
    frame.render_widget(Clear, area);

    let color = match state.phase {
        Phase::Exiting => Color::Magenta,
        Phase::Entering | Phase::Idle => Color::Cyan,
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} {} ", arrow(state.direction), state.phase))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(color))
        .percent(u16::from(state.progress.min(100)));
    frame.render_widget(gauge, area);
}
