//! BPS-Admin: BPS Provinsi Gorontalo publication admin
//!
//! A TUI client for the publication service of BPS Provinsi Gorontalo.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;
use tracing::{error, info};

use bps_admin::domain::{App, Key};
use bps_admin::services::{dispatch, Services, SharedApp};
use bps_admin::{ui, AdminConfig};
use bps_telemetry::{init_logging, TelemetryConfig};

/// BPS-Admin: BPS Provinsi Gorontalo publication admin
#[derive(Parser, Debug)]
#[command(name = "bps-admin")]
#[command(about = "TUI admin client for BPS Provinsi Gorontalo publications")]
struct Args {
    /// JSON config file; missing keys fall back to defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the publication API (overrides config and BPS_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Page transition duration in milliseconds
    #[arg(long)]
    transition_ms: Option<u64>,

    /// Search suggestion debounce in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// File holding the session token
    #[arg(long)]
    token_file: Option<PathBuf>,

    /// Initial location, e.g. /publications or /login?tab=register
    #[arg(short, long, default_value = "/")]
    start: String,

    /// Log file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run in demo mode with an in-memory backend (no API connection required)
    #[arg(long)]
    demo: bool,
}

fn load_config(args: &Args) -> anyhow::Result<AdminConfig> {
    let mut config = match &args.config {
        Some(path) => AdminConfig::from_file(path)?,
        None => AdminConfig::default(),
    }
    .apply_env()?;

    if let Some(url) = &args.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(ms) = args.transition_ms {
        config.transition.duration_ms = ms;
    }
    if let Some(ms) = args.debounce_ms {
        config.search.debounce_ms = ms;
    }
    if let Some(path) = &args.token_file {
        config.storage.token_file = path.clone();
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args).context("invalid configuration")?;

    let telemetry = TelemetryConfig::from_env();
    let log_file = args
        .log_file
        .clone()
        .or_else(|| telemetry.log_file.clone())
        .unwrap_or_else(|| std::env::temp_dir().join("bps-admin.log"));
    init_logging(&telemetry.with_log_file(log_file))?;

    let services = Services::build(&config, args.demo)?;
    info!(demo = args.demo, start = %args.start, "[bps-admin] Starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let app: SharedApp = Arc::new(Mutex::new(App::new(config.suggester())));
    services.bootstrap(&app, &args.start).await;
    let watchers = services.spawn_watchers(&app);

    // Main loop
    let result = run_app(&mut terminal, &services, app).await;

    for watcher in watchers {
        watcher.abort();
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "[bps-admin] UI loop failed");
    }
    info!("[bps-admin] Stopped");
    result.map_err(Into::into)
}

/// Translate a crossterm key into the app's key set.
fn map_key(key: KeyEvent) -> Option<Key> {
    match key.code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    services: &Services,
    app: SharedApp,
) -> io::Result<()> {
    loop {
        // Draw UI
        {
            let app_guard = app.lock().await;
            terminal.draw(|frame| {
                ui::render(frame, &app_guard);
            })?;
        }

        // Poll with a short timeout so transition progress keeps redrawing
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c')
                    {
                        app.lock().await.quit();
                    } else if services.input_lock.is_locked() {
                        // Dropped while a page transition runs
                    } else if let Some(key) = map_key(key) {
                        let command = app.lock().await.handle_key(key);
                        if let Some(command) = command {
                            dispatch(services, &app, command);
                        }
                    }
                }
            }
        }

        // Check if we should quit
        if app.lock().await.should_quit() {
            return Ok(());
        }
    }
}
