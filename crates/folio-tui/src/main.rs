//! folio-tui: Terminal chat with the portfolio assistant.
//! Uses Ratatui + Crossterm for rendering.

mod app;
mod ui;

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;

use folio_core::config::Config;

use app::App;

fn load_config() -> Result<Config> {
    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    if project_root.join("config.yaml").is_file() {
        return Config::load_from_dir(&project_root);
    }
    let mut config = Config::default();
    config.apply_overrides(|var| std::env::var(var).ok())?;
    Ok(config)
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.code, key.modifiers) {
                    // Quit
                    (KeyCode::Char('c'), KeyModifiers::CONTROL)
                    | (KeyCode::Char('q'), KeyModifiers::CONTROL)
                    | (KeyCode::Esc, _) => {
                        app.should_quit = true;
                    }
                    // Input handling
                    (KeyCode::Enter, _) => app.send_message(Instant::now()),
                    (KeyCode::Char(c), _) => app.input.push(c),
                    (KeyCode::Backspace, _) => {
                        app.input.pop();
                    }
                    // Scroll
                    (KeyCode::Up, _) | (KeyCode::PageUp, _) => app.scroll_up(),
                    (KeyCode::Down, _) | (KeyCode::PageDown, _) => app.scroll_down(),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    // Log to a file (not stdout, since we own the terminal)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("folio-tui.log")
        .context("Failed to open folio-tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .try_init();

    let config = load_config()?;
    let mut app = App::new(&config)?;

    info!("Starting TUI session {}", app.session.id);

    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    info!(
        "Session {} ended after {} messages",
        app.session.id,
        app.session.transcript.len()
    );
    result
}
