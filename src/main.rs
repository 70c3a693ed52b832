mod app;
mod config;
mod domain;
mod forms;
mod input;
mod logging;
mod notifications;
mod ticker;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::Parser;
use domain::{Filter, Priority};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "focusdo")]
#[command(about = "A terminal todo list with per-task focus session timers", long_about = None)]
struct Cli {
    /// Settings file to start from. Defaults to <config dir>/focusdo/settings.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the default focus session length (minutes)
    #[arg(short, long)]
    focus_minutes: Option<u32>,

    /// Default priority for new tasks (low, medium, high)
    #[arg(short, long)]
    priority: Option<Priority>,

    /// Filter to start with (all, active, completed)
    #[arg(long, default_value = "all")]
    filter: Filter,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;
    let mut settings = config::startup_settings(cli.config.as_deref(), cli.focus_minutes)?;
    if let Some(priority) = cli.priority {
        settings.default_priority = priority;
    }

    let mut app = AppState::new(settings);
    app.set_filter(cli.filter);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Tear down any running session before exit
    if app.focus.take().is_some() {
        tracing::info!("focus session discarded on exit");
    }

    if let Err(err) = result {
        tracing::error!(error = %err, "focusdo exited with error");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        // Advance the focus countdown
        app.tick();
    }
}
