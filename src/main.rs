use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use passview::app::{config::Config, r#loop::run_loop, state::AppState};
use passview::infrastructure::PassAdapter;
use passview::logging;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Everything that can fail on bad config happens before the terminal
    // switches to raw mode.
    let config = Config::load();
    logging::init_tracing(config.log_file().as_deref())?;

    let store_dir = config.store_dir();
    tracing::info!(store = %store_dir.display(), program = config.program(), "starting");
    let adapter = Arc::new(PassAdapter::new(config.program(), store_dir.clone()));

    let mut app_state = AppState::new(&config.keys);
    app_state.store_dir = store_dir.display().to_string();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, adapter, config.debounce()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "exited with error");
        eprintln!("{err:?}");
    }

    Ok(())
}
