use crate::app::{
    action::Action, command::Command, debounce::spawn_debouncer, input::map_event_to_action,
    reducer, state::AppState, ui,
};
use crate::domain::store::PassBackend;

use anyhow::Result;
use crossterm::event::{self, Event};
use notify::{RecursiveMode, Watcher};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);
const INPUT_POLL: Duration = Duration::from_millis(100);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    backend: Arc<dyn PassBackend>,
    debounce: Duration,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || {
        while !event_tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(false) => {}
                Ok(true) => match event::read() {
                    Ok(evt) => {
                        if event_tx.blocking_send(Ok(evt)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = event_tx.blocking_send(Err(e));
                        break;
                    }
                },
                Err(e) => {
                    let _ = event_tx.blocking_send(Err(e));
                    break;
                }
            }
        }
    });

    run_loop_with_events(terminal, app_state, backend, event_rx, debounce).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    backend: Arc<dyn PassBackend>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
    debounce: Duration,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Keystrokes in the filter bar only reach the store once typing pauses
    let filter_tx = spawn_debouncer(debounce, action_tx.clone(), |text: String| {
        Action::SetFilter(Some(text))
    });

    // Store watcher: `pass` run from another shell shows up here
    let change_tx = spawn_debouncer(debounce, action_tx.clone(), |()| {
        Action::ExternalChangeDetected
    });
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if res.is_ok() {
            let _ = change_tx.try_send(());
        }
    })?;

    let store_dir = backend.store_dir();
    if store_dir.is_dir() {
        watcher.watch(&store_dir, RecursiveMode::Recursive)?;
    } else {
        tracing::warn!(path = %store_dir.display(), "store directory missing, not watching");
    }
    if app_state.store_dir.is_empty() {
        app_state.store_dir = store_dir.display().to_string();
    }

    // Initial Load
    let seq = app_state.next_list_seq();
    handle_command(
        Command::ListEntries { seq, filter: None },
        backend.clone(),
        action_tx.clone(),
    )?;
    handle_command(
        Command::LoadExecutableInfo,
        backend.clone(),
        action_tx.clone(),
    )?;

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            res = event_rx.recv() => match res {
                Some(Ok(event)) => map_event_to_action(event, &app_state, terminal.size()?),
                Some(Err(e)) => return Err(e.into()),
                // Input source is gone, nothing can drive the UI any more
                None => break,
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        let Some(action) = action else {
            continue;
        };
        if action == Action::Quit {
            break;
        }

        let command = reducer::update(&mut app_state, action);
        if app_state.should_quit {
            break;
        }

        match command {
            Some(Command::QueueFilter(text)) => {
                if filter_tx.send(text).await.is_err() {
                    tracing::warn!("filter debouncer stopped");
                }
            }
            Some(cmd) => handle_command(cmd, backend.clone(), action_tx.clone())?,
            None => {}
        }
    }

    Ok(())
}

pub(crate) fn handle_command(
    command: Command,
    backend: Arc<dyn PassBackend>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    crate::app::features::store::handle_command(command, backend, tx)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
