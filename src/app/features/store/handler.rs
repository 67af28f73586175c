use crate::app::{action::Action, command::Command};
use crate::domain::bridge;
use crate::domain::models::ExecutableInfo;
use crate::domain::store::PassBackend;
use anyhow::Result;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Spawn the task behind `command`. Backend failures are logged and produce
/// no action, so the state stays exactly as it was.
pub fn handle_command(
    command: Command,
    backend: Arc<dyn PassBackend>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::ListEntries { seq, filter } => {
            tracing::debug!(seq, filter = ?filter, "listing entries");
            tokio::spawn(async move {
                run_query(tx, "list entries", move || async move {
                    let entries = bridge::list_entries(backend.as_ref(), filter.as_deref()).await?;
                    Ok(Action::SetEntries { seq, entries })
                })
                .await;
            });
        }
        Command::LoadEntry(name) => {
            tracing::debug!(entry = %name, "loading entry content");
            tokio::spawn(async move {
                run_query(tx, "get entry", move || async move {
                    let content = bridge::get_entry(backend.as_ref(), &name).await?;
                    Ok(Action::SetEntryContent { name, content })
                })
                .await;
            });
        }
        Command::EditEntry(name, content) => {
            tokio::spawn(async move {
                run_query(tx, "edit entry", move || async move {
                    bridge::edit_entry(backend.as_ref(), &name, &content).await?;
                    tracing::info!(entry = %name, "entry edited");
                    Ok(Action::EntryEdited { name, content })
                })
                .await;
            });
        }
        Command::RemoveEntry(name) => {
            tokio::spawn(async move {
                run_query(tx, "remove entry", move || async move {
                    bridge::remove_entry(backend.as_ref(), &name).await?;
                    tracing::info!(entry = %name, "entry removed");
                    Ok(Action::EntryRemoved(name))
                })
                .await;
            });
        }
        Command::LoadExecutableInfo => {
            tokio::spawn(async move {
                let (path, version) =
                    tokio::join!(backend.executable_path(), backend.executable_version());
                let info = ExecutableInfo {
                    path: path.unwrap_or_else(|e| {
                        tracing::error!(error = %e, "could not locate backend executable");
                        String::new()
                    }),
                    version: version.unwrap_or_else(|e| {
                        tracing::error!(error = %e, "could not read backend version");
                        String::new()
                    }),
                };
                let _ = tx.send(Action::ExecutableInfoLoaded(info)).await;
            });
        }
        Command::QueueFilter(_) => {
            // Owned by the runtime's debouncer
        }
    }
    Ok(())
}

async fn run_query<F, Fut>(tx: mpsc::Sender<Action>, what: &'static str, query: F)
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<Action>> + Send,
{
    match query().await {
        Ok(action) => {
            let _ = tx.send(action).await;
        }
        Err(e) => {
            tracing::error!(error = %e, "{what} failed");
        }
    }
}
