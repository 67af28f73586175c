use super::action::Action;
use std::time::Duration;
use tokio::sync::mpsc;

/// Spawn a task that collapses bursts of values into one action.
///
/// Every value sent to the returned channel restarts a `delay` timer; once the
/// timer runs out, the newest value is turned into an action and sent on `out`.
pub fn spawn_debouncer<T, F>(delay: Duration, out: mpsc::Sender<Action>, to_action: F) -> mpsc::Sender<T>
where
    T: Send + 'static,
    F: Fn(T) -> Action + Send + 'static,
{
    let (tx, mut rx) = mpsc::channel::<T>(64);
    tokio::spawn(async move {
        let mut pending: Option<T> = None;

        loop {
            if pending.is_some() {
                tokio::select! {
                    msg = rx.recv() => match msg {
                        Some(value) => pending = Some(value),
                        None => {
                            if let Some(value) = pending.take() {
                                let _ = out.send(to_action(value)).await;
                            }
                            break;
                        }
                    },
                    () = tokio::time::sleep(delay) => {
                        if let Some(value) = pending.take() {
                            if out.send(to_action(value)).await.is_err() {
                                break;
                            }
                        }
                    }
                }
            } else if let Some(value) = rx.recv().await {
                pending = Some(value);
            } else {
                break;
            }
        }
    });
    tx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::features::store::handle_command;
    use crate::app::{reducer, state::AppState};
    use crate::domain::store::MockPassBackend;
    use std::sync::Arc;

    const DELAY: Duration = Duration::from_millis(500);

    fn filter_debouncer(out: mpsc::Sender<Action>) -> mpsc::Sender<String> {
        spawn_debouncer(DELAY, out, |text: String| Action::SetFilter(Some(text)))
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_value() {
        let (out_tx, mut out_rx) = mpsc::channel(8);
        let input = filter_debouncer(out_tx);

        for text in ["g", "gi", "git"] {
            input.send(text.to_string()).await.unwrap();
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        assert_eq!(out_rx.recv().await, Some(Action::SetFilter(Some("git".into()))));
        tokio::time::sleep(DELAY * 4).await;
        assert!(out_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_each_emit() {
        let (out_tx, mut out_rx) = mpsc::channel(8);
        let input = filter_debouncer(out_tx);

        input.send("a".to_string()).await.unwrap();
        assert_eq!(out_rx.recv().await, Some(Action::SetFilter(Some("a".into()))));

        input.send("ab".to_string()).await.unwrap();
        assert_eq!(out_rx.recv().await, Some(Action::SetFilter(Some("ab".into()))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_emitted_before_quiet_period() {
        let (out_tx, mut out_rx) = mpsc::channel(8);
        let input = filter_debouncer(out_tx);

        input.send("a".to_string()).await.unwrap();
        tokio::time::sleep(DELAY / 2).await;
        assert!(out_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystroke_burst_hits_backend_once() {
        let mut mock = MockPassBackend::new();
        mock.expect_list_pass_entries()
            .times(1)
            .returning(|| Ok(vec!["github".to_string(), "gitlab".to_string()]));
        let backend: Arc<MockPassBackend> = Arc::new(mock);

        let (action_tx, mut action_rx) = mpsc::channel(8);
        let input = filter_debouncer(action_tx.clone());
        for text in ["g", "gi", "git", "gith"] {
            input.send(text.to_string()).await.unwrap();
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        let mut state = AppState::default();
        let set_filter = action_rx.recv().await.unwrap();
        let command = reducer::update(&mut state, set_filter).unwrap();
        handle_command(command, backend.clone(), action_tx.clone()).unwrap();

        let loaded = action_rx.recv().await.unwrap();
        reducer::update(&mut state, loaded);
        assert_eq!(state.filter.as_deref(), Some("gith"));
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].name, "github");
    }
}
