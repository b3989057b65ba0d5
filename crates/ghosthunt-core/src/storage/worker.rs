use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::leaderboard::Leaderboard;
use crate::score::{RecordId, ScoreRecord};
use crate::storage::ScoreStore;

enum Command {
    Save(ScoreRecord),
    Refresh,
    Shutdown,
}

/// Completion events published by the persistence worker.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    Saved(ScoreRecord),
    SaveFailed { record_id: RecordId, message: String },
    Refreshed(Leaderboard),
}

/// Runs store operations on a background thread.
///
/// Requests return immediately; results arrive as `StoreEvent`s. Every save is
/// followed by a refresh of the leaderboard. Failed writes are reported once
/// and never retried.
pub struct PersistenceWorker {
    commands: Sender<Command>,
    events: Receiver<StoreEvent>,
    handle: Option<JoinHandle<()>>,
}

impl PersistenceWorker {
    pub fn spawn(store: Arc<dyn ScoreStore>) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<Command>();
        let (event_tx, event_rx) = mpsc::channel::<StoreEvent>();

        let handle = thread::spawn(move || run(store.as_ref(), command_rx, event_tx));

        Self {
            commands: command_tx,
            events: event_rx,
            handle: Some(handle),
        }
    }

    pub fn submit_save(&self, record: ScoreRecord) -> Result<()> {
        self.send(Command::Save(record))
    }

    pub fn request_refresh(&self) -> Result<()> {
        self.send(Command::Refresh)
    }

    /// Ask the worker to exit once the commands already queued are done.
    ///
    /// Pair with `recv` to drain every remaining event.
    pub fn request_shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown)
    }

    /// Next event, blocking. `None` once the worker has exited and every event
    /// was received.
    pub fn recv(&self) -> Option<StoreEvent> {
        self.events.recv().ok()
    }

    /// Next event, waiting at most `timeout`.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<StoreEvent> {
        match self.events.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    pub fn try_recv(&self) -> Option<StoreEvent> {
        self.events.try_recv().ok()
    }

    /// Stop the worker after pending commands and wait for it.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn send(&self, command: Command) -> Result<()> {
        self.commands.send(command).map_err(|_| Error::WorkerStopped)
    }

    fn stop(&mut self) {
        let _ = self.commands.send(Command::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for PersistenceWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run(store: &dyn ScoreStore, commands: Receiver<Command>, events: Sender<StoreEvent>) {
    for command in commands {
        let keep_running = match command {
            Command::Save(record) => {
                let event = match store.save(&record) {
                    Ok(()) => StoreEvent::Saved(record),
                    Err(e) => {
                        warn!("Failed to save score {}: {}", record.id, e);
                        StoreEvent::SaveFailed {
                            record_id: record.id,
                            message: e.to_string(),
                        }
                    }
                };
                events.send(event).is_ok() && refresh(store, &events)
            }
            Command::Refresh => refresh(store, &events),
            Command::Shutdown => false,
        };
        if !keep_running {
            break;
        }
    }
    info!("Persistence worker stopped");
}

fn refresh(store: &dyn ScoreStore, events: &Sender<StoreEvent>) -> bool {
    let board = Leaderboard::new(store.fetch_all());
    debug!("Leaderboard refreshed ({} records)", board.len());
    events.send(StoreEvent::Refreshed(board)).is_ok()
}
