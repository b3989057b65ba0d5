use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::signal::ShutdownSignal;

/// Periodic elapsed-time callback for display purposes.
///
/// The ticker only reads the wall clock. It never touches session state, so the
/// tracker stays single-threaded.
pub struct ElapsedTicker {
    signal: Arc<ShutdownSignal>,
    handle: Option<JoinHandle<()>>,
}

impl ElapsedTicker {
    pub fn spawn<F>(started_at: Instant, interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(Duration) + Send + 'static,
    {
        let signal = Arc::new(ShutdownSignal::new());
        let thread_signal = Arc::clone(&signal);

        let handle = thread::spawn(move || {
            while !thread_signal.wait(interval) {
                on_tick(Instant::now().saturating_duration_since(started_at));
            }
            debug!("Elapsed ticker stopped");
        });

        Self {
            signal,
            handle: Some(handle),
        }
    }

    /// Stop ticking and wait for the thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.signal.trigger();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ElapsedTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
