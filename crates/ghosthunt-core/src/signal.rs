use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// One-way stop flag shared between a session and its helper threads.
///
/// The elapsed ticker sleeps on it between ticks and the console prompter
/// polls it while waiting for a line, so Ctrl+C or the end of a session
/// reaches both without waiting out a full interval.
pub struct ShutdownSignal {
    fired: AtomicBool,
    wake: Condvar,
    lock: Mutex<()>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
            wake: Condvar::new(),
            lock: Mutex::new(()),
        }
    }

    /// Fire the signal. Sleepers in `wait` return at once; firing twice is a no-op.
    pub fn trigger(&self) {
        if self.fired.swap(true, Ordering::SeqCst) {
            return;
        }
        // Taking the lock orders this notify after any sleeper's flag check
        let _guard = self.lock.lock();
        self.wake.notify_all();
    }

    pub fn is_shutdown(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Sleep up to `duration`. Returns `true` if the signal fired.
    pub fn wait(&self, duration: Duration) -> bool {
        let Ok(guard) = self.lock.lock() else {
            return true;
        };
        self.wake
            .wait_timeout_while(guard, duration, |_| !self.is_shutdown())
            .map_or(true, |_| self.is_shutdown())
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
