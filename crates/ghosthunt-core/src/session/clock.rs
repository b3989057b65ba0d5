use std::time::{Duration, Instant};

/// Elapsed time of a session: running while active, frozen once ended.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionClock {
    started_at: Option<Instant>,
    frozen: Option<Duration>,
}

impl SessionClock {
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.frozen = None;
    }

    pub fn freeze(&mut self, now: Instant) -> Duration {
        let elapsed = self.elapsed_at(now);
        self.frozen = Some(elapsed);
        elapsed
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        match (self.frozen, self.started_at) {
            (Some(frozen), _) => frozen,
            (None, Some(start)) => now.saturating_duration_since(start),
            (None, None) => Duration::ZERO,
        }
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }
}
