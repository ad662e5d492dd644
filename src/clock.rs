use std::time::{Duration, Instant};

/// Elapsed play time, driven by the host loop instead of a timer thread.
///
/// The host calls [`GameClock::start`] on a new game, [`GameClock::stop`] on
/// game over or quit, and [`GameClock::poll`] on every tick to learn whether
/// the displayed second changed.
#[derive(Debug, Clone, Default)]
pub struct GameClock {
    started: Option<Instant>,
    frozen: Duration,
    last_reported: Option<u64>,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Restart from zero at `now`.
    pub fn start_at(&mut self, now: Instant) {
        self.started = Some(now);
        self.frozen = Duration::ZERO;
        self.last_reported = None;
    }

    pub fn stop(&mut self) {
        self.stop_at(Instant::now());
    }

    /// Freeze the elapsed time at `now`. Stopping twice keeps the first value.
    pub fn stop_at(&mut self, now: Instant) {
        if let Some(start) = self.started.take() {
            self.frozen = now.saturating_duration_since(start);
        }
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        match self.started {
            Some(start) => now.saturating_duration_since(start),
            None => self.frozen,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    pub fn poll(&mut self) -> Option<u64> {
        self.poll_at(Instant::now())
    }

    /// New whole-second value if it differs from the last one reported.
    pub fn poll_at(&mut self, now: Instant) -> Option<u64> {
        let secs = self.elapsed_at(now).as_secs();
        if self.last_reported == Some(secs) {
            return None;
        }
        self.last_reported = Some(secs);
        Some(secs)
    }
}

/// `mm:ss`, or `h:mm:ss` past the hour.
pub fn format_elapsed(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}
