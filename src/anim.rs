//! Hero reveal animation state machine.
//!
//! The landing illustration is revealed one point at a time. Rather than an
//! ambient timer owned by the page, the sequence is an explicit state machine
//! advanced from the frame loop: the app calls [`RevealSequence::advance`]
//! with the current instant and the machine applies however many 40 ms steps
//! have elapsed. Start, stop and reset are explicit, so restart semantics are
//! unambiguous and nothing outlives the app.

use std::time::{Duration, Instant};

/// Cadence of the point-by-point reveal.
pub const POINT_INTERVAL: Duration = Duration::from_millis(40);

/// Delay after the illustration completes before the title appears.
pub const TITLE_DELAY: Duration = Duration::from_millis(300);

/// Delay after completion before the description and buttons appear.
pub const DESCRIPTION_DELAY: Duration = Duration::from_millis(1500);

/// Lifecycle of the reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Constructed or reset, not yet started.
    #[default]
    Idle,
    /// Advancing one point per interval.
    Running,
    /// Every point shown; the intro text is staging in.
    Complete,
}

/// Finite point-reveal sequence over `total` points.
#[derive(Clone, Debug)]
pub struct RevealSequence {
    total: usize,
    phase: usize,
    state: RevealState,
    last_step: Option<Instant>,
    completed_at: Option<Instant>,
}

impl RevealSequence {
    /// A sequence over `total` points, idle at phase 0.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            phase: 0,
            state: RevealState::Idle,
            last_step: None,
            completed_at: None,
        }
    }

    /// Begin (or resume) stepping. A sequence with fewer than two points is
    /// complete immediately.
    pub fn start(&mut self, now: Instant) {
        if self.state == RevealState::Complete {
            return;
        }
        if self.total <= 1 {
            self.complete(now);
            return;
        }
        self.state = RevealState::Running;
        self.last_step = Some(now);
    }

    /// Pause stepping without losing the current phase.
    pub fn stop(&mut self) {
        if self.state == RevealState::Running {
            self.state = RevealState::Idle;
            self.last_step = None;
        }
    }

    /// Return to phase 0, idle. Restart with [`start`](Self::start).
    pub fn reset(&mut self) {
        self.phase = 0;
        self.state = RevealState::Idle;
        self.last_step = None;
        self.completed_at = None;
    }

    /// Jump straight to the finished state (the "skip intro" path). The
    /// staging delays are anchored at `now`, so the text still fades in.
    pub fn skip_to_end(&mut self, now: Instant) {
        self.complete(now);
    }

    /// Apply every interval that elapsed since the last step. Safe to call
    /// every frame at any frame rate; a slow frame applies multiple steps.
    pub fn advance(&mut self, now: Instant) {
        if self.state != RevealState::Running {
            return;
        }
        let Some(mut last) = self.last_step else {
            return;
        };

        while now.duration_since(last) >= POINT_INTERVAL {
            last += POINT_INTERVAL;
            if self.phase + 1 >= self.total.saturating_sub(1) {
                self.phase = self.total - 1;
                self.complete(last);
                return;
            }
            self.phase += 1;
        }
        self.last_step = Some(last);
    }

    fn complete(&mut self, at: Instant) {
        self.phase = self.total.saturating_sub(1);
        self.state = RevealState::Complete;
        self.last_step = None;
        self.completed_at = Some(at);
    }

    /// Index of the most recently revealed point.
    pub fn phase(&self) -> usize {
        self.phase
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RevealState::Running
    }

    pub fn is_complete(&self) -> bool {
        self.state == RevealState::Complete
    }

    /// Whether point `index` has been revealed yet.
    pub fn is_visible(&self, index: usize) -> bool {
        index <= self.phase
    }

    /// Whether point `index` is the leading (highlighted) point. No point is
    /// highlighted once the sequence completes.
    pub fn is_active(&self, index: usize) -> bool {
        self.state == RevealState::Running && index == self.phase
    }

    /// Whether the intro title should be visible at `now`.
    pub fn title_visible(&self, now: Instant) -> bool {
        self.staged(now, TITLE_DELAY)
    }

    /// Whether the description and buttons should be visible at `now`.
    pub fn description_visible(&self, now: Instant) -> bool {
        self.staged(now, DESCRIPTION_DELAY)
    }

    fn staged(&self, now: Instant, delay: Duration) -> bool {
        match self.completed_at {
            Some(done) => now.duration_since(done) >= delay,
            None => false,
        }
    }
}
