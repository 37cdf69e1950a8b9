//! Timer seam between round logic and whatever runtime provides timeouts.
//!
//! Every scheduled callback carries the round generation it was created for.
//! The controller drops callbacks whose generation no longer matches, so a
//! timeout that slips past `cancel_all` can never touch a newer round.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// What a scheduled callback should do when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    /// Countdown tick.
    Tick,
    /// Gap (or warm-up) elapsed: show the next target.
    Activate,
    /// Visible window elapsed: hide the current target.
    Hide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timer {
    pub generation: u64,
    pub kind: TimerKind,
}

/// Runtime timeout facility. Implementations deliver fired timers back to
/// `RoundController::fire` on the single game thread.
pub trait TimerHost {
    /// Milliseconds on the host's monotonic timeline.
    fn now_ms(&self) -> f64;
    fn schedule(&mut self, delay_ms: u32, timer: Timer);
    /// Drop every pending timer. Must be safe to call with nothing pending.
    fn cancel_all(&mut self);
}

/// Deterministic in-memory host: timers fire in due-time order, ties in
/// scheduling order. Time only moves when the caller drains it.
#[derive(Debug, Default)]
pub struct VirtualTimers {
    now_ms: u64,
    seq: u64,
    queue: BinaryHeap<Reverse<(u64, u64, Timer)>>,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse((due, _, _))| *due)
    }

    /// Pop the earliest timer due at or before `until_ms`, moving the clock to its
    /// due time. Returns `None` (clock untouched) once nothing else is due.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Timer> {
        match self.queue.peek() {
            Some(Reverse((due, _, _))) if *due <= until_ms => {}
            _ => return None,
        }
        let Reverse((due, _, timer)) = self.queue.pop()?;
        self.now_ms = self.now_ms.max(due);
        Some(timer)
    }

    /// Move the clock forward without firing anything (never backwards).
    pub fn advance_to(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }
}

impl TimerHost for VirtualTimers {
    fn now_ms(&self) -> f64 {
        self.now_ms as f64
    }

    fn schedule(&mut self, delay_ms: u32, timer: Timer) {
        let due = self.now_ms + delay_ms as u64;
        self.seq += 1;
        self.queue.push(Reverse((due, self.seq, timer)));
    }

    fn cancel_all(&mut self) {
        self.queue.clear();
    }
}
