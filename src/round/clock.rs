//! Countdown for a single round.

use super::state::RoundState;

/// Result of one countdown step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockTick {
    /// Time left; schedule the next tick.
    Running(u32),
    /// Reached zero on this tick. Reported once; the clock is stopped afterwards.
    Expired,
    /// Tick arrived while the clock was stopped; ignore it.
    Stopped,
}

/// Decrements `RoundState::remaining_ms` by a fixed interval per tick.
#[derive(Clone, Debug)]
pub struct RoundClock {
    tick_interval_ms: u32,
    running: bool,
}

impl RoundClock {
    pub fn new(tick_interval_ms: u32) -> Self {
        Self {
            tick_interval_ms,
            running: false,
        }
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self, state: &mut RoundState, duration_ms: u32) {
        state.remaining_ms = duration_ms;
        self.running = true;
    }

    pub fn tick(&mut self, state: &mut RoundState) -> ClockTick {
        if !self.running {
            return ClockTick::Stopped;
        }
        state.remaining_ms = state.remaining_ms.saturating_sub(self.tick_interval_ms);
        if state.remaining_ms == 0 {
            self.running = false;
            ClockTick::Expired
        } else {
            ClockTick::Running(state.remaining_ms)
        }
    }

    /// Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_and_expires_once() {
        let mut state = RoundState::default();
        let mut clock = RoundClock::new(1_000);
        clock.start(&mut state, 3_000);
        assert!(clock.is_running());
        assert_eq!(clock.tick(&mut state), ClockTick::Running(2_000));
        assert_eq!(clock.tick(&mut state), ClockTick::Running(1_000));
        assert_eq!(clock.tick(&mut state), ClockTick::Expired);
        assert_eq!(state.remaining_ms, 0);
        assert!(!clock.is_running());
        assert_eq!(clock.tick(&mut state), ClockTick::Stopped);
    }

    #[test]
    fn test_uneven_duration_clamps_to_zero() {
        let mut state = RoundState::default();
        let mut clock = RoundClock::new(1_000);
        clock.start(&mut state, 1_500);
        assert_eq!(clock.tick(&mut state), ClockTick::Running(500));
        assert_eq!(clock.tick(&mut state), ClockTick::Expired);
        assert_eq!(state.remaining_ms, 0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut state = RoundState::default();
        let mut clock = RoundClock::new(1_000);
        clock.stop();
        clock.start(&mut state, 5_000);
        clock.stop();
        clock.stop();
        assert_eq!(clock.tick(&mut state), ClockTick::Stopped);
        assert_eq!(state.remaining_ms, 5_000);
    }
}
