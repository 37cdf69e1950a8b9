//! Pop scheduling: which hole shows the target, for how long, and how long the
//! board stays empty before the next pop. Timer plumbing lives in the controller;
//! this type only draws durations and flips the active position.

use rand::Rng;

use super::state::{Appearance, RoundState};
use crate::config::RoundConfig;
use crate::random::{pick_position, uniform_int};

#[derive(Clone, Debug)]
pub struct PopScheduler {
    positions: usize,
    visible: (u32, u32),
    gap: (u32, u32),
    warmup: (u32, u32),
}

impl PopScheduler {
    pub fn new(config: &RoundConfig) -> Self {
        Self {
            positions: config.positions,
            visible: (config.min_visible_ms, config.max_visible_ms),
            gap: (config.min_gap_ms, config.max_gap_ms),
            warmup: (config.min_warmup_ms, config.max_warmup_ms),
        }
    }

    pub fn positions(&self) -> usize {
        self.positions
    }

    pub fn pick_position<R: Rng + ?Sized>(&self, rng: &mut R, last: Option<usize>) -> usize {
        pick_position(rng, last, self.positions)
    }

    /// Delay before the first pop of a round.
    pub fn warmup_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        uniform_int(rng, self.warmup.0, self.warmup.1)
    }

    /// Empty-board delay between two pops.
    pub fn next_gap<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        uniform_int(rng, self.gap.0, self.gap.1)
    }

    /// Show the target at a fresh position and clear the per-appearance scored
    /// flag. Returns the new appearance; its `visible_ms` is when to hide it.
    pub fn activate_once<R: Rng + ?Sized>(
        &self,
        state: &mut RoundState,
        rng: &mut R,
        now_ms: f64,
    ) -> Appearance {
        let position = self.pick_position(rng, state.last_position);
        let appearance = Appearance {
            position,
            visible_ms: uniform_int(rng, self.visible.0, self.visible.1),
            started_at_ms: now_ms,
        };
        state.appearance = Some(appearance);
        state.last_position = Some(position);
        state.scored = false;
        state.appearances += 1;
        appearance
    }

    /// Hide the current target. Returns the position that was shown, if any.
    pub fn deactivate(&self, state: &mut RoundState) -> Option<usize> {
        state.appearance.take().map(|a| a.position)
    }
}
