/// Round lifecycle. Only Idle -> Running -> Ended -> (Idle on restart).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Ended,
}

/// One show-then-hide cycle of the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub position: usize,
    pub visible_ms: u32,
    /// Host timeline (ms) at which the target popped up.
    pub started_at_ms: f64,
}

/// Mutable state of the current round. Owned by `RoundController`; the clock,
/// scheduler and score gate only ever see it through `&mut` borrows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoundState {
    pub(crate) phase: Phase,
    pub(crate) score: u32,
    pub(crate) remaining_ms: u32,
    /// Present exactly while a target is shown.
    pub(crate) appearance: Option<Appearance>,
    pub(crate) last_position: Option<usize>,
    /// Whether the current appearance has already been scored.
    pub(crate) scored: bool,
    /// Appearances shown this round.
    pub(crate) appearances: u32,
}

impl RoundState {
    /// Fresh state for a round about to start.
    pub(crate) fn fresh(total_duration_ms: u32) -> Self {
        Self {
            remaining_ms: total_duration_ms,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    pub fn active_position(&self) -> Option<usize> {
        self.appearance.map(|a| a.position)
    }

    pub fn appearance(&self) -> Option<&Appearance> {
        self.appearance.as_ref()
    }

    pub fn last_position(&self) -> Option<usize> {
        self.last_position
    }

    pub fn scored(&self) -> bool {
        self.scored
    }

    pub fn appearances(&self) -> u32 {
        self.appearances
    }
}
