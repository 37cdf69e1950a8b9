//! Outbound signals from the round to whatever draws it.

use crate::round::Phase;
use crate::summary::RoundSummary;

/// Presentation callbacks. All are invoked synchronously from the game thread.
pub trait Presenter {
    fn on_tick(&mut self, remaining_ms: u32);
    /// `Some(index)` when a target pops up, `None` when it hides.
    fn on_appearance_changed(&mut self, position: Option<usize>);
    fn on_score_changed(&mut self, score: u32);
    fn on_round_ended(&mut self, summary: &RoundSummary);

    fn on_phase_changed(&mut self, _phase: Phase) {}
    /// Visual feedback for a scored hit on `position`.
    fn on_target_hit(&mut self, _position: usize) {}
}

/// Discards every signal (headless runs).
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn on_tick(&mut self, _remaining_ms: u32) {}
    fn on_appearance_changed(&mut self, _position: Option<usize>) {}
    fn on_score_changed(&mut self, _score: u32) {}
    fn on_round_ended(&mut self, _summary: &RoundSummary) {}
}
