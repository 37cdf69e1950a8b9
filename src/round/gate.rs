use super::state::RoundState;

/// Sole scoring authority: at most one point per appearance.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreGate;

impl ScoreGate {
    /// Award a point when the round is running, `position` is the shown target and
    /// this appearance has not been scored yet. Returns whether a point was awarded.
    pub fn on_activate_input(&self, state: &mut RoundState, position: usize) -> bool {
        if !state.is_running() || state.scored {
            return false;
        }
        if state.active_position() != Some(position) {
            return false;
        }
        state.score += 1;
        state.scored = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::state::{Appearance, Phase};

    fn running_with_target(position: usize) -> RoundState {
        RoundState {
            phase: Phase::Running,
            appearance: Some(Appearance {
                position,
                visible_ms: 800,
                started_at_ms: 0.0,
            }),
            ..RoundState::default()
        }
    }

    #[test]
    fn test_one_point_per_appearance() {
        let mut state = running_with_target(2);
        let gate = ScoreGate;
        assert!(gate.on_activate_input(&mut state, 2));
        assert!(!gate.on_activate_input(&mut state, 2));
        assert!(!gate.on_activate_input(&mut state, 2));
        assert_eq!(state.score(), 1);
        assert!(state.scored());
    }

    #[test]
    fn test_wrong_position_or_no_target_is_ignored() {
        let gate = ScoreGate;
        let mut state = running_with_target(2);
        assert!(!gate.on_activate_input(&mut state, 1));
        assert!(!state.scored());

        state.appearance = None;
        assert!(!gate.on_activate_input(&mut state, 2));
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_ignored_outside_running_phase() {
        let gate = ScoreGate;
        for phase in [Phase::Idle, Phase::Ended] {
            let mut state = running_with_target(0);
            state.phase = phase;
            assert!(!gate.on_activate_input(&mut state, 0));
            assert_eq!(state.score(), 0);
        }
    }
}
