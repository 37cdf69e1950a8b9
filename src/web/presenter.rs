use web_sys::Element;

use crate::format::format_time;
use crate::presenter::Presenter;
use crate::round::Phase;
use crate::summary::RoundSummary;

/// Mirrors round signals into the page: timer / score / message text, the `up`
/// class on the hole showing the target and a short-lived `hit` class on a score.
pub struct DomPresenter {
    time: Element,
    score: Element,
    message: Element,
    start_button: Element,
    holes: Vec<Element>,
}

impl DomPresenter {
    pub fn new(
        time: Element,
        score: Element,
        message: Element,
        start_button: Element,
        holes: Vec<Element>,
    ) -> Self {
        Self {
            time,
            score,
            message,
            start_button,
            holes,
        }
    }
}

impl Presenter for DomPresenter {
    fn on_tick(&mut self, remaining_ms: u32) {
        self.time.set_text_content(Some(&format_time(remaining_ms)));
    }

    fn on_appearance_changed(&mut self, position: Option<usize>) {
        for (idx, hole) in self.holes.iter().enumerate() {
            let classes = hole.class_list();
            classes.toggle_with_force("up", position == Some(idx)).ok();
            // hit flash belongs to the previous appearance
            classes.remove_1("hit").ok();
        }
    }

    fn on_score_changed(&mut self, score: u32) {
        self.score.set_text_content(Some(&score.to_string()));
    }

    fn on_round_ended(&mut self, summary: &RoundSummary) {
        let mut text = summary.message.clone();
        if summary.new_best {
            text.push_str(" New best!");
        } else if summary.best_score > 0 {
            text.push_str(&format!(" Best: {}.", summary.best_score));
        }
        self.message.set_text_content(Some(&text));
    }

    fn on_phase_changed(&mut self, phase: Phase) {
        match phase {
            Phase::Running => {
                self.message.set_text_content(Some(""));
                self.start_button.set_attribute("disabled", "").ok();
            }
            Phase::Ended | Phase::Idle => {
                self.start_button.remove_attribute("disabled").ok();
            }
        }
    }

    fn on_target_hit(&mut self, position: usize) {
        if let Some(hole) = self.holes.get(position) {
            hole.class_list().add_1("hit").ok();
        }
    }
}
