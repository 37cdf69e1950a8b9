//! End-of-round summary. The banding thresholds are fixed; the wording is cosmetic.

/// Score band, evaluated top-down with inclusive lower bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryTier {
    Legendary, // >= 25
    Sharp,     // 18..25
    Solid,     // 12..18
    Warming,   // 6..12
    Starter,   // 1..6
    Miss,      // 0
}

impl SummaryTier {
    pub fn for_score(score: u32) -> Self {
        match score {
            25.. => SummaryTier::Legendary,
            18..=24 => SummaryTier::Sharp,
            12..=17 => SummaryTier::Solid,
            6..=11 => SummaryTier::Warming,
            1..=5 => SummaryTier::Starter,
            0 => SummaryTier::Miss,
        }
    }

    /// Player-facing line for a final score in this band.
    pub fn message(self, score: u32) -> String {
        match self {
            SummaryTier::Legendary => format!("Legendary reflexes! {score} hits, nothing escaped you."),
            SummaryTier::Sharp => format!("Sharp! {score} hits. Almost untouchable."),
            SummaryTier::Solid => format!("Solid round: {score} hits."),
            SummaryTier::Warming => format!("Warming up: {score} hits. Keep going!"),
            SummaryTier::Starter => format!("{score} hit(s). Every champion starts somewhere."),
            SummaryTier::Miss => "No hits this time. Give it another go!".to_string(),
        }
    }
}

/// Everything the presentation layer shows once a round has ended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundSummary {
    pub score: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub tier: SummaryTier,
    pub message: String,
    /// Appearances shown during the round (hits out of this many).
    pub appearances: u32,
    /// Best score across rounds played by this controller instance.
    pub best_score: u32,
    pub new_best: bool,
}

impl RoundSummary {
    pub fn new(score: u32, appearances: u32, previous_best: u32) -> Self {
        let tier = SummaryTier::for_score(score);
        Self {
            score,
            tier,
            message: tier.message(score),
            appearances,
            best_score: previous_best.max(score),
            new_best: score > previous_best,
        }
    }

    /// Share of appearances that were hit, 0.0 when nothing popped.
    pub fn hit_ratio(&self) -> f64 {
        if self.appearances == 0 {
            0.0
        } else {
            self.score as f64 / self.appearances as f64
        }
    }
}
