//! Round state machine: countdown, pop scheduling and scoring for one board.
//!
//! `RoundController` owns the `RoundState` and hands `&mut` access to its three
//! collaborators (`RoundClock`, `PopScheduler`, `ScoreGate`). It never waits;
//! it asks a `TimerHost` to call `fire` later and reacts when that happens.
//!
//! Cancellation is two-layered: `stop`/`start` clear the host's pending timers
//! *and* bump the round generation. A timer that still fires afterwards carries
//! the old generation and is dropped without touching state.

mod clock;
mod gate;
mod scheduler;
mod state;

pub use clock::{ClockTick, RoundClock};
pub use gate::ScoreGate;
pub use scheduler::PopScheduler;
pub use state::{Appearance, Phase, RoundState};

use rand::Rng;

use crate::config::RoundConfig;
use crate::error::ConfigError;
use crate::presenter::Presenter;
use crate::summary::RoundSummary;
use crate::timer::{Timer, TimerHost, TimerKind, VirtualTimers};

pub struct RoundController<H, P, R> {
    config: RoundConfig,
    state: RoundState,
    clock: RoundClock,
    scheduler: PopScheduler,
    gate: ScoreGate,
    generation: u64,
    best_score: u32,
    summary: Option<RoundSummary>,
    timers: H,
    presenter: P,
    rng: R,
}

impl<H: TimerHost, P: Presenter, R: Rng> RoundController<H, P, R> {
    pub fn new(config: RoundConfig, timers: H, presenter: P, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: RoundState::fresh(config.total_duration_ms),
            clock: RoundClock::new(config.tick_interval_ms),
            scheduler: PopScheduler::new(&config),
            gate: ScoreGate,
            generation: 0,
            best_score: 0,
            summary: None,
            config,
            timers,
            presenter,
            rng,
        })
    }

    // --- Control ---------------------------------------------------------------

    /// Begin a new round. Ignored while a round is already running.
    pub fn start(&mut self) {
        if self.state.is_running() {
            return;
        }
        // Anything still queued from an earlier round is dead from here on.
        self.timers.cancel_all();
        self.generation += 1;

        let total = self.config.total_duration_ms;
        self.state = RoundState::fresh(total);
        self.summary = None;
        self.clock.start(&mut self.state, total);
        self.state.phase = Phase::Running;
        log::info!(
            "round {} started: {}ms over {} positions",
            self.generation,
            total,
            self.scheduler.positions()
        );

        self.presenter.on_phase_changed(Phase::Running);
        self.presenter.on_appearance_changed(None);
        self.presenter.on_score_changed(0);
        self.presenter.on_tick(total);

        self.schedule(self.clock.tick_interval_ms(), TimerKind::Tick);
        let warmup = self.scheduler.warmup_delay(&mut self.rng);
        self.schedule_next(warmup);
    }

    /// End the running round early (or on expiry). Ignored unless running.
    pub fn stop(&mut self) {
        if !self.state.is_running() {
            return;
        }
        self.clock.stop();
        self.timers.cancel_all();
        self.generation += 1;

        if self.scheduler.deactivate(&mut self.state).is_some() {
            self.presenter.on_appearance_changed(None);
        }
        self.state.phase = Phase::Ended;

        let summary = RoundSummary::new(self.state.score, self.state.appearances, self.best_score);
        self.best_score = summary.best_score;
        log::info!(
            "round ended: score {} from {} appearances ({:?})",
            summary.score,
            summary.appearances,
            summary.tier
        );
        self.presenter.on_phase_changed(Phase::Ended);
        self.presenter.on_round_ended(&summary);
        self.summary = Some(summary);
    }

    /// Pointer activation on `position`. Scores at most once per appearance.
    pub fn activate_input(&mut self, position: usize) {
        if self.gate.on_activate_input(&mut self.state, position) {
            log::debug!("hit on {} (score {})", position, self.state.score);
            self.presenter.on_target_hit(position);
            self.presenter.on_score_changed(self.state.score);
        }
    }

    /// Entry point for the timer host when a scheduled timer elapses.
    pub fn fire(&mut self, timer: Timer) {
        if timer.generation != self.generation || !self.state.is_running() {
            log::trace!("dropping stale {:?} from round {}", timer.kind, timer.generation);
            return;
        }
        match timer.kind {
            TimerKind::Tick => self.on_tick(),
            TimerKind::Activate => self.activate_once(),
            TimerKind::Hide => self.hide_current(),
        }
    }

    // --- Timer reactions ---------------------------------------------------------

    fn on_tick(&mut self) {
        match self.clock.tick(&mut self.state) {
            ClockTick::Running(remaining) => {
                self.presenter.on_tick(remaining);
                self.schedule(self.clock.tick_interval_ms(), TimerKind::Tick);
            }
            ClockTick::Expired => {
                self.presenter.on_tick(0);
                self.stop();
            }
            ClockTick::Stopped => {}
        }
    }

    fn activate_once(&mut self) {
        let now = self.timers.now_ms();
        let appearance = self
            .scheduler
            .activate_once(&mut self.state, &mut self.rng, now);
        log::debug!(
            "pop at {} for {}ms",
            appearance.position,
            appearance.visible_ms
        );
        self.presenter.on_appearance_changed(Some(appearance.position));
        self.schedule(appearance.visible_ms, TimerKind::Hide);
    }

    fn hide_current(&mut self) {
        if self.scheduler.deactivate(&mut self.state).is_some() {
            self.presenter.on_appearance_changed(None);
        }
        if self.state.is_running() {
            let gap = self.scheduler.next_gap(&mut self.rng);
            self.schedule_next(gap);
        }
    }

    /// Queue the next pop after `delay_ms`; nothing is queued once the round stopped.
    fn schedule_next(&mut self, delay_ms: u32) {
        if self.state.is_running() {
            self.schedule(delay_ms, TimerKind::Activate);
        }
    }

    fn schedule(&mut self, delay_ms: u32, kind: TimerKind) {
        let timer = Timer {
            generation: self.generation,
            kind,
        };
        self.timers.schedule(delay_ms, timer);
    }
}

impl<H, P, R> RoundController<H, P, R> {
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Summary of the last finished round; cleared when a new round starts.
    pub fn summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn timers(&self) -> &H {
        &self.timers
    }
}

// --- Headless driving ----------------------------------------------------------

impl<P: Presenter, R: Rng> RoundController<VirtualTimers, P, R> {
    /// Let `ms` of virtual time pass, firing every timer that comes due.
    pub fn advance(&mut self, ms: u64) {
        let until = self.timers.now() + ms;
        while let Some(timer) = self.timers.pop_due(until) {
            self.fire(timer);
        }
        self.timers.advance_to(until);
    }

    /// Fire timers until none are left (the round has ended or was never started).
    pub fn run_to_end(&mut self) {
        while let Some(timer) = self.timers.pop_due(u64::MAX) {
            self.fire(timer);
        }
    }
}
