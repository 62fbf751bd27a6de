//! Grass spawning
//!
//! A variable-rate timer: its period shrinks with score and it is re-armed
//! whenever score changes.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Field;
use super::timer::Timer;
use crate::consts::{INITIAL_SPAWN_INTERVAL_MS, MAX_TARGETS};
use crate::spawn_interval_for_score;

/// What a due spawn timer asks the state machine to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnDecision {
    /// Place a new target here
    Spawn(Vec2),
    /// Population is at the cap; end the run
    Overflow,
}

#[derive(Debug, Clone)]
pub struct SpawnController {
    timer: Timer,
    period_ms: u32,
    rng: Pcg32,
}

impl SpawnController {
    pub fn new(seed: u64) -> Self {
        Self {
            timer: Timer::default(),
            period_ms: INITIAL_SPAWN_INTERVAL_MS,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start a fresh cycle at the initial interval
    pub fn start(&mut self, now_ms: f64) {
        self.period_ms = INITIAL_SPAWN_INTERVAL_MS;
        self.timer.arm(now_ms, self.period_ms as f64);
    }

    /// Recompute the period for `score` and re-arm from `now_ms`.
    ///
    /// Returns the new period.
    pub fn on_score_changed(&mut self, now_ms: f64, score: u64) -> u32 {
        self.period_ms = spawn_interval_for_score(score);
        if self.timer.is_armed() {
            self.timer.arm(now_ms, self.period_ms as f64);
        }
        self.period_ms
    }

    pub fn suspend(&mut self) {
        self.timer.cancel();
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn deadline(&self) -> Option<f64> {
        self.timer.deadline()
    }

    pub fn is_due(&self, now_ms: f64) -> bool {
        self.timer.is_due(now_ms)
    }

    /// Handle a timer firing at `now_ms` with `population` live targets.
    ///
    /// Overflow suspends the timer; a spawn re-arms it for the next period.
    pub fn fire(&mut self, now_ms: f64, population: usize, field: &Field) -> SpawnDecision {
        if population >= MAX_TARGETS {
            self.suspend();
            return SpawnDecision::Overflow;
        }
        self.timer.arm(now_ms, self.period_ms as f64);
        SpawnDecision::Spawn(self.random_position(field))
    }

    /// Uniform position keeping the spawn margin from every edge.
    /// No clearance from the player is attempted.
    pub fn random_position(&mut self, field: &Field) -> Vec2 {
        let (min, max) = field.spawn_bounds();
        Vec2::new(
            self.rng.random_range(min.x..=max.x),
            self.rng.random_range(min.y..=max.y),
        )
    }
}
