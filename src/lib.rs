//! Grass Grazer - a real-time arcade capture game
//!
//! Core modules:
//! - `sim`: Simulation loop (input, motion, capture, spawning, game state)
//! - `bridge`: Signals for the external animation layer
//! - `settings`: Session configuration

pub mod bridge;
pub mod settings;
pub mod sim;

pub use bridge::{AnimationBridge, AnimationLayer, SignalError};
pub use settings::{ConfigError, Settings};

/// Game configuration constants
pub mod consts {
    /// Displacement per applied motion tick, per axis
    pub const MOVE_SPEED: f32 = 8.0;
    /// Motion tick cadence (60 Hz)
    pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

    /// Half of the player sprite extent; the player center never gets closer to an edge
    pub const PLAYER_HALF_SIZE: f32 = 160.0;
    /// Half of the grass sprite extent
    pub const TARGET_HALF_SIZE: f32 = 50.0;
    /// Minimum distance from a field edge for a newly spawned target
    pub const SPAWN_MARGIN: f32 = PLAYER_HALF_SIZE + TARGET_HALF_SIZE;

    /// Population cap; a spawn attempt at the cap ends the run
    pub const MAX_TARGETS: usize = 100;

    /// Spawn interval at score 0
    pub const INITIAL_SPAWN_INTERVAL_MS: u32 = 2000;
    /// Fastest spawn interval
    pub const MIN_SPAWN_INTERVAL_MS: u32 = 500;
    /// Interval reduction per point of score
    pub const SPAWN_INTERVAL_STEP_MS: u32 = 100;

    /// Player-target distance below which a target is captured
    pub const CAPTURE_RADIUS: f32 = 100.0;
    /// Capture lockout after a successful capture
    pub const SUCCESS_COOLDOWN_MS: f64 = 500.0;

    /// Default player start point (clamped into the field)
    pub const DEFAULT_START_X: f32 = 400.0;
    pub const DEFAULT_START_Y: f32 = 400.0;
}

/// Spawn interval for a given score: `clamp(2000 - 100 * score, 500, 2000)`
#[inline]
pub fn spawn_interval_for_score(score: u64) -> u32 {
    use consts::*;
    let reduction = score.saturating_mul(SPAWN_INTERVAL_STEP_MS as u64);
    let interval = (INITIAL_SPAWN_INTERVAL_MS as u64).saturating_sub(reduction);
    interval.clamp(MIN_SPAWN_INTERVAL_MS as u64, INITIAL_SPAWN_INTERVAL_MS as u64) as u32
}
