//! Frame-throttled player motion
//!
//! Each applied tick moves a fixed step, so speed follows the tick cadence
//! rather than elapsed time.

use glam::Vec2;

use super::input::InputTracker;
use super::state::{Direction, Field, PlayerState};
use crate::consts::{FRAME_INTERVAL_MS, MOVE_SPEED};

/// Result of an applied motion tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionStep {
    /// New clamped player position
    pub position: Vec2,
    /// Set only when the horizontal movement changed sign
    pub direction_change: Option<Direction>,
}

#[derive(Debug, Clone)]
pub struct MotionScheduler {
    frame_interval_ms: f64,
    speed: f32,
    /// Timestamp of the last tick that moved the player
    last_move_ms: Option<f64>,
}

impl Default for MotionScheduler {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL_MS, MOVE_SPEED)
    }
}

impl MotionScheduler {
    pub fn new(frame_interval_ms: f64, speed: f32) -> Self {
        Self {
            frame_interval_ms,
            speed,
            last_move_ms: None,
        }
    }

    /// Run one frame callback at `now_ms`.
    ///
    /// Returns `None` when the frame is throttled or no movement key is held.
    pub fn poll(
        &mut self,
        now_ms: f64,
        input: &InputTracker,
        player: &PlayerState,
        field: &Field,
    ) -> Option<MotionStep> {
        if let Some(last) = self.last_move_ms {
            if now_ms - last < self.frame_interval_ms {
                return None;
            }
        }

        let dir = input.active_vector();
        if dir.x == 0 && dir.y == 0 {
            return None;
        }

        let direction_change =
            Direction::from_dx(dir.x).filter(|&facing| facing != player.direction);
        let delta = dir.as_vec2() * self.speed;
        let position = field.clamp_player(player.position + delta);

        self.last_move_ms = Some(now_ms);
        Some(MotionStep {
            position,
            direction_change,
        })
    }

    /// Forget the throttle timestamp (new session)
    pub fn reset(&mut self) {
        self.last_move_ms = None;
    }
}
