//! Game session and core simulation types
//!
//! Everything a run needs lives in [`GameSession`]; it is replaced wholesale on reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::spawn_interval_for_score;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Target population overflowed; only a reset leaves this phase
    GameOver,
}

/// Facing of the player sprite
///
/// The discriminant is the numeric trigger the animation layer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    #[default]
    Right = 0,
    Left = 1,
}

impl Direction {
    /// Direction implied by a horizontal movement component, if any
    pub fn from_dx(dx: i32) -> Option<Self> {
        match dx.signum() {
            1 => Some(Direction::Right),
            -1 => Some(Direction::Left),
            _ => None,
        }
    }

    pub fn trigger_value(self) -> u8 {
        self as u8
    }
}

/// Bounded play area, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Lowest allowed player center
    pub fn player_min(&self) -> Vec2 {
        Vec2::splat(PLAYER_HALF_SIZE)
    }

    /// Highest allowed player center
    pub fn player_max(&self) -> Vec2 {
        Vec2::new(self.width - PLAYER_HALF_SIZE, self.height - PLAYER_HALF_SIZE)
    }

    /// Clamp a player center into `[half, size - half]` on both axes
    pub fn clamp_player(&self, pos: Vec2) -> Vec2 {
        let (min, max) = (self.player_min(), self.player_max());
        Vec2::new(pos.x.max(min.x).min(max.x), pos.y.max(min.y).min(max.y))
    }

    pub fn contains_player(&self, pos: Vec2) -> bool {
        let (min, max) = (self.player_min(), self.player_max());
        pos.x >= min.x && pos.x <= max.x && pos.y >= min.y && pos.y <= max.y
    }

    /// Spawn bounds per axis, keeping `SPAWN_MARGIN` from every edge.
    ///
    /// A field narrower than twice the margin yields swapped bounds; the
    /// range is then ordered so placement still stays inside the field.
    pub fn spawn_bounds(&self) -> (Vec2, Vec2) {
        let a = Vec2::splat(SPAWN_MARGIN);
        let b = Vec2::new(self.width - SPAWN_MARGIN, self.height - SPAWN_MARGIN);
        (a.min(b), a.max(b))
    }
}

/// The player actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Vec2,
    pub direction: Direction,
    /// Capture lockout; true for `SUCCESS_COOLDOWN_MS` after a capture
    pub success_active: bool,
}

/// A grass target waiting to be captured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    pub position: Vec2,
}

/// Something the simulation did during one update, for presentation to consume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Horizontal movement changed sign
    DirectionChanged(Direction),
    /// A motion tick was applied
    Moved { position: Vec2 },
    /// A target was captured; `score` is the new score
    Captured { target_id: u32, score: u64 },
    SpawnIntervalChanged { interval_ms: u32 },
    Spawned { target_id: u32, position: Vec2 },
    /// Success cooldown elapsed
    SuccessCleared,
    GameOver { final_score: u64 },
    /// Session was replaced by a fresh one
    Reset,
}

/// Complete state of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub score: u64,
    pub phase: GamePhase,
    pub spawn_interval_ms: u32,
    /// Active targets (insertion order = id order)
    pub targets: Vec<Target>,
    pub player: PlayerState,
    /// Next target ID
    next_id: u32,
}

impl GameSession {
    /// Fresh session with the player at `start` (clamped into the field)
    pub fn new(field: &Field, start: Vec2) -> Self {
        Self {
            score: 0,
            phase: GamePhase::Playing,
            spawn_interval_ms: spawn_interval_for_score(0),
            targets: Vec::new(),
            player: PlayerState {
                position: field.clamp_player(start),
                direction: Direction::Right,
                success_active: false,
            },
            next_id: 1,
        }
    }

    /// Allocate a new target ID
    pub fn next_target_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
