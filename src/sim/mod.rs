//! Real-time simulation
//!
//! All gameplay logic lives here, free of rendering and platform code:
//! - Time is supplied by the host in milliseconds
//! - Seeded RNG only
//! - Stable iteration order (targets by ID)

pub mod capture;
pub mod input;
pub mod machine;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod timer;

pub use capture::detect_capture;
pub use input::{InputTracker, Key};
pub use machine::GameStateMachine;
pub use motion::{MotionScheduler, MotionStep};
pub use spawn::{SpawnController, SpawnDecision};
pub use state::{Direction, Field, GameEvent, GamePhase, GameSession, PlayerState, Target};
pub use timer::Timer;
