//! Grass Grazer headless runner
//!
//! Drives a session on a simulated 60 Hz clock with an autopilot at the keys,
//! logging what the animation layer would receive. Prints the final session
//! as JSON.
//!
//! Usage: `grass-grazer [settings.json] [seconds]`

use std::path::PathBuf;

use glam::Vec2;

use grass_grazer::sim::{GameEvent, GameSession, GameStateMachine, Key};
use grass_grazer::{AnimationBridge, AnimationLayer, Settings, SignalError};

/// Simulated seconds when none are given
const DEFAULT_RUN_SECS: f64 = 120.0;
/// Host frame spacing (vsync-ish)
const HOST_FRAME_MS: f64 = 1000.0 / 60.0 + 0.1;
/// Frames before the animation layer reports ready
const LAYER_LOAD_FRAMES: u32 = 30;
/// Autopilot ignores offsets smaller than this per axis
const STEER_DEADZONE: f32 = 6.0;

/// Stand-in for the animation engine: logs the inputs it is given
struct LogLayer {
    frames_until_ready: u32,
}

impl AnimationLayer for LogLayer {
    fn is_ready(&self) -> bool {
        self.frames_until_ready == 0
    }

    fn set_direction(&mut self, value: u8) -> Result<(), SignalError> {
        log::info!("anim: Direction = {}", value);
        Ok(())
    }

    fn set_success(&mut self, value: u8) -> Result<(), SignalError> {
        log::info!("anim: Success = {}", value);
        Ok(())
    }
}

/// Hold the arrow keys that lead toward the oldest target
fn steer(machine: &mut GameStateMachine) {
    let session: &GameSession = machine.session();
    let goal = session.targets.first().map(|t| t.position);
    let offset = goal.map_or(Vec2::ZERO, |g| g - session.player.position);

    let axis = |v: f32, neg: Key, pos: Key| -> (Option<Key>, [Key; 2]) {
        if v > STEER_DEADZONE {
            (Some(pos), [neg, pos])
        } else if v < -STEER_DEADZONE {
            (Some(neg), [neg, pos])
        } else {
            (None, [neg, pos])
        }
    };

    for (want, keys) in [
        axis(offset.x, Key::ArrowLeft, Key::ArrowRight),
        axis(offset.y, Key::ArrowUp, Key::ArrowDown),
    ] {
        for key in keys {
            if Some(key) == want {
                machine.press(key);
            } else {
                machine.release(key);
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let settings_path = args.next().map(PathBuf::from);
    let run_secs = args
        .next()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_RUN_SECS);

    let settings = Settings::load_or_default(settings_path.as_deref());
    let mut machine = match GameStateMachine::new(&settings, 0.0) {
        Ok(machine) => machine,
        Err(e) => {
            log::error!("Cannot start session: {}", e);
            std::process::exit(1);
        }
    };
    let mut bridge = AnimationBridge::new(LogLayer {
        frames_until_ready: LAYER_LOAD_FRAMES,
    });

    let end_ms = run_secs * 1000.0;
    let mut now = 0.0;
    let mut events = Vec::new();
    let mut captures = 0u32;

    while now < end_ms {
        now += HOST_FRAME_MS;
        let layer = bridge.layer_mut();
        layer.frames_until_ready = layer.frames_until_ready.saturating_sub(1);

        steer(&mut machine);
        events.clear();
        machine.advance(now, &mut events);
        bridge.handle(&events);

        for event in &events {
            match event {
                GameEvent::Captured { .. } => captures += 1,
                GameEvent::SpawnIntervalChanged { interval_ms } => {
                    log::info!("Spawn interval now {}ms", interval_ms);
                }
                GameEvent::GameOver { final_score } => {
                    log::info!("Game Over! Final Score: {}", final_score);
                }
                _ => {}
            }
        }
        if machine.session().is_game_over() {
            break;
        }
    }

    machine.release_all();
    log::info!(
        "Ran {:.1}s: {} captures, {} targets on field",
        now / 1000.0,
        captures,
        machine.session().targets.len()
    );

    match serde_json::to_string_pretty(machine.session()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize session: {}", e),
    }
}
