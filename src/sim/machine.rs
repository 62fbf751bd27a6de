//! Game state machine
//!
//! The single owner and mutator of [`GameSession`]. The host drives three
//! independent callbacks (motion frames, the spawn timer, the success
//! cooldown) in any interleaving; each entry point is one complete
//! read-modify-write of the session and pushes what happened to `events`.

use glam::Vec2;

use super::capture::detect_capture;
use super::input::{InputTracker, Key};
use super::motion::MotionScheduler;
use super::spawn::{SpawnController, SpawnDecision};
use super::state::{Field, GameEvent, GamePhase, GameSession, Target};
use super::timer::Timer;
use crate::consts::{CAPTURE_RADIUS, SUCCESS_COOLDOWN_MS};
use crate::settings::{ConfigError, Settings};

#[derive(Debug, Clone)]
pub struct GameStateMachine {
    field: Field,
    start: Vec2,
    session: GameSession,
    input: InputTracker,
    motion: MotionScheduler,
    spawner: SpawnController,
    cooldown: Timer,
}

impl GameStateMachine {
    /// Start a session at `now_ms`; the first spawn is one initial interval away
    pub fn new(settings: &Settings, now_ms: f64) -> Result<Self, ConfigError> {
        settings.validate()?;
        let field = settings.field();
        let start = settings.start();
        let mut spawner = SpawnController::new(settings.seed);
        spawner.start(now_ms);

        let session = GameSession::new(&field, start);
        log::info!(
            "Session started on {}x{} field at ({}, {})",
            field.width,
            field.height,
            session.player.position.x,
            session.player.position.y
        );

        Ok(Self {
            field,
            start,
            session,
            input: InputTracker::default(),
            motion: MotionScheduler::new(settings.frame_interval_ms, settings.move_speed),
            spawner,
            cooldown: Timer::default(),
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Key down. Only buffered; the next applied frame consumes it.
    pub fn press(&mut self, key: Key) {
        self.input.press(key);
    }

    pub fn release(&mut self, key: Key) {
        self.input.release(key);
    }

    /// Drop all held keys (focus loss, teardown)
    pub fn release_all(&mut self) {
        self.input.clear();
    }

    /// Earliest pending timer deadline, for hosts that sleep between callbacks
    pub fn next_deadline(&self) -> Option<f64> {
        match (self.spawner.deadline(), self.cooldown.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fire every timer due by `now_ms` in deadline order, then run a frame
    pub fn advance(&mut self, now_ms: f64, events: &mut Vec<GameEvent>) {
        loop {
            let spawn = self.spawner.deadline().filter(|&d| d <= now_ms);
            let cooldown = self.cooldown.deadline().filter(|&d| d <= now_ms);
            match (spawn, cooldown) {
                (None, None) => break,
                (Some(s), Some(c)) if c <= s => self.on_cooldown_timer(c, events),
                (Some(s), _) => self.on_spawn_timer(s, events),
                (None, Some(c)) => self.on_cooldown_timer(c, events),
            }
        }
        self.on_frame(now_ms, events);
    }

    /// Motion frame callback: move, then check for a capture at the new position
    pub fn on_frame(&mut self, now_ms: f64, events: &mut Vec<GameEvent>) {
        if self.session.is_game_over() {
            return;
        }
        let Some(step) = self
            .motion
            .poll(now_ms, &self.input, &self.session.player, &self.field)
        else {
            return;
        };

        let player = &mut self.session.player;
        if let Some(direction) = step.direction_change {
            player.direction = direction;
            events.push(GameEvent::DirectionChanged(direction));
        }
        player.position = step.position;
        events.push(GameEvent::Moved {
            position: step.position,
        });

        self.try_capture(now_ms, events);
    }

    /// Capture, score and lockout are committed together or not at all
    fn try_capture(&mut self, now_ms: f64, events: &mut Vec<GameEvent>) {
        let session = &mut self.session;
        let Some(index) = detect_capture(
            session.player.position,
            &session.targets,
            session.player.success_active,
            CAPTURE_RADIUS,
        ) else {
            return;
        };

        let target = session.targets.remove(index);
        session.score += 1;
        session.player.success_active = true;
        self.cooldown.arm(now_ms, SUCCESS_COOLDOWN_MS);
        log::debug!("Captured target {} (score {})", target.id, session.score);
        events.push(GameEvent::Captured {
            target_id: target.id,
            score: session.score,
        });

        let interval_ms = self.spawner.on_score_changed(now_ms, session.score);
        if interval_ms != session.spawn_interval_ms {
            session.spawn_interval_ms = interval_ms;
            events.push(GameEvent::SpawnIntervalChanged { interval_ms });
        }
    }

    /// Spawn timer callback. Ignored unless the timer is armed and due.
    pub fn on_spawn_timer(&mut self, now_ms: f64, events: &mut Vec<GameEvent>) {
        if !self.spawner.is_due(now_ms) {
            return;
        }
        if self.session.is_game_over() {
            self.spawner.suspend();
            return;
        }

        match self
            .spawner
            .fire(now_ms, self.session.targets.len(), &self.field)
        {
            SpawnDecision::Spawn(position) => {
                let id = self.session.next_target_id();
                self.session.targets.push(Target { id, position });
                log::debug!(
                    "Spawned target {} at ({:.0}, {:.0}), {} active",
                    id,
                    position.x,
                    position.y,
                    self.session.targets.len()
                );
                events.push(GameEvent::Spawned {
                    target_id: id,
                    position,
                });
            }
            SpawnDecision::Overflow => {
                self.session.phase = GamePhase::GameOver;
                log::info!("Game over! Final score: {}", self.session.score);
                events.push(GameEvent::GameOver {
                    final_score: self.session.score,
                });
            }
        }
    }

    /// Success cooldown callback. Ignored unless the cooldown is armed and due.
    pub fn on_cooldown_timer(&mut self, now_ms: f64, events: &mut Vec<GameEvent>) {
        if !self.cooldown.is_due(now_ms) {
            return;
        }
        self.cooldown.cancel();
        self.session.player.success_active = false;
        events.push(GameEvent::SuccessCleared);
    }

    /// Replace the session with a fresh one and restart spawning at `now_ms`.
    ///
    /// Pending timers from the old session are cancelled; held keys survive.
    pub fn reset(&mut self, now_ms: f64, events: &mut Vec<GameEvent>) {
        self.cooldown.cancel();
        self.motion.reset();
        self.session = GameSession::new(&self.field, self.start);
        self.spawner.start(now_ms);
        log::info!("Session reset");
        events.push(GameEvent::Reset);
    }
}
