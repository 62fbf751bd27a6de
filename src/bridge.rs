//! Signals for the external animation layer
//!
//! The player sprite is driven by two numeric state-machine inputs:
//! `Direction` (0 = right, 1 = left) and `Success` (a pulse, 1 while the
//! capture animation plays). The layer may not be loaded yet, and its input
//! handles can be torn down underneath us; neither is an error.

use thiserror::Error;

use crate::sim::{Direction, GameEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignalError {
    #[error("animation input has been disposed")]
    Disposed,
}

/// Playback engine that consumes the game's signals
pub trait AnimationLayer {
    /// True once the layer has loaded and its inputs can be written
    fn is_ready(&self) -> bool;
    fn set_direction(&mut self, value: u8) -> Result<(), SignalError>;
    fn set_success(&mut self, value: u8) -> Result<(), SignalError>;
}

/// Translates [`GameEvent`]s into animation inputs.
///
/// Remembers the wanted value of each input and writes whatever differs from
/// what the layer last accepted, so a late-loading layer catches up on the
/// next relevant event.
#[derive(Debug)]
pub struct AnimationBridge<L: AnimationLayer> {
    layer: L,
    direction: u8,
    success: u8,
    delivered_direction: Option<u8>,
    delivered_success: Option<u8>,
}

impl<L: AnimationLayer> AnimationBridge<L> {
    pub fn new(layer: L) -> Self {
        Self {
            layer,
            direction: Direction::Right.trigger_value(),
            success: 0,
            delivered_direction: None,
            delivered_success: None,
        }
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }

    pub fn layer_mut(&mut self) -> &mut L {
        &mut self.layer
    }

    /// Consume one update's events
    pub fn handle(&mut self, events: &[GameEvent]) {
        let mut relevant = false;
        for event in events {
            match event {
                GameEvent::DirectionChanged(direction) => {
                    self.direction = direction.trigger_value();
                    relevant = true;
                }
                GameEvent::Captured { .. } => {
                    self.success = 1;
                    relevant = true;
                }
                GameEvent::SuccessCleared => {
                    self.success = 0;
                    relevant = true;
                }
                GameEvent::Reset => {
                    self.direction = Direction::Right.trigger_value();
                    self.success = 0;
                    relevant = true;
                }
                _ => {}
            }
        }
        if relevant {
            self.sync();
        }
    }

    /// Push any undelivered values to the layer
    pub fn sync(&mut self) {
        if !self.layer.is_ready() {
            log::trace!("Animation layer not ready, deferring signals");
            return;
        }

        if self.delivered_direction != Some(self.direction) {
            match self.layer.set_direction(self.direction) {
                Ok(()) => self.delivered_direction = Some(self.direction),
                Err(e) => log::debug!("Dropped direction signal: {}", e),
            }
        }
        if self.delivered_success != Some(self.success) {
            match self.layer.set_success(self.success) {
                Ok(()) => self.delivered_success = Some(self.success),
                Err(e) => log::debug!("Dropped success signal: {}", e),
            }
        }
    }
}
