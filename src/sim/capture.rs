//! Capture detection between the player and grass targets

use glam::Vec2;

use super::state::Target;

/// Index of the target captured at `position`, if any.
///
/// Targets are scanned in insertion order and the first one strictly inside
/// `radius` wins. Nothing is captured while `success_active` is set.
pub fn detect_capture(
    position: Vec2,
    targets: &[Target],
    success_active: bool,
    radius: f32,
) -> Option<usize> {
    if success_active {
        return None;
    }
    targets
        .iter()
        .position(|target| position.distance(target.position) < radius)
}
