//! Collision tests and modifier-dependent outcome resolution.
//!
//! An obstacle hit is an axis-aligned span overlap combined with a vertical
//! containment test against the gap; pickups are circle-circle overlaps.

use glam::Vec2;

use super::effects::{EffectRegistry, PowerUpKind};
use super::state::{Obstacle, Player};

/// How a player/obstacle intersection resolves, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleOutcome {
    /// Ghost is active: no collision effect
    PassThrough,
    /// A shield charge was spent; the obstacle must be retired by the caller
    ShieldSave,
    Crash,
}

/// True when the player's horizontal span overlaps the obstacle and the body
/// is not fully inside the gap band.
pub fn obstacle_overlap(player: &Player, obstacle: &Obstacle) -> bool {
    let horizontal = player.right() > obstacle.x && player.left() < obstacle.right();
    if !horizontal {
        return false;
    }
    let in_gap = player.top() > obstacle.gap_top && player.bottom() < obstacle.gap_bottom();
    !in_gap
}

/// Resolve an overlap against the live modifier set. Spends one shield charge
/// when that is the outcome.
pub fn resolve_obstacle(effects: &mut EffectRegistry) -> ObstacleOutcome {
    if effects.is_active(PowerUpKind::Ghost) {
        ObstacleOutcome::PassThrough
    } else if effects.consume(PowerUpKind::Shield) {
        ObstacleOutcome::ShieldSave
    } else {
        ObstacleOutcome::Crash
    }
}

/// Circle-circle overlap: centers closer than the summed radii.
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) < reach * reach
}
