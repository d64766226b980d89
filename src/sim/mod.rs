//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Normalized timestep only (`dt = 1.0` is one 60 Hz reference frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod effects;
pub mod particles;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{ObstacleOutcome, circles_overlap, obstacle_overlap, resolve_obstacle};
pub use effects::{ActiveEffect, EffectRegistry, PowerUpKind};
pub use state::{
    GameEvent, GamePhase, GameState, Obstacle, Particle, ParticleKind, Player, PowerUp, Viewport,
};
pub use tick::{TickInput, tick};
