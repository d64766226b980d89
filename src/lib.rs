//! Gravity Flap - a gravity-inversion arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `session`: Host-facing command and frame API
//! - `scene`: Parallax backdrop data for the host renderer
//! - `config`: Data-driven difficulty and theme presets
//!
//! The crate owns no rendering, audio, or storage: hosts drive it with one
//! `Session::frame` call per display refresh and react to the returned
//! events.

pub mod config;
pub mod scene;
pub mod session;
pub mod sim;

pub use config::{Difficulty, PhysicsConfig, Theme};
pub use session::Session;

/// Game tuning constants
pub mod consts {
    /// Reference frame duration in milliseconds (60 Hz); `dt = 1.0` means
    /// one reference frame elapsed.
    pub const FRAME_MS: f32 = 16.66;

    /// Player ship stays at this horizontal position
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_RADIUS: f32 = 15.0;
    /// Velocity clamp, units per reference frame
    pub const MAX_VELOCITY: f32 = 8.0;
    /// Per-frame velocity damping, exponentiated by `dt`
    pub const DAMPING: f32 = 0.98;
    /// How far inside a violated boundary a shield bounce re-seats the player
    pub const BOUNCE_INSET: f32 = 10.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    /// Minimum clearance between a gap and the playfield edges
    pub const GAP_MARGIN: f32 = 50.0;

    /// Power-up defaults
    pub const POWERUP_RADIUS: f32 = 12.0;
    /// Power-ups spawn every this-many obstacle intervals
    pub const POWERUP_SPAWN_MULTIPLE: f32 = 3.0;
    /// Vertical margin for power-up spawn heights
    pub const POWERUP_MARGIN: f32 = 100.0;
    /// Power-ups are retired this far past the left edge
    pub const POWERUP_EXIT_MARGIN: f32 = 50.0;

    /// Every effect lasts this long from pickup
    pub const EFFECT_DURATION_MS: f64 = 5000.0;
    /// Magnet attraction radius around the player
    pub const MAGNET_RANGE: f32 = 400.0;
    /// Magnet pull, units per reference frame
    pub const MAGNET_PULL: f32 = 10.0;
    /// SlowMo scales the physics timestep by this factor
    pub const SLOW_MO_FACTOR: f32 = 0.5;

    /// Progressive difficulty: +5% scroll speed per 500 points
    pub const SPEEDUP_STEP: u32 = 500;
    pub const SPEEDUP_RATE: f32 = 0.05;

    /// Maximum particles
    pub const MAX_PARTICLES: usize = 256;
    /// A trail particle is emitted every this-many frames while playing
    pub const TRAIL_INTERVAL: f32 = 3.0;

    /// Backdrop scroll speed while not playing
    pub const MENU_SCROLL_SPEED: f32 = 0.5;
}
