//! Game state and core simulation types
//!
//! All state that must be persisted for Continue/determinism lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::{EffectRegistry, PowerUpKind};
use crate::config::PhysicsConfig;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle, no physics
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended; physics frozen, player rendered with a blink pattern
    GameOver,
}

/// Logical playfield dimensions, supplied by the host each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True before the host has laid out a real surface; such frames are
    /// skipped entirely and retried next refresh.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// The player ship: fixed at `PLAYER_X`, free on the vertical axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub y: f32,
    /// Vertical velocity, units per reference frame
    pub velocity: f32,
    pub radius: f32,
    pub gravity_inverted: bool,
}

impl Player {
    pub fn new(y: f32) -> Self {
        Self {
            y,
            velocity: 0.0,
            radius: PLAYER_RADIUS,
            gravity_inverted: false,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        PLAYER_X - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        PLAYER_X + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.radius
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(PLAYER_X, self.y)
    }

    /// Toggle the gravity direction (edge-triggered flip command).
    pub fn flip(&mut self) {
        self.gravity_inverted = !self.gravity_inverted;
    }

    /// One physics step: accelerate, damp, clamp, translate.
    pub fn integrate(&mut self, gravity: f32, dt: f32) {
        let direction = if self.gravity_inverted { -1.0 } else { 1.0 };
        self.velocity += gravity * direction * dt;
        // Exponentiated by dt, not multiplied, so damping stays
        // frame-rate-independent.
        self.velocity *= DAMPING.powf(dt);
        self.velocity = self.velocity.clamp(-MAX_VELOCITY, MAX_VELOCITY);
        self.y += self.velocity * dt;
    }
}

/// A scrolling gap obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Top of the gap, measured from the playfield top
    pub gap_top: f32,
    pub gap_height: f32,
    /// Set once when the player clears the trailing edge; scoring trigger
    pub passed: bool,
}

impl Obstacle {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap_height
    }
}

/// A collectible modifier drifting with the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    pub radius: f32,
}

/// Which event emitted a particle; the host maps this to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    Flip,
    ShieldBreak,
    Crash,
    Pickup,
    Trail,
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 down to 0.0, then retired
    pub life: f32,
    pub kind: ParticleKind,
}

/// Fire-and-forget notifications for the host's UI / audio / commentary
/// collaborators. The simulation never waits on their handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PhaseChange(GamePhase),
    /// New score total after a change
    Score(u32),
    Flip,
    ShieldBreak,
    Crash,
    Pickup(PowerUpKind),
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Physics preset, immutable for the duration of a run
    pub config: PhysicsConfig,
    pub phase: GamePhase,
    pub score: u32,
    /// Frame accumulator driving spawn cadence and the trail
    pub frames: f32,
    /// Session time in milliseconds, advanced by the unscaled delta
    pub elapsed_ms: f64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub powerups: Vec<PowerUp>,
    pub effects: EffectRegistry,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,
}

impl GameState {
    /// Fresh state in the menu phase. The viewport may still be degenerate
    /// here; the reset that starts a run re-centers the player.
    pub fn new(seed: u64, config: PhysicsConfig, view: Viewport) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            phase: GamePhase::Menu,
            score: 0,
            frames: 0.0,
            elapsed_ms: 0.0,
            player: Player::new(view.height / 2.0),
            obstacles: Vec::new(),
            powerups: Vec::new(),
            effects: EffectRegistry::new(),
            particles: Vec::new(),
        }
    }

    /// Return every entity and counter to its initial value. The phase is
    /// the caller's to set; the physics config survives the reset.
    pub fn reset(&mut self, view: Viewport) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.score = 0;
        self.frames = 0.0;
        self.elapsed_ms = 0.0;
        self.player = Player::new(view.height / 2.0);
        self.obstacles.clear();
        self.powerups.clear();
        self.effects.clear();
        self.particles.clear();
    }

    /// Progressive difficulty multiplier on the scroll speed
    pub fn speed_multiplier(&self) -> f32 {
        1.0 + (self.score / SPEEDUP_STEP) as f32 * SPEEDUP_RATE
    }

    pub fn current_speed(&self) -> f32 {
        self.config.speed * self.speed_multiplier()
    }

    /// Blink pattern for the game-over screen: five frames on, five off.
    pub fn blink_visible(&self) -> bool {
        (self.elapsed_ms / FRAME_MS as f64) as u64 % 10 < 5
    }
}
