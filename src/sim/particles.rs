//! Visual feedback particles driven by simulation events.
//!
//! Particles never influence gameplay; they only consume RNG draws, which
//! keeps them inside the deterministic replay envelope.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Particle, ParticleKind};
use crate::consts::MAX_PARTICLES;

/// Scatter `count` particles from `origin` with random velocities.
pub fn burst(
    particles: &mut Vec<Particle>,
    rng: &mut Pcg32,
    origin: Vec2,
    count: usize,
    kind: ParticleKind,
) {
    for _ in 0..count {
        if particles.len() >= MAX_PARTICLES {
            // Oldest first to make room
            particles.remove(0);
        }
        let vel = Vec2::new(rng.random_range(-4.0..4.0), rng.random_range(-4.0..4.0));
        particles.push(Particle {
            pos: origin,
            vel,
            life: 1.0,
            kind,
        });
    }
}

/// One short-lived exhaust particle behind the player.
pub fn trail(particles: &mut Vec<Particle>, origin: Vec2) {
    if particles.len() >= MAX_PARTICLES {
        particles.remove(0);
    }
    particles.push(Particle {
        pos: origin,
        vel: Vec2::new(-2.0, 0.0),
        life: 0.5,
        kind: ParticleKind::Trail,
    });
}

/// Advance and retire particles.
pub fn update(particles: &mut Vec<Particle>, dt: f32) {
    for p in particles.iter_mut() {
        p.pos += p.vel * dt;
        p.life -= 0.02 * dt;
    }
    particles.retain(|p| p.life > 0.0);
}
