//! Time-bounded modifier stacking.
//!
//! Every pickup appends its own instance; instances of the same kind are
//! never merged, so a shield picked up twice holds two charges while the
//! other kinds simply overlap their windows.

use serde::{Deserialize, Serialize};

use crate::consts::EFFECT_DURATION_MS;

/// Power-up kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Shield,
    Multiplier,
    SlowMo,
    Magnet,
    Ghost,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 5] = [
        PowerUpKind::Shield,
        PowerUpKind::Multiplier,
        PowerUpKind::SlowMo,
        PowerUpKind::Magnet,
        PowerUpKind::Ghost,
    ];
}

/// One live modifier instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub kind: PowerUpKind,
    /// Session time (ms) at which this instance lapses
    pub expires_at: f64,
}

/// Active power-up effects
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectRegistry {
    active: Vec<ActiveEffect>,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh instance of `kind` lasting the standard duration.
    pub fn activate(&mut self, kind: PowerUpKind, now_ms: f64) {
        self.active.push(ActiveEffect {
            kind,
            expires_at: now_ms + EFFECT_DURATION_MS,
        });
    }

    /// Drop every instance whose window has lapsed. Called once per frame,
    /// before any effect-dependent branch.
    pub fn prune(&mut self, now_ms: f64) {
        self.active.retain(|e| e.expires_at > now_ms);
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.active.iter().any(|e| e.kind == kind)
    }

    /// Spend exactly one instance of `kind`. Returns whether one was live.
    pub fn consume(&mut self, kind: PowerUpKind) -> bool {
        match self.active.iter().position(|e| e.kind == kind) {
            Some(idx) => {
                self.active.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Live instances of `kind`
    pub fn count(&self, kind: PowerUpKind) -> usize {
        self.active.iter().filter(|e| e.kind == kind).count()
    }
}
