//! Data-driven game balance: difficulty presets and world themes.
//!
//! A `PhysicsConfig` is immutable for the duration of a run; selections made
//! mid-run are staged by the session and land at the next reset.

use serde::{Deserialize, Serialize};

/// Physics tuning for one run. Rates are per reference frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Vertical acceleration, units per frame squared
    pub gravity: f32,
    /// Base horizontal scroll speed, units per frame
    pub speed: f32,
    /// Frames between obstacle spawns
    pub obstacle_spawn_rate: f32,
    /// Vertical size of each obstacle gap
    pub gap_size: f32,
}

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Zen (Slow)",
            Difficulty::Normal => "Classic",
            Difficulty::Hard => "Hyper",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "zen" => Some(Difficulty::Easy),
            "normal" | "classic" => Some(Difficulty::Normal),
            "hard" | "hyper" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Physics preset for this difficulty
    pub fn config(self) -> PhysicsConfig {
        match self {
            Difficulty::Easy => PhysicsConfig {
                gravity: 0.15,
                speed: 2.5,
                obstacle_spawn_rate: 260.0,
                gap_size: 260.0,
            },
            Difficulty::Normal => PhysicsConfig {
                gravity: 0.28,
                speed: 3.5,
                obstacle_spawn_rate: 200.0,
                gap_size: 210.0,
            },
            Difficulty::Hard => PhysicsConfig {
                gravity: 0.5,
                speed: 6.0,
                obstacle_spawn_rate: 130.0,
                gap_size: 170.0,
            },
        }
    }
}

/// World theme; picks the backdrop variant the host renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    NeonGrid,
    DeepSpace,
    SunsetCity,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::NeonGrid, Theme::DeepSpace, Theme::SunsetCity];

    pub fn label(self) -> &'static str {
        match self {
            Theme::NeonGrid => "Cyber Grid",
            Theme::DeepSpace => "Deep Space",
            Theme::SunsetCity => "Synth City",
        }
    }
}
