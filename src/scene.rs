//! Parallax backdrop data for the host renderer.
//!
//! Pure presentational state: three scroll offsets plus a seeded starfield.
//! The host decides what each layer looks like per theme; this module only
//! advances scroll positions, driven by the simulation's scroll speed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Theme;
use crate::sim::Viewport;

/// Scroll factor per parallax layer, far to near.
pub const LAYER_FACTORS: [f32; 3] = [0.2, 0.5, 0.8];

/// Stars in the DeepSpace field
pub const STAR_COUNT: usize = 100;

/// One background star
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Scroll factor relative to the farthest layer
    pub speed: f32,
}

#[derive(Debug, Clone)]
pub struct Backdrop {
    theme: Theme,
    seed: u64,
    offsets: [f32; 3],
    stars: Vec<Star>,
    size: Viewport,
}

impl Backdrop {
    pub fn new(theme: Theme, seed: u64) -> Self {
        Self {
            theme,
            seed,
            offsets: [0.0; 3],
            stars: Vec::new(),
            size: Viewport::new(0.0, 0.0),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Scroll the layers by `scroll_speed * dt`, regenerating the starfield
    /// when the playfield size changed.
    pub fn advance(&mut self, scroll_speed: f32, dt: f32, view: Viewport) {
        if view.is_degenerate() {
            return;
        }
        if view != self.size {
            self.resize(view);
        }
        let scroll = scroll_speed * dt;
        for (offset, factor) in self.offsets.iter_mut().zip(LAYER_FACTORS) {
            *offset = (*offset - scroll * factor) % view.width;
        }
    }

    fn resize(&mut self, view: Viewport) {
        self.size = view;
        let mut rng = Pcg32::seed_from_u64(self.seed);
        self.stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.random_range(0.0..view.width),
                y: rng.random_range(0.0..view.height),
                size: rng.random_range(0.5..2.5),
                speed: rng.random_range(0.1..0.6),
            })
            .collect();
    }

    /// Current offset for one of the three parallax layers
    pub fn layer_offset(&self, layer: usize) -> f32 {
        self.offsets[layer]
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}
