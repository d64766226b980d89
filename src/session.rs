//! Host-facing session: command latching, frame clock, backdrop.
//!
//! The host owns the loop. It calls [`Session::frame`] once per display
//! refresh with a wall-clock timestamp and the current playfield size, and
//! dispatches the returned events to its UI/audio/commentary collaborators.
//! Dropping the session is teardown; nothing inside schedules work, so no
//! callback can outlive it.

use crate::config::{Difficulty, Theme};
use crate::consts::MENU_SCROLL_SPEED;
use crate::scene::Backdrop;
use crate::sim::{
    FrameClock, GameEvent, GamePhase, GameState, PowerUpKind, TickInput, Viewport, tick,
};

pub struct Session {
    state: GameState,
    clock: FrameClock,
    backdrop: Backdrop,
    /// One-shot commands latched until the next frame consumes them
    input: TickInput,
    /// Staged selections; they land whenever a run is not in progress
    difficulty: Difficulty,
    theme: Theme,
}

impl Session {
    pub fn new(seed: u64, difficulty: Difficulty, theme: Theme) -> Self {
        log::info!(
            "session created (seed {seed}, {}, {})",
            difficulty.label(),
            theme.label()
        );
        Self {
            state: GameState::new(seed, difficulty.config(), Viewport::new(0.0, 0.0)),
            clock: FrameClock::new(),
            backdrop: Backdrop::new(theme, seed),
            input: TickInput::default(),
            difficulty,
            theme,
        }
    }

    /// Begin a run (valid from Menu and GameOver).
    pub fn start(&mut self) {
        self.input.start = true;
    }

    /// Invert gravity; ignored outside of play.
    pub fn flip(&mut self) {
        self.input.flip = true;
    }

    /// Restart after a crash.
    pub fn retry(&mut self) {
        self.input.retry = true;
    }

    /// Return to the menu after a crash.
    pub fn to_menu(&mut self) {
        self.input.to_menu = true;
    }

    /// Staged; applied at the next reset.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Staged; applied at the next reset.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Advance one frame. `now_ms` is any monotonic millisecond timestamp;
    /// the first frame after creation (or after [`Session::restore`]) runs
    /// with `dt = 0`.
    pub fn frame(&mut self, now_ms: f64, view: Viewport) -> Vec<GameEvent> {
        let dt = self.clock.tick(now_ms);

        // Staged difficulty/theme may only land while no run is in progress;
        // the config is then immutable until the next reset.
        if self.state.phase != GamePhase::Playing {
            self.state.config = self.difficulty.config();
            self.backdrop.set_theme(self.theme);
        }

        let mut events = Vec::new();
        tick(&mut self.state, &self.input, view, dt, &mut events);
        self.input = TickInput::default();

        for event in &events {
            if let GameEvent::PhaseChange(phase) = event {
                log::info!("phase -> {phase:?} (score {})", self.state.score);
            }
        }

        // The backdrop scrolls slowly outside of play, at field speed (and
        // SlowMo rate) during it.
        let (scroll, bg_dt) = if self.state.phase == GamePhase::Playing {
            let bg_dt = if self.state.effects.is_active(PowerUpKind::SlowMo) {
                dt * crate::consts::SLOW_MO_FACTOR
            } else {
                dt
            };
            (self.state.current_speed(), bg_dt)
        } else {
            (MENU_SCROLL_SPEED, dt)
        };
        self.backdrop.advance(scroll, bg_dt, view);

        events
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Serialize the simulation state, e.g. for a host Continue feature.
    pub fn snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.state)
    }

    /// Replace the simulation state from a snapshot. The clock restarts so
    /// the next frame runs with `dt = 0` instead of a wall-clock jump.
    pub fn restore(&mut self, json: &str) -> serde_json::Result<()> {
        self.state = serde_json::from_str(json)?;
        self.clock.reset();
        log::info!("state restored (score {})", self.state.score);
        Ok(())
    }
}
