//! Gravity Flap headless demo
//!
//! Drives a session at a fixed 60 Hz with a naive autopilot and logs the
//! events, which is handy for eyeballing balance tweaks without a frontend.
//!
//! Usage: `gravity-flap [easy|normal|hard] [seed]`

use gravity_flap::config::{Difficulty, Theme};
use gravity_flap::consts::FRAME_MS;
use gravity_flap::session::Session;
use gravity_flap::sim::{GameEvent, GamePhase, Viewport};

/// Ten minutes at 60 Hz
const MAX_FRAMES: u32 = 36_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let difficulty = args
        .next()
        .and_then(|s| Difficulty::from_str(&s))
        .unwrap_or_default();
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1337);

    let view = Viewport::new(1280.0, 720.0);
    let mut session = Session::new(seed, difficulty, Theme::NeonGrid);
    session.start();

    let mut now_ms = 0.0;
    for _ in 0..MAX_FRAMES {
        now_ms += FRAME_MS as f64;

        // Autopilot: flip whenever drifting into the outer quarter.
        let y = session.state().player.y;
        let inverted = session.state().player.gravity_inverted;
        let margin = view.height / 4.0;
        if (y < margin && inverted) || (y > view.height - margin && !inverted) {
            session.flip();
        }

        for event in session.frame(now_ms, view) {
            match event {
                GameEvent::Score(score) => log::info!("score {score}"),
                GameEvent::Pickup(kind) => log::info!("pickup {kind:?}"),
                GameEvent::Crash => log::info!("crashed"),
                other => log::debug!("{other:?}"),
            }
        }

        if session.phase() == GamePhase::GameOver {
            break;
        }
    }

    println!(
        "{} run over: score {} after {:.1}s",
        difficulty.label(),
        session.score(),
        now_ms / 1000.0
    );
}
