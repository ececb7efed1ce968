//! Brickfall headless driver
//!
//! Owns the clock and the input source, steps a session until it ends and
//! logs the outcome. An autopilot stands in for the keyboard.
//!
//! Usage: `brickfall [config.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
use brickfall::SimError;

/// Frame time the driver aims for (60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const TARGET_DT: f32 = 1.0 / 60.0;
/// Give up after ten simulated minutes
#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES: u64 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brickfall (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives the simulation through the library API
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), SimError> {
    use brickfall::sim::{Session, SimEvent, step};
    use brickfall::{SimConfig, StepResult};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| SimError::InvalidConfig(format!("cannot read {}: {}", path, e)))?;
            log::info!("Loaded config from {}", path);
            SimConfig::from_json(&json)?
        }
        None => SimConfig::default(),
    };
    let seed = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(0);

    let mut session = Session::with_config(config)?;
    // Frame times wobble around the target like a real display loop
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut blocks_destroyed = 0usize;

    let result = loop {
        let dt = TARGET_DT * rng.random_range(0.8f32..1.2);
        let input = autopilot(&session);

        let result = step(&mut session, dt, &input);
        blocks_destroyed += session
            .drain_events()
            .iter()
            .filter(|e| matches!(e, SimEvent::BlockDestroyed(_)))
            .count();

        if !result.is_running() || session.frame() >= MAX_FRAMES {
            break result;
        }
    };

    match result {
        StepResult::Ended(cause) => println!(
            "{:?} after {} frames, {} blocks destroyed, {} left",
            cause,
            session.frame(),
            blocks_destroyed,
            session.remaining_blocks()
        ),
        StepResult::Running => println!(
            "Stopped after {} frames, {} blocks left",
            session.frame(),
            session.remaining_blocks()
        ),
    }
    Ok(())
}

/// Steer the paddle center toward the ball center
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(session: &brickfall::Session) -> brickfall::InputState {
    let store = session.store();
    let (Some((paddle_pos, paddle)), Some((ball_pos, ball))) = (store.paddle(), store.ball()) else {
        return brickfall::InputState::default();
    };

    let paddle_center = paddle_pos.x + paddle.size().x / 2.0;
    let ball_center = ball_pos.x + ball.radius();
    let dead_zone = paddle.size().x / 8.0;

    brickfall::InputState {
        left: ball_center < paddle_center - dead_zone,
        right: ball_center > paddle_center + dead_zone,
    }
}
