//! Bouncing-ball simulation demo.
//!
//! Runs the integrator until the ball comes to rest, logging its state
//! along the way. Run with: `cargo run --bin bounce_demo`

use microcanvas::ball::{Ball, TIME_STEP};
use microcanvas::VectorError;
use tracing_subscriber::EnvFilter;

/// Hard cap on simulation steps, in case the parameters are changed to
/// something that never settles.
const MAX_STEPS: u32 = 1_000_000;

fn main() -> Result<(), VectorError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("starting bouncing ball simulation");

    let mut ball = Ball::new(0.0, 10.0, 2.0, 1.0);

    let mut steps = 0u32;
    while !ball.is_settled() && steps < MAX_STEPS {
        ball.step(TIME_STEP)?;
        steps += 1;

        if steps % 100 == 0 {
            tracing::info!(
                steps,
                position = %ball.position(),
                velocity = %ball.velocity(),
                "tick"
            );
        }
    }

    tracing::info!(steps, position = %ball.position(), "simulation ended");
    Ok(())
}
