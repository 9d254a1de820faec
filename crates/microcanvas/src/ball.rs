//! Bouncing-ball physics integrator.
//!
//! Integrates 2-D motion under gravity with restitution against the
//! edges of the 240×320 display field. Position and velocity are
//! [`Vector`]s; every tick goes through the vector module, so a length
//! mismatch anywhere surfaces as an error instead of bad math.

use microcanvas_math::{Vector, VectorResult};

/// Vertical acceleration (field units per second squared).
pub const GRAVITY: f32 = -9.81;
/// Coefficient of restitution applied at each wall contact.
pub const RESTITUTION: f32 = 0.8;
/// Default simulation time step in seconds.
pub const TIME_STEP: f32 = 0.01;
/// Velocity threshold below which a grounded ball counts as at rest.
pub const REST_EPSILON: f32 = 0.001;
/// Field width in pixels.
pub const FIELD_WIDTH: f32 = 240.0;
/// Field height in pixels.
pub const FIELD_HEIGHT: f32 = 320.0;

/// A ball with vector-valued position and velocity.
#[derive(Debug, Clone)]
pub struct Ball {
    position: Vector,
    velocity: Vector,
}

impl Ball {
    /// Creates a ball at `(x, y)` moving with velocity `(vx, vy)`.
    #[must_use]
    pub fn new(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self {
            position: Vector::from_components([x, y]),
            velocity: Vector::from_components([vx, vy]),
        }
    }

    /// Returns the position vector.
    #[must_use]
    pub fn position(&self) -> &Vector {
        &self.position
    }

    /// Returns the velocity vector.
    #[must_use]
    pub fn velocity(&self) -> &Vector {
        &self.velocity
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Applies gravity to velocity, integrates position, then clamps to
    /// the field with restitution: a component crossing a wall is pinned
    /// to the wall and its velocity reversed and scaled by
    /// [`RESTITUTION`].
    ///
    /// # Errors
    ///
    /// Propagates any [`VectorResult`] failure from the underlying
    /// arithmetic.
    pub fn step(&mut self, dt: f32) -> VectorResult<()> {
        let gravity = Vector::from_components([0.0, GRAVITY * dt]);
        let mut velocity = self.velocity.add(&gravity)?;

        let displacement = velocity.scaled(dt)?;
        let mut position = self.position.add(&displacement)?;

        {
            let p = position.as_mut_slice();
            let v = velocity.as_mut_slice();

            if p[0] <= 0.0 {
                p[0] = 0.0;
                v[0] *= -RESTITUTION;
            } else if p[0] >= FIELD_WIDTH {
                p[0] = FIELD_WIDTH;
                v[0] *= -RESTITUTION;
            }

            if p[1] <= 0.0 {
                p[1] = 0.0;
                v[1] *= -RESTITUTION;
                // A rebound weaker than one tick of gravity cannot leave
                // the ground; treat it as rest contact.
                if v[1].abs() < -GRAVITY * dt {
                    v[1] = 0.0;
                }
            } else if p[1] >= FIELD_HEIGHT {
                p[1] = FIELD_HEIGHT;
                v[1] *= -RESTITUTION;
            }
        }

        self.position = position;
        self.velocity = velocity;
        Ok(())
    }

    /// True once the ball rests on the ground with negligible vertical
    /// velocity.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.position[1] == 0.0 && self.velocity[1].abs() < REST_EPSILON
    }
}
