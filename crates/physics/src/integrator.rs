//! # Position Integration
//!
//! Bodies move in straight lines between collisions. There are no external
//! forces and no damping, so kinetic energy only changes in the responder.

use crate::body::Body;

/// Advance every body along its velocity with an explicit Euler step.
pub fn integrate_positions(bodies: &mut [Body], dt: f32) {
    for body in bodies.iter_mut() {
        body.integrate(dt);
    }
}
