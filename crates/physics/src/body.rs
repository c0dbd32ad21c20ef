//! The sphere body shared by every stage of the collision pipeline.

use crate::error::PhysicsError;
use crate::types::{Axis, Vec3};

/// A moving sphere.
///
/// `id` is stable for the lifetime of a simulation run. The pipeline itself
/// refers to bodies by their index in the caller's buffer; `id` is carried for
/// reporting and for renderers that track bodies across resets.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Body {
    pub id: u32,
    pub center: Vec3,
    pub radius: f32,
    pub velocity: Vec3,
    pub mass: f32,
}

impl Body {
    #[must_use]
    pub const fn new(id: u32, center: Vec3, radius: f32, velocity: Vec3, mass: f32) -> Self {
        Self {
            id,
            center,
            radius,
            velocity,
            mass,
        }
    }

    /// True if `point` lies inside or on the sphere.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        self.center.distance(point) <= self.radius
    }

    /// Exact sphere-sphere overlap test, inclusive of touching.
    #[must_use]
    pub fn intersects(&self, other: &Body) -> bool {
        self.center.distance(other.center) <= self.radius + other.radius
    }

    /// The `[min, max]` extent of the sphere projected onto `axis`.
    #[must_use]
    pub fn interval(&self, axis: Axis) -> (f32, f32) {
        let c = self.center.axis(axis);
        (c - self.radius, c + self.radius)
    }

    #[must_use]
    pub fn momentum(&self) -> Vec3 {
        self.velocity * self.mass
    }

    #[must_use]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Advance the center along the current velocity.
    pub fn integrate(&mut self, dt: f32) {
        self.center += self.velocity * dt;
    }

    /// Check the preconditions the collision stages assume but never verify.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidBody`] for a non-positive mass, a
    /// negative radius or any non-finite field.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let reason = if !(self.center.is_finite() && self.velocity.is_finite()) {
            Some("position and velocity must be finite")
        } else if !self.radius.is_finite() || self.radius < 0.0 {
            Some("radius must be finite and non-negative")
        } else if !self.mass.is_finite() || self.mass <= 0.0 {
            Some("mass must be finite and positive")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(PhysicsError::InvalidBody { id: self.id, reason }),
            None => Ok(()),
        }
    }
}

/// Byte view of a body buffer, laid out as tightly packed `f32`/`u32` fields,
/// for upload by an external renderer.
#[must_use]
pub fn as_bytes(bodies: &[Body]) -> &[u8] {
    bytemuck::cast_slice(bodies)
}
