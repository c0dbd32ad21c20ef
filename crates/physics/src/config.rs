//! # World Configuration
//!
//! Parameters for populating a [`World`](crate::World) with random spheres.
//! Configurations are plain JSON documents; every field is optional and falls
//! back to the values in [`WorldConfig::default`].
//!
//! ```json
//! {
//!     "num_spheres": 250,
//!     "radius": { "min": 0.25, "max": 1.0 },
//!     "world_size": 30.0,
//!     "method": "brute_force",
//!     "seed": 7
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::collision::BroadPhaseMethod;
use crate::error::PhysicsError;

/// Inclusive `[min, max]` range sampled uniformly.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Range containing the single value `v`.
    #[must_use]
    pub const fn fixed(v: f32) -> Self {
        Self::new(v, v)
    }

    #[must_use]
    pub fn sample(&self, rng: &mut fastrand::Rng) -> f32 {
        self.min + (self.max - self.min) * rng.f32()
    }

    fn is_ordered(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub num_spheres: usize,
    pub radius: Range,
    /// Sampled independently for each velocity component.
    pub velocity: Range,
    pub mass: Range,
    /// Half-extent of the cubic world centered at the origin.
    pub world_size: f32,
    pub method: BroadPhaseMethod,
    /// Fixed seed for reproducible populations; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            num_spheres: 100,
            radius: Range::new(0.5, 1.5),
            velocity: Range::new(-2.0, 2.0),
            mass: Range::new(1.0, 5.0),
            world_size: 20.0,
            method: BroadPhaseMethod::SweepAndPrune,
            seed: None,
        }
    }
}

impl WorldConfig {
    /// # Errors
    ///
    /// Returns [`PhysicsError::Json`] on malformed input and
    /// [`PhysicsError::InvalidConfig`] if the parsed values fail validation.
    pub fn from_json_str(json: &str) -> Result<Self, PhysicsError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// As [`WorldConfig::from_json_str`], plus [`PhysicsError::Io`] if the file
    /// cannot be read.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PhysicsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] describing the first problem
    /// found.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let invalid = |msg: &str| -> Result<(), PhysicsError> { Err(PhysicsError::InvalidConfig(msg.to_owned())) };

        if !(self.world_size.is_finite() && self.world_size > 0.0) {
            return invalid("world_size must be positive");
        }
        if !self.radius.is_ordered() || self.radius.min < 0.0 {
            return invalid("radius range must be ordered and non-negative");
        }
        if self.radius.max > self.world_size {
            return invalid("radius must not exceed world_size");
        }
        if !self.velocity.is_ordered() {
            return invalid("velocity range must be ordered");
        }
        if !self.mass.is_ordered() || self.mass.min <= 0.0 {
            return invalid("mass range must be ordered and positive");
        }
        if u32::try_from(self.num_spheres).is_err() {
            return invalid("num_spheres does not fit a body id");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = WorldConfig::from_json_str(r#"{ "num_spheres": 7, "method": "brute_force" }"#).unwrap();
        assert_eq!(config.num_spheres, 7);
        assert_eq!(config.method, BroadPhaseMethod::BruteForce);
        assert_eq!(config.world_size, WorldConfig::default().world_size);
    }

    #[test]
    fn rejects_non_positive_mass() {
        let err = WorldConfig::from_json_str(r#"{ "mass": { "min": 0.0, "max": 1.0 } }"#).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_inverted_range() {
        let config = WorldConfig {
            radius: Range::new(2.0, 1.0),
            ..WorldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(WorldConfig::from_json_str("{ num_spheres"), Err(PhysicsError::Json(_))));
    }

    #[test]
    fn range_samples_stay_inside() {
        let mut rng = fastrand::Rng::with_seed(3);
        let range = Range::new(-1.0, 2.0);
        for _ in 0..1000 {
            let v = range.sample(&mut rng);
            assert!((-1.0..=2.0).contains(&v));
        }
    }
}
