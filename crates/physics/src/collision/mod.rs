//! # Collision Detection and Response
//!
//! The per-step pipeline is split into three stages that run strictly in
//! order, each consuming the previous stage's output:
//!
//! 1. [`detect_broad_phase`] reflects bodies off the world boundary and
//!    produces candidate pairs whose bounding boxes overlap.
//! 2. [`detect_narrow_phase`] keeps only the candidates whose spheres really
//!    overlap, using GJK.
//! 3. [`resolve_collisions`] exchanges velocities between confirmed pairs.
//!
//! Pairs are index pairs into the caller's body buffer. The buffer must not be
//! reordered or resized between stages of the same step.

mod broad_phase;
mod gjk;
mod response;

pub use broad_phase::*;
pub use gjk::*;
pub use response::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::body::Body;
use crate::boundary::reflect_at_boundary;
use crate::error::PhysicsError;

/// An unordered pair of body indices, stored canonically as `(low, high)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidatePair {
    first: usize,
    second: usize,
}

impl CandidatePair {
    /// Build the canonical pair for two distinct indices, in either order.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b, "a body cannot pair with itself");
        if a < b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// The lower index.
    #[must_use]
    pub const fn first(&self) -> usize {
        self.first
    }

    /// The higher index.
    #[must_use]
    pub const fn second(&self) -> usize {
        self.second
    }

    #[must_use]
    pub const fn indices(&self) -> (usize, usize) {
        (self.first, self.second)
    }
}

/// Strategy used to produce broad-phase candidates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadPhaseMethod {
    /// Per-axis interval sweeping, intersected over X, Y and Z.
    #[default]
    SweepAndPrune,
    /// Exact sphere test on every pair.
    BruteForce,
    /// Uniform grid. Reserved; selecting it is an error.
    Grid,
}

impl BroadPhaseMethod {
    pub const ALL: [BroadPhaseMethod; 3] = [
        BroadPhaseMethod::SweepAndPrune,
        BroadPhaseMethod::BruteForce,
        BroadPhaseMethod::Grid,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BroadPhaseMethod::SweepAndPrune => "sweep_and_prune",
            BroadPhaseMethod::BruteForce => "brute_force",
            BroadPhaseMethod::Grid => "grid",
        }
    }
}

impl fmt::Display for BroadPhaseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown broad-phase method `{0}` (expected sweep_and_prune, brute_force or grid)")]
pub struct ParseMethodError(String);

impl FromStr for BroadPhaseMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "sweep_and_prune" | "sap" => Ok(BroadPhaseMethod::SweepAndPrune),
            "brute_force" | "brute" => Ok(BroadPhaseMethod::BruteForce),
            "grid" => Ok(BroadPhaseMethod::Grid),
            _ => Err(ParseMethodError(s.to_owned())),
        }
    }
}

/// Reflect bodies off the world boundary, then collect broad-phase candidates.
///
/// `pairs` is always cleared first and, on success, holds the candidates in
/// ascending canonical order.
///
/// # Errors
///
/// Returns [`PhysicsError::UnsupportedMethod`] for [`BroadPhaseMethod::Grid`].
/// In that case no body is touched and `pairs` is left empty.
pub fn detect_broad_phase(
    bodies: &mut [Body],
    world_size: f32,
    method: BroadPhaseMethod,
    pairs: &mut Vec<CandidatePair>,
) -> Result<(), PhysicsError> {
    pairs.clear();
    let collect: fn(&[Body], &mut Vec<CandidatePair>) = match method {
        BroadPhaseMethod::SweepAndPrune => sweep_and_prune,
        BroadPhaseMethod::BruteForce => brute_force,
        BroadPhaseMethod::Grid => return Err(PhysicsError::UnsupportedMethod(method)),
    };

    reflect_at_boundary(bodies, world_size);
    collect(bodies, pairs);
    tracing::debug!(%method, bodies = bodies.len(), candidates = pairs.len(), "broad phase");
    Ok(())
}

/// Drop every candidate whose spheres do not actually overlap.
///
/// The relative order of the surviving pairs is preserved.
pub fn detect_narrow_phase(bodies: &[Body], pairs: &mut Vec<CandidatePair>) {
    let candidates = pairs.len();
    pairs.retain(|pair| gjk_intersect(&bodies[pair.first], &bodies[pair.second]));
    tracing::debug!(candidates, confirmed = pairs.len(), "narrow phase");
}
