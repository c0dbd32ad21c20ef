//! # Phase Profiling
//!
//! Wall-clock timing of the three collision stages on a single step, used to
//! compare broad-phase methods as the population grows.

use std::time::{Duration, Instant};

use crate::body::Body;
use crate::collision::{detect_broad_phase, detect_narrow_phase, resolve_collisions, BroadPhaseMethod};
use crate::config::Range;
use crate::error::PhysicsError;
use crate::types::Vec3;

/// Population sizes swept by default.
pub const DEFAULT_COUNTS: [usize; 7] = [10, 30, 50, 100, 200, 500, 1000];

/// Time spent in each stage of one step, plus the pair counts it produced.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PhaseTimings {
    pub broad: Duration,
    pub narrow: Duration,
    pub resolve: Duration,
    pub candidates: usize,
    pub confirmed: usize,
}

impl PhaseTimings {
    #[must_use]
    pub fn total(&self) -> Duration {
        self.broad + self.narrow + self.resolve
    }
}

/// Run broad phase, narrow phase and response once on `bodies`, timing each.
///
/// Positions are not integrated.
///
/// # Errors
///
/// Propagates [`PhysicsError::UnsupportedMethod`] from the broad phase.
pub fn measure_step(
    bodies: &mut [Body],
    world_size: f32,
    method: BroadPhaseMethod,
) -> Result<PhaseTimings, PhysicsError> {
    let mut pairs = Vec::new();

    let start = Instant::now();
    detect_broad_phase(bodies, world_size, method, &mut pairs)?;
    let broad = start.elapsed();
    let candidates = pairs.len();

    let start = Instant::now();
    detect_narrow_phase(bodies, &mut pairs);
    let narrow = start.elapsed();

    let start = Instant::now();
    resolve_collisions(bodies, &pairs);
    let resolve = start.elapsed();

    let timings = PhaseTimings {
        broad,
        narrow,
        resolve,
        candidates,
        confirmed: pairs.len(),
    };
    tracing::debug!(
        %method,
        bodies = bodies.len(),
        broad_us = timings.broad.as_micros(),
        narrow_us = timings.narrow.as_micros(),
        resolve_us = timings.resolve.as_micros(),
        candidates,
        confirmed = timings.confirmed,
        "profiled step"
    );
    Ok(timings)
}

/// Build `count` identical-size spheres placed fully inside the world.
///
/// Each velocity component is uniform in `[-speed, speed]`.
pub fn populate(count: usize, radius: f32, speed: f32, mass: f32, world_size: f32, rng: &mut fastrand::Rng) -> Vec<Body> {
    let reach = (world_size - radius).max(0.0);
    let position = Range::new(-reach, reach);
    let velocity = Range::new(-speed, speed);

    (0..count)
        .zip(0_u32..)
        .map(|(_, id)| {
            let center = Vec3::new(position.sample(rng), position.sample(rng), position.sample(rng));
            let vel = Vec3::new(velocity.sample(rng), velocity.sample(rng), velocity.sample(rng));
            Body::new(id, center, radius, vel, mass)
        })
        .collect()
}
